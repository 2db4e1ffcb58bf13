//! Grid topologies for square and hexagonal tilings.
//!
//! This crate models a two-dimensional tiling as three interlocking families
//! of addressable elements — cells, walls, and vertices — and answers the
//! incidence and adjacency questions among them. It takes no position on
//! geometry: no pixel sizes, no screen coordinates, no rendering. A drawing
//! or maze layer attaches those later.
//!
//! # Backends
//!
//! - [`square::SquareGrid`]: square cells, 4 walls/neighbours per cell
//! - [`hex::HexGrid`]: flat hexagonal cells in offset columns (odd columns
//!   sit half a cell lower), 6 walls/neighbours per cell
//!
//! Both implement [`Tiling`], the seam a consumer generic over the cell
//! shape programs against.
//!
//! # Addressing
//!
//! Every wall and vertex has exactly one canonical id, derived from the
//! position of a designated adjacent cell. Ids at the grid boundary may name
//! a *phantom* cell — a position outside the grid used purely for naming.
//! Relationship queries distinguish "this element lies outside the grid"
//! (an absent `Option`) from "this id was never materialized" (a
//! [`GridError::NotFound`](tesela_core::GridError) on direct lookup); a
//! malformed direction label is unrepresentable, since every label is a
//! closed enum.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hex;
pub mod square;
pub mod tiling;

#[cfg(test)]
pub(crate) mod compliance;

pub use tiling::Tiling;
