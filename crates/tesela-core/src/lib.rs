//! Core types for the tesela grid-topology crates.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every tiling backend: the [`Pos`] coordinate pair,
//! the [`End`] wall-slot label, and the [`GridError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pos;

pub use error::{ElementKind, GridError};
pub use pos::{End, Pos};
