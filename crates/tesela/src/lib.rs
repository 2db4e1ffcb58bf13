//! Topological substrate for square and hexagonal tilings.
//!
//! tesela models a two-dimensional tiling as three interlocking families of
//! addressable elements — cells, walls, and vertices — and answers the
//! adjacency and incidence questions among them without committing to any
//! coordinate geometry, pixel size, or rendering strategy. Drawing, maze
//! generation, and pathfinding layers attach geometry and state on top.
//!
//! This facade re-exports the whole public surface:
//!
//! - [`Pos`], [`End`], [`GridError`] from `tesela-core`
//! - [`Tiling`] and the [`square`] and [`hex`] backends from `tesela-grid`
//!
//! # Examples
//!
//! ```
//! use tesela::hex::{HexGrid, Side};
//! use tesela::Tiling;
//!
//! let grid = HexGrid::new(3, 3)?;
//! assert_eq!(grid.cell_count(), 9);
//!
//! // Walking south-east and back north-west lands on the start cell.
//! let start = grid.cell((0, 0))?;
//! let next = start.neighbor(Side::SouthEast).unwrap();
//! assert_eq!(next.neighbor(Side::NorthWest), Some(start));
//! # Ok::<(), tesela::GridError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use tesela_core::{ElementKind, End, GridError, Pos};
pub use tesela_grid::{hex, square, Tiling};
