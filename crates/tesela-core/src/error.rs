//! Error types for grid construction and direct lookups.

use std::error::Error;
use std::fmt;

/// The three families of addressable elements in a tiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// A tile of the grid.
    Cell,
    /// An edge between two cells (or one cell and a phantom).
    Wall,
    /// A corner point where walls meet.
    Vertex,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell => write!(f, "cell"),
            Self::Wall => write!(f, "wall"),
            Self::Vertex => write!(f, "vertex"),
        }
    }
}

/// Errors from grid construction or direct element lookup.
///
/// Boundary conditions are *not* errors: a relationship query whose target
/// lies outside the grid reports absence through `Option`, and direction
/// labels are closed enums, so a malformed direction cannot be expressed at
/// all. What remains is rejected dimensions at construction and direct
/// lookups of ids the grid never materialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid was requested with zero rows or zero columns.
    InvalidDimension,
    /// A dimension exceeds what the `i32` coordinate space can address.
    DimensionTooLarge {
        /// Which dimension overflowed, `"rows"` or `"cols"`.
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A direct lookup named an id with no stored element.
    ///
    /// The id may be a phantom (a well-formed boundary name) or simply
    /// malformed; the two are distinguishable only by caller context.
    NotFound {
        /// Which element family was looked up.
        element: ElementKind,
        /// The offending id, rendered.
        id: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension => {
                write!(f, "grid must have at least one row and one column")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds the maximum of {max}")
            }
            Self::NotFound { element, id } => {
                write!(f, "no {element} stored at {id}")
            }
        }
    }
}

impl Error for GridError {}
