//! The core [`Tiling`] trait.

use tesela_core::Pos;

/// Shape-independent view of a grid's extent and element counts.
///
/// Concrete backends ([`SquareGrid`](crate::square::SquareGrid),
/// [`HexGrid`](crate::hex::HexGrid)) implement it to define their topology.
/// Code that only needs sizes and membership — bounds checks, progress
/// reporting, capacity planning in a maze or drawing layer — can work with
/// `&dyn Tiling` and stay agnostic of the cell shape.
///
/// Shape-specific queries (walls of a cell, continuations of a wall) live on
/// each backend's handle types, where the direction labels are closed enums
/// of the right arity.
pub trait Tiling {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// Number of cells; always `rows * cols`.
    fn cell_count(&self) -> usize;

    /// Number of materialized walls.
    fn wall_count(&self) -> usize;

    /// Number of materialized vertices.
    fn vertex_count(&self) -> usize;

    /// Whether `pos` names a real cell of this grid.
    ///
    /// Positions outside the extent are valid *identifiers* (they may name
    /// phantom cells in wall/vertex ids) but are never members.
    fn contains(&self, pos: Pos) -> bool;

    /// Walls bounding each cell: 4 for squares, 6 for hexagons.
    fn sides_per_cell(&self) -> usize;
}
