//! Square tiling: grid, handles, and addressing rules.
//!
//! Walls are canonically named by the cell south or east of them: a wall id
//! is `(Pos, WallKind)` where [`WallKind::North`] is the wall above that cell
//! and [`WallKind::West`] the wall to its left. A vertex id is the [`Pos`] of
//! the cell to its south-east. Boundary elements borrow a phantom cell
//! position for their name; the phantom cell itself is never materialized.

use crate::tiling::Tiling;
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::fmt;
use std::ptr;
use tesela_core::{ElementKind, End, GridError, Pos};

/// Relative direction of a wall or neighbour from a cell, and of an incident
/// wall from a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Toward the row above.
    North,
    /// Toward the column to the right.
    East,
    /// Toward the row below.
    South,
    /// Toward the column to the left.
    West,
}

impl Side {
    /// All four sides, in `N`, `E`, `S`, `W` order. Bulk queries return
    /// their results in this order.
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// The side pointing the opposite way.
    pub const fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::North => write!(f, "N"),
            Side::East => write!(f, "E"),
            Side::South => write!(f, "S"),
            Side::West => write!(f, "W"),
        }
    }
}

/// Relative direction of a bounding vertex from a cell, and of an adjacent
/// cell from a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Upper-left.
    NorthWest,
    /// Upper-right.
    NorthEast,
    /// Lower-right.
    SouthEast,
    /// Lower-left.
    SouthWest,
}

impl Corner {
    /// All four corners, in `NW`, `NE`, `SE`, `SW` order.
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthEast,
        Corner::SouthWest,
    ];
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::NorthWest => write!(f, "NW"),
            Corner::NorthEast => write!(f, "NE"),
            Corner::SouthEast => write!(f, "SE"),
            Corner::SouthWest => write!(f, "SW"),
        }
    }
}

/// Which wall of its naming cell a wall id denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallKind {
    /// The horizontal wall above the naming cell.
    North,
    /// The vertical wall to the left of the naming cell.
    West,
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallKind::North => write!(f, "N"),
            WallKind::West => write!(f, "W"),
        }
    }
}

/// Canonical id of a wall: the naming cell's position plus the wall kind.
///
/// A wall shared by two real cells has exactly one id (the southern or
/// eastern cell names it); a boundary wall's id may reference a phantom
/// position outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WallId {
    /// Position of the naming cell (possibly phantom).
    pub pos: Pos,
    /// Which wall of the naming cell.
    pub kind: WallKind,
}

impl WallId {
    /// Create a wall id from a naming-cell position and a kind.
    pub const fn new(pos: Pos, kind: WallKind) -> Self {
        Self { pos, kind }
    }
}

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pos, self.kind)
    }
}

/// Label of a continuation wall: one of the three walls meeting each
/// endpoint of a wall.
///
/// Standing on an endpoint with the wall at your back, the continuations
/// ahead are left, center, and right. `A*` labels continue from endpoint A,
/// `B*` from endpoint B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Left continuation at endpoint A.
    ALeft,
    /// Center continuation at endpoint A.
    ACenter,
    /// Right continuation at endpoint A.
    ARight,
    /// Left continuation at endpoint B.
    BLeft,
    /// Center continuation at endpoint B.
    BCenter,
    /// Right continuation at endpoint B.
    BRight,
}

impl Continuation {
    /// All six labels, A-side first.
    pub const ALL: [Continuation; 6] = [
        Continuation::ALeft,
        Continuation::ACenter,
        Continuation::ARight,
        Continuation::BLeft,
        Continuation::BCenter,
        Continuation::BRight,
    ];

    /// The wall endpoint this continuation shares.
    pub const fn end(self) -> End {
        match self {
            Continuation::ALeft | Continuation::ACenter | Continuation::ARight => End::A,
            Continuation::BLeft | Continuation::BCenter | Continuation::BRight => End::B,
        }
    }
}

// ── Addressing rules ────────────────────────────────────────────
//
// Pure id derivations with no grid-size dependency. Membership of a derived
// id is always decided by the registry, never here.

/// Id of the wall bounding `cell` on `side`.
fn cell_wall(cell: Pos, side: Side) -> WallId {
    match side {
        Side::North => WallId::new(cell, WallKind::North),
        Side::East => WallId::new(cell.offset(0, 1), WallKind::West),
        Side::South => WallId::new(cell.offset(1, 0), WallKind::North),
        Side::West => WallId::new(cell, WallKind::West),
    }
}

/// Position of the cell adjacent to `cell` on `side`.
fn cell_neighbor(cell: Pos, side: Side) -> Pos {
    match side {
        Side::North => cell.offset(-1, 0),
        Side::East => cell.offset(0, 1),
        Side::South => cell.offset(1, 0),
        Side::West => cell.offset(0, -1),
    }
}

/// Id of the vertex at `corner` of `cell`.
fn cell_vertex(cell: Pos, corner: Corner) -> Pos {
    match corner {
        Corner::NorthWest => cell,
        Corner::NorthEast => cell.offset(0, 1),
        Corner::SouthEast => cell.offset(1, 1),
        Corner::SouthWest => cell.offset(1, 0),
    }
}

/// Id of the vertex at `end` of the wall `id`.
///
/// A is the upper endpoint of a vertical wall and the left endpoint of a
/// horizontal one.
fn wall_endpoint(id: WallId, end: End) -> Pos {
    match (id.kind, end) {
        (WallKind::North, End::A) | (WallKind::West, End::A) => id.pos,
        (WallKind::North, End::B) => id.pos.offset(0, 1),
        (WallKind::West, End::B) => id.pos.offset(1, 0),
    }
}

/// Position of the cell flanking the wall `id` on `end`.
///
/// A is the cell above a horizontal wall and left of a vertical one; B is
/// always the naming cell.
fn wall_flank(id: WallId, end: End) -> Pos {
    match (id.kind, end) {
        (WallKind::North, End::A) => id.pos.offset(-1, 0),
        (WallKind::West, End::A) => id.pos.offset(0, -1),
        (_, End::B) => id.pos,
    }
}

/// Id of the continuation wall of `id` at `label`.
fn wall_continuation(id: WallId, label: Continuation) -> WallId {
    let p = id.pos;
    match (id.kind, label) {
        (WallKind::North, Continuation::ALeft) => WallId::new(p, WallKind::West),
        (WallKind::North, Continuation::ACenter) => WallId::new(p.offset(0, -1), WallKind::North),
        (WallKind::North, Continuation::ARight) => WallId::new(p.offset(-1, 0), WallKind::West),
        (WallKind::North, Continuation::BLeft) => WallId::new(p.offset(-1, 1), WallKind::West),
        (WallKind::North, Continuation::BCenter) => WallId::new(p.offset(0, 1), WallKind::North),
        (WallKind::North, Continuation::BRight) => WallId::new(p.offset(0, 1), WallKind::West),
        (WallKind::West, Continuation::ALeft) => WallId::new(p.offset(0, -1), WallKind::North),
        (WallKind::West, Continuation::ACenter) => WallId::new(p.offset(-1, 0), WallKind::West),
        (WallKind::West, Continuation::ARight) => WallId::new(p, WallKind::North),
        (WallKind::West, Continuation::BLeft) => WallId::new(p.offset(1, 0), WallKind::North),
        (WallKind::West, Continuation::BCenter) => WallId::new(p.offset(1, 0), WallKind::West),
        (WallKind::West, Continuation::BRight) => WallId::new(p.offset(1, -1), WallKind::North),
    }
}

/// Id of the wall meeting vertex `v` on `side`.
fn vertex_wall(v: Pos, side: Side) -> WallId {
    match side {
        Side::North => WallId::new(v.offset(-1, 0), WallKind::West),
        Side::East => WallId::new(v, WallKind::North),
        Side::South => WallId::new(v, WallKind::West),
        Side::West => WallId::new(v.offset(0, -1), WallKind::North),
    }
}

/// Position of the cell touching vertex `v` at `corner`.
fn vertex_cell(v: Pos, corner: Corner) -> Pos {
    match corner {
        Corner::NorthWest => v.offset(-1, -1),
        Corner::NorthEast => v.offset(-1, 0),
        Corner::SouthEast => v,
        Corner::SouthWest => v.offset(0, -1),
    }
}

// ── Grid ────────────────────────────────────────────────────────

/// A grid of square cells.
///
/// Construction enumerates every cell of the `rows × cols` rectangle and
/// registers each cell's bounding walls and vertices exactly once; an id
/// reached from two cells resolves to the same stored element. After
/// construction the grid is immutable and every query is read-only.
///
/// # Examples
///
/// ```
/// use tesela_grid::square::{Side, SquareGrid};
/// use tesela_grid::Tiling;
///
/// let grid = SquareGrid::new(2, 2).unwrap();
/// assert_eq!(grid.cell_count(), 4);
/// assert_eq!(grid.wall_count(), 12);
/// assert_eq!(grid.vertex_count(), 9);
///
/// let cell = grid.cell((0, 0)).unwrap();
/// assert_eq!(cell.neighbor(Side::South), grid.cell((1, 0)).ok());
/// assert!(cell.neighbor(Side::North).is_none()); // boundary
/// ```
#[derive(Clone)]
pub struct SquareGrid {
    rows: u32,
    cols: u32,
    cells: IndexSet<Pos>,
    walls: IndexSet<WallId>,
    vertices: IndexSet<Pos>,
}

impl SquareGrid {
    /// Maximum dimension size: coordinates use `i32`, and phantom naming
    /// reaches two steps past the extent.
    pub const MAX_DIM: u32 = i32::MAX as u32 - 2;

    /// Create a grid with `rows * cols` cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if either dimension is 0, or
    /// [`GridError::DimensionTooLarge`] if either exceeds [`Self::MAX_DIM`].
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }

        let (r, c) = (rows as usize, cols as usize);
        let mut cells = IndexSet::with_capacity(r * c);
        let mut walls = IndexSet::with_capacity(r * (c + 1) + c * (r + 1));
        let mut vertices = IndexSet::with_capacity((r + 1) * (c + 1));

        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                let pos = Pos::new(row, col);
                cells.insert(pos);
                for side in Side::ALL {
                    walls.insert(cell_wall(pos, side));
                }
                for corner in Corner::ALL {
                    vertices.insert(cell_vertex(pos, corner));
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            cells,
            walls,
            vertices,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Always returns `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Look up the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotFound`] if `pos` lies outside the grid.
    pub fn cell(&self, pos: impl Into<Pos>) -> Result<Cell<'_>, GridError> {
        let pos = pos.into();
        self.cell_at(pos).ok_or_else(|| GridError::NotFound {
            element: ElementKind::Cell,
            id: pos.to_string(),
        })
    }

    /// Look up the wall with the canonical id `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotFound`] if no such wall was materialized —
    /// either the id is malformed or it names a phantom wall no real cell
    /// touches.
    pub fn wall(&self, id: WallId) -> Result<Wall<'_>, GridError> {
        self.wall_at(id).ok_or_else(|| GridError::NotFound {
            element: ElementKind::Wall,
            id: id.to_string(),
        })
    }

    /// Look up the vertex with the canonical id `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotFound`] if no such vertex was materialized.
    pub fn vertex(&self, id: impl Into<Pos>) -> Result<Vertex<'_>, GridError> {
        let id = id.into();
        self.vertex_at(id).ok_or_else(|| GridError::NotFound {
            element: ElementKind::Vertex,
            id: id.to_string(),
        })
    }

    /// All cells, in construction (row-major) order.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        self.cells.iter().map(move |&pos| Cell { grid: self, pos })
    }

    /// All walls, in first-discovery order.
    pub fn walls(&self) -> impl Iterator<Item = Wall<'_>> {
        self.walls.iter().map(move |&id| Wall { grid: self, id })
    }

    /// All vertices, in first-discovery order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex<'_>> {
        self.vertices.iter().map(move |&id| Vertex { grid: self, id })
    }

    /// Ids of all cells, in construction order. Stable for the grid's
    /// lifetime: nothing is inserted after construction.
    pub fn cell_ids(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().copied()
    }

    /// Ids of all walls, in first-discovery order.
    pub fn wall_ids(&self) -> impl Iterator<Item = WallId> + '_ {
        self.walls.iter().copied()
    }

    /// Ids of all vertices, in first-discovery order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = Pos> + '_ {
        self.vertices.iter().copied()
    }

    /// The cells of row `row`, ordered by column ascending.
    ///
    /// Empty if `row` is out of range; that is a boundary, not an error.
    pub fn cells_in_row(&self, row: u32) -> Vec<Cell<'_>> {
        if row >= self.rows {
            return Vec::new();
        }
        (0..self.cols as i32)
            .map(|c| Cell {
                grid: self,
                pos: Pos::new(row as i32, c),
            })
            .collect()
    }

    /// The cells of column `col`, ordered by row ascending.
    ///
    /// Empty if `col` is out of range.
    pub fn cells_in_column(&self, col: u32) -> Vec<Cell<'_>> {
        if col >= self.cols {
            return Vec::new();
        }
        (0..self.rows as i32)
            .map(|f| Cell {
                grid: self,
                pos: Pos::new(f, col as i32),
            })
            .collect()
    }

    fn cell_at(&self, pos: Pos) -> Option<Cell<'_>> {
        self.cells
            .contains(&pos)
            .then(|| Cell { grid: self, pos })
    }

    fn wall_at(&self, id: WallId) -> Option<Wall<'_>> {
        self.walls.contains(&id).then(|| Wall { grid: self, id })
    }

    fn vertex_at(&self, id: Pos) -> Option<Vertex<'_>> {
        self.vertices
            .contains(&id)
            .then(|| Vertex { grid: self, id })
    }
}

impl Tiling for SquareGrid {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn wall_count(&self) -> usize {
        self.walls.len()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    fn sides_per_cell(&self) -> usize {
        4
    }
}

impl fmt::Debug for SquareGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SquareGrid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for SquareGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "square grid with {} rows and {} columns",
            self.rows, self.cols
        )
    }
}

// ── Handles ─────────────────────────────────────────────────────

/// A cell of a [`SquareGrid`].
///
/// A lightweight handle borrowing the grid; relationship queries derive the
/// candidate id and resolve it through the grid's registry. Two handles are
/// equal only if they come from the same grid instance and name the same
/// element.
#[derive(Clone, Copy)]
pub struct Cell<'g> {
    grid: &'g SquareGrid,
    pos: Pos,
}

impl<'g> Cell<'g> {
    /// The grid this cell belongs to.
    pub fn grid(self) -> &'g SquareGrid {
        self.grid
    }

    /// The cell's position.
    pub fn pos(self) -> Pos {
        self.pos
    }

    /// The cell's row.
    pub fn row(self) -> i32 {
        self.pos.row
    }

    /// The cell's column.
    pub fn col(self) -> i32 {
        self.pos.col
    }

    /// The wall bounding this cell on `side`.
    ///
    /// Every bounding wall of a real cell exists, boundary or not.
    pub fn wall(self, side: Side) -> Wall<'g> {
        let id = cell_wall(self.pos, side);
        debug_assert!(self.grid.walls.contains(&id));
        Wall {
            grid: self.grid,
            id,
        }
    }

    /// All four bounding walls, in [`Side::ALL`] order.
    pub fn walls(self) -> [Wall<'g>; 4] {
        Side::ALL.map(|side| self.wall(side))
    }

    /// The neighbouring cell on `side`, or `None` at the grid boundary.
    pub fn neighbor(self, side: Side) -> Option<Cell<'g>> {
        self.grid.cell_at(cell_neighbor(self.pos, side))
    }

    /// All four neighbour slots, in [`Side::ALL`] order; boundary slots are
    /// `None`.
    pub fn neighbors(self) -> [Option<Cell<'g>>; 4] {
        Side::ALL.map(|side| self.neighbor(side))
    }

    /// The neighbours that exist, in [`Side::ALL`] order.
    pub fn neighbors_present(self) -> SmallVec<[Cell<'g>; 4]> {
        Side::ALL
            .iter()
            .filter_map(|&side| self.neighbor(side))
            .collect()
    }

    /// The vertex at `corner` of this cell. Always present.
    pub fn vertex(self, corner: Corner) -> Vertex<'g> {
        let id = cell_vertex(self.pos, corner);
        debug_assert!(self.grid.vertices.contains(&id));
        Vertex {
            grid: self.grid,
            id,
        }
    }

    /// All four bounding vertices, in [`Corner::ALL`] order.
    pub fn vertices(self) -> [Vertex<'g>; 4] {
        Corner::ALL.map(|corner| self.vertex(corner))
    }
}

impl PartialEq for Cell<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.grid, other.grid) && self.pos == other.pos
    }
}

impl Eq for Cell<'_> {}

impl fmt::Debug for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cell").field(&self.pos).finish()
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell {}", self.pos)
    }
}

/// A wall of a [`SquareGrid`].
#[derive(Clone, Copy)]
pub struct Wall<'g> {
    grid: &'g SquareGrid,
    id: WallId,
}

impl<'g> Wall<'g> {
    /// The grid this wall belongs to.
    pub fn grid(self) -> &'g SquareGrid {
        self.grid
    }

    /// The wall's canonical id.
    pub fn id(self) -> WallId {
        self.id
    }

    /// Whether the wall is horizontal (`North`) or vertical (`West`).
    pub fn kind(self) -> WallKind {
        self.id.kind
    }

    /// The vertex at `end` of this wall.
    ///
    /// Both endpoints of a materialized wall are always materialized too.
    pub fn endpoint(self, end: End) -> Vertex<'g> {
        let id = wall_endpoint(self.id, end);
        debug_assert!(self.grid.vertices.contains(&id));
        Vertex {
            grid: self.grid,
            id,
        }
    }

    /// Both endpoint vertices, in `A`, `B` order.
    pub fn endpoints(self) -> [Vertex<'g>; 2] {
        End::ALL.map(|end| self.endpoint(end))
    }

    /// The cell flanking this wall on `end`, or `None` if that side is
    /// outside the grid.
    pub fn cell(self, end: End) -> Option<Cell<'g>> {
        self.grid.cell_at(wall_flank(self.id, end))
    }

    /// Both flanking cell slots, in `A`, `B` order.
    pub fn cells(self) -> [Option<Cell<'g>>; 2] {
        End::ALL.map(|end| self.cell(end))
    }

    /// Whether this wall lies on the grid boundary (one flank absent).
    pub fn is_boundary(self) -> bool {
        self.cells().iter().any(Option::is_none)
    }

    /// The continuation wall at `label`, or `None` if it lies outside the
    /// grid.
    pub fn continuation(self, label: Continuation) -> Option<Wall<'g>> {
        self.grid.wall_at(wall_continuation(self.id, label))
    }

    /// All six continuation slots, in [`Continuation::ALL`] order.
    pub fn continuations(self) -> [Option<Wall<'g>>; 6] {
        Continuation::ALL.map(|label| self.continuation(label))
    }
}

impl PartialEq for Wall<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.grid, other.grid) && self.id == other.id
    }
}

impl Eq for Wall<'_> {}

impl fmt::Debug for Wall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Wall").field(&self.id.pos).field(&self.id.kind).finish()
    }
}

impl fmt::Display for Wall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wall {}", self.id)
    }
}

/// A vertex of a [`SquareGrid`].
#[derive(Clone, Copy)]
pub struct Vertex<'g> {
    grid: &'g SquareGrid,
    id: Pos,
}

impl<'g> Vertex<'g> {
    /// The grid this vertex belongs to.
    pub fn grid(self) -> &'g SquareGrid {
        self.grid
    }

    /// The vertex's canonical id: the position of the cell to its
    /// south-east.
    pub fn id(self) -> Pos {
        self.id
    }

    /// The wall meeting this vertex on `side`, or `None` if it lies outside
    /// the grid.
    pub fn wall(self, side: Side) -> Option<Wall<'g>> {
        self.grid.wall_at(vertex_wall(self.id, side))
    }

    /// All four incident wall slots, in [`Side::ALL`] order.
    pub fn walls(self) -> [Option<Wall<'g>>; 4] {
        Side::ALL.map(|side| self.wall(side))
    }

    /// The cell touching this vertex at `corner`, or `None` if it lies
    /// outside the grid.
    pub fn cell(self, corner: Corner) -> Option<Cell<'g>> {
        self.grid.cell_at(vertex_cell(self.id, corner))
    }

    /// All four adjacent cell slots, in [`Corner::ALL`] order.
    pub fn cells(self) -> [Option<Cell<'g>>; 4] {
        Corner::ALL.map(|corner| self.cell(corner))
    }
}

impl PartialEq for Vertex<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.grid, other.grid) && self.id == other.id
    }
}

impl Eq for Vertex<'_> {}

impl fmt::Debug for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vertex").field(&self.id).finish()
    }
}

impl fmt::Display for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex {}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn grid(rows: u32, cols: u32) -> SquareGrid {
        SquareGrid::new(rows, cols).unwrap()
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_rows_returns_error() {
        assert_eq!(
            SquareGrid::new(0, 5).unwrap_err(),
            GridError::InvalidDimension
        );
    }

    #[test]
    fn new_zero_cols_returns_error() {
        assert_eq!(
            SquareGrid::new(5, 0).unwrap_err(),
            GridError::InvalidDimension
        );
    }

    #[test]
    fn new_rejects_dims_exceeding_max() {
        let big = SquareGrid::MAX_DIM + 1;
        assert!(matches!(
            SquareGrid::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            SquareGrid::new(5, big),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    // ── Count tests ─────────────────────────────────────────────

    #[test]
    fn counts_2x2() {
        let g = grid(2, 2);
        assert_eq!(g.cell_count(), 4);
        assert_eq!(g.wall_count(), 12);
        assert_eq!(g.vertex_count(), 9);
    }

    #[test]
    fn counts_1x1() {
        let g = grid(1, 1);
        assert_eq!(g.cell_count(), 1);
        assert_eq!(g.wall_count(), 4);
        assert_eq!(g.vertex_count(), 4);
    }

    #[test]
    fn counts_match_closed_form() {
        for (r, c) in [(1, 1), (2, 3), (3, 2), (4, 4), (5, 1), (1, 5)] {
            let g = grid(r, c);
            let (ru, cu) = (r as usize, c as usize);
            compliance::assert_extent_consistent(&g);
            compliance::assert_counts(&g, ru * (cu + 1) + cu * (ru + 1), (ru + 1) * (cu + 1));
        }
    }

    // ── Addressing idempotence ──────────────────────────────────

    #[test]
    fn shared_wall_has_one_id() {
        let g = grid(3, 3);
        let a = g.cell((1, 1)).unwrap();
        let east = a.neighbor(Side::East).unwrap();
        assert_eq!(a.wall(Side::East).id(), east.wall(Side::West).id());
        let south = a.neighbor(Side::South).unwrap();
        assert_eq!(a.wall(Side::South).id(), south.wall(Side::North).id());
    }

    #[test]
    fn shared_vertex_has_one_id() {
        let g = grid(3, 3);
        let a = g.cell((0, 0)).unwrap();
        let d = g.cell((1, 1)).unwrap();
        // SE corner of (0,0) is the NW corner of (1,1).
        assert_eq!(a.vertex(Corner::SouthEast), d.vertex(Corner::NorthWest));
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = grid(3, 3);
        let cell = g.cell((1, 1)).unwrap();
        assert_eq!(cell.neighbor(Side::North), g.cell((0, 1)).ok());
        assert_eq!(cell.neighbor(Side::East), g.cell((1, 2)).ok());
        assert_eq!(cell.neighbor(Side::South), g.cell((2, 1)).ok());
        assert_eq!(cell.neighbor(Side::West), g.cell((1, 0)).ok());
        assert_eq!(cell.neighbors_present().len(), 4);
    }

    #[test]
    fn neighbours_corner() {
        let g = grid(3, 3);
        let cell = g.cell((0, 0)).unwrap();
        assert!(cell.neighbor(Side::North).is_none());
        assert!(cell.neighbor(Side::West).is_none());
        assert_eq!(cell.neighbors_present().len(), 2);
    }

    #[test]
    fn boundary_rows_and_columns() {
        let g = grid(3, 3);
        for c in 0..3 {
            assert!(g.cell((0, c)).unwrap().neighbor(Side::North).is_none());
            assert!(g.cell((2, c)).unwrap().neighbor(Side::South).is_none());
        }
        for f in 0..3 {
            assert!(g.cell((f, 0)).unwrap().neighbor(Side::West).is_none());
            assert!(g.cell((f, 2)).unwrap().neighbor(Side::East).is_none());
        }
    }

    // ── Wall tests ──────────────────────────────────────────────

    #[test]
    fn wall_between_neighbours_flanks_both() {
        let g = grid(3, 3);
        let cell = g.cell((1, 1)).unwrap();
        for side in Side::ALL {
            let wall = cell.wall(side);
            let neighbor = cell.neighbor(side).unwrap();
            let flanks = wall.cells();
            assert!(flanks.contains(&Some(cell)), "{side}");
            assert!(flanks.contains(&Some(neighbor)), "{side}");
        }
    }

    #[test]
    fn north_wall_flank_a_is_absent_at_row_zero() {
        let g = grid(2, 2);
        let wall = g.cell((0, 0)).unwrap().wall(Side::North);
        assert!(wall.cell(End::A).is_none());
        assert_eq!(wall.cell(End::B), g.cell((0, 0)).ok());
        assert!(wall.is_boundary());
    }

    #[test]
    fn interior_wall_is_not_boundary() {
        let g = grid(2, 2);
        let wall = g.cell((0, 0)).unwrap().wall(Side::South);
        assert!(!wall.is_boundary());
    }

    #[test]
    fn wall_endpoints() {
        let g = grid(2, 2);
        let north = g.cell((1, 1)).unwrap().wall(Side::North);
        assert_eq!(north.endpoint(End::A).id(), Pos::new(1, 1));
        assert_eq!(north.endpoint(End::B).id(), Pos::new(1, 2));
        let west = g.cell((1, 1)).unwrap().wall(Side::West);
        assert_eq!(west.endpoint(End::A).id(), Pos::new(1, 1));
        assert_eq!(west.endpoint(End::B).id(), Pos::new(2, 1));
    }

    #[test]
    fn continuations_interior_all_present() {
        let g = grid(4, 4);
        let wall = g.cell((2, 2)).unwrap().wall(Side::North);
        let continuations = wall.continuations();
        assert!(continuations.iter().all(Option::is_some));
        // Worked example from the naming rules: the A-left continuation of a
        // north wall is the west wall of the same naming cell.
        assert_eq!(
            wall.continuation(Continuation::ALeft).unwrap().id(),
            WallId::new(Pos::new(2, 2), WallKind::West)
        );
    }

    #[test]
    fn continuations_at_corner_partially_absent() {
        let g = grid(2, 2);
        // North wall of (0,0): at its endpoint A=(0,0) only the south wall
        // of the vertex is materialized.
        let wall = g.cell((0, 0)).unwrap().wall(Side::North);
        assert!(wall.continuation(Continuation::ARight).is_none()); // ((-1,0),W)
        assert!(wall.continuation(Continuation::ALeft).is_some()); // ((0,0),W)
        assert!(wall.continuation(Continuation::ACenter).is_none()); // ((0,-1),N)
    }

    // ── Vertex tests ────────────────────────────────────────────

    #[test]
    fn vertex_walls_at_origin_of_1x1() {
        let g = grid(1, 1);
        let v = g.vertex((0, 0)).unwrap();
        assert!(v.wall(Side::North).is_none());
        assert!(v.wall(Side::West).is_none());
        assert_eq!(
            v.wall(Side::East).unwrap().id(),
            WallId::new(Pos::new(0, 0), WallKind::North)
        );
        assert_eq!(
            v.wall(Side::South).unwrap().id(),
            WallId::new(Pos::new(0, 0), WallKind::West)
        );
    }

    #[test]
    fn vertex_cells_interior() {
        let g = grid(3, 3);
        let v = g.vertex((1, 1)).unwrap();
        assert_eq!(v.cell(Corner::NorthWest), g.cell((0, 0)).ok());
        assert_eq!(v.cell(Corner::NorthEast), g.cell((0, 1)).ok());
        assert_eq!(v.cell(Corner::SouthEast), g.cell((1, 1)).ok());
        assert_eq!(v.cell(Corner::SouthWest), g.cell((1, 0)).ok());
    }

    #[test]
    fn vertex_cells_at_boundary_are_absent() {
        let g = grid(2, 2);
        let v = g.vertex((0, 0)).unwrap();
        assert!(v.cell(Corner::NorthWest).is_none());
        assert!(v.cell(Corner::NorthEast).is_none());
        assert!(v.cell(Corner::SouthWest).is_none());
        assert_eq!(v.cell(Corner::SouthEast), g.cell((0, 0)).ok());
    }

    // ── Lookup tests ────────────────────────────────────────────

    #[test]
    fn lookup_outside_grid_is_not_found() {
        let g = grid(2, 2);
        assert!(matches!(
            g.cell((2, 0)),
            Err(GridError::NotFound { element: ElementKind::Cell, .. })
        ));
        // Phantom wall id: the N wall of phantom cell (0,-1) touches no
        // real cell, so it was never materialized.
        assert!(matches!(
            g.wall(WallId::new(Pos::new(0, -1), WallKind::North)),
            Err(GridError::NotFound { element: ElementKind::Wall, .. })
        ));
        assert!(matches!(
            g.vertex((3, 0)),
            Err(GridError::NotFound { element: ElementKind::Vertex, .. })
        ));
    }

    #[test]
    fn boundary_wall_named_by_phantom_cell_is_found() {
        let g = grid(2, 2);
        // South wall of the last row is named by phantom cell (2, 0).
        let id = WallId::new(Pos::new(2, 0), WallKind::North);
        assert_eq!(g.cell((1, 0)).unwrap().wall(Side::South).id(), id);
        assert!(g.wall(id).is_ok());
    }

    // ── Bulk accessor tests ─────────────────────────────────────

    #[test]
    fn cells_in_row_ordered_by_column() {
        let g = grid(2, 3);
        let row: Vec<i32> = g.cells_in_row(1).iter().map(|c| c.col()).collect();
        assert_eq!(row, vec![0, 1, 2]);
        assert!(g.cells_in_row(2).is_empty());
    }

    #[test]
    fn cells_in_column_ordered_by_row() {
        let g = grid(3, 2);
        let col: Vec<i32> = g.cells_in_column(0).iter().map(|c| c.row()).collect();
        assert_eq!(col, vec![0, 1, 2]);
        assert!(g.cells_in_column(5).is_empty());
    }

    #[test]
    fn id_snapshots_are_stable() {
        let g = grid(3, 3);
        compliance::assert_ids_unique_and_stable(
            g.wall_ids().map(|id| id.to_string()).collect(),
            g.wall_ids().map(|id| id.to_string()).collect(),
        );
        compliance::assert_ids_unique_and_stable(
            g.vertex_ids().map(|id| id.to_string()).collect(),
            g.vertex_ids().map(|id| id.to_string()).collect(),
        );
    }

    // ── Display tests ───────────────────────────────────────────

    #[test]
    fn display_forms() {
        let g = grid(2, 3);
        assert_eq!(g.to_string(), "square grid with 2 rows and 3 columns");
        assert_eq!(g.cell((0, 1)).unwrap().to_string(), "cell (0, 1)");
        assert_eq!(
            g.cell((0, 1)).unwrap().wall(Side::North).to_string(),
            "wall ((0, 1), N)"
        );
        assert_eq!(g.vertex((1, 1)).unwrap().to_string(), "vertex (1, 1)");
    }

    // ── Equality tests ──────────────────────────────────────────

    #[test]
    fn handles_from_different_grids_are_never_equal() {
        let a = grid(2, 2);
        let b = grid(2, 2);
        assert_ne!(a.cell((0, 0)).unwrap(), b.cell((0, 0)).unwrap());
        assert_eq!(a.cell((0, 0)).unwrap(), a.cell((0, 0)).unwrap());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbour_round_trip(
            rows in 1u32..8,
            cols in 1u32..8,
            f in 0i32..8,
            c in 0i32..8,
        ) {
            let f = f % rows as i32;
            let c = c % cols as i32;
            let g = grid(rows, cols);
            let cell = g.cell((f, c)).unwrap();
            for side in Side::ALL {
                if let Some(neighbor) = cell.neighbor(side) {
                    prop_assert_eq!(neighbor.neighbor(side.opposite()), Some(cell));
                    // Both derive the identical canonical wall id.
                    prop_assert_eq!(cell.wall(side).id(), neighbor.wall(side.opposite()).id());
                }
            }
        }

        #[test]
        fn continuations_share_the_labelled_endpoint(
            rows in 1u32..6,
            cols in 1u32..6,
        ) {
            let g = grid(rows, cols);
            for wall in g.walls() {
                for label in Continuation::ALL {
                    if let Some(next) = wall.continuation(label) {
                        let shared = wall.endpoint(label.end());
                        prop_assert!(
                            next.endpoints().contains(&shared),
                            "{} does not touch {} of {}", next, shared, wall,
                        );
                    }
                }
            }
        }

        #[test]
        fn vertex_incidences_are_consistent(
            rows in 1u32..6,
            cols in 1u32..6,
        ) {
            let g = grid(rows, cols);
            for vertex in g.vertices() {
                for side in Side::ALL {
                    if let Some(wall) = vertex.wall(side) {
                        prop_assert!(wall.endpoints().contains(&vertex));
                    }
                }
                for corner in Corner::ALL {
                    if let Some(cell) = vertex.cell(corner) {
                        prop_assert!(cell.vertices().contains(&vertex));
                    }
                }
            }
        }

        #[test]
        fn every_wall_flank_round_trips(
            rows in 1u32..6,
            cols in 1u32..6,
        ) {
            let g = grid(rows, cols);
            for cell in g.cells() {
                for side in Side::ALL {
                    let flanks = cell.wall(side).cells();
                    prop_assert!(flanks.contains(&Some(cell)));
                }
            }
        }
    }
}
