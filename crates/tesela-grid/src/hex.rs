//! Hexagonal tiling: grid, handles, and parity-conditioned addressing rules.
//!
//! Cells are flat hexagons laid out in offset columns: odd columns sit half
//! a cell lower than even ones. Every addressing rule is conditioned on the
//! parity of the anchor's column, because the vertical half-cell offset
//! shifts which row a diagonal step lands in. Parity uses the Euclidean
//! remainder, so phantom ids in column −1 classify as odd.
//!
//! Walls are canonically named by the cell below them: a wall id is
//! `(Pos, WallKind)` where the kind is the north-west, north, or north-east
//! wall of that cell; the south-east, south, and south-west walls of a cell
//! are the NW/N/NE walls of its lower neighbours. Vertices carry a
//! [`VertexSide`] qualifier: each hexagon owns exactly its west and east
//! corner names, and the other four corners borrow a neighbour's name.

use crate::tiling::Tiling;
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::fmt;
use std::ptr;
use tesela_core::{ElementKind, End, GridError, Pos};

/// Relative direction of a wall or neighbour from a hexagonal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Upper-left wall/neighbour.
    NorthWest,
    /// The wall/neighbour straight above.
    North,
    /// Upper-right.
    NorthEast,
    /// Lower-right.
    SouthEast,
    /// Straight below.
    South,
    /// Lower-left.
    SouthWest,
}

impl Side {
    /// All six sides, in `NW`, `N`, `NE`, `SE`, `S`, `SW` order. Bulk
    /// queries return their results in this order.
    pub const ALL: [Side; 6] = [
        Side::NorthWest,
        Side::North,
        Side::NorthEast,
        Side::SouthEast,
        Side::South,
        Side::SouthWest,
    ];

    /// The side pointing the opposite way.
    pub const fn opposite(self) -> Side {
        match self {
            Side::NorthWest => Side::SouthEast,
            Side::North => Side::South,
            Side::NorthEast => Side::SouthWest,
            Side::SouthEast => Side::NorthWest,
            Side::South => Side::North,
            Side::SouthWest => Side::NorthEast,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::NorthWest => write!(f, "NW"),
            Side::North => write!(f, "N"),
            Side::NorthEast => write!(f, "NE"),
            Side::SouthEast => write!(f, "SE"),
            Side::South => write!(f, "S"),
            Side::SouthWest => write!(f, "SW"),
        }
    }
}

/// Relative direction of a bounding vertex from a hexagonal cell.
///
/// A flat-sided hexagon has corners at its west and east tips and at the
/// four diagonal shoulders; there is no north or south corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Upper-left shoulder.
    NorthWest,
    /// Upper-right shoulder.
    NorthEast,
    /// East tip.
    East,
    /// Lower-right shoulder.
    SouthEast,
    /// Lower-left shoulder.
    SouthWest,
    /// West tip.
    West,
}

impl Corner {
    /// All six corners, in `NW`, `NE`, `E`, `SE`, `SW`, `W` order.
    pub const ALL: [Corner; 6] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::East,
        Corner::SouthEast,
        Corner::SouthWest,
        Corner::West,
    ];
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::NorthWest => write!(f, "NW"),
            Corner::NorthEast => write!(f, "NE"),
            Corner::East => write!(f, "E"),
            Corner::SouthEast => write!(f, "SE"),
            Corner::SouthWest => write!(f, "SW"),
            Corner::West => write!(f, "W"),
        }
    }
}

/// Which wall of its naming cell a wall id denotes.
///
/// Only the three upper walls are canonical names; a cell's lower walls are
/// named by the neighbour below them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallKind {
    /// The upper-left wall of the naming cell.
    NorthWest,
    /// The top wall of the naming cell.
    North,
    /// The upper-right wall of the naming cell.
    NorthEast,
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallKind::NorthWest => write!(f, "NW"),
            WallKind::North => write!(f, "N"),
            WallKind::NorthEast => write!(f, "NE"),
        }
    }
}

/// Canonical id of a hexagonal wall: the naming cell's position plus the
/// wall kind. Boundary walls may name a phantom cell outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WallId {
    /// Position of the naming cell (possibly phantom).
    pub pos: Pos,
    /// Which upper wall of the naming cell.
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

/// Which tip of its naming cell a vertex id denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexSide {
    /// The west tip of the naming cell.
    West,
    /// The east tip of the naming cell.
    East,
}

impl fmt::Display for VertexSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexSide::West => write!(f, "W"),
            VertexSide::East => write!(f, "E"),
        }
    }
}

/// Canonical id of a hexagonal vertex: the naming cell's position plus the
/// tip it sits on.
///
/// Unlike the square tiling, a position alone cannot name a hex vertex —
/// each hexagon owns two tip names, and its four shoulder corners resolve
/// to the tips of neighbouring (possibly phantom) cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexId {
    /// Position of the naming cell (possibly phantom).
    pub pos: Pos,
    /// Which tip of the naming cell.
    pub side: VertexSide,
}

impl VertexId {
    /// Create a vertex id from a naming-cell position and a tip.
    pub const fn new(pos: Pos, side: VertexSide) -> Self {
        Self { pos, side }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pos, self.side)
    }
}

/// Label of a continuation wall: one of the two other walls meeting each
/// endpoint of a wall.
///
/// Three walls meet at every hex vertex, so a wall has two continuations
/// per endpoint — left and right, seen standing on the endpoint with the
/// wall at your back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Left continuation at endpoint A.
    ALeft,
    /// Right continuation at endpoint A.
    ARight,
    /// Left continuation at endpoint B.
    BLeft,
    /// Right continuation at endpoint B.
    BRight,
}

impl Continuation {
    /// All four labels, A-side first.
    pub const ALL: [Continuation; 4] = [
        Continuation::ALeft,
        Continuation::ARight,
        Continuation::BLeft,
        Continuation::BRight,
    ];

    /// The wall endpoint this continuation shares.
    pub const fn end(self) -> End {
        match self {
            Continuation::ALeft | Continuation::ARight => End::A,
            Continuation::BLeft | Continuation::BRight => End::B,
        }
    }
}

/// Label of a wall or cell incident to a vertex, clockwise.
///
/// Slot `A` is the element whose id carries the vertex's own naming cell;
/// `B` and `C` follow clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexSlot {
    /// The element sharing the vertex's naming cell.
    A,
    /// Next element clockwise.
    B,
    /// Last element clockwise.
    C,
}

impl VertexSlot {
    /// All three slots, clockwise.
    pub const ALL: [VertexSlot; 3] = [VertexSlot::A, VertexSlot::B, VertexSlot::C];
}

impl fmt::Display for VertexSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexSlot::A => write!(f, "A"),
            VertexSlot::B => write!(f, "B"),
            VertexSlot::C => write!(f, "C"),
        }
    }
}

/// Even/odd classification of a column.
///
/// Odd columns sit half a cell lower than even ones, so every diagonal
/// derivation compensates differently per parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Parity {
    Even,
    Odd,
}

/// Parity of a column, Euclidean: column −1 is odd, like column 1.
fn parity(col: i32) -> Parity {
    if col.rem_euclid(2) == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

// ── Addressing rules ────────────────────────────────────────────
//
// Pure id derivations with no grid-size dependency, one arm per
// (label, parity) pair. Membership of a derived id is always decided by the
// registry, never here.

/// Id of the wall bounding `cell` on `side`.
fn cell_wall(cell: Pos, side: Side) -> WallId {
    match (side, parity(cell.col)) {
        (Side::NorthWest, _) => WallId::new(cell, WallKind::NorthWest),
        (Side::North, _) => WallId::new(cell, WallKind::North),
        (Side::NorthEast, _) => WallId::new(cell, WallKind::NorthEast),
        (Side::SouthEast, Parity::Even) => WallId::new(cell.offset(0, 1), WallKind::NorthWest),
        (Side::SouthEast, Parity::Odd) => WallId::new(cell.offset(1, 1), WallKind::NorthWest),
        (Side::South, _) => WallId::new(cell.offset(1, 0), WallKind::North),
        (Side::SouthWest, Parity::Even) => WallId::new(cell.offset(0, -1), WallKind::NorthEast),
        (Side::SouthWest, Parity::Odd) => WallId::new(cell.offset(1, -1), WallKind::NorthEast),
    }
}

/// Position of the cell adjacent to `cell` on `side`.
///
/// Diagonal steps from an even column look one row up; from an odd column
/// they stay level (upward) or drop a row (downward).
fn cell_neighbor(cell: Pos, side: Side) -> Pos {
    match (side, parity(cell.col)) {
        (Side::NorthWest, Parity::Even) => cell.offset(-1, -1),
        (Side::NorthWest, Parity::Odd) => cell.offset(0, -1),
        (Side::North, _) => cell.offset(-1, 0),
        (Side::NorthEast, Parity::Even) => cell.offset(-1, 1),
        (Side::NorthEast, Parity::Odd) => cell.offset(0, 1),
        (Side::SouthEast, Parity::Even) => cell.offset(0, 1),
        (Side::SouthEast, Parity::Odd) => cell.offset(1, 1),
        (Side::South, _) => cell.offset(1, 0),
        (Side::SouthWest, Parity::Even) => cell.offset(0, -1),
        (Side::SouthWest, Parity::Odd) => cell.offset(1, -1),
    }
}

/// Id of the vertex at `corner` of `cell`.
fn cell_vertex(cell: Pos, corner: Corner) -> VertexId {
    match (corner, parity(cell.col)) {
        (Corner::NorthWest, Parity::Even) => VertexId::new(cell.offset(-1, -1), VertexSide::East),
        (Corner::NorthWest, Parity::Odd) => VertexId::new(cell.offset(0, -1), VertexSide::East),
        (Corner::NorthEast, Parity::Even) => VertexId::new(cell.offset(-1, 1), VertexSide::West),
        (Corner::NorthEast, Parity::Odd) => VertexId::new(cell.offset(0, 1), VertexSide::West),
        (Corner::East, _) => VertexId::new(cell, VertexSide::East),
        (Corner::SouthEast, Parity::Even) => VertexId::new(cell.offset(0, 1), VertexSide::West),
        (Corner::SouthEast, Parity::Odd) => VertexId::new(cell.offset(1, 1), VertexSide::West),
        (Corner::SouthWest, Parity::Even) => VertexId::new(cell.offset(0, -1), VertexSide::East),
        (Corner::SouthWest, Parity::Odd) => VertexId::new(cell.offset(1, -1), VertexSide::East),
        (Corner::West, _) => VertexId::new(cell, VertexSide::West),
    }
}

/// Id of the vertex at `end` of the wall `id`. A is the western endpoint.
fn wall_endpoint(id: WallId, end: End) -> VertexId {
    let p = id.pos;
    match (id.kind, parity(p.col), end) {
        (WallKind::NorthWest, _, End::A) => VertexId::new(p, VertexSide::West),
        (WallKind::NorthWest, Parity::Even, End::B) => {
            VertexId::new(p.offset(-1, -1), VertexSide::East)
        }
        (WallKind::NorthWest, Parity::Odd, End::B) => {
            VertexId::new(p.offset(0, -1), VertexSide::East)
        }
        (WallKind::North, Parity::Even, End::A) => {
            VertexId::new(p.offset(-1, -1), VertexSide::East)
        }
        (WallKind::North, Parity::Odd, End::A) => VertexId::new(p.offset(0, -1), VertexSide::East),
        (WallKind::North, Parity::Even, End::B) => {
            VertexId::new(p.offset(-1, 1), VertexSide::West)
        }
        (WallKind::North, Parity::Odd, End::B) => VertexId::new(p.offset(0, 1), VertexSide::West),
        (WallKind::NorthEast, Parity::Even, End::A) => {
            VertexId::new(p.offset(-1, 1), VertexSide::West)
        }
        (WallKind::NorthEast, Parity::Odd, End::A) => {
            VertexId::new(p.offset(0, 1), VertexSide::West)
        }
        (WallKind::NorthEast, _, End::B) => VertexId::new(p, VertexSide::East),
    }
}

/// Position of the cell flanking the wall `id` on `end`.
///
/// A is the cell above the wall, B always the naming cell below it. The
/// north-wall rule carries no parity dependence: a vertical step is the
/// same in every column.
fn wall_flank(id: WallId, end: End) -> Pos {
    match (id.kind, parity(id.pos.col), end) {
        (WallKind::NorthWest, Parity::Even, End::A) => id.pos.offset(-1, -1),
        (WallKind::NorthWest, Parity::Odd, End::A) => id.pos.offset(0, -1),
        (WallKind::North, _, End::A) => id.pos.offset(-1, 0),
        (WallKind::NorthEast, Parity::Even, End::A) => id.pos.offset(-1, 1),
        (WallKind::NorthEast, Parity::Odd, End::A) => id.pos.offset(0, 1),
        (_, _, End::B) => id.pos,
    }
}

/// Id of the continuation wall of `id` at `label`.
fn wall_continuation(id: WallId, label: Continuation) -> WallId {
    let p = id.pos;
    match (id.kind, parity(p.col), label) {
        (WallKind::NorthWest, Parity::Even, Continuation::ALeft) => {
            WallId::new(p.offset(0, -1), WallKind::NorthEast)
        }
        (WallKind::NorthWest, Parity::Even, Continuation::ARight) => {
            WallId::new(p.offset(0, -1), WallKind::North)
        }
        (WallKind::NorthWest, Parity::Even, Continuation::BLeft) => {
            WallId::new(p.offset(-1, -1), WallKind::NorthEast)
        }
        (WallKind::NorthWest, Parity::Even, Continuation::BRight) => {
            WallId::new(p, WallKind::North)
        }
        (WallKind::NorthWest, Parity::Odd, Continuation::ALeft) => {
            WallId::new(p.offset(1, -1), WallKind::NorthEast)
        }
        (WallKind::NorthWest, Parity::Odd, Continuation::ARight) => {
            WallId::new(p.offset(1, -1), WallKind::North)
        }
        (WallKind::NorthWest, Parity::Odd, Continuation::BLeft) => {
            WallId::new(p.offset(0, -1), WallKind::NorthEast)
        }
        (WallKind::NorthWest, Parity::Odd, Continuation::BRight) => {
            WallId::new(p, WallKind::North)
        }
        (WallKind::North, Parity::Even, Continuation::ALeft) => {
            WallId::new(p, WallKind::NorthWest)
        }
        (WallKind::North, Parity::Even, Continuation::ARight) => {
            WallId::new(p.offset(-1, -1), WallKind::NorthEast)
        }
        (WallKind::North, Parity::Even, Continuation::BLeft) => {
            WallId::new(p.offset(-1, 1), WallKind::NorthWest)
        }
        (WallKind::North, Parity::Even, Continuation::BRight) => {
            WallId::new(p, WallKind::NorthEast)
        }
        (WallKind::North, Parity::Odd, Continuation::ALeft) => {
            WallId::new(p, WallKind::NorthWest)
        }
        (WallKind::North, Parity::Odd, Continuation::ARight) => {
            WallId::new(p.offset(0, -1), WallKind::NorthEast)
        }
        (WallKind::North, Parity::Odd, Continuation::BLeft) => {
            WallId::new(p.offset(0, 1), WallKind::NorthWest)
        }
        (WallKind::North, Parity::Odd, Continuation::BRight) => {
            WallId::new(p, WallKind::NorthEast)
        }
        (WallKind::NorthEast, Parity::Even, Continuation::ALeft) => {
            WallId::new(p, WallKind::North)
        }
        (WallKind::NorthEast, Parity::Even, Continuation::ARight) => {
            WallId::new(p.offset(-1, 1), WallKind::NorthWest)
        }
        (WallKind::NorthEast, Parity::Even, Continuation::BLeft) => {
            WallId::new(p.offset(0, 1), WallKind::North)
        }
        (WallKind::NorthEast, Parity::Even, Continuation::BRight) => {
            WallId::new(p.offset(0, 1), WallKind::NorthWest)
        }
        (WallKind::NorthEast, Parity::Odd, Continuation::ALeft) => {
            WallId::new(p, WallKind::North)
        }
        (WallKind::NorthEast, Parity::Odd, Continuation::ARight) => {
            WallId::new(p.offset(0, 1), WallKind::NorthWest)
        }
        (WallKind::NorthEast, Parity::Odd, Continuation::BLeft) => {
            WallId::new(p.offset(1, 1), WallKind::North)
        }
        (WallKind::NorthEast, Parity::Odd, Continuation::BRight) => {
            WallId::new(p.offset(1, 1), WallKind::NorthWest)
        }
    }
}

/// Id of the wall meeting vertex `id` at `slot`.
fn vertex_wall(id: VertexId, slot: VertexSlot) -> WallId {
    let p = id.pos;
    match (id.side, parity(p.col), slot) {
        (VertexSide::East, _, VertexSlot::A) => WallId::new(p, WallKind::NorthEast),
        (VertexSide::East, Parity::Even, VertexSlot::B) => {
            WallId::new(p.offset(0, 1), WallKind::North)
        }
        (VertexSide::East, Parity::Even, VertexSlot::C) => {
            WallId::new(p.offset(0, 1), WallKind::NorthWest)
        }
        (VertexSide::East, Parity::Odd, VertexSlot::B) => {
            WallId::new(p.offset(1, 1), WallKind::North)
        }
        (VertexSide::East, Parity::Odd, VertexSlot::C) => {
            WallId::new(p.offset(1, 1), WallKind::NorthWest)
        }
        (VertexSide::West, _, VertexSlot::A) => WallId::new(p, WallKind::NorthWest),
        (VertexSide::West, Parity::Even, VertexSlot::B) => {
            WallId::new(p.offset(0, -1), WallKind::NorthEast)
        }
        (VertexSide::West, Parity::Even, VertexSlot::C) => {
            WallId::new(p.offset(0, -1), WallKind::North)
        }
        (VertexSide::West, Parity::Odd, VertexSlot::B) => {
            WallId::new(p.offset(1, -1), WallKind::NorthEast)
        }
        (VertexSide::West, Parity::Odd, VertexSlot::C) => {
            WallId::new(p.offset(1, -1), WallKind::North)
        }
    }
}

/// Position of the cell touching vertex `id` at `slot`.
fn vertex_cell(id: VertexId, slot: VertexSlot) -> Pos {
    let p = id.pos;
    match (id.side, parity(p.col), slot) {
        (_, _, VertexSlot::A) => p,
        (VertexSide::East, Parity::Even, VertexSlot::B) => p.offset(-1, 1),
        (VertexSide::East, Parity::Even, VertexSlot::C) => p.offset(0, 1),
        (VertexSide::East, Parity::Odd, VertexSlot::B) => p.offset(0, 1),
        (VertexSide::East, Parity::Odd, VertexSlot::C) => p.offset(1, 1),
        (VertexSide::West, Parity::Even, VertexSlot::B) => p.offset(0, -1),
        (VertexSide::West, Parity::Even, VertexSlot::C) => p.offset(-1, -1),
        (VertexSide::West, Parity::Odd, VertexSlot::B) => p.offset(1, -1),
        (VertexSide::West, Parity::Odd, VertexSlot::C) => p.offset(0, -1),
    }
}

// ── Grid ────────────────────────────────────────────────────────

/// A grid of flat hexagonal cells in offset columns.
///
/// Construction enumerates every cell of the `rows × cols` rectangle and
/// registers each cell's six bounding walls and six vertices exactly once,
/// whichever parity branch first derives their canonical id. After
/// construction the grid is immutable and every query is read-only.
///
/// # Examples
///
/// ```
/// use tesela_grid::hex::{HexGrid, Side};
/// use tesela_grid::Tiling;
///
/// let grid = HexGrid::new(3, 3).unwrap();
/// assert_eq!(grid.cell_count(), 9);
///
/// // The middle cell touches all six neighbours.
/// let center = grid.cell((1, 1)).unwrap();
/// assert_eq!(center.neighbors_present().len(), 6);
///
/// // Odd columns sit lower: the north-west neighbour of (1, 1) is in the
/// // same row, not the row above.
/// assert_eq!(center.neighbor(Side::NorthWest), grid.cell((1, 0)).ok());
/// ```
#[derive(Clone)]
pub struct HexGrid {
    rows: u32,
    cols: u32,
    cells: IndexSet<Pos>,
    walls: IndexSet<WallId>,
    vertices: IndexSet<VertexId>,
}

impl HexGrid {
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
        let mut walls = IndexSet::with_capacity(3 * r * c + 2 * r + 2 * c - 1);
        let mut vertices = IndexSet::with_capacity(2 * (r * c + r + c));

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
    /// Returns [`GridError::NotFound`] if no such wall was materialized.
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
    pub fn vertex(&self, id: VertexId) -> Result<Vertex<'_>, GridError> {
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
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
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

    fn vertex_at(&self, id: VertexId) -> Option<Vertex<'_>> {
        self.vertices
            .contains(&id)
            .then(|| Vertex { grid: self, id })
    }
}

impl Tiling for HexGrid {
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
        6
    }
}

impl fmt::Debug for HexGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HexGrid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for HexGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hexagonal grid with {} rows and {} columns",
            self.rows, self.cols
        )
    }
}

// ── Handles ─────────────────────────────────────────────────────

/// A cell of a [`HexGrid`].
#[derive(Clone, Copy)]
pub struct Cell<'g> {
    grid: &'g HexGrid,
    pos: Pos,
}

impl<'g> Cell<'g> {
    /// The grid this cell belongs to.
    pub fn grid(self) -> &'g HexGrid {
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

    /// All six bounding walls, in [`Side::ALL`] order.
    pub fn walls(self) -> [Wall<'g>; 6] {
        Side::ALL.map(|side| self.wall(side))
    }

    /// The neighbouring cell on `side`, or `None` at the grid boundary.
    pub fn neighbor(self, side: Side) -> Option<Cell<'g>> {
        self.grid.cell_at(cell_neighbor(self.pos, side))
    }

    /// All six neighbour slots, in [`Side::ALL`] order; boundary slots are
    /// `None`.
    pub fn neighbors(self) -> [Option<Cell<'g>>; 6] {
        Side::ALL.map(|side| self.neighbor(side))
    }

    /// The neighbours that exist, in [`Side::ALL`] order.
    pub fn neighbors_present(self) -> SmallVec<[Cell<'g>; 6]> {
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

    /// All six bounding vertices, in [`Corner::ALL`] order.
    pub fn vertices(self) -> [Vertex<'g>; 6] {
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

/// A wall of a [`HexGrid`].
#[derive(Clone, Copy)]
pub struct Wall<'g> {
    grid: &'g HexGrid,
    id: WallId,
}

impl<'g> Wall<'g> {
    /// The grid this wall belongs to.
    pub fn grid(self) -> &'g HexGrid {
        self.grid
    }

    /// The wall's canonical id.
    pub fn id(self) -> WallId {
        self.id
    }

    /// Which upper wall of its naming cell this is.
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

    /// Both endpoint vertices, in `A`, `B` order (A is the western one).
    pub fn endpoints(self) -> [Vertex<'g>; 2] {
        End::ALL.map(|end| self.endpoint(end))
    }

    /// The cell flanking this wall on `end`, or `None` if that side is
    /// outside the grid. A is the upper flank, B the naming cell.
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

    /// All four continuation slots, in [`Continuation::ALL`] order.
    pub fn continuations(self) -> [Option<Wall<'g>>; 4] {
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

/// A vertex of a [`HexGrid`].
///
/// Exactly three walls and three cells meet at every hex vertex, labelled
/// [`VertexSlot::A`]/`B`/`C` clockwise starting from the element that shares
/// the vertex's naming cell.
#[derive(Clone, Copy)]
pub struct Vertex<'g> {
    grid: &'g HexGrid,
    id: VertexId,
}

impl<'g> Vertex<'g> {
    /// The grid this vertex belongs to.
    pub fn grid(self) -> &'g HexGrid {
        self.grid
    }

    /// The vertex's canonical id.
    pub fn id(self) -> VertexId {
        self.id
    }

    /// Which tip of its naming cell this vertex sits on.
    pub fn side(self) -> VertexSide {
        self.id.side
    }

    /// The wall meeting this vertex at `slot`, or `None` if it lies outside
    /// the grid.
    pub fn wall(self, slot: VertexSlot) -> Option<Wall<'g>> {
        self.grid.wall_at(vertex_wall(self.id, slot))
    }

    /// All three incident wall slots, in [`VertexSlot::ALL`] order.
    pub fn walls(self) -> [Option<Wall<'g>>; 3] {
        VertexSlot::ALL.map(|slot| self.wall(slot))
    }

    /// The cell touching this vertex at `slot`, or `None` if it lies
    /// outside the grid.
    pub fn cell(self, slot: VertexSlot) -> Option<Cell<'g>> {
        self.grid.cell_at(vertex_cell(self.id, slot))
    }

    /// All three adjacent cell slots, in [`VertexSlot::ALL`] order.
    pub fn cells(self) -> [Option<Cell<'g>>; 3] {
        VertexSlot::ALL.map(|slot| self.cell(slot))
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
        f.debug_tuple("Vertex").field(&self.id.pos).field(&self.id.side).finish()
    }
}

impl fmt::Display for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex {}", self.id)
    }
}
