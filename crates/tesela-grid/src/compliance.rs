//! Tiling trait compliance test helpers.
//!
//! Shared invariant assertions run from both backend test modules
//! (SquareGrid, HexGrid), keeping the trait contract honest in one place.

use crate::tiling::Tiling;
use indexmap::IndexSet;
use tesela_core::Pos;

/// Assert that `contains` agrees with the declared extent, probing one step
/// past every border, and that `cell_count == rows * cols`.
pub fn assert_extent_consistent(tiling: &dyn Tiling) {
    let rows = tiling.rows() as i32;
    let cols = tiling.cols() as i32;
    for f in -1..=rows {
        for c in -1..=cols {
            let inside = f >= 0 && f < rows && c >= 0 && c < cols;
            assert_eq!(
                tiling.contains(Pos::new(f, c)),
                inside,
                "contains(({f}, {c})) disagrees with extent {rows}x{cols}"
            );
        }
    }
    assert_eq!(
        tiling.cell_count(),
        rows as usize * cols as usize,
        "cell_count != rows * cols"
    );
}

/// Assert the materialized wall and vertex counts against the shape's
/// closed-form values.
pub fn assert_counts(tiling: &dyn Tiling, walls: usize, vertices: usize) {
    assert_eq!(
        tiling.wall_count(),
        walls,
        "wall_count for {}x{}",
        tiling.rows(),
        tiling.cols()
    );
    assert_eq!(
        tiling.vertex_count(),
        vertices,
        "vertex_count for {}x{}",
        tiling.rows(),
        tiling.cols()
    );
}

/// Assert that an id snapshot is duplicate-free and that a second snapshot
/// of the same registry yields the identical sequence.
pub fn assert_ids_unique_and_stable(first: Vec<String>, second: Vec<String>) {
    let unique: IndexSet<&String> = first.iter().collect();
    assert_eq!(unique.len(), first.len(), "id snapshot has duplicates");
    assert_eq!(first, second, "id snapshot is not stable across calls");
}
