//! Measure the connected areas of fertile land in a `Grid`.
//!
//! Two fertile cells belong to the same area if one can be reached from the
//! other by steps up, down, left or right without crossing barren land.

use itertools::Itertools;
use tracing::{debug, info};

use crate::grid::{Grid, Rect};
use crate::{cartesian_product, Point};

/// Visit every cell of the fertile area containing `seed`, and return the
/// number of cells in it.
///
/// `seed` must be fertile and unvisited. Every cell counted is left marked
/// visited, so no later traversal can count it again. The traversal keeps its
/// own stack of cells whose neighbors have yet to be examined, so large areas
/// don't exhaust the call stack.
pub fn measure_component(grid: &mut Grid, seed: Point) -> usize {
    assert!(grid.is_fertile_unvisited(seed));

    let mut pending = vec![seed];
    grid.mark_visited(seed);
    let mut area = 1;

    while let Some(here) = pending.pop() {
        for neighbor in grid.neighbors(here) {
            if grid.is_fertile_unvisited(neighbor) {
                grid.mark_visited(neighbor);
                area += 1;
                pending.push(neighbor);
            }
        }
    }

    area
}

/// Return the size of every fertile area in `grid`, in the order they were
/// discovered.
///
/// Cells are swept a column at a time, left to right. Each fertile cell the
/// sweep reaches that no earlier area has claimed starts a new one.
pub fn component_sizes(grid: &mut Grid) -> Vec<usize> {
    let mut sizes = Vec::new();
    for p in cartesian_product(0..grid.width(), 0..grid.height()) {
        if grid.is_visited(p) {
            continue;
        }
        let area = measure_component(grid, p);
        debug!(seed = ?p, area, "found fertile area");
        sizes.push(area);
    }
    sizes
}

/// Return the sizes of the fertile areas in `grid`, smallest first.
///
/// If there is no fertile land at all, return `[0]`, never an empty list.
pub fn fertile_areas(grid: &mut Grid) -> Vec<usize> {
    let sizes = component_sizes(grid);
    if sizes.is_empty() {
        return vec![0];
    }
    sizes.into_iter().sorted().collect()
}

/// Build a `width` by `height` field with every rectangle in `barren` made
/// barren, and return its fertile areas as `fertile_areas` does.
///
/// Every rectangle must already fit the field.
pub fn analyze(width: usize, height: usize, barren: &[Rect]) -> Vec<usize> {
    let mut grid = Grid::with_barren(width, height, barren);
    let areas = fertile_areas(&mut grid);
    info!(width, height, rects = barren.len(), areas = areas.len(), "analyzed field");
    areas
}
