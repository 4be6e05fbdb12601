use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info, warn};

use crate::astar::{astar, SearchTree};
use crate::error::MazeError;
use crate::grid::{Cell, Grid};

/// Predecessor map produced by [find_path]: every relaxed coordinate points back to the
/// coordinate it was reached from. The start has no entry.
pub type Predecessors = SearchTree<Point, f64>;

/// Straight-line distance between two coordinates. Serves both as the edge cost between adjacent
/// cells (1 for cardinal moves, √2 for diagonal ones) and as the A* heuristic.
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    dx.hypot(dy)
}

/// Sum of the Euclidean edge costs along `path`.
pub fn path_cost(path: &[Point]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| euclidean(a, b))
        .sum()
}

/// Shortest path from `start` to `end` over the 8-neighbourhood. Diagonal steps only require the
/// target cell to be passable, so paths may cut across wall corners.
pub fn find_path(grid: &Grid, start: Point, end: Point) -> Result<Predecessors, MazeError> {
    find_path_with(grid, start, end, true)
}

/// Like [find_path], but restricted to cardinal moves when `allow_diagonal` is [false].
pub fn find_path_with(
    grid: &Grid,
    start: Point,
    end: Point,
    allow_diagonal: bool,
) -> Result<Predecessors, MazeError> {
    for point in [start, end] {
        if !grid.in_bounds(point) {
            return Err(MazeError::OutOfBounds(point));
        }
    }
    // Check if start and goal are on the same connected component.
    let components = grid.generate_components(allow_diagonal);
    if grid.unreachable(&components, &start, &end) {
        info!("{:?} is not reachable from {:?}", end, start);
        return Ok(SearchTree::rooted(start));
    }
    info!("{:?} is reachable from {:?}, computing path", end, start);
    let predecessors = astar(
        &start,
        |point| {
            grid.neighborhood_points(*point, allow_diagonal)
                .map(|n| (n, euclidean(point, &n)))
                .collect::<Vec<_>>()
        },
        |point| euclidean(point, &end),
        |point| *point == end,
    );
    debug!("Search relaxed {} cells", predecessors.len());
    Ok(predecessors)
}

/// The coordinates from `start` to `end` recorded in `predecessors`.
pub fn trace_path(
    predecessors: &Predecessors,
    start: Point,
    end: Point,
) -> Result<Vec<Point>, MazeError> {
    match predecessors.path_to(&end) {
        Some((path, _)) if path.first() == Some(&start) => Ok(path),
        _ => Err(MazeError::PathUnreachable { start, end }),
    }
}

/// Walks the predecessor chain back from `end`, turning every cell on the way into a
/// [Cell::PathMarker]. The end cell and the start cell keep their markings. Labels of items
/// listed in `swag` are collected in the order they are met, end first.
///
/// If `end` has no predecessor nothing is marked and the result is empty.
pub fn reconstruct<S: AsRef<str>>(
    grid: &mut Grid,
    predecessors: &Predecessors,
    end: Point,
    swag: &[S],
) -> Vec<String> {
    let mut collected = Vec::new();
    if predecessors.predecessor(&end).is_none() {
        if predecessors.cost(&end).is_none() {
            warn!("No predecessor chain reaches {:?}, nothing to reconstruct", end);
        }
        return collected;
    }
    let mut current = end;
    while let Some(&previous) = predecessors.predecessor(&current) {
        if let Some(cell) = grid.get_mut(current) {
            let marked = match &*cell {
                Cell::Start | Cell::End | Cell::Wall => false,
                Cell::Item(label) => {
                    if swag.iter().any(|s| s.as_ref() == label.as_str()) {
                        collected.push(label.clone());
                    }
                    true
                }
                Cell::Open | Cell::PathMarker => true,
            };
            if marked {
                *cell = Cell::PathMarker;
            }
        }
        current = previous;
    }
    info!("Collected {} items along the path", collected.len());
    collected
}
