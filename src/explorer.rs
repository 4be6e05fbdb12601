use std::collections::VecDeque;

use fxhash::FxHashSet;
use grid_util::point::Point;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MazeError;
use crate::grid::{Cell, Grid};

/// Breadth-first walk from `start` over every passable cell. Each visited cell other than the
/// start receives a random label from `swag` with probability `item_probability`. The last cell
/// dequeued becomes the terminal cell: it is marked [Cell::End] and returned.
///
/// If nothing besides the start is open, the start itself is returned and keeps its
/// [Cell::Start] marking.
pub fn explore<R: Rng, S: AsRef<str>>(
    grid: &mut Grid,
    start: Point,
    swag: &[S],
    item_probability: f64,
    rng: &mut R,
) -> Result<Point, MazeError> {
    if swag.is_empty() {
        return Err(MazeError::EmptyItemSet);
    }
    if !(0.0..=1.0).contains(&item_probability) {
        return Err(MazeError::InvalidProbability(item_probability));
    }
    if !grid.in_bounds(start) {
        return Err(MazeError::OutOfBounds(start));
    }

    let mut visited = FxHashSet::default();
    visited.insert(start);
    let mut queue = VecDeque::from([start]);
    let mut last = start;
    let mut placed = 0;
    while let Some(current) = queue.pop_front() {
        last = current;
        if let Some(cell) = grid.get_mut(current) {
            let eligible = match &*cell {
                Cell::Start | Cell::Wall | Cell::End | Cell::PathMarker => false,
                Cell::Open | Cell::Item(_) => true,
            };
            if eligible && rng.gen_bool(item_probability) {
                if let Some(label) = swag.choose(rng) {
                    *cell = Cell::Item(label.as_ref().to_owned());
                    placed += 1;
                }
            }
        }
        for neighbour in grid.neighborhood_points(current, false) {
            if visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }
    debug!("Explored {} cells, placed {} items", visited.len(), placed);

    if last != start {
        grid.set(last, Cell::End)?;
    }
    info!("Terminal cell is {:?}", last);
    Ok(last)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::carver::carve;

    fn carved(rows: usize, cols: usize, start: Point, seed: u64) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        carve(&mut grid, start, &mut StdRng::seed_from_u64(seed)).unwrap();
        grid
    }

    #[test]
    fn empty_swag_is_rejected() {
        let start = Point::new(0, 0);
        let mut grid = carved(5, 5, start, 0);
        let swag: [&str; 0] = [];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            explore(&mut grid, start, &swag, 0.1, &mut rng),
            Err(MazeError::EmptyItemSet)
        );
    }

    #[test]
    fn degenerate_maze_ends_at_start() {
        let start = Point::new(0, 0);
        let mut grid = carved(1, 1, start, 0);
        let mut rng = StdRng::seed_from_u64(0);
        let end = explore(&mut grid, start, &["a"], 1.0, &mut rng).unwrap();
        assert_eq!(end, start);
        assert_eq!(grid.get(start), Some(&Cell::Start));
    }

    #[test]
    fn marks_single_end_and_never_touches_start() {
        let start = Point::new(2, 2);
        let mut grid = carved(9, 9, start, 5);
        let mut rng = StdRng::seed_from_u64(5);
        let end = explore(&mut grid, start, &["a", "b"], 1.0, &mut rng).unwrap();
        assert_ne!(end, start);
        assert_eq!(grid.get(start), Some(&Cell::Start));
        assert_eq!(grid.get(end), Some(&Cell::End));
        assert_eq!(grid.count(|c| *c == Cell::End), 1);
        // With probability one every other passable cell carries an item.
        assert_eq!(grid.count(|c| *c == Cell::Open), 0);
        assert_eq!(
            grid.count(|c| c.label().is_some()),
            grid.count(Cell::is_passable) - 2
        );
    }

    #[test]
    fn zero_probability_places_nothing() {
        let start = Point::new(0, 0);
        let mut grid = carved(7, 7, start, 9);
        let mut rng = StdRng::seed_from_u64(9);
        explore(&mut grid, start, &["a"], 0.0, &mut rng).unwrap();
        assert_eq!(grid.count(|c| c.label().is_some()), 0);
    }

    #[test]
    fn end_is_farthest_from_start() {
        // On a tree the last cell in BFS order has the largest step distance.
        let start = Point::new(0, 0);
        let mut grid = carved(2, 7, start, 0);
        let mut rng = StdRng::seed_from_u64(0);
        let end = explore(&mut grid, start, &["a"], 0.0, &mut rng).unwrap();
        assert_eq!(end, Point::new(6, 0));
    }

    #[test]
    fn rejects_invalid_probability() {
        let start = Point::new(0, 0);
        let mut grid = carved(3, 3, start, 0);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            explore(&mut grid, start, &["a"], 1.5, &mut rng),
            Err(MazeError::InvalidProbability(1.5))
        );
    }
}
