//! Randomized depth-first wall removal.
//!
//! Corridors are cut two cells at a time from the start, so the carved cells form a spanning
//! tree: every open cell is connected to the start by exactly one simple path.
use grid_util::point::Point;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MazeError;
use crate::grid::{offset, Cell, Grid, NEUMANN};

/// One level of the backtracker: a carved cell and the directions it has yet to try.
struct Frame {
    cell: Point,
    directions: [(i32, i32); 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng>(cell: Point, rng: &mut R) -> Frame {
        let mut directions = NEUMANN;
        directions.shuffle(rng);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Carves a perfect maze into `grid` starting from `start`, which is marked [Cell::Start].
///
/// Uses an explicit stack holding each carved cell with its untried directions instead of
/// recursion, so the depth is bounded by the heap rather than the call stack.
pub fn carve<R: Rng>(grid: &mut Grid, start: Point, rng: &mut R) -> Result<(), MazeError> {
    grid.set(start, Cell::Start)?;
    let mut carved = 0;
    let mut stack = vec![Frame::new(start, rng)];
    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            stack.pop();
            continue;
        }
        let (dy, dx) = frame.directions[frame.next];
        frame.next += 1;
        let current = frame.cell;
        let target = offset(current, 2 * dy, 2 * dx);
        if grid.get(target) != Some(&Cell::Wall) {
            continue;
        }
        grid.set(offset(current, dy, dx), Cell::Open)?;
        grid.set(target, Cell::Open)?;
        carved += 2;
        stack.push(Frame::new(target, rng));
    }
    debug!("Carving from {:?} finished", start);
    info!(
        "Carved {} cells in {}x{} grid",
        carved,
        grid.rows(),
        grid.cols()
    );
    Ok(())
}
