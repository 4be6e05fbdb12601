//! # swag_maze
//!
//! Procedurally generated mazes with scattered swag. A maze is carved as a
//! [perfect maze](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_depth-first_search)
//! by randomized depth-first wall removal, explored breadth-first to drop swag and pick the
//! terminal cell, and solved with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) under
//! Euclidean costs over the 8-neighbourhood. The swag lying on the shortest path is collected,
//! radix sorted and tallied.
//!
//! All randomness comes from a caller-supplied [Rng], so a fixed seed reproduces a run exactly.
//!
//! ```
//! use swag_maze::SwagMaze;
//!
//! let run = SwagMaze::new(11, 21, ["candy corn", "werewolf", "pumpkin"])
//!     .build_seeded(7)
//!     .unwrap();
//! println!("{}", run);
//! assert_eq!(run.summary.sorted.len(), run.summary.collected.len());
//! ```
pub mod astar;
pub mod carver;
pub mod error;
pub mod explorer;
pub mod grid;
pub mod path;
pub mod swag;

use core::fmt;

use grid_util::point::Point;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use crate::carver::carve;
pub use crate::error::MazeError;
pub use crate::explorer::explore;
pub use crate::grid::{Cell, Grid};
pub use crate::path::{find_path, find_path_with, reconstruct, trace_path, Predecessors};
pub use crate::swag::{radix_sort, summarize, Summary};

/// Chance that the explorer drops swag on a visited cell.
pub const ITEM_PROBABILITY: f64 = 0.1;

/// Swag used when none is configured.
pub const DEFAULT_SWAG: [&str; 3] = ["candy corn", "werewolf", "pumpkin"];

/// Splits a comma separated swag list such as `"candy corn, werewolf"` into labels.
pub fn parse_swag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Settings for a single maze run.
#[derive(Clone, Debug, PartialEq)]
pub struct SwagMaze {
    pub rows: usize,
    pub cols: usize,
    /// Canonical swag labels, possibly containing spaces.
    pub swag: Vec<String>,
    pub item_probability: f64,
    /// Lets the path finder step diagonally, cutting across wall corners.
    pub allow_diagonal_move: bool,
    /// Fixed start cell; picked uniformly at random when [None].
    pub start: Option<Point>,
}

impl Default for SwagMaze {
    fn default() -> SwagMaze {
        SwagMaze::new(15, 31, DEFAULT_SWAG)
    }
}

/// Outcome of [SwagMaze::build].
#[derive(Clone, Debug)]
pub struct MazeRun {
    /// Finished grid with swag, end and path markers.
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
    /// Shortest path from start to end, empty if none was found.
    pub path: Vec<Point>,
    pub predecessors: Predecessors,
    pub summary: Summary,
}

impl SwagMaze {
    pub fn new<I, S>(rows: usize, cols: usize, swag: I) -> SwagMaze
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SwagMaze {
            rows,
            cols,
            swag: swag.into_iter().map(Into::into).collect(),
            item_probability: ITEM_PROBABILITY,
            allow_diagonal_move: true,
            start: None,
        }
    }

    /// Runs [SwagMaze::build] with a [StdRng] seeded from `seed`.
    pub fn build_seeded(&self, seed: u64) -> Result<MazeRun, MazeError> {
        self.build(&mut StdRng::seed_from_u64(seed))
    }

    /// Carves the maze, scatters swag, finds the shortest path to the terminal cell and tallies
    /// the swag along it.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<MazeRun, MazeError> {
        let mut grid = Grid::new(self.rows, self.cols)?;
        if self.swag.is_empty() {
            return Err(MazeError::EmptyItemSet);
        }
        if !(0.0..=1.0).contains(&self.item_probability) {
            return Err(MazeError::InvalidProbability(self.item_probability));
        }
        let start = match self.start {
            Some(start) => start,
            None => Point::new(
                rng.gen_range(0..self.cols as i32),
                rng.gen_range(0..self.rows as i32),
            ),
        };
        info!("Building {}x{} maze from {:?}", self.rows, self.cols, start);

        carve(&mut grid, start, rng)?;
        let end = explore(&mut grid, start, &self.swag, self.item_probability, rng)?;
        let predecessors = find_path_with(&grid, start, end, self.allow_diagonal_move)?;
        let path = trace_path(&predecessors, start, end).unwrap_or_default();
        let collected = reconstruct(&mut grid, &predecessors, end, &self.swag);
        let summary = summarize(&collected, &self.swag);
        Ok(MazeRun {
            grid,
            start,
            end,
            path,
            predecessors,
            summary,
        })
    }
}

impl fmt::Display for MazeRun {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n{}", self.grid, self.summary)
    }
}
