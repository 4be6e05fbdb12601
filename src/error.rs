use grid_util::point::Point;
use thiserror::Error;

/// Everything that can go wrong while building a maze and routing through it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    /// A grid needs at least one row and one column, and no more cells than can be addressed.
    #[error("invalid maze dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// The explorer has nothing to scatter.
    #[error("no swag items configured")]
    EmptyItemSet,
    #[error("coordinate {0:?} lies outside the grid")]
    OutOfBounds(Point),
    /// The predecessor chain never links `end` back to `start`.
    #[error("no path from {start:?} to {end:?}")]
    PathUnreachable { start: Point, end: Point },
    #[error("item probability {0} is not within [0, 1]")]
    InvalidProbability(f64),
}
