use core::fmt;

use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;

use crate::error::MazeError;

/// Cardinal offsets as `(dy, dx)` in up, down, left, right order.
pub(crate) const NEUMANN: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cardinal offsets followed by the diagonals, as `(dy, dx)`.
pub(crate) const MOORE: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Moves `point` by `dy` rows and `dx` columns.
pub(crate) fn offset(point: Point, dy: i32, dx: i32) -> Point {
    Point::new(point.x + dx, point.y + dy)
}

/// State of a single maze square.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable. Every cell starts out as a wall.
    #[default]
    Wall,
    Open,
    Start,
    End,
    /// A passable cell holding one piece of swag.
    Item(String),
    /// Part of the reconstructed shortest path.
    PathMarker,
}

impl Cell {
    pub fn is_passable(&self) -> bool {
        match self {
            Cell::Wall => false,
            Cell::Open | Cell::Start | Cell::End | Cell::Item(_) | Cell::PathMarker => true,
        }
    }

    /// The label carried by an [Cell::Item], if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Cell::Item(label) => Some(label),
            Cell::Wall | Cell::Open | Cell::Start | Cell::End | Cell::PathMarker => None,
        }
    }

    /// Console glyph used by the [Display](fmt::Display) implementation of [Grid].
    pub fn glyph(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Start => 'S',
            Cell::End => 'E',
            Cell::Item(label) => label.chars().next().unwrap_or('?'),
            Cell::PathMarker => '.',
        }
    }
}

/// [Grid] is a row-major `rows` x `cols` array of [Cell] values. Coordinates are [Point]s
/// where `x` is the column and `y` the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a grid in which every cell is a [Cell::Wall]. Both dimensions must be positive
    /// and addressable by a [Point], and the cells must fit in memory.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, MazeError> {
        let invalid = MazeError::InvalidDimensions { rows, cols };
        let max_side = i32::MAX as usize;
        if rows == 0 || cols == 0 || rows > max_side || cols > max_side {
            return Err(invalid);
        }
        let len = rows.checked_mul(cols).ok_or_else(|| invalid.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::Wall);
        debug!("Allocating {}x{} grid", rows, cols);
        Ok(Grid { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.y as usize) < self.rows
            && (point.x as usize) < self.cols
    }

    fn get_ix(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(point.y as usize * self.cols + point.x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.get_ix(point).map(|ix| &self.cells[ix])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut Cell> {
        let ix = self.get_ix(point)?;
        Some(&mut self.cells[ix])
    }

    pub fn set(&mut self, point: Point, cell: Cell) -> Result<(), MazeError> {
        let slot = self.get_mut(point).ok_or(MazeError::OutOfBounds(point))?;
        *slot = cell;
        Ok(())
    }

    /// Whether `point` is inside the grid and not a wall.
    pub fn is_passable(&self, point: Point) -> bool {
        self.get(point).is_some_and(Cell::is_passable)
    }

    /// All coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows as i32)
            .flat_map(move |y| (0..self.cols as i32).map(move |x| Point::new(x, y)))
    }

    /// Number of cells satisfying `pred`.
    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&Cell) -> bool,
    {
        self.cells.iter().filter(|c| pred(c)).count()
    }

    /// Passable neighbours of `point`, using the 8-neighbourhood if `allow_diagonal` is set and
    /// the cardinal directions otherwise.
    pub fn neighborhood_points(
        &self,
        point: Point,
        allow_diagonal: bool,
    ) -> impl Iterator<Item = Point> + '_ {
        let offsets: &[(i32, i32)] = if allow_diagonal { &MOORE } else { &NEUMANN };
        offsets
            .iter()
            .map(move |&(dy, dx)| offset(point, dy, dx))
            .filter(move |p| self.is_passable(*p))
    }

    /// Generates a [UnionFind] structure linking up passable neighbours into components.
    pub fn generate_components(&self, allow_diagonal: bool) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        let forward: &[(i32, i32)] = if allow_diagonal {
            &[(1, 0), (0, 1), (1, 1), (1, -1)]
        } else {
            &[(1, 0), (0, 1)]
        };
        for point in self.positions() {
            if !self.is_passable(point) {
                continue;
            }
            let Some(parent_ix) = self.get_ix(point) else {
                continue;
            };
            for &(dy, dx) in forward {
                let neighbour = offset(point, dy, dx);
                if self.is_passable(neighbour) {
                    if let Some(ix) = self.get_ix(neighbour) {
                        components.union(parent_ix, ix);
                    }
                }
            }
        }
        components
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, components: &UnionFind<usize>, start: &Point, goal: &Point) -> bool {
        match (self.get_ix(*start), self.get_ix(*goal)) {
            (Some(start_ix), Some(goal_ix)) => !components.equiv(start_ix, goal_ix),
            _ => true,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(Cell::glyph).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
