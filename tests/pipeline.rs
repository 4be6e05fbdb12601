use grid_util::point::Point;
use rand::prelude::*;
use swag_maze::{
    carve, explore, find_path, reconstruct, summarize, trace_path, Cell, Grid, SwagMaze,
    DEFAULT_SWAG,
};

#[test]
fn same_seed_same_run() {
    let maze = SwagMaze::new(21, 31, DEFAULT_SWAG);
    for seed in [0, 1, 99] {
        let a = maze.build_seeded(seed).unwrap();
        let b = maze.build_seeded(seed).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
        assert_eq!(a.path, b.path);
        assert_eq!(a.summary, b.summary);
    }
}

#[test]
fn small_maze_end_to_end() {
    let swag = ["a", "b"];
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Point::new(0, 0);
        let mut grid = Grid::new(5, 5).unwrap();
        carve(&mut grid, start, &mut rng).unwrap();
        let end = explore(&mut grid, start, &swag, 0.5, &mut rng).unwrap();
        let explored = grid.clone();

        assert_ne!(end, start);
        assert_eq!(explored.count(|c| *c == Cell::Start), 1);
        assert_eq!(explored.count(|c| *c == Cell::End), 1);

        let predecessors = find_path(&grid, start, end).unwrap();
        let path = trace_path(&predecessors, start, end).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));

        let collected = reconstruct(&mut grid, &predecessors, end, &swag);
        // Items the explorer placed on the interior of the path, read from the end backwards.
        let on_path = path[1..path.len() - 1]
            .iter()
            .rev()
            .filter_map(|p| explored.get(*p).and_then(Cell::label))
            .map(str::to_owned)
            .collect::<Vec<_>>();
        assert_eq!(collected, on_path);

        for p in &path[1..path.len() - 1] {
            assert_eq!(grid.get(*p), Some(&Cell::PathMarker));
        }
        assert_eq!(grid.get(start), Some(&Cell::Start));
        assert_eq!(grid.get(end), Some(&Cell::End));
        // Cells off the path are untouched.
        for p in grid.positions().filter(|p| !path.contains(p)) {
            assert_eq!(grid.get(p), explored.get(p));
        }

        let summary = summarize(&collected, &swag);
        let total: usize = summary.counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, collected.len());
        assert!(summary.sorted.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn cardinal_only_paths_follow_corridors() {
    let mut maze = SwagMaze::new(15, 15, DEFAULT_SWAG);
    maze.allow_diagonal_move = false;
    let run = maze.build_seeded(12).unwrap();
    for w in run.path.windows(2) {
        let (a, b) = (w[0], w[1]);
        assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
    }
}

#[test]
fn collected_labels_are_configured_swag() {
    let mut maze = SwagMaze::new(25, 25, DEFAULT_SWAG);
    maze.item_probability = 0.6;
    let run = maze.build_seeded(4).unwrap();
    assert!(run
        .summary
        .collected
        .iter()
        .all(|label| DEFAULT_SWAG.contains(&label.as_str())));
    assert_eq!(run.summary.sorted.len(), run.summary.collected.len());
    assert_eq!(run.grid.count(|c| *c == Cell::Start), 1);
    assert_eq!(run.grid.count(|c| *c == Cell::End), 1);
}
