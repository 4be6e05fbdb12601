use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use swag_maze::{carve, explore, find_path_with, SwagMaze, DEFAULT_SWAG};

fn pipeline_bench(c: &mut Criterion) {
    for size in [21, 101] {
        let maze = SwagMaze::new(size, size, DEFAULT_SWAG);
        c.bench_function(format!("pipeline {size}x{size}").as_str(), |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(maze.build_seeded(seed))
            })
        });
    }
}

fn path_bench(c: &mut Criterion) {
    for allow_diag in [false, true] {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = swag_maze::Grid::new(201, 201).unwrap();
        let start = Point::new(0, 0);
        carve(&mut grid, start, &mut rng).unwrap();
        let end = explore(&mut grid, start, &DEFAULT_SWAG, 0.1, &mut rng).unwrap();
        let diag_str = if allow_diag { "8-grid" } else { "4-grid" };

        c.bench_function(format!("astar 201x201, {diag_str}").as_str(), |b| {
            b.iter(|| black_box(find_path_with(&grid, start, end, allow_diag)))
        });
    }
}

criterion_group!(benches, pipeline_bench, path_bench);
criterion_main!(benches);
