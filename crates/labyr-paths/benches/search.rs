use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use labyr_core::{MapGen, Maze, WallRule};
use labyr_paths::{BidirectionalSearch, bfs_path};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn cluttered(rows: i32, cols: i32, density: f64) -> Maze {
    let mut mg = MapGen::new(rows, cols, StdRng::seed_from_u64(17)).expect("non-empty maze");
    mg.random_walls(&WallRule {
        density,
        open_border: true,
    });
    mg.finish()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("corner_to_corner");
    for (name, density) in [("open", 0.0), ("cluttered", 0.25)] {
        let maze = cluttered(200, 300, density);
        let start = maze.bounds().min;
        let goal = maze.bounds().max.shift(-1, -1);
        let search = BidirectionalSearch::default();

        group.bench_with_input(BenchmarkId::new("bidirectional", name), &maze, |b, m| {
            b.iter(|| search.search(black_box(m), start, goal))
        });
        group.bench_with_input(BenchmarkId::new("reference_bfs", name), &maze, |b, m| {
            b.iter(|| bfs_path(black_box(m), start, goal))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
