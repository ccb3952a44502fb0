criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        tracing_empty_catalog_grid,
        tracing_with_mirrors,
        retracing_one_mirror,
        optimizing_corridor_run,
        optimizing_spiral_inward,
}

use mirrormaze::grid::Cell;
use mirrormaze::grid::Mirror;
use mirrormaze::grid::Placement;
use mirrormaze::puzzle::catalog;
use mirrormaze::search::Optimizer;
use mirrormaze::trace::retrace;
use mirrormaze::trace::trace;
use mirrormaze::trace::MirrorMap;

fn tracing_empty_catalog_grid(c: &mut criterion::Criterion) {
    let grid = catalog::lookup("corridor-run").unwrap();
    c.bench_function("trace the bare corridor-run grid", |b| {
        b.iter(|| trace(&grid, &MirrorMap::new()))
    });
}

fn tracing_with_mirrors(c: &mut criterion::Criterion) {
    let grid = catalog::lookup("corridor-run").unwrap();
    let mirrors = MirrorMap::from([
        (Cell::new(1, 1), Mirror::Backslash),
        (Cell::new(1, 6), Mirror::Slash),
        (Cell::new(5, 6), Mirror::Backslash),
    ]);
    c.bench_function("trace corridor-run with three mirrors", |b| {
        b.iter(|| trace(&grid, &mirrors))
    });
}

fn retracing_one_mirror(c: &mut criterion::Criterion) {
    let grid = catalog::lookup("corridor-run").unwrap();
    let mirrors = MirrorMap::new();
    let existing = trace(&grid, &mirrors);
    let new = Placement::new(Cell::new(3, 1), Mirror::Backslash);
    c.bench_function("incrementally re-trace one new mirror", |b| {
        b.iter(|| retrace(&grid, &mirrors, &existing, new))
    });
}

fn optimizing_corridor_run(c: &mut criterion::Criterion) {
    let grid = catalog::lookup("corridor-run").unwrap();
    c.bench_function("beam search corridor-run at width 200", |b| {
        b.iter(|| Optimizer::new(200, true).solve(&grid))
    });
}

fn optimizing_spiral_inward(c: &mut criterion::Criterion) {
    let grid = catalog::lookup("spiral-inward").unwrap();
    c.bench_function("beam search spiral-inward at width 50", |b| {
        b.iter(|| Optimizer::new(50, true).solve(&grid))
    });
}
