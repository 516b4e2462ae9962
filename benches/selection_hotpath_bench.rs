use area_route_planner::core::compute_rectangle;
use area_route_planner::planner::{ImmediateScheduler, PlanError};
use area_route_planner::{
    AreaSelectionController, Coordinate, HeadlessMap, PointerIntent, Route, SelectionOptions,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;

fn bench_compute_rectangle(c: &mut Criterion) {
    let anchor = Coordinate::new(0.0012, -0.0034);
    let current = Coordinate::new(-0.0005, 0.0021);

    c.bench_function("compute_rectangle", |b| {
        b.iter(|| black_box(compute_rectangle(black_box(anchor), black_box(current))))
    });
}

fn bench_drag_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_gesture");

    for &moves in &[16usize, 256] {
        group.bench_with_input(BenchmarkId::new("moves", moves), &moves, |b, &moves| {
            let scheduler = ImmediateScheduler::new(|area: &[Coordinate]| -> Result<Route, PlanError> {
                Ok(Route::new(area.to_vec()))
            });
            let mut ctrl = AreaSelectionController::mount(
                HeadlessMap::with_viewport(1280.0, 720.0),
                scheduler,
                &SelectionOptions::default(),
            );

            b.iter(|| {
                ctrl.handle_pointer(PointerIntent::Down {
                    pixel: DVec2::new(100.0, 100.0),
                });
                for i in 0..moves {
                    let t = i as f64;
                    ctrl.handle_pointer(PointerIntent::Move {
                        pixel: DVec2::new(120.0 + t, 110.0 + t * 0.5),
                    });
                }
                let outcome = ctrl.handle_pointer(PointerIntent::Up {
                    pixel: DVec2::new(900.0, 600.0),
                });
                black_box(outcome)
            })
        });
    }

    group.finish();
}

criterion_group!(selection_benches, bench_compute_rectangle, bench_drag_gesture);
criterion_main!(selection_benches);
