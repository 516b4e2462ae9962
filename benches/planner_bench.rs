use area_route_planner::planner::{CoveragePlanner, JsonPlannerBridge, PlannerPoint};
use area_route_planner::{Coordinate, PathPlanner, Route};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn build_rectangle(width: f64, height: f64) -> Vec<Coordinate> {
    vec![
        Coordinate::new(0.0, 0.0),
        Coordinate::new(width, 0.0),
        Coordinate::new(width, height),
        Coordinate::new(0.0, height),
    ]
}

fn bench_coverage_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage_planning");
    let planner = CoveragePlanner::new(0.00002);

    // Seitenlänge in Welteinheiten → 10, 100, 1000 Bahnen
    for &side in &[0.0002f64, 0.002, 0.02] {
        let area = build_rectangle(side, side * 0.5);
        group.bench_with_input(BenchmarkId::new("rectangle", side), &area, |b, area| {
            b.iter(|| {
                let route = planner.plan(black_box(area)).expect("Planung fehlgeschlagen");
                black_box(route.len())
            })
        });
    }

    group.finish();
}

fn bench_json_bridge(c: &mut Criterion) {
    let native = CoveragePlanner::new(0.00002);
    let bridge = JsonPlannerBridge::new(move |request: &str| -> Result<String, String> {
        let area: Vec<Coordinate> = serde_json::from_str::<Vec<PlannerPoint>>(request)
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(Coordinate::from)
            .collect();
        let route: Route = native.plan(&area).map_err(|e| e.to_string())?;
        let points: Vec<PlannerPoint> = route.into_points().into_iter().map(PlannerPoint::from).collect();
        serde_json::to_string(&points).map_err(|e| e.to_string())
    });
    let area = build_rectangle(0.002, 0.001);

    c.bench_function("json_bridge_roundtrip", |b| {
        b.iter(|| {
            let route = bridge.plan(black_box(&area)).expect("Brücke fehlgeschlagen");
            black_box(route.len())
        })
    });
}

criterion_group!(planner_benches, bench_coverage_planning, bench_json_bridge);
criterion_main!(planner_benches);
