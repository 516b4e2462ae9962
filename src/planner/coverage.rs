//! Abdeckungsroute (Boustrophedon) über ein Polygon.
//!
//! Parallele Bahnen im Abstand `swath_width` werden mit den Polygonkanten
//! geschnitten und abwechselnd hin und zurück zu einer Route verbunden.

use super::{PathPlanner, PlanError};
use crate::core::{Coordinate, Route};

/// Obergrenze für die Anzahl Bahnen pro Planung (schützt vor Riesenflächen bei kleiner Bahnbreite).
const MAX_SWATH_LINES: usize = 100_000;

/// Richtung der Bahnen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Waagerechte Bahnen, gestapelt entlang Y
    Horizontal,
    /// Senkrechte Bahnen, gestapelt entlang X
    Vertical,
}

/// Ein Bahnabschnitt innerhalb des Polygons.
#[derive(Debug, Clone, Copy)]
struct Segment {
    start: Coordinate,
    end: Coordinate,
}

/// Boustrophedon-Planer mit fester Bahnbreite (Welteinheiten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoveragePlanner {
    swath_width: f64,
}

impl CoveragePlanner {
    pub fn new(swath_width: f64) -> Self {
        Self { swath_width }
    }

    pub fn swath_width(&self) -> f64 {
        self.swath_width
    }

    /// Berechnet die Abdeckungsroute für ein (offenes oder geschlossenes) Polygon.
    pub fn compute_coverage_path(&self, polygon: &[Coordinate]) -> Result<Route, PlanError> {
        if !(self.swath_width.is_finite() && self.swath_width > 0.0) {
            return Err(PlanError::InvalidSwathWidth(self.swath_width));
        }
        if polygon.len() < 3 {
            return Err(PlanError::InvalidPolygon {
                points: polygon.len(),
            });
        }

        let ring = close_ring(polygon);
        let (min, max) = bounds(&ring);
        let direction = if max.x - min.x >= max.y - min.y {
            SweepDirection::Horizontal
        } else {
            SweepDirection::Vertical
        };

        let (lo, hi) = match direction {
            SweepDirection::Horizontal => (min.y, max.y),
            SweepDirection::Vertical => (min.x, max.x),
        };
        let lines = swath_lines(lo, hi, self.swath_width)?;

        let mut segments: Vec<Segment> = lines
            .iter()
            .flat_map(|&line| line_segments(&ring, line, direction))
            .collect();

        segments.sort_by(|a, b| {
            let (ka, kb) = match direction {
                SweepDirection::Horizontal => (a.start.y, b.start.y),
                SweepDirection::Vertical => (a.start.x, b.start.x),
            };
            ka.total_cmp(&kb)
        });

        Ok(join_boustrophedon(&segments))
    }
}

impl PathPlanner for CoveragePlanner {
    fn plan(&self, area: &[Coordinate]) -> Result<Route, PlanError> {
        self.compute_coverage_path(area)
    }
}

/// Schließt den Ring, falls der letzte Punkt nicht dem ersten entspricht.
fn close_ring(polygon: &[Coordinate]) -> Vec<Coordinate> {
    let mut ring = polygon.to_vec();
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }
    ring
}

fn bounds(ring: &[Coordinate]) -> (Coordinate, Coordinate) {
    ring.iter().fold(
        (Coordinate::splat(f64::MAX), Coordinate::splat(f64::MIN)),
        |(min, max), &p| (min.min(p), max.max(p)),
    )
}

/// Bahn-Positionen: `lo + w/2, lo + 3w/2, …` plus Abschlussbahn bei `hi - w/2`.
///
/// Jede Bahn wird aus ihrem Index berechnet. Weit vom Ursprung entfernt kann
/// `lo + i * w` auf denselben Wert runden, daher werden Duplikate entfernt.
fn swath_lines(lo: f64, hi: f64, width: f64) -> Result<Vec<f64>, PlanError> {
    let passes = (hi - lo) / width;
    if !passes.is_finite() || passes > MAX_SWATH_LINES as f64 {
        return Err(PlanError::TooManySwaths {
            lines: if passes.is_finite() {
                passes.ceil() as usize
            } else {
                usize::MAX
            },
            max: MAX_SWATH_LINES,
        });
    }

    let half = width / 2.0;
    let last_line = hi - half;
    let mut lines: Vec<f64> = (0..=MAX_SWATH_LINES)
        .map(|index| lo + half + index as f64 * width)
        .take_while(|&line| line <= last_line)
        .collect();
    lines.dedup();

    if lines.last().is_none_or(|&last| last < last_line) {
        lines.push(last_line);
    }
    Ok(lines)
}

/// Schneidet eine Bahn mit allen Kanten und paart die sortierten Schnittpunkte.
///
/// Halboffene Kantenregel `[a, b)`, damit gemeinsame Eckpunkte nur einmal zählen.
/// Kanten parallel zur Bahn werden übersprungen.
fn line_segments(ring: &[Coordinate], line: f64, direction: SweepDirection) -> Vec<Segment> {
    let mut hits: Vec<f64> = Vec::new();

    for edge in ring.windows(2) {
        // (u, v): u = Koordinate entlang der Bahn, v = Koordinate quer dazu
        let (u1, v1, u2, v2) = match direction {
            SweepDirection::Horizontal => (edge[0].x, edge[0].y, edge[1].x, edge[1].y),
            SweepDirection::Vertical => (edge[0].y, edge[0].x, edge[1].y, edge[1].x),
        };
        if (v1 - v2).abs() < f64::EPSILON {
            continue;
        }
        if (v1 <= line && line < v2) || (v2 <= line && line < v1) {
            let t = (line - v1) / (v2 - v1);
            hits.push(u1 + t * (u2 - u1));
        }
    }

    hits.sort_by(f64::total_cmp);

    hits.chunks_exact(2)
        .map(|pair| match direction {
            SweepDirection::Horizontal => Segment {
                start: Coordinate::new(pair[0], line),
                end: Coordinate::new(pair[1], line),
            },
            SweepDirection::Vertical => Segment {
                start: Coordinate::new(line, pair[0]),
                end: Coordinate::new(line, pair[1]),
            },
        })
        .collect()
}

/// Verbindet die Abschnitte hin und zurück (jeder ungerade Abschnitt umgekehrt).
fn join_boustrophedon(segments: &[Segment]) -> Route {
    segments
        .iter()
        .enumerate()
        .flat_map(|(index, segment)| {
            if index % 2 == 1 {
                [segment.end, segment.start]
            } else {
                [segment.start, segment.end]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(w: f64, h: f64) -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(w, 0.0),
            Coordinate::new(w, h),
            Coordinate::new(0.0, h),
        ]
    }

    #[test]
    fn test_wide_rectangle_uses_horizontal_passes() {
        let planner = CoveragePlanner::new(10.0);
        let route = planner
            .compute_coverage_path(&rect(100.0, 30.0))
            .expect("Rechteck sollte planbar sein");

        // Bahnen bei y = 5, 15, 25 → 3 Abschnitte à 2 Punkte
        let points = route.points();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Coordinate::new(0.0, 5.0));
        assert_eq!(points[1], Coordinate::new(100.0, 5.0));
        // Zweite Bahn läuft zurück
        assert_eq!(points[2], Coordinate::new(100.0, 15.0));
        assert_eq!(points[3], Coordinate::new(0.0, 15.0));
        assert_eq!(points[4], Coordinate::new(0.0, 25.0));
        assert_eq!(points[5], Coordinate::new(100.0, 25.0));
    }

    #[test]
    fn test_tall_rectangle_uses_vertical_passes() {
        let planner = CoveragePlanner::new(10.0);
        let route = planner
            .compute_coverage_path(&rect(20.0, 100.0))
            .expect("Rechteck sollte planbar sein");

        let points = route.points();
        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[0].x, 5.0);
        assert_relative_eq!(points[2].x, 15.0);
        assert_relative_eq!(points[0].y, 0.0);
        assert_relative_eq!(points[1].y, 100.0);
        assert_relative_eq!(points[2].y, 100.0);
        assert_relative_eq!(points[3].y, 0.0);
    }

    #[test]
    fn test_final_pass_is_added_when_last_falls_short() {
        // Höhe 25: Bahnen bei 5, 15 und Abschluss bei 20
        let lines = swath_lines(0.0, 25.0, 10.0).expect("Bahnen sollten berechenbar sein");
        assert_eq!(lines, vec![5.0, 15.0, 20.0]);
    }

    #[test]
    fn test_closed_ring_is_accepted() {
        let mut polygon = rect(100.0, 30.0);
        polygon.push(polygon[0]);
        let route = CoveragePlanner::new(10.0)
            .compute_coverage_path(&polygon)
            .expect("Geschlossener Ring sollte planbar sein");
        assert_eq!(route.len(), 6);
    }

    #[test]
    fn test_triangle_passes_shrink_towards_apex() {
        let triangle = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(100.0, 0.0),
            Coordinate::new(50.0, 40.0),
        ];
        let route = CoveragePlanner::new(10.0)
            .compute_coverage_path(&triangle)
            .expect("Dreieck sollte planbar sein");

        let points = route.points();
        assert!(points.len() >= 4);
        let first_len = (points[1].x - points[0].x).abs();
        let second_len = (points[3].x - points[2].x).abs();
        assert!(second_len < first_len);
    }

    #[test]
    fn test_too_few_points_is_rejected() {
        let err = CoveragePlanner::new(10.0)
            .compute_coverage_path(&[Coordinate::ZERO, Coordinate::ONE])
            .unwrap_err();
        assert_eq!(err, PlanError::InvalidPolygon { points: 2 });
    }

    #[test]
    fn test_invalid_swath_width_is_rejected() {
        for width in [0.0, -1.0, f64::NAN] {
            let result = CoveragePlanner::new(width).compute_coverage_path(&rect(1.0, 1.0));
            assert!(matches!(result, Err(PlanError::InvalidSwathWidth(_))));
        }
    }

    #[test]
    fn test_huge_area_is_rejected() {
        let result = CoveragePlanner::new(1e-9).compute_coverage_path(&rect(1.0, 1.0));
        assert!(matches!(result, Err(PlanError::TooManySwaths { .. })));
    }

    #[test]
    fn test_span_overflowing_to_infinity_is_rejected() {
        let polygon = vec![
            Coordinate::new(-1e308, -1e308),
            Coordinate::new(1.5e308, -1e308),
            Coordinate::new(1.5e308, 1.5e308),
            Coordinate::new(-1e308, 1.5e308),
        ];
        let result = CoveragePlanner::new(1.0).compute_coverage_path(&polygon);
        assert_eq!(
            result,
            Err(PlanError::TooManySwaths {
                lines: usize::MAX,
                max: MAX_SWATH_LINES,
            })
        );
    }

    #[test]
    fn test_tiny_swath_far_from_origin_terminates() {
        let origin = Coordinate::new(1e12, 1e12);
        let polygon: Vec<Coordinate> = rect(0.0002, 0.0001)
            .into_iter()
            .map(|p| p + origin)
            .collect();

        let route = CoveragePlanner::new(0.00002)
            .compute_coverage_path(&polygon)
            .expect("Fläche weit vom Ursprung sollte planbar sein");
        assert_eq!(route.len() % 2, 0);

        let lines = swath_lines(origin.y, origin.y + 0.0001, 0.00002)
            .expect("Bahnen sollten berechenbar sein");
        assert!(!lines.is_empty());
        assert!(lines.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_area_narrower_than_swath_yields_empty_route() {
        let route = CoveragePlanner::new(10.0)
            .compute_coverage_path(&rect(0.0002, 0.0002))
            .expect("Kleine Fläche ist kein Fehler");
        assert!(route.is_empty());
    }
}
