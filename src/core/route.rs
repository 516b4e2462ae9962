//! Vom Planer gelieferte Route.

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Geordnete Folge von Weltkoordinaten; die Reihenfolge bestimmt die Zeichenreihenfolge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    /// Erstellt eine Route aus den Punkten des Planers.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Leere Route (Planer hat nichts gefunden).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anzahl der Liniensegmente, die beim Zeichnen entstehen.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Gesamtlänge in Welteinheiten.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

impl From<Vec<Coordinate>> for Route {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Coordinate> for Route {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_count_and_length() {
        let route: Route = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(3.0, 0.0),
            Coordinate::new(3.0, 4.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(route.segment_count(), 2);
        assert_relative_eq!(route.length(), 7.0);
    }

    #[test]
    fn test_empty_route_has_no_segments() {
        let route = Route::empty();
        assert!(route.is_empty());
        assert_eq!(route.segment_count(), 0);
        assert_relative_eq!(route.length(), 0.0);
    }

    #[test]
    fn test_route_serializes_as_plain_sequence() {
        let route = Route::new(vec![Coordinate::new(1.0, 2.0)]);
        let json = serde_json::to_string(&route).expect("Route sollte serialisierbar sein");
        assert_eq!(json, "[[1.0,2.0]]");
    }
}
