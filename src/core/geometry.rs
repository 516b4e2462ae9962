//! Selektions-Geometrie: Rechteck aus zwei Eckpunkten und Mindestgrößen-Prüfung.
//!
//! Reine Funktionen ohne Zustand. Die Zustandsmaschine in `app::selection`
//! ruft sie bei jedem Pointer-Move bzw. Pointer-Up auf.

use super::Coordinate;

/// Standard-Mindestgröße einer Auswahl pro Achse in Welteinheiten (ca. 10 m).
pub const DEFAULT_MIN_SELECTION_SIZE: f64 = 0.0001;

/// Achsen-alignierter Rechteck-Ring mit fester Umlaufrichtung.
///
/// Reihenfolge der Ecken: unten-links, unten-rechts, oben-rechts, oben-links.
/// Der Ring ist per Konstruktion nicht selbstschneidend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRectangle {
    corners: [Coordinate; 4],
}

impl BoundingRectangle {
    /// Baut das Rechteck aus minimaler und maximaler Ecke.
    fn from_min_max(min: Coordinate, max: Coordinate) -> Self {
        Self {
            corners: [
                Coordinate::new(min.x, min.y),
                Coordinate::new(max.x, min.y),
                Coordinate::new(max.x, max.y),
                Coordinate::new(min.x, max.y),
            ],
        }
    }

    /// Prüft einen beliebigen Ring darauf, ob er ein Rechteck in fester
    /// Umlaufrichtung ist.
    ///
    /// Ein schließender fünfter Punkt (gleich dem ersten) wird akzeptiert.
    /// Gibt `None` zurück, wenn die Punktanzahl, die Achsen-Ausrichtung oder
    /// die Reihenfolge nicht passt oder Koordinaten nicht endlich sind.
    pub fn from_ring(ring: &[Coordinate]) -> Option<Self> {
        let ring = match ring {
            [first, .., last] if ring.len() == 5 && first == last => &ring[..4],
            _ => ring,
        };
        let [bl, br, tr, tl] = <[Coordinate; 4]>::try_from(ring).ok()?;

        if !ring.iter().all(|c| c.is_finite()) {
            return None;
        }

        let axis_aligned = bl.y == br.y && br.x == tr.x && tr.y == tl.y && tl.x == bl.x;
        let ordered = bl.x <= br.x && bl.y <= tl.y;
        if !axis_aligned || !ordered {
            return None;
        }

        Some(Self::from_min_max(bl, tr))
    }

    /// Ecken in fester Umlaufrichtung.
    pub fn corners(&self) -> &[Coordinate; 4] {
        &self.corners
    }

    /// Untere linke Ecke (minimale Koordinaten).
    pub fn min(&self) -> Coordinate {
        self.corners[0]
    }

    /// Obere rechte Ecke (maximale Koordinaten).
    pub fn max(&self) -> Coordinate {
        self.corners[2]
    }

    /// Ausdehnung in X.
    pub fn width(&self) -> f64 {
        self.max().x - self.min().x
    }

    /// Ausdehnung in Y.
    pub fn height(&self) -> f64 {
        self.max().y - self.min().y
    }

    /// Gibt die Ecken als geordnete Sequenz zurück (ohne Schlusspunkt).
    pub fn into_ring(self) -> Vec<Coordinate> {
        self.corners.to_vec()
    }
}

/// Berechnet das Auswahl-Rechteck aus Anker und aktueller Position.
///
/// Unabhängig von der Ziehrichtung: `compute_rectangle(a, c) == compute_rectangle(c, a)`.
pub fn compute_rectangle(anchor: Coordinate, current: Coordinate) -> BoundingRectangle {
    BoundingRectangle::from_min_max(anchor.min(current), anchor.max(current))
}

/// Prüft, ob eine Geste auf beiden Achsen mindestens `min_size` groß ist.
///
/// Eine lange, dünne Linie zählt nicht als Fläche.
pub fn is_above_minimum_size(anchor: Coordinate, current: Coordinate, min_size: f64) -> bool {
    let delta = (current - anchor).abs();
    !(delta.x < min_size || delta.y < min_size)
}
