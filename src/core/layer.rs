//! Visuelle Layer mit höchstens einem Feature (Geometrie + Stil).

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// RGBA-Farbe mit Komponenten in 0.0..=1.0.
pub type Rgba = [f32; 4];

/// Eindeutiger Name eines Layers innerhalb einer Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub &'static str);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Linienstil.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba,
    /// Linienbreite in Screen-Pixeln
    pub width: f32,
}

/// Darstellungsstil eines Features oder Layers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

impl Style {
    /// Reiner Linienstil ohne Füllung.
    pub fn stroke(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }
}

/// Geometrie eines Features in Weltkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Geschlossener Ring (ohne wiederholten Schlusspunkt)
    Polygon(Vec<Coordinate>),
    /// Offene Linie durch alle Punkte in Reihenfolge
    LineString(Vec<Coordinate>),
}

impl Geometry {
    pub fn points(&self) -> &[Coordinate] {
        match self {
            Geometry::Polygon(points) | Geometry::LineString(points) => points,
        }
    }
}

/// Geometrie mit optionalem eigenen Stil (überschreibt den Layer-Stil).
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub style: Option<Style>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            style: None,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// Benannter Container für null oder ein Feature.
///
/// Der Inhalt wird nie in-place verändert: `replace` verwirft das alte Feature
/// und setzt ein neues, `clear` entfernt es.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualLayer {
    id: LayerId,
    z_index: i32,
    style: Style,
    feature: Option<Feature>,
}

impl VisualLayer {
    pub fn new(id: LayerId, z_index: i32, style: Style) -> Self {
        Self {
            id,
            z_index,
            style,
            feature: None,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Layer-Standardstil (gilt für Features ohne eigenen Stil).
    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn feature(&self) -> Option<&Feature> {
        self.feature.as_ref()
    }

    /// Stil, mit dem das aktuelle Feature gezeichnet wird.
    pub fn effective_style(&self) -> Option<&Style> {
        self.feature
            .as_ref()
            .map(|feature| feature.style.as_ref().unwrap_or(&self.style))
    }

    /// Anzahl der lebenden Features (0 oder 1).
    pub fn feature_count(&self) -> usize {
        usize::from(self.feature.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.feature.is_none()
    }

    /// Ersetzt das Feature (remove-then-add) und gibt das alte zurück.
    pub fn replace(&mut self, feature: Feature) -> Option<Feature> {
        let previous = self.feature.take();
        self.feature = Some(feature);
        previous
    }

    /// Entfernt das Feature.
    pub fn clear(&mut self) -> Option<Feature> {
        self.feature.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONE: LayerId = LayerId("zone");

    fn polygon() -> Feature {
        Feature::new(Geometry::Polygon(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
        ]))
    }

    #[test]
    fn test_replace_keeps_single_feature() {
        let mut layer = VisualLayer::new(ZONE, 1, Style::default());
        assert!(layer.replace(polygon()).is_none());
        assert!(layer.replace(polygon()).is_some());
        assert_eq!(layer.feature_count(), 1);
    }

    #[test]
    fn test_clear_empties_layer() {
        let mut layer = VisualLayer::new(ZONE, 1, Style::default());
        layer.replace(polygon());
        assert!(layer.clear().is_some());
        assert!(layer.is_empty());
        assert!(layer.clear().is_none());
    }

    #[test]
    fn test_feature_style_overrides_layer_style() {
        let layer_style = Style {
            fill: Some([0.0, 1.0, 0.0, 0.3]),
            stroke: None,
        };
        let feature_style = Style::stroke(Stroke {
            color: [0.0, 0.0, 1.0, 1.0],
            width: 1.5,
        });

        let mut layer = VisualLayer::new(ZONE, 1, layer_style);
        assert!(layer.effective_style().is_none());

        layer.replace(polygon());
        assert_eq!(layer.effective_style(), Some(&layer_style));

        layer.replace(polygon().with_style(feature_style));
        assert_eq!(layer.effective_style(), Some(&feature_style));
    }
}
