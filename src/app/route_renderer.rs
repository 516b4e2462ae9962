//! Zeichnet eine geplante Route als Linie auf den Route-Layer.

use super::adapter::MapAdapter;
use crate::core::{Feature, Geometry, Route, VisualLayer};

/// Besitzt den Route-Layer und hängt ihn nur an, solange eine Linie existiert.
#[derive(Debug)]
pub struct RouteRenderer {
    layer: VisualLayer,
    attached: bool,
}

impl RouteRenderer {
    pub fn new(layer: VisualLayer) -> Self {
        Self {
            layer,
            attached: false,
        }
    }

    /// Ersetzt die bisherige Linie durch die Route.
    ///
    /// Routen mit weniger als zwei Punkten ergeben keine Linie: der Layer wird
    /// geleert und abgehängt.
    pub fn render<M: MapAdapter + ?Sized>(&mut self, map: &mut M, route: &Route) {
        self.layer.clear();
        if route.len() < 2 {
            self.detach(map);
            return;
        }

        self.layer
            .replace(Feature::new(Geometry::LineString(route.points().to_vec())));
        if self.attached {
            map.sync_layer(&self.layer);
        } else {
            map.add_layer(&self.layer);
            self.attached = true;
        }
    }

    /// Entfernt die Linie und hängt den Layer ab.
    pub fn clear<M: MapAdapter + ?Sized>(&mut self, map: &mut M) {
        self.layer.clear();
        self.detach(map);
    }

    fn detach<M: MapAdapter + ?Sized>(&mut self, map: &mut M) {
        if self.attached {
            map.remove_layer(self.layer.id());
            self.attached = false;
        }
    }

    /// Anzahl der gezeichneten Liniensegmente.
    pub fn segment_count(&self) -> usize {
        self.layer
            .feature()
            .map_or(0, |f| f.geometry.points().len().saturating_sub(1))
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn layer(&self) -> &VisualLayer {
        &self.layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HeadlessMap;
    use crate::core::{Coordinate, LayerId, Stroke, Style};

    const ROUTE: LayerId = LayerId("route");

    fn renderer() -> RouteRenderer {
        RouteRenderer::new(VisualLayer::new(
            ROUTE,
            20,
            Style::stroke(Stroke {
                color: [0.0, 0.0, 1.0, 1.0],
                width: 1.5,
            }),
        ))
    }

    fn route(n: usize) -> Route {
        (0..n).map(|i| Coordinate::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn test_render_attaches_line_in_order() {
        let mut map = HeadlessMap::new();
        let mut r = renderer();

        r.render(&mut map, &route(3));

        assert_eq!(r.segment_count(), 2);
        let layer = map.layer(ROUTE).expect("Route-Layer angehängt");
        let feature = layer.feature().expect("Linie vorhanden");
        assert_eq!(feature.geometry, Geometry::LineString(route(3).into_points()));
    }

    #[test]
    fn test_second_render_replaces_line() {
        let mut map = HeadlessMap::new();
        let mut r = renderer();

        r.render(&mut map, &route(3));
        r.render(&mut map, &route(5));

        assert_eq!(r.segment_count(), 4);
        assert_eq!(map.stats().adds, 1);
        assert_eq!(map.stats().syncs, 1);
        assert_eq!(map.layer(ROUTE).map(VisualLayer::feature_count), Some(1));
    }

    #[test]
    fn test_short_route_detaches_layer() {
        let mut map = HeadlessMap::new();
        let mut r = renderer();

        r.render(&mut map, &route(3));
        r.render(&mut map, &route(1));

        assert_eq!(r.segment_count(), 0);
        assert!(!r.is_attached());
        assert!(!map.is_attached(ROUTE));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut map = HeadlessMap::new();
        let mut r = renderer();

        r.clear(&mut map);
        r.render(&mut map, &route(2));
        r.clear(&mut map);
        r.clear(&mut map);

        assert_eq!(map.stats().removes, 1);
        assert!(r.layer().is_empty());
    }
}
