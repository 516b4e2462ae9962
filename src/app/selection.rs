//! Zustandsmaschine der Flächenauswahl: Idle → Dragging → Committed.
//!
//! Wird ausschließlich über Pointer-Events getrieben. Die Maschine besitzt den
//! Vorschau-Layer und die Pan-Unterdrückung; das Anhängen des Layers an die
//! Karte übernimmt der Controller beim Mount.

use super::adapter::{Cursor, MapAdapter};
use super::pan_guard::PanSuppression;
use crate::core::{
    compute_rectangle, is_above_minimum_size, BoundingRectangle, Coordinate, Feature, Geometry,
    VisualLayer,
};
use glam::DVec2;

/// Aktueller Zustand der Auswahl-Geste.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    /// Taste gedrückt, Rechteck wird gezogen
    Dragging {
        anchor: Coordinate,
        preview: Option<BoundingRectangle>,
    },
    /// Letzte Geste wurde angenommen
    Committed { area: Vec<Coordinate> },
}

/// Ergebnis eines einzelnen Pointer-Events.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    /// Keine Wirkung (nicht im Drag oder keine Weltkoordinate)
    Ignored,
    DragStarted { anchor: Coordinate },
    PreviewUpdated(BoundingRectangle),
    /// Geste unter der Mindestgröße verworfen
    Rejected,
    /// Angenommene Fläche als Ring in fester Umlaufrichtung
    Committed(Vec<Coordinate>),
}

/// Auswahl-Zustandsmaschine mit Vorschau-Layer.
#[derive(Debug)]
pub struct AreaSelection {
    state: SelectionState,
    preview_layer: VisualLayer,
    pan_guard: PanSuppression,
    min_size: f64,
}

impl AreaSelection {
    pub fn new(preview_layer: VisualLayer, min_size: f64) -> Self {
        Self {
            state: SelectionState::Idle,
            preview_layer,
            pan_guard: PanSuppression::new(),
            min_size,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging { .. })
    }

    pub fn preview_layer(&self) -> &VisualLayer {
        &self.preview_layer
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn pan_suppressed(&self) -> bool {
        self.pan_guard.is_held()
    }

    /// Startet eine neue Geste an der Pointer-Position.
    pub fn pointer_down<M: MapAdapter + ?Sized>(
        &mut self,
        map: &mut M,
        pixel: DVec2,
    ) -> PointerOutcome {
        let Some(anchor) = world_at(map, pixel) else {
            return PointerOutcome::Ignored;
        };

        self.clear_preview(map);
        map.set_cursor(Cursor::Crosshair);
        self.pan_guard.acquire(map);
        self.state = SelectionState::Dragging {
            anchor,
            preview: None,
        };
        PointerOutcome::DragStarted { anchor }
    }

    /// Aktualisiert das Vorschau-Rechteck während des Ziehens.
    pub fn pointer_move<M: MapAdapter + ?Sized>(
        &mut self,
        map: &mut M,
        pixel: DVec2,
    ) -> PointerOutcome {
        let SelectionState::Dragging { anchor, preview } = &mut self.state else {
            return PointerOutcome::Ignored;
        };
        let Some(current) = world_at(map, pixel) else {
            return PointerOutcome::Ignored;
        };

        let rect = compute_rectangle(*anchor, current);
        *preview = Some(rect);
        self.preview_layer
            .replace(Feature::new(Geometry::Polygon(rect.into_ring())));
        map.sync_layer(&self.preview_layer);
        PointerOutcome::PreviewUpdated(rect)
    }

    /// Beendet die Geste: verwirft sie unter der Mindestgröße, sonst wird bestätigt.
    pub fn pointer_up<M: MapAdapter + ?Sized>(
        &mut self,
        map: &mut M,
        pixel: DVec2,
    ) -> PointerOutcome {
        let SelectionState::Dragging { anchor, .. } = self.state else {
            return PointerOutcome::Ignored;
        };

        // Pan muss auch ohne gültige Endposition wieder freigegeben werden
        let Some(current) = world_at(map, pixel) else {
            return self.reject(map);
        };
        if !is_above_minimum_size(anchor, current, self.min_size) {
            return self.reject(map);
        }

        let rect = compute_rectangle(anchor, current);
        self.preview_layer
            .replace(Feature::new(Geometry::Polygon(rect.into_ring())));
        map.sync_layer(&self.preview_layer);

        let Some(area) = self.validated_preview() else {
            log::warn!("Auswahl-Geometrie ungültig, Geste verworfen");
            return self.reject(map);
        };

        map.set_cursor(Cursor::Default);
        self.pan_guard.release(map);
        self.state = SelectionState::Committed { area: area.clone() };
        PointerOutcome::Committed(area)
    }

    /// Bricht eine laufende Geste ab und gibt den Pan frei.
    ///
    /// Eine bereits bestätigte Fläche bleibt sichtbar.
    pub fn cancel<M: MapAdapter + ?Sized>(&mut self, map: &mut M) {
        if self.is_dragging() {
            self.clear_preview(map);
            map.set_cursor(Cursor::Default);
            self.state = SelectionState::Idle;
        }
        self.pan_guard.release(map);
    }

    fn reject<M: MapAdapter + ?Sized>(&mut self, map: &mut M) -> PointerOutcome {
        self.clear_preview(map);
        map.set_cursor(Cursor::Default);
        self.pan_guard.release(map);
        self.state = SelectionState::Idle;
        PointerOutcome::Rejected
    }

    fn clear_preview<M: MapAdapter + ?Sized>(&mut self, map: &mut M) {
        if self.preview_layer.clear().is_some() {
            map.sync_layer(&self.preview_layer);
        }
    }

    /// Liest den Vorschau-Ring zurück und prüft ihn als Rechteck.
    fn validated_preview(&self) -> Option<Vec<Coordinate>> {
        let feature = self.preview_layer.feature()?;
        let Geometry::Polygon(ring) = &feature.geometry else {
            return None;
        };
        BoundingRectangle::from_ring(ring).map(BoundingRectangle::into_ring)
    }
}

/// Weltkoordinate an der Pixelposition; nicht-endliche Werte zählen als keine.
fn world_at<M: MapAdapter + ?Sized>(map: &M, pixel: DVec2) -> Option<Coordinate> {
    map.pixel_to_world(pixel).filter(|c| c.is_finite())
}
