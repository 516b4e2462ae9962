//! In-Memory-Kartenansicht: Kamera, angehängte Layer, Cursor, Drag-Pan und Listener.
//!
//! Implementiert `MapAdapter` ohne eigene Darstellung. Der egui-Host zeichnet
//! ihren Zustand, Tests und Benchmarks prüfen ihn direkt.

use super::adapter::{Cursor, InteractionHandle, ListenerKey, MapAdapter};
use crate::core::{Camera2D, Coordinate, LayerId, VisualLayer};
use glam::DVec2;
use indexmap::IndexMap;

/// Handle der eingebauten Drag-Pan-Interaktion.
pub const DRAG_PAN: InteractionHandle = InteractionHandle(1);

/// Zähler für Layer-Operationen (Diagnose und Tests).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerOpStats {
    pub adds: usize,
    pub syncs: usize,
    pub removes: usize,
}

/// Kartenzustand ohne Rendering.
#[derive(Debug)]
pub struct HeadlessMap {
    /// Kamera für Pixel ↔ Welt
    pub camera: Camera2D,
    viewport_size: DVec2,
    cursor: Cursor,
    /// Angehängte Layer in Attach-Reihenfolge
    layers: IndexMap<LayerId, VisualLayer>,
    drag_pan_active: bool,
    listeners: Vec<ListenerKey>,
    next_listener: u64,
    stats: LayerOpStats,
}

impl HeadlessMap {
    /// Erstellt eine Karte ohne Viewport (Pixel-Umrechnung liefert `None`).
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: DVec2::ZERO,
            cursor: Cursor::Default,
            layers: IndexMap::new(),
            drag_pan_active: true,
            listeners: Vec::new(),
            next_listener: 1,
            stats: LayerOpStats::default(),
        }
    }

    /// Erstellt eine Karte mit gesetzter Viewport-Größe in Pixeln.
    pub fn with_viewport(width: f64, height: f64) -> Self {
        let mut view = Self::new();
        view.set_viewport_size(DVec2::new(width, height));
        view
    }

    pub fn set_viewport_size(&mut self, size: DVec2) {
        self.viewport_size = size;
    }

    pub fn viewport_size(&self) -> DVec2 {
        self.viewport_size
    }

    /// Rechnet Welt → Pixel (für das Zeichnen).
    pub fn world_to_pixel(&self, world: Coordinate) -> DVec2 {
        self.camera.world_to_screen(world, self.viewport_size)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_pan_active(&self) -> bool {
        self.drag_pan_active
    }

    /// Ob mindestens ein Pointer-Handler angemeldet ist.
    pub fn has_pointer_handlers(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn layer(&self, id: LayerId) -> Option<&VisualLayer> {
        self.layers.get(&id)
    }

    pub fn is_attached(&self, id: LayerId) -> bool {
        self.layers.contains_key(&id)
    }

    pub fn attached_layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Angehängte Layer nach z-Index (stabil bei gleichem z-Index).
    pub fn layers_in_draw_order(&self) -> Vec<&VisualLayer> {
        let mut ordered: Vec<&VisualLayer> = self.layers.values().collect();
        ordered.sort_by_key(|layer| layer.z_index());
        ordered
    }

    pub fn stats(&self) -> LayerOpStats {
        self.stats
    }

    /// Verschiebt die Kamera um ein Pixel-Delta, sofern Drag-Pan aktiv ist.
    ///
    /// Gibt `true` zurück, wenn tatsächlich verschoben wurde.
    pub fn pan_by_pixels(&mut self, delta: DVec2) -> bool {
        if !self.drag_pan_active {
            return false;
        }
        let world_delta = self
            .camera
            .screen_delta_to_world(delta, self.viewport_size.y);
        self.camera.pan(-world_delta);
        true
    }

    /// Zoomt auf eine Pixelposition.
    pub fn zoom_at_pixel(&mut self, factor: f64, pixel: DVec2) {
        match self.pixel_to_world(pixel) {
            Some(focus) => self.camera.zoom_towards(factor, focus),
            None => self.camera.zoom_by(factor),
        }
    }
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapAdapter for HeadlessMap {
    fn pixel_to_world(&self, pixel: DVec2) -> Option<Coordinate> {
        if self.viewport_size.x <= 0.0 || self.viewport_size.y <= 0.0 {
            return None;
        }
        Some(self.camera.screen_to_world(pixel, self.viewport_size))
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn add_layer(&mut self, layer: &VisualLayer) {
        self.stats.adds += 1;
        self.layers.insert(layer.id(), layer.clone());
    }

    fn sync_layer(&mut self, layer: &VisualLayer) {
        if let Some(slot) = self.layers.get_mut(&layer.id()) {
            self.stats.syncs += 1;
            *slot = layer.clone();
        }
    }

    fn remove_layer(&mut self, id: LayerId) {
        if self.layers.shift_remove(&id).is_some() {
            self.stats.removes += 1;
        }
    }

    fn register_pointer_handlers(&mut self) -> ListenerKey {
        let key = ListenerKey(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(key);
        key
    }

    fn unregister_pointer_handlers(&mut self, key: ListenerKey) {
        self.listeners.retain(|k| *k != key);
    }

    fn find_active_pan_interaction(&self) -> Option<InteractionHandle> {
        self.drag_pan_active.then_some(DRAG_PAN)
    }

    fn set_interaction_active(&mut self, handle: InteractionHandle, active: bool) {
        if handle == DRAG_PAN {
            self.drag_pan_active = active;
        }
    }
}
