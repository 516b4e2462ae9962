//! Schnittstelle zur Karte: Koordinaten, Cursor, Layer, Pointer- und Pan-Interaktion.

use crate::core::{Coordinate, LayerId, VisualLayer};
use glam::DVec2;

/// Cursor-Darstellung über dem Kartenviewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Auswahl wird gezogen
    Crosshair,
}

/// Registrierung der Pointer-Handler; wird beim Abmelden zurückgegeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerKey(pub u64);

/// Handle auf eine Karteninteraktion (z.B. Drag-Pan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractionHandle(pub u32);

/// Alles, was die Auswahl-Logik von der Karte braucht.
///
/// Die Karte hält Kopien der angehängten Layer; nach jeder Inhaltsänderung
/// schiebt der Besitzer den neuen Stand per `sync_layer` nach.
pub trait MapAdapter {
    /// Rechnet eine Viewport-Pixelposition in Weltkoordinaten um.
    /// `None`, solange die Karte keinen gültigen Viewport hat.
    fn pixel_to_world(&self, pixel: DVec2) -> Option<Coordinate>;

    fn set_cursor(&mut self, cursor: Cursor);

    /// Hängt einen Layer an (bzw. ersetzt einen gleichnamigen).
    fn add_layer(&mut self, layer: &VisualLayer);

    /// Aktualisiert den Inhalt eines angehängten Layers; ohne Wirkung, wenn er nicht angehängt ist.
    fn sync_layer(&mut self, layer: &VisualLayer);

    fn remove_layer(&mut self, id: LayerId);

    /// Meldet Pointer-Handler an; Pointer-Events werden danach an die Auswahl geleitet.
    fn register_pointer_handlers(&mut self) -> ListenerKey;

    fn unregister_pointer_handlers(&mut self, key: ListenerKey);

    /// Sucht die aktive Drag-Pan-Interaktion der Karte.
    fn find_active_pan_interaction(&self) -> Option<InteractionHandle>;

    fn set_interaction_active(&mut self, handle: InteractionHandle, active: bool);
}

impl<M: MapAdapter + ?Sized> MapAdapter for &mut M {
    fn pixel_to_world(&self, pixel: DVec2) -> Option<Coordinate> {
        (**self).pixel_to_world(pixel)
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        (**self).set_cursor(cursor)
    }

    fn add_layer(&mut self, layer: &VisualLayer) {
        (**self).add_layer(layer)
    }

    fn sync_layer(&mut self, layer: &VisualLayer) {
        (**self).sync_layer(layer)
    }

    fn remove_layer(&mut self, id: LayerId) {
        (**self).remove_layer(id)
    }

    fn register_pointer_handlers(&mut self) -> ListenerKey {
        (**self).register_pointer_handlers()
    }

    fn unregister_pointer_handlers(&mut self, key: ListenerKey) {
        (**self).unregister_pointer_handlers(key)
    }

    fn find_active_pan_interaction(&self) -> Option<InteractionHandle> {
        (**self).find_active_pan_interaction()
    }

    fn set_interaction_active(&mut self, handle: InteractionHandle, active: bool) {
        (**self).set_interaction_active(handle, active)
    }
}
