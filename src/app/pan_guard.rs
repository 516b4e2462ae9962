//! Unterdrückung des Karten-Drag-Pan während einer Auswahl-Geste.

use super::adapter::{InteractionHandle, MapAdapter};

/// Hält die deaktivierte Drag-Pan-Interaktion, bis sie wieder freigegeben wird.
///
/// `acquire` und `release` sind idempotent: mehrfaches Anfordern deaktiviert
/// nur einmal, mehrfaches Freigeben aktiviert nur einmal.
#[derive(Debug, Default)]
pub struct PanSuppression {
    suppressed: Option<InteractionHandle>,
}

impl PanSuppression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deaktiviert die aktive Drag-Pan-Interaktion der Karte (falls vorhanden).
    pub fn acquire<M: MapAdapter + ?Sized>(&mut self, map: &mut M) {
        if self.suppressed.is_some() {
            return;
        }
        if let Some(handle) = map.find_active_pan_interaction() {
            map.set_interaction_active(handle, false);
            self.suppressed = Some(handle);
        }
    }

    /// Aktiviert die zuvor deaktivierte Interaktion wieder.
    pub fn release<M: MapAdapter + ?Sized>(&mut self, map: &mut M) {
        if let Some(handle) = self.suppressed.take() {
            map.set_interaction_active(handle, true);
        }
    }

    pub fn is_held(&self) -> bool {
        self.suppressed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HeadlessMap;

    #[test]
    fn test_acquire_and_release_are_idempotent() {
        let mut map = HeadlessMap::new();
        let mut guard = PanSuppression::new();

        guard.acquire(&mut map);
        guard.acquire(&mut map);
        assert!(guard.is_held());
        assert!(!map.is_pan_active());

        guard.release(&mut map);
        assert!(map.is_pan_active());
        guard.release(&mut map);
        assert!(map.is_pan_active());
        assert!(!guard.is_held());
    }

    #[test]
    fn test_release_without_acquire_leaves_map_untouched() {
        let mut map = HeadlessMap::new();
        let handle = map.find_active_pan_interaction().expect("Pan aktiv");
        map.set_interaction_active(handle, false);

        // Fremd deaktiviert → Guard darf nicht reaktivieren
        let mut guard = PanSuppression::new();
        guard.acquire(&mut map);
        assert!(!guard.is_held());
        guard.release(&mut map);
        assert!(!map.is_pan_active());
    }
}
