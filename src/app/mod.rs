//! Application-Layer: Karten-Adapter, Auswahl-Zustandsmaschine, Route-Renderer und Controller.

pub mod adapter;
pub mod controller;
pub mod events;
pub mod headless_map;
pub mod pan_guard;
pub mod route_renderer;
/// Auswahl-Zustandsmaschine
///
/// Dieses Modul verwaltet die Drag-Geste (Anker, Vorschau, Bestätigung).
pub mod selection;
pub mod transition_log;

pub use adapter::{Cursor, InteractionHandle, ListenerKey, MapAdapter};
pub use controller::{AreaSelectionController, RouteStatus, ROUTE_LAYER, SELECTION_LAYER};
pub use events::PointerIntent;
pub use headless_map::{HeadlessMap, LayerOpStats, DRAG_PAN};
pub use pan_guard::PanSuppression;
pub use route_renderer::RouteRenderer;
pub use selection::{AreaSelection, PointerOutcome, SelectionState};
pub use transition_log::{Transition, TransitionLog};
