//! Area Route Planner Library.
//! Flächenauswahl auf einer Karte mit Routen-Overlay, als Library exportiert
//! für Tests, Benchmarks und Wiederverwendung.

pub mod app;
pub mod core;
pub mod planner;
pub mod shared;
pub mod ui;

pub use app::{
    AreaSelection, AreaSelectionController, HeadlessMap, MapAdapter, PointerIntent,
    PointerOutcome, RouteStatus, SelectionState,
};
pub use crate::core::{compute_rectangle, is_above_minimum_size, BoundingRectangle, Coordinate, Route};
pub use planner::{PathPlanner, PlanError, PlanScheduler, PlanTicket};
pub use shared::SelectionOptions;
