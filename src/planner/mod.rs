//! Pfadplaner-Schnittstelle: Flächen-Polygon → Route.
//!
//! Der Planer ist ein externer, zustandsloser Aufruf. Die Ablaufsteuerung
//! (synchron oder im Hintergrund) liegt in `schedule`, die Verwerfung
//! veralteter Ergebnisse im `AreaSelectionController`.

/// JSON-Brücke zu einem fremd-implementierten Planer.
pub mod bridge;
/// Boustrophedon-Abdeckungsplaner.
pub mod coverage;
/// Synchrone und Hintergrund-Ausführung mit Tickets.
pub mod schedule;

pub use bridge::{JsonPlannerBridge, PlannerPoint};
pub use coverage::CoveragePlanner;
pub use schedule::{BackgroundScheduler, ImmediateScheduler, PlanOutcome, PlanScheduler, PlanTicket};

use crate::core::{Coordinate, Route};

/// Fehler beim Planen einer Route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Polygon hat zu wenige Punkte oder ist nicht verwendbar
    #[error("Polygon braucht mindestens 3 Punkte, erhalten: {points}")]
    InvalidPolygon { points: usize },
    /// Bahnbreite ist nicht positiv oder nicht endlich
    #[error("Ungültige Bahnbreite: {0}")]
    InvalidSwathWidth(f64),
    /// Fläche ist für die Bahnbreite zu groß
    #[error("Zu viele Bahnen: {lines} (max. {max})")]
    TooManySwaths { lines: usize, max: usize },
    /// Fremd-Planer hat einen Fehler gemeldet
    #[error("Planer-Brücke meldet Fehler: {0}")]
    Bridge(String),
    /// Ein- oder Ausgabe der Brücke nicht (de)serialisierbar
    #[error("Planer-Daten nicht (de)serialisierbar: {0}")]
    Serialization(String),
    /// Hintergrund-Worker ist beendet
    #[error("Planer-Worker nicht verfügbar")]
    WorkerUnavailable,
    /// Planer ist mit einem Panic abgebrochen
    #[error("Planer abgestürzt: {0}")]
    Panicked(String),
}

/// Berechnet eine Route für ein geordnetes Flächen-Polygon.
///
/// Wird genau einmal pro neu bestätigter Fläche aufgerufen. Die Ausgabe wird
/// in der gelieferten Reihenfolge gezeichnet und nicht weiter validiert.
pub trait PathPlanner {
    fn plan(&self, area: &[Coordinate]) -> Result<Route, PlanError>;
}

impl<F> PathPlanner for F
where
    F: Fn(&[Coordinate]) -> Result<Route, PlanError>,
{
    fn plan(&self, area: &[Coordinate]) -> Result<Route, PlanError> {
        self(area)
    }
}
