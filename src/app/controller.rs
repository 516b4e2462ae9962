//! Controller für Flächenauswahl und Routen-Overlay auf einer Karte.
//!
//! Verbindet Pointer-Intents mit der Auswahl-Zustandsmaschine, reicht
//! bestätigte Flächen an den Planer weiter und zeichnet das jeweils aktuelle
//! Ergebnis. Veraltete Ergebnisse werden über `PlanTicket`s verworfen.

use super::adapter::{ListenerKey, MapAdapter};
use super::events::PointerIntent;
use super::route_renderer::RouteRenderer;
use super::selection::{AreaSelection, PointerOutcome, SelectionState};
use super::transition_log::{Transition, TransitionLog};
use crate::core::{Coordinate, LayerId, VisualLayer};
use crate::planner::{PlanOutcome, PlanScheduler, PlanTicket};
use crate::shared::SelectionOptions;

/// Layer-Name der Auswahl-Vorschau.
pub const SELECTION_LAYER: LayerId = LayerId("area-selection");
/// Layer-Name der Route.
pub const ROUTE_LAYER: LayerId = LayerId("route");

/// Stand der Planung für die zuletzt bestätigte Fläche.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RouteStatus {
    /// Noch keine Fläche bestätigt
    #[default]
    None,
    Pending(PlanTicket),
    Ready { ticket: PlanTicket, points: usize },
    Failed { ticket: PlanTicket, message: String },
}

/// Besitzt Auswahl, Route-Renderer und Planungs-Scheduler einer Karte.
///
/// Beim Drop wird `teardown` ausgeführt: Pan freigegeben, Handler
/// abgemeldet, beide Layer entfernt.
pub struct AreaSelectionController<M: MapAdapter, S: PlanScheduler> {
    map: M,
    scheduler: S,
    selection: AreaSelection,
    renderer: RouteRenderer,
    listener: Option<ListenerKey>,
    committed_area: Option<Vec<Coordinate>>,
    current_ticket: PlanTicket,
    route_status: RouteStatus,
    transitions: TransitionLog,
}

impl<M: MapAdapter, S: PlanScheduler> AreaSelectionController<M, S> {
    /// Hängt den Auswahl-Layer an und meldet die Pointer-Handler an.
    pub fn mount(mut map: M, scheduler: S, options: &SelectionOptions) -> Self {
        let selection = AreaSelection::new(
            VisualLayer::new(
                SELECTION_LAYER,
                options.selection_layer_z,
                options.selection_style(),
            ),
            options.min_selection_size,
        );
        let renderer = RouteRenderer::new(VisualLayer::new(
            ROUTE_LAYER,
            options.route_layer_z,
            options.route_style(),
        ));

        map.add_layer(selection.preview_layer());
        let listener = map.register_pointer_handlers();
        log::info!("Flächenauswahl eingehängt (Listener {})", listener.0);

        Self {
            map,
            scheduler,
            selection,
            renderer,
            listener: Some(listener),
            committed_area: None,
            current_ticket: PlanTicket(0),
            route_status: RouteStatus::None,
            transitions: TransitionLog::new(),
        }
    }

    /// Verarbeitet ein Pointer-Event der Primärtaste.
    ///
    /// Ohne angemeldete Handler (nach `teardown`) ohne Wirkung.
    pub fn handle_pointer(&mut self, intent: PointerIntent) -> PointerOutcome {
        if self.listener.is_none() {
            log::trace!("Pointer bei {} nach Abbau ignoriert", intent.pixel());
            return PointerOutcome::Ignored;
        }

        let outcome = match intent {
            PointerIntent::Down { pixel } => self.selection.pointer_down(&mut self.map, pixel),
            PointerIntent::Move { pixel } => self.selection.pointer_move(&mut self.map, pixel),
            PointerIntent::Up { pixel } => self.selection.pointer_up(&mut self.map, pixel),
        };

        match &outcome {
            PointerOutcome::Ignored => {}
            PointerOutcome::DragStarted { anchor } => {
                self.transitions
                    .record(Transition::DragStarted { anchor: *anchor });
            }
            PointerOutcome::PreviewUpdated(_) => self.transitions.record(Transition::PreviewUpdated),
            PointerOutcome::Rejected => {
                log::debug!(
                    "Auswahl verworfen (Mindestgröße {} je Achse)",
                    self.selection.min_size()
                );
                self.transitions.record(Transition::Rejected);
            }
            PointerOutcome::Committed(area) => self.commit(area.clone()),
        }
        outcome
    }

    /// Übernimmt eine neue Fläche und startet die Planung.
    fn commit(&mut self, area: Vec<Coordinate>) {
        // Alte Route sofort entfernen, nicht erst wenn das Ergebnis kommt
        self.renderer.clear(&mut self.map);

        self.current_ticket = self.current_ticket.next();
        let ticket = self.current_ticket;
        self.transitions.record(Transition::Committed {
            ticket,
            corners: area.len(),
        });
        log::info!("Fläche bestätigt, Planung {} gestartet", ticket);

        self.committed_area = Some(area.clone());
        self.route_status = RouteStatus::Pending(ticket);
        self.scheduler.submit(ticket, area);
        self.poll_routes();
    }

    /// Holt fertige Planungen ab und zeichnet das Ergebnis des aktuellen Tickets.
    ///
    /// Gibt die Anzahl der übernommenen Ergebnisse zurück (0 oder 1 je Aufruf
    /// und Ticket).
    pub fn poll_routes(&mut self) -> usize {
        let outcomes = self.scheduler.poll();
        let mut applied = 0;
        for outcome in outcomes {
            if self.apply_outcome(outcome) {
                applied += 1;
            }
        }
        applied
    }

    fn apply_outcome(&mut self, outcome: PlanOutcome) -> bool {
        let PlanOutcome { ticket, result } = outcome;
        if self.listener.is_none() || ticket != self.current_ticket {
            log::debug!("Planung {} überholt, Ergebnis verworfen", ticket);
            self.transitions.record(Transition::RouteDropped { ticket });
            return false;
        }

        match result {
            Ok(route) => {
                let points = route.len();
                if log::log_enabled!(log::Level::Trace) {
                    match serde_json::to_string(&route) {
                        Ok(json) => log::trace!("Route {}: {}", ticket, json),
                        Err(e) => log::trace!("Route {} nicht serialisierbar: {}", ticket, e),
                    }
                }
                self.renderer.render(&mut self.map, &route);
                self.route_status = RouteStatus::Ready { ticket, points };
                self.transitions
                    .record(Transition::RouteApplied { ticket, points });
                log::info!(
                    "Route {} gezeichnet: {} Punkte, {} Segmente, Länge {:.6}",
                    ticket,
                    points,
                    self.renderer.segment_count(),
                    route.length()
                );
            }
            Err(e) => {
                log::warn!("Planung {} fehlgeschlagen: {:#}", ticket, e);
                self.route_status = RouteStatus::Failed {
                    ticket,
                    message: e.to_string(),
                };
                self.transitions.record(Transition::PlanFailed {
                    ticket,
                    message: e.to_string(),
                });
            }
        }
        true
    }

    /// Gibt alle Ressourcen frei. Mehrfach aufrufbar.
    ///
    /// Bricht eine laufende Geste ab, gibt den Pan frei, entfernt beide Layer
    /// und meldet die Pointer-Handler ab. Ausstehende Planungen werden beim
    /// nächsten `poll_routes` verworfen.
    pub fn teardown(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };

        self.selection.cancel(&mut self.map);
        self.map.remove_layer(SELECTION_LAYER);
        self.renderer.clear(&mut self.map);
        self.map.unregister_pointer_handlers(listener);

        self.committed_area = None;
        self.route_status = RouteStatus::None;
        self.transitions.record(Transition::TornDown);
        log::info!("Flächenauswahl ausgehängt (Listener {})", listener.0);
    }

    /// Hängt aus und gibt den Controller auf.
    pub fn unmount(self) {
        drop(self);
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Zuletzt bestätigte Fläche (bleibt bei verworfenen Gesten erhalten).
    pub fn committed_area(&self) -> Option<&[Coordinate]> {
        self.committed_area.as_deref()
    }

    pub fn route_status(&self) -> &RouteStatus {
        &self.route_status
    }

    pub fn state(&self) -> &SelectionState {
        self.selection.state()
    }

    pub fn current_ticket(&self) -> PlanTicket {
        self.current_ticket
    }

    pub fn transition_log(&self) -> &TransitionLog {
        &self.transitions
    }

    /// Segmente der aktuell gezeichneten Route.
    pub fn route_segment_count(&self) -> usize {
        self.renderer.segment_count()
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Kartenzugriff für Kamera und Viewport; Layer gehören weiter dem Controller.
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }
}

impl<M: MapAdapter, S: PlanScheduler> Drop for AreaSelectionController<M, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
