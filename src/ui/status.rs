//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AreaSelectionController, HeadlessMap, RouteStatus, SelectionState};
use crate::planner::PlanScheduler;

/// Rendert die Status-Bar
pub fn render_status_bar<S: PlanScheduler>(
    ctx: &egui::Context,
    controller: &AreaSelectionController<HeadlessMap, S>,
) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let state = match controller.state() {
                SelectionState::Idle => "Bereit",
                SelectionState::Dragging { .. } => "Auswahl läuft",
                SelectionState::Committed { .. } => "Fläche gewählt",
            };
            ui.label(state);

            ui.separator();

            match controller.committed_area() {
                Some([bl, _, tr, _]) => {
                    ui.label(format!(
                        "Fläche: ({:.6}, {:.6}) bis ({:.6}, {:.6})",
                        bl.x, bl.y, tr.x, tr.y
                    ));
                }
                Some(area) => {
                    ui.label(format!("Fläche: {} Punkte", area.len()));
                }
                None => {
                    ui.label("Keine Fläche");
                }
            }

            ui.separator();

            match controller.route_status() {
                RouteStatus::None if controller.current_ticket().0 > 0 => {
                    ui.label(format!("Route: keine (zuletzt {})", controller.current_ticket()));
                }
                RouteStatus::None => {
                    ui.label("Route: keine");
                }
                RouteStatus::Pending(ticket) => {
                    ui.spinner();
                    ui.label(format!("Route {} wird geplant", ticket));
                }
                RouteStatus::Ready { ticket, points } => {
                    ui.label(format!(
                        "Route {}: {} Punkte, {} Segmente",
                        ticket,
                        points,
                        controller.route_segment_count()
                    ));
                }
                RouteStatus::Failed { ticket, message } => {
                    ui.colored_label(
                        egui::Color32::from_rgb(200, 60, 60),
                        format!("Route {} fehlgeschlagen: {}", ticket, message),
                    );
                }
            }

            ui.separator();

            let camera = &controller.map().camera;
            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.6}, {:.6})",
                camera.zoom, camera.position.x, camera.position.y
            ));
        });
    });
}
