//! eframe-Anwendung: Kartenviewport mit Flächenauswahl und Routen-Overlay.

use super::canvas::paint_map;
use super::input::{InputState, ViewportContext, ViewportEvent};
use super::status::render_status_bar;
use crate::app::{AreaSelectionController, Cursor, HeadlessMap, RouteStatus};
use crate::planner::{BackgroundScheduler, CoveragePlanner, ImmediateScheduler, PlanScheduler};
use crate::shared::SelectionOptions;
use glam::DVec2;

/// Haupt-Anwendungsstruktur
pub struct MapViewApp {
    controller: AreaSelectionController<HeadlessMap, Box<dyn PlanScheduler>>,
    input: InputState,
    options: SelectionOptions,
}

impl MapViewApp {
    /// Baut Karte, Planer und Controller aus den Optionen.
    pub fn new(options: SelectionOptions) -> Self {
        let scheduler = build_scheduler(&options);
        let controller = AreaSelectionController::mount(HeadlessMap::new(), scheduler, &options);
        Self {
            controller,
            input: InputState::new(),
            options,
        }
    }

    fn show_viewport(&mut self, ctx: &egui::Context) -> bool {
        let mut had_events = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                self.controller
                    .map_mut()
                    .set_viewport_size(DVec2::new(rect.width() as f64, rect.height() as f64));

                let events = self.input.collect_viewport_events(&ViewportContext {
                    ui: &*ui,
                    response: &response,
                    selection_active: self.controller.is_mounted(),
                    pan_active: self.controller.map().is_pan_active(),
                    options: &self.options,
                });
                had_events = !events.is_empty();
                self.process_events(events);

                if self.controller.map().cursor() == Cursor::Crosshair {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
                }

                paint_map(ui.painter(), rect, self.controller.map());
            });
        had_events
    }

    fn process_events(&mut self, events: Vec<ViewportEvent>) {
        for event in events {
            match event {
                ViewportEvent::Pointer(intent) => {
                    self.controller.handle_pointer(intent);
                }
                ViewportEvent::Pan { delta } => {
                    self.controller.map_mut().pan_by_pixels(delta);
                }
                ViewportEvent::Zoom { factor, pixel } => {
                    let map = self.controller.map_mut();
                    let pixel = pixel.unwrap_or(map.viewport_size() * 0.5);
                    map.zoom_at_pixel(factor, pixel);
                }
            }
        }
    }
}

impl eframe::App for MapViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_routes();

        render_status_bar(ctx, &self.controller);
        let had_events = self.show_viewport(ctx);

        // Solange geplant wird, regelmäßig nach Ergebnissen schauen
        if had_events || matches!(self.controller.route_status(), RouteStatus::Pending(_)) {
            ctx.request_repaint();
        }
    }
}

/// Wählt Hintergrund- oder synchrone Planung gemäß Optionen.
pub fn build_scheduler(options: &SelectionOptions) -> Box<dyn PlanScheduler> {
    let planner = CoveragePlanner::new(options.swath_width);
    log::info!("Abdeckungsplaner mit Bahnbreite {}", planner.swath_width());
    if options.background_planning {
        match BackgroundScheduler::spawn(planner) {
            Ok(scheduler) => return Box::new(scheduler),
            Err(e) => log::error!("Hintergrund-Planung nicht verfügbar, plane synchron: {:#}", e),
        }
    }
    Box::new(ImmediateScheduler::new(planner))
}

