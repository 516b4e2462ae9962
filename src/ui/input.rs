//! Viewport-Input: egui-Maus-Events → Pointer-Intents, Kamera-Pan und Scroll-Zoom.

use crate::app::PointerIntent;
use crate::shared::SelectionOptions;
use glam::DVec2;

/// Ereignis aus dem Kartenviewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// Primärtaste für die Flächenauswahl
    Pointer(PointerIntent),
    /// Kamera um ein Pixel-Delta verschieben
    Pan { delta: DVec2 },
    /// Zoom auf eine Pixelposition (oder Viewport-Mitte)
    Zoom { factor: f64, pixel: Option<DVec2> },
}

/// Bündelt die Parameter für die Viewport-Event-Verarbeitung.
pub struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    /// Ob Pointer-Handler der Auswahl angemeldet sind
    pub selection_active: bool,
    /// Ob die Drag-Pan-Interaktion der Karte aktiv ist
    pub pan_active: bool,
    pub options: &'a SelectionOptions,
}

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primär-Drag wurde als Auswahl begonnen
    selecting: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input.
    pub fn collect_viewport_events(&mut self, ctx: &ViewportContext) -> Vec<ViewportEvent> {
        let mut events = Vec::new();

        self.handle_primary_drag(ctx, &mut events);
        Self::handle_pan(ctx, &mut events);
        Self::handle_scroll_zoom(ctx, &mut events);

        events
    }

    fn handle_primary_drag(&mut self, ctx: &ViewportContext, events: &mut Vec<ViewportEvent>) {
        let response = ctx.response;

        if response.drag_started_by(egui::PointerButton::Primary) && ctx.selection_active {
            // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle)
            let press_pos = ctx
                .ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(pos) = press_pos {
                events.push(ViewportEvent::Pointer(PointerIntent::Down {
                    pixel: to_local(pos, response),
                }));
                self.selecting = true;
            }
        }

        if !self.selecting {
            return;
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(ViewportEvent::Pointer(PointerIntent::Move {
                    pixel: to_local(pos, response),
                }));
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            let pos = response
                .interact_pointer_pos()
                .or_else(|| ctx.ui.input(|i| i.pointer.latest_pos()));
            // Ohne Position trotzdem beenden, damit der Pan freigegeben wird
            let pixel = pos.map_or(DVec2::NAN, |p| to_local(p, response));
            events.push(ViewportEvent::Pointer(PointerIntent::Up { pixel }));
            self.selecting = false;
        }
    }

    /// Pan mit Sekundär-/Mitteltaste; mit Primärtaste nur ohne aktive Auswahl.
    fn handle_pan(ctx: &ViewportContext, events: &mut Vec<ViewportEvent>) {
        if !ctx.pan_active {
            return;
        }
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let response = ctx.response;
        let primary_pan =
            response.dragged_by(egui::PointerButton::Primary) && !ctx.selection_active;
        if primary_pan
            || response.dragged_by(egui::PointerButton::Middle)
            || response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(ViewportEvent::Pan {
                delta: DVec2::new(pointer_delta.x as f64, pointer_delta.y as f64),
            });
        }
    }

    fn handle_scroll_zoom(ctx: &ViewportContext, events: &mut Vec<ViewportEvent>) {
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = ctx.options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };
        let pixel = ctx
            .response
            .hover_pos()
            .map(|pos| to_local(pos, ctx.response));
        events.push(ViewportEvent::Zoom { factor, pixel });
    }
}

/// Rechnet eine egui-Bildschirmposition in Viewport-Pixel um.
pub(crate) fn to_local(pos: egui::Pos2, response: &egui::Response) -> DVec2 {
    let local = pos - response.rect.min;
    DVec2::new(local.x as f64, local.y as f64)
}
