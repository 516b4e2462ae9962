//! UI-Komponenten: Kartenviewport, Input-Handling, Status-Bar.

mod app;
/// Layer-Darstellung mit dem egui-Painter
pub mod canvas;
pub mod input;
pub mod status;

pub use app::{build_scheduler, MapViewApp};
pub use canvas::paint_map;
pub use input::{InputState, ViewportEvent};
pub use status::render_status_bar;
