//! Core-Domänentypen: Koordinaten, Auswahl-Geometrie, Layer, Routen, Kamera.

pub mod camera;
/// Reine Rechteck-Geometrie der Auswahl
pub mod geometry;
pub mod layer;
pub mod route;

/// Position im projizierten Koordinatensystem der Karte.
pub type Coordinate = glam::DVec2;

pub use camera::Camera2D;
pub use geometry::{
    compute_rectangle, is_above_minimum_size, BoundingRectangle, DEFAULT_MIN_SELECTION_SIZE,
};
pub use layer::{Feature, Geometry, LayerId, Rgba, Stroke, Style, VisualLayer};
pub use route::Route;
