//! Zeichnet die angehängten Layer einer `HeadlessMap` mit dem egui-Painter.

use crate::app::HeadlessMap;
use crate::core::{Geometry, Rgba, Style};

/// Hintergrundfarbe des Kartenviewports.
const MAP_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(236, 234, 226);
/// Abstand der Orientierungsgitterlinien in Pixeln.
const GRID_SPACING_PX: f32 = 64.0;

/// Wandelt eine RGBA-Farbe (0.0..=1.0) in `Color32` um.
pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
        (color[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Malt Hintergrund, Gitter und alle Layer in z-Reihenfolge.
pub fn paint_map(painter: &egui::Painter, rect: egui::Rect, map: &HeadlessMap) {
    painter.rect_filled(rect, 0.0, MAP_BACKGROUND);
    paint_grid(painter, rect);

    let to_screen = |c: &glam::DVec2| {
        let px = map.world_to_pixel(*c);
        rect.min + egui::vec2(px.x as f32, px.y as f32)
    };

    for layer in map.layers_in_draw_order() {
        let (Some(feature), Some(style)) = (layer.feature(), layer.effective_style()) else {
            continue;
        };
        let points: Vec<egui::Pos2> = feature.geometry.points().iter().map(to_screen).collect();
        paint_geometry(painter, &feature.geometry, points, style);
    }
}

fn paint_geometry(
    painter: &egui::Painter,
    geometry: &Geometry,
    mut points: Vec<egui::Pos2>,
    style: &Style,
) {
    let stroke = style
        .stroke
        .map_or(egui::Stroke::NONE, |s| egui::Stroke::new(s.width, to_color32(s.color)));

    match geometry {
        Geometry::Polygon(_) => {
            if points.len() < 3 {
                return;
            }
            if let Some(fill) = style.fill {
                painter.add(egui::Shape::convex_polygon(
                    points.clone(),
                    to_color32(fill),
                    egui::Stroke::NONE,
                ));
            }
            points.push(points[0]);
            painter.add(egui::Shape::line(points, stroke));
        }
        Geometry::LineString(_) => {
            if points.len() >= 2 {
                painter.add(egui::Shape::line(points, stroke));
            }
        }
    }
}

fn paint_grid(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(0, 0, 0, 18));
    let mut x = rect.min.x;
    while x <= rect.max.x {
        painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], stroke);
        x += GRID_SPACING_PX;
    }
    let mut y = rect.min.y;
    while y <= rect.max.y {
        painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], stroke);
        y += GRID_SPACING_PX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_clamps() {
        assert_eq!(
            to_color32([1.0, 0.0, 2.0, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 255, 255)
        );
    }
}
