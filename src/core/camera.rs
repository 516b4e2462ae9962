//! 2D-Kamera für Pan und Zoom einer Karte (Welt-Y zeigt nach Norden/oben).

use glam::DVec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera (Viewport-Mitte) in Welt-Koordinaten
    pub position: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f64,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0 (ca. 200 m bei der Standard-Projektion).
    pub const BASE_WORLD_EXTENT: f64 = 0.002;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.01;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 100.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Verschiebt die Kamera (Pan) um ein Welt-Delta
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt so, dass `focus_world` an derselben Bildschirmstelle bleibt.
    pub fn zoom_towards(&mut self, factor: f64, focus_world: DVec2) {
        let old_zoom = self.zoom;
        self.zoom_by(factor);
        let ratio = old_zoom / self.zoom;
        self.position = focus_world + (self.position - focus_world) * ratio;
    }

    /// Welt-Einheiten pro Screen-Pixel.
    pub fn world_per_pixel(&self, viewport_height: f64) -> f64 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Konvertiert Screen-Koordinaten (Ursprung oben links, Y nach unten) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: DVec2, screen_size: DVec2) -> DVec2 {
        let wpp = self.world_per_pixel(screen_size.y);
        let centered = screen_pos - screen_size * 0.5;
        self.position + DVec2::new(centered.x * wpp, -centered.y * wpp)
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: DVec2, screen_size: DVec2) -> DVec2 {
        let wpp = self.world_per_pixel(screen_size.y);
        let offset = (world_pos - self.position) / wpp;
        screen_size * 0.5 + DVec2::new(offset.x, -offset.y)
    }

    /// Rechnet ein Pixel-Delta (z.B. Drag) in ein Welt-Delta um.
    pub fn screen_delta_to_world(&self, delta: DVec2, viewport_height: f64) -> DVec2 {
        let wpp = self.world_per_pixel(viewport_height);
        DVec2::new(delta.x * wpp, -delta.y * wpp)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(DVec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_is_clamped() {
        let mut camera = Camera2D::new();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(1e9);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MAX);
    }

    #[test]
    fn test_screen_to_world_center() {
        let camera = Camera2D::new();
        let screen_size = DVec2::new(800.0, 600.0);
        let world = camera.screen_to_world(DVec2::new(400.0, 300.0), screen_size);
        assert_relative_eq!(world.x, 0.0);
        assert_relative_eq!(world.y, 0.0);
    }

    #[test]
    fn test_screen_y_points_down_world_y_points_up() {
        let camera = Camera2D::new();
        let screen_size = DVec2::new(800.0, 600.0);
        let top = camera.screen_to_world(DVec2::new(400.0, 0.0), screen_size);
        assert_relative_eq!(top.y, Camera2D::BASE_WORLD_EXTENT);
    }

    #[test]
    fn test_world_to_screen_roundtrip() {
        let mut camera = Camera2D::new();
        camera.position = DVec2::new(0.5, -0.25);
        camera.zoom = 3.0;
        let screen_size = DVec2::new(1280.0, 720.0);
        let screen = DVec2::new(100.0, 650.0);

        let back = camera.world_to_screen(camera.screen_to_world(screen, screen_size), screen_size);
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-6);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-6);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_fixed() {
        let mut camera = Camera2D::new();
        let screen_size = DVec2::new(800.0, 600.0);
        let focus_screen = DVec2::new(700.0, 100.0);
        let focus_world = camera.screen_to_world(focus_screen, screen_size);

        camera.zoom_towards(2.0, focus_world);

        let after = camera.world_to_screen(focus_world, screen_size);
        assert_relative_eq!(after.x, focus_screen.x, epsilon = 1e-6);
        assert_relative_eq!(after.y, focus_screen.y, epsilon = 1e-6);
    }
}
