//! Zentrale Konfiguration für den Area Route Planner.
//!
//! `SelectionOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Rgba, Stroke, Style, DEFAULT_MIN_SELECTION_SIZE};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Dateiname der Optionen neben der Binary.
pub const CONFIG_FILE_NAME: &str = "area_route_planner.toml";

// ── Selektion ───────────────────────────────────────────────────────

/// Füllfarbe der Auswahl (RGBA: helles Grün, 30 % deckend).
pub const SELECTION_FILL: Rgba = [151.0 / 255.0, 191.0 / 255.0, 146.0 / 255.0, 0.3];
/// Randfarbe der Auswahl (RGBA: #97bf92).
pub const SELECTION_STROKE_COLOR: Rgba = [151.0 / 255.0, 191.0 / 255.0, 146.0 / 255.0, 1.0];
/// Randbreite der Auswahl in Pixeln.
pub const SELECTION_STROKE_WIDTH: f32 = 2.0;
/// z-Index des Auswahl-Layers.
pub const SELECTION_LAYER_Z: i32 = 1;

// ── Route ───────────────────────────────────────────────────────────

/// Linienfarbe der Route (RGBA: #3c22ff).
pub const ROUTE_STROKE_COLOR: Rgba = [60.0 / 255.0, 34.0 / 255.0, 1.0, 1.0];
/// Linienbreite der Route in Pixeln.
pub const ROUTE_STROKE_WIDTH: f32 = 1.5;
/// z-Index des Route-Layers (über allen Grundkarten-Layern).
pub const ROUTE_LAYER_Z: i32 = 20;

// ── Planer ──────────────────────────────────────────────────────────

/// Abstand benachbarter Abdeckungsbahnen in Welteinheiten (ca. 2 m).
pub const SWATH_WIDTH: f64 = 0.00002;

// ── Kamera ──────────────────────────────────────────────────────────

/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `area_route_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Mindestgröße pro Achse in Welteinheiten; kleinere Gesten werden verworfen
    pub min_selection_size: f64,
    /// Füllfarbe des Auswahl-Rechtecks
    pub selection_fill: Rgba,
    /// Rand des Auswahl-Rechtecks
    pub selection_stroke: Stroke,
    pub selection_layer_z: i32,

    // ── Route ───────────────────────────────────────────────────
    /// Linienstil der Route
    pub route_stroke: Stroke,
    pub route_layer_z: i32,

    // ── Planer ──────────────────────────────────────────────────
    /// Bahnbreite des Abdeckungsplaners
    pub swath_width: f64,
    /// Planung auf einem Worker-Thread statt im UI-Thread
    pub background_planning: bool,

    // ── Kamera ──────────────────────────────────────────────────
    pub camera_scroll_zoom_step: f64,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            min_selection_size: DEFAULT_MIN_SELECTION_SIZE,
            selection_fill: SELECTION_FILL,
            selection_stroke: Stroke {
                color: SELECTION_STROKE_COLOR,
                width: SELECTION_STROKE_WIDTH,
            },
            selection_layer_z: SELECTION_LAYER_Z,

            route_stroke: Stroke {
                color: ROUTE_STROKE_COLOR,
                width: ROUTE_STROKE_WIDTH,
            },
            route_layer_z: ROUTE_LAYER_Z,

            swath_width: SWATH_WIDTH,
            background_planning: true,

            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl SelectionOptions {
    /// Lädt Optionen aus `path`. Fehlt die Datei oder ist sie unlesbar,
    /// gelten die Standardwerte; ungültige Zahlen werden einzeln ersetzt.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!(
                "{} nicht vorhanden, Standardwerte aktiv",
                path.display()
            );
            return Self::default();
        }
        match Self::read_toml(path) {
            Ok(opts) => {
                log::info!("Optionen aus {} übernommen", path.display());
                opts.sanitized()
            }
            Err(e) => {
                log::warn!("{:#}; Standardwerte aktiv", e);
                Self::default()
            }
        }
    }

    fn read_toml(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("{} nicht lesbar", path.display()))?;
        toml::from_str(&text).with_context(|| format!("{} ist kein gültiges TOML", path.display()))
    }

    /// Schreibt die Optionen nach `path`; fehlende Verzeichnisse werden angelegt.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Verzeichnis {} nicht anlegbar", dir.display()))?;
        }
        fs::write(path, text).with_context(|| format!("{} nicht schreibbar", path.display()))?;
        log::debug!("Optionen nach {} geschrieben", path.display());
        Ok(())
    }

    /// `CONFIG_FILE_NAME` im Verzeichnis der Binary, ersatzweise relativ zum Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(CONFIG_FILE_NAME)
    }

    /// Ersetzt nicht endliche oder nicht positive Größen durch ihren Standardwert.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        keep_if_positive(
            "min_selection_size",
            &mut self.min_selection_size,
            defaults.min_selection_size,
        );
        keep_if_positive("swath_width", &mut self.swath_width, defaults.swath_width);
        keep_if_positive(
            "camera_scroll_zoom_step",
            &mut self.camera_scroll_zoom_step,
            defaults.camera_scroll_zoom_step,
        );
        self
    }

    /// Stil des Auswahl-Layers (Füllung + Rand).
    pub fn selection_style(&self) -> Style {
        Style {
            fill: Some(self.selection_fill),
            stroke: Some(self.selection_stroke),
        }
    }

    /// Stil des Route-Layers (nur Linie).
    pub fn route_style(&self) -> Style {
        Style::stroke(self.route_stroke)
    }
}

fn keep_if_positive(name: &str, value: &mut f64, fallback: f64) {
    if !(value.is_finite() && *value > 0.0) {
        log::warn!("Option {} = {} ungültig, verwende {}", name, value, fallback);
        *value = fallback;
    }
}
