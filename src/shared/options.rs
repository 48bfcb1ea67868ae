//! Zentrale Konfiguration für das Mess-Werkzeug.
//!
//! `MeasureOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::host::{
    HorizontalOrigin, LineMaterial, LineStyle, MarkerStyle, Rgba, VerticalOrigin,
};
use serde::{Deserialize, Serialize};

// ── Picking ─────────────────────────────────────────────────────────

/// Höhenversatz (Meter), um den jeder Oberflächen-Pick angehoben wird.
pub const PICK_HEIGHT_OFFSET: f64 = 1.0;

// ── Messpunkte ──────────────────────────────────────────────────────

/// Punktgröße der Messpunkte in Pixeln.
pub const MARKER_PIXEL_SIZE: f32 = 8.0;
/// Umrandungsbreite der Messpunkte in Pixeln.
pub const MARKER_OUTLINE_WIDTH: f32 = 8.0;
/// Umrandungsfarbe der Messpunkte (RGBA: Blau).
pub const MARKER_OUTLINE_COLOR: Rgba = [0.0, 0.0, 1.0, 1.0];

// ── Labels ──────────────────────────────────────────────────────────

/// Schriftangabe der Mess-Labels.
pub const LABEL_FONT: &str = "14px monospace";
/// Label-Hintergrund (RGBA: halbtransparentes Schwarz).
pub const LABEL_BACKGROUND: Rgba = [0.0, 0.0, 0.0, 0.5];
/// Label-Versatz in Pixeln (links oben vom Punkt).
pub const LABEL_PIXEL_OFFSET: [f32; 2] = [-20.0, -20.0];

// ── Linien / Flächen ────────────────────────────────────────────────

/// Standard-Linienbreite in Pixeln.
pub const LINE_WIDTH: f32 = 10.0;
/// Standard-Linienfarbe (RGBA: Blau).
pub const LINE_COLOR: Rgba = [0.0, 0.0, 1.0, 1.0];
/// Füllfarbe der Flächenmessung (RGBA: Weiß, 30 % Deckung).
pub const AREA_FILL_COLOR: Rgba = [1.0, 1.0, 1.0, 0.3];

/// Name des Entity-Layers im Host.
pub const MEASURE_LAYER_NAME: &str = "measureLayer";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Mess-Optionen.
/// Wird als `globe_measure.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureOptions {
    // ── Picking ─────────────────────────────────────────────────
    /// Höhenversatz für Oberflächen-Picks in Metern
    pub pick_height_offset: f64,

    // ── Messpunkte ──────────────────────────────────────────────
    /// Punktgröße in Pixeln
    pub marker_pixel_size: f32,
    /// Umrandungsbreite in Pixeln
    pub marker_outline_width: f32,
    /// Umrandungsfarbe
    pub marker_outline_color: Rgba,

    // ── Labels ──────────────────────────────────────────────────
    /// Schriftangabe
    pub label_font: String,
    /// Hintergrundfarbe
    pub label_background: Rgba,
    /// Versatz in Pixeln [x, y]
    pub label_pixel_offset: [f32; 2],
    /// Horizontaler Bezugspunkt
    #[serde(default)]
    pub label_horizontal_origin: HorizontalOrigin,
    /// Vertikaler Bezugspunkt
    #[serde(default)]
    pub label_vertical_origin: VerticalOrigin,
    /// Zwischen-Labels der Flächenmessung anzeigen (Standard: nur das Abschluss-Label)
    #[serde(default)]
    pub show_intermediate_area_labels: bool,

    // ── Linien / Flächen ────────────────────────────────────────
    /// Standard-Linienbreite in Pixeln
    pub line_width: f32,
    /// Füllfarbe der Flächenmessung
    pub area_fill_color: Rgba,
    /// Standard-Linienmaterial (als letzte Tabelle, TOML verlangt Werte vor Tabellen)
    pub line_material: LineMaterial,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            pick_height_offset: PICK_HEIGHT_OFFSET,

            marker_pixel_size: MARKER_PIXEL_SIZE,
            marker_outline_width: MARKER_OUTLINE_WIDTH,
            marker_outline_color: MARKER_OUTLINE_COLOR,

            label_font: LABEL_FONT.to_string(),
            label_background: LABEL_BACKGROUND,
            label_pixel_offset: LABEL_PIXEL_OFFSET,
            label_horizontal_origin: HorizontalOrigin::Left,
            label_vertical_origin: VerticalOrigin::Bottom,
            show_intermediate_area_labels: false,

            line_width: LINE_WIDTH,
            area_fill_color: AREA_FILL_COLOR,
            line_material: LineMaterial::Arrow { color: LINE_COLOR },
        }
    }
}

impl MeasureOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("globe-measure"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("globe_measure.toml")
    }

    /// Marker-Darstellung der Messpunkte.
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            pixel_size: self.marker_pixel_size,
            outline_color: self.marker_outline_color,
            outline_width: self.marker_outline_width,
        }
    }

    /// Standard-Liniendarstellung.
    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            width: self.line_width,
            material: self.line_material,
        }
    }
}
