//! Entity-Beschreibungen für den Render-Host (Punkte, Linien, Flächen, Labels).

use crate::core::CartesianPoint;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA-Farbe (0.0–1.0 je Kanal).
pub type Rgba = [f32; 4];

/// Material einer Linie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineMaterial {
    /// Linie mit Pfeilspitze am Ende
    Arrow {
        /// Linienfarbe
        color: Rgba,
    },
    /// Durchgezogene Linie
    Solid {
        /// Linienfarbe
        color: Rgba,
    },
    /// Gestrichelte Linie
    Dashed {
        /// Linienfarbe
        color: Rgba,
        /// Strichlänge in Pixeln
        dash_length: f32,
    },
}

impl LineMaterial {
    /// Gibt die Grundfarbe des Materials zurück.
    pub fn color(&self) -> Rgba {
        match self {
            LineMaterial::Arrow { color }
            | LineMaterial::Solid { color }
            | LineMaterial::Dashed { color, .. } => *color,
        }
    }
}

/// Darstellung einer Linie (Breite in Pixeln + Material).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Linienbreite in Pixeln
    pub width: f32,
    /// Linienmaterial
    pub material: LineMaterial,
}

/// Punkt-Marker einer Annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Punktgröße in Pixeln
    pub pixel_size: f32,
    /// Umrandungsfarbe
    pub outline_color: Rgba,
    /// Umrandungsbreite in Pixeln
    pub outline_width: f32,
}

/// Horizontaler Bezugspunkt eines Labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalOrigin {
    /// Label beginnt am Anker
    #[default]
    Left,
    /// Label zentriert
    Center,
    /// Label endet am Anker
    Right,
}

/// Vertikaler Bezugspunkt eines Labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalOrigin {
    /// Label liegt oberhalb des Ankers
    #[default]
    Bottom,
    /// Label zentriert
    Center,
    /// Label liegt unterhalb des Ankers
    Top,
}

/// Text-Label mit Hintergrund, Anker und Pixel-Versatz.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    /// Angezeigter Text
    pub text: String,
    /// Sichtbarkeit
    pub show: bool,
    /// CSS-artige Schriftangabe (z.B. `14px monospace`)
    pub font: String,
    /// Hintergrundfarbe (None = kein Hintergrund)
    pub background: Option<Rgba>,
    /// Horizontaler Bezugspunkt
    pub horizontal_origin: HorizontalOrigin,
    /// Vertikaler Bezugspunkt
    pub vertical_origin: VerticalOrigin,
    /// Versatz in Screen-Pixeln
    pub pixel_offset: Vec2,
}

/// Beschreibung einer vom Mess-Werkzeug erzeugten Entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntitySpec {
    /// Messpunkt mit Marker und Label
    Annotation {
        /// Weltposition des Punkts
        position: CartesianPoint,
        /// Punkt-Marker
        marker: MarkerStyle,
        /// Beschriftung
        label: LabelSpec,
    },
    /// Polylinie mit dynamischer Vertex-Liste (Distanzmessung)
    Polyline {
        /// Aktuelle Vertices
        vertices: Vec<CartesianPoint>,
        /// Liniendarstellung
        style: LineStyle,
    },
    /// Umriss + halbtransparente Füllung (Flächenmessung)
    Polygon {
        /// Aktuelle Vertices (Ring, nicht explizit geschlossen)
        vertices: Vec<CartesianPoint>,
        /// Umrisslinie
        outline: LineStyle,
        /// Füllfarbe
        fill: Rgba,
        /// Höhe je Vertex berücksichtigen statt auf das Terrain zu legen
        per_position_height: bool,
    },
}

impl EntitySpec {
    /// Gibt die dynamische Vertex-Liste zurück (nur Polyline/Polygon).
    pub fn vertices(&self) -> Option<&[CartesianPoint]> {
        match self {
            EntitySpec::Polyline { vertices, .. } | EntitySpec::Polygon { vertices, .. } => {
                Some(vertices)
            }
            EntitySpec::Annotation { .. } => None,
        }
    }

    /// Gibt das Label zurück (nur Annotation).
    pub fn label(&self) -> Option<&LabelSpec> {
        match self {
            EntitySpec::Annotation { label, .. } => Some(label),
            _ => None,
        }
    }
}
