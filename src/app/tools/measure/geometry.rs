//! Entity-Beschreibungen und Oberflächen-Picking für das Mess-Werkzeug.

use super::MeasureMode;
use crate::core::{to_cartesian, to_geodetic, CartesianPoint, GeodeticPoint};
use crate::host::{EntitySpec, LabelSpec, LineStyle, RenderHost};
use crate::shared::MeasureOptions;
use glam::Vec2;

/// Vorschau-Entity für einen Modus: Linie bzw. Umriss + Füllung.
pub(crate) fn preview_spec(
    mode: MeasureMode,
    style: LineStyle,
    options: &MeasureOptions,
) -> EntitySpec {
    match mode {
        MeasureMode::Line => EntitySpec::Polyline {
            vertices: Vec::new(),
            style,
        },
        MeasureMode::Area => EntitySpec::Polygon {
            vertices: Vec::new(),
            outline: style,
            fill: options.area_fill_color,
            per_position_height: true,
        },
    }
}

/// Messpunkt mit Marker und Label.
pub(crate) fn annotation_spec(
    position: CartesianPoint,
    text: String,
    show: bool,
    options: &MeasureOptions,
) -> EntitySpec {
    EntitySpec::Annotation {
        position,
        marker: options.marker_style(),
        label: LabelSpec {
            text,
            show,
            font: options.label_font.clone(),
            background: Some(options.label_background),
            horizontal_origin: options.label_horizontal_origin,
            vertical_origin: options.label_vertical_origin,
            pixel_offset: Vec2::from(options.label_pixel_offset),
        },
    }
}

/// Pickt die Oberfläche unter einem Pixel und hebt den Treffer um den
/// konfigurierten Höhenversatz an.
///
/// Kein Treffer oder ein degenerierter Punkt ergibt `None`.
pub(crate) fn pick_point(
    host: &dyn RenderHost,
    pixel: Vec2,
    options: &MeasureOptions,
) -> Option<CartesianPoint> {
    let Some(hit) = host.pick_surface_point(pixel) else {
        log::debug!("Kein Oberflächentreffer bei {:?}", pixel);
        return None;
    };
    let lifted: Option<GeodeticPoint> = match to_geodetic(hit) {
        Ok(point) => Some(point.with_altitude_offset(options.pick_height_offset)),
        Err(e) => {
            log::debug!("Pick verworfen: {}", e);
            None
        }
    };
    lifted.and_then(|p| to_cartesian(p).ok())
}
