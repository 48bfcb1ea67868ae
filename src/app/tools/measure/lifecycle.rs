//! Lifecycle der Messung: Start, Klick, Gummiband, Abschluss, Abbruch.

use super::geometry::{annotation_spec, pick_point, preview_spec};
use super::state::{FinishedMeasurement, MeasureSession};
use super::{MeasureAction, MeasureConfig, MeasureMode};
use crate::core::{to_geodetic_sequence, CartesianPoint, GeodeticPoint, MeasureResult};
use crate::host::{LayerId, LineStyle, PointerEventKind, RenderHost};
use crate::shared::MeasureOptions;
use glam::Vec2;

impl MeasureSession {
    /// Startet eine Messung: legt die (noch leere) Vorschau-Entity an und
    /// registriert die drei Pointer-Listener.
    pub fn begin(
        host: &mut dyn RenderHost,
        layer: LayerId,
        mode: MeasureMode,
        config: MeasureConfig,
        options: &MeasureOptions,
    ) -> Self {
        let style = Self::resolve_line_style(&config, options);
        let preview = host.add_entity(layer, preview_spec(mode, style, options));
        let listeners = [
            PointerEventKind::PrimaryClick,
            PointerEventKind::PointerMove,
            PointerEventKind::SecondaryClick,
        ]
        .into_iter()
        .map(|kind| host.register_pointer_handler(kind))
        .collect();

        log::debug!("{} gestartet (Vorschau {:?})", mode.name(), preview);

        Self {
            mode,
            layer,
            positions: Vec::new(),
            preview,
            annotations: Vec::new(),
            listeners,
            config,
        }
    }

    fn resolve_line_style(config: &MeasureConfig, options: &MeasureOptions) -> LineStyle {
        let mut style = options.line_style();
        if let Some(width) = config.line_width {
            style.width = width;
        }
        if let Some(material) = config.line_material {
            style.material = material;
        }
        style
    }

    /// Primärklick: übernimmt den Punkt und erzeugt ein Label mit dem
    /// kumulierten Messwert. Der erste Klick legt den Startpunkt doppelt an.
    pub fn on_primary_click(
        &mut self,
        host: &mut dyn RenderHost,
        pixel: Vec2,
        options: &MeasureOptions,
    ) -> MeasureAction {
        let Some(point) = pick_point(host, pixel, options) else {
            return MeasureAction::Ignored;
        };

        if self.positions.is_empty() {
            self.positions.push(point);
        }
        self.positions.push(point);
        self.sync_preview(host);

        let text = self.mode.format(self.current_value());
        let show = match self.mode {
            MeasureMode::Line => true,
            MeasureMode::Area => options.show_intermediate_area_labels,
        };
        self.add_annotation(host, point, text, show, options);
        MeasureAction::PointCommitted
    }

    /// Mausbewegung: ersetzt den Gummiband-Punkt, sobald mindestens zwei
    /// Punkte existieren. Erzeugt kein Label.
    pub fn on_pointer_move(
        &mut self,
        host: &mut dyn RenderHost,
        pixel: Vec2,
        options: &MeasureOptions,
    ) -> MeasureAction {
        if self.positions.len() < 2 {
            return MeasureAction::Ignored;
        }
        let Some(point) = pick_point(host, pixel, options) else {
            return MeasureAction::Ignored;
        };
        if let Some(last) = self.positions.last_mut() {
            *last = point;
        }
        self.sync_preview(host);
        MeasureAction::PreviewUpdated
    }

    /// Sekundärklick: letzter Punkt, Abschluss-Label, bei Flächen Schließen
    /// des Rings. Listener werden entfernt und der Callback aufgerufen.
    ///
    /// Ohne Pick-Treffer bleibt die Messung unverändert (`Ok(None)`).
    pub fn on_confirm(
        &mut self,
        host: &mut dyn RenderHost,
        pixel: Vec2,
        options: &MeasureOptions,
        id: u64,
    ) -> MeasureResult<Option<FinishedMeasurement>> {
        let Some(point) = pick_point(host, pixel, options) else {
            return Ok(None);
        };

        let mut positions = self.positions.clone();
        positions.push(point);
        if self.mode == MeasureMode::Area {
            if let Some(&first) = positions.first() {
                positions.push(first);
            }
        }
        let points = to_geodetic_sequence(&positions)?;
        self.positions = positions;
        self.sync_preview(host);

        let value = self.mode.measure(&points);
        let label = self.mode.format(value);
        self.add_annotation(host, point, label.clone(), true, options);
        host.unregister_all(&self.listeners);
        self.listeners.clear();

        let finished = FinishedMeasurement {
            id,
            mode: self.mode,
            points,
            value,
            label,
            preview: self.preview,
            annotations: std::mem::take(&mut self.annotations),
        };
        if finished.is_degenerate() {
            log::warn!(
                "{} mit nur {} Eckpunkten abgeschlossen (Minimum {})",
                self.mode.name(),
                finished.distinct_vertex_count(),
                self.mode.min_points()
            );
        }
        if let Some(handler) = &self.config.on_complete {
            handler.call(&finished.points, finished.preview);
        }
        Ok(Some(finished))
    }

    /// Bricht die Messung ab: Listener und alle Entities werden entfernt.
    pub fn cancel(self, host: &mut dyn RenderHost) {
        host.unregister_all(&self.listeners);
        host.remove_entity(self.preview);
        for handle in &self.annotations {
            host.remove_entity(*handle);
        }
        log::debug!(
            "{} abgebrochen, {} Punkte verworfen",
            self.mode.name(),
            self.positions.len()
        );
    }

    /// Aktueller Messwert über die Punktfolge inkl. Gummiband-Punkt.
    ///
    /// Nicht umrechenbare Punkte ergeben 0.
    pub fn current_value(&self) -> f64 {
        match to_geodetic_sequence(&self.positions) {
            Ok(points) => self.mode.measure(&points),
            Err(e) => {
                log::debug!("Messwert nicht berechenbar: {}", e);
                0.0
            }
        }
    }

    /// Aktuelle Punktfolge in geodätischen Koordinaten.
    pub fn geodetic_positions(&self) -> MeasureResult<Vec<GeodeticPoint>> {
        to_geodetic_sequence(&self.positions)
    }

    fn sync_preview(&self, host: &mut dyn RenderHost) {
        host.set_entity_vertices(self.preview, &self.positions);
    }

    fn add_annotation(
        &mut self,
        host: &mut dyn RenderHost,
        position: CartesianPoint,
        text: String,
        show: bool,
        options: &MeasureOptions,
    ) {
        let handle = host.add_entity(self.layer, annotation_spec(position, text, show, options));
        self.annotations.push(handle);
    }
}
