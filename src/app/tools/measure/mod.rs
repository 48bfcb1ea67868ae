//! Mess-Werkzeug: Distanz (Linie) und Fläche (Polygon) per Klick auf die
//! Globus-Oberfläche, mit Gummiband-Vorschau und Live-Labels.
//!
//! Beide Modi teilen einen Zustandsautomaten (`MeasureSession`); der Modus
//! bestimmt nur Messgröße, Formatierung und Vorschau-Geometrie.

mod geometry;
mod lifecycle;
mod state;

pub use state::{FinishedMeasurement, MeasureSession};

use crate::core::{format_area, format_distance, polygon_area, total_distance, GeodeticPoint};
use crate::host::{EntityHandle, LineMaterial};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Messmodus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureMode {
    /// Streckenlänge entlang der Punktfolge
    Line,
    /// Fläche des geschlossenen Rings
    Area,
}

impl MeasureMode {
    /// Anzeigename
    pub fn name(&self) -> &'static str {
        match self {
            MeasureMode::Line => "📏 Distanz messen",
            MeasureMode::Area => "⬠ Fläche messen",
        }
    }

    /// Mindestanzahl Punkte für eine nicht-degenerierte Messung.
    pub fn min_points(&self) -> usize {
        match self {
            MeasureMode::Line => 2,
            MeasureMode::Area => 3,
        }
    }

    /// Messwert über die Punktfolge (Meter bzw. Quadratmeter).
    pub fn measure(&self, points: &[GeodeticPoint]) -> f64 {
        match self {
            MeasureMode::Line => total_distance(points),
            MeasureMode::Area => polygon_area(points),
        }
    }

    /// Label-Text für einen Messwert.
    pub fn format(&self, value: f64) -> String {
        match self {
            MeasureMode::Line => format_distance(value),
            MeasureMode::Area => format_area(value),
        }
    }
}

/// Callback nach Abschluss einer Messung: `(Punkte, Handle der Vorschau-Entity)`.
#[derive(Clone)]
pub struct CompletionHandler(Rc<RefCell<dyn FnMut(&[GeodeticPoint], EntityHandle)>>);

impl CompletionHandler {
    /// Verpackt eine Closure als Handler.
    pub fn new(callback: impl FnMut(&[GeodeticPoint], EntityHandle) + 'static) -> Self {
        Self(Rc::new(RefCell::new(callback)))
    }

    /// Ruft den Handler auf.
    pub fn call(&self, points: &[GeodeticPoint], entity: EntityHandle) {
        let mut callback = self.0.borrow_mut();
        (&mut *callback)(points, entity);
    }
}

impl fmt::Debug for CompletionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompletionHandler(..)")
    }
}

/// Optionen pro Messung. Nicht gesetzte Werte kommen aus `MeasureOptions`.
#[derive(Debug, Clone, Default)]
pub struct MeasureConfig {
    /// Wird nach Abschluss mit der geodätischen Punktfolge aufgerufen
    pub on_complete: Option<CompletionHandler>,
    /// Linienbreite in Pixeln
    pub line_width: Option<f32>,
    /// Linienmaterial
    pub line_material: Option<LineMaterial>,
}

impl MeasureConfig {
    /// Setzt den Abschluss-Callback.
    pub fn with_on_complete(
        mut self,
        callback: impl FnMut(&[GeodeticPoint], EntityHandle) + 'static,
    ) -> Self {
        self.on_complete = Some(CompletionHandler::new(callback));
        self
    }

    /// Setzt die Linienbreite.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Setzt das Linienmaterial.
    pub fn with_line_material(mut self, material: LineMaterial) -> Self {
        self.line_material = Some(material);
        self
    }
}

/// Rückgabe der Event-Verarbeitung, steuert den Werkzeug-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureAction {
    /// Event hatte keine Wirkung (kein Pick-Treffer, zu wenige Punkte)
    Ignored,
    /// Punkt übernommen, Label erzeugt
    PointCommitted,
    /// Gummiband-Punkt verschoben
    PreviewUpdated,
    /// Messung abgeschlossen
    Finished,
}

#[cfg(test)]
mod tests;
