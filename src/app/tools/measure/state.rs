//! Zustands-Definitionen der laufenden und abgeschlossenen Messung.

use super::{MeasureConfig, MeasureMode};
use crate::core::{CartesianPoint, GeodeticPoint};
use crate::host::{EntityHandle, LayerId, ListenerId};

/// Laufende Messung (Zustand `Collecting`).
///
/// `positions` enthält alle übernommenen Punkte; der letzte Eintrag ist der
/// Gummiband-Punkt, der bei Mausbewegung ersetzt wird. Der erste Klick legt
/// den Startpunkt doppelt an, damit sofort ein Segment existiert.
#[derive(Debug)]
pub struct MeasureSession {
    /// Messmodus
    pub(crate) mode: MeasureMode,
    /// Layer, in dem alle Entities dieser Messung liegen
    pub(crate) layer: LayerId,
    /// Punktfolge in Weltkoordinaten (inkl. Gummiband-Punkt)
    pub(crate) positions: Vec<CartesianPoint>,
    /// Vorschau-Entity (Polyline bzw. Polygon mit dynamischen Vertices)
    pub(crate) preview: EntityHandle,
    /// Punkt-/Label-Entities in Klick-Reihenfolge
    pub(crate) annotations: Vec<EntityHandle>,
    /// Registrierte Pointer-Listener
    pub(crate) listeners: Vec<ListenerId>,
    /// Optionen dieser Messung
    pub(crate) config: MeasureConfig,
}

impl MeasureSession {
    /// Messmodus der Sitzung.
    pub fn mode(&self) -> MeasureMode {
        self.mode
    }

    /// Aktuelle Punktfolge (Weltkoordinaten, inkl. Gummiband-Punkt).
    pub fn positions(&self) -> &[CartesianPoint] {
        &self.positions
    }

    /// Handle der Vorschau-Entity.
    pub fn preview_entity(&self) -> EntityHandle {
        self.preview
    }

    /// Anzahl erzeugter Punkt-/Label-Entities.
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Anzahl registrierter Listener.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Abgeschlossene Messung; die Entities bleiben im Layer, bis sie
/// über `clear_finished` oder beim Aushängen entfernt werden.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedMeasurement {
    /// Laufende Nummer innerhalb der Werkzeug-Lebensdauer
    pub id: u64,
    /// Messmodus
    pub mode: MeasureMode,
    /// Geodätische Punktfolge (bei Flächen mit wiederholtem Startpunkt)
    pub points: Vec<GeodeticPoint>,
    /// Messwert in Metern bzw. Quadratmetern
    pub value: f64,
    /// Formatierter Label-Text
    pub label: String,
    /// Vorschau-Entity (an den Callback übergeben)
    pub preview: EntityHandle,
    /// Punkt-/Label-Entities
    pub annotations: Vec<EntityHandle>,
}

impl FinishedMeasurement {
    /// Alle von dieser Messung gehaltenen Entities.
    pub fn entities(&self) -> impl Iterator<Item = EntityHandle> + '_ {
        std::iter::once(self.preview).chain(self.annotations.iter().copied())
    }

    /// Anzahl unterschiedlicher Eckpunkte.
    ///
    /// Aufeinanderfolgende gleiche Punkte (der beim ersten Klick doppelt
    /// angelegte Startpunkt, Klick ohne Mausbewegung) zählen einfach; bei
    /// Flächen zählt der schließende Startpunkt nicht.
    pub fn distinct_vertex_count(&self) -> usize {
        let Some(first) = self.points.first() else {
            return 0;
        };
        let mut count = 1 + self.points.windows(2).filter(|w| w[0] != w[1]).count();
        if self.mode == MeasureMode::Area && count > 1 && self.points.last() == Some(first) {
            count -= 1;
        }
        count
    }

    /// Ob die Messung weniger Eckpunkte als das Modus-Minimum hat.
    pub fn is_degenerate(&self) -> bool {
        self.distinct_vertex_count() < self.mode.min_points()
    }
}
