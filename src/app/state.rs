//! Application State: zentrale Datenhaltung des Mess-Werkzeugs.

use super::tools::measure::{FinishedMeasurement, MeasureMode, MeasureSession};
use super::CommandLog;
use crate::host::LayerId;
use crate::shared::MeasureOptions;

/// Zustand des Mess-Werkzeugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurePhase {
    /// Keine Messung aktiv
    #[default]
    Idle,
    /// Punkte werden gesammelt
    Collecting,
    /// Letzte Messung abgeschlossen
    Finalized,
}

/// Live-Messwert der laufenden Messung.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveMeasurement {
    /// Messmodus
    pub mode: MeasureMode,
    /// Messwert inkl. Gummiband-Punkt (Meter bzw. Quadratmeter)
    pub value: f64,
    /// Formatierter Text
    pub text: String,
    /// Anzahl Punkte inkl. Gummiband-Punkt
    pub point_count: usize,
}

/// Hauptzustand: Optionen, Layer, laufende und abgeschlossene Messungen.
#[derive(Debug)]
pub struct MeasureState {
    /// Laufzeit-Optionen
    pub options: MeasureOptions,
    /// Erfolgreich ausgeführte Commands
    pub command_log: CommandLog,
    pub(crate) layer: Option<LayerId>,
    pub(crate) session: Option<MeasureSession>,
    pub(crate) finished: Vec<FinishedMeasurement>,
    pub(crate) finalized: bool,
    pub(crate) next_measurement_id: u64,
}

impl Default for MeasureState {
    fn default() -> Self {
        Self::new(MeasureOptions::default())
    }
}

impl MeasureState {
    /// Erstellt einen neuen, nicht eingehängten Zustand.
    pub fn new(options: MeasureOptions) -> Self {
        Self {
            options,
            command_log: CommandLog::new(),
            layer: None,
            session: None,
            finished: Vec::new(),
            finalized: false,
            next_measurement_id: 1,
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> MeasurePhase {
        if self.session.is_some() {
            MeasurePhase::Collecting
        } else if self.finalized {
            MeasurePhase::Finalized
        } else {
            MeasurePhase::Idle
        }
    }

    /// Ob der Mess-Layer im Host existiert.
    pub fn is_mounted(&self) -> bool {
        self.layer.is_some()
    }

    /// Layer des Werkzeugs (falls eingehängt).
    pub fn layer(&self) -> Option<LayerId> {
        self.layer
    }

    /// Laufende Messung.
    pub fn session(&self) -> Option<&MeasureSession> {
        self.session.as_ref()
    }

    /// Abgeschlossene Messungen in Abschluss-Reihenfolge.
    pub fn finished(&self) -> &[FinishedMeasurement] {
        &self.finished
    }

    /// Live-Messwert der laufenden Messung; `None` ohne Sitzung.
    pub fn current_measurement(&self) -> Option<LiveMeasurement> {
        let session = self.session.as_ref()?;
        let value = session.current_value();
        Some(LiveMeasurement {
            mode: session.mode(),
            value,
            text: session.mode().format(value),
            point_count: session.positions().len(),
        })
    }
}
