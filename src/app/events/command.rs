use crate::app::tools::measure::{MeasureConfig, MeasureMode};
use glam::Vec2;

/// Mutierende Commands, ausgeführt vom Controller.
#[derive(Debug, Clone)]
pub enum MeasureCommand {
    /// Layer im Host anlegen
    Mount,
    /// Neue Messung beginnen
    StartSession {
        mode: MeasureMode,
        config: MeasureConfig,
    },
    /// Punkt übernehmen
    CommitPoint { position: Vec2 },
    /// Gummiband-Punkt verschieben
    UpdatePreview { position: Vec2 },
    /// Messung abschließen
    FinishSession { position: Vec2 },
    /// Laufende Messung verwerfen
    CancelSession,
    /// Entities abgeschlossener Messungen entfernen
    ClearFinished,
    /// Layer entfernen, Werkzeug aushängen
    Unmount,
}
