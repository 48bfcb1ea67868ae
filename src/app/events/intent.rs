use crate::app::tools::measure::MeasureConfig;
use glam::Vec2;

/// Mess-Intents.
/// Intents sind Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum MeasureIntent {
    /// Werkzeug einhängen (Layer anlegen)
    MountRequested,
    /// Distanzmessung starten
    StartLineRequested { config: MeasureConfig },
    /// Flächenmessung starten
    StartAreaRequested { config: MeasureConfig },
    /// Laufende Messung abbrechen
    CancelRequested,
    /// Primärklick an Screen-Position
    PrimaryClicked { position: Vec2 },
    /// Mausbewegung an Screen-Position
    PointerMoved { position: Vec2 },
    /// Sekundärklick (Abschluss) an Screen-Position
    SecondaryClicked { position: Vec2 },
    /// Alle abgeschlossenen Messungen entfernen
    ClearFinishedRequested,
    /// Werkzeug aushängen (alles freigeben)
    UnmountRequested,
}
