//! Protokoll erfolgreich ausgeführter Commands für Diagnose und Replay-Auswertung.
//!
//! Einträge sind schlanke Kopien ohne `MeasureConfig`: ein protokollierter
//! Start darf den Abschluss-Callback (und alles, was dieser festhält) nicht
//! über das Ende seiner Messung hinaus am Leben halten.

use super::tools::measure::MeasureMode;
use super::MeasureCommand;
use glam::Vec2;

/// Protokolleintrag eines ausgeführten Commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandRecord {
    /// Layer angelegt
    Mount,
    /// Messung gestartet
    StartSession { mode: MeasureMode },
    /// Punkt übernommen
    CommitPoint { position: Vec2 },
    /// Gummiband-Punkt verschoben
    UpdatePreview { position: Vec2 },
    /// Abschluss angefordert
    FinishSession { position: Vec2 },
    /// Messung verworfen
    CancelSession,
    /// Abgeschlossene Messungen entfernt
    ClearFinished,
    /// Werkzeug ausgehängt
    Unmount,
}

impl From<&MeasureCommand> for CommandRecord {
    fn from(command: &MeasureCommand) -> Self {
        match command {
            MeasureCommand::Mount => Self::Mount,
            MeasureCommand::StartSession { mode, .. } => Self::StartSession { mode: *mode },
            MeasureCommand::CommitPoint { position } => Self::CommitPoint {
                position: *position,
            },
            MeasureCommand::UpdatePreview { position } => Self::UpdatePreview {
                position: *position,
            },
            MeasureCommand::FinishSession { position } => Self::FinishSession {
                position: *position,
            },
            MeasureCommand::CancelSession => Self::CancelSession,
            MeasureCommand::ClearFinished => Self::ClearFinished,
            MeasureCommand::Unmount => Self::Unmount,
        }
    }
}

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug)]
pub struct CommandLog {
    entries: Vec<CommandRecord>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Standard-Kapazität.
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Erstellt ein leeres Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Erstellt ein leeres Log; Kapazität mindestens 2.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(2),
        }
    }

    /// Hängt einen Eintrag an. Bei voller Kapazität wird die ältere Hälfte verworfen.
    pub fn record(&mut self, record: CommandRecord) {
        if self.entries.len() >= self.capacity {
            self.entries.drain(..self.capacity / 2);
        }
        self.entries.push(record);
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn noch nichts protokolliert wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Einträge in Ausführungsreihenfolge.
    pub fn entries(&self) -> &[CommandRecord] {
        &self.entries
    }

    /// Letzter Eintrag.
    pub fn last(&self) -> Option<&CommandRecord> {
        self.entries.last()
    }
}
