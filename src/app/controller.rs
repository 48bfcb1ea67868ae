//! Application Controller für zentrale Event-Verarbeitung.

use super::tools::measure::{MeasureConfig, MeasureMode};
use super::{CommandRecord, MeasureCommand, MeasureIntent, MeasureState};
use crate::host::{PointerEvent, PointerEventKind, RenderHost};

/// Orchestriert Host-Events und Commands auf den MeasureState.
#[derive(Debug, Default)]
pub struct MeasureController;

impl MeasureController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut MeasureState,
        host: &mut dyn RenderHost,
        intent: MeasureIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, host, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(
        &self,
        state: &MeasureState,
        intent: MeasureIntent,
    ) -> Vec<MeasureCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem MeasureState aus.
    /// Dispatcht an Feature-Handler in `handlers/`; protokolliert wird nur
    /// ein erfolgreich ausgeführter Command.
    pub fn handle_command(
        &mut self,
        state: &mut MeasureState,
        host: &mut dyn RenderHost,
        command: MeasureCommand,
    ) -> anyhow::Result<()> {
        let record = CommandRecord::from(&command);
        use super::handlers;

        match command {
            // === Layer ===
            MeasureCommand::Mount => handlers::layer::mount(state, host),
            MeasureCommand::ClearFinished => handlers::layer::clear_finished(state, host),
            MeasureCommand::Unmount => handlers::layer::unmount(state, host),

            // === Messung ===
            MeasureCommand::StartSession { mode, config } => {
                handlers::session::start(state, host, mode, config)?
            }
            MeasureCommand::CommitPoint { position } => {
                handlers::session::commit_point(state, host, position)?;
            }
            MeasureCommand::UpdatePreview { position } => {
                handlers::session::update_preview(state, host, position)?;
            }
            MeasureCommand::FinishSession { position } => {
                handlers::session::finish(state, host, position)?;
            }
            MeasureCommand::CancelSession => handlers::session::cancel(state, host),
        }

        state.command_log.record(record);
        Ok(())
    }

    /// Holt alle gepufferten Pointer-Events vom Host und verarbeitet sie
    /// in Dispatch-Reihenfolge. Gibt die Anzahl verarbeiteter Events zurück.
    pub fn pump(
        &mut self,
        state: &mut MeasureState,
        host: &mut dyn RenderHost,
    ) -> anyhow::Result<usize> {
        let mut processed = 0;
        while let Some(event) = host.poll_pointer_event() {
            self.handle_intent(state, host, pointer_intent(event))?;
            processed += 1;
        }
        Ok(processed)
    }

    /// Hängt das Werkzeug ein (legt den Mess-Layer an).
    pub fn mount(&mut self, state: &mut MeasureState, host: &mut dyn RenderHost) -> anyhow::Result<()> {
        self.handle_intent(state, host, MeasureIntent::MountRequested)
    }

    /// Startet eine Distanzmessung.
    pub fn start_line_measurement(
        &mut self,
        state: &mut MeasureState,
        host: &mut dyn RenderHost,
        config: MeasureConfig,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, host, MeasureIntent::StartLineRequested { config })
    }

    /// Startet eine Flächenmessung.
    pub fn start_area_measurement(
        &mut self,
        state: &mut MeasureState,
        host: &mut dyn RenderHost,
        config: MeasureConfig,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, host, MeasureIntent::StartAreaRequested { config })
    }

    /// Startet eine Messung im angegebenen Modus.
    pub fn start_measurement(
        &mut self,
        state: &mut MeasureState,
        host: &mut dyn RenderHost,
        mode: MeasureMode,
        config: MeasureConfig,
    ) -> anyhow::Result<()> {
        match mode {
            MeasureMode::Line => self.start_line_measurement(state, host, config),
            MeasureMode::Area => self.start_area_measurement(state, host, config),
        }
    }

    /// Bricht die laufende Messung ab.
    pub fn cancel(&mut self, state: &mut MeasureState, host: &mut dyn RenderHost) -> anyhow::Result<()> {
        self.handle_intent(state, host, MeasureIntent::CancelRequested)
    }

    /// Entfernt alle abgeschlossenen Messungen.
    pub fn clear_finished(
        &mut self,
        state: &mut MeasureState,
        host: &mut dyn RenderHost,
    ) -> anyhow::Result<()> {
        self.handle_intent(state, host, MeasureIntent::ClearFinishedRequested)
    }

    /// Hängt das Werkzeug aus und gibt alle Host-Ressourcen frei.
    pub fn unmount(&mut self, state: &mut MeasureState, host: &mut dyn RenderHost) -> anyhow::Result<()> {
        self.handle_intent(state, host, MeasureIntent::UnmountRequested)
    }
}

fn pointer_intent(event: PointerEvent) -> MeasureIntent {
    let position = event.position;
    match event.kind {
        PointerEventKind::PrimaryClick => MeasureIntent::PrimaryClicked { position },
        PointerEventKind::PointerMove => MeasureIntent::PointerMoved { position },
        PointerEventKind::SecondaryClick => MeasureIntent::SecondaryClicked { position },
    }
}
