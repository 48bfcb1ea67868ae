//! Mapping von Mess-Intents auf mutierende Commands.

use super::{MeasureCommand, MeasureIntent, MeasurePhase, MeasureState};
use crate::app::tools::measure::{MeasureConfig, MeasureMode};

/// Übersetzt einen `MeasureIntent` in eine Sequenz ausführbarer `MeasureCommand`s.
pub fn map_intent_to_commands(state: &MeasureState, intent: MeasureIntent) -> Vec<MeasureCommand> {
    let collecting = state.phase() == MeasurePhase::Collecting;

    match intent {
        MeasureIntent::MountRequested => vec![MeasureCommand::Mount],
        MeasureIntent::StartLineRequested { config } => {
            start_commands(collecting, MeasureMode::Line, config)
        }
        MeasureIntent::StartAreaRequested { config } => {
            start_commands(collecting, MeasureMode::Area, config)
        }
        MeasureIntent::CancelRequested => vec![MeasureCommand::CancelSession],
        MeasureIntent::PrimaryClicked { position } => {
            vec![MeasureCommand::CommitPoint { position }]
        }
        MeasureIntent::PointerMoved { position } => {
            vec![MeasureCommand::UpdatePreview { position }]
        }
        MeasureIntent::SecondaryClicked { position } => {
            vec![MeasureCommand::FinishSession { position }]
        }
        MeasureIntent::ClearFinishedRequested => vec![MeasureCommand::ClearFinished],
        MeasureIntent::UnmountRequested => {
            if collecting {
                vec![MeasureCommand::CancelSession, MeasureCommand::Unmount]
            } else {
                vec![MeasureCommand::Unmount]
            }
        }
    }
}

/// Neustart während einer laufenden Messung verwirft diese zuerst.
fn start_commands(collecting: bool, mode: MeasureMode, config: MeasureConfig) -> Vec<MeasureCommand> {
    let start = MeasureCommand::StartSession { mode, config };
    if collecting {
        vec![MeasureCommand::CancelSession, start]
    } else {
        vec![start]
    }
}
