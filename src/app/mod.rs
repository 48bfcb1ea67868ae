//! Application-Layer: Controller, State, Events und Werkzeug.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Zustand des Mess-Werkzeugs (Phase, Layer, Messungen)
pub mod state;
pub mod tools;

pub use command_log::{CommandLog, CommandRecord};
pub use controller::MeasureController;
pub use events::{MeasureCommand, MeasureIntent};
pub use state::{LiveMeasurement, MeasurePhase, MeasureState};
pub use tools::measure::{
    CompletionHandler, FinishedMeasurement, MeasureAction, MeasureConfig, MeasureMode,
    MeasureSession,
};
