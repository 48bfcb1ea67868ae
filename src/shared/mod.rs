//! Geteilte Typen und Konfiguration für alle Layer.

pub mod options;

pub use options::MeasureOptions;
pub use options::{MEASURE_LAYER_NAME, PICK_HEIGHT_OFFSET};
