//! Globe Measure Library.
//! Interaktive Distanz- und Flächenmessung auf einem 3D-Globus (WGS84),
//! als Library exportiert für Host-Integration, Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod host;
pub mod shared;

pub use app::{
    CommandRecord, FinishedMeasurement, LiveMeasurement, MeasureCommand, MeasureConfig, MeasureController,
    MeasureIntent, MeasureMode, MeasurePhase, MeasureState,
};
pub use core::{
    format_area, format_distance, polygon_area, surface_and_altitude_distance, surface_distance,
    to_cartesian, to_geodetic, total_distance, CartesianPoint, Ellipsoid, GeodeticPoint,
    MeasureError, MeasureResult,
};
pub use host::{EntityHandle, HeadlessHost, PointerEvent, PointerEventKind, RenderHost};
pub use shared::MeasureOptions;
