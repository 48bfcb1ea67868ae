//! Core-Domäne: Koordinaten-Transformation, Distanz, Fläche, Formatierung.
//!
//! Reine Funktionen ohne Host- oder Zustandsabhängigkeit.

pub mod area;
pub mod ellipsoid;
pub mod error;
pub mod format;
pub mod geodesic;
/// Geodätische und kartesische Punkt-Typen samt Umrechnung
pub mod geodetic;

pub use area::{local_tangent_axes, polygon_area};
pub use ellipsoid::Ellipsoid;
pub use error::{MeasureError, MeasureResult};
pub use format::{format_area, format_distance};
pub use geodesic::{surface_and_altitude_distance, surface_distance, total_distance};
pub use geodetic::{
    to_cartesian, to_cartesian_sequence, to_geodetic, to_geodetic_sequence, CartesianPoint,
    GeodeticPoint,
};
