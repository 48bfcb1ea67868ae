//! Koordinaten-Transformation zwischen geodätischen (Länge, Breite, Höhe)
//! und kartesischen Weltkoordinaten (ECEF, WGS84).
//!
//! Alle Funktionen sind rein und seiteneffektfrei.

use super::ellipsoid::Ellipsoid;
use super::error::{MeasureError, MeasureResult};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Kartesische Weltposition des Render-Hosts (ECEF, Meter).
pub type CartesianPoint = DVec3;

/// Punkte näher als dieser Abstand am Ellipsoid-Zentrum gelten als degeneriert.
const CENTER_TOLERANCE: f64 = 1.0;
/// Abbruchschranke der Breiten-Iteration (Radiant).
const LATITUDE_EPSILON: f64 = 1e-14;
/// Maximale Iterationen für die Breiten-Bestimmung.
const MAX_ITERATIONS: usize = 16;

/// Geodätische Position: Länge/Breite in Grad, Höhe in Metern über dem Ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeodeticPoint {
    /// Geografische Länge in Grad, [-180, 180]
    pub longitude: f64,
    /// Geografische Breite in Grad, [-90, 90]
    pub latitude: f64,
    /// Höhe über dem Ellipsoid in Metern
    pub altitude: f64,
}

impl GeodeticPoint {
    /// Erstellt einen Punkt ohne Bereichsprüfung.
    pub const fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    /// Prüft Wertebereiche: Länge ∈ [-180, 180], Breite ∈ [-90, 90], Höhe endlich.
    pub fn validate(&self) -> MeasureResult<()> {
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(MeasureError::InvalidCoordinate {
                field: "longitude",
                value: self.longitude,
            });
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(MeasureError::InvalidCoordinate {
                field: "latitude",
                value: self.latitude,
            });
        }
        if !self.altitude.is_finite() {
            return Err(MeasureError::InvalidCoordinate {
                field: "altitude",
                value: self.altitude,
            });
        }
        Ok(())
    }

    /// Gibt eine Kopie mit verschobener Höhe zurück.
    pub fn with_altitude_offset(self, offset: f64) -> Self {
        Self {
            altitude: self.altitude + offset,
            ..self
        }
    }

    /// Länge in Radiant.
    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }

    /// Breite in Radiant.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }
}

/// Konvertiert einen geodätischen Punkt in kartesische WGS84-Koordinaten.
///
/// Schlägt mit `InvalidCoordinate` fehl, wenn Länge/Breite außerhalb des
/// gültigen Bereichs liegen oder die Höhe nicht endlich ist.
pub fn to_cartesian(point: GeodeticPoint) -> MeasureResult<CartesianPoint> {
    point.validate()?;
    Ok(to_cartesian_on(&Ellipsoid::WGS84, point))
}

/// Ungeprüfte Umrechnung auf einem beliebigen Ellipsoid.
pub(crate) fn to_cartesian_on(ellipsoid: &Ellipsoid, point: GeodeticPoint) -> CartesianPoint {
    let lat = point.latitude_rad();
    let lon = point.longitude_rad();
    let n = ellipsoid.prime_vertical_radius(lat);
    let e2 = ellipsoid.eccentricity_squared();
    let h = point.altitude;

    DVec3::new(
        (n + h) * lat.cos() * lon.cos(),
        (n + h) * lat.cos() * lon.sin(),
        (n * (1.0 - e2) + h) * lat.sin(),
    )
}

/// Konvertiert kartesische WGS84-Koordinaten zurück in einen geodätischen Punkt.
///
/// Inverse zu [`to_cartesian`] bis auf Gleitkomma-Genauigkeit.
/// Punkte nahe dem Ellipsoid-Zentrum oder mit NaN-Komponenten liefern
/// `DegenerateCartesian`.
pub fn to_geodetic(point: CartesianPoint) -> MeasureResult<GeodeticPoint> {
    to_geodetic_on(&Ellipsoid::WGS84, point)
}

pub(crate) fn to_geodetic_on(
    ellipsoid: &Ellipsoid,
    point: CartesianPoint,
) -> MeasureResult<GeodeticPoint> {
    if !point.is_finite() || point.length() < CENTER_TOLERANCE {
        return Err(MeasureError::DegenerateCartesian {
            x: point.x,
            y: point.y,
            z: point.z,
        });
    }

    let e2 = ellipsoid.eccentricity_squared();
    let p = point.x.hypot(point.y);
    let longitude = point.y.atan2(point.x);

    // Auf der Polachse ist die Länge beliebig, die Breite ±90°
    if p < 1e-9 {
        let latitude = if point.z >= 0.0 {
            std::f64::consts::FRAC_PI_2
        } else {
            -std::f64::consts::FRAC_PI_2
        };
        return Ok(GeodeticPoint::new(
            0.0,
            latitude.to_degrees(),
            point.z.abs() - ellipsoid.semi_minor_axis(),
        ));
    }

    let mut latitude = point.z.atan2(p * (1.0 - e2));
    let mut height = height_for(ellipsoid, p, point.z, latitude);
    for _ in 0..MAX_ITERATIONS {
        let n = ellipsoid.prime_vertical_radius(latitude);
        let next = point.z.atan2(p * (1.0 - e2 * n / (n + height)));
        let delta = (next - latitude).abs();
        latitude = next;
        height = height_for(ellipsoid, p, point.z, latitude);
        if delta < LATITUDE_EPSILON {
            break;
        }
    }

    Ok(GeodeticPoint::new(
        longitude.to_degrees(),
        latitude.to_degrees(),
        height,
    ))
}

/// Höhe über dem Ellipsoid; nahe den Polen über `z / sin φ` (stabiler als `p / cos φ`).
fn height_for(ellipsoid: &Ellipsoid, p: f64, z: f64, latitude: f64) -> f64 {
    let n = ellipsoid.prime_vertical_radius(latitude);
    let (sin_lat, cos_lat) = latitude.sin_cos();
    if cos_lat.abs() > sin_lat.abs() {
        p / cos_lat - n
    } else {
        z / sin_lat - n * (1.0 - ellipsoid.eccentricity_squared())
    }
}

/// Elementweise, reihenfolgetreue Konvertierung einer Punktfolge.
///
/// Leere Eingabe liefert eine leere Ausgabe; der erste degenerierte Punkt
/// bricht die Konvertierung ab.
pub fn to_geodetic_sequence(points: &[CartesianPoint]) -> MeasureResult<Vec<GeodeticPoint>> {
    points.iter().map(|p| to_geodetic(*p)).collect()
}

/// Konvertiert eine geodätische Punktfolge in kartesische Koordinaten.
pub fn to_cartesian_sequence(points: &[GeodeticPoint]) -> MeasureResult<Vec<CartesianPoint>> {
    points.iter().map(|p| to_cartesian(*p)).collect()
}
