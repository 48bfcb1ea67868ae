//! Planare Flächennäherung für Polygone auf der Ellipsoid-Oberfläche.
//!
//! Die Eckpunkte werden (ohne Höhe) auf das WGS84-Ellipsoid gelegt und in die
//! lokale Ost/Nord-Tangentialebene des ersten Eckpunkts projiziert; die Fläche
//! folgt aus der Gaußschen Trapezformel über den geschlossenen Ring.
//!
//! Gültig für Flächen, die klein gegenüber dem Krümmungsradius sind; für
//! sehr große Polygone weicht das Ergebnis von der geodätischen Fläche ab.

use super::ellipsoid::Ellipsoid;
use super::geodetic::{to_cartesian_on, GeodeticPoint};
use glam::{DVec2, DVec3};

/// Ost- und Nord-Einheitsvektor der Tangentialebene an einem Punkt.
pub fn local_tangent_axes(origin: GeodeticPoint) -> (DVec3, DVec3) {
    let (sin_lon, cos_lon) = origin.longitude_rad().sin_cos();
    let (sin_lat, cos_lat) = origin.latitude_rad().sin_cos();
    let east = DVec3::new(-sin_lon, cos_lon, 0.0);
    let north = DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
    (east, north)
}

/// Projiziert eine Punktfolge in die Tangentialebene des ersten Punkts (Meter).
pub fn project_to_tangent_plane(points: &[GeodeticPoint]) -> Vec<DVec2> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let ellipsoid = Ellipsoid::WGS84;
    let origin = to_cartesian_on(&ellipsoid, first.with_altitude_offset(-first.altitude));
    let (east, north) = local_tangent_axes(first);

    points
        .iter()
        .map(|p| {
            let on_surface = to_cartesian_on(&ellipsoid, p.with_altitude_offset(-p.altitude));
            let rel = on_surface - origin;
            DVec2::new(rel.dot(east), rel.dot(north))
        })
        .collect()
}

/// Gaußsche Trapezformel über den geschlossenen Ring (Index modulo Anzahl).
pub fn shoelace_area(ring: &[DVec2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let twice: f64 = (0..ring.len())
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() / 2.0
}

/// Fläche des durch die Punktfolge umschlossenen Polygons in Quadratmetern.
///
/// Weniger als 3 Punkte ergeben 0. Der Ring muss nicht explizit geschlossen
/// sein; ein wiederholter Startpunkt am Ende trägt nichts bei.
pub fn polygon_area(points: &[GeodeticPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    shoelace_area(&project_to_tangent_plane(points))
}
