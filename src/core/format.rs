//! Beschriftungstexte für Distanz- und Flächenwerte.

/// Schwelle für die Umschaltung auf Quadratkilometer (m²).
pub const AREA_KM2_THRESHOLD: f64 = 1_000_000.0;

/// Formatiert eine Distanz in Metern für das Label.
///
/// Der Meterwert wird auf 3 Nachkommastellen gerundet, daraus der gerundete
/// Kilometerwert gebildet. Nur wenn dieser **strikt größer** als 1 ist, wird
/// in Kilometern ausgegeben; genau `1.000 km` bleibt also im Meter-Zweig.
pub fn format_distance(meters: f64) -> String {
    let meters_text = format!("{:.3}", meters);
    let rounded_meters = meters_text.parse::<f64>().unwrap_or(meters);
    let km_text = format!("{:.3}", rounded_meters / 1000.0);
    let rounded_km = km_text.parse::<f64>().unwrap_or(rounded_meters / 1000.0);

    if rounded_km > 1.0 {
        format!("{km_text} km")
    } else {
        format!("{meters_text} m")
    }
}

/// Formatiert eine Fläche in Quadratmetern für das Label.
///
/// Bis einschließlich 1 000 000 m² in Quadratmetern, darüber in km².
pub fn format_area(square_meters: f64) -> String {
    if square_meters > AREA_KM2_THRESHOLD {
        format!("{:.3} km²", square_meters / AREA_KM2_THRESHOLD)
    } else {
        format!("{:.3} m²", square_meters)
    }
}
