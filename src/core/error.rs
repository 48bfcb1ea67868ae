//! Fehlertypen der Mess-Domäne.

use thiserror::Error;

/// Fehler, die aus Geometrie-Berechnungen oder Zustands-Vorbedingungen entstehen.
///
/// Pick-Fehlschläge (kein Terrain unter dem Cursor) sind bewusst **kein**
/// Fehler, sie werden als `None` modelliert und still verworfen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    /// Geodätische Eingabe außerhalb des gültigen Wertebereichs
    #[error("ungültige Koordinate: {field} = {value} liegt außerhalb des gültigen Bereichs")]
    InvalidCoordinate {
        /// Betroffenes Feld (`longitude`, `latitude`, `altitude`)
        field: &'static str,
        /// Der abgelehnte Wert
        value: f64,
    },
    /// Kartesischer Punkt ohne geodätisches Äquivalent (Ellipsoid-Zentrum, NaN)
    #[error("kartesischer Punkt ({x}, {y}, {z}) hat keine geodätische Entsprechung")]
    DegenerateCartesian {
        /// X-Komponente
        x: f64,
        /// Y-Komponente
        y: f64,
        /// Z-Komponente
        z: f64,
    },
    /// Operation benötigt eine laufende Messung
    #[error("keine aktive Messung: `{operation}` erfordert eine laufende Sitzung")]
    NoActiveSession {
        /// Name der aufgerufenen Operation
        operation: &'static str,
    },
    /// Das Mess-Werkzeug ist nicht (mehr) an einen Host gebunden
    #[error("Mess-Werkzeug ist nicht eingehängt (kein Mess-Layer vorhanden)")]
    NotMounted,
}

/// Ergebnis-Alias für die Mess-Domäne.
pub type MeasureResult<T> = Result<T, MeasureError>;
