//! Referenz-Ellipsoid (WGS84) und abgeleitete Konstanten.

/// Rotationsellipsoid, beschrieben durch große Halbachse und Abplattung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Große Halbachse (Äquatorradius) in Metern
    pub semi_major_axis: f64,
    /// Abplattung `f = (a - b) / a`
    pub flattening: f64,
}

impl Ellipsoid {
    /// WGS84, Referenzellipsoid des Render-Hosts.
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major_axis: 6_378_137.0,
        flattening: 1.0 / 298.257_223_563,
    };

    /// Kleine Halbachse (Polradius) in Metern.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening)
    }

    /// Erste numerische Exzentrizität zum Quadrat.
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// Zweite numerische Exzentrizität zum Quadrat.
    pub fn second_eccentricity_squared(&self) -> f64 {
        let e2 = self.eccentricity_squared();
        e2 / (1.0 - e2)
    }

    /// Querkrümmungsradius `N(φ)` für eine geodätische Breite in Radiant.
    pub fn prime_vertical_radius(&self, latitude_rad: f64) -> f64 {
        let sin_lat = latitude_rad.sin();
        self.semi_major_axis / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }

    /// Länge eines halben Meridians (Pol zu Pol) in Metern.
    ///
    /// Größte mögliche Oberflächendistanz; Distanz zwischen antipodalen Punkten.
    /// Reihe über den rektifizierenden Radius mit `n = f / (2 - f)`.
    pub fn half_meridian_length(&self) -> f64 {
        let n = self.flattening / (2.0 - self.flattening);
        let n2 = n * n;
        let rectifying_radius =
            self.semi_major_axis / (1.0 + n) * (1.0 + n2 / 4.0 + n2 * n2 / 64.0);
        std::f64::consts::PI * rectifying_radius
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
