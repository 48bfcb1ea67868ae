//! Ellipsoidische Distanzberechnung (Vincenty, inverse Aufgabe) mit
//! höhenkorrigierter Streckenlänge über Punktfolgen.

use super::ellipsoid::Ellipsoid;
use super::geodetic::GeodeticPoint;

/// Konvergenzschranke für die Längen-Iteration (Radiant, ≈ 0.006 mm).
const LAMBDA_EPSILON: f64 = 1e-12;
/// Iterationslimit; bei fast antipodalen Punkten konvergiert Vincenty langsam.
const MAX_ITERATIONS: usize = 200;

/// Kürzeste Distanz auf der Ellipsoid-Oberfläche zwischen zwei Punkten (Meter).
///
/// Die Höhe der Punkte wird ignoriert.
pub fn surface_distance(a: GeodeticPoint, b: GeodeticPoint) -> f64 {
    surface_distance_on(&Ellipsoid::WGS84, a, b)
}

/// Vincenty-Inverse auf einem beliebigen Ellipsoid.
///
/// Für (nahezu) antipodale Punkte konvergiert die Iteration nicht; dann wird
/// die halbe Meridianlänge geliefert. Das ist für exakt antipodale Punkte
/// exakt, im Nicht-Konvergenz-Bereich weicht es um höchstens etwa 0,2 % ab.
pub fn surface_distance_on(ellipsoid: &Ellipsoid, a: GeodeticPoint, b: GeodeticPoint) -> f64 {
    let major = ellipsoid.semi_major_axis;
    let minor = ellipsoid.semi_minor_axis();
    let f = ellipsoid.flattening;

    let l = b.longitude_rad() - a.longitude_rad();
    let u1 = ((1.0 - f) * a.latitude_rad().tan()).atan();
    let u2 = ((1.0 - f) * b.latitude_rad().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut sin_sigma;
    let mut cos_sigma;
    let mut sigma;
    let mut cos_sq_alpha;
    let mut cos_2sigma_m;
    let mut iterations = 0;

    loop {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let t1 = cos_u2 * sin_lambda;
        let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        sin_sigma = (t1 * t1 + t2 * t2).sqrt();
        if sin_sigma == 0.0 {
            // Identische Punkte
            return 0.0;
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Auf dem Äquator ist cos²α = 0
        cos_2sigma_m = if cos_sq_alpha.abs() > f64::EPSILON {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        iterations += 1;
        if (lambda - previous).abs() < LAMBDA_EPSILON {
            break;
        }
        if iterations >= MAX_ITERATIONS {
            log::warn!(
                "Vincenty-Iteration nicht konvergiert ({:?} -> {:?}), verwende halbe Meridianlänge",
                a,
                b
            );
            return ellipsoid.half_meridian_length();
        }
    }

    let u_sq = cos_sq_alpha * (major * major - minor * minor) / (minor * minor);
    let big_a =
        1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let cos_2sm_sq = cos_2sigma_m * cos_2sigma_m;
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sm_sq)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sm_sq)));

    minor * big_a * (sigma - delta_sigma)
}

/// Oberflächendistanz kombiniert mit dem Höhenunterschied (Pythagoras).
///
/// `sqrt(surface² + (alt_b - alt_a)²)`: Näherung für einen Weg, der horizontal
/// der Oberfläche folgt und vertikal steigt/fällt; keine echte Sehne.
pub fn surface_and_altitude_distance(a: GeodeticPoint, b: GeodeticPoint) -> f64 {
    let surface = surface_distance(a, b);
    surface.hypot(b.altitude - a.altitude)
}

/// Summe der höhenkorrigierten Distanzen über aufeinanderfolgende Punktpaare.
///
/// Weniger als 2 Punkte ergeben 0.
pub fn total_distance(points: &[GeodeticPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| surface_and_altitude_distance(pair[0], pair[1]))
        .sum()
}
