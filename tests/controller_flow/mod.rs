//! Gemeinsame Fixtures für die Controller-Flow-Tests.

mod scenarios;
mod teardown;

use glam::Vec2;
use globe_measure::{GeodeticPoint, HeadlessHost, MeasureController, MeasureState};

/// Pixel-Position des i-ten Oberflächenpunkts.
pub fn px(i: usize) -> Vec2 {
    Vec2::new(100.0 + 20.0 * i as f32, 300.0)
}

/// Pixel ohne Oberfläche darunter.
pub const SKY: Vec2 = Vec2::new(5.0, 5.0);

/// Eingehängter Controller samt Host mit Oberflächenpunkten unter `px(i)`.
pub fn mounted(points: &[GeodeticPoint]) -> (MeasureController, MeasureState, HeadlessHost) {
    let mut host = HeadlessHost::new();
    for (i, point) in points.iter().enumerate() {
        host.place_surface_point(px(i), *point)
            .expect("Oberflächenpunkt sollte gültig sein");
    }
    let mut state = MeasureState::default();
    let mut controller = MeasureController::new();
    controller
        .mount(&mut state, &mut host)
        .expect("Einhängen sollte ohne Fehler durchlaufen");
    (controller, state, host)
}

/// A(0,0), B(0,0.01), C(0,0.02) entlang des Nullmeridians.
pub fn meridian() -> Vec<GeodeticPoint> {
    vec![
        GeodeticPoint::new(0.0, 0.0, 0.0),
        GeodeticPoint::new(0.0, 0.01, 0.0),
        GeodeticPoint::new(0.0, 0.02, 0.0),
    ]
}

/// Rechtwinkliges Dreieck am Äquator, Katheten ca. 100 m (rechter Winkel bei P0).
pub fn right_triangle() -> Vec<GeodeticPoint> {
    vec![
        GeodeticPoint::new(0.0, 0.0, 0.0),
        GeodeticPoint::new(0.0009, 0.0, 0.0),
        GeodeticPoint::new(0.0, 0.0009, 0.0),
    ]
}
