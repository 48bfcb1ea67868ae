use super::{MeasureAction, MeasureConfig, MeasureMode, MeasureSession};
use crate::core::GeodeticPoint;
use crate::host::{EntitySpec, HeadlessHost, LayerId, RenderHost};
use crate::shared::MeasureOptions;
use approx::assert_relative_eq;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

const MISS: Vec2 = Vec2::new(999.0, 999.0);

fn px(i: usize) -> Vec2 {
    Vec2::new(10.0 * i as f32, 0.0)
}

/// Host mit Oberflächenpunkten unter `px(0)`, `px(1)`, ...
fn host_with(points: &[GeodeticPoint]) -> (HeadlessHost, LayerId) {
    let mut host = HeadlessHost::new();
    for (i, p) in points.iter().enumerate() {
        host.place_surface_point(px(i), *p)
            .expect("Testpunkt muss gültig sein");
    }
    let layer = host.create_layer("measureLayer");
    (host, layer)
}

fn meridian_points() -> Vec<GeodeticPoint> {
    vec![
        GeodeticPoint::new(0.0, 0.0, 0.0),
        GeodeticPoint::new(0.0, 0.01, 0.0),
        GeodeticPoint::new(0.0, 0.02, 0.0),
    ]
}

#[test]
fn test_begin_creates_preview_and_listeners() {
    let (mut host, layer) = host_with(&[]);
    let options = MeasureOptions::default();
    let session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Line, MeasureConfig::default(), &options);

    assert_eq!(session.listener_count(), 3);
    assert_eq!(host.listener_count(), 3);
    assert_eq!(host.entity_count_in(layer), 1);
    assert!(session.positions().is_empty());
}

#[test]
fn test_first_click_seeds_duplicate_point() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Line, MeasureConfig::default(), &options);

    let action = session.on_primary_click(&mut host, px(0), &options);
    assert_eq!(action, MeasureAction::PointCommitted);
    assert_eq!(session.positions().len(), 2);
    assert_eq!(session.positions()[0], session.positions()[1]);
    assert_eq!(session.annotation_count(), 1);

    let preview = host
        .entity(session.preview_entity())
        .and_then(|e| e.spec.vertices())
        .expect("Vorschau muss Vertices haben");
    assert_eq!(preview.len(), 2);
    assert_eq!(host.label_texts(), vec!["0.000 m"]);
}

#[test]
fn test_move_before_first_click_is_ignored() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Line, MeasureConfig::default(), &options);

    assert_eq!(
        session.on_pointer_move(&mut host, px(1), &options),
        MeasureAction::Ignored
    );
    assert!(session.positions().is_empty());
}

#[test]
fn test_move_replaces_last_point_without_label() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Line, MeasureConfig::default(), &options);

    session.on_primary_click(&mut host, px(0), &options);
    for i in [1, 2, 1, 2, 1] {
        assert_eq!(
            session.on_pointer_move(&mut host, px(i), &options),
            MeasureAction::PreviewUpdated
        );
    }
    assert_eq!(session.positions().len(), 2);
    assert_eq!(session.annotation_count(), 1);
    assert_relative_eq!(session.current_value(), 1105.742, epsilon = 1.0);
}

#[test]
fn test_pick_miss_is_ignored() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Line, MeasureConfig::default(), &options);

    assert_eq!(
        session.on_primary_click(&mut host, MISS, &options),
        MeasureAction::Ignored
    );
    session.on_primary_click(&mut host, px(0), &options);
    assert_eq!(
        session.on_pointer_move(&mut host, MISS, &options),
        MeasureAction::Ignored
    );
    let result = session
        .on_confirm(&mut host, MISS, &options, 1)
        .expect("Fehlender Treffer ist kein Fehler");
    assert!(result.is_none());
    assert_eq!(session.listener_count(), 3);
    assert_eq!(session.positions().len(), 2);
}

#[test]
fn test_label_count_follows_committed_points() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Line, MeasureConfig::default(), &options);

    session.on_primary_click(&mut host, px(0), &options);
    session.on_pointer_move(&mut host, px(1), &options);
    session.on_primary_click(&mut host, px(1), &options);
    session.on_pointer_move(&mut host, px(2), &options);
    session.on_primary_click(&mut host, px(2), &options);

    assert_eq!(session.annotation_count(), session.positions().len() - 1);
    assert_eq!(host.label_count(), 3);
}

#[test]
fn test_pick_is_lifted_by_height_offset() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Line, MeasureConfig::default(), &options);

    session.on_primary_click(&mut host, px(0), &options);
    let points = session.geodetic_positions().expect("gültige Punkte");
    assert_relative_eq!(points[0].altitude, 1.0, epsilon = 1e-4);
}

#[test]
fn test_line_confirm_finishes_and_calls_handler() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let received: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    let config = MeasureConfig::default().with_on_complete(move |points, _entity| {
        sink.borrow_mut().push(points.len());
    });
    let mut session = MeasureSession::begin(&mut host, layer, MeasureMode::Line, config, &options);

    session.on_primary_click(&mut host, px(0), &options);
    session.on_pointer_move(&mut host, px(1), &options);
    let finished = session
        .on_confirm(&mut host, px(2), &options, 7)
        .expect("Abschluss ohne Fehler")
        .expect("Treffer erwartet");

    assert_eq!(finished.id, 7);
    assert_eq!(finished.points.len(), 3);
    assert_eq!(*received.borrow(), vec![3]);
    assert_relative_eq!(finished.value, 2211.48, epsilon = 2.0);
    assert!(finished.label.ends_with(" km"));
    assert_eq!(host.listener_count(), 0);
    assert_eq!(finished.annotations.len(), 2);
    assert!(!finished.is_degenerate());
}

#[test]
fn test_area_labels_hidden_until_final() {
    let points = vec![
        GeodeticPoint::new(10.0, 50.0, 0.0),
        GeodeticPoint::new(10.001, 50.0, 0.0),
        GeodeticPoint::new(10.001, 50.001, 0.0),
    ];
    let (mut host, layer) = host_with(&points);
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Area, MeasureConfig::default(), &options);

    session.on_primary_click(&mut host, px(0), &options);
    session.on_pointer_move(&mut host, px(1), &options);
    session.on_primary_click(&mut host, px(1), &options);
    session.on_pointer_move(&mut host, px(2), &options);
    let finished = session
        .on_confirm(&mut host, px(2), &options, 1)
        .expect("Abschluss ohne Fehler")
        .expect("Treffer erwartet");

    let shown: Vec<bool> = finished
        .annotations
        .iter()
        .filter_map(|h| host.entity(*h))
        .filter_map(|e| e.spec.label())
        .map(|l| l.show)
        .collect();
    assert_eq!(shown, vec![false, false, true]);
    assert_eq!(finished.points.first(), finished.points.last());
    assert!(finished.label.ends_with(" m²"));

    let preview = host.entity(finished.preview).expect("Vorschau vorhanden");
    assert!(matches!(
        preview.spec,
        EntitySpec::Polygon {
            per_position_height: true,
            ..
        }
    ));
}

#[test]
fn test_config_overrides_line_width() {
    let (mut host, layer) = host_with(&[]);
    let options = MeasureOptions::default();
    let config = MeasureConfig::default().with_line_width(3.0);
    let session = MeasureSession::begin(&mut host, layer, MeasureMode::Line, config, &options);

    match &host.entity(session.preview_entity()).expect("Vorschau").spec {
        EntitySpec::Polyline { style, .. } => assert_eq!(style.width, 3.0),
        other => panic!("Polyline erwartet, erhalten: {:?}", other),
    }
}

#[test]
fn test_confirm_without_clicks_is_degenerate() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Line, MeasureConfig::default(), &options);

    let finished = session
        .on_confirm(&mut host, px(0), &options, 1)
        .expect("Abschluss ohne Fehler")
        .expect("Treffer erwartet");
    assert_eq!(finished.points.len(), 1);
    assert!(finished.is_degenerate());
    assert_eq!(finished.value, 0.0);
}

#[test]
fn test_area_with_two_vertices_is_degenerate() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Area, MeasureConfig::default(), &options);

    session.on_primary_click(&mut host, px(0), &options);
    let finished = session
        .on_confirm(&mut host, px(1), &options, 1)
        .expect("Abschluss ohne Fehler")
        .expect("Treffer erwartet");

    // [A, A, C, A]: Startpunkt doppelt, Ring geschlossen
    assert_eq!(finished.points.len(), 4);
    assert_eq!(finished.distinct_vertex_count(), 2);
    assert!(finished.is_degenerate());
    assert_eq!(finished.value, 0.0);
}

#[test]
fn test_area_triangle_is_not_degenerate() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Area, MeasureConfig::default(), &options);

    session.on_primary_click(&mut host, px(0), &options);
    session.on_primary_click(&mut host, px(1), &options);
    let finished = session
        .on_confirm(&mut host, px(2), &options, 1)
        .expect("Abschluss ohne Fehler")
        .expect("Treffer erwartet");

    // [A, A, B, C, A]
    assert_eq!(finished.points.len(), 5);
    assert_eq!(finished.distinct_vertex_count(), 3);
    assert!(!finished.is_degenerate());
}

#[test]
fn test_cancel_removes_everything() {
    let (mut host, layer) = host_with(&meridian_points());
    let options = MeasureOptions::default();
    let mut session =
        MeasureSession::begin(&mut host, layer, MeasureMode::Area, MeasureConfig::default(), &options);
    session.on_primary_click(&mut host, px(0), &options);
    session.on_primary_click(&mut host, px(1), &options);

    session.cancel(&mut host);
    assert_eq!(host.entity_count_in(layer), 0);
    assert_eq!(host.listener_count(), 0);
}
