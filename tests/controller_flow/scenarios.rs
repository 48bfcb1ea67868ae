use super::{meridian, mounted, px, right_triangle, SKY};
use approx::assert_relative_eq;
use globe_measure::host::PointerEventKind;
use globe_measure::{
    surface_distance, EntityHandle, GeodeticPoint, MeasureConfig, MeasurePhase, RenderHost,
};
use std::cell::RefCell;
use std::rc::Rc;

type Received = Rc<RefCell<Vec<(Vec<GeodeticPoint>, EntityHandle)>>>;

fn recording_config() -> (MeasureConfig, Received) {
    let received: Received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    let config = MeasureConfig::default().with_on_complete(move |points, entity| {
        sink.borrow_mut().push((points.to_vec(), entity));
    });
    (config, received)
}

#[test]
fn test_line_scenario_click_move_confirm() {
    let (mut controller, mut state, mut host) = mounted(&meridian());
    let (config, received) = recording_config();

    controller
        .start_line_measurement(&mut state, &mut host, config)
        .expect("Start sollte ohne Fehler durchlaufen");
    assert_eq!(state.phase(), MeasurePhase::Collecting);

    host.dispatch(PointerEventKind::PrimaryClick, px(0));
    host.dispatch(PointerEventKind::PointerMove, px(1));
    host.dispatch(PointerEventKind::SecondaryClick, px(2));
    let processed = controller
        .pump(&mut state, &mut host)
        .expect("Events sollten ohne Fehler verarbeitet werden");
    assert_eq!(processed, 3);

    assert_eq!(state.phase(), MeasurePhase::Finalized);
    let calls = received.borrow();
    assert_eq!(calls.len(), 1, "Callback genau einmal");
    let (points, entity) = &calls[0];
    assert_eq!(points.len(), 3);
    for (point, expected_lat) in points.iter().zip([0.0, 0.01, 0.02]) {
        assert_relative_eq!(point.latitude, expected_lat, epsilon = 1e-8);
        assert_relative_eq!(point.altitude, 1.0, epsilon = 1e-4);
    }

    let finished = &state.finished()[0];
    assert_eq!(*entity, finished.preview);
    assert_relative_eq!(finished.value, 2211.48, epsilon = 2.0);
    assert!(finished.label.ends_with(" km"));
    assert_eq!(host.listener_count(), 0);
    assert!(host.entity(finished.preview).is_some());
}

#[test]
fn test_area_scenario_right_triangle() {
    let triangle = right_triangle();
    let (mut controller, mut state, mut host) = mounted(&triangle);
    let (config, received) = recording_config();

    controller
        .start_area_measurement(&mut state, &mut host, config)
        .expect("Start sollte ohne Fehler durchlaufen");
    host.dispatch(PointerEventKind::PrimaryClick, px(0));
    host.dispatch(PointerEventKind::PointerMove, px(1));
    host.dispatch(PointerEventKind::SecondaryClick, px(2));
    controller
        .pump(&mut state, &mut host)
        .expect("Events sollten ohne Fehler verarbeitet werden");

    let calls = received.borrow();
    let (points, _) = &calls[0];
    assert_eq!(points.len(), 4);
    assert_eq!(points[0], points[3], "Ring ist geschlossen");

    let leg_east = surface_distance(triangle[0], triangle[1]);
    let leg_north = surface_distance(triangle[0], triangle[2]);
    let expected = 0.5 * leg_east * leg_north;
    let finished = &state.finished()[0];
    assert_relative_eq!(finished.value, expected, max_relative = 0.01);
    assert!(finished.label.ends_with(" m²"));
}

#[test]
fn test_live_readout_follows_rubber_band() {
    let (mut controller, mut state, mut host) = mounted(&meridian());
    controller
        .start_line_measurement(&mut state, &mut host, MeasureConfig::default())
        .expect("Start sollte ohne Fehler durchlaufen");

    host.dispatch(PointerEventKind::PrimaryClick, px(0));
    controller.pump(&mut state, &mut host).expect("Pump");
    let live = state.current_measurement().expect("Live-Wert erwartet");
    assert_eq!(live.point_count, 2);
    assert_eq!(live.text, "0.000 m");

    host.dispatch(PointerEventKind::PointerMove, px(2));
    controller.pump(&mut state, &mut host).expect("Pump");
    let live = state.current_measurement().expect("Live-Wert erwartet");
    assert_eq!(live.point_count, 2);
    assert_relative_eq!(live.value, 2211.48, epsilon = 2.0);
}

#[test]
fn test_sky_confirm_keeps_collecting() {
    let (mut controller, mut state, mut host) = mounted(&meridian());
    controller
        .start_line_measurement(&mut state, &mut host, MeasureConfig::default())
        .expect("Start sollte ohne Fehler durchlaufen");

    host.dispatch(PointerEventKind::PrimaryClick, px(0));
    host.dispatch(PointerEventKind::SecondaryClick, SKY);
    controller.pump(&mut state, &mut host).expect("Pump");

    assert_eq!(state.phase(), MeasurePhase::Collecting);
    assert!(state.finished().is_empty());
    assert_eq!(host.listener_count(), 3);
}

#[test]
fn test_restart_cancels_running_measurement() {
    let (mut controller, mut state, mut host) = mounted(&meridian());
    let layer = state.layer().expect("Layer erwartet");
    controller
        .start_line_measurement(&mut state, &mut host, MeasureConfig::default())
        .expect("Start sollte ohne Fehler durchlaufen");
    host.dispatch(PointerEventKind::PrimaryClick, px(0));
    controller.pump(&mut state, &mut host).expect("Pump");
    assert_eq!(host.entity_count_in(layer), 2);

    controller
        .start_area_measurement(&mut state, &mut host, MeasureConfig::default())
        .expect("Neustart sollte ohne Fehler durchlaufen");

    assert_eq!(host.entity_count_in(layer), 1, "nur neue Vorschau");
    assert_eq!(host.listener_count(), 3);
    let session = state.session().expect("neue Sitzung");
    assert!(session.positions().is_empty());
}

#[test]
fn test_clear_finished_removes_entities() {
    let (mut controller, mut state, mut host) = mounted(&meridian());
    let layer = state.layer().expect("Layer erwartet");

    for _ in 0..2 {
        controller
            .start_line_measurement(&mut state, &mut host, MeasureConfig::default())
            .expect("Start sollte ohne Fehler durchlaufen");
        host.dispatch(PointerEventKind::PrimaryClick, px(0));
        host.dispatch(PointerEventKind::SecondaryClick, px(1));
        controller.pump(&mut state, &mut host).expect("Pump");
    }
    assert_eq!(state.finished().len(), 2);
    assert_eq!(state.finished()[0].id + 1, state.finished()[1].id);
    assert!(host.entity_count_in(layer) > 0);

    controller
        .clear_finished(&mut state, &mut host)
        .expect("Aufräumen sollte ohne Fehler durchlaufen");
    assert!(state.finished().is_empty());
    assert_eq!(host.entity_count_in(layer), 0);
    assert_eq!(state.phase(), MeasurePhase::Idle);
    assert!(host.pick_surface_point(px(0)).is_some());
}
