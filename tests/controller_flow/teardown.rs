use super::{meridian, mounted, px};
use globe_measure::host::PointerEventKind;
use globe_measure::{CommandRecord, MeasureConfig, MeasureIntent, MeasureMode, MeasurePhase};
use std::rc::Rc;

#[test]
fn test_cancel_before_commit_leaves_nothing() {
    let (mut controller, mut state, mut host) = mounted(&meridian());
    let layer = state.layer().expect("Layer erwartet");

    controller
        .start_line_measurement(&mut state, &mut host, MeasureConfig::default())
        .expect("Start sollte ohne Fehler durchlaufen");
    controller
        .cancel(&mut state, &mut host)
        .expect("Abbruch sollte ohne Fehler durchlaufen");

    assert_eq!(host.entity_count_in(layer), 0);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(state.phase(), MeasurePhase::Idle);
    assert!(state.current_measurement().is_none());
}

#[test]
fn test_cancel_after_commits_discards_points() {
    let (mut controller, mut state, mut host) = mounted(&meridian());
    let layer = state.layer().expect("Layer erwartet");

    controller
        .start_area_measurement(&mut state, &mut host, MeasureConfig::default())
        .expect("Start sollte ohne Fehler durchlaufen");
    host.dispatch(PointerEventKind::PrimaryClick, px(0));
    host.dispatch(PointerEventKind::PointerMove, px(1));
    host.dispatch(PointerEventKind::PrimaryClick, px(1));
    controller.pump(&mut state, &mut host).expect("Pump");
    controller
        .cancel(&mut state, &mut host)
        .expect("Abbruch sollte ohne Fehler durchlaufen");

    assert_eq!(host.entity_count_in(layer), 0);
    assert!(!host.dispatch(PointerEventKind::PrimaryClick, px(2)));

    controller
        .start_line_measurement(&mut state, &mut host, MeasureConfig::default())
        .expect("Start sollte ohne Fehler durchlaufen");
    let session = state.session().expect("Sitzung erwartet");
    assert!(session.positions().is_empty(), "kein Zustand aus alter Sitzung");
}

#[test]
fn test_unmount_releases_everything() {
    let (mut controller, mut state, mut host) = mounted(&meridian());

    controller
        .start_line_measurement(&mut state, &mut host, MeasureConfig::default())
        .expect("Start sollte ohne Fehler durchlaufen");
    host.dispatch(PointerEventKind::PrimaryClick, px(0));
    host.dispatch(PointerEventKind::SecondaryClick, px(1));
    controller.pump(&mut state, &mut host).expect("Pump");
    controller
        .start_line_measurement(&mut state, &mut host, MeasureConfig::default())
        .expect("Start sollte ohne Fehler durchlaufen");
    host.dispatch(PointerEventKind::PrimaryClick, px(0));

    controller
        .unmount(&mut state, &mut host)
        .expect("Aushängen sollte ohne Fehler durchlaufen");

    assert_eq!(host.entity_count(), 0);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.layer_count(), 0);
    assert_eq!(host.pending_events(), 0);
    assert!(!state.is_mounted());
    assert!(state.finished().is_empty());

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        CommandRecord::Unmount => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_start_after_unmount_fails() {
    let (mut controller, mut state, mut host) = mounted(&meridian());
    controller
        .unmount(&mut state, &mut host)
        .expect("Aushängen sollte ohne Fehler durchlaufen");

    let logged_before = state.command_log.len();
    let result = controller.start_line_measurement(&mut state, &mut host, MeasureConfig::default());
    assert!(result.is_err());
    assert_eq!(host.listener_count(), 0);

    // Fehlgeschlagener Start landet nicht im Log
    assert_eq!(state.command_log.len(), logged_before);
    assert_eq!(state.command_log.last(), Some(&CommandRecord::Unmount));
}

#[test]
fn test_finished_measurement_releases_completion_callback() {
    let (mut controller, mut state, mut host) = mounted(&meridian());
    let captured = Rc::new(());
    let held = Rc::clone(&captured);
    let config = MeasureConfig::default().with_on_complete(move |_, _| {
        let _count = Rc::strong_count(&held);
    });

    controller
        .start_area_measurement(&mut state, &mut host, config)
        .expect("Start sollte ohne Fehler durchlaufen");
    assert_eq!(Rc::strong_count(&captured), 2);
    host.dispatch(PointerEventKind::PrimaryClick, px(0));
    host.dispatch(PointerEventKind::PrimaryClick, px(1));
    host.dispatch(PointerEventKind::SecondaryClick, px(2));
    controller.pump(&mut state, &mut host).expect("Pump");

    assert_eq!(state.phase(), MeasurePhase::Finalized);
    assert_eq!(Rc::strong_count(&captured), 1, "Log hält den Callback nicht fest");
    assert!(state
        .command_log
        .entries()
        .contains(&CommandRecord::StartSession {
            mode: MeasureMode::Area
        }));
}

#[test]
fn test_pointer_intent_without_session_fails() {
    let (mut controller, mut state, mut host) = mounted(&meridian());

    let result = controller.handle_intent(
        &mut state,
        &mut host,
        MeasureIntent::SecondaryClicked { position: px(0) },
    );

    let error = result.expect_err("Abschluss ohne Sitzung muss fehlschlagen");
    assert!(error.to_string().contains("finish"));
}
