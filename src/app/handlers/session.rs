//! Handler für die laufende Messung (Start, Punkte, Abschluss, Abbruch).

use crate::app::tools::measure::{MeasureAction, MeasureConfig, MeasureMode, MeasureSession};
use crate::app::MeasureState;
use crate::core::{MeasureError, MeasureResult};
use crate::host::RenderHost;
use glam::Vec2;

/// Startet eine neue Messung im Mess-Layer.
pub fn start(
    state: &mut MeasureState,
    host: &mut dyn RenderHost,
    mode: MeasureMode,
    config: MeasureConfig,
) -> MeasureResult<()> {
    let layer = state.layer.ok_or(MeasureError::NotMounted)?;
    if let Some(previous) = state.session.take() {
        log::debug!("Vorherige Messung wird verworfen");
        previous.cancel(host);
    }
    state.session = Some(MeasureSession::begin(
        host,
        layer,
        mode,
        config,
        &state.options,
    ));
    state.finalized = false;
    log::info!("{} gestartet", mode.name());
    Ok(())
}

/// Übernimmt einen Punkt an der Screen-Position.
pub fn commit_point(
    state: &mut MeasureState,
    host: &mut dyn RenderHost,
    position: Vec2,
) -> MeasureResult<MeasureAction> {
    let session = state.session.as_mut().ok_or(MeasureError::NoActiveSession {
        operation: "commit_point",
    })?;
    Ok(session.on_primary_click(host, position, &state.options))
}

/// Verschiebt den Gummiband-Punkt.
pub fn update_preview(
    state: &mut MeasureState,
    host: &mut dyn RenderHost,
    position: Vec2,
) -> MeasureResult<MeasureAction> {
    let session = state.session.as_mut().ok_or(MeasureError::NoActiveSession {
        operation: "update_preview",
    })?;
    Ok(session.on_pointer_move(host, position, &state.options))
}

/// Schließt die Messung ab. Ohne Pick-Treffer bleibt sie aktiv.
pub fn finish(
    state: &mut MeasureState,
    host: &mut dyn RenderHost,
    position: Vec2,
) -> MeasureResult<MeasureAction> {
    let session = state.session.as_mut().ok_or(MeasureError::NoActiveSession {
        operation: "finish",
    })?;
    let id = state.next_measurement_id;
    let Some(finished) = session.on_confirm(host, position, &state.options, id)? else {
        log::debug!("Abschluss ohne Oberflächentreffer ignoriert");
        return Ok(MeasureAction::Ignored);
    };

    state.next_measurement_id += 1;
    state.session = None;
    state.finalized = true;
    log::info!(
        "{} abgeschlossen: {} ({} Punkte)",
        finished.mode.name(),
        finished.label,
        finished.points.len()
    );
    state.finished.push(finished);
    Ok(MeasureAction::Finished)
}

/// Verwirft die laufende Messung samt Entities und Listenern.
pub fn cancel(state: &mut MeasureState, host: &mut dyn RenderHost) {
    let Some(session) = state.session.take() else {
        log::debug!("Abbruch ohne laufende Messung ignoriert");
        return;
    };
    let mode = session.mode();
    session.cancel(host);
    state.finalized = false;
    log::info!("{} abgebrochen", mode.name());
}
