//! Handler für Layer-Verwaltung: Ein-/Aushängen und Aufräumen.

use crate::app::MeasureState;
use crate::host::RenderHost;
use crate::shared::options::MEASURE_LAYER_NAME;

/// Legt den Mess-Layer im Host an (einmalig).
pub fn mount(state: &mut MeasureState, host: &mut dyn RenderHost) {
    if state.layer.is_some() {
        log::debug!("Mess-Layer bereits vorhanden");
        return;
    }
    let layer = host.create_layer(MEASURE_LAYER_NAME);
    state.layer = Some(layer);
    log::info!("Mess-Layer '{}' angelegt ({:?})", MEASURE_LAYER_NAME, layer);
}

/// Entfernt alle Entities abgeschlossener Messungen.
pub fn clear_finished(state: &mut MeasureState, host: &mut dyn RenderHost) {
    let count = state.finished.len();
    for measurement in state.finished.drain(..) {
        for handle in measurement.entities() {
            host.remove_entity(handle);
        }
    }
    state.finalized = false;
    log::info!("{} abgeschlossene Messungen entfernt", count);
}

/// Entfernt den Layer samt aller Entities. Eine laufende Messung wird
/// verworfen und ihre Listener abgemeldet.
pub fn unmount(state: &mut MeasureState, host: &mut dyn RenderHost) {
    if let Some(session) = state.session.take() {
        session.cancel(host);
    }
    let Some(layer) = state.layer.take() else {
        log::debug!("Aushängen ohne Mess-Layer ignoriert");
        return;
    };
    host.remove_layer(layer);
    state.finished.clear();
    state.finalized = false;
    log::info!("Mess-Layer entfernt");
}
