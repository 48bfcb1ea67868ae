//! Globe Measure Replay.
//!
//! Spielt ein JSON-Skript (Oberflächenpunkte + Pointer-Events) gegen einen
//! Headless-Host ab und gibt die abgeschlossenen Messungen aus.
//!
//! Aufruf: `globe-measure <script.json>`

use anyhow::{Context, Result};
use globe_measure::app::MeasureConfig;
use globe_measure::{
    GeodeticPoint, HeadlessHost, MeasureController, MeasureMode, MeasureOptions, MeasureState,
    PointerEvent,
};
use glam::Vec2;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Oberflächenpunkt unter einem Pixel.
#[derive(Debug, Deserialize)]
struct SurfaceEntry {
    pixel: Vec2,
    point: GeodeticPoint,
}

/// Eine Messung: Modus und die Events in Dispatch-Reihenfolge.
#[derive(Debug, Deserialize)]
struct ScriptedMeasurement {
    mode: MeasureMode,
    events: Vec<PointerEvent>,
}

/// Komplettes Replay-Skript.
#[derive(Debug, Deserialize)]
struct ReplayScript {
    surface: Vec<SurfaceEntry>,
    measurements: Vec<ScriptedMeasurement>,
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Globe Measure v{} startet...", env!("CARGO_PKG_VERSION"));

    let script_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Aufruf: globe-measure <script.json>")?;

    let options = MeasureOptions::load_from_file(&MeasureOptions::config_path());
    let script = load_script(&script_path)?;
    replay(script, options)
}

fn load_script(path: &Path) -> Result<ReplayScript> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
    let script: ReplayScript = serde_json::from_str(&content)
        .with_context(|| format!("Skript fehlerhaft: {}", path.display()))?;
    log::info!(
        "Skript geladen: {} Oberflächenpunkte, {} Messungen",
        script.surface.len(),
        script.measurements.len()
    );
    Ok(script)
}

fn replay(script: ReplayScript, options: MeasureOptions) -> Result<()> {
    let mut host = HeadlessHost::new();
    for entry in &script.surface {
        host.place_surface_point(entry.pixel, entry.point)
            .with_context(|| format!("Ungültiger Oberflächenpunkt bei {:?}", entry.pixel))?;
    }

    let mut state = MeasureState::new(options);
    let mut controller = MeasureController::new();
    controller.mount(&mut state, &mut host)?;

    for measurement in script.measurements {
        controller.start_measurement(
            &mut state,
            &mut host,
            measurement.mode,
            MeasureConfig::default(),
        )?;
        for event in measurement.events {
            if !host.dispatch(event.kind, event.position) {
                log::debug!("Event ohne Listener übersprungen: {:?}", event);
            }
            controller.pump(&mut state, &mut host)?;
        }
        if let Some(live) = state.current_measurement() {
            log::warn!(
                "{} nicht abgeschlossen (Stand: {}), wird verworfen",
                live.mode.name(),
                live.text
            );
            controller.cancel(&mut state, &mut host)?;
        }
    }

    for finished in state.finished() {
        println!(
            "#{} {:?}: {} ({} Punkte)",
            finished.id,
            finished.mode,
            finished.label,
            finished.points.len()
        );
    }
    log::info!("{} Kommandos ausgeführt", state.command_log.len());

    controller.unmount(&mut state, &mut host)?;
    Ok(())
}
