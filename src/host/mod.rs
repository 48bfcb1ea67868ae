//! Schnittstelle zum Render-Host (3D-Globus).
//!
//! Der Host besitzt Szene, Kamera und Terrain. Das Mess-Werkzeug nutzt davon
//! nur: Oberflächen-Picking, eine Entity-Sammlung in einem eigenen Layer und
//! die Registrierung von Pointer-Listenern. Pointer-Events werden vom Host in
//! Dispatch-Reihenfolge gepuffert und vom Controller abgeholt.

pub mod entity;
mod headless;

pub use entity::{
    EntitySpec, HorizontalOrigin, LabelSpec, LineMaterial, LineStyle, MarkerStyle, Rgba,
    VerticalOrigin,
};
pub use headless::{HeadlessHost, HostEntity};

use crate::core::CartesianPoint;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle einer Entity in der Host-Sammlung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(pub u64);

/// Handle eines Entity-Layers (Datenquelle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// Handle eines registrierten Pointer-Listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Art eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEventKind {
    /// Primärtaste (Linksklick): Punkt setzen
    PrimaryClick,
    /// Mausbewegung: Gummiband-Vorschau
    PointerMove,
    /// Sekundärtaste (Rechtsklick): Messung abschließen
    SecondaryClick,
}

/// Ein Pointer-Event an einer Screen-Position (Pixel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Event-Art
    pub kind: PointerEventKind,
    /// Screen-Position in Pixeln
    pub position: Vec2,
}

/// Vom Render-Host bereitgestellte Fähigkeiten.
///
/// Alle Aufrufe sind synchron und erfolgen auf dem Host-Thread.
pub trait RenderHost {
    /// Schnittpunkt des Pick-Strahls durch `pixel` mit der gerenderten Oberfläche.
    /// `None`, wenn der Strahl keine Geometrie trifft.
    fn pick_surface_point(&self, pixel: Vec2) -> Option<CartesianPoint>;

    /// Legt einen benannten Entity-Layer an.
    fn create_layer(&mut self, name: &str) -> LayerId;

    /// Entfernt einen Layer samt aller enthaltenen Entities.
    fn remove_layer(&mut self, layer: LayerId);

    /// Fügt eine Entity in einen Layer ein.
    fn add_entity(&mut self, layer: LayerId, spec: EntitySpec) -> EntityHandle;

    /// Ersetzt die Vertex-Liste einer Polyline/Polygon-Entity.
    fn set_entity_vertices(&mut self, handle: EntityHandle, vertices: &[CartesianPoint]);

    /// Entfernt eine Entity (unbekannte Handles werden ignoriert).
    fn remove_entity(&mut self, handle: EntityHandle);

    /// Registriert einen Listener für eine Event-Art.
    fn register_pointer_handler(&mut self, kind: PointerEventKind) -> ListenerId;

    /// Hebt die Registrierung eines Listeners auf.
    fn unregister_pointer_handler(&mut self, listener: ListenerId);

    /// Hebt die Registrierung mehrerer Listener auf.
    fn unregister_all(&mut self, listeners: &[ListenerId]) {
        for &listener in listeners {
            self.unregister_pointer_handler(listener);
        }
    }

    /// Nächstes gepuffertes Pointer-Event in Dispatch-Reihenfolge.
    fn poll_pointer_event(&mut self) -> Option<PointerEvent>;
}
