//! In-Memory-Host ohne Rendering: Entity-Sammlung, Layer, Listener und
//! skriptbare Oberflächen-Picks. Dient Tests, Benchmarks und dem Replay-Binary.

use super::{
    EntityHandle, EntitySpec, LayerId, ListenerId, PointerEvent, PointerEventKind, RenderHost,
};
use crate::core::{to_cartesian, CartesianPoint, GeodeticPoint, MeasureResult};
use glam::Vec2;
use indexmap::IndexMap;
use std::collections::{HashMap, VecDeque};

/// Eine Entity in der Host-Sammlung samt Layer-Zuordnung.
#[derive(Debug, Clone, PartialEq)]
pub struct HostEntity {
    /// Layer, in dem die Entity liegt
    pub layer: LayerId,
    /// Beschreibung (inkl. aktueller Vertices)
    pub spec: EntitySpec,
}

/// Headless-Implementierung von [`RenderHost`].
///
/// Picks werden über eine Tabelle Pixel → Weltpunkt aufgelöst (Pixel auf
/// ganze Zahlen gerundet); nicht eingetragene Pixel treffen nichts.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    surface: HashMap<(i32, i32), CartesianPoint>,
    layers: IndexMap<LayerId, String>,
    entities: IndexMap<EntityHandle, HostEntity>,
    listeners: IndexMap<ListenerId, PointerEventKind>,
    queue: VecDeque<PointerEvent>,
    next_id: u64,
}

fn pixel_key(pixel: Vec2) -> (i32, i32) {
    (pixel.x.round() as i32, pixel.y.round() as i32)
}

impl HeadlessHost {
    /// Erstellt einen leeren Host.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Hinterlegt einen Oberflächenpunkt (geodätisch) unter einem Pixel.
    pub fn place_surface_point(&mut self, pixel: Vec2, point: GeodeticPoint) -> MeasureResult<()> {
        let cartesian = to_cartesian(point)?;
        self.surface.insert(pixel_key(pixel), cartesian);
        Ok(())
    }

    /// Hinterlegt einen Oberflächenpunkt (kartesisch) unter einem Pixel.
    pub fn place_surface_cartesian(&mut self, pixel: Vec2, point: CartesianPoint) {
        self.surface.insert(pixel_key(pixel), point);
    }

    /// Simuliert ein Pointer-Event. Wird nur gepuffert, wenn ein Listener für
    /// die Event-Art registriert ist; gibt zurück, ob es gepuffert wurde.
    pub fn dispatch(&mut self, kind: PointerEventKind, position: Vec2) -> bool {
        if !self.listeners.values().any(|k| *k == kind) {
            log::trace!("Kein Listener für {:?}, Event verworfen", kind);
            return false;
        }
        self.queue.push_back(PointerEvent { kind, position });
        true
    }

    /// Anzahl aller Entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Anzahl der Entities in einem Layer.
    pub fn entity_count_in(&self, layer: LayerId) -> usize {
        self.entities.values().filter(|e| e.layer == layer).count()
    }

    /// Gibt eine Entity zurück.
    pub fn entity(&self, handle: EntityHandle) -> Option<&HostEntity> {
        self.entities.get(&handle)
    }

    /// Iteriert alle Entities in Einfüge-Reihenfolge.
    pub fn entities(&self) -> impl Iterator<Item = (EntityHandle, &HostEntity)> {
        self.entities.iter().map(|(h, e)| (*h, e))
    }

    /// Texte aller Labels in Einfüge-Reihenfolge.
    pub fn label_texts(&self) -> Vec<&str> {
        self.entities
            .values()
            .filter_map(|e| e.spec.label())
            .map(|l| l.text.as_str())
            .collect()
    }

    /// Anzahl der Label-Entities.
    pub fn label_count(&self) -> usize {
        self.entities
            .values()
            .filter(|e| e.spec.label().is_some())
            .count()
    }

    /// Anzahl registrierter Listener.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Anzahl vorhandener Layer.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Name eines Layers.
    pub fn layer_name(&self, layer: LayerId) -> Option<&str> {
        self.layers.get(&layer).map(String::as_str)
    }

    /// Anzahl noch nicht abgeholter Events.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }
}

impl RenderHost for HeadlessHost {
    fn pick_surface_point(&self, pixel: Vec2) -> Option<CartesianPoint> {
        self.surface.get(&pixel_key(pixel)).copied()
    }

    fn create_layer(&mut self, name: &str) -> LayerId {
        let id = LayerId(self.next_id());
        self.layers.insert(id, name.to_string());
        id
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.entities.retain(|_, e| e.layer != layer);
        self.layers.shift_remove(&layer);
    }

    fn add_entity(&mut self, layer: LayerId, spec: EntitySpec) -> EntityHandle {
        let handle = EntityHandle(self.next_id());
        self.entities.insert(handle, HostEntity { layer, spec });
        handle
    }

    fn set_entity_vertices(&mut self, handle: EntityHandle, new_vertices: &[CartesianPoint]) {
        let Some(entity) = self.entities.get_mut(&handle) else {
            return;
        };
        match &mut entity.spec {
            EntitySpec::Polyline { vertices, .. } | EntitySpec::Polygon { vertices, .. } => {
                vertices.clear();
                vertices.extend_from_slice(new_vertices);
            }
            EntitySpec::Annotation { .. } => {
                log::warn!("Vertex-Update auf Annotation {:?} ignoriert", handle);
            }
        }
    }

    fn remove_entity(&mut self, handle: EntityHandle) {
        self.entities.shift_remove(&handle);
    }

    fn register_pointer_handler(&mut self, kind: PointerEventKind) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.insert(id, kind);
        id
    }

    fn unregister_pointer_handler(&mut self, listener: ListenerId) {
        if let Some(kind) = self.listeners.shift_remove(&listener) {
            // Bereits gepufferte Events ohne verbleibenden Listener verwerfen
            if !self.listeners.values().any(|k| *k == kind) {
                self.queue.retain(|e| e.kind != kind);
            }
        }
    }

    fn poll_pointer_event(&mut self) -> Option<PointerEvent> {
        self.queue.pop_front()
    }
}
