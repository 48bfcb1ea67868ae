//! Interaktive Werkzeuge des Globus-Viewers.
//!
//! Werkzeuge erzeugen Entities im Host und reagieren auf Pointer-Events;
//! der Controller verwaltet ihren Lebenszyklus.

/// Distanz- und Flächenmessung.
pub mod measure;
