//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod gizmo;
pub mod history;
pub mod options;
pub mod scene;
pub mod selection;
pub mod transform;
