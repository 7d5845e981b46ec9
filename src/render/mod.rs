//! Anbindung an den externen spektralen Renderer.
//!
//! Der Editor kennt den Renderer nur über den `RenderPort`-Trait.
//! `HeadlessRenderer` hält den Zustand im Speicher und zählt Invalidierungen,
//! `PreviewRenderer` ergänzt eine orthografische Projektion mit Picking.

mod headless;
mod pick_index;
mod port;
mod preview;

pub use headless::HeadlessRenderer;
pub use pick_index::{PickIndex, PickMatch};
pub use port::RenderPort;
pub use preview::PreviewRenderer;
