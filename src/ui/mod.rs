//! UI-Layer mit egui.
//!
//! Übersetzt egui-Eingaben in `AppIntent`s: Toolbar, Status-Bar, Panels,
//! Dialoge. Keyboard-Shortcuts und Viewport-Pointer sind in eigene Module
//! extrahiert.

pub mod input;
mod keyboard;
pub mod options_dialog;
pub mod properties;
pub mod scene_tree;
pub mod status;
pub mod toolbar;

pub use input::ViewportInput;
pub use keyboard::collect_keyboard_intents;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use scene_tree::render_scene_tree_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
