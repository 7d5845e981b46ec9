//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Editor-Optionen, die von `app`, `ui` und der Shell gelesen werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{OPTIONS_FILE_NAME, PICK_RADIUS_PX, PREVIEW_PIXELS_PER_UNIT};
