//! Zentrale Konfiguration für den Szenen-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::editing::transform_tool::{
    TransformSensitivity, DEFAULT_FINE_CONTROL_FACTOR, DEFAULT_MIN_SCALE_FACTOR,
    DEFAULT_ROTATE_SENSITIVITY_DEG, DEFAULT_SCALE_SENSITIVITY, DEFAULT_TRANSLATE_SENSITIVITY,
};
use crate::editing::DEFAULT_UNDO_LIMIT;
use serde::{Deserialize, Serialize};

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "spectral_scene_editor.toml";

// ── Viewport ────────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 12.0;
/// Pixel pro Welteinheit in der Vorschau-Ansicht.
pub const PREVIEW_PIXELS_PER_UNIT: f32 = 20.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spectral_scene_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Verlauf ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte (0 = unbegrenzt)
    pub undo_limit: usize,
    /// Selektionsänderungen als eigene Undo-Schritte aufzeichnen
    #[serde(default)]
    pub selection_undo: bool,

    // ── Gizmo ───────────────────────────────────────────────────
    /// Verschiebung in Welteinheiten pro Pixel
    pub translate_sensitivity: f32,
    /// Drehung in Grad pro Pixel
    pub rotate_sensitivity_deg: f32,
    /// Skalierungsfaktor pro Pixel
    pub scale_sensitivity: f32,
    /// Multiplikator bei gedrückter Feinsteuerung (Shift)
    #[serde(default = "default_fine_control_factor")]
    pub fine_control_factor: f32,
    /// Untergrenze des Skalierungsfaktors pro Update
    #[serde(default = "default_min_scale_factor")]
    pub min_scale_factor: f32,

    // ── Viewport ────────────────────────────────────────────────
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    #[serde(default = "default_pick_radius_px")]
    pub pick_radius_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            undo_limit: DEFAULT_UNDO_LIMIT,
            selection_undo: false,

            translate_sensitivity: DEFAULT_TRANSLATE_SENSITIVITY,
            rotate_sensitivity_deg: DEFAULT_ROTATE_SENSITIVITY_DEG,
            scale_sensitivity: DEFAULT_SCALE_SENSITIVITY,
            fine_control_factor: DEFAULT_FINE_CONTROL_FACTOR,
            min_scale_factor: DEFAULT_MIN_SCALE_FACTOR,

            pick_radius_px: PICK_RADIUS_PX,
        }
    }
}

/// Serde-Default für `fine_control_factor` (Abwärtskompatibilität).
fn default_fine_control_factor() -> f32 {
    DEFAULT_FINE_CONTROL_FACTOR
}

/// Serde-Default für `min_scale_factor` (Abwärtskompatibilität).
fn default_min_scale_factor() -> f32 {
    DEFAULT_MIN_SCALE_FACTOR
}

fn default_pick_radius_px() -> f32 {
    PICK_RADIUS_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spectral_scene_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Empfindlichkeiten für das Transform-Werkzeug.
    pub fn transform_sensitivity(&self) -> TransformSensitivity {
        TransformSensitivity {
            translate: self.translate_sensitivity,
            rotate_deg: self.rotate_sensitivity_deg,
            scale: self.scale_sensitivity,
            fine_control_factor: self.fine_control_factor,
            min_scale_factor: self.min_scale_factor,
        }
    }
}
