//! Material- und Beleuchtungswerte als kleine Wert-Typen.
//!
//! Der Editor behandelt beide nur als Nutzlast von Undo-Commands; die
//! spektrale Auswertung übernimmt der Renderer.

use glam::Vec3;

/// PBR-Material eines Meshes (Wert-Snapshot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Grundfarbe (linear RGB)
    pub base_color: Vec3,
    /// Emission (linear RGB, unskaliert)
    pub emission: Vec3,
    /// Rauheit 0..1
    pub roughness: f32,
    /// Metallizität 0..1
    pub metallic: f32,
    /// Brechungsindex
    pub ior: f32,
    /// Transmissionsanteil 0..1
    pub transmission: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Vec3::splat(0.8),
            emission: Vec3::ZERO,
            roughness: 0.5,
            metallic: 0.0,
            ior: 1.5,
            transmission: 0.0,
        }
    }
}

/// Globale Beleuchtungsparameter der Szene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingParams {
    /// Richtung zur Sonne (normalisiert)
    pub sun_direction: Vec3,
    /// Sonnenintensität
    pub sun_intensity: f32,
    /// Sonnenfarbe (linear RGB)
    pub sun_color: Vec3,
    /// Intensität des Himmelslichts
    pub sky_intensity: f32,
    /// Konstanter Ambient-Anteil
    pub ambient: f32,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            sun_direction: Vec3::new(0.0, 1.0, 0.0),
            sun_intensity: 1.0,
            sun_color: Vec3::ONE,
            sky_intensity: 0.3,
            ambient: 0.05,
        }
    }
}
