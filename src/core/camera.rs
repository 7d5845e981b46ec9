//! Kamera-Basis für die Umrechnung von Screen-Deltas in Welt-Deltas.

use glam::Vec3;

/// Position und orthonormale Basis der Renderer-Kamera.
///
/// Wird vom Transform-Gizmo nur gelesen, um 2D-Pointer-Bewegungen
/// auf die Kameraebene zu projizieren.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Kameraposition in Weltkoordinaten
    pub position: Vec3,
    /// Blickrichtung (normalisiert)
    pub forward: Vec3,
    /// Rechts-Vektor der Bildebene (normalisiert)
    pub right: Vec3,
    /// Oben-Vektor der Bildebene (normalisiert)
    pub up: Vec3,
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }
}

impl CameraBasis {
    /// Baut die Basis aus Position, Zielpunkt und Welt-Oben-Vektor.
    ///
    /// Gibt `None` zurück, wenn Blickrichtung und `world_up` kollinear sind
    /// oder Position und Ziel zusammenfallen.
    pub fn look_at(position: Vec3, target: Vec3, world_up: Vec3) -> Option<Self> {
        let forward = (target - position).try_normalize()?;
        let right = forward.cross(world_up).try_normalize()?;
        let up = right.cross(forward);
        Some(Self {
            position,
            forward,
            right,
            up,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_down_negative_z_matches_default_basis() {
        let basis = CameraBasis::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
            .expect("gültige Basis");
        assert!(basis.forward.abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(basis.right.abs_diff_eq(Vec3::X, 1e-6));
        assert!(basis.up.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn look_at_rejects_degenerate_input() {
        assert!(CameraBasis::look_at(Vec3::ONE, Vec3::ONE, Vec3::Y).is_none());
        assert!(CameraBasis::look_at(Vec3::ZERO, Vec3::Y, Vec3::Y).is_none());
    }
}
