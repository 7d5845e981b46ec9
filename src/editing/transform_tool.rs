//! Interaktives Transform-Werkzeug (Gizmo) für Verschieben, Drehen und Skalieren.
//!
//! Das Werkzeug rechnet Pointer-Bewegungen in ein akkumuliertes Delta um und
//! wendet es auf Start-Transformationen an. Es mutiert selbst keine Szene.

use crate::core::CameraBasis;
use glam::{Mat4, Quat, Vec2, Vec3};
use std::ops::BitOr;

/// Standard-Empfindlichkeit beim Verschieben (Welt-Einheiten pro Pixel).
pub const DEFAULT_TRANSLATE_SENSITIVITY: f32 = 0.05;
/// Standard-Empfindlichkeit beim Drehen (Grad pro Pixel).
pub const DEFAULT_ROTATE_SENSITIVITY_DEG: f32 = 0.5;
/// Standard-Empfindlichkeit beim Skalieren (Faktor pro Pixel).
pub const DEFAULT_SCALE_SENSITIVITY: f32 = 0.01;
/// Multiplikator bei aktiver Feinsteuerung.
pub const DEFAULT_FINE_CONTROL_FACTOR: f32 = 0.1;
/// Untergrenze für den Skalierungsfaktor pro Update.
pub const DEFAULT_MIN_SCALE_FACTOR: f32 = 0.01;

/// Aktiver Gizmo-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    /// Verschieben
    #[default]
    Translate,
    /// Drehen
    Rotate,
    /// Skalieren
    Scale,
}

impl GizmoMode {
    /// Anzeigename für Statuszeilen.
    pub fn label(self) -> &'static str {
        match self {
            Self::Translate => "Verschieben",
            Self::Rotate => "Drehen",
            Self::Scale => "Skalieren",
        }
    }
}

/// Koordinatenraum, in dem Rotation und Skalierung wirken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformSpace {
    /// Um den Pivot in Weltkoordinaten
    #[default]
    World,
    /// Entlang der eigenen Achsen des Nodes
    Local,
}

impl TransformSpace {
    /// Der jeweils andere Raum.
    pub fn toggled(self) -> Self {
        match self {
            Self::World => Self::Local,
            Self::Local => Self::World,
        }
    }
}

/// Achsen-Einschränkung als Bitmaske über X, Y und Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisMask(u8);

impl AxisMask {
    /// Keine Achse
    pub const NONE: Self = Self(0);
    /// Nur X
    pub const X: Self = Self(0b001);
    /// Nur Y
    pub const Y: Self = Self(0b010);
    /// Nur Z
    pub const Z: Self = Self(0b100);
    /// X und Y
    pub const XY: Self = Self(0b011);
    /// X und Z
    pub const XZ: Self = Self(0b101);
    /// Y und Z
    pub const YZ: Self = Self(0b110);
    /// Alle Achsen (uneingeschränkt)
    pub const ALL: Self = Self(0b111);

    /// Enthält die Maske alle Achsen von `other`?
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Ist genau eine Achse gesetzt?
    pub fn is_single_axis(self) -> bool {
        self.0.count_ones() == 1
    }

    /// Setzt die Komponenten nicht erlaubter Achsen auf exakt 0.
    pub fn apply(self, v: Vec3) -> Vec3 {
        Vec3::new(
            if self.contains(Self::X) { v.x } else { 0.0 },
            if self.contains(Self::Y) { v.y } else { 0.0 },
            if self.contains(Self::Z) { v.z } else { 0.0 },
        )
    }

    /// Umschalt-Semantik der Achs-Hotkeys: die aktive Einzelachse erneut
    /// wählen hebt die Einschränkung auf, jede andere Achse wird alleinige
    /// Einschränkung.
    pub fn toggled(self, axis: Self) -> Self {
        if self == axis {
            Self::ALL
        } else {
            axis
        }
    }
}

impl Default for AxisMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for AxisMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Empfindlichkeiten des Werkzeugs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSensitivity {
    /// Welt-Einheiten pro Pixel
    pub translate: f32,
    /// Grad pro Pixel
    pub rotate_deg: f32,
    /// Skalierungsfaktor pro Pixel
    pub scale: f32,
    /// Multiplikator bei Feinsteuerung
    pub fine_control_factor: f32,
    /// Untergrenze des Skalierungsfaktors pro Update
    pub min_scale_factor: f32,
}

impl Default for TransformSensitivity {
    fn default() -> Self {
        Self {
            translate: DEFAULT_TRANSLATE_SENSITIVITY,
            rotate_deg: DEFAULT_ROTATE_SENSITIVITY_DEG,
            scale: DEFAULT_SCALE_SENSITIVITY,
            fine_control_factor: DEFAULT_FINE_CONTROL_FACTOR,
            min_scale_factor: DEFAULT_MIN_SCALE_FACTOR,
        }
    }
}

/// Über eine Geste akkumuliertes Transform-Delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformDelta {
    /// Verschiebung in Weltkoordinaten
    pub translation: Vec3,
    /// Rotation (Inkremente vorne anmultipliziert)
    pub rotation: Quat,
    /// Skalierung pro Achse
    pub scale: Vec3,
}

impl TransformDelta {
    /// Neutrales Delta.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };
}

impl Default for TransformDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Benachrichtigungen des Transform-Werkzeugs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoEvent {
    /// Modus wurde gewechselt
    ModeChanged(GizmoMode),
    /// Raum wurde gewechselt
    SpaceChanged(TransformSpace),
    /// Drag begonnen
    TransformStarted,
    /// Akkumuliertes Delta nach einem Update
    TransformChanged(TransformDelta),
    /// Drag regulär beendet (finales Delta)
    TransformFinished(TransformDelta),
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    last_pos: Vec2,
    camera: CameraBasis,
}

/// Zustandsautomat Idle → Dragging → Idle mit akkumuliertem Delta.
#[derive(Debug, Clone, Default)]
pub struct TransformTool {
    mode: GizmoMode,
    space: TransformSpace,
    axis_mask: AxisMask,
    pivot: Vec3,
    fine_control: bool,
    sensitivity: TransformSensitivity,
    drag: Option<DragState>,
    accumulated: TransformDelta,
    events: Vec<GizmoEvent>,
}

impl TransformTool {
    /// Erstellt ein Werkzeug mit Standardwerten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein Werkzeug mit eigenen Empfindlichkeiten.
    pub fn with_sensitivity(sensitivity: TransformSensitivity) -> Self {
        Self {
            sensitivity,
            ..Self::default()
        }
    }

    /// Aktiver Modus.
    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    /// Aktiver Raum.
    pub fn space(&self) -> TransformSpace {
        self.space
    }

    /// Aktive Achsen-Einschränkung.
    pub fn axis_constraint(&self) -> AxisMask {
        self.axis_mask
    }

    /// Pivot für Rotation/Skalierung im Weltraum.
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Ist die Feinsteuerung aktiv?
    pub fn fine_control(&self) -> bool {
        self.fine_control
    }

    /// Läuft gerade ein Drag?
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Bisher akkumuliertes Delta.
    pub fn accumulated(&self) -> TransformDelta {
        self.accumulated
    }

    /// Aktive Empfindlichkeiten.
    pub fn sensitivity(&self) -> TransformSensitivity {
        self.sensitivity
    }

    /// Entnimmt alle seit dem letzten Aufruf angefallenen Events.
    pub fn drain_events(&mut self) -> Vec<GizmoEvent> {
        std::mem::take(&mut self.events)
    }

    /// Wechselt den Modus. Event nur bei tatsächlicher Änderung.
    pub fn set_mode(&mut self, mode: GizmoMode) {
        if self.mode != mode {
            self.mode = mode;
            self.events.push(GizmoEvent::ModeChanged(mode));
        }
    }

    /// Wechselt den Raum. Event nur bei tatsächlicher Änderung.
    pub fn set_space(&mut self, space: TransformSpace) {
        if self.space != space {
            self.space = space;
            self.events.push(GizmoEvent::SpaceChanged(space));
        }
    }

    /// Schaltet zwischen Welt- und Lokalraum um.
    pub fn toggle_space(&mut self) {
        self.set_space(self.space.toggled());
    }

    /// Setzt die Achsen-Einschränkung direkt.
    pub fn set_axis_constraint(&mut self, mask: AxisMask) {
        self.axis_mask = mask;
    }

    /// Achs-Hotkey: siehe [`AxisMask::toggled`].
    pub fn toggle_axis(&mut self, axis: AxisMask) {
        self.axis_mask = self.axis_mask.toggled(axis);
    }

    /// Setzt den Pivot.
    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.pivot = pivot;
    }

    /// Aktiviert/deaktiviert die Feinsteuerung.
    pub fn set_fine_control(&mut self, enabled: bool) {
        self.fine_control = enabled;
    }

    /// Ersetzt die Empfindlichkeiten.
    pub fn set_sensitivity(&mut self, sensitivity: TransformSensitivity) {
        self.sensitivity = sensitivity;
    }

    /// Startet einen Drag an `screen_pos` mit der aktuellen Kamera-Basis.
    ///
    /// Ein bereits laufender Drag wird nicht neu gestartet.
    pub fn begin_drag(&mut self, screen_pos: Vec2, camera: CameraBasis) {
        if self.drag.is_some() {
            log::debug!("begin_drag während laufendem Drag ignoriert");
            return;
        }

        self.drag = Some(DragState {
            last_pos: screen_pos,
            camera,
        });
        self.accumulated = TransformDelta::IDENTITY;
        self.events.push(GizmoEvent::TransformStarted);
    }

    /// Verarbeitet eine Pointer-Bewegung. No-op ohne laufenden Drag.
    pub fn update_drag(&mut self, screen_pos: Vec2) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        let delta = screen_pos - drag.last_pos;
        drag.last_pos = screen_pos;
        let camera = drag.camera;

        let multiplier = if self.fine_control {
            self.sensitivity.fine_control_factor
        } else {
            1.0
        };

        match self.mode {
            GizmoMode::Translate => {
                let world = camera.right * delta.x - camera.up * delta.y;
                let world = self.axis_mask.apply(world);
                self.accumulated.translation += world * self.sensitivity.translate * multiplier;
            }
            GizmoMode::Rotate => {
                let step = self.rotation_step(delta, multiplier);
                self.accumulated.rotation = (step * self.accumulated.rotation).normalize();
            }
            GizmoMode::Scale => {
                let factor = (1.0 + (delta.x + delta.y) * self.sensitivity.scale * multiplier)
                    .max(self.sensitivity.min_scale_factor);
                let factors = if self.axis_mask == AxisMask::ALL {
                    Vec3::splat(factor)
                } else {
                    Vec3::select(
                        self.axis_mask_lanes(),
                        Vec3::splat(factor),
                        Vec3::ONE,
                    )
                };
                self.accumulated.scale *= factors;
            }
        }

        self.events
            .push(GizmoEvent::TransformChanged(self.accumulated));
    }

    /// Beendet den Drag regulär. Idempotent.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            self.events
                .push(GizmoEvent::TransformFinished(self.accumulated));
        }
    }

    /// Beendet den Drag ohne `TransformFinished` (Abbruch).
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.accumulated = TransformDelta::IDENTITY;
        }
    }

    /// Wendet das akkumulierte Delta auf `original` an (reine Funktion).
    ///
    /// Ist das Delta für den aktiven Modus neutral, kommt `original`
    /// bitgenau zurück.
    pub fn apply_delta(&self, original: &Mat4) -> Mat4 {
        let delta = &self.accumulated;
        match self.mode {
            GizmoMode::Translate => {
                if delta.translation == Vec3::ZERO {
                    return *original;
                }
                let mut result = *original;
                result.w_axis += delta.translation.extend(0.0);
                result
            }
            GizmoMode::Rotate => {
                if delta.rotation == Quat::IDENTITY {
                    return *original;
                }
                let rotation = Mat4::from_quat(delta.rotation);
                match self.space {
                    TransformSpace::World => self.around_pivot(rotation) * *original,
                    TransformSpace::Local => *original * rotation,
                }
            }
            GizmoMode::Scale => {
                if delta.scale == Vec3::ONE {
                    return *original;
                }
                match self.space {
                    TransformSpace::World => {
                        self.around_pivot(Mat4::from_scale(delta.scale)) * *original
                    }
                    TransformSpace::Local => rescale_axes(original, delta.scale),
                }
            }
        }
    }

    fn around_pivot(&self, m: Mat4) -> Mat4 {
        Mat4::from_translation(self.pivot) * m * Mat4::from_translation(-self.pivot)
    }

    /// Zweiachsige Masken haben keine Rotationsachse und liefern Identität.
    fn rotation_step(&self, delta: Vec2, multiplier: f32) -> Quat {
        let sens = self.sensitivity.rotate_deg * multiplier;
        let pitch = Quat::from_rotation_x((delta.y * sens).to_radians());
        let yaw = Quat::from_rotation_y((-delta.x * sens).to_radians());

        match self.axis_mask {
            AxisMask::X => pitch,
            AxisMask::Y => yaw,
            AxisMask::Z => {
                let angle = (delta.x + delta.y) * sens * 0.5;
                Quat::from_rotation_z(angle.to_radians())
            }
            AxisMask::ALL => yaw * pitch,
            _ => Quat::IDENTITY,
        }
    }

    fn axis_mask_lanes(&self) -> glam::BVec3 {
        glam::BVec3::new(
            self.axis_mask.contains(AxisMask::X),
            self.axis_mask.contains(AxisMask::Y),
            self.axis_mask.contains(AxisMask::Z),
        )
    }
}

/// Behält Achsrichtungen und Translation, skaliert nur die Achslängen.
fn rescale_axes(original: &Mat4, scale: Vec3) -> Mat4 {
    let rescale = |axis: glam::Vec4, factor: f32| {
        let axis3 = axis.truncate();
        let length = axis3.length();
        (axis3.normalize_or_zero() * (length * factor)).extend(axis.w)
    };

    Mat4::from_cols(
        rescale(original.x_axis, scale.x),
        rescale(original.y_axis, scale.y),
        rescale(original.z_axis, scale.z),
        original.w_axis,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dragging_tool(mode: GizmoMode) -> TransformTool {
        let mut tool = TransformTool::new();
        tool.set_mode(mode);
        tool.begin_drag(Vec2::ZERO, CameraBasis::default());
        tool.drain_events();
        tool
    }

    #[test]
    fn update_while_idle_is_noop() {
        let mut tool = TransformTool::new();
        tool.update_drag(Vec2::new(50.0, 50.0));
        assert_eq!(tool.accumulated(), TransformDelta::IDENTITY);
        assert!(tool.drain_events().is_empty());
    }

    #[test]
    fn end_drag_is_idempotent() {
        let mut tool = dragging_tool(GizmoMode::Translate);
        tool.end_drag();
        tool.end_drag();
        let events = tool.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GizmoEvent::TransformFinished(_)));
        assert!(!tool.is_dragging());
    }

    #[test]
    fn translate_projects_onto_camera_plane() {
        let mut tool = dragging_tool(GizmoMode::Translate);
        tool.update_drag(Vec2::new(20.0, -10.0));

        let t = tool.accumulated().translation;
        assert_relative_eq!(t.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(t.y, 0.5, epsilon = 1e-6);
        assert_eq!(t.z, 0.0);

        let events = tool.drain_events();
        assert_eq!(events, vec![GizmoEvent::TransformChanged(tool.accumulated())]);
    }

    #[test]
    fn translate_is_incremental_between_updates() {
        let mut tool = dragging_tool(GizmoMode::Translate);
        tool.update_drag(Vec2::new(10.0, 0.0));
        tool.update_drag(Vec2::new(30.0, 0.0));
        assert_relative_eq!(tool.accumulated().translation.x, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn y_constraint_zeroes_x_and_z_exactly() {
        let camera = CameraBasis {
            position: Vec3::new(5.0, 5.0, 5.0),
            forward: Vec3::new(-1.0, -1.0, -1.0).normalize(),
            right: Vec3::new(1.0, 1.0, 0.0).normalize(),
            up: Vec3::new(-1.0, 1.0, -2.0).normalize(),
        };
        let mut tool = TransformTool::new();
        tool.toggle_axis(AxisMask::Y);
        tool.begin_drag(Vec2::ZERO, camera);
        tool.update_drag(Vec2::new(100.0, 0.0));

        let t = tool.accumulated().translation;
        assert_eq!(t.x, 0.0);
        assert_eq!(t.z, 0.0);
        assert!(t.y > 0.0);
    }

    #[test]
    fn fine_control_scales_translation() {
        let mut tool = dragging_tool(GizmoMode::Translate);
        tool.set_fine_control(true);
        tool.update_drag(Vec2::new(100.0, 0.0));
        assert_relative_eq!(tool.accumulated().translation.x, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn rotate_about_z_combines_screen_axes() {
        let mut tool = dragging_tool(GizmoMode::Rotate);
        tool.toggle_axis(AxisMask::Z);
        tool.update_drag(Vec2::new(60.0, 120.0));

        // (60 + 120) * 0.5 * 0.5 = 45°
        let expected = Quat::from_rotation_z(45f32.to_radians());
        assert!(tool.accumulated().rotation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn rotate_unconstrained_uses_both_screen_axes() {
        let mut tool = dragging_tool(GizmoMode::Rotate);
        tool.update_drag(Vec2::new(20.0, 0.0));
        let expected = Quat::from_rotation_y((-10f32).to_radians());
        assert!(tool.accumulated().rotation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn rotate_with_two_axis_mask_stays_identity() {
        let mut tool = dragging_tool(GizmoMode::Rotate);
        tool.set_axis_constraint(AxisMask::XZ);
        tool.update_drag(Vec2::new(40.0, 30.0));
        assert_eq!(tool.accumulated().rotation, Quat::IDENTITY);
    }

    #[test]
    fn scale_factor_is_clamped_to_floor() {
        let mut tool = dragging_tool(GizmoMode::Scale);
        tool.update_drag(Vec2::new(-1000.0, -1000.0));
        assert_relative_eq!(tool.accumulated().scale.x, DEFAULT_MIN_SCALE_FACTOR);
        assert!(tool.accumulated().scale.min_element() > 0.0);
    }

    #[test]
    fn constrained_scale_only_touches_masked_axes() {
        let mut tool = dragging_tool(GizmoMode::Scale);
        tool.toggle_axis(AxisMask::X);
        tool.update_drag(Vec2::new(50.0, 50.0));
        let scale = tool.accumulated().scale;
        assert_relative_eq!(scale.x, 2.0, epsilon = 1e-6);
        assert_eq!(scale.y, 1.0);
        assert_eq!(scale.z, 1.0);
    }

    #[test]
    fn axis_toggle_reverts_to_all() {
        let mut tool = TransformTool::new();
        tool.toggle_axis(AxisMask::X);
        assert_eq!(tool.axis_constraint(), AxisMask::X);
        tool.toggle_axis(AxisMask::Z);
        assert_eq!(tool.axis_constraint(), AxisMask::Z);
        tool.toggle_axis(AxisMask::Z);
        assert_eq!(tool.axis_constraint(), AxisMask::ALL);
    }

    #[test]
    fn mode_and_space_events_only_on_change() {
        let mut tool = TransformTool::new();
        tool.set_mode(GizmoMode::Translate);
        tool.set_space(TransformSpace::World);
        assert!(tool.drain_events().is_empty());

        tool.set_mode(GizmoMode::Rotate);
        tool.toggle_space();
        assert_eq!(
            tool.drain_events(),
            vec![
                GizmoEvent::ModeChanged(GizmoMode::Rotate),
                GizmoEvent::SpaceChanged(TransformSpace::Local),
            ]
        );
    }

    #[test]
    fn apply_delta_rotates_around_pivot_in_world_space() {
        let mut tool = dragging_tool(GizmoMode::Rotate);
        tool.set_pivot(Vec3::new(1.0, 0.0, 0.0));
        tool.toggle_axis(AxisMask::Z);
        // (180 + 180) * 0.5 * 0.5 = 90°
        tool.update_drag(Vec2::new(180.0, 180.0));

        let original = Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0));
        let result = tool.apply_delta(&original);
        let position = result.w_axis.truncate();
        assert!(position.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn apply_delta_local_rotation_ignores_pivot() {
        let mut tool = dragging_tool(GizmoMode::Rotate);
        tool.set_space(TransformSpace::Local);
        tool.set_pivot(Vec3::splat(100.0));
        tool.update_drag(Vec2::new(20.0, 0.0));

        let original = Mat4::from_translation(Vec3::new(3.0, 4.0, 5.0));
        let result = tool.apply_delta(&original);
        assert_eq!(result.w_axis, original.w_axis);
    }

    #[test]
    fn apply_delta_local_scale_keeps_orientation_and_translation() {
        let mut tool = dragging_tool(GizmoMode::Scale);
        tool.set_space(TransformSpace::Local);
        tool.update_drag(Vec2::new(50.0, 50.0));

        let rotation = Quat::from_rotation_y(0.7);
        let original = Mat4::from_scale_rotation_translation(
            Vec3::new(1.0, 2.0, 3.0),
            rotation,
            Vec3::new(-4.0, 0.0, 9.0),
        );
        let (scale, rot, translation) = tool.apply_delta(&original).to_scale_rotation_translation();
        assert!(scale.abs_diff_eq(Vec3::new(2.0, 4.0, 6.0), 1e-5));
        assert!(rot.abs_diff_eq(rotation, 1e-5));
        assert!(translation.abs_diff_eq(Vec3::new(-4.0, 0.0, 9.0), 1e-6));
    }

    #[test]
    fn apply_delta_world_scale_around_pivot() {
        let mut tool = dragging_tool(GizmoMode::Scale);
        tool.set_pivot(Vec3::new(1.0, 1.0, 1.0));
        tool.update_drag(Vec2::new(50.0, 50.0));

        let original = Mat4::from_translation(Vec3::new(2.0, 1.0, 1.0));
        let position = tool.apply_delta(&original).w_axis.truncate();
        assert!(position.abs_diff_eq(Vec3::new(3.0, 1.0, 1.0), 1e-5));
    }

    #[test]
    fn neutral_delta_returns_original_bit_identical() {
        let original = Mat4::from_scale_rotation_translation(
            Vec3::new(0.3, 1.7, 2.1),
            Quat::from_rotation_x(0.4),
            Vec3::new(0.1, -0.2, 0.3),
        );
        for mode in [GizmoMode::Translate, GizmoMode::Rotate, GizmoMode::Scale] {
            let mut tool = dragging_tool(mode);
            tool.set_pivot(Vec3::new(7.0, 8.0, 9.0));
            tool.update_drag(Vec2::ZERO);
            assert_eq!(tool.apply_delta(&original), original);
        }
    }

    #[test]
    fn cancel_drag_emits_nothing() {
        let mut tool = dragging_tool(GizmoMode::Translate);
        tool.update_drag(Vec2::new(5.0, 5.0));
        tool.drain_events();
        tool.cancel_drag();
        assert!(!tool.is_dragging());
        assert!(tool.drain_events().is_empty());
    }
}
