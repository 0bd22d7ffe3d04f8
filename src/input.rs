use crate::constants::{DRAG_PITCH_LIMIT, DRAG_RELAX_PER_SEC, DRAG_ROTATE_SPEED};
use folio_core::CameraPose;
use glam::{Quat, Vec2, Vec3};

/// Pointer drag that lets the visitor look around the intro orbit.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
    pub yaw: f32,
    pub pitch: f32,
}

impl DragState {
    /// Start a drag; ignored unless the orbit controls are enabled.
    pub fn begin(&mut self, at: Vec2, orbit_controls: bool) {
        if !orbit_controls {
            return;
        }
        self.active = true;
        self.last = at;
    }

    /// `viewport` is the canvas size in the same units as `at`.
    pub fn drag_to(&mut self, at: Vec2, viewport: Vec2) {
        if !self.active || viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        let d = (at - self.last) / viewport;
        self.last = at;
        self.yaw -= d.x * DRAG_ROTATE_SPEED;
        self.pitch = (self.pitch - d.y * DRAG_ROTATE_SPEED).clamp(-DRAG_PITCH_LIMIT, DRAG_PITCH_LIMIT);
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// Ease the offsets back toward the scripted camera.
    pub fn relax(&mut self, dt_sec: f32) {
        let keep = (-DRAG_RELAX_PER_SEC * dt_sec.max(0.0)).exp();
        self.yaw *= keep;
        self.pitch *= keep;
        self.active = false;
    }
}

/// Rotate the eye around the look-at point by the drag offsets.
pub fn apply_orbit(pose: CameraPose, yaw: f32, pitch: f32) -> CameraPose {
    if yaw == 0.0 && pitch == 0.0 {
        return pose;
    }
    let offset = pose.position - pose.target;
    let right = offset.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
    let rot = Quat::from_rotation_y(yaw) * Quat::from_axis_angle(right, pitch);
    CameraPose::new(pose.target + rot * offset, pose.target)
}
