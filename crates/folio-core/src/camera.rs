//! Camera targets derived from the narrative state, plus the smoothed rig
//! that the renderer actually reads every frame.
//!
//! Target computation is split into two pure functions, one of elapsed time
//! (the intro orbit) and one of scroll (the narrative path). [`interpolate`]
//! is the only place that chooses between them.

use crate::chapters::ChapterTable;
use crate::constants::*;
use crate::resolve::ResolvedState;
use crate::sections::{find_node, SectionNode};
use glam::{Mat4, Vec3};

/// Eye position and look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    #[inline]
    pub fn lerp(self, other: CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(INITIAL_EYE, INITIAL_LOOK_AT)
    }
}

/// Cubic ease-in-out on [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// What drives the camera this frame.
#[derive(Clone, Copy, Debug)]
pub enum CameraDrive<'a> {
    /// Entry screen: ambient orbit as a function of seconds since mount.
    Intro { elapsed: f32 },
    /// Story mode: follow the resolved chapter.
    Narrative(&'a ResolvedState),
}

/// Target pose for the current drive.
pub fn interpolate(drive: CameraDrive<'_>, table: &ChapterTable, nodes: &[SectionNode]) -> CameraPose {
    match drive {
        CameraDrive::Intro { elapsed } => orbit_pose(elapsed),
        CameraDrive::Narrative(resolved) => narrative_pose(resolved, table, nodes),
    }
}

/// Slow deterministic orbit used while the entry overlay is up.
pub fn orbit_pose(elapsed: f32) -> CameraPose {
    let a = elapsed * ORBIT_ANGULAR_SPEED;
    CameraPose::new(
        Vec3::new(
            a.sin() * ORBIT_SWAY_X,
            (a * ORBIT_Y_FREQUENCY).cos() * ORBIT_SWAY_Y + ORBIT_Y_OFFSET,
            ORBIT_RADIUS,
        ),
        ORBIT_LOOK_AT,
    )
}

fn narrative_pose(resolved: &ResolvedState, table: &ChapterTable, nodes: &[SectionNode]) -> CameraPose {
    let Some(current) = resolved.chapter(table) else {
        return CameraPose::default();
    };
    if let Some(section) = current.section {
        return match find_node(nodes, section) {
            Some(node) => zoom_pose(current.camera, node.position, resolved.chapter_progress),
            None => current.camera,
        };
    }
    let next = resolved.next_chapter(table).unwrap_or(current);
    let eased = ease_in_out_cubic(resolved.chapter_progress.min(1.0));
    current.camera.lerp(next.camera, eased)
}

/// Zoom from the chapter's declared eye toward a point just in front of the
/// node; completes at [`ZOOM_IN_FRACTION`] and holds afterwards.
pub fn zoom_pose(start: CameraPose, node: Vec3, chapter_progress: f32) -> CameraPose {
    let zoom = (chapter_progress / ZOOM_IN_FRACTION).min(1.0);
    CameraPose::new(start.position.lerp(node + ZOOM_NODE_OFFSET, zoom), node)
}

/// How the rendered pose chases its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    /// Fixed blend per rendered frame; speed depends on the frame rate.
    PerFrame,
    /// Blend rescaled by frame time so that it matches `PerFrame` at
    /// `reference_hz` and is frame-rate independent elsewhere.
    TimeScaled { reference_hz: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigParams {
    pub intro_blend: f32,
    pub narrative_blend: f32,
    pub smoothing: Smoothing,
}

impl Default for RigParams {
    fn default() -> Self {
        Self {
            intro_blend: INTRO_BLEND,
            narrative_blend: NARRATIVE_BLEND,
            smoothing: Smoothing::TimeScaled {
                reference_hz: SMOOTHING_REFERENCE_HZ,
            },
        }
    }
}

/// Effective blend factor for one tick of `dt_sec`.
#[inline]
pub fn blend_factor(blend: f32, dt_sec: f32, smoothing: Smoothing) -> f32 {
    match smoothing {
        Smoothing::PerFrame => blend,
        Smoothing::TimeScaled { reference_hz } => {
            let frames = (dt_sec.max(0.0) * reference_hz).min(reference_hz);
            1.0 - (1.0 - blend).powf(frames)
        }
    }
}

/// Rendered camera pose, exponentially smoothed toward per-frame targets.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pose: CameraPose,
    params: RigParams,
}

impl CameraRig {
    pub fn new(params: RigParams) -> Self {
        Self {
            pose: CameraPose::default(),
            params,
        }
    }

    #[inline]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Blend toward `target` for one tick and return the new pose.
    pub fn step(&mut self, target: CameraPose, intro: bool, dt_sec: f32) -> CameraPose {
        let blend = if intro {
            self.params.intro_blend
        } else {
            self.params.narrative_blend
        };
        let alpha = blend_factor(blend, dt_sec, self.params.smoothing);
        self.pose = self.pose.lerp(target, alpha);
        self.pose
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(RigParams::default())
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_pose(pose: CameraPose, aspect: f32) -> Self {
        Self {
            eye: pose.position,
            target: pose.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
