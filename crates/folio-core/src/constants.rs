use glam::Vec3;

// Narrative tuning constants shared by the resolver, camera and activation logic.

// Section chapters
pub const ZOOM_IN_FRACTION: f32 = 0.3; // share of a section chapter spent zooming in, overlay hidden
pub const SECTION_REVEAL_SPAN: f32 = 1.0 - ZOOM_IN_FRACTION; // renormalized remainder
pub const SECTION_PROGRESS_BUCKETS: f32 = 10.0; // coarse buckets used for change notifications

// Intro re-entry
pub const RESET_PROGRESS_THRESHOLD: f32 = 0.005; // scrolling back to the top re-enters intro

// Table integrity
pub const DURATION_SUM_TOLERANCE: f32 = 1e-3;

// Camera
pub const ZOOM_NODE_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 1.5); // zoomed-in eye relative to a section node
pub const INITIAL_EYE: Vec3 = Vec3::new(0.0, -2.0, 18.0);
pub const INITIAL_LOOK_AT: Vec3 = Vec3::ZERO;
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Ambient intro orbit
pub const ORBIT_ANGULAR_SPEED: f32 = 0.15; // radians per second
pub const ORBIT_SWAY_X: f32 = 2.0;
pub const ORBIT_SWAY_Y: f32 = 1.5;
pub const ORBIT_Y_FREQUENCY: f32 = 0.7;
pub const ORBIT_Y_OFFSET: f32 = -3.0;
pub const ORBIT_RADIUS: f32 = 12.0;
pub const ORBIT_LOOK_AT: Vec3 = Vec3::new(0.0, 2.0, 0.0);

// Per-tick blend factors toward the target pose
pub const INTRO_BLEND: f32 = 0.02;
pub const NARRATIVE_BLEND: f32 = 0.06;
pub const SMOOTHING_REFERENCE_HZ: f32 = 60.0;

// Activation
pub const SECTION_PROXIMITY_RADIUS: f32 = 3.0; // look-at distance that counts as approaching a node

// Network layout: (node count, shell radius)
pub const NETWORK_SHELLS: [(usize, f32); 4] = [(20, 2.5), (40, 4.0), (60, 5.5), (40, 7.0)];
pub const NODE_LINK_DISTANCE: f32 = 3.0;
pub const SECTION_LINK_DISTANCE: f32 = 2.5;

// Network fade
pub const NETWORK_FADE_RATE: f32 = 3.0; // opacity lost per unit of chapter progress past the zoom-in
pub const NODE_BASE_ALPHA: f32 = 0.8;
pub const LINK_BASE_ALPHA: f32 = 0.15;
pub const OPACITY_BLEND: f32 = 0.1; // per 60 Hz frame, toward the target opacity
pub const SECTION_GLOW_SCALE: f32 = 1.5;
pub const SECTION_GLOW_ALPHA: f32 = 0.2;
pub const LABEL_MIN_OPACITY: f32 = 0.2;
pub const LABEL_MAX_ENTER_PROGRESS: f32 = 0.3;

// Intro idle reminder
pub const IDLE_REMINDER_SECS: u64 = 15;
