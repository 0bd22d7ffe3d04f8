/// Front-end constants: DOM contract, scroll geometry and drag tuning.
///
/// Kept free of web types so the host tests can include this file directly.
// Element ids the page must provide
pub const CANVAS_ID: &str = "app-canvas";
pub const SCROLL_TRACK_ID: &str = "scroll-track";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const ENTER_BUTTON_ID: &str = "enter-button";
pub const IDLE_REMINDER_ID: &str = "idle-reminder";
pub const STORY_TITLE_ID: &str = "story-title";
pub const STORY_SUBTITLE_ID: &str = "story-subtitle";
pub const PROGRESS_DOTS_ID: &str = "progress-dots";
pub const SCROLL_HINT_ID: &str = "scroll-hint";
pub const SOCIAL_LINKS_ID: &str = "social-links";
pub const RETURN_TO_MAIN_ID: &str = "return-to-main";

// Per-section elements are `<prefix><section id>`
pub const SECTION_OVERLAY_PREFIX: &str = "section-";
pub const SECTION_LABEL_PREFIX: &str = "label-";
pub const SECTION_PROGRESS_VAR: &str = "--section-progress";

pub const HIDDEN_CLASS: &str = "hidden";
pub const DOT_ACTIVE_CLASS: &str = "active";
pub const DOT_PAST_CLASS: &str = "past";

// Scroll track height in viewport heights
pub const SCROLL_HEIGHT_VH: u32 = 1000;
// Where "enter" lands the page, in viewport heights from the top
pub const START_SCROLL_VIEWPORTS: f64 = 0.5;

// Intro drag-to-explore: radians per full-canvas drag
pub const DRAG_ROTATE_SPEED: f32 = 3.0;
pub const DRAG_PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_4;
// Drag offsets ease back to zero once the story starts (per second)
pub const DRAG_RELAX_PER_SEC: f32 = 2.5;

pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.04];
// rgb + base alpha for link lines
pub const LINE_COLOR: [f32; 4] = [0.83, 0.69, 0.22, 1.0];
