//! Page scroll: the sampled progress fraction and programmatic scrolling.

use crate::constants::{SCROLL_HEIGHT_VH, SCROLL_TRACK_ID};
use web_sys as web;

/// Scroll offset as a fraction of the scrollable range. May fall outside
/// [0, 1] during overscroll; the session sanitizes it.
pub fn sample_progress(window: &web::Window) -> f32 {
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    let y = window.scroll_y().unwrap_or(0.0);
    let inner = viewport_height(window);
    let range = root.scroll_height() as f64 - inner;
    if range <= 0.0 {
        return 0.0;
    }
    (y / range) as f32
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_to(window: &web::Window, top: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Size the track so the page is scrollable over the whole story.
pub fn size_track(document: &web::Document) {
    match document.get_element_by_id(SCROLL_TRACK_ID) {
        Some(el) => crate::dom::set_style_property(&el, "height", &format!("{SCROLL_HEIGHT_VH}vh")),
        None => log::warn!("[scroll] missing #{SCROLL_TRACK_ID}"),
    }
}

/// Lock body scrolling while the entry screen is up.
pub fn set_body_locked(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        let style = body.style();
        _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}
