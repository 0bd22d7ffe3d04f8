//! DOM chrome driven by the story state.

use crate::constants::*;
use crate::dom::{set_style_property, set_visible, set_visible_by_id};
use folio_core::{Camera, ChapterTable, ChromeView, DotState, ProgressDot, SectionId, SectionNode};
use glam::Vec3;
use web_sys as web;

#[inline]
pub fn show_entry(document: &web::Document) {
    set_visible_by_id(document, START_OVERLAY_ID, true);
}

#[inline]
pub fn hide_entry(document: &web::Document) {
    set_visible_by_id(document, START_OVERLAY_ID, false);
}

#[inline]
pub fn set_reminder_visible(document: &web::Document, visible: bool) {
    set_visible_by_id(document, IDLE_REMINDER_ID, visible);
}

/// Apply the visibility flags and texts of one chrome view.
pub fn apply_chrome(document: &web::Document, view: &ChromeView) {
    if view.entry_overlay {
        show_entry(document);
    } else {
        hide_entry(document);
        set_reminder_visible(document, false);
    }
    set_visible_by_id(document, PROGRESS_DOTS_ID, view.progress_dots);
    set_visible_by_id(document, SCROLL_HINT_ID, view.scroll_hint);
    set_visible_by_id(document, SOCIAL_LINKS_ID, view.social_links);

    let (title, subtitle) = view.title.unwrap_or(("", ""));
    for (id, text) in [(STORY_TITLE_ID, title), (STORY_SUBTITLE_ID, subtitle)] {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
            set_visible(&el, !text.is_empty());
        }
    }

    let active = view.overlay.map(|o| o.section);
    for id in SectionId::ALL {
        if let Some(el) = section_element(document, SECTION_OVERLAY_PREFIX, id) {
            set_visible(&el, active == Some(id));
        }
    }
    set_visible_by_id(document, RETURN_TO_MAIN_ID, view.is_section_active());
}

/// Continuous reveal progress of the open section overlay.
pub fn set_section_progress(document: &web::Document, view: &ChromeView) {
    if let Some(overlay) = view.overlay {
        if let Some(el) = section_element(document, SECTION_OVERLAY_PREFIX, overlay.section) {
            set_style_property(&el, SECTION_PROGRESS_VAR, &format!("{:.4}", overlay.progress));
        }
    }
}

/// Fill the progress indicator with one entry per section chapter.
pub fn build_progress_dots(document: &web::Document, table: &ChapterTable) {
    let Some(container) = document.get_element_by_id(PROGRESS_DOTS_ID) else {
        log::warn!("[overlay] missing #{PROGRESS_DOTS_ID}");
        return;
    };
    container.set_inner_html("");
    for chapter in table.section_chapters() {
        let Some(section) = chapter.section else {
            continue;
        };
        let Ok(dot) = document.create_element("div") else {
            continue;
        };
        dot.set_class_name("progress-dot");
        _ = dot.set_attribute("data-section", section.as_str());
        if let Ok(label) = document.create_element("span") {
            label.set_text_content(Some(chapter.title));
            _ = dot.append_child(&label);
        }
        _ = container.append_child(&dot);
    }
}

pub fn update_progress_dots(document: &web::Document, dots: &[ProgressDot]) {
    let Some(container) = document.get_element_by_id(PROGRESS_DOTS_ID) else {
        return;
    };
    let children = container.children();
    for (i, dot) in dots.iter().enumerate() {
        if let Some(el) = children.item(i as u32) {
            let cl = el.class_list();
            _ = cl.toggle_with_force(DOT_ACTIVE_CLASS, dot.state == DotState::Active);
            _ = cl.toggle_with_force(DOT_PAST_CLASS, dot.state == DotState::Past);
        }
    }
}

/// Show the floating label of `label` pinned over its node, hiding the rest.
pub fn place_labels(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    camera: &Camera,
    nodes: &[SectionNode],
    label: Option<SectionId>,
) {
    for node in nodes {
        let Some(el) = section_element(document, SECTION_LABEL_PREFIX, node.id) else {
            continue;
        };
        let screen = (label == Some(node.id))
            .then(|| project(camera, node.position, canvas))
            .flatten();
        match screen {
            Some((x, y)) => {
                set_style_property(&el, "left", &format!("{x:.1}px"));
                set_style_property(&el, "top", &format!("{y:.1}px"));
                set_visible(&el, true);
            }
            None => set_visible(&el, false),
        }
    }
}

/// CSS pixel position of a world point, or None when it is behind the camera.
fn project(camera: &Camera, world: Vec3, canvas: &web::HtmlCanvasElement) -> Option<(f32, f32)> {
    let clip = camera.view_projection() * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    let w = canvas.client_width() as f32;
    let h = canvas.client_height() as f32;
    Some(((ndc.x * 0.5 + 0.5) * w, (0.5 - ndc.y * 0.5) * h))
}

#[inline]
fn section_element(document: &web::Document, prefix: &str, id: SectionId) -> Option<web::Element> {
    document.get_element_by_id(&format!("{prefix}{}", id.as_str()))
}
