//! Scroll progress → narrative state.

use crate::chapters::{Chapter, ChapterTable};
use crate::constants::{SECTION_PROGRESS_BUCKETS, SECTION_REVEAL_SPAN, ZOOM_IN_FRACTION};
use crate::sections::SectionId;

/// Narrative state for one scroll sample.
///
/// `active` and `next` index into the [`ChapterTable`] the state was resolved
/// against; `next` equals `active` for the final chapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedState {
    pub active: usize,
    pub next: usize,
    pub chapter_progress: f32,
    pub active_section: Option<SectionId>,
    pub section_progress: f32,
}

impl ResolvedState {
    /// State for a chapter at a given local progress.
    pub fn at(table: &ChapterTable, index: usize, chapter_progress: f32) -> Self {
        let chapter_progress = chapter_progress.clamp(0.0, 1.0);
        let section = table.get(index).and_then(|c| c.section);
        let (active_section, section_progress) = match section {
            Some(id) => match section_progress(chapter_progress) {
                Some(p) => (Some(id), p),
                None => (None, 0.0),
            },
            None => (None, 0.0),
        };
        Self {
            active: index,
            next: table.successor(index),
            chapter_progress,
            active_section,
            section_progress,
        }
    }

    pub fn chapter<'t>(&self, table: &'t ChapterTable) -> Option<&'t Chapter> {
        table.get(self.active)
    }

    pub fn next_chapter<'t>(&self, table: &'t ChapterTable) -> Option<&'t Chapter> {
        table.get(self.next)
    }

    /// Coarse section progress bucket; changes here are worth a UI update.
    #[inline]
    pub fn section_bucket(&self) -> Option<u8> {
        self.active_section
            .map(|_| (self.section_progress * SECTION_PROGRESS_BUCKETS).floor() as u8)
    }
}

/// Clamp a raw scroll sample to [0, 1]; NaN reads as the top of the page.
#[inline]
pub fn sanitize_progress(raw: f32) -> f32 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 1.0)
    }
}

/// Overlay progress for a section chapter's local progress, or `None` while
/// the camera is still zooming in.
#[inline]
pub fn section_progress(chapter_progress: f32) -> Option<f32> {
    if chapter_progress <= ZOOM_IN_FRACTION {
        None
    } else {
        Some(((chapter_progress - ZOOM_IN_FRACTION) / SECTION_REVEAL_SPAN).clamp(0.0, 1.0))
    }
}

/// Resolve a scroll sample against the table.
///
/// Returns `None` when the sample lies at or beyond the last chapter's end;
/// callers keep their previous state in that case.
pub fn resolve(progress: f32, table: &ChapterTable) -> Option<ResolvedState> {
    let progress = sanitize_progress(progress);
    let index = table.locate(progress)?;
    let chapter = table.get(index)?;
    Some(ResolvedState::at(table, index, chapter.local_progress(progress)))
}
