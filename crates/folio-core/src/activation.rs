//! UI mode derived from the resolved narrative state.
//!
//! Nothing here is stored between samples: the activation and the chrome
//! visibility it implies are recomputed from scroll position every time, so
//! scrolling backward replays the states in reverse.

use crate::chapters::{Chapter, ChapterTable, Phase};
use crate::constants::SECTION_PROXIMITY_RADIUS;
use crate::resolve::ResolvedState;
use crate::sections::{SectionId, SectionNode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Entry screen; the story has not started (or scroll returned to the top).
    Intro,
    /// Travelling between beats.
    Transition,
    /// Near a section but its overlay is not up yet; only its label shows.
    SectionApproach(SectionId),
    /// Full-screen overlay for the section.
    SectionActive(SectionId),
}

impl Activation {
    pub fn derive(
        started: bool,
        resolved: &ResolvedState,
        table: &ChapterTable,
        nodes: &[SectionNode],
    ) -> Self {
        if !started {
            return Activation::Intro;
        }
        if let Some(id) = resolved.active_section {
            return Activation::SectionActive(id);
        }
        match resolved.chapter(table).and_then(|c| nearby_section(c, nodes)) {
            Some(id) => Activation::SectionApproach(id),
            None => Activation::Transition,
        }
    }

    #[inline]
    pub fn is_intro(self) -> bool {
        matches!(self, Activation::Intro)
    }

    #[inline]
    pub fn active_section(self) -> Option<SectionId> {
        match self {
            Activation::SectionActive(id) => Some(id),
            _ => None,
        }
    }

    /// Section whose 3D label should be drawn, if any.
    #[inline]
    pub fn labelled_section(self) -> Option<SectionId> {
        match self {
            Activation::SectionApproach(id) | Activation::SectionActive(id) => Some(id),
            _ => None,
        }
    }
}

/// Section a chapter is heading toward: its own section, or the first node
/// within [`SECTION_PROXIMITY_RADIUS`] of its look-at target.
pub fn nearby_section(chapter: &Chapter, nodes: &[SectionNode]) -> Option<SectionId> {
    if let Some(id) = chapter.section {
        return Some(id);
    }
    nodes
        .iter()
        .find(|n| n.position.distance(chapter.camera.target) < SECTION_PROXIMITY_RADIUS)
        .map(|n| n.id)
}

/// Overlay panel to mount and the progress that drives its reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionOverlay {
    pub section: SectionId,
    pub progress: f32,
}

/// Visibility of every piece of page chrome for one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeView {
    pub entry_overlay: bool,
    pub orbit_controls: bool,
    pub overlay: Option<SectionOverlay>,
    pub title: Option<(&'static str, &'static str)>,
    pub progress_dots: bool,
    pub scroll_hint: bool,
    pub social_links: bool,
}

impl ChromeView {
    pub fn new(activation: Activation, resolved: &ResolvedState, table: &ChapterTable) -> Self {
        match activation {
            Activation::Intro => Self {
                entry_overlay: true,
                orbit_controls: true,
                overlay: None,
                title: None,
                progress_dots: false,
                scroll_hint: false,
                social_links: false,
            },
            Activation::SectionActive(section) => Self {
                entry_overlay: false,
                orbit_controls: false,
                overlay: Some(SectionOverlay {
                    section,
                    progress: resolved.section_progress,
                }),
                title: None,
                progress_dots: false,
                scroll_hint: false,
                social_links: false,
            },
            Activation::Transition | Activation::SectionApproach(_) => Self {
                entry_overlay: false,
                orbit_controls: false,
                overlay: None,
                title: resolved
                    .chapter(table)
                    .filter(|c| c.phase != Phase::Section && !c.title.is_empty())
                    .map(|c| (c.title, c.subtitle)),
                progress_dots: true,
                scroll_hint: true,
                social_links: true,
            },
        }
    }

    #[inline]
    pub fn is_section_active(&self) -> bool {
        self.overlay.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotState {
    Upcoming,
    Active,
    Past,
}

/// One marker in the side progress indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressDot {
    pub section: SectionId,
    pub title: &'static str,
    pub state: DotState,
}

/// Progress indicator: one dot per section chapter.
pub fn progress_dots(table: &ChapterTable, progress: f32) -> Vec<ProgressDot> {
    table
        .section_chapters()
        .filter_map(|c| {
            let state = if c.contains(progress) {
                DotState::Active
            } else if progress >= c.scroll_end {
                DotState::Past
            } else {
                DotState::Upcoming
            };
            c.section.map(|section| ProgressDot {
                section,
                title: c.title,
                state,
            })
        })
        .collect()
}
