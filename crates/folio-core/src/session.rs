//! The centrally-owned story state.
//!
//! [`StorySession`] owns the "has the visitor entered" flag and the last
//! resolved state. It consumes one scroll sample at a time and reports the
//! discrete changes the UI should react to; continuous values (camera
//! targets, section progress) are read back from it every frame.

use crate::activation::{Activation, ChromeView};
use crate::camera::{interpolate, CameraDrive, CameraPose};
use crate::chapters::ChapterTable;
use crate::constants::RESET_PROGRESS_THRESHOLD;
use crate::resolve::{resolve, sanitize_progress, ResolvedState};
use crate::sections::{SectionId, SectionNode};
use smallvec::SmallVec;

/// Discrete change produced by a sample or an action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StoryEvent {
    Started,
    /// Back to the entry screen (top of page reached or return-to-main).
    Stopped,
    ChapterChanged { index: usize },
    SectionChanged(Option<SectionId>),
    SectionBucketChanged(u8),
}

pub type StoryEvents = SmallVec<[StoryEvent; 4]>;

pub struct StorySession {
    table: ChapterTable,
    nodes: Vec<SectionNode>,
    started: bool,
    progress: f32,
    resolved: ResolvedState,
    // Whether any sample has matched a chapter yet.
    anchored: bool,
    // The top-of-page reset only fires once the page has left the reset zone
    // since starting; the start scroll itself begins inside it.
    reset_armed: bool,
}

impl StorySession {
    pub fn new(table: ChapterTable, nodes: &[SectionNode]) -> Self {
        let resolved = ResolvedState::at(&table, 0, 0.0);
        Self {
            table,
            nodes: nodes.to_vec(),
            started: false,
            progress: 0.0,
            resolved,
            anchored: false,
            reset_armed: false,
        }
    }

    #[inline]
    pub fn table(&self) -> &ChapterTable {
        &self.table
    }

    #[inline]
    pub fn nodes(&self) -> &[SectionNode] {
        &self.nodes
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Last sanitized scroll sample.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn resolved(&self) -> &ResolvedState {
        &self.resolved
    }

    pub fn activation(&self) -> Activation {
        Activation::derive(self.started, &self.resolved, &self.table, &self.nodes)
    }

    pub fn chrome(&self) -> ChromeView {
        ChromeView::new(self.activation(), &self.resolved, &self.table)
    }

    /// Target pose for this frame; `elapsed` only matters on the entry screen.
    pub fn camera_target(&self, elapsed: f32) -> CameraPose {
        let drive = if self.started {
            CameraDrive::Narrative(&self.resolved)
        } else {
            CameraDrive::Intro { elapsed }
        };
        interpolate(drive, &self.table, &self.nodes)
    }

    /// Consume one scroll sample.
    pub fn on_scroll(&mut self, raw: f32) -> StoryEvents {
        let mut events = StoryEvents::new();
        self.progress = sanitize_progress(raw);

        if self.started {
            if self.progress > RESET_PROGRESS_THRESHOLD {
                self.reset_armed = true;
            } else if self.reset_armed {
                log::info!("[session] scrolled back to top; re-entering intro");
                self.stop(&mut events);
            }
        }
        if !self.started {
            self.clear_section(&mut events);
            return events;
        }
        self.apply_sample(&mut events);
        events
    }

    /// Leave the entry screen and resolve against the latest sample.
    pub fn start(&mut self) -> StoryEvents {
        let mut events = StoryEvents::new();
        if self.started {
            return events;
        }
        log::info!("[session] story started at progress {:.3}", self.progress);
        self.started = true;
        self.reset_armed = self.progress > RESET_PROGRESS_THRESHOLD;
        events.push(StoryEvent::Started);
        self.apply_sample(&mut events);
        events
    }

    /// Force the entry screen back up; the caller scrolls the page to the top.
    pub fn return_to_main(&mut self) -> StoryEvents {
        let mut events = StoryEvents::new();
        if self.started {
            log::info!("[session] returning to main");
            self.stop(&mut events);
        }
        self.clear_section(&mut events);
        events
    }

    fn stop(&mut self, events: &mut StoryEvents) {
        self.started = false;
        self.reset_armed = false;
        events.push(StoryEvent::Stopped);
    }

    fn apply_sample(&mut self, events: &mut StoryEvents) {
        let next = match resolve(self.progress, &self.table) {
            Some(state) => state,
            // Past the last chapter: hold what we had, or pin to the end if
            // nothing has been resolved yet.
            None if !self.anchored => {
                ResolvedState::at(&self.table, self.table.last_index(), 1.0)
            }
            None => return,
        };
        self.anchored = true;
        self.commit(next, events);
    }

    fn clear_section(&mut self, events: &mut StoryEvents) {
        let cleared = ResolvedState {
            active_section: None,
            section_progress: 0.0,
            ..self.resolved
        };
        self.commit(cleared, events);
    }

    fn commit(&mut self, next: ResolvedState, events: &mut StoryEvents) {
        let prev = self.resolved;
        if next.active != prev.active {
            if let Some(c) = self.table.get(next.active) {
                log::debug!("[session] chapter {} -> {}", next.active, c.id);
            }
            events.push(StoryEvent::ChapterChanged { index: next.active });
        }
        if next.active_section != prev.active_section {
            log::debug!(
                "[session] section {:?}",
                next.active_section.map(|s| s.as_str())
            );
            events.push(StoryEvent::SectionChanged(next.active_section));
        } else if next.section_bucket() != prev.section_bucket() {
            if let Some(bucket) = next.section_bucket() {
                events.push(StoryEvent::SectionBucketChanged(bucket));
            }
        }
        self.resolved = next;
    }
}
