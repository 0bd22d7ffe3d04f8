//! The narrative chapter table.
//!
//! Chapters are declared with a relative `duration`; building a
//! [`ChapterTable`] prefix-sums those weights into half-open scroll ranges
//! `[scroll_start, scroll_end)` that tile the scroll track in table order.

use crate::camera::CameraPose;
use crate::constants::DURATION_SUM_TOLERANCE;
use crate::error::ConfigError;
use crate::sections::{find_node, SectionId, SectionNode};
use fnv::FnvHashSet;
use glam::Vec3;

/// Rendering/UI treatment of a chapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Transition,
    Section,
}

/// A chapter as declared, before scroll ranges are derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChapterSpec {
    pub id: &'static str,
    pub phase: Phase,
    pub section: Option<SectionId>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub camera: CameraPose,
    pub duration: f32,
}

impl ChapterSpec {
    /// Non-section chapter with no title card.
    pub const fn beat(id: &'static str, phase: Phase, camera: CameraPose, duration: f32) -> Self {
        Self {
            id,
            phase,
            section: None,
            title: "",
            subtitle: "",
            camera,
            duration,
        }
    }

    pub const fn section(
        id: &'static str,
        section: SectionId,
        title: &'static str,
        subtitle: &'static str,
        camera: CameraPose,
        duration: f32,
    ) -> Self {
        Self {
            id,
            phase: Phase::Section,
            section: Some(section),
            title,
            subtitle,
            camera,
            duration,
        }
    }
}

/// A chapter annotated with its scroll range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chapter {
    pub id: &'static str,
    pub phase: Phase,
    pub section: Option<SectionId>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub camera: CameraPose,
    pub duration: f32,
    pub scroll_start: f32,
    pub scroll_end: f32,
}

impl Chapter {
    #[inline]
    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.scroll_start && progress < self.scroll_end
    }

    /// Local progress through this chapter, clamped to [0, 1].
    #[inline]
    pub fn local_progress(&self, progress: f32) -> f32 {
        ((progress - self.scroll_start) / self.duration).clamp(0.0, 1.0)
    }
}

/// Validated, immutable chapter table.
#[derive(Clone, Debug)]
pub struct ChapterTable {
    chapters: Vec<Chapter>,
}

impl ChapterTable {
    /// Derive scroll ranges and reject malformed configuration.
    pub fn new(specs: &[ChapterSpec], nodes: &[SectionNode]) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        let mut seen = FnvHashSet::default();
        let mut chapters = Vec::with_capacity(specs.len());
        let mut cumulative = 0.0_f32;
        for spec in specs {
            if !spec.duration.is_finite() || spec.duration <= 0.0 {
                return Err(ConfigError::InvalidDuration {
                    id: spec.id,
                    duration: spec.duration,
                });
            }
            if !seen.insert(spec.id) {
                return Err(ConfigError::DuplicateChapter(spec.id));
            }
            match (spec.phase, spec.section) {
                (Phase::Section, Some(section)) => {
                    if find_node(nodes, section).is_none() {
                        return Err(ConfigError::MissingSectionNode {
                            chapter: spec.id,
                            section: section.as_str(),
                        });
                    }
                }
                (Phase::Section, None) | (_, Some(_)) => {
                    return Err(ConfigError::PhaseMismatch(spec.id));
                }
                _ => {}
            }
            let scroll_start = cumulative;
            cumulative += spec.duration;
            chapters.push(Chapter {
                id: spec.id,
                phase: spec.phase,
                section: spec.section,
                title: spec.title,
                subtitle: spec.subtitle,
                camera: spec.camera,
                duration: spec.duration,
                scroll_start,
                scroll_end: cumulative,
            });
        }
        if (cumulative - 1.0).abs() > DURATION_SUM_TOLERANCE {
            log::warn!(
                "[chapters] durations sum to {:.4}; progress past the last chapter holds the previous state",
                cumulative
            );
        }
        log::debug!(
            "[chapters] {} chapters over [0, {:.3})",
            chapters.len(),
            cumulative
        );
        Ok(Self { chapters })
    }

    /// The site's story, validated against [`crate::SECTION_NODES`].
    pub fn reference() -> Result<Self, ConfigError> {
        Self::new(&REFERENCE_CHAPTERS, &crate::sections::SECTION_NODES)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    pub fn first(&self) -> &Chapter {
        &self.chapters[0]
    }

    pub fn last_index(&self) -> usize {
        self.chapters.len() - 1
    }

    pub fn total_duration(&self) -> f32 {
        self.chapters[self.last_index()].scroll_end
    }

    /// Index of the chapter whose half-open range contains `progress`.
    ///
    /// A value equal to a chapter's `scroll_end` belongs to its successor;
    /// anything at or past the final end yields `None`.
    pub fn locate(&self, progress: f32) -> Option<usize> {
        self.chapters.iter().position(|c| c.contains(progress))
    }

    /// Index of the chapter after `index`, or `index` itself for the last one.
    #[inline]
    pub fn successor(&self, index: usize) -> usize {
        (index + 1).min(self.last_index())
    }

    pub fn section_chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter().filter(|c| c.phase == Phase::Section)
    }
}

const fn pose(position: [f32; 3], target: [f32; 3]) -> CameraPose {
    CameraPose::new(
        Vec3::new(position[0], position[1], position[2]),
        Vec3::new(target[0], target[1], target[2]),
    )
}

pub const REFERENCE_CHAPTERS: [ChapterSpec; 16] = [
    ChapterSpec::beat("intro", Phase::Intro, pose([0.0, 0.0, 22.0], [0.0, 0.0, 0.0]), 0.05),
    ChapterSpec::beat("name-reveal", Phase::Intro, pose([0.0, 2.0, 14.0], [0.0, 0.0, 0.0]), 0.05),
    ChapterSpec::beat(
        "approach-about",
        Phase::Transition,
        pose([-2.0, 1.5, 8.0], [-3.0, 1.5, 2.0]),
        0.04,
    ),
    ChapterSpec::section(
        "about",
        SectionId::About,
        "ABOUT ME",
        "The mind behind the code",
        pose([-4.0, 1.5, 4.0], [-3.0, 1.5, 2.0]),
        0.12,
    ),
    ChapterSpec::beat(
        "travel-to-projects",
        Phase::Transition,
        pose([0.0, 2.0, 6.0], [1.0, 1.0, 0.0]),
        0.04,
    ),
    ChapterSpec::beat(
        "approach-projects",
        Phase::Transition,
        pose([2.0, 2.0, 4.0], [3.0, 2.0, -1.0]),
        0.03,
    ),
    ChapterSpec::section(
        "projects",
        SectionId::Projects,
        "PROJECTS",
        "What I've built",
        pose([4.0, 2.0, 2.0], [3.0, 2.0, -1.0]),
        0.12,
    ),
    ChapterSpec::beat(
        "travel-to-skills",
        Phase::Transition,
        pose([1.0, 0.0, 5.0], [0.0, -1.0, 0.0]),
        0.04,
    ),
    ChapterSpec::beat(
        "approach-skills",
        Phase::Transition,
        pose([-1.0, -1.0, 3.0], [-2.0, -2.0, -2.0]),
        0.03,
    ),
    ChapterSpec::section(
        "skills",
        SectionId::Skills,
        "SKILLS",
        "Technologies I master",
        pose([-3.0, -2.0, 1.0], [-2.0, -2.0, -2.0]),
        0.12,
    ),
    ChapterSpec::beat(
        "travel-to-experience",
        Phase::Transition,
        pose([0.0, -1.0, 5.0], [1.0, -1.0, 1.0]),
        0.04,
    ),
    ChapterSpec::beat(
        "approach-experience",
        Phase::Transition,
        pose([2.0, -1.0, 4.0], [2.5, -1.5, 2.5]),
        0.03,
    ),
    ChapterSpec::section(
        "experience",
        SectionId::Experience,
        "EXPERIENCE",
        "My journey so far",
        pose([3.5, -1.5, 4.0], [2.5, -1.5, 2.5]),
        0.12,
    ),
    ChapterSpec::beat(
        "travel-to-contact",
        Phase::Transition,
        pose([1.0, -2.5, 5.0], [0.0, -3.0, 0.0]),
        0.06,
    ),
    ChapterSpec::beat(
        "approach-contact",
        Phase::Transition,
        pose([0.5, -3.0, 4.0], [0.0, -3.0, 0.0]),
        0.03,
    ),
    ChapterSpec::section(
        "contact",
        SectionId::Contact,
        "CONTACT",
        "Let's connect",
        pose([0.0, -3.5, 3.0], [0.0, -3.0, 0.0]),
        0.08,
    ),
];
