//! Decorative "neural network" the camera flies through.
//!
//! Layout is deterministic: nodes sit on concentric Fibonacci spheres and
//! links join anything closer than a fixed distance. The section anchors are
//! linked into the mesh the same way.

use crate::activation::Activation;
use crate::camera::{blend_factor, Smoothing};
use crate::chapters::ChapterTable;
use crate::constants::*;
use crate::resolve::ResolvedState;
use crate::sections::{SectionId, SectionNode};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Between two network nodes.
    Mesh,
    /// From a section anchor into the mesh.
    Section(SectionId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub start: Vec3,
    pub end: Vec3,
    pub kind: LinkKind,
}

#[derive(Clone, Debug, Default)]
pub struct NetworkGraph {
    pub nodes: Vec<Vec3>,
    pub links: Vec<Link>,
}

impl NetworkGraph {
    pub fn build(sections: &[SectionNode]) -> Self {
        let nodes = fibonacci_shells(&NETWORK_SHELLS);
        let mut links = Vec::new();
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                if a.distance(*b) < NODE_LINK_DISTANCE {
                    links.push(Link {
                        start: *a,
                        end: *b,
                        kind: LinkKind::Mesh,
                    });
                }
            }
        }
        for s in sections {
            for n in &nodes {
                if s.position.distance(*n) < SECTION_LINK_DISTANCE {
                    links.push(Link {
                        start: s.position,
                        end: *n,
                        kind: LinkKind::Section(s.id),
                    });
                }
            }
        }
        log::debug!(
            "[network] {} nodes, {} links",
            nodes.len(),
            links.len()
        );
        Self { nodes, links }
    }
}

/// Evenly spread points on each `(count, radius)` shell.
pub fn fibonacci_shells(shells: &[(usize, f32)]) -> Vec<Vec3> {
    let golden = std::f32::consts::PI * (1.0 + 5.0_f32.sqrt());
    let mut out = Vec::with_capacity(shells.iter().map(|s| s.0).sum());
    for &(count, radius) in shells {
        for i in 0..count {
            let phi = (1.0 - 2.0 * (i as f32 + 0.5) / count as f32).acos();
            let theta = golden * i as f32;
            out.push(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ));
        }
    }
    out
}

/// Overall network opacity: fades out once a section chapter is past its
/// zoom-in, and is fully visible otherwise.
#[inline]
pub fn network_opacity(in_section_chapter: bool, chapter_progress: f32) -> f32 {
    if in_section_chapter && chapter_progress > ZOOM_IN_FRACTION {
        (1.0 - (chapter_progress - ZOOM_IN_FRACTION) * NETWORK_FADE_RATE).max(0.0)
    } else {
        1.0
    }
}

/// Zoom-in progress of a section chapter, 0 until the camera starts moving
/// in and 1 once it has arrived.
#[inline]
pub fn enter_progress(chapter_progress: f32) -> f32 {
    (chapter_progress / ZOOM_IN_FRACTION).min(1.0)
}

/// Drawn opacity after one tick of easing toward `target`.
#[inline]
pub fn ease_opacity(current: f32, target: f32, dt_sec: f32) -> f32 {
    let smoothing = Smoothing::TimeScaled {
        reference_hz: SMOOTHING_REFERENCE_HZ,
    };
    current + (target - current) * blend_factor(OPACITY_BLEND, dt_sec, smoothing)
}

/// Whether a section's floating label is drawn.
#[inline]
pub fn label_visible(nearby_or_active: bool, opacity: f32, enter_progress: f32) -> bool {
    nearby_or_active && opacity > LABEL_MIN_OPACITY && enter_progress < LABEL_MAX_ENTER_PROGRESS
}

/// Network fade and floating label for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneFade {
    pub opacity: f32,
    pub label: Option<SectionId>,
}

impl SceneFade {
    pub fn new(activation: Activation, resolved: &ResolvedState, table: &ChapterTable) -> Self {
        if activation.is_intro() {
            return Self {
                opacity: 1.0,
                label: None,
            };
        }
        let chapter_section = resolved.chapter(table).and_then(|c| c.section);
        let cp = resolved.chapter_progress;
        let opacity = network_opacity(chapter_section.is_some(), cp);
        let label = activation.labelled_section().filter(|&id| {
            let enter = if chapter_section == Some(id) {
                enter_progress(cp)
            } else {
                0.0
            };
            label_visible(true, opacity, enter)
        });
        Self { opacity, label }
    }
}

/// Per-instance data for one billboarded node.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NodeInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub alpha: f32,
}

pub const NODE_SIZE: f32 = 0.08;
pub const SECTION_NODE_SIZE: f32 = 0.18;
pub const NODE_COLOR: [f32; 3] = [0.83, 0.69, 0.22];
pub const SECTION_NODE_COLOR: [f32; 3] = [1.0, 0.84, 0.4];

/// Pack nodes for instanced drawing: the network first, then each section
/// anchor as a faint glow shell followed by its core.
pub fn node_instances(graph: &NetworkGraph, sections: &[SectionNode], opacity: f32) -> Vec<NodeInstance> {
    let node_alpha = NODE_BASE_ALPHA * opacity;
    graph
        .nodes
        .iter()
        .map(|p| NodeInstance {
            position: p.to_array(),
            size: NODE_SIZE,
            color: [NODE_COLOR[0], NODE_COLOR[1], NODE_COLOR[2], node_alpha],
        })
        .chain(sections.iter().flat_map(|s| {
            let [r, g, b] = SECTION_NODE_COLOR;
            let position = s.position.to_array();
            [
                NodeInstance {
                    position,
                    size: SECTION_NODE_SIZE * SECTION_GLOW_SCALE,
                    color: [r, g, b, SECTION_GLOW_ALPHA * opacity],
                },
                NodeInstance {
                    position,
                    size: SECTION_NODE_SIZE,
                    color: [r, g, b, opacity],
                },
            ]
        }))
        .collect()
}

/// Two vertices per link, for a line-list draw.
pub fn line_vertices(graph: &NetworkGraph, opacity: f32) -> Vec<LineVertex> {
    let alpha = LINK_BASE_ALPHA * opacity;
    graph
        .links
        .iter()
        .flat_map(|l| {
            [
                LineVertex {
                    position: l.start.to_array(),
                    alpha,
                },
                LineVertex {
                    position: l.end.to_array(),
                    alpha,
                },
            ]
        })
        .collect()
}
