//! Content sections and the fixed 3D anchors their chapters zoom toward.

use glam::Vec3;

/// One of the full-screen content panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Stable symbolic name, also used to build overlay element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }
}

/// Static anchor point for a section in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionNode {
    pub id: SectionId,
    pub label: &'static str,
    pub position: Vec3,
}

pub const SECTION_NODES: [SectionNode; 5] = [
    SectionNode {
        id: SectionId::About,
        label: "ABOUT",
        position: Vec3::new(-3.0, 1.5, 2.0),
    },
    SectionNode {
        id: SectionId::Projects,
        label: "PROJECTS",
        position: Vec3::new(3.0, 2.0, -1.0),
    },
    SectionNode {
        id: SectionId::Skills,
        label: "SKILLS",
        position: Vec3::new(-2.0, -2.0, -2.0),
    },
    SectionNode {
        id: SectionId::Experience,
        label: "EXPERIENCE",
        position: Vec3::new(2.5, -1.5, 2.5),
    },
    SectionNode {
        id: SectionId::Contact,
        label: "CONTACT",
        position: Vec3::new(0.0, -3.0, 0.0),
    },
];

#[inline]
pub fn find_node(nodes: &[SectionNode], id: SectionId) -> Option<&SectionNode> {
    nodes.iter().find(|n| n.id == id)
}
