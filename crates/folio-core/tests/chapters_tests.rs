// Chapter table derivation and configuration checks.

use folio_core::*;
use glam::Vec3;

fn pose(z: f32) -> CameraPose {
    CameraPose::new(Vec3::new(0.0, 0.0, z), Vec3::ZERO)
}

fn two_beats() -> ChapterTable {
    ChapterTable::new(
        &[
            ChapterSpec::beat("a", Phase::Transition, pose(10.0), 0.5),
            ChapterSpec::beat("b", Phase::Transition, pose(5.0), 0.5),
        ],
        &SECTION_NODES,
    )
    .unwrap()
}

#[test]
fn reference_table_is_valid_and_spans_the_track() {
    let table = ChapterTable::reference().unwrap();
    assert_eq!(table.len(), 16);
    assert!((table.total_duration() - 1.0).abs() < 1e-4);
    assert_eq!(table.first().id, "intro");
    assert_eq!(table.section_chapters().count(), 5);
}

#[test]
fn ranges_tile_without_gaps_or_overlaps() {
    let table = ChapterTable::reference().unwrap();
    let mut prev_end = 0.0_f32;
    for c in table.iter() {
        assert_eq!(c.scroll_start, prev_end, "gap before {}", c.id);
        assert!(c.scroll_end > c.scroll_start, "empty range for {}", c.id);
        prev_end = c.scroll_end;
    }
    assert_eq!(prev_end, table.total_duration());
}

#[test]
fn two_beat_scenario_ranges() {
    let table = two_beats();
    let a = table.get(0).unwrap();
    let b = table.get(1).unwrap();
    assert_eq!((a.scroll_start, a.scroll_end), (0.0, 0.5));
    assert_eq!((b.scroll_start, b.scroll_end), (0.5, 1.0));
}

#[test]
fn locate_uses_half_open_ranges() {
    let table = two_beats();
    assert_eq!(table.locate(0.0), Some(0));
    assert_eq!(table.locate(0.49), Some(0));
    assert_eq!(table.locate(0.5), Some(1));
    assert_eq!(table.locate(0.999), Some(1));
    assert_eq!(table.locate(1.0), None);
}

#[test]
fn successor_saturates_at_last_chapter() {
    let table = two_beats();
    assert_eq!(table.successor(0), 1);
    assert_eq!(table.successor(1), 1);
}

#[test]
fn durations_need_not_sum_to_one() {
    let table = ChapterTable::new(
        &[
            ChapterSpec::beat("a", Phase::Intro, pose(1.0), 0.25),
            ChapterSpec::beat("b", Phase::Transition, pose(2.0), 0.25),
        ],
        &SECTION_NODES,
    )
    .unwrap();
    assert_eq!(table.total_duration(), 0.5);
    assert_eq!(table.locate(0.75), None);
}

#[test]
fn empty_table_is_rejected() {
    assert_eq!(
        ChapterTable::new(&[], &SECTION_NODES).unwrap_err(),
        ConfigError::EmptyTable
    );
}

#[test]
fn non_positive_or_non_finite_durations_are_rejected() {
    for bad in [0.0, -0.1, f32::NAN, f32::INFINITY] {
        let err = ChapterTable::new(
            &[ChapterSpec::beat("a", Phase::Intro, pose(1.0), bad)],
            &SECTION_NODES,
        )
        .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidDuration { id: "a", .. }),
            "duration {bad} gave {err:?}"
        );
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = ChapterTable::new(
        &[
            ChapterSpec::beat("a", Phase::Intro, pose(1.0), 0.5),
            ChapterSpec::beat("a", Phase::Transition, pose(2.0), 0.5),
        ],
        &SECTION_NODES,
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::DuplicateChapter("a"));
}

#[test]
fn phase_and_section_must_agree() {
    let section_without_id = ChapterSpec {
        section: None,
        ..ChapterSpec::section("s", SectionId::About, "", "", pose(1.0), 1.0)
    };
    assert_eq!(
        ChapterTable::new(&[section_without_id], &SECTION_NODES).unwrap_err(),
        ConfigError::PhaseMismatch("s")
    );

    let beat_with_id = ChapterSpec {
        section: Some(SectionId::Skills),
        ..ChapterSpec::beat("t", Phase::Transition, pose(1.0), 1.0)
    };
    assert_eq!(
        ChapterTable::new(&[beat_with_id], &SECTION_NODES).unwrap_err(),
        ConfigError::PhaseMismatch("t")
    );
}

#[test]
fn section_chapter_needs_a_node() {
    let without_about = &SECTION_NODES[1..];
    let err = ChapterTable::new(&REFERENCE_CHAPTERS, without_about).unwrap_err();
    assert_eq!(
        err,
        ConfigError::MissingSectionNode {
            chapter: "about",
            section: "about",
        }
    );
}

#[test]
fn every_section_has_a_node() {
    for id in SectionId::ALL {
        let node = find_node(&SECTION_NODES, id).unwrap();
        assert_eq!(node.label.to_lowercase(), id.as_str());
    }
}
