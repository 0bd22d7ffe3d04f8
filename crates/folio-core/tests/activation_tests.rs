// Activation state derivation, chrome visibility and the progress indicator.

use folio_core::*;
use glam::Vec3;

fn reference() -> ChapterTable {
    ChapterTable::reference().unwrap()
}

#[test]
fn not_started_is_always_intro() {
    let table = reference();
    for p in [0.0, 0.2, 0.9] {
        let r = resolve(p, &table).unwrap();
        assert_eq!(
            Activation::derive(false, &r, &table, &SECTION_NODES),
            Activation::Intro
        );
    }
}

#[test]
fn states_follow_the_story() {
    let table = reference();
    let at = |index, cp| {
        let r = ResolvedState::at(&table, index, cp);
        Activation::derive(true, &r, &table, &SECTION_NODES)
    };
    // intro beat looks at the origin, away from every node
    assert_eq!(at(0, 0.5), Activation::Transition);
    // approach-about looks straight at the about node
    assert_eq!(at(2, 0.5), Activation::SectionApproach(SectionId::About));
    // zooming into about: label only
    assert_eq!(at(3, 0.2), Activation::SectionApproach(SectionId::About));
    assert_eq!(at(3, 0.5), Activation::SectionActive(SectionId::About));
    assert_eq!(at(15, 0.9), Activation::SectionActive(SectionId::Contact));
}

#[test]
fn nearby_section_uses_look_at_distance() {
    let chapter = Chapter {
        id: "probe",
        phase: Phase::Transition,
        section: None,
        title: "",
        subtitle: "",
        camera: CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(2.9, 2.0, -1.0)),
        duration: 1.0,
        scroll_start: 0.0,
        scroll_end: 1.0,
    };
    assert_eq!(
        nearby_section(&chapter, &SECTION_NODES),
        Some(SectionId::Projects)
    );
    let far = Chapter {
        camera: CameraPose::new(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0)),
        ..chapter
    };
    assert_eq!(nearby_section(&far, &SECTION_NODES), None);
}

#[test]
fn intro_chrome_shows_only_the_entry_screen() {
    let table = reference();
    let r = ResolvedState::at(&table, 0, 0.0);
    let view = ChromeView::new(Activation::Intro, &r, &table);
    assert!(view.entry_overlay && view.orbit_controls);
    assert!(view.overlay.is_none());
    assert!(!view.progress_dots && !view.scroll_hint && !view.social_links);
}

#[test]
fn active_section_takes_over_the_viewport() {
    let table = reference();
    let r = ResolvedState::at(&table, 6, 0.65);
    let activation = Activation::derive(true, &r, &table, &SECTION_NODES);
    let view = ChromeView::new(activation, &r, &table);
    let overlay = view.overlay.unwrap();
    assert_eq!(overlay.section, SectionId::Projects);
    assert!((overlay.progress - 0.5).abs() < 1e-5);
    assert!(view.is_section_active());
    assert!(view.title.is_none());
    assert!(!view.progress_dots && !view.scroll_hint && !view.social_links);
    assert!(!view.entry_overlay);
}

#[test]
fn transition_chrome_shows_titles_when_present() {
    let pose = CameraPose::new(Vec3::new(0.0, 0.0, 20.0), Vec3::new(0.0, 20.0, 0.0));
    let table = ChapterTable::new(
        &[
            ChapterSpec {
                title: "HELLO",
                subtitle: "world",
                ..ChapterSpec::beat("titled", Phase::Transition, pose, 0.5)
            },
            ChapterSpec::beat("plain", Phase::Transition, pose, 0.5),
        ],
        &SECTION_NODES,
    )
    .unwrap();

    let r = ResolvedState::at(&table, 0, 0.5);
    let view = ChromeView::new(Activation::derive(true, &r, &table, &SECTION_NODES), &r, &table);
    assert_eq!(view.title, Some(("HELLO", "world")));
    assert!(view.progress_dots && view.scroll_hint && view.social_links);

    let r = ResolvedState::at(&table, 1, 0.5);
    let view = ChromeView::new(Activation::derive(true, &r, &table, &SECTION_NODES), &r, &table);
    assert_eq!(view.title, None);
}

#[test]
fn labels_follow_approach_and_activation() {
    assert_eq!(Activation::Transition.labelled_section(), None);
    assert_eq!(
        Activation::SectionApproach(SectionId::Skills).labelled_section(),
        Some(SectionId::Skills)
    );
    assert_eq!(
        Activation::SectionActive(SectionId::Skills).active_section(),
        Some(SectionId::Skills)
    );
    assert_eq!(Activation::SectionApproach(SectionId::Skills).active_section(), None);
}

#[test]
fn progress_dots_mark_active_and_past_sections() {
    let table = reference();
    let dots = progress_dots(&table, 0.2);
    assert_eq!(dots.len(), 5);
    assert_eq!(dots[0].state, DotState::Active);
    assert_eq!(dots[0].title, "ABOUT ME");
    assert!(dots[1..].iter().all(|d| d.state == DotState::Upcoming));

    let dots = progress_dots(&table, 0.5);
    let states: Vec<_> = dots.iter().map(|d| d.state).collect();
    assert_eq!(
        states,
        vec![
            DotState::Past,
            DotState::Past,
            DotState::Upcoming,
            DotState::Upcoming,
            DotState::Upcoming,
        ]
    );
}

#[test]
fn scrolling_backward_replays_states_in_reverse() {
    let table = reference();
    let samples: Vec<f32> = (0..200).map(|i| i as f32 / 200.0).collect();
    let forward: Vec<Activation> = samples
        .iter()
        .map(|&p| Activation::derive(true, &resolve(p, &table).unwrap(), &table, &SECTION_NODES))
        .collect();
    let mut backward: Vec<Activation> = samples
        .iter()
        .rev()
        .map(|&p| Activation::derive(true, &resolve(p, &table).unwrap(), &table, &SECTION_NODES))
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}
