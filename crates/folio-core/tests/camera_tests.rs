// Camera targets (intro orbit, chapter interpolation, section zoom) and rig smoothing.

use folio_core::*;
use glam::Vec3;

fn close(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).length() < eps
}

#[test]
fn ease_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(0.5), 0.5);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
}

#[test]
fn ease_is_monotonic_and_symmetric() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let t = i as f32 / 100.0;
        let e = ease_in_out_cubic(t);
        assert!(e >= prev, "not monotonic at {t}");
        assert!((e + ease_in_out_cubic(1.0 - t) - 1.0).abs() < 1e-5);
        prev = e;
    }
}

#[test]
fn transition_chapter_lerps_toward_next_pose() {
    let table = ChapterTable::reference().unwrap();
    // approach-about (-2,1.5,8) -> about (-4,1.5,4), both looking at (-3,1.5,2)
    let start = ResolvedState::at(&table, 2, 0.0);
    let pose = interpolate(CameraDrive::Narrative(&start), &table, &SECTION_NODES);
    assert_eq!(pose, table.get(2).unwrap().camera);

    let mid = ResolvedState::at(&table, 2, 0.5);
    let pose = interpolate(CameraDrive::Narrative(&mid), &table, &SECTION_NODES);
    assert!(close(pose.position, Vec3::new(-3.0, 1.5, 6.0), 1e-5));
    assert!(close(pose.target, Vec3::new(-3.0, 1.5, 2.0), 1e-5));
}

#[test]
fn transition_uses_eased_fraction() {
    let table = ChapterTable::reference().unwrap();
    let r = ResolvedState::at(&table, 0, 0.25);
    let pose = interpolate(CameraDrive::Narrative(&r), &table, &SECTION_NODES);
    // intro z=22 -> name-reveal z=14; ease(0.25) = 0.0625
    assert!((pose.position.z - (22.0 - 8.0 * 0.0625)).abs() < 1e-4);
}

#[test]
fn section_zoom_completes_at_thirty_percent_and_holds() {
    let table = ChapterTable::reference().unwrap();
    let node = find_node(&SECTION_NODES, SectionId::About).unwrap().position;
    let zoomed = node + Vec3::new(0.0, 0.0, 1.5);

    for cp in [0.3, 0.5, 0.9, 1.0] {
        let r = ResolvedState::at(&table, 3, cp);
        let pose = interpolate(CameraDrive::Narrative(&r), &table, &SECTION_NODES);
        assert!(close(pose.position, zoomed, 1e-5), "cp={cp}");
        assert_eq!(pose.target, node);
    }

    let half = ResolvedState::at(&table, 3, 0.15);
    let pose = interpolate(CameraDrive::Narrative(&half), &table, &SECTION_NODES);
    let declared = table.get(3).unwrap().camera.position;
    assert!(close(pose.position, declared.lerp(zoomed, 0.5), 1e-5));
}

#[test]
fn section_chapter_without_node_keeps_declared_pose() {
    let table = ChapterTable::reference().unwrap();
    let r = ResolvedState::at(&table, 3, 0.5);
    let pose = interpolate(CameraDrive::Narrative(&r), &table, &SECTION_NODES[1..]);
    assert_eq!(pose, table.get(3).unwrap().camera);
}

#[test]
fn intro_orbit_ignores_scroll_state() {
    let table = ChapterTable::reference().unwrap();
    let expected = orbit_pose(3.0);
    assert_eq!(
        interpolate(CameraDrive::Intro { elapsed: 3.0 }, &table, &SECTION_NODES),
        expected
    );
    assert_eq!(expected.target, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(expected.position.z, 12.0);
}

#[test]
fn intro_orbit_starts_on_axis_and_is_periodic() {
    let p0 = orbit_pose(0.0);
    assert!(close(p0.position, Vec3::new(0.0, -1.5, 12.0), 1e-6));
    // x repeats every 2π/0.15 s and y every 2π/0.105 s; both line up at 20π/0.15
    let period = 20.0 * std::f32::consts::PI / 0.15;
    assert!(close(orbit_pose(period).position, p0.position, 1e-2));
    assert!(!close(orbit_pose(period * 0.5).position, p0.position, 1e-2));
}

#[test]
fn rig_converges_on_a_still_target() {
    let mut rig = CameraRig::default();
    let target = CameraPose::new(Vec3::new(3.0, 1.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
    for _ in 0..600 {
        rig.step(target, false, 1.0 / 60.0);
    }
    assert!(close(rig.pose().position, target.position, 1e-3));
    assert!(close(rig.pose().target, target.target, 1e-3));
}

#[test]
fn rig_never_snaps_in_one_tick() {
    let mut rig = CameraRig::new(RigParams {
        smoothing: Smoothing::PerFrame,
        ..RigParams::default()
    });
    let start = rig.pose();
    let target = CameraPose::new(start.position + Vec3::new(10.0, 0.0, 0.0), start.target);
    let after = rig.step(target, false, 1.0 / 60.0);
    assert!((after.position.x - start.position.x - 0.6).abs() < 1e-4);

    let mut intro_rig = CameraRig::new(RigParams {
        smoothing: Smoothing::PerFrame,
        ..RigParams::default()
    });
    let after = intro_rig.step(target, true, 1.0 / 60.0);
    assert!((after.position.x - start.position.x - 0.2).abs() < 1e-4);
}

#[test]
fn time_scaled_smoothing_matches_per_frame_at_reference_rate() {
    let scaled = blend_factor(0.06, 1.0 / 60.0, Smoothing::TimeScaled { reference_hz: 60.0 });
    assert!((scaled - 0.06).abs() < 1e-4);
    assert_eq!(blend_factor(0.06, 0.5, Smoothing::PerFrame), 0.06);
}

#[test]
fn time_scaled_smoothing_is_frame_rate_independent() {
    let target = CameraPose::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
    let mut at_60 = CameraRig::default();
    let mut at_120 = CameraRig::default();
    for _ in 0..60 {
        at_60.step(target, false, 1.0 / 60.0);
    }
    for _ in 0..120 {
        at_120.step(target, false, 1.0 / 120.0);
    }
    assert!(close(at_60.pose().position, at_120.pose().position, 1e-3));
}

#[test]
fn camera_matrices_follow_pose() {
    let pose = CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let cam = Camera::from_pose(pose, 16.0 / 9.0);
    let view = cam.view_matrix();
    // the look-at target ends up straight ahead on -Z in view space
    let p = view.transform_point3(Vec3::ZERO);
    assert!(close(p, Vec3::new(0.0, 0.0, -5.0), 1e-5));
    let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
    assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
}
