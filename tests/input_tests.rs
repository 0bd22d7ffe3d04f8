// Host-side tests for the intro drag-to-explore math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use folio_core::{CameraPose, ChapterTable, StorySession, SECTION_NODES};
use glam::{Vec2, Vec3};
use input::*;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn drag_only_moves_while_active() {
    let mut d = DragState::default();
    d.drag_to(Vec2::new(400.0, 300.0), VIEWPORT);
    assert_eq!(d.yaw, 0.0);

    d.begin(Vec2::new(400.0, 300.0), true);
    d.drag_to(Vec2::new(480.0, 300.0), VIEWPORT);
    assert!(d.yaw < 0.0, "dragging right swings the view left");
    let yaw = d.yaw;

    d.end();
    d.drag_to(Vec2::new(700.0, 300.0), VIEWPORT);
    assert_eq!(d.yaw, yaw);
}

#[test]
fn drag_follows_the_orbit_controls_of_the_chrome() {
    let table = ChapterTable::reference().unwrap();
    let mut session = StorySession::new(table, &SECTION_NODES);
    let mut d = DragState::default();

    d.begin(Vec2::new(400.0, 300.0), session.chrome().orbit_controls);
    assert!(d.active, "entry screen allows looking around");
    d.end();

    session.start();
    d.begin(Vec2::new(400.0, 300.0), session.chrome().orbit_controls);
    d.drag_to(Vec2::new(480.0, 300.0), VIEWPORT);
    assert!(!d.active);
    assert_eq!(d.yaw, 0.0);
}

#[test]
fn pitch_is_clamped() {
    let mut d = DragState::default();
    d.begin(Vec2::ZERO, true);
    d.drag_to(Vec2::new(0.0, -6000.0), VIEWPORT);
    assert!((d.pitch - constants::DRAG_PITCH_LIMIT).abs() < 1e-6);
    d.drag_to(Vec2::new(0.0, 6000.0), VIEWPORT);
    assert!((d.pitch + constants::DRAG_PITCH_LIMIT).abs() < 1e-6);
}

#[test]
fn relax_decays_toward_the_scripted_camera() {
    let mut d = DragState {
        active: true,
        last: Vec2::ZERO,
        yaw: 1.0,
        pitch: -0.5,
    };
    d.relax(0.5);
    assert!(!d.active);
    assert!(d.yaw > 0.0 && d.yaw < 1.0);
    assert!(d.pitch < 0.0 && d.pitch > -0.5);
    for _ in 0..100 {
        d.relax(0.1);
    }
    assert!(d.yaw.abs() < 1e-3 && d.pitch.abs() < 1e-3);
}

#[test]
fn orbit_keeps_distance_and_target() {
    let pose = CameraPose::new(Vec3::new(0.0, 1.0, 12.0), Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(apply_orbit(pose, 0.0, 0.0), pose);

    let turned = apply_orbit(pose, 0.7, 0.3);
    assert_eq!(turned.target, pose.target);
    let before = pose.position.distance(pose.target);
    let after = turned.position.distance(turned.target);
    assert!((before - after).abs() < 1e-4);
    assert!(turned.position.distance(pose.position) > 0.1);
}
