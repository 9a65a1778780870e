use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

use star_catcher::assets::preload;
use star_catcher::compute::SceneHooks;
use star_catcher::config::{to_cell, viewport_for, Settings};
use star_catcher::entities::{CursorKeys, SessionState, Viewport};
use star_catcher::input::{control_for, Control, KeyTracker, HOLD_WINDOW};
use star_catcher::scene::build_scene;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> SessionState {
    let assets = preload().load().unwrap();
    build_scene(Viewport { width: 1920.0, height: 768.0 }, &assets, &mut StdRng::seed_from_u64(3))
        .unwrap()
}

// ── KeyTracker ────────────────────────────────────────────────────────────────

#[test]
fn press_is_held_within_window() {
    let mut t = KeyTracker::new();
    t.record(KeyCode::Left, KeyEventKind::Press, 10);
    assert!(t.is_held(KeyCode::Left, 10));
    assert!(t.is_held(KeyCode::Left, 10 + HOLD_WINDOW));
    assert!(!t.is_held(KeyCode::Left, 11 + HOLD_WINDOW));
}

#[test]
fn repeat_refreshes_hold() {
    let mut t = KeyTracker::new();
    t.record(KeyCode::Right, KeyEventKind::Press, 1);
    t.record(KeyCode::Right, KeyEventKind::Repeat, 4);
    assert!(t.is_held(KeyCode::Right, 4 + HOLD_WINDOW));
}

#[test]
fn release_drops_key_immediately() {
    let mut t = KeyTracker::new();
    t.record(KeyCode::Up, KeyEventKind::Press, 1);
    t.record(KeyCode::Up, KeyEventKind::Release, 2);
    assert!(!t.is_held(KeyCode::Up, 2));
}

#[test]
fn wasd_and_space_alias_arrows() {
    let mut t = KeyTracker::new();
    t.record(KeyCode::Char('a'), KeyEventKind::Press, 1);
    t.record(KeyCode::Char(' '), KeyEventKind::Press, 1);
    assert_eq!(
        t.cursor_keys(1),
        CursorKeys { left: true, right: false, up: true, down: false }
    );
}

#[test]
fn simultaneous_run_and_jump() {
    let mut t = KeyTracker::new();
    t.record(KeyCode::Right, KeyEventKind::Press, 3);
    t.record(KeyCode::Up, KeyEventKind::Press, 3);
    let k = t.cursor_keys(4);
    assert!(k.right && k.up && !k.left);
}

// ── Run-loop controls ─────────────────────────────────────────────────────────

#[test]
fn quit_keys_work_any_time() {
    let s = make_state();
    assert_eq!(control_for(KeyCode::Char('q'), KeyModifiers::NONE, &s), Some(Control::Quit));
    assert_eq!(control_for(KeyCode::Esc, KeyModifiers::NONE, &s), Some(Control::Quit));
    assert_eq!(control_for(KeyCode::Char('c'), KeyModifiers::CONTROL, &s), Some(Control::Quit));
    assert_eq!(control_for(KeyCode::Char('c'), KeyModifiers::NONE, &s), None);
}

#[test]
fn restart_ignored_while_playing() {
    let s = make_state();
    assert_eq!(control_for(KeyCode::Char('r'), KeyModifiers::NONE, &s), None);
    assert_eq!(control_for(KeyCode::Char('R'), KeyModifiers::SHIFT, &s), None);
}

#[test]
fn restart_offered_after_game_over() {
    let mut s = make_state();
    s.on_hazard_contact(0);
    assert!(s.hud.restart_visible);
    assert_eq!(control_for(KeyCode::Char('r'), KeyModifiers::NONE, &s), Some(Control::Restart));
    assert_eq!(control_for(KeyCode::Char('R'), KeyModifiers::SHIFT, &s), Some(Control::Restart));
    assert_eq!(control_for(KeyCode::Left, KeyModifiers::NONE, &s), None);
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn viewport_scales_with_pixel_ratio() {
    assert_eq!(viewport_for(80, 24, 1.0), Viewport { width: 1920.0, height: 768.0 });
    assert_eq!(viewport_for(80, 24, 2.0), Viewport { width: 3840.0, height: 1536.0 });
}

#[test]
fn world_to_cell_mapping() {
    assert_eq!(to_cell(0.0, 0.0, 1.0), (0, 0));
    assert_eq!(to_cell(100.0, 450.0, 1.0), (4, 14));
    assert_eq!(to_cell(100.0, 450.0, 2.0), (2, 7));
    assert_eq!(to_cell(-1.0, -1.0, 1.0), (-1, -1));
}

#[test]
fn settings_defaults() {
    let s = Settings::parse_from(["star_catcher"]);
    assert_eq!(s.seed, None);
    assert_eq!(s.pixel_ratio, 1.0);
    assert!(s.log_file.is_none());
    assert!(!s.bell);
}

#[test]
fn settings_flags() {
    let s = Settings::parse_from([
        "star_catcher",
        "--seed",
        "7",
        "--pixel-ratio",
        "1.5",
        "--log-file",
        "game.log",
        "--bell",
    ]);
    assert_eq!(s.seed, Some(7));
    assert_eq!(s.pixel_ratio, 1.5);
    assert_eq!(s.log_file.as_deref(), Some(std::path::Path::new("game.log")));
    assert!(s.bell);
}
