use star_catcher::assets::{preload, CLIP_IDLE, CLIP_STAR};
use star_catcher::entities::*;
use star_catcher::error::GameError;
use star_catcher::physics::Vec2;
use star_catcher::scene::*;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

const VIEWPORT: Viewport = Viewport { width: 1920.0, height: 768.0 };

fn build(seed: u64) -> SessionState {
    let assets = preload().load().unwrap();
    build_scene(VIEWPORT, &assets, &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn player_starts_at_spawn() {
    let s = build(1);
    let p = &s.player;
    assert_eq!(p.body.center, Vec2::new(100.0, 450.0));
    assert_eq!(p.body.size, Vec2::new(64.0, 64.0)); // 32×32 frame at scale 2
    assert_eq!(p.body.bounce, Vec2::new(0.2, 0.2));
    assert_eq!(p.body.gravity_y, 300.0);
    assert!(p.body.collide_world_bounds);
    assert_eq!(p.animator.current_key(), Some(CLIP_IDLE));
    assert!(!p.dead);
    assert_eq!(p.tint, None);
}

#[test]
fn platforms_laid_out() {
    let s = build(1);
    assert_eq!(s.platforms.len(), 6);

    let slab = &s.platforms[0];
    assert_eq!(slab.center, Vec2::new(960.0, 718.0));
    assert_eq!(slab.size.x, 1920.0);

    let centres: Vec<Vec2> = s.platforms[1..].iter().map(|p| p.center).collect();
    assert_eq!(
        centres,
        vec![
            Vec2::new(900.0, 450.0),
            Vec2::new(1300.0, 250.0),
            Vec2::new(1600.0, 550.0),
            Vec2::new(300.0, 350.0),
            Vec2::new(600.0, 620.0),
        ]
    );
    assert!(s.platforms[1..].iter().all(|p| p.size == Vec2::new(400.0, 32.0)));
}

#[test]
fn fourteen_stars_in_a_row() {
    let s = build(1);
    assert_eq!(s.stars.capacity(), 14);
    assert_eq!(s.stars.count_active(), 14);
    for (i, star) in s.stars.iter().enumerate() {
        let x = 120.0 + 120.0 * i as f32;
        assert_eq!(star.body.center, Vec2::new(x, 0.0));
        assert_eq!(star.spawn_x, x);
        assert!(star.body.bounce.y >= 0.4 && star.body.bounce.y < 0.8);
        assert_eq!(star.animator.current_key(), Some(CLIP_STAR));
    }
}

#[test]
fn star_bounce_follows_seed() {
    let a: Vec<f32> = build(7).stars.iter().map(|s| s.body.bounce.y).collect();
    let b: Vec<f32> = build(7).stars.iter().map(|s| s.body.bounce.y).collect();
    assert_eq!(a, b);
}

#[test]
fn hud_starts_hidden_except_score() {
    let s = build(1);
    assert_eq!(s.hud.score_text.text, "Score: 0");
    assert!(s.hud.score_text.visible);
    assert_eq!(s.hud.score_text.position, Vec2::new(16.0, 16.0));
    assert_eq!(s.hud.game_over_text.text, "Game Over");
    assert_eq!(s.hud.game_over_text.position, Vec2::new(960.0, 350.0));
    assert!(!s.hud.game_over_text.visible);
    assert!(!s.hud.restart_visible);
}

#[test]
fn session_flags_start_clear() {
    let s = build(1);
    assert_eq!(s.score, 0);
    assert_eq!(s.status, GameStatus::Playing);
    assert!(!s.paused);
    assert!(!s.death_anim_played);
    assert!(s.hazards.is_empty());
    assert_eq!(s.hazard_size, Vec2::new(32.0, 32.0));
    assert_eq!(s.world.gravity_y, 300.0);
    assert_eq!(s.world.bounds.w, 1920.0);
    assert!(s.cues.is_empty());
}

#[test]
fn empty_viewport_rejected() {
    let assets = preload().load().unwrap();
    let result = build_scene(
        Viewport { width: 0.0, height: 600.0 },
        &assets,
        &mut StdRng::seed_from_u64(1),
    );
    assert!(matches!(result, Err(GameError::InvalidState(_))));
}

#[test]
fn missing_asset_rejected() {
    let mut manifest = preload();
    manifest.images.retain(|i| i.key != "bomb");
    let assets = manifest.load().unwrap();
    let result = build_scene(VIEWPORT, &assets, &mut StdRng::seed_from_u64(1));
    assert!(matches!(result, Err(GameError::Asset(_))));
}

#[test]
fn registry_order() {
    assert_eq!(
        pairings(),
        vec![
            Pairing::Platforms(Group::Player),
            Pairing::Platforms(Group::Stars),
            Pairing::OverlapCollect,
            Pairing::Platforms(Group::Hazards),
            Pairing::CollideHazard,
        ]
    );
}
