/// Scene construction: turns loaded assets and a viewport into the initial
/// session state, and declares which body groups interact.

use rand::Rng;
use tracing::info;

use crate::animation::Animator;
use crate::assets::{
    Assets, BOMB, BOTTOM, CLIP_DEATH, CLIP_IDLE, CLIP_LEFT, CLIP_RIGHT, CLIP_STAR, DUDE_SHEET,
    GROUND, STARS_SHEET,
};
use crate::compute::score_label;
use crate::constants::{
    GAME_OVER_TEXT, GAME_OVER_TEXT_Y, GROUND_OFFSET, LEDGES, PLAYER_BOUNCE,
    PLAYER_GRAVITY_Y, PLAYER_SCALE, PLAYER_START_X, PLAYER_START_Y, SCORE_TEXT_POS,
    STAR_BOUNCE_MAX, STAR_BOUNCE_MIN, STAR_COUNT, STAR_FIRST_X, STAR_STEP_X, WORLD_GRAVITY_Y,
};
use crate::entities::{
    Collectible, CollectiblePool, GameStatus, HazardPool, Hud, Player, PlayerClips,
    SessionState, TextOverlay, Viewport,
};
use crate::error::GameError;
use crate::physics::{Body, Rect, StaticBody, Vec2, World};

/// Dynamic body groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    Player,
    Stars,
    Hazards,
}

/// An interaction the host evaluates every physics step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pairing {
    /// Move the group and separate it from the static platforms.
    Platforms(Group),
    /// Player passes through stars; the collect hook fires.
    OverlapCollect,
    /// Player bumps a hazard; the hazard hook fires.
    CollideHazard,
}

/// Collision registry in the order the host evaluates it.
pub fn pairings() -> Vec<Pairing> {
    vec![
        Pairing::Platforms(Group::Player),
        Pairing::Platforms(Group::Stars),
        Pairing::OverlapCollect,
        Pairing::Platforms(Group::Hazards),
        Pairing::CollideHazard,
    ]
}

fn build_platforms(viewport: Viewport, assets: &Assets) -> Result<Vec<StaticBody>, GameError> {
    let bottom = assets.image(BOTTOM)?;
    let ledge = assets.image(GROUND)?;

    let mut platforms = Vec::with_capacity(LEDGES.len() + 1);
    platforms.push(StaticBody {
        center: Vec2::new(viewport.width * 0.5, viewport.height - GROUND_OFFSET),
        // stretched to the arena width
        size: Vec2::new(viewport.width, bottom.height),
    });
    for &(x, y) in LEDGES.iter() {
        platforms.push(StaticBody {
            center: Vec2::new(x, y),
            size: Vec2::new(ledge.width, ledge.height),
        });
    }
    Ok(platforms)
}

fn build_player(assets: &Assets, clips: &PlayerClips) -> Result<Player, GameError> {
    let sheet = assets.sheet(DUDE_SHEET)?;
    let mut body = Body::new(
        Vec2::new(PLAYER_START_X, PLAYER_START_Y),
        Vec2::new(sheet.frame_width * PLAYER_SCALE, sheet.frame_height * PLAYER_SCALE),
    );
    body.bounce = Vec2::new(PLAYER_BOUNCE, PLAYER_BOUNCE);
    body.collide_world_bounds = true;
    body.gravity_y = PLAYER_GRAVITY_Y;

    let mut animator = Animator::new();
    animator.play(&clips.idle, true);

    Ok(Player { body, animator, tint: None, dead: false })
}

fn build_stars(assets: &Assets, rng: &mut impl Rng) -> Result<CollectiblePool, GameError> {
    let sheet = assets.sheet(STARS_SHEET)?;
    let clip = assets.clip(CLIP_STAR)?;

    let stars = (0..STAR_COUNT)
        .map(|i| {
            let x = STAR_FIRST_X + STAR_STEP_X * i as f32;
            let mut body =
                Body::new(Vec2::new(x, 0.0), Vec2::new(sheet.frame_width, sheet.frame_height));
            body.bounce.y = rng.gen_range(STAR_BOUNCE_MIN..STAR_BOUNCE_MAX);
            let mut animator = Animator::new();
            animator.play(clip, true);
            Collectible { body, spawn_x: x, animator }
        })
        .collect();
    Ok(CollectiblePool::new(stars))
}

/// Build the initial state of a play session.
pub fn build_scene(
    viewport: Viewport,
    assets: &Assets,
    rng: &mut impl Rng,
) -> Result<SessionState, GameError> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Err(GameError::InvalidState(format!(
            "viewport must be non-empty, got {}x{}",
            viewport.width, viewport.height
        )));
    }

    let clips = PlayerClips {
        left: assets.clip(CLIP_LEFT)?.clone(),
        right: assets.clip(CLIP_RIGHT)?.clone(),
        idle: assets.clip(CLIP_IDLE)?.clone(),
        death: assets.clip(CLIP_DEATH)?.clone(),
    };

    let platforms = build_platforms(viewport, assets)?;
    let player = build_player(assets, &clips)?;
    let stars = build_stars(assets, rng)?;
    let bomb = assets.image(BOMB)?;

    let hud = Hud {
        score_text: TextOverlay {
            text: score_label(0),
            position: Vec2::new(SCORE_TEXT_POS.0, SCORE_TEXT_POS.1),
            visible: true,
        },
        game_over_text: TextOverlay {
            text: GAME_OVER_TEXT.to_string(),
            position: Vec2::new(viewport.width * 0.5, GAME_OVER_TEXT_Y),
            visible: false,
        },
        restart_visible: false,
    };

    info!(
        width = viewport.width,
        height = viewport.height,
        platforms = platforms.len(),
        stars = stars.capacity(),
        "Scene built"
    );

    Ok(SessionState {
        viewport,
        world: World {
            gravity_y: WORLD_GRAVITY_Y,
            bounds: Rect { x: 0.0, y: 0.0, w: viewport.width, h: viewport.height },
        },
        player,
        clips,
        platforms,
        stars,
        hazards: HazardPool::default(),
        hazard_size: Vec2::new(bomb.width, bomb.height),
        score: 0,
        status: GameStatus::Playing,
        death_anim_played: false,
        paused: false,
        hud,
        cues: Vec::new(),
        frame: 0,
    })
}
