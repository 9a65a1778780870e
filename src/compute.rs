/// Game rules.
///
/// The host drives a session through the three `SceneHooks` callbacks.  They
/// only touch `SessionState`; physics, drawing and sound output belong to the
/// host.  All randomness comes through an injected RNG so tests can seed it.

use rand::Rng;
use tracing::{debug, info, trace};

use crate::constants::{
    ARENA_SPAWN_MAX_X, ARENA_SPLIT_X, DEATH_TINT, HAZARD_BOUNCE, HAZARD_FALL_SPEED,
    HAZARD_MAX_DRIFT_X, HAZARD_SPAWN_Y, PLAYER_JUMP_SPEED, PLAYER_RUN_SPEED, SCORE_PER_STAR,
};
use crate::entities::{CursorKeys, GameStatus, Hazard, SessionState, Sound};
use crate::physics::{Body, Vec2};

/// Callbacks a host run loop invokes on a session.
pub trait SceneHooks {
    /// Once per rendered frame, with freshly sampled keys and whether the
    /// player is standing on a platform.
    fn on_frame(&mut self, keys: CursorKeys, grounded: bool);

    /// The player overlaps the star at `index`.
    fn on_collect<R: Rng>(&mut self, index: usize, rng: &mut R);

    /// The player collides with the hazard at `index`.
    fn on_hazard_contact(&mut self, index: usize);
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// Pick a spawn column on the opposite half of the arena from the player.
pub fn hazard_spawn_x(player_x: f32, rng: &mut impl Rng) -> f32 {
    let x = if player_x < ARENA_SPLIT_X as f32 {
        rng.gen_range(ARENA_SPLIT_X..ARENA_SPAWN_MAX_X)
    } else {
        rng.gen_range(0..ARENA_SPLIT_X)
    };
    x as f32
}

/// Build a fresh hazard: fully elastic, kept inside the arena, drifting down.
pub fn spawn_hazard(player_x: f32, size: Vec2, rng: &mut impl Rng) -> Hazard {
    let x = hazard_spawn_x(player_x, rng);
    let mut body = Body::new(Vec2::new(x, HAZARD_SPAWN_Y), size);
    body.bounce = Vec2::new(HAZARD_BOUNCE, HAZARD_BOUNCE);
    body.collide_world_bounds = true;
    body.velocity = Vec2::new(
        rng.gen_range(-HAZARD_MAX_DRIFT_X..=HAZARD_MAX_DRIFT_X) as f32,
        HAZARD_FALL_SPEED,
    );
    Hazard { body }
}

impl SceneHooks for SessionState {
    fn on_frame(&mut self, keys: CursorKeys, grounded: bool) {
        let player = &mut self.player;

        if player.dead {
            player.body.velocity.x = 0.0;
            if !self.death_anim_played {
                player.animator.play(&self.clips.death, false);
                self.death_anim_played = true;
            }
            return;
        }

        if keys.left {
            player.body.velocity.x = -PLAYER_RUN_SPEED;
            player.animator.play(&self.clips.left, true);
        } else if keys.right {
            player.body.velocity.x = PLAYER_RUN_SPEED;
            player.animator.play(&self.clips.right, true);
        } else {
            player.body.velocity.x = 0.0;
            player.animator.play(&self.clips.idle, true);
        }

        // Not latched: fires on every grounded frame the key is held.
        if keys.up && grounded {
            player.body.velocity.y = -PLAYER_JUMP_SPEED;
            self.cues.push(Sound::Jump);
            trace!(frame = self.frame, "Jump");
        }
    }

    fn on_collect<R: Rng>(&mut self, index: usize, rng: &mut R) {
        if self.stars.get(index).map_or(true, |s| !s.is_active()) {
            return;
        }

        self.cues.push(Sound::Pickup);
        self.stars.deactivate(index);
        self.score += SCORE_PER_STAR;
        self.hud.score_text.text = score_label(self.score);
        debug!(index, score = self.score, "Star collected");

        if self.stars.count_active() != 0 {
            return;
        }

        self.stars.reactivate_all();
        self.cues.push(Sound::WaveComplete);

        let hazard = spawn_hazard(self.player.body.center.x, self.hazard_size, rng);
        info!(
            x = hazard.body.center.x,
            vx = hazard.body.velocity.x,
            hazards = self.hazards.len() + 1,
            "Wave complete, hazard spawned"
        );
        self.hazards.push(hazard);
    }

    fn on_hazard_contact(&mut self, index: usize) {
        if self.status == GameStatus::GameOver {
            return;
        }

        self.cues.push(Sound::GameOver);
        self.paused = true;
        self.player.tint = Some(DEATH_TINT);
        self.player.dead = true;
        self.hud.game_over_text.visible = true;
        self.hud.restart_visible = true;
        self.status = GameStatus::GameOver;
        info!(hazard = index, score = self.score, "Game over");
    }
}
