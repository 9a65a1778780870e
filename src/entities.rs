/// All session entity types — pure data, no game rules.

use crate::animation::Animator;
use crate::assets::ClipDef;
use crate::physics::{Body, StaticBody, Vec2, World};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Sound cues raised by the game rules; the host decides how to play them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Pickup,
    Jump,
    WaveComplete,
    GameOver,
}

impl Sound {
    /// Logical name of the audio asset behind this cue.
    pub fn asset_key(self) -> &'static str {
        match self {
            Sound::Pickup => "star-audio",
            Sound::Jump => "jump-audio",
            Sound::WaveComplete => "update-audio",
            Sound::GameOver => "gameover-audio",
        }
    }
}

/// Directional key state, sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    /// Sampled but unused by the rules.
    pub down: bool,
}

/// Capture-once arena size in world pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    pub animator: Animator,
    pub tint: Option<u32>,
    pub dead: bool,
}

// ── Collectibles ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Collectible {
    pub body: Body,
    /// Column the star drops back in when the pool is refilled.
    pub spawn_x: f32,
    pub animator: Animator,
}

impl Collectible {
    pub fn is_active(&self) -> bool {
        self.body.enabled
    }
}

/// Fixed-capacity pool of stars.  Individual stars are switched off on
/// pickup; the whole pool comes back together.
#[derive(Clone, Debug, Default)]
pub struct CollectiblePool {
    items: Vec<Collectible>,
}

impl CollectiblePool {
    pub fn new(items: Vec<Collectible>) -> Self {
        Self { items }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn count_active(&self) -> usize {
        self.items.iter().filter(|c| c.is_active()).count()
    }

    pub fn get(&self, index: usize) -> Option<&Collectible> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Collectible> {
        self.items.iter_mut()
    }

    /// Switch one star off.  Returns `false` if it was already inactive.
    pub fn deactivate(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(c) if c.is_active() => {
                c.body.disable();
                true
            }
            _ => false,
        }
    }

    /// Bring every star back at its spawn column, top of the arena.
    pub fn reactivate_all(&mut self) {
        for c in &mut self.items {
            c.body.reset(Vec2::new(c.spawn_x, 0.0));
        }
    }
}

// ── Hazards ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Hazard {
    pub body: Body,
}

/// Grows by one per cleared wave; never shrinks within a session.
#[derive(Clone, Debug, Default)]
pub struct HazardPool {
    items: Vec<Hazard>,
}

impl HazardPool {
    pub fn push(&mut self, hazard: Hazard) {
        self.items.push(hazard);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Hazard> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hazard> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Hazard> {
        self.items.iter_mut()
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct TextOverlay {
    pub text: String,
    pub position: Vec2,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub score_text: TextOverlay,
    pub game_over_text: TextOverlay,
    pub restart_visible: bool,
}

/// Clip definitions the rules switch between, resolved once at scene build.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerClips {
    pub left: ClipDef,
    pub right: ClipDef,
    pub idle: ClipDef,
    pub death: ClipDef,
}

// ── Master session state ──────────────────────────────────────────────────────

/// Everything one play session owns.  Built by the scene builder, mutated by
/// the hooks and the physics step, dropped on restart.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub viewport: Viewport,
    pub world: World,
    pub player: Player,
    pub clips: PlayerClips,
    pub platforms: Vec<StaticBody>,
    pub stars: CollectiblePool,
    pub hazards: HazardPool,
    /// Body size given to every newly spawned hazard.
    pub hazard_size: Vec2,
    pub score: u32,
    pub status: GameStatus,
    /// One-shot latch for the death clip.
    pub death_anim_played: bool,
    /// Simulation frozen; bodies no longer advance.
    pub paused: bool,
    pub hud: Hud,
    /// Cues raised since the host last drained them.
    pub cues: Vec<Sound>,
    pub frame: u64,
}

impl SessionState {
    pub fn drain_cues(&mut self) -> Vec<Sound> {
        std::mem::take(&mut self.cues)
    }
}
