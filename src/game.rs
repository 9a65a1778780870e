/// Arcade host: the run-loop side of a session.
///
/// Each `advance` is one rendered frame.  Unless the session is paused, every
/// dynamic body is stepped and the registry's overlap/collision pairs are
/// dispatched to the hooks; then animations tick and the frame hook runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::assets::{preload, Assets};
use crate::compute::SceneHooks;
use crate::constants::DT;
use crate::entities::{CursorKeys, SessionState, Viewport};
use crate::error::GameError;
use crate::physics::step_body;
use crate::scene::{build_scene, pairings, Group, Pairing};

/// One play session: the running arcade plus what was loaded for it.
pub struct Session {
    pub arcade: Arcade,
    pub assets: Assets,
    pub rng: StdRng,
}

impl Session {
    /// Everything a fresh page load does.  A restart calls this again and
    /// drops the old session whole.
    pub fn start(viewport: Viewport, seed: Option<u64>) -> Result<Self, GameError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let assets = preload().load()?;
        let state = build_scene(viewport, &assets, &mut rng)?;
        info!(seeded = seed.is_some(), "Session started");
        Ok(Self { arcade: Arcade::new(state), assets, rng })
    }
}

pub struct Arcade {
    pub state: SessionState,
    pairings: Vec<Pairing>,
}

impl Arcade {
    pub fn new(state: SessionState) -> Self {
        Self { state, pairings: pairings() }
    }

    pub fn advance<R: Rng>(&mut self, keys: CursorKeys, rng: &mut R) {
        self.state.frame += 1;

        if !self.state.paused {
            for i in 0..self.pairings.len() {
                let pairing = self.pairings[i];
                self.dispatch(pairing, rng);
            }
        }

        let state = &mut self.state;
        state.player.animator.update(DT);
        for star in state.stars.iter_mut().filter(|s| s.is_active()) {
            star.animator.update(DT);
        }

        let grounded = state.player.body.touching_down;
        state.on_frame(keys, grounded);
    }

    fn dispatch<R: Rng>(&mut self, pairing: Pairing, rng: &mut R) {
        let state = &mut self.state;
        match pairing {
            Pairing::Platforms(Group::Player) => {
                step_body(&mut state.player.body, &state.platforms, &state.world, DT);
            }
            Pairing::Platforms(Group::Stars) => {
                for star in state.stars.iter_mut() {
                    step_body(&mut star.body, &state.platforms, &state.world, DT);
                }
            }
            Pairing::Platforms(Group::Hazards) => {
                for hazard in state.hazards.iter_mut() {
                    step_body(&mut hazard.body, &state.platforms, &state.world, DT);
                }
            }
            Pairing::OverlapCollect => {
                let touching: Vec<usize> = state
                    .stars
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.body.overlaps(&state.player.body))
                    .map(|(i, _)| i)
                    .collect();
                for i in touching {
                    // An earlier pickup this step may have refilled the pool.
                    let still_touching = state
                        .stars
                        .get(i)
                        .is_some_and(|s| s.body.overlaps(&state.player.body));
                    if still_touching {
                        state.on_collect(i, rng);
                    }
                }
            }
            Pairing::CollideHazard => {
                let hits: Vec<usize> = state
                    .hazards
                    .iter()
                    .enumerate()
                    .filter(|(_, h)| h.body.overlaps(&state.player.body))
                    .map(|(i, _)| i)
                    .collect();
                for i in hits {
                    state.on_hazard_contact(i);
                }
            }
        }
    }
}
