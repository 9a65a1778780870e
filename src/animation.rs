/// Clip playback for sprites.
///
/// An `Animator` holds at most one running clip and advances it by wall
/// time.  Looping clips wrap; one-shot clips stop on their last frame.

use crate::assets::{ClipDef, Repeat};

#[derive(Clone, Debug, PartialEq)]
pub struct Animator {
    clip: Option<ClipDef>,
    /// Offset into the clip's frame range.
    cursor: usize,
    elapsed: f32,
    finished: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self { clip: None, cursor: 0, elapsed: 0.0, finished: false }
    }

    /// Start `clip`.  With `ignore_if_playing`, asking for the clip that is
    /// already running leaves it untouched instead of rewinding it.
    ///
    /// Returns `true` if playback (re)started.
    pub fn play(&mut self, clip: &ClipDef, ignore_if_playing: bool) -> bool {
        if ignore_if_playing && self.current_key() == Some(clip.key) && !self.finished {
            return false;
        }
        self.clip = Some(clip.clone());
        self.cursor = 0;
        self.elapsed = 0.0;
        self.finished = false;
        true
    }

    pub fn update(&mut self, dt: f32) {
        let Some(clip) = &self.clip else { return };
        if self.finished || clip.frame_rate == 0 {
            return;
        }
        self.elapsed += dt;
        let step = 1.0 / clip.frame_rate as f32;
        while self.elapsed >= step {
            self.elapsed -= step;
            if self.cursor + 1 < clip.frame_len() {
                self.cursor += 1;
            } else if clip.repeat == Repeat::Forever {
                self.cursor = 0;
            } else {
                self.finished = true;
                self.elapsed = 0.0;
                break;
            }
        }
    }

    pub fn current_key(&self) -> Option<&'static str> {
        self.clip.as_ref().map(|c| c.key)
    }

    /// Absolute frame index into the clip's spritesheet.
    pub fn frame(&self) -> usize {
        self.clip.as_ref().map(|c| c.start + self.cursor).unwrap_or(0)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk() -> ClipDef {
        ClipDef { key: "walk", sheet: "dude", start: 4, end: 6, frame_rate: 10, repeat: Repeat::Forever }
    }

    fn fall() -> ClipDef {
        ClipDef { key: "fall", sheet: "dude", start: 10, end: 11, frame_rate: 10, repeat: Repeat::Once }
    }

    #[test]
    fn play_sets_first_frame() {
        let mut a = Animator::new();
        assert!(a.play(&walk(), true));
        assert_eq!(a.current_key(), Some("walk"));
        assert_eq!(a.frame(), 4);
    }

    #[test]
    fn ignore_if_playing_keeps_cursor() {
        let mut a = Animator::new();
        a.play(&walk(), true);
        a.update(0.1);
        assert_eq!(a.frame(), 5);
        assert!(!a.play(&walk(), true));
        assert_eq!(a.frame(), 5);
        // without the flag the clip rewinds
        assert!(a.play(&walk(), false));
        assert_eq!(a.frame(), 4);
    }

    #[test]
    fn looping_clip_wraps() {
        let mut a = Animator::new();
        a.play(&walk(), true);
        a.update(0.1);
        a.update(0.1);
        a.update(0.1);
        assert_eq!(a.frame(), 4);
        assert!(!a.is_finished());
    }

    #[test]
    fn one_shot_clip_holds_last_frame() {
        let mut a = Animator::new();
        a.play(&fall(), true);
        for _ in 0..10 {
            a.update(0.1);
        }
        assert_eq!(a.frame(), 11);
        assert!(a.is_finished());
    }

    #[test]
    fn empty_animator_reports_frame_zero() {
        let a = Animator::new();
        assert_eq!(a.current_key(), None);
        assert_eq!(a.frame(), 0);
    }
}
