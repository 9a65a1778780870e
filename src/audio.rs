/// Sound output.
///
/// The rules only raise `Sound` cues.  A terminal cannot mix audio, so the
/// terminal sink shows the most recent cue as a HUD caption for a short while
/// and can optionally ring the terminal bell.

use tracing::trace;

use crate::entities::Sound;

pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// Frames a caption stays on screen.
pub const CAPTION_FRAMES: u32 = 20;

#[derive(Debug, Default)]
pub struct TerminalAudio {
    bell: bool,
    caption: Option<(Sound, u32)>,
    pending_bell: bool,
}

impl TerminalAudio {
    pub fn new(bell: bool) -> Self {
        Self { bell, caption: None, pending_bell: false }
    }

    /// Age the caption by one frame.
    pub fn tick(&mut self) {
        let expired = match &mut self.caption {
            Some((_, frames)) => {
                *frames = frames.saturating_sub(1);
                *frames == 0
            }
            None => false,
        };
        if expired {
            self.caption = None;
        }
    }

    pub fn caption(&self) -> Option<Sound> {
        self.caption.map(|(s, _)| s)
    }

    /// Whether a bell should be written this frame.  Clears the request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.pending_bell)
    }
}

impl AudioSink for TerminalAudio {
    fn play(&mut self, sound: Sound) {
        trace!(asset = sound.asset_key(), "Play sound");
        self.caption = Some((sound, CAPTION_FRAMES));
        // jumps are too frequent to beep on
        if self.bell && sound != Sound::Jump {
            self.pending_bell = true;
        }
    }
}
