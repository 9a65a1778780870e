/// Asset declarations.
///
/// Everything the scene needs is declared here by logical name before play
/// starts.  The terminal host has no image decoder, so each visual asset also
/// carries the glyphs it is drawn with; paths are kept as logical names only.

use std::collections::HashMap;

use tracing::debug;

use crate::error::AssetError;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageAsset {
    pub key: &'static str,
    pub path: &'static str,
    pub width: f32,
    pub height: f32,
    pub glyph: char,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SheetAsset {
    pub key: &'static str,
    pub path: &'static str,
    pub frame_width: f32,
    pub frame_height: f32,
    pub frame_count: usize,
    /// Cycled by frame index when drawing.
    pub glyphs: &'static [char],
}

impl SheetAsset {
    pub fn glyph(&self, frame: usize) -> char {
        if self.glyphs.is_empty() {
            '?'
        } else {
            self.glyphs[frame % self.glyphs.len()]
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AudioAsset {
    pub key: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    Once,
}

/// A named frame range over a spritesheet.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipDef {
    pub key: &'static str,
    pub sheet: &'static str,
    pub start: usize,
    pub end: usize,
    pub frame_rate: u32,
    pub repeat: Repeat,
}

impl ClipDef {
    pub fn frame_len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// The raw declaration list, before validation.
#[derive(Clone, Debug, Default)]
pub struct AssetManifest {
    pub images: Vec<ImageAsset>,
    pub sheets: Vec<SheetAsset>,
    pub audio: Vec<AudioAsset>,
    pub clips: Vec<ClipDef>,
}

// ── Logical names ─────────────────────────────────────────────────────────────

pub const SKY: &str = "sky";
pub const BOTTOM: &str = "bottom";
pub const GROUND: &str = "ground";
pub const STAR: &str = "star";
pub const BOMB: &str = "bomb";
pub const STARS_SHEET: &str = "stars";
pub const DUDE_SHEET: &str = "dude";

pub const CLIP_LEFT: &str = "left";
pub const CLIP_IDLE: &str = "idle";
pub const CLIP_RIGHT: &str = "right";
pub const CLIP_DEATH: &str = "death";
pub const CLIP_STAR: &str = "star-anim";

/// Declare every asset the scene uses.
pub fn preload() -> AssetManifest {
    AssetManifest {
        images: vec![
            ImageAsset { key: SKY, path: "assets/sky.png", width: 800.0, height: 600.0, glyph: ' ' },
            ImageAsset { key: BOTTOM, path: "assets/bottom.png", width: 1920.0, height: 100.0, glyph: '▓' },
            ImageAsset { key: GROUND, path: "assets/platform.png", width: 400.0, height: 32.0, glyph: '▀' },
            ImageAsset { key: STAR, path: "assets/star.png", width: 32.0, height: 32.0, glyph: '*' },
            ImageAsset { key: BOMB, path: "assets/pink-skellon.png", width: 32.0, height: 32.0, glyph: '●' },
        ],
        sheets: vec![
            SheetAsset {
                key: STARS_SHEET,
                path: "assets/star-anim.png",
                frame_width: 32.0,
                frame_height: 48.0,
                frame_count: 13,
                glyphs: &['★', '✦', '☆', '✦'],
            },
            SheetAsset {
                key: DUDE_SHEET,
                path: "assets/dude.png",
                frame_width: 32.0,
                frame_height: 32.0,
                frame_count: 26,
                glyphs: &['/', '|', '\\', '|'],
            },
        ],
        audio: vec![
            AudioAsset { key: "star-audio", path: "sounds/star.wav" },
            AudioAsset { key: "jump-audio", path: "sounds/jump.wav" },
            AudioAsset { key: "update-audio", path: "sounds/update.wav" },
            AudioAsset { key: "gameover-audio", path: "sounds/gameover.wav" },
        ],
        clips: vec![
            ClipDef { key: CLIP_LEFT, sheet: DUDE_SHEET, start: 0, end: 7, frame_rate: 10, repeat: Repeat::Forever },
            ClipDef { key: CLIP_IDLE, sheet: DUDE_SHEET, start: 8, end: 13, frame_rate: 8, repeat: Repeat::Forever },
            ClipDef { key: CLIP_RIGHT, sheet: DUDE_SHEET, start: 14, end: 21, frame_rate: 10, repeat: Repeat::Forever },
            ClipDef { key: CLIP_DEATH, sheet: DUDE_SHEET, start: 22, end: 25, frame_rate: 8, repeat: Repeat::Once },
            ClipDef { key: CLIP_STAR, sheet: STARS_SHEET, start: 0, end: 12, frame_rate: 10, repeat: Repeat::Forever },
        ],
    }
}

/// Validated, name-indexed assets.
#[derive(Clone, Debug)]
pub struct Assets {
    images: HashMap<&'static str, ImageAsset>,
    sheets: HashMap<&'static str, SheetAsset>,
    audio: HashMap<&'static str, AudioAsset>,
    clips: HashMap<&'static str, ClipDef>,
}

fn index<T>(
    items: Vec<T>,
    key: impl Fn(&T) -> &'static str,
) -> Result<HashMap<&'static str, T>, AssetError> {
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let k = key(&item);
        if map.insert(k, item).is_some() {
            return Err(AssetError::DuplicateKey(k.to_string()));
        }
    }
    Ok(map)
}

impl AssetManifest {
    /// Check the declarations and index them by key.
    pub fn load(self) -> Result<Assets, AssetError> {
        for image in &self.images {
            if image.width <= 0.0 || image.height <= 0.0 {
                return Err(AssetError::EmptyFrame(image.key.to_string()));
            }
        }
        for sheet in &self.sheets {
            if sheet.frame_width <= 0.0 || sheet.frame_height <= 0.0 || sheet.frame_count == 0 {
                return Err(AssetError::EmptyFrame(sheet.key.to_string()));
            }
        }

        let images = index(self.images, |i| i.key)?;
        let sheets = index(self.sheets, |s| s.key)?;
        let audio = index(self.audio, |a| a.key)?;
        let clips = index(self.clips, |c| c.key)?;

        for clip in clips.values() {
            let sheet = sheets
                .get(clip.sheet)
                .ok_or_else(|| AssetError::NotFound(clip.sheet.to_string()))?;
            if clip.start > clip.end || clip.end >= sheet.frame_count {
                return Err(AssetError::ClipOutOfRange {
                    clip: clip.key.to_string(),
                    sheet: sheet.key.to_string(),
                    start: clip.start,
                    end: clip.end,
                    frames: sheet.frame_count,
                });
            }
        }

        debug!(
            images = images.len(),
            sheets = sheets.len(),
            audio = audio.len(),
            clips = clips.len(),
            "Assets loaded"
        );

        Ok(Assets { images, sheets, audio, clips })
    }
}

impl Assets {
    pub fn image(&self, key: &str) -> Result<&ImageAsset, AssetError> {
        self.images.get(key).ok_or_else(|| AssetError::NotFound(key.to_string()))
    }

    pub fn sheet(&self, key: &str) -> Result<&SheetAsset, AssetError> {
        self.sheets.get(key).ok_or_else(|| AssetError::NotFound(key.to_string()))
    }

    pub fn audio(&self, key: &str) -> Result<&AudioAsset, AssetError> {
        self.audio.get(key).ok_or_else(|| AssetError::NotFound(key.to_string()))
    }

    pub fn clip(&self, key: &str) -> Result<&ClipDef, AssetError> {
        self.clips.get(key).ok_or_else(|| AssetError::NotFound(key.to_string()))
    }
}
