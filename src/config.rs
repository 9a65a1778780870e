/// Runtime settings from the command line, and viewport capture.

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::entities::Viewport;

#[derive(Parser, Debug, Clone)]
#[command(name = "star_catcher", about = "Catch the falling stars, dodge the bombs")]
pub struct Settings {
    /// Seed for the random number generator (random if omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Device pixel-density multiplier applied to the viewport.
    #[arg(long, default_value_t = 1.0)]
    pub pixel_ratio: f32,

    /// Write logs to this file (filtered by RUST_LOG, default "info").
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Ring the terminal bell on sound cues.
    #[arg(long)]
    pub bell: bool,
}

/// World-pixel arena for a terminal of `cols` × `rows`.
///
/// Captured once when a session starts; a later terminal resize does not
/// change it.
pub fn viewport_for(cols: u16, rows: u16, pixel_ratio: f32) -> Viewport {
    Viewport {
        width: cols as f32 * CELL_WIDTH_PX * pixel_ratio,
        height: rows as f32 * CELL_HEIGHT_PX * pixel_ratio,
    }
}

/// World pixels → terminal cell, for a given pixel ratio.
pub fn to_cell(x: f32, y: f32, pixel_ratio: f32) -> (i32, i32) {
    (
        (x / (CELL_WIDTH_PX * pixel_ratio)).floor() as i32,
        (y / (CELL_HEIGHT_PX * pixel_ratio)).floor() as i32,
    )
}
