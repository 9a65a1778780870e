/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// session.  No game rules run here; this module only translates state into
/// terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use star_catcher::assets::{
    Assets, BOMB, BOTTOM, CLIP_DEATH, CLIP_LEFT, CLIP_RIGHT, DUDE_SHEET, GROUND, SKY,
    STARS_SHEET,
};
use star_catcher::audio::TerminalAudio;
use star_catcher::config::to_cell;
use star_catcher::constants::RESTART_CAPTION;
use star_catcher::entities::SessionState;
use star_catcher::error::GameError;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::DarkBlue;
const C_GROUND: Color = Color::DarkGreen;
const C_LEDGE: Color = Color::Green;
const C_STAR: Color = Color::Yellow;
const C_HAZARD: Color = Color::Magenta;
const C_PLAYER: Color = Color::White;
const C_SCORE: Color = Color::Black;
const C_GAME_OVER: Color = Color::Red;
const C_RESTART: Color = Color::White;
const C_SOUND: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Cell-space canvas bounds plus the world→cell scale.
struct Canvas {
    cols: i32,
    rows: i32,
    pixel_ratio: f32,
}

impl Canvas {
    fn cell(&self, x: f32, y: f32) -> (i32, i32) {
        to_cell(x, y, self.pixel_ratio)
    }

    /// Print `text` at a cell, clipped to the canvas.
    fn put<W: Write>(
        &self,
        out: &mut W,
        col: i32,
        row: i32,
        text: &str,
        color: Color,
    ) -> std::io::Result<()> {
        if row < 0 || row >= self.rows || col >= self.cols {
            return Ok(());
        }
        let skip = (-col).max(0) as usize;
        let room = (self.cols - col.max(0)) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }
        out.queue(cursor::MoveTo(col.max(0) as u16, row as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(visible))?;
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &SessionState,
    assets: &Assets,
    audio: &mut TerminalAudio,
    pixel_ratio: f32,
) -> Result<(), GameError> {
    let (cols, rows) = terminal::size()?;
    let canvas = Canvas { cols: cols as i32, rows: rows as i32, pixel_ratio };

    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, &canvas, state, assets)?;
    draw_platforms(out, &canvas, state, assets)?;
    draw_stars(out, &canvas, state, assets)?;
    draw_hazards(out, &canvas, state, assets)?;
    draw_player(out, &canvas, state, assets)?;
    draw_hud(out, &canvas, state, assets, audio)?;
    draw_controls_hint(out, &canvas)?;

    if audio.take_bell() {
        out.queue(Print('\x07'))?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

/// Fill the arena captured at session start with the sky.  The background
/// colour stays set for everything drawn on top of it.
fn draw_background<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    state: &SessionState,
    assets: &Assets,
) -> Result<(), GameError> {
    let glyph = assets.image(SKY)?.glyph;
    let (cols, rows) = canvas.cell(state.viewport.width, state.viewport.height);
    let line: String = std::iter::repeat(glyph).take(cols.max(0) as usize).collect();

    out.queue(style::SetBackgroundColor(C_SKY))?;
    for row in 0..rows {
        canvas.put(out, 0, row, &line, C_HINT)?;
    }
    Ok(())
}

// ── Platforms ─────────────────────────────────────────────────────────────────

fn draw_platforms<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    state: &SessionState,
    assets: &Assets,
) -> Result<(), GameError> {
    let slab = assets.image(BOTTOM)?.glyph;
    let ledge = assets.image(GROUND)?.glyph;

    // The first platform is always the ground slab.
    for (i, platform) in state.platforms.iter().enumerate() {
        let (glyph, color) = if i == 0 { (slab, C_GROUND) } else { (ledge, C_LEDGE) };
        let r = platform.rect();
        let (c0, r0) = canvas.cell(r.x, r.y);
        let (c1, r1) = canvas.cell(r.right() - 1.0, r.bottom() - 1.0);
        let line: String = std::iter::repeat(glyph).take((c1 - c0 + 1).max(1) as usize).collect();
        for row in r0..=r1 {
            canvas.put(out, c0, row, &line, color)?;
        }
    }
    Ok(())
}

// ── Bodies ────────────────────────────────────────────────────────────────────

fn draw_stars<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    state: &SessionState,
    assets: &Assets,
) -> Result<(), GameError> {
    let sheet = assets.sheet(STARS_SHEET)?;
    for star in state.stars.iter().filter(|s| s.is_active()) {
        let (col, row) = canvas.cell(star.body.center.x, star.body.center.y);
        let glyph = sheet.glyph(star.animator.frame()).to_string();
        canvas.put(out, col, row, &glyph, C_STAR)?;
    }
    Ok(())
}

fn draw_hazards<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    state: &SessionState,
    assets: &Assets,
) -> Result<(), GameError> {
    let glyph = assets.image(BOMB)?.glyph.to_string();
    for hazard in state.hazards.iter() {
        let (col, row) = canvas.cell(hazard.body.center.x, hazard.body.center.y);
        canvas.put(out, col, row, &glyph, C_HAZARD)?;
    }
    Ok(())
}

fn draw_player<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    state: &SessionState,
    assets: &Assets,
) -> Result<(), GameError> {
    // Sprite (2 rows, 3 cols):
    //   <o      ← head, facing the way the clip runs
    //   /|\     ← legs, middle glyph animated
    let p = &state.player;
    let sheet = assets.sheet(DUDE_SHEET)?;
    let color = match p.tint {
        Some(_) => C_GAME_OVER,
        None => C_PLAYER,
    };

    let head = match p.animator.current_key() {
        Some(CLIP_LEFT) => "<o ",
        Some(CLIP_RIGHT) => " o>",
        Some(CLIP_DEATH) if p.animator.is_finished() => "_x_",
        Some(CLIP_DEATH) => " x ",
        _ => " o ",
    };
    let legs = format!("/{}\\", sheet.glyph(p.animator.frame()));

    let r = p.body.rect();
    let (col, bottom_row) = canvas.cell(p.body.center.x, r.bottom() - 1.0);
    canvas.put(out, col - 1, bottom_row - 1, head, color)?;
    canvas.put(out, col - 1, bottom_row, &legs, color)?;
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    state: &SessionState,
    assets: &Assets,
    audio: &TerminalAudio,
) -> Result<(), GameError> {
    let score = &state.hud.score_text;
    if score.visible {
        let (col, row) = canvas.cell(score.position.x, score.position.y);
        canvas.put(out, col, row, &score.text, C_SCORE)?;
    }

    if let Some(sound) = audio.caption() {
        let asset = assets.audio(sound.asset_key())?;
        let name = asset.path.rsplit('/').next().unwrap_or(asset.path);
        let caption = format!("♪ {name}");
        let col = canvas.cols - caption.chars().count() as i32 - 1;
        canvas.put(out, col, 0, &caption, C_SOUND)?;
    }

    let text = &state.hud.game_over_text;
    if text.visible {
        let (cx, row) = canvas.cell(text.position.x, text.position.y);
        let banner = format!("*** {} ***", text.text.to_uppercase());
        let col = cx - banner.chars().count() as i32 / 2;
        canvas.put(out, col, row, &banner, C_GAME_OVER)?;

        let final_score = format!("Final {}", state.hud.score_text.text);
        canvas.put(out, cx - final_score.chars().count() as i32 / 2, row + 1, &final_score, C_GAME_OVER)?;
    }

    if state.hud.restart_visible {
        let (cx, row) = canvas.cell(text.position.x, text.position.y);
        let col = cx - RESTART_CAPTION.chars().count() as i32 / 2;
        canvas.put(out, col, row + 3, RESTART_CAPTION, C_RESTART)?;
    }

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, canvas: &Canvas) -> Result<(), GameError> {
    canvas.put(
        out,
        1,
        canvas.rows - 1,
        "← → / A D : Move   ↑ / W / SPACE : Jump   Q : Quit",
        C_HINT,
    )?;
    Ok(())
}
