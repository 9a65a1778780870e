mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{error, info};

use star_catcher::audio::{AudioSink, TerminalAudio};
use star_catcher::config::{viewport_for, Settings};
use star_catcher::constants::FRAME;
use star_catcher::error::GameError;
use star_catcher::game::Session;
use star_catcher::input::{control_for, Control, KeyTracker};
use star_catcher::logging;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one session until the player quits or asks for a restart.
///
/// Input model: key events only refresh a `KeyTracker`; each frame the
/// directional state is sampled from it, so left/right and jump can be held
/// together.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    settings: &Settings,
    rx: &mpsc::Receiver<Event>,
) -> Result<Control, GameError> {
    let Session { arcade, assets, rng } = session;
    let mut keys = KeyTracker::new();
    let mut audio = TerminalAudio::new(settings.bell);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            keys.record(code, kind, frame);
            if kind != KeyEventKind::Press {
                continue;
            }
            if let Some(control) = control_for(code, modifiers, &arcade.state) {
                return Ok(control);
            }
        }

        arcade.advance(keys.cursor_keys(frame), rng);

        audio.tick();
        for sound in arcade.state.drain_cues() {
            audio.play(sound);
        }

        display::render(out, &arcade.state, assets, &mut audio, settings.pixel_ratio)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

/// Measure the terminal, then load and build a fresh session for it.
fn start_session(settings: &Settings) -> Result<Session, GameError> {
    let (cols, rows) = terminal::size()?;
    let viewport = viewport_for(cols, rows, settings.pixel_ratio);
    Session::start(viewport, settings.seed)
}

fn run<W: Write>(out: &mut W, settings: &Settings, rx: &mpsc::Receiver<Event>) -> Result<(), GameError> {
    loop {
        let mut session = start_session(settings)?;
        match game_loop(out, &mut session, settings, rx)? {
            Control::Quit => {
                info!(score = session.arcade.state.score, "Quit");
                return Ok(());
            }
            Control::Restart => {
                info!(score = session.arcade.state.score, "Restart");
            }
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let settings = Settings::parse();
    if settings.pixel_ratio <= 0.0 {
        return Err(GameError::InvalidState(format!(
            "--pixel-ratio must be positive, got {}",
            settings.pixel_ratio
        )));
    }
    if let Some(path) = &settings.log_file {
        logging::init(path)?;
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
        .is_ok();

    // Dedicate a thread to blocking event reads so the game loop never blocks.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &settings, &rx);
    if let Err(e) = &result {
        error!(error = %e, "Game loop failed");
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
