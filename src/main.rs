use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use platformer::compute::{init_world, restart, tick};
use platformer::config::Config;
use platformer::display::{self, Viewport};
use platformer::error::GameError;
use platformer::input::{hold_window_frames, Command, KeyTracker};
use platformer::logging::{self, LOG_VAR};

const TITLE: &str = "Platformer Game";

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. Input events are drained at the top of each
/// frame, then the world advances exactly one step and is redrawn.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: Config,
) -> Result<(), GameError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = init_world(config);
    let mut keys = KeyTracker::new(hold_window_frames(config.fps));
    let frame_time = config.frame_duration();

    info!(fps = config.fps, seed = ?config.seed, "game started");

    loop {
        let frame_start = Instant::now();
        let frame = state.frame + 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match keys.handle(ev, frame) {
                Some(Command::Quit) => {
                    info!(frame, score = state.player.score, "quit");
                    return Ok(());
                }
                Some(Command::Restart) => state = restart(&state),
                None => {}
            }
        }

        state = tick(&state, keys.controls(frame), &mut rng);

        let (cols, rows) = terminal::size()?;
        display::render(out, &state, &Viewport::new(cols, rows, &state.config))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Everything that runs with raw mode on. `keyboard_enhanced` records whether
/// the enhancement flags were pushed so the caller can pop them again.
fn play<W: Write>(
    out: &mut W,
    config: Config,
    keyboard_enhanced: &mut bool,
) -> Result<(), GameError> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(TITLE))?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    *keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    game_loop(out, &rx, config)
}

fn main() -> Result<(), GameError> {
    let config = Config::from_env()?;
    let log_path = std::env::var_os(LOG_VAR).map(PathBuf::from);
    logging::init(log_path.as_deref())?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    let mut keyboard_enhanced = false;
    let result = play(&mut out, config, &mut keyboard_enhanced);

    // Always restore the terminal, whichever step failed
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
