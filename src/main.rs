use std::io::{stdout, BufWriter, Write};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};

use alien_invasion::compute::init_state;
use alien_invasion::display;
use alien_invasion::game::game_loop;
use alien_invasion::input::{drain_events, KeyTracker};
use alien_invasion::logging;
use alien_invasion::settings::Settings;

// ── Terminal guard ────────────────────────────────────────────────────────────

/// Puts the terminal back the way it was when dropped, on every exit path
/// after raw mode has been entered.
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        let mut guard = TerminalGuard {
            keyboard_enhanced: false,
        };

        let mut out = stdout();
        out.execute(terminal::EnterAlternateScreen)
            .context("entering alternate screen")?;
        out.execute(cursor::Hide)?;

        // Only terminals that answer the kitty-protocol query get release
        // events; everyone else falls back to the key tracker.
        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            out.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
            guard.keyboard_enhanced = true;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let guard = TerminalGuard::enter()?;
    let mut out = BufWriter::new(stdout());
    let result = run(&mut out, guard.keyboard_enhanced);
    let _ = out.flush();
    drop(guard);

    result
}

fn run<W: Write>(out: &mut W, keyboard_enhanced: bool) -> anyhow::Result<()> {
    display::set_title(out)?;

    let (width, height) = terminal::size().context("reading terminal size")?;
    let state = init_state(Settings::from_env(width, height));
    tracing::info!(keyboard_enhanced, "input mode");

    let tracker = KeyTracker::for_terminal(keyboard_enhanced);
    let state = game_loop(out, state, tracker, drain_events).context("running game loop")?;
    tracing::info!(frames = state.frame, "game over");
    Ok(())
}
