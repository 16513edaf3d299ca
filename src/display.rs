/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{GameState, Rect, Sprite};

pub const TITLE: &str = "Alien Invasion";

// ── Colour palette & glyphs ───────────────────────────────────────────────────

const C_SHIP: Color = Color::DarkBlue;
const C_ALIEN: Color = Color::DarkGreen;

//  ▲
// /█\
const SHIP_GLYPH: [&str; 2] = [" ▲ ", "/█\\"];
// «▼»
// ╚═╝
const ALIEN_GLYPH: [&str; 2] = ["«▼»", "╚═╝"];

// ── Public entry points ───────────────────────────────────────────────────────

/// Set the window caption.
pub fn set_title<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::SetTitle(TITLE))?;
    Ok(())
}

/// Render one complete frame: background, bullets, ship, fleet, flip.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let settings = &state.settings;

    out.queue(style::SetBackgroundColor(settings.bg_color))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let bullet_line = "█".repeat(settings.bullet_width as usize);
    let bullet_rows: Vec<&str> = (0..settings.bullet_height)
        .map(|_| bullet_line.as_str())
        .collect();
    for bullet in &state.bullets {
        draw_sprite(out, state, bullet.rect(), &bullet_rows, settings.bullet_color)?;
    }

    draw_sprite(out, state, state.ship.rect(), &SHIP_GLYPH, C_SHIP)?;

    for alien in &state.aliens {
        draw_sprite(out, state, alien.rect(), &ALIEN_GLYPH, C_ALIEN)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Cell column/row of a sprite's top-left corner.  Truncates toward −∞.
pub fn cell_origin(rect: &Rect) -> (i32, i32) {
    (rect.x.floor() as i32, rect.y.floor() as i32)
}

/// Draw `rows` with their top-left at `rect`, clipped to the screen.
fn draw_sprite<W: Write>(
    out: &mut W,
    state: &GameState,
    rect: Rect,
    rows: &[&str],
    color: Color,
) -> std::io::Result<()> {
    let width = state.settings.screen_width as i32;
    let height = state.settings.screen_height as i32;
    let (col, top) = cell_origin(&rect);

    out.queue(style::SetForegroundColor(color))?;
    for (dy, line) in rows.iter().enumerate() {
        let row = top + dy as i32;
        if row < 0 || row >= height {
            continue;
        }
        let visible: String = line
            .chars()
            .enumerate()
            .filter(|(dx, _)| {
                let c = col + *dx as i32;
                c >= 0 && c < width
            })
            .map(|(_, ch)| ch)
            .collect();
        if visible.is_empty() {
            continue;
        }
        out.queue(cursor::MoveTo(col.max(0) as u16, row as u16))?;
        out.queue(Print(visible))?;
    }
    Ok(())
}
