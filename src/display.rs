//! Rendering layer — all terminal output lives here.
//!
//! The world is an 800×600 pixel canvas; a [`Viewport`] scales it onto
//! whatever character grid the terminal has and every entity is painted as
//! a block of solid cells. No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::config::{Config, Rgb, BLACK, RED, WHITE, YELLOW};
use crate::entities::{GameStatus, Rect, World};

const C_HINT: Color = Color::DarkGrey;
const BLOCK: &str = "█";
const CONTROLS_HINT: &str = "← → / A D : Move   SPACE : Jump   Q : Quit";
const GAME_OVER: &str = "GAME OVER";
const RESTART_HINT: &str = "Press R to restart";

fn color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb;
    Color::Rgb { r, g, b }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// A run of terminal cells covering some world rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

/// Maps world pixels onto a `cols × rows` terminal grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    world_width: f32,
    world_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, config: &Config) -> Self {
        Viewport {
            cols,
            rows,
            world_width: config.screen_width,
            world_height: config.screen_height,
        }
    }

    /// The cells touched by `rect`, clipped to the grid. `None` for an empty
    /// rectangle or one entirely off screen.
    pub fn cells(&self, rect: &Rect) -> Option<CellRect> {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return None;
        }
        let sx = self.cols as f32 / self.world_width;
        let sy = self.rows as f32 / self.world_height;

        let left = (rect.x * sx).floor().max(0.0);
        let right = (rect.right() * sx).ceil().min(self.cols as f32);
        let top = (rect.y * sy).floor().max(0.0);
        let bottom = (rect.bottom() * sy).ceil().min(self.rows as f32);
        if right <= left || bottom <= top {
            return None;
        }

        Some(CellRect {
            col: left as u16,
            row: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &World, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(color(BLACK)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for entity in &state.entities {
        fill_rect(out, viewport, &entity.rect, entity.fill)?;
    }
    if state.status == GameStatus::Running {
        fill_rect(out, viewport, &state.player.rect, state.player.fill)?;
    }

    draw_hud(out, state, viewport)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, viewport)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn fill_rect<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    rect: &Rect,
    fill: Rgb,
) -> std::io::Result<()> {
    let Some(cells) = viewport.cells(rect) else {
        return Ok(());
    };
    let run = BLOCK.repeat(cells.width as usize);
    out.queue(style::SetForegroundColor(color(fill)))?;
    for row in cells.row..cells.row + cells.height {
        out.queue(cursor::MoveTo(cells.col, row))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

// ── HUD (rows 0-1) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &World, viewport: &Viewport) -> std::io::Result<()> {
    let player = &state.player;

    let score = format!("Score: {}", player.score);
    out.queue(style::SetForegroundColor(color(WHITE)))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(&score))?;
    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(Print(format!("Health: {}", player.health)))?;

    if state.status == GameStatus::Running && player.invincible() {
        let fps = state.config.fps.max(1);
        let seconds = (player.invincibility_frames + fps - 1) / fps;
        out.queue(cursor::MoveTo(14, 1))?;
        out.queue(style::SetForegroundColor(color(YELLOW)))?;
        out.queue(Print(format!("[INVINCIBLE {:>2}s]", seconds)))?;
    }

    // The hint shares row 0 with the score; leave it out when they would meet
    let hint_width = CONTROLS_HINT.chars().count() as u32;
    let score_end = 1 + score.chars().count() as u32;
    if viewport.cols as u32 >= score_end + hint_width + 2 {
        let hint_col = viewport.cols - (hint_width as u16 + 1);
        out.queue(cursor::MoveTo(hint_col, 0))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(CONTROLS_HINT))?;
    }

    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    let cx = viewport.cols / 2;
    let cy = viewport.rows / 2;

    let lines: [(&str, Rgb, u16); 2] = [
        (GAME_OVER, RED, cy.saturating_sub(1)),
        (RESTART_HINT, WHITE, cy),
    ];
    for (msg, fill, row) in lines {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color(fill)))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}
