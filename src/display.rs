//! Rendering layer.
//!
//! `render_frame` decides *what* is drawn and in which order; a `Canvas`
//! decides *how*. `TerminalCanvas` draws with crossterm, mapping logical
//! pixels onto character cells. No game logic lives here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{Rect, Rgb, Sprite};
use crate::game::Game;
use crate::stats::format_score;

/// The presentation collaborator the game loop draws through.
pub trait Canvas {
    fn clear(&mut self) -> std::io::Result<()>;
    fn draw_rect(&mut self, rect: Rect, color: Rgb) -> std::io::Result<()>;
    fn draw_sprite(&mut self, rect: Rect, sprite: Sprite) -> std::io::Result<()>;
    fn draw_button(&mut self, rect: Rect, label: &str, selected: bool) -> std::io::Result<()>;
    /// Draw text whose top-right corner sits at `(right, top)`.
    fn draw_text(&mut self, right: i32, top: i32, text: &str, color: Rgb) -> std::io::Result<()>;
    fn set_cursor_visible(&mut self, visible: bool) -> std::io::Result<()>;
    fn present(&mut self) -> std::io::Result<()>;
}

// ── Colour palette ────────────────────────────────────────────────────────────

pub const TEXT_COLOR: Rgb = Rgb(230, 230, 230);
pub const BUTTON_COLOR: Rgb = Rgb(255, 0, 0);
pub const BUTTON_SELECTED_COLOR: Rgb = Rgb(0, 0, 255);
pub const BUTTON_TEXT_COLOR: Rgb = Rgb(255, 255, 255);

const C_SHIP: Color = Color::White;
const C_ENEMY: Color = Color::Green;

// ── Frame composition ─────────────────────────────────────────────────────────

/// Render one complete frame of `game`.
pub fn render_frame<C: Canvas + ?Sized>(canvas: &mut C, game: &Game) -> std::io::Result<()> {
    canvas.set_cursor_visible(game.cursor_visible())?;
    canvas.clear()?;

    canvas.draw_sprite(game.ship.rect(), Sprite::Ship)?;
    for projectile in &game.projectiles {
        canvas.draw_rect(projectile.rect(), projectile.color)?;
    }
    for enemy in &game.fleet.enemies {
        canvas.draw_sprite(enemy.rect(), Sprite::Enemy)?;
    }

    draw_scoreboard(canvas, game)?;

    if !game.is_active() {
        let play = &game.menu.play;
        canvas.draw_button(play.rect, play.label, play.selected)?;
        for button in &game.menu.difficulties {
            canvas.draw_button(button.rect, button.label, button.selected)?;
        }
    }

    canvas.present()
}

/// Score and high score top-right, with level and ships underneath.
fn draw_scoreboard<C: Canvas + ?Sized>(canvas: &mut C, game: &Game) -> std::io::Result<()> {
    let right = game.settings.screen_width - 20;
    let line = 20;
    let stats = &game.stats;

    canvas.draw_text(right, line, &format!("Score {}", format_score(stats.score)), TEXT_COLOR)?;
    canvas.draw_text(
        right,
        line * 2,
        &format!("High {}", format_score(stats.high_score)),
        TEXT_COLOR,
    )?;
    canvas.draw_text(right, line * 3, &format!("Level {}", stats.level), TEXT_COLOR)?;
    canvas.draw_text(right, line * 4, &format!("Ships {}", stats.ships_left), TEXT_COLOR)?;
    Ok(())
}

// ── Terminal canvas ───────────────────────────────────────────────────────────

/// Draws onto a terminal, one character cell per `cell_width x cell_height`
/// logical pixels.
pub struct TerminalCanvas<W: Write> {
    out: W,
    cell_width: i32,
    cell_height: i32,
    columns: u16,
    rows: u16,
    cursor_visible: Option<bool>,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, columns: u16, rows: u16, cell_width: u16, cell_height: u16) -> Self {
        TerminalCanvas {
            out,
            cell_width: cell_width.max(1) as i32,
            cell_height: cell_height.max(1) as i32,
            columns,
            rows,
            cursor_visible: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Logical screen size covered by this canvas.
    pub fn logical_size(&self) -> (i32, i32) {
        (
            self.columns as i32 * self.cell_width,
            self.rows as i32 * self.cell_height,
        )
    }

    /// Convert a logical rect into an on-screen cell span `(col, row, cols, rows)`,
    /// clipped to the terminal. Anything at least partly visible covers one cell.
    fn to_cells(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let col0 = rect.left().div_euclid(self.cell_width).max(0);
        let row0 = rect.top().div_euclid(self.cell_height).max(0);
        let col1 = ((rect.right() - 1).div_euclid(self.cell_width)).min(self.columns as i32 - 1);
        let row1 = ((rect.bottom() - 1).div_euclid(self.cell_height)).min(self.rows as i32 - 1);
        if rect.w <= 0 || rect.h <= 0 || col1 < col0 || row1 < row0 {
            return None;
        }
        Some((
            col0 as u16,
            row0 as u16,
            (col1 - col0 + 1) as u16,
            (row1 - row0 + 1) as u16,
        ))
    }

    fn fill(&mut self, col: u16, row: u16, cols: u16, rows: u16, glyph: char) -> std::io::Result<()> {
        let line: String = std::iter::repeat(glyph).take(cols as usize).collect();
        for r in row..row + rows {
            self.out.queue(cursor::MoveTo(col, r))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) -> std::io::Result<()> {
        let Some((col, row, cols, rows)) = self.to_cells(rect) else {
            return Ok(());
        };
        self.out.queue(style::SetForegroundColor(to_color(color)))?;
        self.fill(col, row, cols, rows, '║')
    }

    fn draw_sprite(&mut self, rect: Rect, sprite: Sprite) -> std::io::Result<()> {
        let Some((col, row, cols, rows)) = self.to_cells(rect) else {
            return Ok(());
        };
        // Two-row art when the sprite spans two rows, otherwise just the top row:
        //   ship   ▲      enemy  «▼»
        //         /█\            ╚═╝
        let (color, top, bottom) = match sprite {
            Sprite::Ship => (C_SHIP, " ▲ ", "/█\\"),
            Sprite::Enemy => (C_ENEMY, "«▼»", "╚═╝"),
        };
        self.out.queue(style::SetForegroundColor(color))?;
        let art = [top, bottom];
        for r in 0..rows.min(2) {
            let text: String = art[r as usize].chars().cycle().take(cols as usize).collect();
            self.out.queue(cursor::MoveTo(col, row + r))?;
            self.out.queue(Print(text))?;
        }
        Ok(())
    }

    fn draw_button(&mut self, rect: Rect, label: &str, selected: bool) -> std::io::Result<()> {
        let Some((col, row, cols, rows)) = self.to_cells(rect) else {
            return Ok(());
        };
        let fill = if selected {
            BUTTON_SELECTED_COLOR
        } else {
            BUTTON_COLOR
        };
        self.out.queue(style::SetBackgroundColor(to_color(fill)))?;
        self.out.queue(style::SetForegroundColor(to_color(BUTTON_TEXT_COLOR)))?;
        self.fill(col, row, cols, rows, ' ')?;

        // Centre the label inside the button
        let label_len = label.chars().count() as u16;
        let lx = col + cols.saturating_sub(label_len) / 2;
        let ly = row + rows / 2;
        let visible: String = label.chars().take(cols as usize).collect();
        self.out.queue(cursor::MoveTo(lx, ly))?;
        self.out.queue(Print(visible))?;
        self.out.queue(style::ResetColor)?;
        Ok(())
    }

    fn draw_text(&mut self, right: i32, top: i32, text: &str, color: Rgb) -> std::io::Result<()> {
        let len = text.chars().count() as i32;
        let end_col = right.div_euclid(self.cell_width);
        let col = (end_col - len).max(0);
        let row = top.div_euclid(self.cell_height);
        if row < 0 || row >= self.rows as i32 {
            return Ok(());
        }
        self.out.queue(style::SetForegroundColor(to_color(color)))?;
        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> std::io::Result<()> {
        if self.cursor_visible == Some(visible) {
            return Ok(());
        }
        if visible {
            self.out.queue(cursor::Show)?;
        } else {
            self.out.queue(cursor::Hide)?;
        }
        self.cursor_visible = Some(visible);
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
