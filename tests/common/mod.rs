#![allow(dead_code)]

use alien_invasion::config::SettingsConfig;
use alien_invasion::display::Canvas;
use alien_invasion::entities::{Rect, Rgb, Sprite};
use alien_invasion::game::Game;
use alien_invasion::settings::Difficulty;

pub const WIDTH: i32 = 960;
pub const HEIGHT: i32 = 640;

/// A game on a 960x640 screen with default settings, sitting in the menu.
pub fn new_game() -> Game {
    Game::new(SettingsConfig::default(), WIDTH, HEIGHT, 0)
}

/// A game already in active play on Normal.
pub fn active_game() -> Game {
    let mut game = new_game();
    game.choose_difficulty(Difficulty::Normal);
    game.start_game();
    game
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Rect(Rect),
    Sprite(Rect, Sprite),
    Button(String, bool),
    Text(String),
    Cursor(bool),
    Present,
}

/// Canvas that records every call instead of drawing.
#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn take(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) -> std::io::Result<()> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, _color: Rgb) -> std::io::Result<()> {
        self.ops.push(Op::Rect(rect));
        Ok(())
    }

    fn draw_sprite(&mut self, rect: Rect, sprite: Sprite) -> std::io::Result<()> {
        self.ops.push(Op::Sprite(rect, sprite));
        Ok(())
    }

    fn draw_button(&mut self, _rect: Rect, label: &str, selected: bool) -> std::io::Result<()> {
        self.ops.push(Op::Button(label.to_string(), selected));
        Ok(())
    }

    fn draw_text(&mut self, _right: i32, _top: i32, text: &str, _color: Rgb) -> std::io::Result<()> {
        self.ops.push(Op::Text(text.to_string()));
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> std::io::Result<()> {
        self.ops.push(Op::Cursor(visible));
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.ops.push(Op::Present);
        Ok(())
    }
}
