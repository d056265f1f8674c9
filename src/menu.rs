//! Menu controls and the explicit game phase.

use crate::entities::Rect;
use crate::settings::Difficulty;

pub const BUTTON_WIDTH: i32 = 200;
pub const BUTTON_HEIGHT: i32 = 48;
/// Vertical offset of the difficulty row below the Play button.
pub const DIFFICULTY_ROW_OFFSET: i32 = 150;

/// Where the game is in its lifecycle. Replaces the `game_active` /
/// `difficulty_chosen` flag pair, which allowed two meaningless combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    DifficultySelected(Difficulty),
    Active,
}

impl GamePhase {
    pub fn game_active(&self) -> bool {
        matches!(self, GamePhase::Active)
    }

    pub fn difficulty_chosen(&self) -> bool {
        matches!(self, GamePhase::DifficultySelected(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Play,
    Difficulty(Difficulty),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub selected: bool,
}

impl Button {
    fn new(label: &'static str, rect: Rect) -> Self {
        Button {
            label,
            rect,
            selected: false,
        }
    }
}

/// The Play button and the three difficulty buttons.
#[derive(Clone, Debug)]
pub struct MenuControls {
    pub play: Button,
    /// Easy, Normal, Hard in `Difficulty::ALL` order.
    pub difficulties: [Button; 3],
}

impl MenuControls {
    /// Lay out the controls around the screen centre.
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let w = BUTTON_WIDTH;
        let h = BUTTON_HEIGHT;
        let cx = screen_width / 2;
        let play_y = screen_height / 2 - h / 2;
        let row_y = play_y + DIFFICULTY_ROW_OFFSET;

        MenuControls {
            play: Button::new("Play", Rect::new(cx - w / 2, play_y, w, h)),
            difficulties: [
                Button::new(Difficulty::Easy.label(), Rect::new(cx - 2 * w, row_y, w, h)),
                Button::new(Difficulty::Normal.label(), Rect::new(cx - w / 2, row_y, w, h)),
                Button::new(Difficulty::Hard.label(), Rect::new(cx + w, row_y, w, h)),
            ],
        }
    }

    /// Mark exactly one difficulty control as selected.
    pub fn select(&mut self, difficulty: Difficulty) {
        for (button, d) in self.difficulties.iter_mut().zip(Difficulty::ALL) {
            button.selected = d == difficulty;
        }
    }

    pub fn clear_selection(&mut self) {
        for button in &mut self.difficulties {
            button.selected = false;
        }
    }

    pub fn selected(&self) -> Option<Difficulty> {
        self.difficulties
            .iter()
            .zip(Difficulty::ALL)
            .find(|(b, _)| b.selected)
            .map(|(_, d)| d)
    }

    /// Which control, if any, sits under the point.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<Control> {
        if self.play.rect.contains_point(x, y) {
            return Some(Control::Play);
        }
        self.difficulties
            .iter()
            .zip(Difficulty::ALL)
            .find(|(b, _)| b.rect.contains_point(x, y))
            .map(|(_, d)| Control::Difficulty(d))
    }
}
