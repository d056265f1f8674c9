//! One iteration of the game loop: input, update, render, in a fixed order.

use crate::display::{render_frame, Canvas};
use crate::game::{Flow, Game, ShipHit};
use crate::high_score::HighScoreStore;
use crate::input::{InputEvent, Key};

/// Drives a `Game` one frame at a time and owns the high-score store.
///
/// Losing a ship freezes play for `hit_pause_frames` frames. The freeze is a
/// sub-state rather than a sleep, so a quit request still gets through.
pub struct FrameDriver<S: HighScoreStore> {
    game: Game,
    store: S,
    persisted_high_score: u32,
    hit_pause_frames: u32,
    pause_left: u32,
    // Last left/right state seen while frozen, applied when play resumes
    pending_left: Option<bool>,
    pending_right: Option<bool>,
}

impl<S: HighScoreStore> FrameDriver<S> {
    /// Build a driver. `game` should already hold `store.load()` as its
    /// high score; anything above the stored value is written back later.
    pub fn new(game: Game, store: S, hit_pause_frames: u32) -> Self {
        let persisted_high_score = store.load();
        FrameDriver {
            game,
            store,
            persisted_high_score,
            hit_pause_frames,
            pause_left: 0,
            pending_left: None,
            pending_right: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_paused(&self) -> bool {
        self.pause_left > 0
    }

    /// Run one frame.
    ///
    /// Active play goes: ship, projectiles (with their collisions), fleet,
    /// render, then ship/bottom collisions. Outside play the frame only
    /// renders the menu.
    pub fn tick<C, I>(&mut self, events: I, canvas: &mut C) -> std::io::Result<Flow>
    where
        C: Canvas + ?Sized,
        I: IntoIterator<Item = InputEvent>,
    {
        if self.pause_left > 0 {
            return Ok(self.tick_paused(events));
        }

        for event in events {
            if self.game.handle_event(event) == Flow::Quit {
                self.persist_high_score();
                return Ok(Flow::Quit);
            }
        }

        if self.game.is_active() {
            self.game.update_ship();
            self.game.update_projectiles();
            self.game.update_fleet();
            render_frame(canvas, &self.game)?;
            match self.game.check_ship_collisions() {
                Some(ShipHit::LifeLost) => self.pause_left = self.hit_pause_frames,
                Some(ShipHit::GameOver) => self.persist_high_score(),
                None => {}
            }
        } else {
            render_frame(canvas, &self.game)?;
        }
        Ok(Flow::Continue)
    }

    /// A frozen frame: honour quit, let held keys be released, drop the rest.
    ///
    /// Movement keys pressed during the freeze do nothing yet, but the last
    /// press or release of each direction is remembered and takes effect
    /// when play resumes, so a key held through the freeze keeps steering.
    fn tick_paused<I>(&mut self, events: I) -> Flow
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => {
                    self.persist_high_score();
                    return Flow::Quit;
                }
                InputEvent::KeyDown(Key::Left) => self.pending_left = Some(true),
                InputEvent::KeyDown(Key::Right) => self.pending_right = Some(true),
                InputEvent::KeyUp(key) => {
                    self.game.key_up(key);
                    match key {
                        Key::Left => self.pending_left = Some(false),
                        Key::Right => self.pending_right = Some(false),
                        _ => {}
                    }
                }
                InputEvent::KeyDown(_) | InputEvent::MouseClick { .. } => {}
            }
        }
        self.pause_left -= 1;
        if self.pause_left == 0 {
            self.resume_movement();
        }
        Flow::Continue
    }

    fn resume_movement(&mut self) {
        if let Some(held) = self.pending_left.take() {
            self.game.ship.moving_left = held;
        }
        if let Some(held) = self.pending_right.take() {
            self.game.ship.moving_right = held;
        }
    }

    /// Save the high score if it beat the stored one. Failures are logged and
    /// play carries on.
    pub fn persist_high_score(&mut self) {
        let high = self.game.stats.high_score;
        if high <= self.persisted_high_score {
            return;
        }
        match self.store.save(high) {
            Ok(()) => {
                tracing::info!("saved high score {high}");
                self.persisted_high_score = high;
            }
            Err(e) => tracing::warn!("{e}; continuing without saving"),
        }
    }
}
