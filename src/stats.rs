//! Per-game statistics plus the session high score.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub ships_left: u32,
    /// Survives `reset_stats`; only ever raised.
    pub high_score: u32,
}

impl GameStats {
    pub fn new(ship_limit: u32, high_score: u32) -> Self {
        let mut stats = GameStats {
            score: 0,
            level: 1,
            ships_left: 0,
            high_score,
        };
        stats.reset_stats(ship_limit);
        stats
    }

    /// Re-initialise the fields that change during a single game.
    pub fn reset_stats(&mut self, ship_limit: u32) {
        self.ships_left = ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Raise the high score to the current score if it was beaten.
    /// Returns true when the high score changed.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

/// Round to the nearest ten and insert thousands separators: `12345 -> "12,350"`.
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
