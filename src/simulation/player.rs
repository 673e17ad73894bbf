//! Player resources
//!
//! The player owns the running cookie score and the passive yield that
//! upgrades contribute every tick.

/// Cookies awarded for one click on the cookie
pub const COOKIES_PER_CLICK: f64 = 1.0;

/// Seconds of game time represented by one tick
pub const SECONDS_PER_TICK: f64 = 1.0;

/// Aggregate score and yield for the single player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Current cookie count
    pub score: f64,

    /// Cookies added per second by owned upgrades
    pub yield_per_second: f64,

    /// Cookies added by one click on the cookie
    pub cookies_per_click: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            score: 0.0,
            yield_per_second: 0.0,
            cookies_per_click: COOKIES_PER_CLICK,
        }
    }

    /// Check if the player can afford a purchase
    pub fn can_afford(&self, cost: f64) -> bool {
        self.score >= cost
    }

    /// Deduct cookies for a purchase.
    /// Returns true if successful, false if the player cannot afford it.
    pub fn spend(&mut self, cost: f64) -> bool {
        if self.can_afford(cost) {
            self.score -= cost;
            true
        } else {
            false
        }
    }

    /// Award the cookies for a single click
    pub fn click_cookie(&mut self) {
        self.score += self.cookies_per_click;
    }

    /// Add passive income for the given number of elapsed ticks
    pub fn add_passive_income(&mut self, elapsed_ticks: u32) {
        self.score += self.yield_per_second * SECONDS_PER_TICK * f64::from(elapsed_ticks);
    }

    /// Score as displayed, truncated toward zero
    pub fn score_label(&self) -> String {
        format!("{} cookies", self.score.trunc() as u64)
    }

    /// Yield as displayed, truncated toward zero
    pub fn yield_label(&self) -> String {
        format!("CPS: {}", self.yield_per_second.trunc() as u64)
    }
}
