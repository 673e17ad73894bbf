//! Main game world that ties everything together
//!
//! `SimWorld` owns the player, the cookie and the upgrades, and runs the
//! per-iteration loop protocol without any Bevy dependencies.

use log::info;

use super::cookie::SimCookie;
use super::input::{GameEffect, InputEvent};
use super::player::Player;
use super::types::{LoopState, ScreenPoint, WINDOW_HEIGHT, WINDOW_WIDTH};
use super::upgrade::{Upgrade, UpgradeKind};

/// Logical pixels covered by one character of the text frame
const MAP_CELL_WIDTH: f32 = 20.0;
const MAP_CELL_HEIGHT: f32 = 50.0;

/// What happened during one loop iteration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Effects in the order their events were handled
    pub effects: Vec<GameEffect>,
    /// Passive income applied at the start of the iteration
    pub income: f64,
}

/// The owning context for all game state
#[derive(Debug, Clone)]
pub struct SimWorld {
    pub player: Player,

    pub cookie: SimCookie,

    /// Upgrades in hit-test priority order
    pub upgrades: Vec<Upgrade>,

    pub state: LoopState,

    /// Completed loop iterations
    pub ticks: u64,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            cookie: SimCookie::new(),
            upgrades: UpgradeKind::all().into_iter().map(Upgrade::new).collect(),
            state: LoopState::Running,
            ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn upgrade(&self, kind: UpgradeKind) -> Option<&Upgrade> {
        self.upgrades.iter().find(|u| u.kind == kind)
    }

    /// Sum of owned count times yield over every upgrade
    pub fn total_yield(&self) -> f64 {
        self.upgrades.iter().map(Upgrade::total_yield).sum()
    }

    /// Apply passive income for the elapsed ticks and return the amount added
    pub fn tick_income(&mut self, elapsed_ticks: u32) -> f64 {
        let before = self.player.score;
        self.player.add_passive_income(elapsed_ticks);
        self.player.score - before
    }

    /// Recompute each upgrade's enabled flag against the current score
    pub fn refresh_upgrades(&mut self) {
        for upgrade in &mut self.upgrades {
            upgrade.refresh_visual_state(&self.player);
        }
    }

    /// Handle a single input event, appending the resulting effects.
    ///
    /// Pointer events hit-test the cookie first, then each upgrade in
    /// declaration order; only the first match is applied.
    pub fn handle_event(&mut self, event: InputEvent, effects: &mut Vec<GameEffect>) {
        if !self.is_running() {
            return;
        }

        match event {
            InputEvent::PointerDown(point) => self.handle_pointer_down(point, effects),
            InputEvent::Quit => {
                info!("Quit received after {} ticks", self.ticks);
                self.state = LoopState::Stopped;
                effects.push(GameEffect::Quit);
            }
        }
    }

    fn handle_pointer_down(&mut self, point: ScreenPoint, effects: &mut Vec<GameEffect>) {
        if self.cookie.contains(point) {
            self.player.click_cookie();
            effects.push(GameEffect::PlayCrunch);
            effects.push(GameEffect::StopMusic);
            return;
        }

        let player = &mut self.player;
        if let Some(upgrade) = self.upgrades.iter_mut().find(|u| u.contains(point)) {
            if upgrade.attempt_purchase(player) {
                effects.push(GameEffect::Purchased(upgrade.kind));
            } else {
                effects.push(GameEffect::PurchaseRejected(upgrade.kind));
            }
        }
    }

    /// Run one loop iteration: passive income, upgrade refresh, then the
    /// drained input events. The caller redraws the frame afterwards.
    pub fn step<I>(&mut self, events: I) -> StepReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut report = StepReport::default();
        if !self.is_running() {
            return report;
        }

        report.income = self.advance_tick();

        for event in events {
            self.handle_event(event, &mut report.effects);
            if !self.is_running() {
                break;
            }
        }

        report
    }

    /// Apply one tick of passive income and refresh the upgrades.
    /// Returns the income added; does nothing once the loop has stopped.
    pub fn advance_tick(&mut self) -> f64 {
        if !self.is_running() {
            return 0.0;
        }

        let income = self.tick_income(1);
        self.refresh_upgrades();
        self.ticks += 1;
        income
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Cookie Clicker Summary ===");
        println!("Ticks: {}", self.ticks);
        println!("{}", self.player.score_label());
        println!("{}", self.player.yield_label());
        println!("--- Upgrades ---");
        for upgrade in &self.upgrades {
            println!(
                "  {}: owned={}, cost={}, {}",
                upgrade.kind.name(),
                upgrade.owned_count,
                upgrade.price_label(),
                if upgrade.visual_enabled {
                    "affordable"
                } else {
                    "locked"
                }
            );
        }
    }

    /// Render the frame as text, one character per cell of the window.
    ///
    /// Legend: C = cookie, G/P/K = Grandma/Grandpa/Crumble Cookie
    /// (lowercase when unaffordable).
    pub fn render_frame(&self) -> String {
        let cols = (WINDOW_WIDTH as f32 / MAP_CELL_WIDTH).ceil() as usize;
        let rows = (WINDOW_HEIGHT as f32 / MAP_CELL_HEIGHT).ceil() as usize;
        let mut grid = vec![vec!['.'; cols]; rows];

        for (row, line) in grid.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                let point = ScreenPoint::new(
                    (col as f32 + 0.5) * MAP_CELL_WIDTH,
                    (row as f32 + 0.5) * MAP_CELL_HEIGHT,
                );
                if self.cookie.contains(point) {
                    *cell = 'C';
                } else if let Some(upgrade) = self.upgrades.iter().find(|u| u.contains(point)) {
                    let glyph = match upgrade.kind {
                        UpgradeKind::Grandma => 'G',
                        UpgradeKind::Grandpa => 'P',
                        UpgradeKind::CrumbleCookie => 'K',
                    };
                    *cell = if upgrade.visual_enabled {
                        glyph
                    } else {
                        glyph.to_ascii_lowercase()
                    };
                }
            }
        }

        let mut frame = String::with_capacity((cols + 1) * rows);
        for line in grid {
            frame.extend(line);
            frame.push('\n');
        }
        frame
    }

    pub fn draw_map(&self) {
        print!("{}", self.render_frame());
    }
}
