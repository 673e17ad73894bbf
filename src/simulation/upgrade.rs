//! Purchasable upgrades
//!
//! Every upgrade shares the same rules; the kinds only differ in their
//! starting cost, yield and screen placement.

use log::debug;

use super::player::Player;
use super::types::{ScreenPoint, ScreenRect};

/// Side length of an upgrade icon in logical pixels
pub const UPGRADE_ICON_SIZE: f32 = 100.0;

/// Horizontal offset of the price label from the icon's left edge
pub const PRICE_LABEL_OFFSET_X: f32 = 115.0;

/// Alpha of an icon the player can afford
pub const ENABLED_ALPHA: f32 = 1.0;

/// Alpha of an icon the player cannot afford yet
pub const DISABLED_ALPHA: f32 = 0.5;

/// The three upgrades offered by the shop, in hit-test priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeKind {
    Grandma,
    Grandpa,
    CrumbleCookie,
}

impl UpgradeKind {
    /// All kinds in declaration order.
    pub fn all() -> [UpgradeKind; 3] {
        [
            UpgradeKind::Grandma,
            UpgradeKind::Grandpa,
            UpgradeKind::CrumbleCookie,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeKind::Grandma => "Grandma",
            UpgradeKind::Grandpa => "Grandpa",
            UpgradeKind::CrumbleCookie => "Crumble Cookie",
        }
    }

    /// Cost of the first purchase
    pub fn initial_cost(&self) -> f64 {
        match self {
            UpgradeKind::Grandma => 10.0,
            UpgradeKind::Grandpa => 100.0,
            UpgradeKind::CrumbleCookie => 1000.0,
        }
    }

    /// Cookies per second contributed by each owned unit
    pub fn yield_per_unit(&self) -> f64 {
        match self {
            UpgradeKind::Grandma => 1.0,
            UpgradeKind::Grandpa => 2.0,
            UpgradeKind::CrumbleCookie => 10.0,
        }
    }

    /// Top-left corner of the icon
    pub fn icon_origin(&self) -> ScreenPoint {
        match self {
            UpgradeKind::Grandma => ScreenPoint::new(0.0, 50.0),
            UpgradeKind::Grandpa => ScreenPoint::new(0.0, 200.0),
            UpgradeKind::CrumbleCookie => ScreenPoint::new(0.0, 350.0),
        }
    }
}

/// A purchasable upgrade and its purchase history
#[derive(Debug, Clone, PartialEq)]
pub struct Upgrade {
    pub kind: UpgradeKind,

    /// Price of the next unit; doubles after every purchase
    pub base_cost: f64,

    pub yield_per_unit: f64,

    pub owned_count: u32,

    /// Clickable icon area
    pub region: ScreenRect,

    /// Where the price label is drawn
    pub price_anchor: ScreenPoint,

    /// True when the player can currently afford the next unit
    pub visual_enabled: bool,
}

impl Upgrade {
    pub fn new(kind: UpgradeKind) -> Self {
        let origin = kind.icon_origin();
        Self {
            kind,
            base_cost: kind.initial_cost(),
            yield_per_unit: kind.yield_per_unit(),
            owned_count: 0,
            region: ScreenRect::new(origin.x, origin.y, UPGRADE_ICON_SIZE, UPGRADE_ICON_SIZE),
            price_anchor: ScreenPoint::new(origin.x + PRICE_LABEL_OFFSET_X, origin.y),
            visual_enabled: false,
        }
    }

    /// Buy one unit if the player can afford it.
    /// Returns false and leaves everything untouched otherwise.
    pub fn attempt_purchase(&mut self, player: &mut Player) -> bool {
        if !player.spend(self.base_cost) {
            debug!(
                "{} rejected: {} cookies < cost {}",
                self.kind.name(),
                player.score,
                self.base_cost
            );
            return false;
        }

        player.yield_per_second += self.yield_per_unit;
        self.owned_count += 1;
        self.base_cost *= 2.0;
        debug!(
            "{} purchased (owned {}), next cost {}",
            self.kind.name(),
            self.owned_count,
            self.base_cost
        );
        true
    }

    /// Dim the icon when the next unit is unaffordable
    pub fn refresh_visual_state(&mut self, player: &Player) {
        self.visual_enabled = player.can_afford(self.base_cost);
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        self.region.contains(point)
    }

    /// Yield of all owned units
    pub fn total_yield(&self) -> f64 {
        f64::from(self.owned_count) * self.yield_per_unit
    }

    pub fn icon_alpha(&self) -> f32 {
        if self.visual_enabled {
            ENABLED_ALPHA
        } else {
            DISABLED_ALPHA
        }
    }

    /// Price as displayed, truncated toward zero
    pub fn price_label(&self) -> String {
        format!("{}", self.base_cost.trunc() as u64)
    }
}
