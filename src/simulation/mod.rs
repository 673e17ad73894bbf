//! Standalone clicker simulation module
//!
//! This module contains all of the game rules and can run independently of
//! the Bevy game engine. It can be tested via console without needing to
//! boot up the full game.

mod cookie;
mod input;
mod player;
mod types;
mod upgrade;
mod world;

pub use cookie::{SimCookie, COOKIE_ORIGIN, COOKIE_SIZE};
pub use input::{GameEffect, InputEvent};
pub use player::{Player, COOKIES_PER_CLICK, SECONDS_PER_TICK};
pub use types::{LoopState, ScreenPoint, ScreenRect, WINDOW_HEIGHT, WINDOW_WIDTH};
pub use upgrade::{
    Upgrade, UpgradeKind, DISABLED_ALPHA, ENABLED_ALPHA, PRICE_LABEL_OFFSET_X, UPGRADE_ICON_SIZE,
};
pub use world::{SimWorld, StepReport};
