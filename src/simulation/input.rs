//! Events fed into the game loop and the effects it hands back to a frontend

use super::types::ScreenPoint;
use super::upgrade::UpgradeKind;

/// A discrete input event drained from the window once per iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed at a window position
    PointerDown(ScreenPoint),
    /// Window closed or quit requested
    Quit,
}

impl InputEvent {
    pub fn pointer_down(x: f32, y: f32) -> Self {
        InputEvent::PointerDown(ScreenPoint::new(x, y))
    }
}

/// Something the frontend has to act on after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEffect {
    /// One-shot crunch sound for a cookie click
    PlayCrunch,
    /// Stop any background music
    StopMusic,
    Purchased(UpgradeKind),
    PurchaseRejected(UpgradeKind),
    Quit,
}
