//! Core types for the clicker simulation
//!
//! These are standalone types that don't depend on Bevy. All coordinates are
//! logical window pixels with the origin at the top-left corner.

/// Window width in logical pixels
pub const WINDOW_WIDTH: u32 = 1140;

/// Window height in logical pixels
pub const WINDOW_HEIGHT: u32 = 900;

/// A point on the screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle on the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner
    pub origin: ScreenPoint,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: ScreenPoint::new(x, y),
            width,
            height,
        }
    }

    /// Hit-test a point. The left and top edges are inside, the right and
    /// bottom edges are not.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.height
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }
}

/// Whether the game loop should keep iterating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    /// Terminal; reached on a quit event
    Stopped,
}
