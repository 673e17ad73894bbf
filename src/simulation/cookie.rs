//! The clickable cookie

use super::types::{ScreenPoint, ScreenRect};

/// Top-left corner of the cookie image
pub const COOKIE_ORIGIN: ScreenPoint = ScreenPoint { x: 275.0, y: 150.0 };

/// Side length of the cookie image in logical pixels
pub const COOKIE_SIZE: f32 = 400.0;

/// A passive click target; its hit region is the area it is drawn in
#[derive(Debug, Clone, PartialEq)]
pub struct SimCookie {
    pub region: ScreenRect,
}

impl Default for SimCookie {
    fn default() -> Self {
        Self::new()
    }
}

impl SimCookie {
    pub fn new() -> Self {
        Self {
            region: ScreenRect::new(COOKIE_ORIGIN.x, COOKIE_ORIGIN.y, COOKIE_SIZE, COOKIE_SIZE),
        }
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        self.region.contains(point)
    }
}
