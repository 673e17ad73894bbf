//! Cookie Clicker Library
//!
//! A small clicker game whose rules run independently or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
