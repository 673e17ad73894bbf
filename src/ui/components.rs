//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{SimWorld, UpgradeKind};

/// Resource wrapper for the simulation world
#[derive(Resource, Default)]
pub struct SimWorldResource(pub SimWorld);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Links an icon entity to a simulation upgrade
#[derive(Component)]
pub struct UpgradeIcon(pub UpgradeKind);

/// Links a price label entity to a simulation upgrade
#[derive(Component)]
pub struct UpgradePriceText(pub UpgradeKind);

/// Marker for the score display text elements
#[derive(Component)]
pub enum ScoreText {
    /// Current cookie count
    Score,
    /// Cookies per second
    Yield,
}

/// Marker for the looping background track
#[derive(Component)]
pub struct BackgroundMusic;
