//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for presentation - all game rules are in the
//! `simulation` module. The UI reads state from `SimWorld`, renders it as
//! absolutely positioned UI nodes and turns mouse clicks into input events.

pub mod assets;
mod components;
mod input;
mod spawner;
mod sync;

use bevy::prelude::*;

pub use assets::AssetManifest;
pub use components::SimWorldResource;
pub use input::collect_input_events;

use assets::{check_asset_loads, load_assets};
use input::handle_input;
use spawner::spawn_scene;
use sync::{sync_score_text, sync_upgrades, tick_income};

/// Seconds between passive income ticks
pub const INCOME_INTERVAL_SECS: f64 = 1.0;

/// Plugin to register all UI systems
pub struct CookieClickerUIPlugin {
    pub manifest: AssetManifest,
}

impl Plugin for CookieClickerUIPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.manifest.clone())
            .init_resource::<SimWorldResource>()
            .insert_resource(Time::<Fixed>::from_seconds(INCOME_INTERVAL_SECS))
            .add_systems(Startup, (load_assets, spawn_scene).chain())
            .add_systems(FixedUpdate, tick_income)
            .add_systems(Update, check_asset_loads)
            .add_systems(
                Update,
                (handle_input, sync_upgrades, sync_score_text).chain(),
            );
    }
}
