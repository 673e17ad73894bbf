//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{ScoreText, SimWorldResource, UpgradeIcon, UpgradePriceText};

/// System to apply one tick of passive income, run on the fixed timestep
pub fn tick_income(mut sim_world: ResMut<SimWorldResource>) {
    sim_world.0.advance_tick();
}

/// System to dim unaffordable upgrades and refresh their price labels
pub fn sync_upgrades(
    mut sim_world: ResMut<SimWorldResource>,
    mut icon_query: Query<(&UpgradeIcon, &mut ImageNode)>,
    mut price_query: Query<(&UpgradePriceText, &mut Text)>,
) {
    let world = &mut sim_world.0;
    world.refresh_upgrades();

    for (icon, mut image) in icon_query.iter_mut() {
        if let Some(upgrade) = world.upgrade(icon.0) {
            image.color = Color::srgba(1.0, 1.0, 1.0, upgrade.icon_alpha());
        }
    }

    for (price, mut text) in price_query.iter_mut() {
        if let Some(upgrade) = world.upgrade(price.0) {
            **text = upgrade.price_label();
        }
    }
}

/// System to update the score and yield labels
pub fn sync_score_text(
    sim_world: Res<SimWorldResource>,
    mut text_query: Query<(&ScoreText, &mut Text)>,
) {
    let player = &sim_world.0.player;

    for (kind, mut text) in text_query.iter_mut() {
        **text = match kind {
            ScoreText::Score => player.score_label(),
            ScoreText::Yield => player.yield_label(),
        };
    }
}
