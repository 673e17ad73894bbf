//! Systems for spawning the visual entities of the frame

use bevy::prelude::*;

use super::assets::GameAssets;
use super::components::{
    BackgroundMusic, MainCamera, ScoreText, SimWorldResource, UpgradeIcon,
    UpgradePriceText,
};
use crate::simulation::{ScreenPoint, ScreenRect, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Font size shared by every label
pub const LABEL_FONT_SIZE: f32 = 24.0;

/// Score label placement
const SCORE_TEXT_POS: ScreenPoint = ScreenPoint { x: 275.0, y: 50.0 };

/// Yield label placement
const YIELD_TEXT_POS: ScreenPoint = ScreenPoint { x: 275.0, y: 100.0 };

/// Absolutely positioned node covering a screen rectangle
fn rect_node(rect: ScreenRect) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(rect.origin.x),
        top: Val::Px(rect.origin.y),
        width: Val::Px(rect.width),
        height: Val::Px(rect.height),
        ..default()
    }
}

/// Absolutely positioned node anchored at its top-left corner
fn label_node(pos: ScreenPoint) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(pos.x),
        top: Val::Px(pos.y),
        ..default()
    }
}

fn label_bundle(text: String, pos: ScreenPoint) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: LABEL_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        label_node(pos),
    )
}

/// System to spawn the camera, background, cookie, labels and upgrade icons
pub fn spawn_scene(
    mut commands: Commands,
    assets: Res<GameAssets>,
    sim_world: Res<SimWorldResource>,
) {
    let world = &sim_world.0;

    commands.spawn((MainCamera, Camera2d));

    // Background sits behind everything else
    commands.spawn((
        ImageNode::new(assets.background.clone()),
        rect_node(ScreenRect::new(
            0.0,
            0.0,
            WINDOW_WIDTH as f32,
            WINDOW_HEIGHT as f32,
        )),
        ZIndex(-1),
    ));

    commands.spawn((
        ImageNode::new(assets.cookie.clone()),
        rect_node(world.cookie.region),
    ));

    commands.spawn((
        ScoreText::Score,
        label_bundle(world.player.score_label(), SCORE_TEXT_POS),
    ));
    commands.spawn((
        ScoreText::Yield,
        label_bundle(world.player.yield_label(), YIELD_TEXT_POS),
    ));

    for upgrade in &world.upgrades {
        commands.spawn((
            UpgradeIcon(upgrade.kind),
            ImageNode::new(assets.icon(upgrade.kind))
                .with_color(Color::srgba(1.0, 1.0, 1.0, upgrade.icon_alpha())),
            rect_node(upgrade.region),
        ));
        commands.spawn((
            UpgradePriceText(upgrade.kind),
            label_bundle(upgrade.price_label(), upgrade.price_anchor),
        ));
    }

    if let Some(music) = &assets.music {
        commands.spawn((
            BackgroundMusic,
            AudioPlayer::new(music.clone()),
            PlaybackSettings::LOOP,
        ));
    }
}
