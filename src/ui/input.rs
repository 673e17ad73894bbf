//! Input handling systems

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowCloseRequested};

use super::assets::GameAssets;
use super::components::{BackgroundMusic, SimWorldResource};
use crate::simulation::{GameEffect, InputEvent, ScreenPoint};

/// Translate one frame of raw window input into simulation events. The click
/// comes first so a click and a quit in the same frame both count.
pub fn collect_input_events(
    click_at: Option<Vec2>,
    escape_pressed: bool,
    close_requested: bool,
) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if let Some(cursor) = click_at {
        events.push(InputEvent::PointerDown(ScreenPoint::new(cursor.x, cursor.y)));
    }
    if escape_pressed || close_requested {
        events.push(InputEvent::Quit);
    }
    events
}

/// Collect this frame's clicks and quit requests (Escape or closing the
/// window) and feed them to the simulation, then play out the effects it reports
pub fn handle_input(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    assets: Res<GameAssets>,
    music_query: Query<Entity, With<BackgroundMusic>>,
    mut close_requests: MessageReader<WindowCloseRequested>,
    mut sim_world: ResMut<SimWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    let click_at = if mouse.just_pressed(MouseButton::Left) {
        windows
            .single()
            .ok()
            .and_then(|window| window.cursor_position())
    } else {
        None
    };
    let close_requested = close_requests.read().count() > 0;
    let events = collect_input_events(
        click_at,
        keyboard.just_pressed(KeyCode::Escape),
        close_requested,
    );

    let mut effects = Vec::new();
    for event in events {
        sim_world.0.handle_event(event, &mut effects);
    }

    for effect in effects {
        match effect {
            GameEffect::PlayCrunch => {
                commands.spawn((
                    AudioPlayer::new(assets.crunch.clone()),
                    PlaybackSettings::DESPAWN,
                ));
            }
            GameEffect::StopMusic => {
                for entity in music_query.iter() {
                    commands.entity(entity).despawn();
                }
            }
            // Already logged by the simulation
            GameEffect::Purchased(_) | GameEffect::PurchaseRejected(_) => {}
            GameEffect::Quit => {
                exit.write(AppExit::Success);
            }
        }
    }
}
