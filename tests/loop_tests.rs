//! Game loop validation test
//!
//! Drives `SimWorld::step` the way a frontend would and checks the
//! per-iteration protocol.

use cookie_clicker::simulation::{
    GameEffect, InputEvent, LoopState, SimWorld, UpgradeKind, COOKIE_ORIGIN,
};

const NO_EVENTS: [InputEvent; 0] = [];

fn cookie_click(world: &SimWorld) -> InputEvent {
    InputEvent::PointerDown(world.cookie.region.center())
}

fn upgrade_click(world: &SimWorld, kind: UpgradeKind) -> InputEvent {
    let upgrade = world.upgrade(kind).expect("upgrade should exist");
    InputEvent::PointerDown(upgrade.region.center())
}

#[test]
fn test_world_initialization() {
    let world = SimWorld::new();
    assert!(world.is_running());
    assert_eq!(world.ticks, 0);
    assert_eq!(world.player.score, 0.0);

    let kinds: Vec<UpgradeKind> = world.upgrades.iter().map(|u| u.kind).collect();
    assert_eq!(kinds, UpgradeKind::all().to_vec());
}

#[test]
fn test_click_cookie_then_rejected_purchase() {
    let mut world = SimWorld::new();

    let click = cookie_click(&world);
    let report = world.step([click]);
    assert_eq!(world.player.score, 1.0);
    assert_eq!(
        report.effects,
        vec![GameEffect::PlayCrunch, GameEffect::StopMusic]
    );

    let buy = upgrade_click(&world, UpgradeKind::Grandma);
    let report = world.step([buy]);
    assert_eq!(world.player.score, 1.0);
    assert_eq!(world.upgrade(UpgradeKind::Grandma).unwrap().owned_count, 0);
    assert_eq!(
        report.effects,
        vec![GameEffect::PurchaseRejected(UpgradeKind::Grandma)]
    );
}

#[test]
fn test_successful_purchase_through_loop() {
    let mut world = SimWorld::new();
    world.player.score = 10.0;

    let buy = upgrade_click(&world, UpgradeKind::Grandma);
    let report = world.step([buy]);

    let grandma = world.upgrade(UpgradeKind::Grandma).unwrap();
    assert_eq!(world.player.score, 0.0);
    assert_eq!(grandma.owned_count, 1);
    assert_eq!(grandma.base_cost, 20.0);
    assert_eq!(world.player.yield_per_second, 1.0);
    assert_eq!(
        report.effects,
        vec![GameEffect::Purchased(UpgradeKind::Grandma)]
    );

    // Income is applied at the start of the next iteration
    let report = world.step(NO_EVENTS);
    assert_eq!(report.income, 1.0);
    assert_eq!(world.player.score, 1.0);
}

#[test]
fn test_income_applied_before_events() {
    let mut world = SimWorld::new();
    world.player.score = 9.0;
    world.player.yield_per_second = 1.0;

    // The tick brings the score to 10, which pays for the Grandma
    let buy = upgrade_click(&world, UpgradeKind::Grandma);
    world.step([buy]);
    assert_eq!(world.upgrade(UpgradeKind::Grandma).unwrap().owned_count, 1);
    assert_eq!(world.player.score, 0.0);
}

#[test]
fn test_visual_state_refreshed_after_income() {
    let mut world = SimWorld::new();
    world.player.score = 9.0;
    world.player.yield_per_second = 1.0;

    world.step(NO_EVENTS);
    assert!(world.upgrade(UpgradeKind::Grandma).unwrap().visual_enabled);
    assert!(!world.upgrade(UpgradeKind::Grandpa).unwrap().visual_enabled);
}

#[test]
fn test_click_outside_targets_is_ignored() {
    let mut world = SimWorld::new();
    let report = world.step([InputEvent::pointer_down(1100.0, 880.0)]);
    assert!(report.effects.is_empty());
    assert_eq!(world.player.score, 0.0);
}

#[test]
fn test_cookie_corner_is_clickable() {
    let mut world = SimWorld::new();
    world.step([InputEvent::PointerDown(COOKIE_ORIGIN)]);
    assert_eq!(world.player.score, 1.0);
}

#[test]
fn test_quit_stops_loop_and_drops_later_events() {
    let mut world = SimWorld::new();
    let click = cookie_click(&world);

    let report = world.step([click, InputEvent::Quit, click]);
    assert_eq!(world.state, LoopState::Stopped);
    assert_eq!(world.player.score, 1.0);
    assert_eq!(report.effects.last(), Some(&GameEffect::Quit));
    assert_eq!(world.ticks, 1);
}

#[test]
fn test_stopped_world_ignores_steps() {
    let mut world = SimWorld::new();
    world.player.yield_per_second = 5.0;
    world.step([InputEvent::Quit]);
    let score = world.player.score;

    let click = cookie_click(&world);
    let report = world.step([click]);
    assert!(report.effects.is_empty());
    assert_eq!(report.income, 0.0);
    assert_eq!(world.player.score, score);
    assert_eq!(world.ticks, 1);
    assert_eq!(world.advance_tick(), 0.0);
}

#[test]
fn test_yield_matches_owned_upgrades() {
    let mut world = SimWorld::new();
    world.player.score = 5000.0;

    let events = vec![
        upgrade_click(&world, UpgradeKind::Grandma),
        upgrade_click(&world, UpgradeKind::Grandma),
        upgrade_click(&world, UpgradeKind::Grandpa),
        upgrade_click(&world, UpgradeKind::CrumbleCookie),
    ];
    world.step(events);

    assert_eq!(world.player.yield_per_second, 1.0 + 1.0 + 2.0 + 10.0);
    assert_eq!(world.total_yield(), world.player.yield_per_second);
}

#[test]
fn test_render_frame_marks_targets() {
    let mut world = SimWorld::new();
    let frame = world.render_frame();
    let rows: Vec<&str> = frame.lines().collect();
    assert_eq!(rows.len(), 18);
    assert!(rows.iter().all(|row| row.chars().count() == 57));
    assert!(frame.contains('C'));
    assert!(rows[1].starts_with("ggggg"));

    world.player.score = 10.0;
    world.refresh_upgrades();
    let frame = world.render_frame();
    assert!(frame.lines().nth(1).unwrap().starts_with("GGGGG"));
}

#[test]
fn test_overlapping_targets_resolve_in_priority_order() {
    let mut world = SimWorld::new();
    world.player.score = 10.0;

    // Grandpa shares Grandma's square; the earlier upgrade wins
    world.upgrades[1].region = world.upgrades[0].region;
    let click = InputEvent::PointerDown(world.upgrades[0].region.center());
    let report = world.step([click]);
    assert_eq!(
        report.effects,
        vec![GameEffect::Purchased(UpgradeKind::Grandma)]
    );
    assert_eq!(world.upgrade(UpgradeKind::Grandpa).unwrap().owned_count, 0);

    // The cookie beats every upgrade
    world.player.score = 20.0;
    world.cookie.region = world.upgrades[0].region;
    let report = world.step([click]);
    assert_eq!(
        report.effects,
        vec![GameEffect::PlayCrunch, GameEffect::StopMusic]
    );
    assert_eq!(world.upgrade(UpgradeKind::Grandma).unwrap().owned_count, 1);
    assert_eq!(world.upgrade(UpgradeKind::Grandpa).unwrap().owned_count, 0);
    assert_eq!(world.player.score, 22.0);
}
