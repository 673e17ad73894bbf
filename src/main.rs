use std::time::Duration;

use clap::Parser;
use log::info;

use cookie_clicker::simulation::{InputEvent, SimWorld};
#[cfg(feature = "ui")]
use cookie_clicker::ui;

#[derive(Parser)]
#[command(name = "cookie_clicker")]
#[command(about = "Cookie clicker game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Directory holding the images and sounds
    #[arg(long, default_value = "assets")]
    assets: String,

    /// Optional background music file, relative to the asset directory
    #[arg(long)]
    music: Option<String>,

    /// Number of loop iterations to run in headless mode
    #[arg(long, default_value = "30")]
    ticks: u32,

    /// Milliseconds to sleep between headless iterations
    #[arg(long, default_value = "1000")]
    tick_ms: u64,

    /// Scripted cookie clicks per headless iteration
    #[arg(long, default_value = "1")]
    clicks_per_tick: u32,

    /// Click every upgrade once per headless iteration
    #[arg(long)]
    auto_buy: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            if let Err(e) = run_with_ui(&cli) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
        run_headless(&cli);
    }
}

/// Scripted input for one headless iteration
fn scripted_events(world: &SimWorld, clicks: u32, auto_buy: bool) -> Vec<InputEvent> {
    let cookie = world.cookie.region.center();
    let mut events: Vec<InputEvent> = (0..clicks)
        .map(|_| InputEvent::PointerDown(cookie))
        .collect();

    if auto_buy {
        events.extend(
            world
                .upgrades
                .iter()
                .map(|upgrade| InputEvent::PointerDown(upgrade.region.center())),
        );
    }
    events
}

/// Run the game loop in headless mode (no graphics)
fn run_headless(cli: &Cli) {
    println!("Running cookie clicker in headless mode...");
    println!(
        "Ticks: {}, Interval: {}ms, Clicks per tick: {}, Auto-buy: {}",
        cli.ticks, cli.tick_ms, cli.clicks_per_tick, cli.auto_buy
    );
    println!();

    let mut world = SimWorld::new();

    println!("Initial state:");
    world.print_summary();
    world.draw_map();
    println!();

    for tick in 1..=cli.ticks {
        let mut events = scripted_events(&world, cli.clicks_per_tick, cli.auto_buy);
        if tick == cli.ticks {
            events.push(InputEvent::Quit);
        }

        let report = world.step(events);

        println!("--- After tick {} (+{} passive) ---", tick, report.income);
        world.print_summary();
        world.draw_map();
        println!();

        if !world.is_running() {
            break;
        }
        std::thread::sleep(Duration::from_millis(cli.tick_ms));
    }

    info!("=== GAME OVER ===");
    info!("{}", world.player.score_label());
    info!("{}", world.player.yield_label());
    for upgrade in &world.upgrades {
        info!("{} owned: {}", upgrade.kind.name(), upgrade.owned_count);
    }
}

#[cfg(feature = "ui")]
fn run_with_ui(cli: &Cli) -> anyhow::Result<()> {
    use anyhow::Context;
    use bevy::log::LogPlugin;
    use bevy::prelude::*;
    use cookie_clicker::simulation::{WINDOW_HEIGHT, WINDOW_WIDTH};

    let manifest = ui::AssetManifest::new(&cli.assets, cli.music.clone());
    manifest
        .verify()
        .context("cannot start without the game assets")?;

    println!("Starting Cookie Clicker UI...");
    println!();
    println!("Controls:");
    println!("  Click cookie   - Earn a cookie");
    println!("  Click upgrade  - Buy it when affordable");
    println!("  ESC            - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,cookie_clicker=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: manifest.file_path(),
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Cookie Clicker".into(),
                        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(ui::CookieClickerUIPlugin { manifest })
        .run();

    Ok(())
}
