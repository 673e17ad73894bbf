//! Asset manifest and loading
//!
//! Every file the game needs is checked on disk before the window opens, and
//! every handle is watched until it loads, so a missing or undecodable asset
//! ends the game instead of rendering a blank sprite.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

use crate::simulation::UpgradeKind;

pub const BACKGROUND_IMAGE: &str = "images/game_background.png";
pub const COOKIE_IMAGE: &str = "images/cookie.png";
pub const CRUNCH_SOUND: &str = "sounds/crunch.ogg";

/// Icon file for an upgrade, relative to the asset root
pub fn upgrade_icon_path(kind: UpgradeKind) -> &'static str {
    match kind {
        UpgradeKind::Grandma => "images/gma.png",
        UpgradeKind::Grandpa => "images/grandfather.png",
        UpgradeKind::CrumbleCookie => "images/crumble_cookie.png",
    }
}

/// Where the game's assets live and which optional ones are in use
#[derive(Resource, Debug, Clone)]
pub struct AssetManifest {
    pub root: PathBuf,
    /// Optional background track, relative to `root`
    pub music: Option<String>,
}

impl AssetManifest {
    pub fn new(root: impl Into<PathBuf>, music: Option<String>) -> Self {
        Self {
            root: root.into(),
            music,
        }
    }

    /// All files that must exist, relative to the asset root
    pub fn required_files(&self) -> Vec<&str> {
        let mut files = vec![BACKGROUND_IMAGE, COOKIE_IMAGE, CRUNCH_SOUND];
        files.extend(UpgradeKind::all().into_iter().map(upgrade_icon_path));
        if let Some(music) = &self.music {
            files.push(music.as_str());
        }
        files
    }

    /// Fail if the asset root or any required file is missing
    pub fn verify(&self) -> Result<()> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("asset directory {} not found", self.root.display()))?;

        for file in self.required_files() {
            let path = root.join(file);
            if !path.is_file() {
                bail!("missing asset {} (looked in {})", file, root.display());
            }
        }
        Ok(())
    }

    /// Asset root as handed to Bevy's `AssetPlugin`. Absolute so that Bevy
    /// resolves it against the working directory like `verify` does.
    pub fn file_path(&self) -> String {
        self.root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone())
            .to_string_lossy()
            .into_owned()
    }
}

/// Loaded handles for every asset
#[derive(Resource)]
pub struct GameAssets {
    pub background: Handle<Image>,
    pub cookie: Handle<Image>,
    pub upgrade_icons: HashMap<UpgradeKind, Handle<Image>>,
    pub crunch: Handle<AudioSource>,
    pub music: Option<Handle<AudioSource>>,
    /// Path the music handle was loaded from
    pub music_path: Option<String>,
}

impl GameAssets {
    pub fn icon(&self, kind: UpgradeKind) -> Handle<Image> {
        self.upgrade_icons.get(&kind).cloned().unwrap_or_default()
    }

    /// Every handle paired with the file it was loaded from
    pub fn named_ids(&self) -> Vec<(String, UntypedAssetId)> {
        let mut ids = vec![
            (BACKGROUND_IMAGE.to_string(), self.background.id().untyped()),
            (COOKIE_IMAGE.to_string(), self.cookie.id().untyped()),
            (CRUNCH_SOUND.to_string(), self.crunch.id().untyped()),
        ];
        for kind in UpgradeKind::all() {
            if let Some(icon) = self.upgrade_icons.get(&kind) {
                ids.push((upgrade_icon_path(kind).to_string(), icon.id().untyped()));
            }
        }
        if let (Some(path), Some(music)) = (&self.music_path, &self.music) {
            ids.push((path.clone(), music.id().untyped()));
        }
        ids
    }
}

/// Load progress of a single asset, detached from Bevy's types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Loading,
    Loaded,
    Failed(String),
}

impl From<LoadState> for AssetStatus {
    fn from(state: LoadState) -> Self {
        match state {
            LoadState::Loaded => AssetStatus::Loaded,
            LoadState::Failed(err) => AssetStatus::Failed(err.to_string()),
            _ => AssetStatus::Loading,
        }
    }
}

/// What to do with the game given the status of every asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetVerdict {
    /// Still waiting on at least one asset
    Pending,
    Ready,
    /// One line per failed asset
    Failed(Vec<String>),
}

/// Any failure is fatal, even while other assets are still loading
pub fn load_verdict(statuses: &[(String, AssetStatus)]) -> AssetVerdict {
    let failures: Vec<String> = statuses
        .iter()
        .filter_map(|(name, status)| match status {
            AssetStatus::Failed(reason) => Some(format!("{}: {}", name, reason)),
            _ => None,
        })
        .collect();

    if !failures.is_empty() {
        AssetVerdict::Failed(failures)
    } else if statuses
        .iter()
        .all(|(_, status)| *status == AssetStatus::Loaded)
    {
        AssetVerdict::Ready
    } else {
        AssetVerdict::Pending
    }
}

/// System to exit with an error as soon as any asset fails to load
pub fn check_asset_loads(
    asset_server: Res<AssetServer>,
    assets: Res<GameAssets>,
    mut settled: Local<bool>,
    mut exit: MessageWriter<AppExit>,
) {
    if *settled {
        return;
    }

    let statuses: Vec<(String, AssetStatus)> = assets
        .named_ids()
        .into_iter()
        .map(|(name, id)| (name, AssetStatus::from(asset_server.load_state(id))))
        .collect();

    match load_verdict(&statuses) {
        AssetVerdict::Pending => {}
        AssetVerdict::Ready => {
            bevy::log::info!("All {} assets loaded", statuses.len());
            *settled = true;
        }
        AssetVerdict::Failed(failures) => {
            for failure in &failures {
                bevy::log::error!("Failed to load asset {}", failure);
            }
            exit.write(AppExit::error());
            *settled = true;
        }
    }
}

/// System to queue every asset with the asset server
pub fn load_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifest: Res<AssetManifest>,
) {
    let upgrade_icons = UpgradeKind::all()
        .into_iter()
        .map(|kind| (kind, asset_server.load(upgrade_icon_path(kind))))
        .collect();

    commands.insert_resource(GameAssets {
        background: asset_server.load(BACKGROUND_IMAGE),
        cookie: asset_server.load(COOKIE_IMAGE),
        upgrade_icons,
        crunch: asset_server.load(CRUNCH_SOUND),
        music: manifest.music.clone().map(|music| asset_server.load(music)),
        music_path: manifest.music.clone(),
    });
}
