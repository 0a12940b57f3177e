use crate::events::AppEvent;
use async_channel::Sender;
use derive_more::{Deref, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgb;
use palette::rgb::FromHexError;
use scrollsnap::{
    ConfigurationError, KeyframeCurve, Pagination, Panel, PanelProperty, Settings,
    TransitionEffect,
};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Panel fill color, written as `#rrggbb` or `rgb`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay, Deref, From, Into)]
pub struct PanelColor(Srgb<u8>);

impl FromStr for PanelColor {
    type Err = FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for PanelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl PanelColor {
    pub fn to_srgba(self) -> palette::Srgba<f64> {
        let c = self.0.into_format::<f64>();
        palette::Srgba::new(c.red, c.green, c.blue, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PanelConfig {
    pub title: String,
    pub color: Option<PanelColor>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EffectConfig {
    pub property: PanelProperty,
    pub curve: KeyframeCurve,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,
    pub panels: Vec<PanelConfig>,
    pub effects: Vec<EffectConfig>,
    pub pagination: bool,
    pub deceleration_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        let panels = ["One", "Two", "Three", "Four", "Five"]
            .into_iter()
            .map(|title| PanelConfig {
                title: title.to_string(),
                color: None,
            })
            .collect();
        Self {
            settings: Settings::default(),
            panels,
            effects: Vec::new(),
            pagination: true,
            deceleration_rate: scrollsnap::surface::DECELERATION_RATE,
        }
    }
}

/// Fill used for panels without a configured color, cycled by index.
pub const PANEL_COLORS: &[&str] = &["#d94f4f", "#e0a33a", "#5fae5a", "#3f8fd2", "#8a63c9"];

pub fn default_color(index: usize) -> palette::Srgba<f64> {
    PANEL_COLORS[index % PANEL_COLORS.len()]
        .parse::<PanelColor>()
        .map(PanelColor::to_srgba)
        .unwrap_or_default()
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let count = self.panels.len();
        self.settings
            .validate(count, self.pagination.then_some(count))
    }

    pub fn build_panels(&self) -> Vec<Panel> {
        self.panels
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let color = p.color.map_or_else(|| default_color(i), PanelColor::to_srgba);
                Panel::new(p.title.clone()).with_color(color)
            })
            .collect()
    }

    pub fn build_effects(&self) -> Vec<TransitionEffect> {
        self.effects
            .iter()
            .map(|e| TransitionEffect::new(e.property, e.curve.clone()))
            .collect()
    }

    pub fn build_pagination(&self) -> Option<Pagination> {
        self.pagination.then(|| Pagination::new(self.panels.len()))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("Invalid carousel: {0}")]
    Carousel(#[from] ConfigurationError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "scrollsnap", "snapdeck").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn parse(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Config, ConfigError> {
    let config: Config = builder
        .add_source(
            config::Environment::with_prefix("SNAPDECK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;
    config.validate()?;
    Ok(config)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;
    parse(config::Config::builder().add_source(config::File::from(config_path).required(false)))
}

pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        match write_default_config() {
            Ok(path) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => log::warn!("Could not write default config to {}: {}", path.display(), e),
        }
    }

    load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

fn watch(dir: &Path, bridge_tx: Sender<notify::Result<notify::Event>>) -> Result<RecommendedWatcher, ConfigError> {
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    // dropping the watcher stops the notifications
    let _watcher = match watch(&config_dir, bridge_tx) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to watch config directory: {}", e);
            return;
        }
    };

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
