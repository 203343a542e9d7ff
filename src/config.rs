//! Settings
//!
//! Read once at startup from `playroom.ron` in the working directory, or from
//! the file named by `PLAYROOM_CONFIG`. Every field has a default, so the file
//! is optional and may list only what it changes:
//!
//! ```ron
//! (
//!     window: (fps_limit: Fps30),
//!     rounds: (items: 24),
//! )
//! ```

use std::path::{Path, PathBuf};
use macroquad::miniquad::conf::Conf;
use serde::{Deserialize, Serialize};
use crate::error::GameError;
use crate::runtime::FpsLimit;

/// Default settings file name
pub const CONFIG_FILE: &str = "playroom.ron";

/// Environment variable overriding the settings file path
pub const CONFIG_ENV: &str = "PLAYROOM_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub assets: AssetSettings,
    pub rounds: RoundSettings,
    pub mouse: MouseSettings,
    pub map: MapSettings,
    pub counting: CountingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            assets: AssetSettings::default(),
            rounds: RoundSettings::default(),
            mouse: MouseSettings::default(),
            map: MapSettings::default(),
            counting: CountingSettings::default(),
        }
    }
}

impl Settings {
    /// Settings file path: `PLAYROOM_CONFIG` if set, else `playroom.ron`
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    pub fn load() -> Result<Self, GameError> {
        Self::load_from(Self::path())
    }

    /// Missing file means defaults. An unreadable file is an I/O error, a
    /// malformed one a config error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| GameError::Io(format!("{}: {}", path.display(), e)))?;
        let settings = Self::parse(&text)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Self, GameError> {
        Ok(ron::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: i32,
    pub height: i32,
    pub resizable: bool,
    pub high_dpi: bool,
    pub fps_limit: FpsLimit,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            resizable: true,
            high_dpi: false,
            fps_limit: FpsLimit::Fps60,
        }
    }
}

impl WindowSettings {
    pub fn conf(&self, title: &str) -> Conf {
        Conf {
            window_title: title.to_string(),
            window_width: self.width,
            window_height: self.height,
            window_resizable: self.resizable,
            high_dpi: self.high_dpi,
            ..Default::default()
        }
    }
}

/// A sprite and how often it is picked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedAsset {
    pub path: String,
    pub weight: f32,
}

impl WeightedAsset {
    fn new(path: &str, weight: f32) -> Self {
        Self { path: path.to_string(), weight }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub player: String,
    pub items: Vec<WeightedAsset>,
    /// Sprites the counting game picks from
    pub counters: Vec<String>,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            player: "assets/mouse.png".to_string(),
            items: vec![
                WeightedAsset::new("assets/cheese.png", 0.8),
                WeightedAsset::new("assets/apple.png", 0.2),
            ],
            counters: vec!["assets/apple.png".to_string()],
        }
    }
}

/// Shared by every collecting round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundSettings {
    /// Items scattered at the start of a round
    pub items: usize,
    /// Seconds the empty field stays up before the next round
    pub timeout: f32,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self { items: 16, timeout: 1.0 }
    }
}

/// Mouse game: play area is the window, units are pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseSettings {
    /// Pixels per second
    pub speed: f32,
    /// Sprites are drawn at this multiple of their native size
    pub sprite_scale: f32,
}

impl Default for MouseSettings {
    fn default() -> Self {
        Self { speed: 300.0, sprite_scale: 2.0 }
    }
}

/// Collecting game: fixed map in map units, scaled to fit the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub width: f32,
    pub height: f32,
    pub player_radius: f32,
    pub item_radius: f32,
    /// Map units per second
    pub speed: f32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            width: 42.0,
            height: 24.0,
            player_radius: 1.0,
            item_radius: 0.5,
            speed: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountingSettings {
    pub sprite_scale: f32,
    /// Gap between neighbouring sprites; doubled between groups of five
    pub padding: f32,
    pub font_size: u16,
}

impl Default for CountingSettings {
    fn default() -> Self {
        Self { sprite_scale: 4.0, padding: 10.0, font_size: 160 }
    }
}
