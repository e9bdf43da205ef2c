//! Runtime configuration from environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::{ParsedMap, Tuning, WorldMap};
use crate::types::POINTER_SENSITIVITY;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Directory holding textures and sounds.
    pub assets_dir: PathBuf,
    /// Map file; the built-in level when unset.
    pub map_path: Option<PathBuf>,
    pub seed: Option<u64>,
    /// Radians of turn per terminal column of pointer motion.
    pub mouse_sensitivity: f32,
    pub mute: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            map_path: None,
            seed: None,
            mouse_sensitivity: POINTER_SENSITIVITY,
            mute: false,
            log_path: None,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let assets_dir = lookup("RAYCASTER_ASSETS")
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let map_path = lookup("RAYCASTER_MAP").and_then(non_empty).map(PathBuf::from);

        let seed = lookup("RAYCASTER_SEED").and_then(|s| s.trim().parse().ok());

        let mouse_sensitivity = lookup("RAYCASTER_MOUSE_SENS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|v: &f32| v.is_finite())
            .unwrap_or(defaults.mouse_sensitivity);

        let mute = lookup("RAYCASTER_MUTE")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let log_path = lookup("RAYCASTER_LOG").and_then(non_empty).map(PathBuf::from);

        Self {
            assets_dir,
            map_path,
            seed,
            mouse_sensitivity,
            mute,
            log_path,
        }
    }

    pub fn tuning(&self) -> Tuning {
        Tuning::default().with_pointer_sensitivity(self.mouse_sensitivity)
    }

    /// Configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Load the configured map file, or the built-in level.
    pub fn load_map(&self) -> Result<ParsedMap> {
        match &self.map_path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read map {}", path.display()))?;
                WorldMap::parse(&text).with_context(|| format!("parse map {}", path.display()))
            }
            None => WorldMap::builtin().context("built-in map"),
        }
    }
}
