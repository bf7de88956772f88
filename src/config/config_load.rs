// src/config/config_load.rs
//
// Loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub map: MapConfig,
    pub animation: AnimationConfig,
    pub icons: IconConfig,
    pub style: StyleConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try exe directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fall back to current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if !config_path.exists() {
            return None;
        }

        let content = fs::read_to_string(&config_path).ok()?;
        toml::from_str(&content).ok()
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn resolve_route_path(&self) -> PathBuf {
        resolve_relative(&self.paths.route_file)
    }

    pub fn resolve_assets_dir(&self) -> PathBuf {
        resolve_relative(&self.paths.assets_directory)
    }

    pub fn resolve_tile_cache_dir(&self) -> PathBuf {
        resolve_relative(&self.paths.tile_cache_directory)
    }
}

/// Absolute paths pass through. Relative paths prefer the executable's
/// directory when the target exists there, else resolve against the
/// working directory.
fn resolve_relative(path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        return PathBuf::from(path);
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        let candidate = exe_dir.join(path);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_config_parses() {
        let config: Config = toml::from_str(include_str!("../../config.toml")).unwrap();
        assert_eq!(config.map.zoom, 12);
        assert_eq!(config.map.tile_subdomains.len(), 3);
        assert_eq!(config.animation.steps, 200);
        assert_eq!(config.animation.frame_duration, 0.0);
        assert_eq!(config.animation.heading_offset_deg, 40.0);
        assert!(config.paths.route_file.ends_with(".json"));
    }

    #[test]
    fn test_absolute_paths_are_left_alone() {
        let path = if cfg!(windows) { r"C:\maps\route.json" } else { "/maps/route.json" };
        assert_eq!(resolve_relative(path), PathBuf::from(path));
    }
}
