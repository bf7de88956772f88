// src/services/tile_source.rs
//
// Expands a web-map tile URL template into per-tile request URLs and
// derives the on-disk cache location for each tile.

use rand::Rng;
use regex::Regex;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::models::TileId;

pub struct TileSource {
    template: String,
    subdomains: Vec<String>,
    placeholder: Regex,
}

impl TileSource {
    /// Validates the template up front: `{z}`, `{x}` and `{y}` must all be
    /// present, and `{s}` needs at least one subdomain to pick from.
    pub fn new(template: &str, subdomains: &[String]) -> Result<Self, Box<dyn Error>> {
        for required in ["{z}", "{x}", "{y}"] {
            if !template.contains(required) {
                return Err(format!("Tile URL template is missing {}", required).into());
            }
        }
        if template.contains("{s}") && subdomains.is_empty() {
            return Err("Tile URL template uses {s} but no subdomains are configured".into());
        }

        Ok(Self {
            template: template.to_string(),
            subdomains: subdomains.to_vec(),
            placeholder: Regex::new(r"\{([szxy])\}")?,
        })
    }

    /// Request URL for a tile; `{s}` picks a random configured subdomain so
    /// requests spread across the server's aliases.
    pub fn url_for<R: Rng>(&self, tile: TileId, rng: &mut R) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            self.subdomains[rng.gen_range(0..self.subdomains.len())].as_str()
        };
        self.placeholder
            .replace_all(&self.template, |caps: &regex::Captures| match &caps[1] {
                "s" => subdomain.to_string(),
                "z" => tile.z.to_string(),
                "x" => tile.x.to_string(),
                _ => tile.y.to_string(),
            })
            .into_owned()
    }

    /// Where this tile lives in the on-disk cache: `<dir>/z/x/y.png`.
    pub fn cache_path(&self, cache_dir: &Path, tile: TileId) -> PathBuf {
        cache_dir
            .join(tile.z.to_string())
            .join(tile.x.to_string())
            .join(format!("{}.png", tile.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn osm_subdomains() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn test_substitutes_tile_coordinates() {
        let source = TileSource::new(
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            &osm_subdomains(),
        )
        .unwrap();
        let url = source.url_for(TileId::new(12, 3034, 1783), &mut rand::thread_rng());
        assert!(url.ends_with(".tile.openstreetmap.org/12/3034/1783.png"), "got {}", url);
        let host = ["https://a.", "https://b.", "https://c."];
        assert!(host.iter().any(|h| url.starts_with(h)), "got {}", url);
    }

    #[test]
    fn test_template_without_subdomain_placeholder() {
        let source = TileSource::new("https://tiles.example.com/{z}/{x}/{y}.png", &[]).unwrap();
        let url = source.url_for(TileId::new(3, 4, 5), &mut rand::thread_rng());
        assert_eq!(url, "https://tiles.example.com/3/4/5.png");
    }

    #[test]
    fn test_rejects_template_missing_a_coordinate() {
        let result = TileSource::new("https://tiles.example.com/{z}/{x}.png", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_subdomain_placeholder_without_subdomains() {
        let result = TileSource::new("https://{s}.tiles.example.com/{z}/{x}/{y}.png", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cache_path_layout() {
        let source = TileSource::new("https://tiles.example.com/{z}/{x}/{y}.png", &[]).unwrap();
        let path = source.cache_path(Path::new("cache"), TileId::new(12, 3034, 1783));
        let expected: PathBuf = ["cache", "12", "3034", "1783.png"].iter().collect();
        assert_eq!(path, expected);
    }
}
