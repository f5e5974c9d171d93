//! Page configuration rendered by the server as inline JSON.
//!
//! The server embeds `<script id="ninernav-config" type="application/json">`
//! in every page. Every field is optional; anything left out falls back to
//! the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::model::LatLng;
use crate::util::cwarn;

pub const CONFIG_ELEMENT_ID: &str = "ninernav-config";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    #[default]
    MainMenu,
    Game,
    Guess,
    Result,
    Slider,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub page: PageKind,
    pub countdown_minutes: u32,
    pub default_difficulty: String,
    pub difficulties: Vec<String>,
    pub game_modes: Vec<String>,
    pub gallery: Vec<String>,
    pub slider_images: Vec<String>,
    pub slider_interval_ms: u32,
    pub map_center: LatLng,
    pub guess_zoom: u8,
    pub result_zoom: u8,
    /// Location revealed on the result page. Falls back to the `lat`/`lng`
    /// inputs when absent.
    pub target: Option<LatLng>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page: PageKind::MainMenu,
            countdown_minutes: 2,
            default_difficulty: "Beginner".to_string(),
            difficulties: vec![
                "Beginner".to_string(),
                "Intermediate".to_string(),
                "Expert".to_string(),
            ],
            game_modes: vec!["Classic".to_string(), "Timed".to_string()],
            gallery: default_gallery(),
            slider_images: Vec::new(),
            slider_interval_ms: 2000,
            map_center: LatLng { lat: 35.308168, lng: -80.733699 },
            guess_zoom: 15,
            result_zoom: 17,
            target: None,
        }
    }
}

// scene_8 is missing from the shipped gallery.
fn default_gallery() -> Vec<String> {
    (0..=17)
        .filter(|i| *i != 8)
        .map(|i| format!("/static/gallery/scene_{}.png", i))
        .collect()
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(ClientError::Config)
    }

    /// Read the inline config element; missing element or bad JSON yields defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                cwarn(&format!("config: {}", e));
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = PageConfig::from_json("{}").unwrap();
        assert_eq!(cfg, PageConfig::default());
        assert_eq!(cfg.default_difficulty, "Beginner");
        assert_eq!(cfg.gallery.len(), 17);
        assert!(!cfg.gallery.iter().any(|p| p.ends_with("scene_8.png")));
    }

    #[test]
    fn partial_override() {
        let cfg = PageConfig::from_json(
            r#"{"page":"result","countdown_minutes":5,"target":{"lat":35.30632,"lng":-80.733389}}"#,
        )
        .unwrap();
        assert_eq!(cfg.page, PageKind::Result);
        assert_eq!(cfg.countdown_minutes, 5);
        assert_eq!(cfg.target, Some(LatLng { lat: 35.30632, lng: -80.733389 }));
        assert_eq!(cfg.slider_interval_ms, 2000);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PageConfig::from_json("{\"page\": 3").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
