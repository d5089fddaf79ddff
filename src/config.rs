use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    /// Base path of the wiki installation; button images live under
    /// `{script_path}/extensions/SlippyMap/`.
    pub script_path: String,
    /// Static map service prefix, query parameters are appended directly.
    pub static_map_url: String,
    pub viewer_url: String,
    pub openlayers_url: String,
    pub osm_layers_url: String,
    pub bind_addr: Option<String>,
    pub thread_count: Option<usize>,
    /// Message texts keyed by `slippymap_*` id.
    pub messages: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_path: "/w".to_string(),
            static_map_url: "//ojw.dev.openstreetmap.org/StaticMap/?".to_string(),
            viewer_url: "//www.openstreetmap.org/".to_string(),
            openlayers_url: "//openstreetmap.org/openlayers/OpenLayers.js".to_string(),
            osm_layers_url: "//openstreetmap.org/openlayers/OpenStreetMap.js".to_string(),
            bind_addr: None,
            thread_count: None,
            messages: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = if std::path::Path::new("slippymap.toml").exists() {
            "slippymap.toml"
        } else if std::path::Path::new("slippymap.example.toml").exists() {
            "slippymap.example.toml"
        } else {
            return Err(anyhow::anyhow!("Configuration file not found. Please create slippymap.toml or provide slippymap.example.toml."));
        };

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Where the button background images are served from.
    pub fn asset_path(&self) -> String {
        format!("{}/extensions/SlippyMap", self.script_path.trim_end_matches('/'))
    }
}
