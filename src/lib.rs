//! # SlippyMap
//!
//! Renders the wiki `<slippymap>` tag: validates the map attributes and emits
//! an OpenLayers slippy map showing OpenStreetMap tiles, or a localized error
//! block listing every problem with the tag.
//!
//! ## Example
//! ```ignore
//! use slippymap::{Catalog, Config, SlippyMap};
//! use std::collections::HashMap;
//!
//! let renderer = SlippyMap::new(Config::default(), Catalog::new())?;
//! let args: HashMap<String, String> = [("lat", "51.485"), ("lon", "-0.15"), ("z", "11")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//! let html = renderer.render("", &args)?;
//! ```

pub mod config;
pub mod error;
pub mod markup;
pub mod messages;
pub mod models;
pub mod server;
pub mod template_engine;
pub mod utils;
pub mod validator;

pub use config::Config;
pub use error::ValidationError;
pub use messages::{Catalog, MessageId, Messages};
pub use models::{Layer, MapParams, TagRequest, ZoomControl};
pub use template_engine::TemplateEngine;
pub use validator::validate;

use std::collections::HashMap;
use tracing::debug;

/// The tag renderer: templates, configuration and message lookup shared by
/// every tag occurrence. Rendering does not mutate it.
pub struct SlippyMap {
    engine: TemplateEngine,
    config: Config,
    messages: Box<dyn Messages + Send + Sync>,
}

impl SlippyMap {
    pub fn new(config: Config, messages: impl Messages + Send + Sync + 'static) -> anyhow::Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            config,
            messages: Box::new(messages),
        })
    }

    /// Builds a renderer whose message catalog comes from the `[messages]`
    /// table of the configuration.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let catalog = Catalog::with_overrides(&config.messages);
        Self::new(config, catalog)
    }

    /// Renders one tag occurrence from its inner text and attributes.
    pub fn render(&self, input: &str, args: &HashMap<String, String>) -> anyhow::Result<String> {
        match validate(input, args) {
            Ok(params) => {
                debug!(
                    "rendering slippy map at {},{} zoom {} ({}x{}, {})",
                    params.lat,
                    params.lon,
                    params.zoom,
                    params.width,
                    params.height,
                    params.layer.name()
                );
                markup::render_map(&self.engine, &self.config, &*self.messages, &params)
            }
            Err(errors) => {
                debug!("slippymap tag rejected with {} error(s)", errors.len());
                markup::render_errors(&self.engine, &*self.messages, &errors, input)
            }
        }
    }

    pub fn render_request(&self, request: &TagRequest) -> anyhow::Result<String> {
        self.render(&request.input, &request.args)
    }
}
