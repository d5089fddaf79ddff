use std::collections::HashMap;
use tracing::warn;

/// Every localized message the tag can emit, keyed by its catalog id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    MapError,
    LatMissing,
    LonMissing,
    ZoomMissing,
    LatNan,
    LonNan,
    ZoomNan,
    WidthNan,
    HeightNan,
    LatSmall,
    LatBig,
    LonSmall,
    LonBig,
    ZoomSmall,
    Zoom18,
    ZoomBig,
    WidthSmall,
    WidthBig,
    HeightSmall,
    HeightBig,
    InvalidLayer,
    UnsupportedMarker,
    UnsupportedOldContents,
    UnsupportedKmlContents,
    ResetView,
    ButtonCode,
    Code,
}

impl MessageId {
    pub const ALL: [MessageId; 27] = [
        MessageId::MapError,
        MessageId::LatMissing,
        MessageId::LonMissing,
        MessageId::ZoomMissing,
        MessageId::LatNan,
        MessageId::LonNan,
        MessageId::ZoomNan,
        MessageId::WidthNan,
        MessageId::HeightNan,
        MessageId::LatSmall,
        MessageId::LatBig,
        MessageId::LonSmall,
        MessageId::LonBig,
        MessageId::ZoomSmall,
        MessageId::Zoom18,
        MessageId::ZoomBig,
        MessageId::WidthSmall,
        MessageId::WidthBig,
        MessageId::HeightSmall,
        MessageId::HeightBig,
        MessageId::InvalidLayer,
        MessageId::UnsupportedMarker,
        MessageId::UnsupportedOldContents,
        MessageId::UnsupportedKmlContents,
        MessageId::ResetView,
        MessageId::ButtonCode,
        MessageId::Code,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MessageId::MapError => "slippymap_maperror",
            MessageId::LatMissing => "slippymap_latmissing",
            MessageId::LonMissing => "slippymap_lonmissing",
            MessageId::ZoomMissing => "slippymap_zoommissing",
            MessageId::LatNan => "slippymap_latnan",
            MessageId::LonNan => "slippymap_lonnan",
            MessageId::ZoomNan => "slippymap_zoomnan",
            MessageId::WidthNan => "slippymap_widthnan",
            MessageId::HeightNan => "slippymap_heightnan",
            MessageId::LatSmall => "slippymap_latsmall",
            MessageId::LatBig => "slippymap_latbig",
            MessageId::LonSmall => "slippymap_lonsmall",
            MessageId::LonBig => "slippymap_lonbig",
            MessageId::ZoomSmall => "slippymap_zoomsmall",
            MessageId::Zoom18 => "slippymap_zoom18",
            MessageId::ZoomBig => "slippymap_zoombig",
            MessageId::WidthSmall => "slippymap_widthsmall",
            MessageId::WidthBig => "slippymap_widthbig",
            MessageId::HeightSmall => "slippymap_heightsmall",
            MessageId::HeightBig => "slippymap_heightbig",
            MessageId::InvalidLayer => "slippymap_invalidlayer",
            MessageId::UnsupportedMarker => "slippymap_unsupportedmarker",
            MessageId::UnsupportedOldContents => "slippymap_unsupportedoldcontents",
            MessageId::UnsupportedKmlContents => "slippymap_unsupportedkmlcontents",
            MessageId::ResetView => "slippymap_resetview",
            MessageId::ButtonCode => "slippymap_button_code",
            MessageId::Code => "slippymap_code",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    /// English text. `$1` marks the formatting argument.
    pub fn default_text(self) -> &'static str {
        match self {
            MessageId::MapError => "Map error:",
            MessageId::LatMissing => "Missing lat value (for the latitude).",
            MessageId::LonMissing => "Missing lon value (for the longitude).",
            MessageId::ZoomMissing => "Missing z value (for the zoom level).",
            MessageId::LatNan => "Latitude (lat) value '$1' is not a valid number.",
            MessageId::LonNan => "Longitude (lon) value '$1' is not a valid number.",
            MessageId::ZoomNan => "Zoom (z) value '$1' is not a valid number.",
            MessageId::WidthNan => "Width (w) value '$1' is not a valid number.",
            MessageId::HeightNan => "Height (h) value '$1' is not a valid number.",
            MessageId::LatSmall => "Latitude (lat) value '$1' cannot be less than -90.",
            MessageId::LatBig => "Latitude (lat) value '$1' cannot be more than 90.",
            MessageId::LonSmall => "Longitude (lon) value '$1' cannot be less than -180.",
            MessageId::LonBig => "Longitude (lon) value '$1' cannot be more than 180.",
            MessageId::ZoomSmall => "Zoom (z) value '$1' cannot be less than zero.",
            MessageId::Zoom18 => {
                "Zoom (z) value '$1' is not supported: not every layer has tiles at zoom level 18. Use 17 or less."
            }
            MessageId::ZoomBig => "Zoom (z) value '$1' cannot be greater than 17.",
            MessageId::WidthSmall => "Width (w) value '$1' cannot be less than 100.",
            MessageId::WidthBig => "Width (w) value '$1' cannot be more than 1000.",
            MessageId::HeightSmall => "Height (h) value '$1' cannot be less than 100.",
            MessageId::HeightBig => "Height (h) value '$1' cannot be more than 1000.",
            MessageId::InvalidLayer => "Invalid 'layer' value '$1'.",
            MessageId::UnsupportedMarker => "The 'marker' parameter is no longer supported.",
            MessageId::UnsupportedOldContents => {
                "Marker lists inside the slippymap tag are no longer supported."
            }
            MessageId::UnsupportedKmlContents => {
                "KML data inside the slippymap tag is no longer supported."
            }
            MessageId::ResetView => "Reset view",
            MessageId::ButtonCode => "Get wiki code",
            MessageId::Code => "Wikicode for this map view:",
        }
    }
}

/// Message lookup supplied by the host wiki.
pub trait Messages {
    fn lookup(&self, id: MessageId, arg: Option<&str>) -> String;
}

/// Substitutes `$1` in a message text.
pub fn format_message(text: &str, arg: Option<&str>) -> String {
    match arg {
        Some(arg) => text.replace("$1", arg),
        None => text.to_string(),
    }
}

/// Built-in English texts, optionally overridden per message id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    overrides: HashMap<MessageId, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `slippymap_*` keyed texts. Unknown keys are
    /// skipped.
    pub fn with_overrides(texts: &HashMap<String, String>) -> Self {
        let mut overrides = HashMap::new();
        for (key, text) in texts {
            match MessageId::from_key(key) {
                Some(id) => {
                    overrides.insert(id, text.clone());
                }
                None => warn!("ignoring unknown message id '{}'", key),
            }
        }
        Self { overrides }
    }

    pub fn text(&self, id: MessageId) -> &str {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.default_text())
    }
}

impl Messages for Catalog {
    fn lookup(&self, id: MessageId, arg: Option<&str>) -> String {
        format_message(self.text(id), arg)
    }
}
