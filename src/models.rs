use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One `<slippymap>` occurrence as handed over by the host wiki: the inner
/// text and the raw attribute values.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TagRequest {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub args: HashMap<String, String>,
}

/// OpenStreetMap tile layers the OSM layer script provides constructors for.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Mapnik,
    Cycle,
    Transport,
}

impl Layer {
    /// Matches an already lowercased layer name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mapnik" => Some(Layer::Mapnik),
            "cycle" => Some(Layer::Cycle),
            "transport" => Some(Layer::Transport),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layer::Mapnik => "mapnik",
            Layer::Cycle => "cycle",
            Layer::Transport => "transport",
        }
    }

    /// Constructor call appended to `OpenLayers.Layer.OSM.`
    pub fn constructor(self) -> &'static str {
        match self {
            Layer::Mapnik => r#"Mapnik("Mapnik")"#,
            Layer::Cycle => r#"CycleMap("OpenCycleMap")"#,
            Layer::Transport => r#"TransportMap("Transport")"#,
        }
    }
}

/// Zoom widget picked from the map height; small maps get none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomControl {
    PanZoomBar,
    PanZoom,
    None,
}

impl ZoomControl {
    pub fn for_height(height: f64) -> Self {
        if height > 320.0 {
            ZoomControl::PanZoomBar
        } else if height > 140.0 {
            ZoomControl::PanZoom
        } else {
            ZoomControl::None
        }
    }

    /// Class name under `OpenLayers.Control`.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            ZoomControl::PanZoomBar => Some("PanZoomBar"),
            ZoomControl::PanZoom => Some("PanZoom"),
            ZoomControl::None => None,
        }
    }
}

/// Tag parameters that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MapParams {
    pub lat: f64,
    pub lon: f64,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
    pub layer: Layer,
}

impl MapParams {
    pub fn zoom_control(&self) -> ZoomControl {
        ZoomControl::for_height(self.height)
    }
}
