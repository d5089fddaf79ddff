use crate::error::ValidationError;
use crate::models::{Layer, MapParams};
use crate::utils::{int_prefix, parse_number, trim_contents};
use std::collections::HashMap;

const DEFAULT_WIDTH: &str = "450";
const DEFAULT_HEIGHT: &str = "320";
const DEFAULT_LAYER: &str = "mapnik";
const MIN_SIZE: f64 = 100.0;
const MAX_SIZE: f64 = 1000.0;
const UNSUPPORTED_ZOOM: f64 = 18.0;

/// Validate the tag attributes and inner text. Every field is checked; the
/// errors come back in field order (lat, lon, zoom, width, height, layer,
/// marker, contents).
pub fn validate(input: &str, args: &HashMap<String, String>) -> Result<MapParams, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let lat = validate_lat(arg(args, "lat")).map_err(|e| errors.push(e)).ok();
    let lon = validate_lon(arg(args, "lon")).map_err(|e| errors.push(e)).ok();
    let zoom = validate_zoom(zoom_arg(args)).map_err(|e| errors.push(e)).ok();
    let width = validate_width(arg(args, "w")).map_err(|e| errors.push(e)).ok();
    let height = validate_height(arg(args, "h")).map_err(|e| errors.push(e)).ok();
    let layer = validate_layer(arg(args, "layer")).map_err(|e| errors.push(e)).ok();

    // Marker overlays are switched off; asking for one is reported and ignored.
    if is_truthy(arg(args, "marker")) {
        errors.push(ValidationError::UnsupportedMarker);
    }

    if let Err(e) = validate_contents(input) {
        errors.push(e);
    }

    match (lat, lon, zoom, width, height, layer) {
        (Some(lat), Some(lon), Some(zoom), Some(width), Some(height), Some(layer)) if errors.is_empty() => {
            Ok(MapParams { lat, lon, zoom, width, height, layer })
        }
        _ => Err(errors),
    }
}

fn arg<'a>(args: &'a HashMap<String, String>, name: &str) -> &'a str {
    args.get(name).map(String::as_str).unwrap_or("")
}

/// `z` wins unless it is empty, then `zoom` is used.
fn zoom_arg(args: &HashMap<String, String>) -> &str {
    match arg(args, "z") {
        "" => arg(args, "zoom"),
        z => z,
    }
}

fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

fn validate_lat(value: &str) -> Result<f64, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::LatMissing);
    }
    let lat = parse_number(value).ok_or_else(|| ValidationError::LatNotANumber { value: value.to_string() })?;
    if lat < -90.0 {
        return Err(ValidationError::LatTooSmall { value: value.to_string() });
    }
    if lat > 90.0 {
        return Err(ValidationError::LatTooBig { value: value.to_string() });
    }
    Ok(lat)
}

fn validate_lon(value: &str) -> Result<f64, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::LonMissing);
    }
    let lon = parse_number(value).ok_or_else(|| ValidationError::LonNotANumber { value: value.to_string() })?;
    if lon < -180.0 {
        return Err(ValidationError::LonTooSmall { value: value.to_string() });
    }
    if lon > 180.0 {
        return Err(ValidationError::LonTooBig { value: value.to_string() });
    }
    Ok(lon)
}

fn validate_zoom(value: &str) -> Result<f64, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::ZoomMissing);
    }
    let zoom = parse_number(value).ok_or_else(|| ValidationError::ZoomNotANumber { value: value.to_string() })?;
    if zoom < 0.0 {
        return Err(ValidationError::ZoomTooSmall { value: value.to_string() });
    }
    if zoom == UNSUPPORTED_ZOOM {
        return Err(ValidationError::Zoom18 { value: value.to_string() });
    }
    if zoom > UNSUPPORTED_ZOOM {
        return Err(ValidationError::ZoomTooBig { value: value.to_string() });
    }
    Ok(zoom)
}

/// Width or height in pixels. Empty means the default; a trailing `px` is
/// cut off and the rest read as an integer.
enum SizeValue {
    Pixels(i64),
    Raw(String),
}

impl SizeValue {
    fn read(value: &str, default: &str) -> Self {
        if value.is_empty() {
            SizeValue::Raw(default.to_string())
        } else if let Some(number) = value.strip_suffix("px") {
            SizeValue::Pixels(int_prefix(number))
        } else {
            SizeValue::Raw(value.to_string())
        }
    }

    fn text(&self) -> String {
        match self {
            SizeValue::Pixels(n) => n.to_string(),
            SizeValue::Raw(s) => s.clone(),
        }
    }

    fn number(&self) -> Option<f64> {
        match self {
            SizeValue::Pixels(n) => Some(*n as f64),
            SizeValue::Raw(s) => parse_number(s),
        }
    }
}

fn validate_width(value: &str) -> Result<f64, ValidationError> {
    let size = SizeValue::read(value, DEFAULT_WIDTH);
    let value = size.text();
    let width = size.number().ok_or_else(|| ValidationError::WidthNotANumber { value: value.clone() })?;
    if width < MIN_SIZE {
        return Err(ValidationError::WidthTooSmall { value });
    }
    if width > MAX_SIZE {
        return Err(ValidationError::WidthTooBig { value });
    }
    Ok(width)
}

fn validate_height(value: &str) -> Result<f64, ValidationError> {
    let size = SizeValue::read(value, DEFAULT_HEIGHT);
    let value = size.text();
    let height = size.number().ok_or_else(|| ValidationError::HeightNotANumber { value: value.clone() })?;
    if height < MIN_SIZE {
        return Err(ValidationError::HeightTooSmall { value });
    }
    if height > MAX_SIZE {
        return Err(ValidationError::HeightTooBig { value });
    }
    Ok(height)
}

fn validate_layer(value: &str) -> Result<Layer, ValidationError> {
    let name = if value.is_empty() { DEFAULT_LAYER.to_string() } else { value.to_ascii_lowercase() };
    Layer::from_name(&name).ok_or(ValidationError::InvalidLayer { layer: name })
}

fn validate_contents(input: &str) -> Result<(), ValidationError> {
    let input = trim_contents(input);
    if input.is_empty() {
        Ok(())
    } else if input.contains('|') {
        Err(ValidationError::UnsupportedOldContents)
    } else {
        Err(ValidationError::UnsupportedKmlContents)
    }
}
