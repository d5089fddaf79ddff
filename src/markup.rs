use crate::config::Config;
use crate::error::ValidationError;
use crate::messages::{MessageId, Messages};
use crate::models::MapParams;
use crate::template_engine::{ERROR_TEMPLATE, MAP_TEMPLATE, TemplateEngine};
use crate::utils::{escape_html, escape_js_string, single_line, trim_contents};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct MapContext<'a> {
    openlayers_url: &'a str,
    osm_layers_url: &'a str,
    viewer_url: &'a str,
    static_map_url: &'a str,
    asset_path: String,
    lat: String,
    lon: String,
    zoom: String,
    width: String,
    height: String,
    layer: &'static str,
    layer_constructor: &'static str,
    zoom_control: Option<&'static str>,
    reset_view: String,
    button_code: String,
    code_prompt: String,
}

#[derive(Serialize)]
struct ErrorContext {
    header: String,
    errors: Vec<String>,
    input: String,
}

/// Renders the embedded map for validated parameters. The result never
/// contains a line break: the host wiki would turn one into `<br/>` in the
/// middle of the inline script.
pub fn render_map(
    engine: &TemplateEngine,
    config: &Config,
    messages: &dyn Messages,
    params: &MapParams,
) -> Result<String> {
    let js_message = |id| escape_js_string(&messages.lookup(id, None));
    let ctx = MapContext {
        openlayers_url: &config.openlayers_url,
        osm_layers_url: &config.osm_layers_url,
        viewer_url: &config.viewer_url,
        static_map_url: &config.static_map_url,
        asset_path: config.asset_path(),
        lat: params.lat.to_string(),
        lon: params.lon.to_string(),
        zoom: params.zoom.to_string(),
        width: params.width.to_string(),
        height: params.height.to_string(),
        layer: params.layer.name(),
        layer_constructor: params.layer.constructor(),
        zoom_control: params.zoom_control().class_name(),
        reset_view: js_message(MessageId::ResetView),
        button_code: js_message(MessageId::ButtonCode),
        code_prompt: js_message(MessageId::Code),
    };

    let html = engine.render(MAP_TEMPLATE, &tera::Context::from_serialize(&ctx)?)?;
    Ok(single_line(&html))
}

/// Renders the error block: the localized header, one line per error, then
/// the escaped tag contents.
pub fn render_errors(
    engine: &TemplateEngine,
    messages: &dyn Messages,
    errors: &[ValidationError],
    input: &str,
) -> Result<String> {
    let ctx = ErrorContext {
        header: messages.lookup(MessageId::MapError, None),
        errors: errors
            .iter()
            .map(|e| messages.lookup(e.message_id(), e.message_arg().as_deref()))
            .collect(),
        input: escape_html(trim_contents(input)),
    };
    engine.render(ERROR_TEMPLATE, &tera::Context::from_serialize(&ctx)?)
}
