use pretty_assertions::assert_eq;
use slippymap::{Catalog, Config, MessageId, Messages, SlippyMap};
use std::collections::HashMap;

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn valid_args() -> HashMap<String, String> {
    args(&[
        ("lat", "51.485"),
        ("lon", "-0.15"),
        ("z", "11"),
        ("w", "300"),
        ("h", "200"),
        ("layer", "mapnik"),
        ("marker", "0"),
    ])
}

fn renderer() -> SlippyMap {
    SlippyMap::new(Config::default(), Catalog::new()).unwrap()
}

/// Fixed dictionary that echoes ids, so assertions do not depend on wording.
struct EchoMessages;

impl Messages for EchoMessages {
    fn lookup(&self, id: MessageId, arg: Option<&str>) -> String {
        match arg {
            Some(arg) => format!("[{}:{}]", id.key(), arg),
            None => format!("[{}]", id.key()),
        }
    }
}

fn echo_renderer() -> SlippyMap {
    SlippyMap::new(Config::default(), EchoMessages).unwrap()
}

fn is_map(html: &str) -> bool {
    html.contains("<div id=\"map\"")
}

#[test]
fn test_valid_tag_renders_single_line_map() {
    let html = renderer().render("", &valid_args()).unwrap();

    assert_eq!(html.matches("<div id=\"map\" style=\"border:1px solid #AAA;width:300px;height:200px\">").count(), 1);
    assert_eq!(html.matches("OpenLayers.Layer.OSM.Mapnik(\"Mapnik\")").count(), 1);
    assert_eq!(html.matches("new OpenLayers.Control.Panel({displayClass:\"buttonsPanel\"})").count(), 1);
    assert!(!html.contains('\n'));
    assert!(!html.contains('\r'));
}

#[test]
fn test_valid_tag_layout_order() {
    let html = renderer().render("", &valid_args()).unwrap();

    let library = html.find("<script src=\"//openstreetmap.org/openlayers/OpenLayers.js\" async></script>").unwrap();
    let container = html.find("<div id=\"map\"").unwrap();
    let layers = html.find("<script src=\"//openstreetmap.org/openlayers/OpenStreetMap.js\" defer></script>").unwrap();
    let init = html.find("<script type=\"text/javascript\" defer>function slippymap_init(){").unwrap();
    let onload = html.find("$(window).on(\"load\",slippymap_init);</script>").unwrap();
    let style = html.find("<style>").unwrap();

    assert!(library < container);
    assert!(container < layers);
    assert!(layers < init);
    assert!(init < onload);
    assert!(onload < style);
    assert!(html.ends_with("</style>"));
}

#[test]
fn test_noscript_fallback_links() {
    let html = renderer().render("", &valid_args()).unwrap();

    assert!(html.contains(
        "<a href=\"//www.openstreetmap.org/?lat=51.485&lon=-0.15&zoom=11\" title=\"See this map on OpenStreetMap.org\""
    ));
    assert!(html.contains(
        "src=\"//ojw.dev.openstreetmap.org/StaticMap/?format=jpeg&lat=51.485&long=-0.15&z=11&w=300&h=200\""
    ));
}

#[test]
fn test_button_assets_use_script_path() {
    let config = Config { script_path: "/mywiki".to_string(), ..Config::default() };
    let html = SlippyMap::new(config, Catalog::new()).unwrap().render("", &valid_args()).unwrap();

    assert!(html.contains("url(\"/mywiki/extensions/SlippyMap/reset-button.png\")"));
    assert!(html.contains("url(\"/mywiki/extensions/SlippyMap/wikicode-button.png\")"));
}

#[test]
fn test_rendering_is_repeatable() {
    let renderer = renderer();
    let first = renderer.render("", &valid_args()).unwrap();
    let second = renderer.render("", &valid_args()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_latitude() {
    let mut a = valid_args();
    a.remove("lat");
    let html = echo_renderer().render("", &a).unwrap();

    assert_eq!(html, "<span class=\"error\">[slippymap_maperror]<br/>[slippymap_latmissing]<br/></span>");
    assert!(!is_map(&html));
}

#[test]
fn test_latitude_bounds() {
    let renderer = echo_renderer();
    for (lat, expected) in [("91", "[slippymap_latbig:91]"), ("-91", "[slippymap_latsmall:-91]")] {
        let mut a = valid_args();
        a.insert("lat".to_string(), lat.to_string());
        let html = renderer.render("", &a).unwrap();
        assert!(html.contains(expected), "{lat}: {html}");
        assert!(!is_map(&html));
    }
    for lat in ["90", "-90"] {
        let mut a = valid_args();
        a.insert("lat".to_string(), lat.to_string());
        assert!(is_map(&renderer.render("", &a).unwrap()), "{lat} should be accepted");
    }
}

#[test]
fn test_zoom_boundaries() {
    let renderer = echo_renderer();
    let render_zoom = |z: &str| {
        let mut a = valid_args();
        a.insert("z".to_string(), z.to_string());
        renderer.render("", &a).unwrap()
    };

    let eighteen = render_zoom("18");
    assert!(eighteen.contains("[slippymap_zoom18:18]"));
    assert!(!eighteen.contains("slippymap_zoombig"));
    assert!(render_zoom("19").contains("[slippymap_zoombig:19]"));
    assert!(render_zoom("-1").contains("[slippymap_zoomsmall:-1]"));
    assert!(is_map(&render_zoom("0")));
}

#[test]
fn test_zoom_synonym() {
    let mut a = valid_args();
    a.remove("z");
    a.insert("zoom".to_string(), "7".to_string());
    let html = renderer().render("", &a).unwrap();
    assert!(html.contains("map.setCenter(lonLat,7)"));
}

#[test]
fn test_width_suffix_and_default() {
    let renderer = echo_renderer();

    let mut a = valid_args();
    a.insert("w".to_string(), "150px".to_string());
    assert!(renderer.render("", &a).unwrap().contains("width:150px;height:200px"));

    a.insert("w".to_string(), "50".to_string());
    assert!(renderer.render("", &a).unwrap().contains("[slippymap_widthsmall:50]"));

    a.remove("w");
    assert!(renderer.render("", &a).unwrap().contains("width:450px;height:200px"));
}

#[test]
fn test_layer_is_case_insensitive() {
    let renderer = renderer();
    let mut a = valid_args();
    let lower = renderer.render("", &a).unwrap();
    a.insert("layer".to_string(), "MAPNIK".to_string());
    let upper = renderer.render("", &a).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_invalid_layer_names_value() {
    let mut a = valid_args();
    a.insert("layer".to_string(), "satellite".to_string());
    let html = renderer().render("", &a).unwrap();
    assert!(html.contains("Invalid 'layer' value 'satellite'.<br/>"));
    assert!(!is_map(&html));
}

#[test]
fn test_contents_suppress_map() {
    let renderer = echo_renderer();

    let html = renderer.render("51.1|-0.2|marker", &valid_args()).unwrap();
    assert_eq!(
        html,
        "<span class=\"error\">[slippymap_maperror]<br/>[slippymap_unsupportedoldcontents]<br/></span>51.1|-0.2|marker"
    );

    let html = renderer.render("<kml><Placemark/></kml>", &valid_args()).unwrap();
    assert_eq!(
        html,
        "<span class=\"error\">[slippymap_maperror]<br/>[slippymap_unsupportedkmlcontents]<br/></span>\
         &lt;kml&gt;&lt;Placemark/&gt;&lt;/kml&gt;"
    );
}

#[test]
fn test_all_errors_reported_together() {
    let a = args(&[("lat", "abc"), ("lon", "200"), ("h", "<script>"), ("marker", "1")]);
    let html = echo_renderer().render("", &a).unwrap();
    assert_eq!(
        html,
        "<span class=\"error\">[slippymap_maperror]<br/>\
         [slippymap_latnan:abc]<br/>\
         [slippymap_lonbig:200]<br/>\
         [slippymap_zoommissing]<br/>\
         [slippymap_heightnan:&lt;script&gt;]<br/>\
         [slippymap_unsupportedmarker]<br/></span>"
    );
}

#[test]
fn test_configured_messages_reach_output() {
    let config = Config::from_toml(
        r#"
        [messages]
        slippymap_resetview = "Ansicht zurücksetzen"
        slippymap_maperror = "Kartenfehler:"
        "#,
    )
    .unwrap();
    let renderer = SlippyMap::from_config(config).unwrap();

    assert!(renderer.render("", &valid_args()).unwrap().contains("title:\"Ansicht zurücksetzen\""));
    assert!(renderer.render("", &args(&[])).unwrap().starts_with("<span class=\"error\">Kartenfehler:<br/>"));
}

#[test]
fn test_unicode_space_contents_suppress_map() {
    let html = echo_renderer().render("\u{3000}", &valid_args()).unwrap();
    assert_eq!(
        html,
        "<span class=\"error\">[slippymap_maperror]<br/>[slippymap_unsupportedkmlcontents]<br/></span>\u{3000}"
    );
}

#[test]
fn test_non_breaking_space_latitude_is_not_a_number() {
    let mut a = valid_args();
    a.insert("lat".to_string(), "\u{a0}51".to_string());
    let html = echo_renderer().render("", &a).unwrap();
    assert!(html.contains("[slippymap_latnan:\u{a0}51]"), "{html}");
    assert!(!is_map(&html));
}

#[test]
fn test_layer_look_alike_is_rejected() {
    let mut a = valid_args();
    a.insert("layer".to_string(), "MAPNI\u{212A}".to_string());
    let html = echo_renderer().render("", &a).unwrap();
    assert!(html.contains("[slippymap_invalidlayer:mapni\u{212A}]"), "{html}");
    assert!(!is_map(&html));
}

#[test]
fn test_line_separators_in_messages_stay_escaped() {
    let config = Config::from_toml("[messages]\nslippymap_code = \"a\u{2028}b\u{2029}c\"\n").unwrap();
    let html = SlippyMap::from_config(config).unwrap().render("", &valid_args()).unwrap();
    assert!(html.contains(r#"prompt("a\u2028b\u2029c","#));
    assert!(!html.contains('\u{2028}'));
    assert!(!html.contains('\u{2029}'));
}
