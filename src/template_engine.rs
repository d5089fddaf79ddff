use anyhow::Result;
use tera::Tera;

pub const MAP_TEMPLATE: &str = "slippymap.html";
pub const ERROR_TEMPLATE: &str = "error.html";

pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Loads the map and error templates compiled into the crate.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (MAP_TEMPLATE, include_str!("../templates/slippymap.html")),
            (ERROR_TEMPLATE, include_str!("../templates/error.html")),
        ])?;

        // Values are escaped for their HTML or JavaScript context before
        // they reach the context.
        tera.autoescape_on(vec![]);

        Ok(Self { tera })
    }

    pub fn render(&self, template_name: &str, context: &tera::Context) -> Result<String> {
        self.tera.render(template_name, context).map_err(|e| {
            let loaded = self.tera.get_template_names().collect::<Vec<_>>();
            anyhow::anyhow!("Tera Render Error: {}. Requested: '{}'. Loaded: {:?}", e, template_name, loaded)
        })
    }
}
