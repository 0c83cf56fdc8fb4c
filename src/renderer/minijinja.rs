use super::filters::*;
use crate::{error::Result, ext::PathExt, renderer::interface::TemplateRenderer};
use minijinja::{AutoEscape, Environment};
use serde_json::json;
use std::path::Path;

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
    /// Merged underneath every context passed to `render`
    default_context: serde_json::Value,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Generated sources must end exactly like their templates.
        env.set_keep_trailing_newline(true);
        // Rendered files are source code, never HTML or JSON documents to escape.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        let default_context = json!({
            "platform": {
                "os": std::env::consts::OS,
                "family": std::env::consts::FAMILY,
                "arch": std::env::consts::ARCH,
            }
        });

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("table_case", to_table_case);
        env.add_filter("plural", to_plural);
        env.add_filter("singular", to_singular);
        env.add_filter("slugify", slugify);
        env.add_filter("regex", regex_filter);

        Self { env, default_context }
    }

    fn render_internal(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let mut env = self.env.clone();
        let name = template_name.unwrap_or("temp");
        env.add_template(name, template)?;

        let merged_context = match (self.default_context.as_object(), context.as_object()) {
            (Some(default_obj), Some(context_obj)) => {
                let mut result = default_obj.clone();
                for (key, value) in context_obj {
                    result.insert(key.clone(), value.clone());
                }
                serde_json::Value::Object(result)
            }
            _ => context.clone(),
        };

        let tmpl = env.get_template(name)?;
        Ok(tmpl.render(merged_context)?)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        self.render_internal(template, context, template_name)
    }

    fn render_path(
        &self,
        template_path: &Path,
        context: &serde_json::Value,
    ) -> Result<String> {
        let path_str = template_path.to_str_checked()?;
        let template_name = template_path.file_name().and_then(|name| name.to_str());
        self.render_internal(path_str, context, template_name)
    }
}
