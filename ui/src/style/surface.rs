use std::collections::BTreeMap;

/// A presentation surface that holds style variables, a title and named
/// metadata entries. The browser document root is the canonical example.
pub trait StyleSurface {
    fn variable(&self, name: &str) -> Option<String>;

    fn set_variable(&mut self, name: &str, value: &str);

    fn remove_variable(&mut self, name: &str);

    fn title(&self) -> Option<String>;

    /// `None` clears the title.
    fn set_title(&mut self, title: Option<&str>);

    fn meta(&self, name: &str) -> Option<String>;

    /// `None` removes the entry.
    fn set_meta(&mut self, name: &str, content: Option<&str>);
}

/// In-memory document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    variables: BTreeMap<String, String>,
    title: Option<String>,
    meta: BTreeMap<String, String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    pub fn meta_entries(&self) -> &BTreeMap<String, String> {
        &self.meta
    }

    /// Renders the current variables as a `:root` block, preceded by the
    /// title as a comment when one is set.
    pub fn render_css(&self) -> String {
        let mut css = String::new();
        if let Some(title) = &self.title {
            css.push_str(&format!("/* {} */\n", escape_comment(title)));
        }
        css.push_str(":root {\n");
        for (name, value) in &self.variables {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

/// Makes text safe inside a CSS comment that may itself sit in a `<style>` element.
fn escape_comment(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("*/", "* /")
}

impl StyleSurface for DocumentRoot {
    fn variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }

    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn remove_variable(&mut self, name: &str) {
        self.variables.remove(name);
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn set_title(&mut self, title: Option<&str>) {
        self.title = title.map(str::to_string);
    }

    fn meta(&self, name: &str) -> Option<String> {
        self.meta.get(name).cloned()
    }

    fn set_meta(&mut self, name: &str, content: Option<&str>) {
        match content {
            Some(content) => {
                self.meta.insert(name.to_string(), content.to_string());
            }
            None => {
                self.meta.remove(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleApplier;
    use crate::style::applier::APPLICATION_NAME_META;
    use server::decoder::encode_config;
    use server::theme::default_config;
    use server::{ConfigResolver, RequestContext};

    #[test]
    fn test_render_css() {
        let mut root = DocumentRoot::new();
        root.set_variable("--color-primary", "#4f46e5");
        root.set_variable("--brand-theme", "light");
        root.set_title(Some("Acme */ Pay"));

        assert_eq!(
            root.render_css(),
            "/* Acme * / Pay */\n:root {\n  --brand-theme: light;\n  --color-primary: #4f46e5;\n}"
        );
    }

    #[test]
    fn test_render_css_escapes_markup_in_title() {
        let mut root = DocumentRoot::new();
        root.set_title(Some("</style><script>alert(1)</script>"));

        let css = root.render_css();
        assert!(!css.contains('<'));
        assert!(css.starts_with("/* &lt;/style&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_hostile_brand_name_never_reaches_rendered_css() {
        let hostile = "</style><script>alert(1)</script>";
        let encoded = encode_config(&serde_json::json!({
            "colors": {},
            "brand": {"name": hostile, "tagline": "<b>free</b>"}
        }))
        .unwrap();
        let context = RequestContext::from_query(&format!("_hidden_brand_experience={encoded}"));
        let resolved = ConfigResolver::default().resolve(&context);
        assert_eq!(resolved.config.brand.name, default_config().brand.name);
        assert_eq!(resolved.config.brand.tagline, default_config().brand.tagline);

        let mut root = DocumentRoot::new();
        let applied = StyleApplier::apply(&mut root, &resolved.config);
        let css = applied.surface().render_css();
        let title = applied.surface().title();
        let application_name = applied.surface().meta(APPLICATION_NAME_META);

        assert!(!css.contains("</style>"));
        assert!(!css.contains("<script>"));
        for text in [title, application_name].into_iter().flatten() {
            assert!(!text.contains('<') && !text.contains('>'));
        }
    }

    #[test]
    fn test_meta_removal() {
        let mut root = DocumentRoot::new();
        root.set_meta("theme-color", Some("#000000"));
        assert_eq!(root.meta("theme-color").as_deref(), Some("#000000"));

        root.set_meta("theme-color", None);
        assert!(root.meta_entries().is_empty());
    }
}
