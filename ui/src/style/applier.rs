use crate::style::surface::StyleSurface;
use server::theme::{StyleVariables, ThemeConfig, to_style_variables};
use std::collections::BTreeMap;

/// Metadata entry carrying the brand name.
pub const APPLICATION_NAME_META: &str = "application-name";
/// Metadata entry carrying the primary color.
pub const THEME_COLOR_META: &str = "theme-color";

/// Projects configurations onto a [`StyleSurface`].
pub struct StyleApplier;

impl StyleApplier {
    /// Applies `config` to `surface` and returns the guard that owns the change.
    ///
    /// Every variable, the title and the brand metadata entries are recorded
    /// with their prior values before they are first overwritten. Dropping or
    /// disposing the guard restores exactly those values.
    pub fn apply<'s, S: StyleSurface>(surface: &'s mut S, config: &ThemeConfig) -> AppliedStyle<'s, S> {
        let mut applied = AppliedStyle {
            surface,
            prior_variables: BTreeMap::new(),
            prior_title: None,
            prior_meta: BTreeMap::new(),
            current: StyleVariables::new(),
        };
        applied.reapply(config);
        applied
    }
}

/// A configuration applied to a surface. Restores the prior surface state
/// when disposed or dropped.
pub struct AppliedStyle<'s, S: StyleSurface> {
    surface: &'s mut S,
    prior_variables: BTreeMap<String, Option<String>>,
    prior_title: Option<Option<String>>,
    prior_meta: BTreeMap<&'static str, Option<String>>,
    current: StyleVariables,
}

impl<'s, S: StyleSurface> AppliedStyle<'s, S> {
    /// Replaces the applied configuration in place.
    ///
    /// Variables set by the previous configuration but absent from `config`
    /// are restored to their prior values. Applying the same configuration
    /// again leaves the surface unchanged.
    pub fn reapply(&mut self, config: &ThemeConfig) {
        let next = to_style_variables(config);

        let stale: Vec<String> = self
            .current
            .keys()
            .filter(|name| !next.contains_key(*name))
            .cloned()
            .collect();
        for name in stale {
            if let Some(prior) = self.prior_variables.remove(&name) {
                restore_variable(&mut *self.surface, &name, prior.as_deref());
            }
        }

        for (name, value) in &next {
            if !self.prior_variables.contains_key(name) {
                self.prior_variables
                    .insert(name.clone(), self.surface.variable(name));
            }
            self.surface.set_variable(name, value);
        }

        if self.prior_title.is_none() {
            self.prior_title = Some(self.surface.title());
        }
        self.surface.set_title(Some(config.brand.name.as_str()));

        self.set_meta(APPLICATION_NAME_META, config.brand.name.as_str());
        self.set_meta(THEME_COLOR_META, config.colors.primary.as_str());

        log::debug!(
            "Applied {} style variables for '{}'",
            next.len(),
            config.brand.name
        );
        self.current = next;
    }

    /// Names of the variables currently set by this guard.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.current.keys().map(String::as_str)
    }

    pub fn surface(&self) -> &S {
        &*self.surface
    }

    /// Restores the prior surface state now.
    pub fn dispose(mut self) {
        self.restore();
    }

    fn set_meta(&mut self, name: &'static str, content: &str) {
        if !self.prior_meta.contains_key(name) {
            self.prior_meta.insert(name, self.surface.meta(name));
        }
        self.surface.set_meta(name, Some(content));
    }

    fn restore(&mut self) {
        for (name, prior) in std::mem::take(&mut self.prior_variables) {
            restore_variable(&mut *self.surface, &name, prior.as_deref());
        }
        if let Some(title) = self.prior_title.take() {
            self.surface.set_title(title.as_deref());
        }
        for (name, prior) in std::mem::take(&mut self.prior_meta) {
            self.surface.set_meta(name, prior.as_deref());
        }
        self.current.clear();
    }
}

impl<S: StyleSurface> Drop for AppliedStyle<'_, S> {
    fn drop(&mut self) {
        self.restore();
    }
}

fn restore_variable<S: StyleSurface>(surface: &mut S, name: &str, prior: Option<&str>) {
    match prior {
        Some(value) => surface.set_variable(name, value),
        None => surface.remove_variable(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::surface::DocumentRoot;
    use server::theme::default_config;

    #[test]
    fn test_apply_sets_variables_title_and_meta() {
        let mut root = DocumentRoot::new();
        let config = default_config();

        let applied = StyleApplier::apply(&mut root, &config);

        let expected = to_style_variables(&config);
        assert_eq!(applied.surface().variables(), &expected);
        assert_eq!(applied.variables().count(), expected.len());
        assert_eq!(applied.surface().title().as_deref(), Some(config.brand.name.as_str()));
        assert_eq!(
            applied.surface().meta(THEME_COLOR_META).as_deref(),
            Some(config.colors.primary.as_str())
        );
    }

    #[test]
    fn test_drop_restores_empty_surface() {
        let mut root = DocumentRoot::new();
        {
            let _applied = StyleApplier::apply(&mut root, &default_config());
        }
        assert_eq!(root, DocumentRoot::new());
    }
}
