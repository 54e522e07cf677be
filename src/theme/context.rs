use std::rc::Rc;

use gpui_polaris_theme::{
    ConfigurationError, CustomProperty, CustomPropertyMap, CustomPropertyValue, Theme,
    ThemeConfig, ThemeLogo, build_custom_properties,
};

/// The current theme and its custom properties, handed to components
/// explicitly.
///
/// Cloning is cheap and every clone shares the same theme and map.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    theme: Rc<Theme>,
    custom_properties: Rc<CustomPropertyMap>,
}

impl ThemeContext {
    pub fn new(theme: Rc<Theme>) -> Result<Self, ConfigurationError> {
        let custom_properties = Rc::new(build_custom_properties(&theme)?);

        Ok(Self {
            theme,
            custom_properties,
        })
    }

    pub fn from_config(config: Option<&ThemeConfig>) -> Result<Self, ConfigurationError> {
        Self::new(Rc::new(Theme::normalize(config)))
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn custom_properties(&self) -> &CustomPropertyMap {
        &self.custom_properties
    }

    pub fn get(&self, property: CustomProperty) -> Option<&CustomPropertyValue> {
        self.custom_properties.get(property)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&CustomPropertyValue> {
        self.custom_properties.get_by_name(name)
    }

    pub fn logo(&self) -> &ThemeLogo {
        self.theme.logo()
    }

    /// Custom properties as an inline style string.
    pub fn inline_style(&self) -> String {
        self.custom_properties.to_css_string()
    }

    /// Whether both contexts point at the same theme and the same map.
    pub fn ptr_eq(&self, other: &ThemeContext) -> bool {
        Rc::ptr_eq(&self.theme, &other.theme)
            && Rc::ptr_eq(&self.custom_properties, &other.custom_properties)
    }
}

enum ThemeSource {
    Config(Option<Rc<ThemeConfig>>),
    Theme,
}

/// Owns the [`ThemeContext`] of a component subtree and rebuilds it when
/// the upstream configuration changes.
///
/// Changes are detected by reference: handing in the same `Rc` again is a
/// no-op and keeps the previously built map.
pub struct ThemeProvider {
    source: ThemeSource,
    context: ThemeContext,
}

impl ThemeProvider {
    pub fn new(config: Option<Rc<ThemeConfig>>) -> Result<Self, ConfigurationError> {
        let context = ThemeContext::from_config(config.as_deref())?;

        Ok(Self {
            source: ThemeSource::Config(config),
            context,
        })
    }

    pub fn with_theme(theme: Rc<Theme>) -> Result<Self, ConfigurationError> {
        Ok(Self {
            source: ThemeSource::Theme,
            context: ThemeContext::new(theme)?,
        })
    }

    pub fn context(&self) -> &ThemeContext {
        &self.context
    }

    /// Rebuilds the context from `config` unless it is the config already in
    /// use. Returns whether anything was rebuilt.
    ///
    /// On error the previous context stays in place.
    pub fn set_config(
        &mut self,
        config: Option<Rc<ThemeConfig>>,
    ) -> Result<bool, ConfigurationError> {
        let unchanged = match (&self.source, &config) {
            (ThemeSource::Config(Some(current)), Some(config)) => Rc::ptr_eq(current, config),
            (ThemeSource::Config(None), None) => true,
            _ => false,
        };

        if unchanged {
            tracing::trace!("theme config unchanged, keeping custom properties");
            return Ok(false);
        }

        self.context = ThemeContext::from_config(config.as_deref())?;
        self.source = ThemeSource::Config(config);

        tracing::debug!(
            properties = self.context.custom_properties().len(),
            "rebuilt theme from config"
        );

        Ok(true)
    }

    /// Replaces the theme unless `theme` is the instance already in use.
    /// Returns whether the custom properties were rebuilt.
    pub fn set_theme(&mut self, theme: Rc<Theme>) -> Result<bool, ConfigurationError> {
        if Rc::ptr_eq(&self.context.theme, &theme) {
            tracing::trace!("theme unchanged, keeping custom properties");
            return Ok(false);
        }

        self.context = ThemeContext::new(theme)?;
        self.source = ThemeSource::Theme;

        tracing::debug!(
            properties = self.context.custom_properties().len(),
            "rebuilt custom properties for new theme"
        );

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::px;
    use gpui_polaris_theme::{DARK_TEXT, RgbaExt, rgb_a};

    #[test]
    fn test_context_from_empty_config() {
        let context = ThemeContext::from_config(None).unwrap();

        assert_eq!(context.theme(), &Theme::default());
        assert_eq!(context.custom_properties().len(), CustomProperty::ALL.len());
        assert!(context.logo().top_bar_source.is_empty());
    }

    #[test]
    fn test_context_lookup_by_key_and_name() {
        let config = ThemeConfig::default().primary_color("#ffffff");
        let context = ThemeContext::from_config(Some(&config)).unwrap();

        let by_key = context.get(CustomProperty::PrimaryText);
        let by_name = context.get_by_name("--theme-primary-text");
        assert_eq!(by_key, by_name);
        assert_eq!(
            by_key,
            Some(&CustomPropertyValue::Color(rgb_a(DARK_TEXT, 1.)))
        );
        assert_eq!(context.get_by_name("--nope"), None);
    }

    #[test]
    fn test_context_clones_share_state() {
        let context = ThemeContext::from_config(None).unwrap();
        let clone = context.clone();
        assert!(context.ptr_eq(&clone));
    }

    #[test]
    fn test_inline_style_lists_every_property() {
        let context = ThemeContext::from_config(None).unwrap();
        let style = context.inline_style();

        for property in CustomProperty::ALL {
            assert!(
                style.contains(&format!("{}:", property.name())),
                "{style} should contain {property}"
            );
        }
    }

    #[test]
    fn test_same_config_reference_short_circuits() {
        let config = Rc::new(ThemeConfig::default().primary_color("#123456"));
        let mut provider = ThemeProvider::new(Some(config.clone())).unwrap();
        let before = provider.context().clone();

        assert!(!provider.set_config(Some(config)).unwrap());
        assert!(provider.context().ptr_eq(&before));
    }

    #[test]
    fn test_missing_config_twice_short_circuits() {
        let mut provider = ThemeProvider::new(None).unwrap();
        let before = provider.context().clone();

        assert!(!provider.set_config(None).unwrap());
        assert!(provider.context().ptr_eq(&before));
    }

    #[test]
    fn test_new_config_reference_rebuilds() {
        let mut provider = ThemeProvider::new(None).unwrap();
        let before = provider.context().clone();

        let config = Rc::new(ThemeConfig::default().primary_color("#000000"));
        assert!(provider.set_config(Some(config)).unwrap());
        assert!(!provider.context().ptr_eq(&before));
        assert_eq!(
            provider
                .context()
                .custom_properties()
                .color(CustomProperty::Primary)
                .map(|color| color.to_hex()),
            Some("#000000".to_string())
        );
    }

    #[test]
    fn test_equal_but_distinct_config_rebuilds_to_equal_map() {
        let mut provider = ThemeProvider::new(Some(Rc::new(ThemeConfig::default()))).unwrap();
        let before = provider.context().clone();

        assert!(provider.set_config(Some(Rc::new(ThemeConfig::default()))).unwrap());
        assert!(!provider.context().ptr_eq(&before));
        assert_eq!(provider.context().custom_properties(), before.custom_properties());
    }

    #[test]
    fn test_same_theme_instance_short_circuits() {
        let theme = Rc::new(Theme::default());
        let mut provider = ThemeProvider::with_theme(theme.clone()).unwrap();
        let before = provider.context().clone();

        assert!(!provider.set_theme(theme).unwrap());
        assert!(provider.context().ptr_eq(&before));

        assert!(provider.set_theme(Rc::new(Theme::default())).unwrap());
        assert!(!provider.context().ptr_eq(&before));
    }

    #[test]
    fn test_config_after_theme_always_rebuilds() {
        let mut provider = ThemeProvider::with_theme(Rc::new(Theme::default())).unwrap();
        assert!(provider.set_config(None).unwrap());
    }

    #[test]
    fn test_invalid_config_keeps_previous_context() {
        let mut provider = ThemeProvider::new(None).unwrap();
        let before = provider.context().clone();

        let config = Rc::new(ThemeConfig::default().frame_offset(px(-10.)));
        let result = provider.set_config(Some(config));

        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidLength { .. })
        ));
        assert!(provider.context().ptr_eq(&before));

        // The failed config was not recorded, so `None` still short-circuits.
        assert!(!provider.set_config(None).unwrap());
    }

    #[test]
    fn test_provider_rejects_invalid_initial_config() {
        let config = Rc::new(ThemeConfig::default().frame_offset(px(f32::INFINITY)));
        assert!(ThemeProvider::new(Some(config)).is_err());
    }
}
