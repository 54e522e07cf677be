use gpui::{Pixels, SharedString, px};
use serde::{Deserialize, Serialize};

use crate::{Setting, ThemeConfig, ThemeError, ThemeLogoConfig, deserializers::de_pixels};

pub const DEFAULT_PRIMARY_COLOR: &str = "#5c6ac4";
pub const DEFAULT_SECONDARY_COLOR: &str = "#006fbb";
pub const DEFAULT_SURFACE_COLOR: &str = "#f4f6f8";
pub const DEFAULT_LOGO_WIDTH: f32 = 104.;
pub const DEFAULT_FRAME_OFFSET: f32 = 0.;

/// A fully populated theme.
///
/// Built with [`Theme::normalize`]; there are no unset fields and nothing
/// can be changed afterwards. Colors are kept as written in the
/// configuration and only parsed when custom properties are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    logo: ThemeLogo,
    colors: ThemeColors,
    #[serde(deserialize_with = "de_pixels")]
    frame_offset: Pixels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeLogo {
    pub top_bar_source: SharedString,
    pub contextual_save_bar_source: SharedString,
    pub url: SharedString,
    pub accessibility_label: SharedString,
    #[serde(deserialize_with = "de_pixels")]
    pub width: Pixels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: SharedString,
    pub secondary: SharedString,
    pub surface: SharedString,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            logo: ThemeLogo::default(),
            colors: ThemeColors::default(),
            frame_offset: px(DEFAULT_FRAME_OFFSET),
        }
    }
}

impl Default for ThemeLogo {
    fn default() -> Self {
        Self {
            top_bar_source: SharedString::default(),
            contextual_save_bar_source: SharedString::default(),
            url: SharedString::default(),
            accessibility_label: SharedString::default(),
            width: px(DEFAULT_LOGO_WIDTH),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_COLOR.into(),
            secondary: DEFAULT_SECONDARY_COLOR.into(),
            surface: DEFAULT_SURFACE_COLOR.into(),
        }
    }
}

impl Theme {
    /// Fills every absent or unset field of `config` with its default.
    ///
    /// `None` gives the all-defaults theme.
    pub fn normalize(config: Option<&ThemeConfig>) -> Theme {
        let Some(config) = config else {
            return Theme::default();
        };

        let defaults = ThemeColors::default();

        Theme {
            logo: ThemeLogo::normalize(config.logo.as_value()),
            colors: ThemeColors {
                primary: config.primary_color.clone().unwrap_or(defaults.primary),
                secondary: config.secondary_color.clone().unwrap_or(defaults.secondary),
                surface: config.surface_color.clone().unwrap_or(defaults.surface),
            },
            frame_offset: config.frame_offset.unwrap_or(px(DEFAULT_FRAME_OFFSET)),
        }
    }

    /// Loads an already normalized theme, as written by serializing one.
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn logo(&self) -> &ThemeLogo {
        &self.logo
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn frame_offset(&self) -> Pixels {
        self.frame_offset
    }
}

impl ThemeLogo {
    fn normalize(config: Option<&ThemeLogoConfig>) -> ThemeLogo {
        let Some(config) = config else {
            return ThemeLogo::default();
        };

        ThemeLogo {
            top_bar_source: config.top_bar_source.clone().unwrap_or_default(),
            contextual_save_bar_source: config
                .contextual_save_bar_source
                .clone()
                .unwrap_or_default(),
            url: config.url.clone().unwrap_or_default(),
            accessibility_label: config.accessibility_label.clone().unwrap_or_default(),
            width: config.width.unwrap_or(px(DEFAULT_LOGO_WIDTH)),
        }
    }
}

impl From<&Theme> for ThemeConfig {
    fn from(theme: &Theme) -> Self {
        let logo = &theme.logo;

        ThemeConfig {
            logo: Setting::Value(ThemeLogoConfig {
                top_bar_source: logo.top_bar_source.clone().into(),
                contextual_save_bar_source: logo.contextual_save_bar_source.clone().into(),
                url: logo.url.clone().into(),
                accessibility_label: logo.accessibility_label.clone().into(),
                width: logo.width.into(),
            }),
            primary_color: theme.colors.primary.clone().into(),
            secondary_color: theme.colors.secondary.clone().into(),
            surface_color: theme.colors.surface.clone().into(),
            frame_offset: theme.frame_offset.into(),
        }
    }
}
