use std::path::Path;

use gpui::{Pixels, SharedString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ThemeError, deserializers::de_pixels_setting};

/// A configuration field that can be left out, explicitly unset, or set.
///
/// In JSON a missing key is [`Setting::Absent`] and `null` is
/// [`Setting::Unset`]. Both normalize to the field's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Setting<T> {
    #[default]
    Absent,
    Unset,
    Value(T),
}

impl<T> Setting<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Setting::Absent)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Setting::Value(value) => Some(value),
            Setting::Absent | Setting::Unset => None,
        }
    }

    /// Returns the value, or `default` when absent or unset.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Setting::Value(value) => value,
            Setting::Absent | Setting::Unset => default,
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or(T::default())
    }
}

impl<T> From<T> for Setting<T> {
    fn from(value: T) -> Self {
        Setting::Value(value)
    }
}

impl<T: Serialize> Serialize for Setting<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Setting::Value(value) => serializer.serialize_some(value),
            Setting::Absent | Setting::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Setting<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Setting::Value(value),
            None => Setting::Unset,
        })
    }
}

/// Loosely specified brand configuration, as handed in by the host app.
///
/// Every field is optional. Unknown keys are ignored when parsing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Setting::is_absent")]
    pub logo: Setting<ThemeLogoConfig>,
    #[serde(default, skip_serializing_if = "Setting::is_absent")]
    pub primary_color: Setting<SharedString>,
    #[serde(default, skip_serializing_if = "Setting::is_absent")]
    pub secondary_color: Setting<SharedString>,
    #[serde(default, skip_serializing_if = "Setting::is_absent")]
    pub surface_color: Setting<SharedString>,
    #[serde(
        default,
        skip_serializing_if = "Setting::is_absent",
        deserialize_with = "de_pixels_setting"
    )]
    pub frame_offset: Setting<Pixels>,
}

impl ThemeConfig {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(contents)
    }

    pub fn logo(mut self, logo: impl Into<Setting<ThemeLogoConfig>>) -> Self {
        self.logo = logo.into();
        self
    }

    pub fn primary_color(mut self, color: impl Into<SharedString>) -> Self {
        self.primary_color = Setting::Value(color.into());
        self
    }

    pub fn secondary_color(mut self, color: impl Into<SharedString>) -> Self {
        self.secondary_color = Setting::Value(color.into());
        self
    }

    pub fn surface_color(mut self, color: impl Into<SharedString>) -> Self {
        self.surface_color = Setting::Value(color.into());
        self
    }

    pub fn frame_offset(mut self, offset: impl Into<Setting<Pixels>>) -> Self {
        self.frame_offset = offset.into();
        self
    }
}

/// Logo shown in the top bar and the contextual save bar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeLogoConfig {
    #[serde(default, skip_serializing_if = "Setting::is_absent")]
    pub top_bar_source: Setting<SharedString>,
    #[serde(default, skip_serializing_if = "Setting::is_absent")]
    pub contextual_save_bar_source: Setting<SharedString>,
    #[serde(default, skip_serializing_if = "Setting::is_absent")]
    pub url: Setting<SharedString>,
    #[serde(default, skip_serializing_if = "Setting::is_absent")]
    pub accessibility_label: Setting<SharedString>,
    #[serde(
        default,
        skip_serializing_if = "Setting::is_absent",
        deserialize_with = "de_pixels_setting"
    )]
    pub width: Setting<Pixels>,
}

impl ThemeLogoConfig {
    pub fn top_bar_source(mut self, source: impl Into<SharedString>) -> Self {
        self.top_bar_source = Setting::Value(source.into());
        self
    }

    pub fn contextual_save_bar_source(mut self, source: impl Into<SharedString>) -> Self {
        self.contextual_save_bar_source = Setting::Value(source.into());
        self
    }

    pub fn url(mut self, url: impl Into<SharedString>) -> Self {
        self.url = Setting::Value(url.into());
        self
    }

    pub fn accessibility_label(mut self, label: impl Into<SharedString>) -> Self {
        self.accessibility_label = Setting::Value(label.into());
        self
    }

    pub fn width(mut self, width: impl Into<Setting<Pixels>>) -> Self {
        self.width = width.into();
        self
    }
}
