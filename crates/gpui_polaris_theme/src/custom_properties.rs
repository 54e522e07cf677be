#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use gpui::{Pixels, Rgba};
use indexmap::IndexMap;

use crate::{ConfigurationError, RgbaExt, Theme, parse_color, rgb_a};

/// Text color used on light backgrounds.
pub const DARK_TEXT: u32 = 0x212b36;
/// Text color used on dark backgrounds.
pub const LIGHT_TEXT: u32 = 0xffffff;

/// Lightness step for the `-lighter` and `-darker` variants.
pub const LIGHTNESS_STEP: f32 = 0.10;
/// Lightness step between the surface and its border.
pub const BORDER_STEP: f32 = 0.12;

/// Every property produced by [`build_custom_properties`].
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum CustomProperty {
    #[assoc(name = "--theme-primary")]
    Primary,
    #[assoc(name = "--theme-primary-lighter")]
    PrimaryLighter,
    #[assoc(name = "--theme-primary-darker")]
    PrimaryDarker,
    #[assoc(name = "--theme-primary-text")]
    PrimaryText,
    #[assoc(name = "--theme-secondary")]
    Secondary,
    #[assoc(name = "--theme-secondary-lighter")]
    SecondaryLighter,
    #[assoc(name = "--theme-secondary-darker")]
    SecondaryDarker,
    #[assoc(name = "--theme-secondary-text")]
    SecondaryText,
    #[assoc(name = "--theme-surface")]
    Surface,
    #[assoc(name = "--theme-surface-lighter")]
    SurfaceLighter,
    #[assoc(name = "--theme-surface-darker")]
    SurfaceDarker,
    #[assoc(name = "--theme-surface-text")]
    SurfaceText,
    #[assoc(name = "--theme-surface-border")]
    SurfaceBorder,
    #[assoc(name = "--theme-logo-width")]
    LogoWidth,
    #[assoc(name = "--theme-frame-offset")]
    FrameOffset,
}

impl CustomProperty {
    pub const ALL: [CustomProperty; 15] = [
        Self::Primary,
        Self::PrimaryLighter,
        Self::PrimaryDarker,
        Self::PrimaryText,
        Self::Secondary,
        Self::SecondaryLighter,
        Self::SecondaryDarker,
        Self::SecondaryText,
        Self::Surface,
        Self::SurfaceLighter,
        Self::SurfaceDarker,
        Self::SurfaceText,
        Self::SurfaceBorder,
        Self::LogoWidth,
        Self::FrameOffset,
    ];

    pub fn from_name(name: &str) -> Option<CustomProperty> {
        Self::ALL.into_iter().find(|property| property.name() == name)
    }
}

impl fmt::Display for CustomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A brand color role and the properties derived from it.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn fallback(&self) -> u32)]
#[func(pub fn base(&self) -> CustomProperty)]
#[func(pub fn lighter(&self) -> CustomProperty)]
#[func(pub fn darker(&self) -> CustomProperty)]
#[func(pub fn text(&self) -> CustomProperty)]
pub enum ColorRole {
    #[assoc(fallback = 0x5c6ac4)]
    #[assoc(base = CustomProperty::Primary)]
    #[assoc(lighter = CustomProperty::PrimaryLighter)]
    #[assoc(darker = CustomProperty::PrimaryDarker)]
    #[assoc(text = CustomProperty::PrimaryText)]
    Primary,
    #[assoc(fallback = 0x006fbb)]
    #[assoc(base = CustomProperty::Secondary)]
    #[assoc(lighter = CustomProperty::SecondaryLighter)]
    #[assoc(darker = CustomProperty::SecondaryDarker)]
    #[assoc(text = CustomProperty::SecondaryText)]
    Secondary,
    #[assoc(fallback = 0xf4f6f8)]
    #[assoc(base = CustomProperty::Surface)]
    #[assoc(lighter = CustomProperty::SurfaceLighter)]
    #[assoc(darker = CustomProperty::SurfaceDarker)]
    #[assoc(text = CustomProperty::SurfaceText)]
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CustomPropertyValue {
    Color(Rgba),
    Length(Pixels),
}

impl fmt::Display for CustomPropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomPropertyValue::Color(color) => f.write_str(&color.to_hex()),
            CustomPropertyValue::Length(length) => write!(f, "{}px", length.to_f64() as f32),
        }
    }
}

/// The resolved custom properties of a [`Theme`].
///
/// Always holds every [`CustomProperty`], in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPropertyMap {
    values: IndexMap<CustomProperty, CustomPropertyValue>,
}

impl CustomPropertyMap {
    pub fn get(&self, property: CustomProperty) -> Option<&CustomPropertyValue> {
        self.values.get(&property)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&CustomPropertyValue> {
        self.get(CustomProperty::from_name(name)?)
    }

    pub fn color(&self, property: CustomProperty) -> Option<Rgba> {
        match self.get(property)? {
            CustomPropertyValue::Color(color) => Some(*color),
            CustomPropertyValue::Length(_) => None,
        }
    }

    pub fn length(&self, property: CustomProperty) -> Option<Pixels> {
        match self.get(property)? {
            CustomPropertyValue::Length(length) => Some(*length),
            CustomPropertyValue::Color(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CustomProperty, &CustomPropertyValue)> {
        self.values.iter().map(|(property, value)| (*property, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Renders the properties as an inline style, `--name:value;...`.
    pub fn to_css_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CustomPropertyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(";")?;
            }
            write!(f, "{property}:{value}")?;
        }
        Ok(())
    }
}

/// Derives every [`CustomProperty`] from `theme`.
///
/// Colors that do not parse fall back to their role's default color.
/// Lengths that are negative or not finite make the whole theme invalid.
pub fn build_custom_properties(theme: &Theme) -> Result<CustomPropertyMap, ConfigurationError> {
    let logo_width = checked_length(CustomProperty::LogoWidth, theme.logo().width)?;
    let frame_offset = checked_length(CustomProperty::FrameOffset, theme.frame_offset())?;

    let colors = theme.colors();
    let mut values = IndexMap::with_capacity(CustomProperty::ALL.len());

    for (role, raw) in [
        (ColorRole::Primary, &colors.primary),
        (ColorRole::Secondary, &colors.secondary),
        (ColorRole::Surface, &colors.surface),
    ] {
        let color = resolve_color(role, raw);

        values.insert(role.base(), CustomPropertyValue::Color(color));
        values.insert(role.lighter(), CustomPropertyValue::Color(color.lighten(LIGHTNESS_STEP)));
        values.insert(role.darker(), CustomPropertyValue::Color(color.darken(LIGHTNESS_STEP)));
        values.insert(role.text(), CustomPropertyValue::Color(contrasting_text(color)));

        if role == ColorRole::Surface {
            values.insert(
                CustomProperty::SurfaceBorder,
                CustomPropertyValue::Color(surface_border(color)),
            );
        }
    }

    values.insert(CustomProperty::LogoWidth, CustomPropertyValue::Length(logo_width));
    values.insert(CustomProperty::FrameOffset, CustomPropertyValue::Length(frame_offset));

    Ok(CustomPropertyMap { values })
}

fn resolve_color(role: ColorRole, raw: &str) -> Rgba {
    match parse_color(raw) {
        Some(color) => color,
        None => {
            tracing::warn!(
                property = role.base().name(),
                value = raw,
                "invalid theme color, using the default"
            );
            rgb_a(role.fallback(), 1.)
        }
    }
}

/// Dark or light text, whichever contrasts more with `background`. Ties
/// pick dark.
pub fn contrasting_text(background: Rgba) -> Rgba {
    let dark = rgb_a(DARK_TEXT, 1.);
    let light = rgb_a(LIGHT_TEXT, 1.);

    if background.contrast_ratio(&dark) >= background.contrast_ratio(&light) {
        dark
    } else {
        light
    }
}

fn surface_border(surface: Rgba) -> Rgba {
    if surface.is_light() {
        surface.darken(BORDER_STEP)
    } else {
        surface.lighten(BORDER_STEP)
    }
}

fn checked_length(property: CustomProperty, length: Pixels) -> Result<Pixels, ConfigurationError> {
    let value = length.to_f64() as f32;

    if value.is_finite() && value >= 0. {
        Ok(length)
    } else {
        Err(ConfigurationError::InvalidLength {
            property: property.name(),
            value,
        })
    }
}
