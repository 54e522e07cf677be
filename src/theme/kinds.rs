#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{Pixels, Rgba};
use gpui_polaris_theme::CustomProperty;

use crate::theme::ThemeContext;

/// Background colors derived from the brand color roles.
///
/// Use `resolve()` to get the actual color from a [`ThemeContext`].
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn property(&self) -> CustomProperty)]
#[func(pub fn text(&self) -> ThemeTextKind)]
pub enum ThemeBackgroundKind {
    /// Main brand color.
    #[assoc(property = CustomProperty::Primary)]
    #[assoc(text = ThemeTextKind::OnPrimary)]
    Primary,
    /// Primary, lighter. Hover states.
    #[assoc(property = CustomProperty::PrimaryLighter)]
    #[assoc(text = ThemeTextKind::OnPrimary)]
    PrimaryLighter,
    /// Primary, darker. Pressed states.
    #[assoc(property = CustomProperty::PrimaryDarker)]
    #[assoc(text = ThemeTextKind::OnPrimary)]
    PrimaryDarker,
    #[assoc(property = CustomProperty::Secondary)]
    #[assoc(text = ThemeTextKind::OnSecondary)]
    Secondary,
    #[assoc(property = CustomProperty::SecondaryLighter)]
    #[assoc(text = ThemeTextKind::OnSecondary)]
    SecondaryLighter,
    #[assoc(property = CustomProperty::SecondaryDarker)]
    #[assoc(text = ThemeTextKind::OnSecondary)]
    SecondaryDarker,
    /// Base for cards and pages.
    #[assoc(property = CustomProperty::Surface)]
    #[assoc(text = ThemeTextKind::OnSurface)]
    Surface,
    #[assoc(property = CustomProperty::SurfaceLighter)]
    #[assoc(text = ThemeTextKind::OnSurface)]
    SurfaceLighter,
    #[assoc(property = CustomProperty::SurfaceDarker)]
    #[assoc(text = ThemeTextKind::OnSurface)]
    SurfaceDarker,
}

impl ThemeBackgroundKind {
    pub fn resolve(&self, cx: &ThemeContext) -> Rgba {
        color(cx, self.property())
    }
}

/// Text colors readable on top of a background role.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn property(&self) -> CustomProperty)]
pub enum ThemeTextKind {
    #[assoc(property = CustomProperty::PrimaryText)]
    OnPrimary,
    #[assoc(property = CustomProperty::SecondaryText)]
    OnSecondary,
    #[assoc(property = CustomProperty::SurfaceText)]
    OnSurface,
}

impl ThemeTextKind {
    pub fn resolve(&self, cx: &ThemeContext) -> Rgba {
        color(cx, self.property())
    }
}

/// Border colors.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn property(&self) -> CustomProperty)]
pub enum ThemeBorderKind {
    #[assoc(property = CustomProperty::SurfaceBorder)]
    Surface,
}

impl ThemeBorderKind {
    pub fn resolve(&self, cx: &ThemeContext) -> Rgba {
        color(cx, self.property())
    }
}

/// Lengths that resolve to theme-defined pixel values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn property(&self) -> CustomProperty)]
pub enum ThemeLengthKind {
    /// Width of the top bar logo.
    #[assoc(property = CustomProperty::LogoWidth)]
    LogoWidth,
    /// Space reserved above the frame, e.g. for a host app banner.
    #[assoc(property = CustomProperty::FrameOffset)]
    FrameOffset,
}

impl ThemeLengthKind {
    pub fn resolve(&self, cx: &ThemeContext) -> Pixels {
        cx.custom_properties()
            .length(self.property())
            .unwrap_or_default()
    }
}

// Every kind names a property of the matching type, and the map always
// holds all of them, so the defaults below are never reached.
fn color(cx: &ThemeContext, property: CustomProperty) -> Rgba {
    cx.custom_properties().color(property).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::px;
    use gpui_polaris_theme::{DARK_TEXT, LIGHT_TEXT, RgbaExt, ThemeConfig, rgb_a};

    fn context(config: ThemeConfig) -> ThemeContext {
        ThemeContext::from_config(Some(&config)).unwrap()
    }

    #[test]
    fn test_background_kinds_resolve() {
        let cx = context(ThemeConfig::default());
        let map = cx.custom_properties();

        for kind in [
            ThemeBackgroundKind::Primary,
            ThemeBackgroundKind::PrimaryLighter,
            ThemeBackgroundKind::PrimaryDarker,
            ThemeBackgroundKind::Secondary,
            ThemeBackgroundKind::SecondaryLighter,
            ThemeBackgroundKind::SecondaryDarker,
            ThemeBackgroundKind::Surface,
            ThemeBackgroundKind::SurfaceLighter,
            ThemeBackgroundKind::SurfaceDarker,
        ] {
            assert_eq!(
                Some(kind.resolve(&cx)),
                map.color(kind.property()),
                "{kind:?} should resolve to its property"
            );
            assert_eq!(
                Some(kind.text().resolve(&cx)),
                map.color(kind.text().property()),
                "{kind:?} text should resolve to its property"
            );
        }
    }

    #[test]
    fn test_text_kind_contrasts_with_background() {
        let cx = context(
            ThemeConfig::default()
                .primary_color("#ffffff")
                .secondary_color("#000000"),
        );

        assert_eq!(
            ThemeBackgroundKind::Primary.text().resolve(&cx),
            rgb_a(DARK_TEXT, 1.)
        );
        assert_eq!(
            ThemeBackgroundKind::Secondary.text().resolve(&cx),
            rgb_a(LIGHT_TEXT, 1.)
        );
    }

    #[test]
    fn test_border_kind_resolves_against_surface() {
        let cx = context(ThemeConfig::default().surface_color("#ffffff"));

        let surface = ThemeBackgroundKind::Surface.resolve(&cx);
        let border = ThemeBorderKind::Surface.resolve(&cx);
        assert_eq!(surface, rgb_a(0xffffff, 1.));
        assert!(border.relative_luminance() < surface.relative_luminance());
    }

    #[test]
    fn test_length_kinds_resolve() {
        let cx = context(ThemeConfig::default().frame_offset(px(56.)));

        assert_eq!(ThemeLengthKind::LogoWidth.resolve(&cx), px(104.));
        assert_eq!(ThemeLengthKind::FrameOffset.resolve(&cx), px(56.));
    }

    #[test]
    fn test_variants_share_text_kind() {
        assert_eq!(
            ThemeBackgroundKind::PrimaryDarker.text(),
            ThemeBackgroundKind::Primary.text()
        );
        assert_eq!(
            ThemeBackgroundKind::SurfaceLighter.text(),
            ThemeTextKind::OnSurface
        );
    }
}
