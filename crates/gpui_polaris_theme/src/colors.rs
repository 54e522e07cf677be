use gpui::{Hsla, Rgba, hsla};

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Extension trait for modifying and inspecting RGBA colors.
pub trait RgbaExt {
    /// Moves the HSL lightness up by `amount` (0..=1), clamped.
    fn lighten(self, amount: f32) -> Self;

    /// Moves the HSL lightness down by `amount` (0..=1), clamped.
    fn darken(self, amount: f32) -> Self;

    /// WCAG 2 relative luminance. Alpha is ignored.
    fn relative_luminance(&self) -> f32;

    /// WCAG 2 contrast ratio, from 1 to 21.
    fn contrast_ratio(&self, other: &Self) -> f32;

    fn is_light(&self) -> bool;

    /// `#rrggbb`, or `#rrggbbaa` when the color is translucent.
    fn to_hex(&self) -> String;
}

impl RgbaExt for Rgba {
    fn lighten(self, amount: f32) -> Self {
        shift_lightness(self, amount)
    }

    fn darken(self, amount: f32) -> Self {
        shift_lightness(self, -amount)
    }

    fn relative_luminance(&self) -> f32 {
        fn linear(channel: f32) -> f32 {
            let channel = channel.clamp(0., 1.);
            if channel <= 0.04045 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    fn contrast_ratio(&self, other: &Self) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        (a.max(b) + 0.05) / (a.min(b) + 0.05)
    }

    fn is_light(&self) -> bool {
        self.relative_luminance() > 0.5
    }

    fn to_hex(&self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a].map(to_byte);

        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0., 1.) * 255.).round() as u8
}

fn shift_lightness(color: Rgba, amount: f32) -> Rgba {
    let mut hsla = Hsla::from(color);
    hsla.l = (hsla.l + amount).clamp(0., 1.);
    Rgba::from(hsla)
}

/// Parses a CSS color.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`,
/// `hsl()` and `hsla()` with comma separated arguments. Returns `None` for
/// anything else, including non-finite components.
pub fn parse_color(input: &str) -> Option<Rgba> {
    let input = input.trim().to_ascii_lowercase();

    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(args) = functional_args(&input, "rgba").or_else(|| functional_args(&input, "rgb"))
    {
        return parse_rgb(&args);
    }

    if let Some(args) = functional_args(&input, "hsla").or_else(|| functional_args(&input, "hsl"))
    {
        return parse_hsl(&args);
    }

    None
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_owned(),
        _ => return None,
    };

    let value = u32::from_str_radix(&expanded, 16).ok()?;

    if expanded.len() == 8 {
        Some(rgb_a(value >> 8, (value & 0xff) as f32 / 255.))
    } else {
        Some(rgb_a(value, 1.))
    }
}

fn functional_args<'a>(input: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let args = input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    Some(args.split(',').map(str::trim).collect())
}

fn parse_rgb(args: &[&str]) -> Option<Rgba> {
    let (channels, alpha) = split_alpha(args)?;

    let mut rgb = [0.; 3];
    for (slot, arg) in rgb.iter_mut().zip(channels) {
        *slot = match arg.strip_suffix('%') {
            Some(percent) => finite(percent)? / 100.,
            None => finite(arg)? / 255.,
        }
        .clamp(0., 1.);
    }

    let [r, g, b] = rgb;
    Some(Rgba { r, g, b, a: alpha })
}

fn parse_hsl(args: &[&str]) -> Option<Rgba> {
    let (channels, alpha) = split_alpha(args)?;

    let hue = finite(channels[0].strip_suffix("deg").unwrap_or(channels[0]))?;
    let saturation = finite(channels[1].strip_suffix('%').unwrap_or(channels[1]))?;
    let lightness = finite(channels[2].strip_suffix('%').unwrap_or(channels[2]))?;

    Some(Rgba::from(hsla(
        hue.rem_euclid(360.) / 360.,
        (saturation / 100.).clamp(0., 1.),
        (lightness / 100.).clamp(0., 1.),
        alpha,
    )))
}

/// Splits three channels from an optional fourth alpha argument.
fn split_alpha<'a>(args: &'a [&'a str]) -> Option<(&'a [&'a str], f32)> {
    match args {
        [_, _, _] => Some((args, 1.)),
        [channels @ .., alpha] if channels.len() == 3 => {
            let alpha = match alpha.strip_suffix('%') {
                Some(percent) => finite(percent)? / 100.,
                None => finite(alpha)?,
            };
            Some((channels, alpha.clamp(0., 1.)))
        }
        _ => None,
    }
}

fn finite(value: &str) -> Option<f32> {
    value.parse::<f32>().ok().filter(|value| value.is_finite())
}
