use gpui::{Pixels, px};
use serde::{Deserialize, Deserializer, de::Error};

use crate::Setting;

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrFloat::deserialize(deserializer)?
        .into_pixels()
        .map_err(D::Error::custom)
}

/// Like [`de_pixels`], but `null` becomes [`Setting::Unset`].
///
/// Needs `#[serde(default)]` next to it so a missing key stays
/// [`Setting::Absent`].
pub fn de_pixels_setting<'de, D>(deserializer: D) -> Result<Setting<Pixels>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(value) => value
            .into_pixels()
            .map(Setting::Value)
            .map_err(D::Error::custom),
        None => Ok(Setting::Unset),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

impl StringOrFloat {
    /// Lengths must be finite and non-negative.
    fn into_pixels(self) -> Result<Pixels, &'static str> {
        let pixels = match self {
            StringOrFloat::Float(pixels) => pixels,

            StringOrFloat::String(string) => {
                let Some(string) = string.trim().strip_suffix("px") else {
                    return Err("expected string to end with 'px'");
                };

                match string.trim_end().parse::<f32>() {
                    Ok(pixels) => pixels,
                    Err(_) => return Err("could not convert string into pixels"),
                }
            }
        };

        if !pixels.is_finite() {
            return Err("length must be finite");
        }

        if pixels < 0. {
            return Err("length can't be negative");
        }

        Ok(px(pixels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "de_pixels")]
        width: Pixels,
        #[serde(default, deserialize_with = "de_pixels_setting")]
        offset: Setting<Pixels>,
    }

    #[test]
    fn test_pixels_from_number_and_string() {
        let holder: Holder = serde_json::from_str(r#"{"width": 12, "offset": "4px"}"#).unwrap();
        assert_eq!(holder.width, px(12.));
        assert_eq!(holder.offset, Setting::Value(px(4.)));
    }

    #[test]
    fn test_pixels_setting_null_and_missing() {
        let holder: Holder = serde_json::from_str(r#"{"width": 1, "offset": null}"#).unwrap();
        assert_eq!(holder.offset, Setting::Unset);

        let holder: Holder = serde_json::from_str(r#"{"width": 1}"#).unwrap();
        assert_eq!(holder.offset, Setting::Absent);
    }

    #[test]
    fn test_pixels_rejects_missing_suffix() {
        let result = serde_json::from_str::<Holder>(r#"{"width": "12"}"#);
        assert!(result.is_err(), "a bare numeric string should be rejected");

        let result = serde_json::from_str::<Holder>(r#"{"width": "wide px"}"#);
        assert!(result.is_err(), "a non-numeric length should be rejected");
    }

    #[test]
    fn test_pixels_rejects_negative_and_non_finite() {
        for input in [
            r#"{"width": -5}"#,
            r#"{"width": "-0.5px"}"#,
            r#"{"width": "1e39px"}"#,
            r#"{"width": "infpx"}"#,
            r#"{"width": "NaNpx"}"#,
            r#"{"width": 1e39}"#,
            r#"{"width": 1, "offset": -5}"#,
            r#"{"width": 1, "offset": "1e39px"}"#,
        ] {
            let result = serde_json::from_str::<Holder>(input);
            assert!(result.is_err(), "{input} should be rejected");
        }

        let holder: Holder = serde_json::from_str(r#"{"width": 0}"#).unwrap();
        assert_eq!(holder.width, px(0.));
    }
}
