//! Seasonal theme classification for color palettes.
//!
//! The classifier averages the hue of every parseable color and maps the
//! mean onto four seasonal bins. The mean is a plain arithmetic mean on the
//! 0–360 scale (not a circular mean), so palettes straddling 0° can land in
//! an unexpected bin. Saved outfits were classified this way, so it stays.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Hue bin boundaries in degrees (closed-open intervals).
const SPRING_START: f64 = 30.0;
const SUMMER_START: f64 = 90.0;
const WINTER_START: f64 = 210.0;
const AUTUMN_WRAP_START: f64 = 330.0;

/// Seasonal label attached to an outfit palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Theme {
    Spring,
    Summer,
    Autumn,
    Winter,
    Neutral,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Spring,
        Theme::Summer,
        Theme::Autumn,
        Theme::Winter,
        Theme::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Spring => "Spring",
            Theme::Summer => "Summer",
            Theme::Autumn => "Autumn",
            Theme::Winter => "Winter",
            Theme::Neutral => "Neutral",
        }
    }

    /// Map a mean hue (degrees) to its seasonal bin.
    pub fn from_hue(hue: f64) -> Self {
        if !(SPRING_START..AUTUMN_WRAP_START).contains(&hue) {
            Theme::Autumn
        } else if hue < SUMMER_START {
            Theme::Spring
        } else if hue < WINTER_START {
            Theme::Summer
        } else {
            Theme::Winter
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    /// Case-insensitive parse of a theme name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                format!("unknown theme '{trimmed}', expected one of Spring, Summer, Autumn, Winter, Neutral")
            })
    }
}

impl TryFrom<String> for Theme {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Classify a palette of hex color strings into a seasonal [`Theme`].
///
/// Malformed colors are skipped. A palette with no parseable colors is
/// [`Theme::Neutral`]; that is the only way to get `Neutral`.
///
/// # Examples
///
/// ```
/// use blackstyles_core::theme::{classify, Theme};
/// assert_eq!(classify(&["#ff0000"]), Theme::Autumn);
/// assert_eq!(classify(&["#00ff00"]), Theme::Summer);
/// assert_eq!(classify::<&str>(&[]), Theme::Neutral);
/// ```
pub fn classify<S: AsRef<str>>(palette: &[S]) -> Theme {
    let hues: Vec<f64> = palette
        .iter()
        .filter_map(|hex| Rgb::parse_hex(hex.as_ref()))
        .map(Rgb::hue_degrees)
        .collect();

    if hues.is_empty() {
        return Theme::Neutral;
    }

    let mean = hues.iter().sum::<f64>() / hues.len() as f64;
    Theme::from_hue(mean)
}
