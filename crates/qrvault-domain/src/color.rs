//! Six-digit hex colors used to style generated codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Foreground applied when a submission omits it.
pub const DEFAULT_FOREGROUND: &str = "#000000";
/// Background applied when a submission omits it.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color format: {0:?}")]
pub struct InvalidHexColor(pub String);

/// A color of the form `#rrggbb`, hex digits in either case.
///
/// The original spelling is kept; `#ABCDEF` and `#abcdef` are both valid
/// and are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(s: &str) -> Result<Self, InvalidHexColor> {
        if is_hex_color(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(InvalidHexColor(s.to_owned()))
        }
    }

    pub fn default_foreground() -> Self {
        Self(DEFAULT_FOREGROUND.to_owned())
    }

    pub fn default_background() -> Self {
        Self(DEFAULT_BACKGROUND.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidHexColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_hex_color(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidHexColor(value))
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// Returns `true` when `s` matches `^#[0-9a-f]{6}$`, ignoring case.
pub fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
