/// RGB colour values used for radial gradients.
use crate::error::GalaxyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour with channels in the 0-1 range, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, GalaxyError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GalaxyError::InvalidColour(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|value| value as f32 / 255.0)
                .map_err(|_| GalaxyError::InvalidColour(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(&self) -> String {
        let byte = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    /// Per-channel linear interpolation towards `other`.
    /// Exact at both ends: `t == 0` yields `self`, `t == 1` yields `other`.
    pub fn lerp(&self, other: &Colour, t: f32) -> Colour {
        Colour {
            r: self.r * (1.0 - t) + other.r * t,
            g: self.g * (1.0 - t) + other.g * t,
            b: self.b * (1.0 - t) + other.b * t,
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Colour {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = GalaxyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_hex()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn parses_hex_with_and_without_hash() {
        let a = Colour::from_hex("#ff6030").unwrap();
        let b = Colour::from_hex("FF6030").unwrap();
        assert_eq!(a, b);
        assert_abs_diff_eq!(a.r, 1.0);
        assert_abs_diff_eq!(a.g, 96.0 / 255.0);
        assert_abs_diff_eq!(a.b, 48.0 / 255.0);
        assert_eq!(a.to_hex(), "#ff6030");
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#fff", "#gg0000", "#1234567", "#ff60é", "#+f+f+f", "+ff+ff"] {
            assert!(matches!(
                Colour::from_hex(bad),
                Err(GalaxyError::InvalidColour(_))
            ));
        }
    }

    #[test]
    fn lerp_hits_both_ends_and_midpoint() {
        let inside = Colour::new(1.0, 0.0, 0.2);
        let outside = Colour::new(0.0, 1.0, 0.6);
        assert_eq!(inside.lerp(&outside, 0.0), inside);
        assert_eq!(inside.lerp(&outside, 1.0), outside);

        let mid = inside.lerp(&outside, 0.5);
        assert_abs_diff_eq!(mid.r, 0.5);
        assert_abs_diff_eq!(mid.g, 0.5);
        assert_abs_diff_eq!(mid.b, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn serializes_as_hex_string() {
        let colour = Colour::from_hex("#1b3984").unwrap();
        let json = serde_json::to_string(&colour).unwrap();
        assert_eq!(json, "\"#1b3984\"");
        let back: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, colour);
        assert!(serde_json::from_str::<Colour>("\"blue\"").is_err());
    }
}
