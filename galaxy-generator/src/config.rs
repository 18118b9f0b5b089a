/// Galaxy generation parameters and their validation.
use crate::colour::Colour;
use crate::error::{GalaxyError, Result};
use constants::galaxy::{
    DEFAULT_BRANCHES, DEFAULT_COUNT, DEFAULT_INSIDE_COLOUR, DEFAULT_OUTSIDE_COLOUR,
    DEFAULT_RADIUS, DEFAULT_RANDOMNESS, DEFAULT_RANDOMNESS_POWER, DEFAULT_SIZE, DEFAULT_SPIN,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters for one generation call.
/// Counts are signed so that negative input reaches validation instead of
/// failing inside the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of points to generate.
    pub count: i64,
    /// Point render size. Only the renderer reads this.
    pub size: f32,
    /// Maximum distance from the origin.
    pub radius: f32,
    /// Number of spiral arms.
    pub branches: i64,
    /// Radians of twist per unit radius.
    pub spin: f32,
    /// Scale of the positional jitter.
    pub randomness: f32,
    /// Jitter falloff exponent; higher values pull offsets towards zero.
    #[serde(alias = "randomnessPower")]
    pub randomness_power: f32,
    #[serde(alias = "insideColor", alias = "insideColour")]
    pub inside_colour: Option<Colour>,
    #[serde(alias = "outsideColor", alias = "outsideColour")]
    pub outside_colour: Option<Colour>,
}

/// Resolved colour request for a generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub inside: Colour,
    pub outside: Colour,
}

impl Gradient {
    /// Colour at normalised radius `t`.
    pub fn sample(&self, t: f32) -> Colour {
        self.inside.lerp(&self.outside, t)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size: DEFAULT_SIZE,
            radius: DEFAULT_RADIUS,
            branches: DEFAULT_BRANCHES,
            spin: DEFAULT_SPIN,
            randomness: DEFAULT_RANDOMNESS,
            randomness_power: DEFAULT_RANDOMNESS_POWER,
            inside_colour: Colour::from_hex(DEFAULT_INSIDE_COLOUR).ok(),
            outside_colour: Colour::from_hex(DEFAULT_OUTSIDE_COLOUR).ok(),
        }
    }
}

impl GenerationConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Reject values the generator cannot honour. Never clamps.
    pub fn validate(&self) -> Result<()> {
        if self.count < 0 {
            return Err(GalaxyError::invalid(
                "count",
                format!("must be >= 0, got {}", self.count),
            ));
        }
        if self.branches < 1 {
            return Err(GalaxyError::invalid(
                "branches",
                format!("must be >= 1, got {}", self.branches),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(GalaxyError::invalid(
                "radius",
                format!("must be a finite value >= 0, got {}", self.radius),
            ));
        }
        Ok(())
    }

    /// Colour request for this config.
    /// One colour on its own paints every point with it.
    pub fn gradient(&self) -> Option<Gradient> {
        match (self.inside_colour, self.outside_colour) {
            (Some(inside), Some(outside)) => Some(Gradient { inside, outside }),
            (Some(colour), None) | (None, Some(colour)) => Some(Gradient {
                inside: colour,
                outside: colour,
            }),
            (None, None) => None,
        }
    }

    /// Same parameters without any colour request.
    pub fn without_colours(mut self) -> Self {
        self.inside_colour = None;
        self.outside_colour = None;
        self
    }

    /// Point count as a length. Only meaningful after `validate`.
    pub(crate) fn point_count(&self) -> usize {
        self.count.max(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.count, 100_000);
        assert_eq!(config.branches, 3);
        assert!(config.gradient().is_some());
    }

    #[test]
    fn rejects_negative_count() {
        let config = GenerationConfig {
            count: -1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            GalaxyError::InvalidConfig { field: "count", .. }
        ));
    }

    #[test]
    fn rejects_zero_branches() {
        let config = GenerationConfig {
            branches: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GalaxyError::InvalidConfig {
                field: "branches",
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_or_nan_radius() {
        for radius in [-0.5, f32::NAN, f32::INFINITY] {
            let config = GenerationConfig {
                radius,
                ..Default::default()
            };
            assert!(config.validate().unwrap_err().is_invalid_config());
        }
    }

    #[test]
    fn accepts_degenerate_values() {
        let config = GenerationConfig {
            count: 0,
            radius: 0.0,
            branches: 1,
            randomness: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn single_colour_becomes_solid_gradient() {
        let colour = Colour::new(0.2, 0.4, 0.6);
        let config = GenerationConfig {
            inside_colour: None,
            outside_colour: Some(colour),
            ..Default::default()
        };
        let gradient = config.gradient().unwrap();
        assert_eq!(gradient.inside, colour);
        assert_eq!(gradient.outside, colour);
        assert!(config.without_colours().gradient().is_none());
    }

    #[test]
    fn parses_partial_camel_case_json() {
        let config: GenerationConfig = serde_json::from_str(
            r##"{"count": 300, "randomnessPower": 4.5, "insideColor": "#ffffff"}"##,
        )
        .unwrap();
        assert_eq!(config.count, 300);
        assert_eq!(config.randomness_power, 4.5);
        assert_eq!(config.inside_colour, Some(Colour::new(1.0, 1.0, 1.0)));
        assert_eq!(config.radius, DEFAULT_RADIUS);
    }

    #[test]
    fn negative_count_survives_parsing() {
        let config: GenerationConfig = serde_json::from_str(r#"{"count": -1}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
