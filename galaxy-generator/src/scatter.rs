/// Background particle column spanning a stack of page sections.
use crate::colour::Colour;
use crate::error::{GalaxyError, Result};
use crate::point_set::PointSet;
use constants::scatter::{
    DEFAULT_COLOUR, DEFAULT_COUNT, DEFAULT_SECTION_COUNT, DEFAULT_SECTION_DISTANCE,
    DEFAULT_SPREAD,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub count: i64,
    /// Width and depth of the column, centred on the origin.
    pub spread: f32,
    /// Vertical gap between consecutive sections.
    #[serde(alias = "objectsDistance")]
    pub section_distance: f32,
    pub section_count: i64,
    /// Solid colour for every particle, if any.
    pub colour: Option<Colour>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            spread: DEFAULT_SPREAD,
            section_distance: DEFAULT_SECTION_DISTANCE,
            section_count: DEFAULT_SECTION_COUNT,
            colour: Colour::from_hex(DEFAULT_COLOUR).ok(),
        }
    }
}

impl ScatterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count < 0 {
            return Err(GalaxyError::invalid(
                "count",
                format!("must be >= 0, got {}", self.count),
            ));
        }
        if self.section_count < 1 {
            return Err(GalaxyError::invalid(
                "section_count",
                format!("must be >= 1, got {}", self.section_count),
            ));
        }
        if !self.spread.is_finite() || self.spread < 0.0 {
            return Err(GalaxyError::invalid(
                "spread",
                format!("must be a finite value >= 0, got {}", self.spread),
            ));
        }
        Ok(())
    }

    /// Vertical extent `(bottom, top)` the particles are drawn from.
    pub fn vertical_range(&self) -> (f32, f32) {
        let top = self.section_distance * 0.5;
        let bottom = top - self.section_distance * self.section_count as f32;
        (bottom, top)
    }
}

/// Scatter particles uniformly through the section column.
pub fn scatter<R: Rng + ?Sized>(config: &ScatterConfig, rng: &mut R) -> Result<PointSet> {
    config.validate()?;

    let count = config.count as usize;
    let depth = config.section_distance * config.section_count as f32;
    let top = config.section_distance * 0.5;

    let positions: Vec<[f32; 3]> = (0..count)
        .map(|_| {
            let x = (rng.random::<f32>() - 0.5) * config.spread;
            let y = top - rng.random::<f32>() * depth;
            let z = (rng.random::<f32>() - 0.5) * config.spread;
            [x, y, z]
        })
        .collect();

    let colours = config
        .colour
        .map(|colour| vec![colour.to_array(); positions.len()]);

    debug!(count, "scattered background particles");
    Ok(PointSet::from_parts(positions, colours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn particles_fill_the_section_column() {
        let config = ScatterConfig {
            count: 1_000,
            ..Default::default()
        };
        let set = scatter(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(set.len(), 1_000);

        let (bottom, top) = config.vertical_range();
        assert_eq!((bottom, top), (-10.0, 2.0));
        for [x, y, z] in set.positions() {
            assert!(x.abs() <= 5.0 && z.abs() <= 5.0);
            assert!(*y >= bottom && *y <= top);
        }
    }

    #[test]
    fn solid_colour_applies_to_every_particle() {
        let colour = Colour::from_hex("#35a760").unwrap();
        let config = ScatterConfig {
            count: 25,
            colour: Some(colour),
            ..Default::default()
        };
        let set = scatter(&config, &mut StdRng::seed_from_u64(2)).unwrap();
        assert!(
            set.colours()
                .unwrap()
                .iter()
                .all(|c| *c == colour.to_array())
        );
    }

    #[test]
    fn rejects_invalid_column() {
        let mut rng = StdRng::seed_from_u64(0);
        let no_sections = ScatterConfig {
            section_count: 0,
            ..Default::default()
        };
        assert!(scatter(&no_sections, &mut rng).unwrap_err().is_invalid_config());

        let negative = ScatterConfig {
            count: -5,
            ..Default::default()
        };
        assert!(scatter(&negative, &mut rng).is_err());
    }

    #[test]
    fn empty_column_is_valid() {
        let config = ScatterConfig {
            count: 0,
            colour: None,
            ..Default::default()
        };
        let set = scatter(&config, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(set.is_empty());
        assert!(!set.has_colours());
    }
}
