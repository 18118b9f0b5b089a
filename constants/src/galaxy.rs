use std::ops::RangeInclusive;

pub const DEFAULT_COUNT: i64 = 100_000;
pub const DEFAULT_SIZE: f32 = 0.01;
pub const DEFAULT_RADIUS: f32 = 5.0;
pub const DEFAULT_BRANCHES: i64 = 3;
pub const DEFAULT_SPIN: f32 = 1.0;
pub const DEFAULT_RANDOMNESS: f32 = 0.2;
pub const DEFAULT_RANDOMNESS_POWER: f32 = 3.0;

/// Core colour at the galaxy centre (`#rrggbb`)
pub const DEFAULT_INSIDE_COLOUR: &str = "#ff6030";

/// Rim colour at the maximum radius (`#rrggbb`)
pub const DEFAULT_OUTSIDE_COLOUR: &str = "#1b3984";

// Editor ranges. The generator itself only rejects structurally invalid
// values; these bounds are enforced by whoever edits the config.
pub const COUNT_RANGE: RangeInclusive<i64> = 100..=1_000_000;
pub const COUNT_STEP: i64 = 100;
pub const SIZE_RANGE: RangeInclusive<f32> = 0.001..=0.1;
pub const RADIUS_RANGE: RangeInclusive<f32> = 0.01..=20.0;
pub const BRANCHES_RANGE: RangeInclusive<i64> = 1..=20;
pub const SPIN_RANGE: RangeInclusive<f32> = -5.0..=5.0;
pub const SPIN_STEP: f32 = 0.001;
pub const RANDOMNESS_RANGE: RangeInclusive<f32> = 0.0..=2.0;
pub const RANDOMNESS_POWER_RANGE: RangeInclusive<f32> = 1.0..=10.0;

/// Viewer preset, relative to the asset directory
pub const GALAXY_PRESET_PATH: &str = "galaxy.json";
