/// Number of background particles
pub const DEFAULT_COUNT: i64 = 200;

/// Width and depth of the particle column
pub const DEFAULT_SPREAD: f32 = 10.0;

/// Vertical distance between consecutive page sections
pub const DEFAULT_SECTION_DISTANCE: f32 = 4.0;

/// Number of page sections the column spans
pub const DEFAULT_SECTION_COUNT: i64 = 3;

pub const DEFAULT_COLOUR: &str = "#317ea5";
