/// Largest texture side the exporter will emit
pub const MAX_TEXTURE_SIZE: usize = 2048;

/// Maximum points that can fit in a texture
pub const MAX_POINTS: usize = MAX_TEXTURE_SIZE * MAX_TEXTURE_SIZE;

/// Points packed between progress bar updates during export
pub const EXPORT_PROGRESS_CHUNK: usize = 50_000;
