/// Error taxonomy for galaxy generation and export.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalaxyError {
    /// A config field holds a value the generator cannot honour.
    /// Raised before any allocation; nothing is generated.
    #[error("invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("{count} points exceed the export capacity of {max}")]
    TooManyPoints { count: usize, max: usize },

    #[error("invalid colour '{0}', expected #rrggbb")]
    InvalidColour(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Dds(#[from] ddsfile::Error),
}

impl GalaxyError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// True for errors the caller should surface as a rejected edit.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

pub type Result<T> = std::result::Result<T, GalaxyError>;
