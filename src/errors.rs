use thiserror::Error;

/// Errors raised while turning a request into an airfoil outline and a motion program. Every
/// variant is detected before any output is produced, so a failed call never yields a partial
/// outline or program.
#[derive(Error, Debug)]
pub enum AirfoilError {
    /// The profile code is not four ASCII digits
    #[error("Invalid NACA format '{code}': {reason}")]
    InvalidDesignation { code: String, reason: String },

    #[error("Chord length must be a positive finite number, got {0}")]
    InvalidChord(f64),

    /// Closing the outline needs at least the leading and trailing edge stations
    #[error("At least 2 stations are required to build an outline, got {requested}")]
    NotEnoughPoints { requested: usize },

    #[error("At most {max} stations can be generated, got {requested}")]
    TooManyPoints { requested: usize, max: usize },

    #[error("Feed rate must be a positive finite number, got {0}")]
    InvalidFeedRate(f64),

    #[error("Cannot build a motion program from an empty outline")]
    EmptyOutline,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AirfoilError {
    /// Stable identifier used in the `kind` field of error responses
    pub fn kind(&self) -> &'static str {
        match self {
            AirfoilError::InvalidDesignation { .. } => "invalid_designation",
            AirfoilError::InvalidChord(_) => "invalid_chord",
            AirfoilError::NotEnoughPoints { .. } => "not_enough_points",
            AirfoilError::TooManyPoints { .. } => "too_many_points",
            AirfoilError::InvalidFeedRate(_) => "invalid_feed_rate",
            AirfoilError::EmptyOutline => "empty_outline",
            AirfoilError::Serialization(_) => "serialization",
        }
    }
}

pub type Result<T> = std::result::Result<T, AirfoilError>;
