use thiserror::Error;

/// Rejected configuration values. Runtime operations themselves never fail;
/// everything that can go wrong is caught once, when the config is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} range is inverted or non-finite: [{min}, {max})")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f32 },
    #[error("{name} must be a non-zero duration")]
    ZeroDuration { name: &'static str },
    #[error("breakpoints must be positive and ascending: narrow={narrow}, medium={medium}")]
    InvalidBreakpoints { narrow: f32, medium: f32 },
}
