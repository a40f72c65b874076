use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid grid resolution: {axis} needs at least 2 points, got {count}")]
    InvalidResolution { axis: &'static str, count: usize },

    #[error("Invalid container dimension: {name} must be positive and finite, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error(
        "Height field shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}"
    )]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<toml::de::Error> for ScanError {
    fn from(err: toml::de::Error) -> Self {
        ScanError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::Serialize(format!("JSON error: {}", err))
    }
}
