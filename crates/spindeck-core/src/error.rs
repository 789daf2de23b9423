use thiserror::Error;

/// Construction-time configuration failures. Runtime gesture input is a
/// collaborator contract and is not validated here.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ring needs at least one card")]
    EmptyRing,
    #[error("ring radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}
