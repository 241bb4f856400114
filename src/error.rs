//! Error types for hex world geometry and generation

use std::fmt;

/// Errors raised at the call boundary when a precondition does not hold
#[derive(Debug, Clone, PartialEq)]
pub enum HexError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Region radius is negative or too large
    InvalidRadius(i32),
    /// Hex size (circumradius in pixels) is not a positive finite number
    InvalidSize(f64),
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            HexError::InvalidRadius(r) => write!(f, "region radius out of range (got {})", r),
            HexError::InvalidSize(s) => write!(f, "hex size must be positive (got {})", s),
        }
    }
}

impl std::error::Error for HexError {}

/// Result type alias for hex world operations
pub type Result<T> = std::result::Result<T, HexError>;
