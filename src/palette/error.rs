//! Error type for hex color parsing.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or a character that is not a hex digit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// A character other than `0-9`, `a-f` or `A-F`
    #[error("invalid hex character: {0:?}")]
    InvalidHex(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ParseColorError::InvalidLength.to_string(),
            "invalid hex color length (expected 3 or 6 characters)"
        );
        assert_eq!(
            ParseColorError::InvalidHex('+').to_string(),
            "invalid hex character: '+'"
        );
    }
}
