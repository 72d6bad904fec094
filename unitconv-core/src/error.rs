//! Conversion errors
//!
//! All three kinds are caller-input errors. They are values that propagate
//! through the `convert` call; nothing here is retried or recovered.

use thiserror::Error;

/// Errors that can occur during a conversion request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Category string is not in the registry
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// Unit is not a member of the resolved category's unit set
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// Input value is NaN or infinite
    #[error("value is not finite: {0}")]
    InvalidValue(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ConvertError::UnknownCategory("Bogus".to_string());
        assert_eq!(e.to_string(), "unknown category: Bogus");

        let e = ConvertError::UnknownUnit("Lightyear".to_string());
        assert_eq!(e.to_string(), "unknown unit: Lightyear");

        let e = ConvertError::InvalidValue(f64::INFINITY);
        assert_eq!(e.to_string(), "value is not finite: inf");
    }
}
