use std::fmt;

/// Error types of the automatic differentiation module
#[derive(Debug, Clone, PartialEq)]
pub enum ADError {
    /// logarithm of a negative value, or of zero approached from the left
    DomainError(String),
    /// quantity raised to a quantity-valued exponent
    UnsupportedOperation(String),
    /// a scalar operand that cannot be read as a real number
    ConversionFailure(String),
    /// malformed settings document or unknown log level
    ConfigError(String),
}

impl fmt::Display for ADError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ADError::DomainError(msg) => write!(f, "Domain error: {}", msg),
            ADError::UnsupportedOperation(msg) => write!(f, "Unsupported operation: {}", msg),
            ADError::ConversionFailure(msg) => write!(f, "Conversion failure: {}", msg),
            ADError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ADError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = ADError::DomainError("log(-1)".to_string());
        assert_eq!(e.to_string(), "Domain error: log(-1)");
        let e = ADError::UnsupportedOperation("x^y".to_string());
        assert_eq!(e.to_string(), "Unsupported operation: x^y");
    }

    #[test]
    fn test_is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(ADError::ConversionFailure("abc".to_string()));
        assert!(e.to_string().contains("abc"));
    }
}
