//! Error definitions.
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = WuzzyError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WuzzyError {
    /// Contains [`InputError`].
    Input(InputError),
    /// Contains [`DegenerateError`].
    Degenerate(DegenerateError),
}

impl fmt::Display for WuzzyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Input(e) => e.fmt(f),
            Self::Degenerate(e) => e.fmt(f),
        }
    }
}

impl Error for WuzzyError {}

impl WuzzyError {
    pub(crate) const fn input(msg: &'static str) -> Self {
        Self::Input(InputError { msg })
    }

    pub(crate) const fn degenerate(msg: &'static str) -> Self {
        Self::Degenerate(DegenerateError { msg })
    }
}

/// Error used when the input argument is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    msg: &'static str,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InputError: {}", self.msg)
    }
}

/// Error used when a score is undefined for the given inputs,
/// e.g., the Jaccard index of two empty sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegenerateError {
    msg: &'static str,
}

impl fmt::Display for DegenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DegenerateError: {}", self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = WuzzyError::input("Gram size must not be 0.");
        assert_eq!(e.to_string(), "InputError: Gram size must not be 0.");
        let e = WuzzyError::degenerate("Both sequences are empty.");
        assert_eq!(e.to_string(), "DegenerateError: Both sequences are empty.");
    }
}
