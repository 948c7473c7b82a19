use std::fmt;
use std::fmt::{Display, Formatter};

/// Error type for member invocation and construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassError {
    TypeError(String),
    ReferenceError(String),
}

impl Display for ClassError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClassError::TypeError(m) => write!(f, "Type error: {}.", m),
            ClassError::ReferenceError(m) => write!(f, "Reference error: {}.", m),
        }
    }
}

impl std::error::Error for ClassError {}
