use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    Missing { field: &'static str },
    InvalidHost { input: String, reason: String },
    InvalidTimeout,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::Missing { field } => write!(f, "{field} is not set"),
            Self::InvalidHost { input, reason } => {
                write!(f, "invalid host {input:?}: {reason}")
            }
            Self::InvalidTimeout => write!(f, "timeout must be greater than zero"),
        }
    }
}

impl std::error::Error for ValidationError {}
