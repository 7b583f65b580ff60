use std::{fmt, io};

/// An error that stops a whole batch from being processed. Problems with individual equations
/// never cause one; they are reported in the result of that equation instead.
#[derive(Debug)]
pub enum BatchError {
    /// The input is not valid JSON, or its records could not be read.
    Json(serde_json::Error),

    /// The input failed validation. Contains the validation errors.
    Invalid(Vec<String>),

    /// The input could not be read, or the output could not be written.
    Io(io::Error),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(_) => write!(f, "Error: Invalid JSON format"),
            Self::Invalid(errors) => {
                write!(f, "Data validation failed. Please correct the following errors:")?;
                for error in errors {
                    write!(f, "\n- {}", error)?;
                }
                Ok(())
            },
            Self::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Invalid(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for BatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<io::Error> for BatchError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
