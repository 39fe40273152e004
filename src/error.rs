pub type Result<T> = std::result::Result<T, TypedropError>;

/// Struct to represent IO errors.
#[derive(Debug)]
pub struct IoErrorStruct {
    /// The type of IO error.
    error_type: String,

    /// The error message.
    msg: String,
}

/// Struct to represent validation errors.
#[derive(Debug)]
pub struct ValidationErrorStruct {
    /// The error message.
    msg: String,
}

/// Enum to represent different types of typedrop errors.
#[derive(Debug)]
pub enum TypedropError {
    IoError(IoErrorStruct),
    ValidationError(ValidationErrorStruct),
}

impl TypedropError {
    /// Create a new validation error.
    ///
    /// # Arguments
    /// * `msg` - The error message.
    ///
    /// # Returns
    /// A `TypedropError` instance representing a validation error.
    pub fn validation_error(msg: &str) -> Self {
        TypedropError::ValidationError(ValidationErrorStruct {
            msg: msg.to_string(),
        })
    }

    /// Create a new IO error carrying the path that was being accessed.
    ///
    /// # Arguments
    /// * `path` - The path whose read or write failed.
    /// * `error` - The underlying IO error.
    ///
    /// # Returns
    /// A `TypedropError` instance representing an IO error with path context.
    pub fn io_error(path: &std::path::Path, error: std::io::Error) -> Self {
        TypedropError::IoError(IoErrorStruct {
            error_type: error.kind().to_string(),
            msg: format!("{}: {}", path.display(), error),
        })
    }
}

impl std::fmt::Display for TypedropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypedropError::IoError(io_err) => {
                write!(f, "IO {} Error: {}", io_err.error_type, io_err.msg)
            }
            TypedropError::ValidationError(validation_err) => {
                write!(f, "Validation Error: {}", validation_err.msg)
            }
        }
    }
}

impl From<std::io::Error> for TypedropError {
    fn from(error: std::io::Error) -> Self {
        TypedropError::IoError(IoErrorStruct {
            error_type: error.kind().to_string(),
            msg: error.to_string(),
        })
    }
}
