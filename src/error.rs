use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Model artifact missing, corrupt, or shaped for a different class set.
    /// Fatal at startup.
    #[error("Model unavailable at {path}: {reason}")]
    ModelUnavailable { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not decode image: {0}")]
    DecodeError(String),

    #[error("Unsupported file type: {0} (expected jpg, jpeg or png)")]
    UnsupportedFormat(String),

    #[error("Unknown class label: {0}")]
    UnknownLabel(String),

    #[error("Invalid correction: {0}")]
    InvalidCorrection(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Display error: {0}")]
    Display(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}
