//! Error types for linkqr operations

use thiserror::Error;

/// Result type alias using linkqr's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for linkqr operations
#[derive(Error, Debug)]
pub enum Error {
    /// The generator was handed an empty URL
    #[error("URL must not be empty")]
    EmptyUrl,

    /// No URL on the command line and nothing entered at the prompt
    #[error("URL is required!")]
    MissingUrl,

    /// Payload does not fit even the largest symbol version
    #[error("Payload of {len} bytes is too long to fit in a QR code")]
    DataTooLong {
        /// Payload length in bytes
        len: usize,
    },

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Color string could not be parsed
    #[error("Invalid color '{0}', expected a name like 'black' or a hex value like '#1a2b3c'")]
    InvalidColor(String),

    /// Render setting out of range
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => Error::Io(io),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e.to_string())
    }
}
