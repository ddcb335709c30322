//! linkqr - turn a download URL into a scannable QR-code image
//!
//! The library holds the whole generation path so it can be driven from the
//! `linkqr` binary or from other code.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> linkqr::Result<()> {
//!     let path = linkqr::generate("https://example.com/app.apk", "apk_qr_code.png")?;
//!     assert!(path.exists());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod qr;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{LinkqrConfig, LogRotation, LoggingOptions, QrOptions};
pub use qr::{Color, DEFAULT_OUTPUT, QrEncoder, QrRequest, RenderSettings, generate};
