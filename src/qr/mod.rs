//! QR code generation
//!
//! Turns a URL into a rendered QR symbol and writes it to disk. Encoding
//! itself (error correction, masking, module placement) is delegated to the
//! `qrcode` crate; this module picks the version, renders with the requested
//! geometry and colors, and persists the result.

mod color;
mod encoder;

pub use color::Color;
pub use encoder::{MAX_IMAGE_SIDE, QrEncoder, RenderSettings};

use crate::error::{Error, Result};
use image::{ImageFormat, RgbImage};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File written when no output path is given
pub const DEFAULT_OUTPUT: &str = "apk_qr_code.png";

/// A single URL-to-image request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    /// Data to encode, taken verbatim
    pub url: String,
    /// Where the rendered image is written
    pub output_path: PathBuf,
}

impl QrRequest {
    /// Create a request that writes to [`DEFAULT_OUTPUT`]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Replace the output path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Encode, save, and report to `out`. Returns the path written.
    pub fn run<W: Write>(&self, encoder: &QrEncoder, out: &mut W) -> Result<PathBuf> {
        if self.url.is_empty() {
            return Err(Error::EmptyUrl);
        }

        let image = encoder.encode_string(&self.url)?;
        save_image(&image, &self.output_path)?;

        tracing::info!(
            path = %self.output_path.display(),
            width = image.width(),
            "Saved QR image"
        );

        writeln!(out, "✅ QR code generated: {}", self.output_path.display())?;
        writeln!(out, "📱 URL: {}", self.url)?;

        Ok(self.output_path.clone())
    }
}

/// Encode `url` with the default encoder, write it to `output_path`, and print
/// a confirmation to stdout.
pub fn generate(url: &str, output_path: impl AsRef<Path>) -> Result<PathBuf> {
    let request = QrRequest::new(url).with_output(output_path.as_ref());
    request.run(&QrEncoder::new(), &mut io::stdout().lock())
}

/// Save with the format implied by the extension, or PNG when there is none.
fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    match path.extension() {
        Some(_) => image.save(path)?,
        None => image.save_with_format(path, ImageFormat::Png)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_apk_png() {
        let request = QrRequest::new("https://example.com/app.apk");
        assert_eq!(request.output_path, PathBuf::from("apk_qr_code.png"));
    }

    #[test]
    fn test_run_reports_two_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let request = QrRequest::new("https://example.com/app.apk").with_output(&path);

        let mut out = Vec::new();
        let written = request.run(&QrEncoder::new(), &mut out).unwrap();

        assert_eq!(written, path);
        assert!(path.exists());
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("✅ QR code generated: {}", path.display()));
        assert_eq!(lines[1], "📱 URL: https://example.com/app.apk");
    }

    #[test]
    fn test_empty_url_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let mut out = Vec::new();

        let err = QrRequest::new("")
            .with_output(&path)
            .run(&QrEncoder::new(), &mut out)
            .unwrap_err();

        assert!(matches!(err, Error::EmptyUrl));
        assert!(!path.exists());
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_extension_saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr");
        let mut out = Vec::new();

        QrRequest::new("x")
            .with_output(&path)
            .run(&QrEncoder::new(), &mut out)
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_unknown_extension_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.notanimage");
        let mut out = Vec::new();

        let err = QrRequest::new("x")
            .with_output(&path)
            .run(&QrEncoder::new(), &mut out)
            .unwrap_err();

        assert!(matches!(err, Error::Image(_)));
    }
}
