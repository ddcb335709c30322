//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::Color;
use image::{RgbImage, imageops};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

/// Largest rendered side length in pixels (about 200 MB of RGB data)
pub const MAX_IMAGE_SIDE: u32 = 8192;

/// Pixel geometry and colors for a rendered symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Pixels per module edge
    pub box_size: u32,
    /// Quiet-zone width in modules
    pub border: u32,
    /// Color of dark modules
    pub fill_color: Color,
    /// Color of light modules and the quiet zone
    pub back_color: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            box_size: 10,
            border: 4,
            fill_color: Color::BLACK,
            back_color: Color::WHITE,
        }
    }
}

impl RenderSettings {
    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        if self.box_size == 0 {
            return Err(Error::InvalidSetting(
                "box size must be at least 1 pixel".to_string(),
            ));
        }
        Ok(())
    }

    /// Side length in pixels of a symbol that is `modules` wide.
    ///
    /// Fails when the image would exceed [`MAX_IMAGE_SIDE`].
    pub fn image_side(&self, modules: u32) -> Result<u32> {
        self.validate()?;

        let side = self
            .border
            .checked_mul(2)
            .and_then(|quiet| quiet.checked_add(modules))
            .and_then(|cells| cells.checked_mul(self.box_size))
            .filter(|side| *side <= MAX_IMAGE_SIDE);

        side.ok_or_else(|| {
            Error::InvalidSetting(format!(
                "box size {} with border {} on a {modules}-module symbol exceeds {MAX_IMAGE_SIDE}px",
                self.box_size, self.border
            ))
        })
    }
}

/// QR code encoder
#[derive(Debug, Clone)]
pub struct QrEncoder {
    /// Error correction level
    ecc_level: EcLevel,
    render: RenderSettings,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Low ECC, version 1, 10px boxes, 4-module border)
    pub fn new() -> Self {
        Self::with_render_settings(RenderSettings::default())
    }

    /// Create a new QR encoder that renders with the given geometry and colors
    pub fn with_render_settings(render: RenderSettings) -> Self {
        Self {
            ecc_level: EcLevel::L,
            render,
        }
    }

    /// Render settings in use
    pub fn render_settings(&self) -> &RenderSettings {
        &self.render
    }

    /// Build the symbol at the smallest version (1 to 40) that holds the data.
    pub fn symbol(&self, data: &[u8]) -> Result<QrCode> {
        let code =
            QrCode::with_error_correction_level(data, self.ecc_level).map_err(|e| match e {
                QrError::DataTooLong => Error::DataTooLong { len: data.len() },
                other => other.into(),
            })?;

        tracing::debug!(
            version = ?code.version(),
            ecc_level = ?self.ecc_level,
            length = data.len(),
            "Selected QR version"
        );
        Ok(code)
    }

    /// Encode data into a QR code image
    pub fn encode(&self, data: &[u8]) -> Result<RgbImage> {
        self.render.validate()?;

        let code = self.symbol(data)?;
        let modules = u32::try_from(code.width())
            .map_err(|_| Error::QrEncode(format!("symbol width {} out of range", code.width())))?;
        let side = self.render.image_side(modules)?;
        let box_size = self.render.box_size;

        // The renderer only knows the standard 4-module quiet zone, so draw the
        // bare symbol and pad it ourselves.
        let symbol = code
            .render::<image::Rgb<u8>>()
            .quiet_zone(false)
            .module_dimensions(box_size, box_size)
            .dark_color(self.render.fill_color.into())
            .light_color(self.render.back_color.into())
            .build();

        let mut canvas = RgbImage::from_pixel(side, side, self.render.back_color.into());
        let offset = i64::from(self.render.border) * i64::from(box_size);
        imageops::replace(&mut canvas, &symbol, offset, offset);

        tracing::debug!(modules, side, "Rendered QR image");
        Ok(canvas)
    }

    /// Encode a string into a QR code image
    pub fn encode_string(&self, data: &str) -> Result<RgbImage> {
        self.encode(data.as_bytes())
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
