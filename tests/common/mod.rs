//! Shared helpers for integration tests

use image::GrayImage;
use std::path::Path;

/// Decode the first QR code found in the image at `path`.
pub fn decode_file(path: &Path) -> (rqrr::MetaData, String) {
    let gray: GrayImage = image::open(path).expect("open generated image").to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(gray);

    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code in {}", path.display());

    grids[0].decode().expect("decode QR grid")
}
