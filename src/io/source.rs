use image::RgbaImage;
use std::path::Path;
use tracing::info;

use crate::error::Result;

/// Decode any format the `image` crate recognizes and normalize to RGBA8.
pub fn load_rgba(input: &Path) -> Result<RgbaImage> {
    let decoded = image::ImageReader::open(input)?
        .with_guessed_format()?
        .decode()?;
    info!(
        "Loaded {:?}: {}x{} ({:?})",
        input,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.to_rgba8())
}
