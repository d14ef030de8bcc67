use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

use crate::core::processing::resize::resize_square;
use crate::error::Result;

/// Write a multi-resolution ICO holding one PNG-compressed frame per entry in `sizes`.
pub fn write_ico(output: &Path, image: &RgbaImage, sizes: &[u32]) -> Result<()> {
    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let resized = resize_square(image, size)?;
        frames.push(IcoFrame::as_png(
            resized.as_raw(),
            size,
            size,
            ExtendedColorType::Rgba8,
        )?);
        debug!("ICO frame: {}x{}", size, size);
    }

    let file = File::create(output)?;
    IcoEncoder::new(BufWriter::new(file)).encode_images(&frames)?;
    Ok(())
}
