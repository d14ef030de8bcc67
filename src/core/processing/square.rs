use image::{Rgba, RgbaImage, imageops};
use tracing::{debug, info};

use crate::types::SquareMode;

const CHANNELS: usize = 4;

/// Side length and top-left placement offset for squaring a `width`x`height` raster.
///
/// For `Crop` the offset is where the square window starts in the source; for
/// `Pad` it is where the source lands on the canvas. Odd remainders go to the
/// bottom/right edge.
pub fn square_offsets(width: u32, height: u32, mode: SquareMode) -> (u32, u32, u32) {
    let side = match mode {
        SquareMode::Crop => width.min(height),
        SquareMode::Pad => width.max(height),
    };
    let x = width.abs_diff(side) / 2;
    let y = height.abs_diff(side) / 2;
    (side, x, y)
}

/// Make `image` square by center-cropping or letterboxing onto `background`.
/// Square input is returned as-is.
pub fn square_image(image: RgbaImage, mode: SquareMode, background: Rgba<u8>) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width == height {
        debug!("Source already square: {}x{}", width, height);
        return image;
    }

    let (side, x, y) = square_offsets(width, height, mode);
    info!(
        "Squaring {}x{} with mode={} -> {}x{} (offset {}, {})",
        width, height, mode, side, side, x, y
    );

    match mode {
        SquareMode::Crop => imageops::crop_imm(&image, x, y, side, side).to_image(),
        SquareMode::Pad => pad_to_square(&image, side, x, y, background),
    }
}

fn pad_to_square(
    image: &RgbaImage,
    side: u32,
    x: u32,
    y: u32,
    background: Rgba<u8>,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(side, side, background);

    let (cols, rows) = (image.width() as usize, image.height() as usize);
    let (side, pad_cols, pad_rows) = (side as usize, x as usize, y as usize);
    let src: &[u8] = image;
    let dst: &mut [u8] = &mut canvas;
    // Copy per row; source pixels replace the fill, no blending
    let row_bytes = cols * CHANNELS;
    for row in 0..rows {
        let src_offset = row * row_bytes;
        let dst_offset = ((row + pad_rows) * side + pad_cols) * CHANNELS;
        dst[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&src[src_offset..src_offset + row_bytes]);
    }
    canvas
}
