use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Resample an RGBA raster to `size`x`size` with a Lanczos3 convolution.
///
/// The source is expected to be square already; a non-square source is
/// stretched. Alpha is premultiplied during filtering so transparent
/// padding does not bleed dark fringes into the edges.
pub fn resize_square(image: &RgbaImage, size: u32) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    if (width, height) == (size, size) {
        return Ok(image.clone());
    }

    debug!("Resizing {}x{} -> {}x{}", width, height, size, size);

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, image.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(size, size, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(size, size, dst_image.into_vec()).ok_or(Error::EmptyImage {
        width: size,
        height: size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn downscale_has_requested_dimensions() {
        let img = RgbaImage::from_pixel(300, 300, Rgba([10, 200, 30, 255]));
        for size in [16, 32, 48, 150] {
            let out = resize_square(&img, size).unwrap();
            assert_eq!(out.dimensions(), (size, size));
        }
    }

    #[test]
    fn upscale_has_requested_dimensions() {
        let img = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));
        let out = resize_square(&img, 512).unwrap();
        assert_eq!(out.dimensions(), (512, 512));
    }

    #[test]
    fn solid_color_survives_resampling() {
        let color = Rgba([120, 60, 240, 255]);
        let img = RgbaImage::from_pixel(64, 64, color);
        let out = resize_square(&img, 16).unwrap();
        // fixed-point rounding may move a channel by one step
        for p in out.pixels() {
            for (got, want) in p.0.iter().zip(color.0) {
                assert!(got.abs_diff(want) <= 1, "{:?} vs {:?}", p, color);
            }
        }
    }

    #[test]
    fn same_size_is_a_copy() {
        let img = RgbaImage::from_pixel(32, 32, Rgba([1, 2, 3, 4]));
        assert_eq!(resize_square(&img, 32).unwrap(), img);
    }

    #[test]
    fn zero_target_is_rejected() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        let err = resize_square(&img, 0).unwrap_err();
        assert!(matches!(err, Error::ZeroSize { size: 0 }));
        assert_eq!(err.to_string(), "Size must be greater than 0, got: 0");
    }

    #[test]
    fn empty_source_reports_its_dimensions() {
        let img = RgbaImage::new(0, 12);
        assert!(matches!(
            resize_square(&img, 16),
            Err(Error::EmptyImage { width: 0, height: 12 })
        ));
    }
}
