//! High-level library API: turn a source image (on disk or in memory) into the
//! full favicon set. Prefer these entrypoints over the low-level processing
//! and writer modules when integrating favpack.
use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use serde::Serialize;
use tracing::info;

use crate::core::color::to_hex_string;
use crate::core::params::{GenerateParams, ICO_FILE_NAME, ICO_SIZES, PNG_TARGETS};
use crate::core::processing::resize::resize_square;
use crate::core::processing::square::square_image;
use crate::error::{Error, Result};
use crate::io::load_rgba;
use crate::io::writers::browserconfig::{BROWSERCONFIG_FILE_NAME, write_browserconfig};
use crate::io::writers::html::{HTML_SNIPPET, HTML_SNIPPET_FILE_NAME, write_html_snippet};
use crate::io::writers::ico::write_ico;
use crate::io::writers::manifest::{MANIFEST_FILE_NAME, write_manifest};
use crate::io::writers::png::write_rgba_png;

/// What a successful run wrote
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    /// Written paths, in write order
    pub files: Vec<PathBuf>,
    /// Side length of the squared master raster
    pub square_side: u32,
    pub html_snippet: String,
}

/// Load `input`, square it, and write the full asset set into `params.output_dir`.
///
/// The output directory (and parents) is created if missing; existing files
/// with the same names are overwritten.
pub fn generate_favicons(input: &Path, params: &GenerateParams) -> Result<GenerationReport> {
    let image = load_rgba(input)?;
    generate_from_image(image, params)
}

/// Same as [`generate_favicons`] for a raster that is already decoded.
pub fn generate_from_image(image: RgbaImage, params: &GenerateParams) -> Result<GenerationReport> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }

    let out = params.output_dir.as_path();
    fs::create_dir_all(out)?;
    info!("Output directory: {:?}", out);

    let background = Rgba(params.background);
    info!(
        "Square mode: {}, background: {}",
        params.mode,
        to_hex_string(background)
    );
    let square = square_image(image, params.mode, background);

    let mut files = Vec::with_capacity(PNG_TARGETS.len() + 4);

    let ico_path = out.join(ICO_FILE_NAME);
    write_ico(&ico_path, &square, &ICO_SIZES)?;
    info!("Wrote {:?} ({:?})", ico_path, ICO_SIZES);
    files.push(ico_path);

    for target in PNG_TARGETS {
        let path = out.join(target.file_name());
        let resized = resize_square(&square, target.size)?;
        write_rgba_png(&path, &resized)?;
        info!("Wrote {:?} ({}x{})", path, target.size, target.size);
        files.push(path);
    }

    let manifest_path = out.join(MANIFEST_FILE_NAME);
    write_manifest(&manifest_path, &params.brand)?;
    files.push(manifest_path);

    let browserconfig_path = out.join(BROWSERCONFIG_FILE_NAME);
    write_browserconfig(&browserconfig_path)?;
    info!("Wrote {:?}", browserconfig_path);
    files.push(browserconfig_path);

    let html_path = out.join(HTML_SNIPPET_FILE_NAME);
    write_html_snippet(&html_path)?;
    info!("Wrote {:?}", html_path);
    files.push(html_path);

    Ok(GenerationReport {
        output_dir: out.to_path_buf(),
        files,
        square_side: square.width(),
        html_snippet: HTML_SNIPPET.to_string(),
    })
}
