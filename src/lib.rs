#![doc = r##"
favpack — turn one image into a complete favicon and web-app icon set.

Given a JPEG/PNG (or anything the `image` crate decodes), favpack squares it
by letterboxing or center-cropping, resamples it with a Lanczos3 filter, and
writes:

- `favicon.ico` with 16, 32 and 48 px frames
- PNGs at 16, 32, 150 (Windows tile), 180 (Apple touch), 192, 256, 384 and 512 px
- `site.webmanifest`, `browserconfig.xml` and an `html_snippet.txt` with the `<head>` tags

It powers the favpack CLI and can be embedded in your own Rust applications.

Quick start: generate from a file
---------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use favpack::{generate_favicons, GenerateParams, SquareMode};

fn main() -> favpack::Result<()> {
    let params = GenerateParams {
        output_dir: PathBuf::from("public/icons"),
        mode: SquareMode::Crop,
        background: [0, 0, 0, 0],
        brand: "Acme".to_string(),
    };

    let report = generate_favicons(Path::new("logo.jpg"), &params)?;
    println!("wrote {} files", report.files.len());
    Ok(())
}
```

Generate from an in-memory raster
---------------------------------
```rust,no_run
use image::{Rgba, RgbaImage};
use favpack::{generate_from_image, parse_hex_rgba, GenerateParams};

fn main() -> favpack::Result<()> {
    let logo = RgbaImage::from_pixel(640, 480, Rgba([20, 90, 200, 255]));
    let params = GenerateParams {
        background: parse_hex_rgba("#ffffff").0,
        ..GenerateParams::default()
    };
    generate_from_image(logo, &params)?;
    Ok(())
}
```

Error handling
--------------
All fallible functions return `favpack::Result<T>`; match on `favpack::Error` to
handle specific cases such as decoding failures or unwritable output paths.
Background colors are lenient: [`parse_hex_rgba`] falls back to transparent
black on malformed input, while [`try_parse_hex_rgba`] reports the problem.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — color decoding, squaring, resampling and the fixed output tables.
- [`io`] — source decoding and per-file writers.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::color::{ColorError, parse_hex_rgba, to_hex_string, try_parse_hex_rgba};
pub use crate::core::params::{GenerateParams, ICO_SIZES, PNG_TARGETS, TILE_SIZE};
pub use crate::core::processing::resize::resize_square;
pub use crate::core::processing::square::{square_image, square_offsets};
pub use error::{Error, Result};
pub use types::{IconTarget, SquareMode};

pub use api::{GenerationReport, generate_favicons, generate_from_image};
