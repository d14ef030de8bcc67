use clap::Parser;
use std::path::PathBuf;

use favpack::SquareMode;
use favpack::core::params::{DEFAULT_BACKGROUND, DEFAULT_BRAND, DEFAULT_OUTPUT_DIR};

#[derive(Parser, Debug)]
#[command(name = "favpack", version, about = "Generate favicons from a JPG/PNG.")]
pub struct CliArgs {
    /// Path to source image (jpg/png)
    pub input: PathBuf,

    /// Output folder
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out: PathBuf,

    /// Square mode: pad (letterbox with --bg) or crop (center-crop)
    #[arg(long, value_enum, default_value_t = SquareMode::Pad)]
    pub mode: SquareMode,

    /// Padding background color, hex #RRGGBB or #RRGGBBAA
    #[arg(long, default_value = DEFAULT_BACKGROUND)]
    pub bg: String,

    /// App/site name for the web manifest
    #[arg(long, default_value = DEFAULT_BRAND)]
    pub brand: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
