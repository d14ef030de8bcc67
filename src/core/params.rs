use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{IconTarget, SquareMode};

pub const DEFAULT_OUTPUT_DIR: &str = "dist_favicon";
pub const DEFAULT_BRAND: &str = "Curelith";
pub const DEFAULT_BACKGROUND: &str = "#00000000";

/// Theme, background and tile color written into every boilerplate file
pub const THEME_COLOR: &str = "#000000";

/// Side length of the Windows start-menu tile
pub const TILE_SIZE: u32 = 150;

/// Frames packed into `favicon.ico`
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];
pub const ICO_FILE_NAME: &str = "favicon.ico";

/// PNGs emitted next to the ICO, in write order
pub const PNG_TARGETS: [IconTarget; 8] = [
    IconTarget::new(16, "favicon-16x16"),
    IconTarget::new(32, "favicon-32x32"),
    IconTarget::new(180, "apple-touch-icon"),
    IconTarget::new(192, "android-chrome-192x192"),
    IconTarget::new(512, "android-chrome-512x512"),
    IconTarget::new(TILE_SIZE, "mstile-150x150"),
    IconTarget::new(256, "icon-256x256"),
    IconTarget::new(384, "icon-384x384"),
];

/// Generation parameters suitable for library callers and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateParams {
    pub output_dir: PathBuf,
    pub mode: SquareMode,
    /// RGBA fill used by `SquareMode::Pad`
    pub background: [u8; 4],
    /// Written as manifest `name` and `short_name`
    pub brand: String,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            mode: SquareMode::Pad,
            background: [0, 0, 0, 0],
            brand: DEFAULT_BRAND.to_string(),
        }
    }
}
