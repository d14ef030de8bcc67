//! Shared types used across favpack.
//! Includes `SquareMode` and the `IconTarget` table entries describing each
//! emitted PNG.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a non-square source is turned into a square raster.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SquareMode {
    /// Letterbox onto a background-filled canvas of the longer side
    #[default]
    Pad,
    /// Center-crop to the shorter side
    Crop,
}

impl std::fmt::Display for SquareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SquareMode::Pad => write!(f, "pad"),
            SquareMode::Crop => write!(f, "crop"),
        }
    }
}

/// One emitted PNG: side length in pixels and file stem (no extension).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct IconTarget {
    pub size: u32,
    pub name: &'static str,
}

impl IconTarget {
    pub const fn new(size: u32, name: &'static str) -> Self {
        Self { size, name }
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}
