//! Core building blocks: background color decoding, squaring, resampling,
//! and the fixed output tables. These are internal primitives consumed by
//! the high-level `api` module.
pub mod color;
pub mod params;
pub mod processing;
