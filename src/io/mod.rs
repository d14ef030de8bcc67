//! I/O layer: decoding the source image and the `writers` for every
//! emitted asset (PNG, ICO, manifest, browserconfig, HTML snippet).
pub mod source;
pub use source::load_rgba;

pub mod writers;
