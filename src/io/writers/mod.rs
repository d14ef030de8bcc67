//! Output writers: PNG and ICO rasters plus the web manifest, browserconfig
//! and HTML boilerplate files.
pub mod browserconfig;
pub mod html;
pub mod ico;
pub mod manifest;
pub mod png;
