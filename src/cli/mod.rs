//! Command Line Interface (CLI) layer for favpack.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`). It wires user-provided options to the library
//! functionality exposed via `favpack::api`.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
