pub mod resize;
pub mod square;
