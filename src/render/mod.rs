//! PNG output for generated swatches.

mod png;

pub use png::write_strip;
