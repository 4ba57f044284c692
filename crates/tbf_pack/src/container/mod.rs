pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod header;
pub mod path;
