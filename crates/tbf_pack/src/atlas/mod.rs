pub mod geometry;
pub mod packer;
