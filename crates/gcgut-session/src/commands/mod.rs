pub mod file;
pub mod sequence;
