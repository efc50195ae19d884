pub mod decoration;
pub mod document;
