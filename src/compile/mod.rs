pub mod base_line;
pub mod ingredients;
