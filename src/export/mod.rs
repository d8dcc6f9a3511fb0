pub mod capability;
pub mod png;
