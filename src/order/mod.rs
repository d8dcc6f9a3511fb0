pub mod model;
pub mod options;
pub mod store;
pub mod summary;
