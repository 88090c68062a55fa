pub mod archive;
pub mod document;
pub mod error;
pub mod fs;
pub mod loader;
pub mod model;
pub mod payload;
pub mod resolve;
pub mod workspace;
