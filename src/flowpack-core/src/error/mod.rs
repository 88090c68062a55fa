pub mod archive;
pub mod document;
pub mod fs;
pub mod load;
pub mod payload;
pub mod workflow;
pub mod workspace;
