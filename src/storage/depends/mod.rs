pub mod filesystem;
pub mod paths;
