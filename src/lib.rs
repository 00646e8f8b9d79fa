pub mod cli;
pub mod error;
pub mod graph;
pub mod loader;
pub mod reporting;
pub mod types;
