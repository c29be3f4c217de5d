// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::SearchState;
pub use error::{Error, Result};
pub use models::{ProblemInstance, RoutingSolution, SiteGraph, DEPOT};
