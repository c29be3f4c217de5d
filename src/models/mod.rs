// Models module - exports all model types

mod instance;
mod site_graph;
mod solution;
mod step;

// Re-export model types
pub use self::instance::{EdgeDefinition, InstanceDefinition, ProblemInstance, SiteDefinition};
pub use self::site_graph::SiteGraph;
pub use self::solution::{RoutingSolution, Violation};
pub use self::step::SolutionStep;

// Common type aliases for improved code readability
pub type NodeId = usize;
pub type ItemIndex = usize;
pub type ItemSize = u32;
pub type Cost = f64;

/// Start and end node of every path
pub const DEPOT: NodeId = 0;
