pub mod construction;
mod rectify;

// Common algorithm traits
use crate::models::{Cost, RoutingSolution};

/// What a neighborhood search driver needs from a candidate solution
pub trait SearchState {
    /// Fitness to minimize
    fn objective(&self) -> Cost;

    /// Independent candidate the driver can mutate without touching `self`
    fn copy(&self) -> Self;
}

impl SearchState for RoutingSolution {
    fn objective(&self) -> Cost {
        self.objective_value()
    }

    fn copy(&self) -> Self {
        self.deep_copy()
    }
}
