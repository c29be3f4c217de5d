// Incremental recomputation of the derived per-step state of a routing solution

use crate::error::{Error, Result};
use crate::models::{Cost, RoutingSolution, SolutionStep, DEPOT};
use log::trace;

impl RoutingSolution {
    /// Recomputes remaining items, cargo and accumulated cost for every step
    /// from `start` to the end of the path. Steps before `start` are trusted
    /// as they are, each later step only depends on its predecessor.
    ///
    /// Pickups that refer to an item already collected by an earlier step are
    /// dropped. Picking up at the depot or a path that does not start at the
    /// depot are errors. On `Err` the steps between `start` and the offending
    /// index have already been recomputed, the rest are left as they were.
    pub fn rectify(&mut self, start: usize) -> Result<()> {
        let mut start = start;
        if start == 0 {
            self.reset_depot_step()?;
            start = 1;
        }

        trace!(
            "rectifying steps {}..{} of {:?}",
            start,
            self.path.len(),
            self.path
        );

        for index in start..self.path.len() {
            let (done, pending) = self.steps.split_at_mut(index);
            let previous = &done[index - 1];
            let SolutionStep {
                items_picked,
                remaining_items_per_site,
                cargo,
                accumulated_cost,
            } = &mut pending[0];

            let node = self.path[index];

            // Infinity keeps propagating through the running sum
            *accumulated_cost = match self
                .instance
                .cost_between_adjacent_sites(self.path[index - 1], node)
            {
                Some(cost) => previous.accumulated_cost + cost,
                None => Cost::INFINITY,
            };

            remaining_items_per_site.clone_from(&previous.remaining_items_per_site);

            if node == DEPOT {
                if !items_picked.is_empty() {
                    return Err(Error::PickupAtDepot { index });
                }
                cargo.clear();
                continue;
            }

            cargo.clone_from(&previous.cargo);
            let remaining = &mut remaining_items_per_site[node];
            items_picked.retain(|&item| match remaining.get_mut(item) {
                Some(size) if *size != 0 => {
                    cargo.push(*size);
                    *size = 0;
                    true
                }
                _ => false,
            });
        }

        Ok(())
    }

    fn reset_depot_step(&mut self) -> Result<()> {
        match self.path.first() {
            None => return Err(Error::EmptyPath),
            Some(&node) if node != DEPOT => return Err(Error::NotStartingAtDepot),
            Some(_) => {}
        }

        let depot_step = &mut self.steps[0];
        if !depot_step.items_picked.is_empty() {
            return Err(Error::PickupAtDepot { index: 0 });
        }
        depot_step.remaining_items_per_site.clear();
        depot_step
            .remaining_items_per_site
            .extend_from_slice(self.instance.items_at_all_sites());
        depot_step.cargo.clear();
        depot_step.accumulated_cost = 0.0;

        Ok(())
    }
}
