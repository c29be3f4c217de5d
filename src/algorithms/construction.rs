// Starting solutions handed to the neighborhood search

use crate::error::Result;
use crate::models::{ItemIndex, ProblemInstance, RoutingSolution, DEPOT};
use log::{debug, warn};
use std::sync::Arc;

/// Fetches every item on its own round trip from the depot along the cheapest
/// routes. Feasible whenever each single item fits in the cargo and every site
/// holding items can be reached from and return to the depot. Unreachable
/// sites are skipped, which `check_validity` then reports.
pub fn shuttle_solution(instance: &Arc<ProblemInstance>) -> Result<RoutingSolution> {
    let mut solution = RoutingSolution::new(Arc::clone(instance));

    for (site, items) in instance.items_at_all_sites().iter().enumerate() {
        if site == DEPOT || items.is_empty() {
            continue;
        }

        let (Some(outbound), Some(inbound)) = (
            instance.shortest_route(DEPOT, site),
            instance.shortest_route(site, DEPOT),
        ) else {
            warn!("site {} has no round trip from the depot, skipping it", site);
            continue;
        };

        // Both routes carry their start node, which is already the last path node
        let pickup_offset = outbound.nodes.len() - 2;
        let trip: Vec<_> = outbound.nodes[1..]
            .iter()
            .chain(&inbound.nodes[1..])
            .copied()
            .collect();

        for item in 0..items.len() {
            let mut pickups: Vec<Vec<ItemIndex>> = vec![Vec::new(); trip.len()];
            pickups[pickup_offset].push(item);
            solution.append_subpath(trip.clone(), pickups)?;
        }
    }

    debug!(
        "shuttle solution visits {} nodes at cost {}",
        solution.len(),
        solution.objective_value()
    );
    Ok(solution)
}
