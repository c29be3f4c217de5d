// Synthetic problem instances for benchmarks and randomized tests

use crate::error::Result;
use crate::models::{Cost, ItemSize, ProblemInstance, SiteGraph};
use rand::Rng;

/// Shape of a generated instance
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub number_of_sites: usize,

    /// Each site gets between zero and this many items
    pub max_items_per_site: usize,

    /// Item sizes are drawn from `1..=cargo_capacity`
    pub cargo_capacity: ItemSize,

    /// Chance of an extra directed edge between any two distinct nodes
    pub chord_probability: f64,

    /// Edge costs are drawn from `1.0..=max_edge_cost`
    pub max_edge_cost: Cost,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            number_of_sites: 10,
            max_items_per_site: 3,
            cargo_capacity: 10,
            chord_probability: 0.3,
            max_edge_cost: 10.0,
        }
    }
}

/// Builds a strongly connected instance: a directed ring through every node
/// plus random chords
pub fn generate_instance<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &GeneratorSettings,
) -> Result<ProblemInstance> {
    let mut graph = SiteGraph::new(settings.number_of_sites);
    let node_count = graph.node_count();
    let max_edge_cost = settings.max_edge_cost.max(1.0);
    let max_item_size = settings.cargo_capacity.max(1);
    let chord_probability = settings.chord_probability.clamp(0.0, 1.0);

    for from in 0..node_count {
        for to in 0..node_count {
            let on_ring = to == (from + 1) % node_count;
            if from != to && (on_ring || rng.gen_bool(chord_probability)) {
                graph.add_edge(from, to, rng.gen_range(1.0..=max_edge_cost))?;
            }
        }
    }

    for site in 1..node_count {
        for _ in 0..rng.gen_range(0..=settings.max_items_per_site) {
            graph.add_item_to_site(site, rng.gen_range(1..=max_item_size))?;
        }
    }

    Ok(ProblemInstance::new(graph, settings.cargo_capacity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_instance_is_strongly_connected() {
        let mut rng = StdRng::seed_from_u64(7);
        let settings = GeneratorSettings {
            number_of_sites: 8,
            chord_probability: 0.1,
            ..GeneratorSettings::default()
        };
        let instance = generate_instance(&mut rng, &settings).unwrap();

        assert_eq!(instance.node_count(), 9);
        assert!(instance.items_at_all_sites()[0].is_empty());
        for from in 0..instance.node_count() {
            for to in 0..instance.node_count() {
                assert!(instance.shortest_route(from, to).is_some());
            }
        }
        assert!(instance
            .items_at_all_sites()
            .iter()
            .flatten()
            .all(|&size| size >= 1 && size <= settings.cargo_capacity));
    }
}
