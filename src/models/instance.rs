// Problem instance model: the immutable graph, cargo capacity and precomputed routes

use crate::error::Result;
use crate::models::{Cost, ItemSize, NodeId, SiteGraph};
use crate::utils::shortest_path::{RouteTable, ShortestRoute};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serialized form of a site, its position in the list gives its node id (list index + 1)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteDefinition {
    #[serde(default)]
    pub items: Vec<ItemSize>,
}

/// Serialized form of a directed edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: Cost,
}

/// Serialized form of a whole problem instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceDefinition {
    pub cargo_capacity: ItemSize,
    pub sites: Vec<SiteDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

/// A fully built problem. Never mutated once constructed, so it can be shared
/// behind an `Arc` by any number of solutions.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    graph: SiteGraph,
    cargo_capacity: ItemSize,
    routes: RouteTable,
}

impl ProblemInstance {
    /// Takes ownership of a populated graph and precomputes all shortest routes
    pub fn new(graph: SiteGraph, cargo_capacity: ItemSize) -> Self {
        let routes = graph.all_pairs_routes();
        debug!(
            "built instance with {} sites, {} items, cargo capacity {}",
            graph.number_of_sites(),
            graph.items_at_nodes().iter().map(Vec::len).sum::<usize>(),
            cargo_capacity
        );

        Self {
            graph,
            cargo_capacity,
            routes,
        }
    }

    pub fn from_definition(definition: &InstanceDefinition) -> Result<Self> {
        let mut graph = SiteGraph::new(definition.sites.len());

        for (index, site) in definition.sites.iter().enumerate() {
            for &size in &site.items {
                graph.add_item_to_site(index + 1, size)?;
            }
        }
        for edge in &definition.edges {
            graph.add_edge(edge.from, edge.to, edge.cost)?;
        }

        Ok(Self::new(graph, definition.cargo_capacity))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let definition: InstanceDefinition = serde_json::from_str(json)?;
        Self::from_definition(&definition)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        debug!("loading instance from {}", path.as_ref().display());
        Self::from_json_str(&json)
    }

    /// Item sizes at every node, indexed by node id
    pub fn items_at_all_sites(&self) -> &[Vec<ItemSize>] {
        self.graph.items_at_nodes()
    }

    /// Cost of the direct edge between two consecutive path nodes, `None` if not connected
    pub fn cost_between_adjacent_sites(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        self.graph.edge_cost(from, to)
    }

    pub fn cargo_capacity(&self) -> ItemSize {
        self.cargo_capacity
    }

    pub fn graph(&self) -> &SiteGraph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Precomputed cheapest route, used to splice connecting subpaths into a solution
    pub fn shortest_route(&self, from: NodeId, to: NodeId) -> Option<&ShortestRoute> {
        self.routes.route(from, to)
    }

    pub fn total_items(&self) -> usize {
        self.items_at_all_sites().iter().map(Vec::len).sum()
    }
}
