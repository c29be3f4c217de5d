// Site graph model: depot plus sites, directed edge costs and the items lying at each site

use crate::error::{Error, Result};
use crate::models::{Cost, ItemSize, NodeId};
use crate::utils::shortest_path::{self, RouteTable, ShortestRoute};

/// Directed weighted graph over the depot (node 0) and the sites (nodes 1..=N)
#[derive(Debug, Clone)]
pub struct SiteGraph {
    /// Depot plus sites
    node_count: usize,

    /// Row-major `node_count x node_count` matrix, `None` where there is no edge
    edges: Vec<Option<Cost>>,

    /// Sizes of the items lying at each node, always empty for the depot
    items_at_nodes: Vec<Vec<ItemSize>>,
}

impl SiteGraph {
    /// Creates a graph with the depot and `number_of_sites` sites, no edges and no items
    pub fn new(number_of_sites: usize) -> Self {
        let node_count = number_of_sites + 1;
        Self {
            node_count,
            edges: vec![None; node_count * node_count],
            items_at_nodes: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn number_of_sites(&self) -> usize {
        self.node_count - 1
    }

    /// Appends an item of the given size to the node's item list
    pub fn add_item_to_site(&mut self, node: NodeId, size: ItemSize) -> Result<()> {
        self.check_node(node)?;
        if size == 0 {
            return Err(Error::InvalidItemSize { node });
        }
        self.items_at_nodes[node].push(size);
        Ok(())
    }

    /// Sets the cost of the directed edge `from -> to`, replacing any previous value
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: Cost) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(Error::InvalidEdgeCost { from, to, cost });
        }
        self.edges[from * self.node_count + to] = Some(cost);
        Ok(())
    }

    /// Removes the directed edge `from -> to` if it was set
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.edges[from * self.node_count + to] = None;
        Ok(())
    }

    pub fn edge_exists(&self, from: NodeId, to: NodeId) -> bool {
        self.edge_cost(from, to).is_some()
    }

    /// Gets the cost of the directed edge, `None` when the nodes are not connected
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        if from >= self.node_count || to >= self.node_count {
            return None;
        }
        self.edges[from * self.node_count + to]
    }

    /// Outgoing edges of a node as `(neighbor, cost)` pairs
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Cost)> + '_ {
        let row: &[Option<Cost>] = if node < self.node_count {
            &self.edges[node * self.node_count..(node + 1) * self.node_count]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter_map(|(neighbor, cost)| cost.map(|cost| (neighbor, cost)))
    }

    pub fn items_at_nodes(&self) -> &[Vec<ItemSize>] {
        &self.items_at_nodes
    }

    pub fn items_at(&self, node: NodeId) -> Option<&[ItemSize]> {
        self.items_at_nodes.get(node).map(Vec::as_slice)
    }

    /// Node sequence of the cheapest route from `start` to `destination`, both included
    pub fn shortest_path(&self, start: NodeId, destination: NodeId) -> Option<Vec<NodeId>> {
        self.shortest_route(start, destination).map(|route| route.nodes)
    }

    /// Cheapest route with its summed edge cost
    pub fn shortest_route(&self, start: NodeId, destination: NodeId) -> Option<ShortestRoute> {
        shortest_path::shortest_route(self, start, destination)
    }

    /// Precomputes the cheapest route between every ordered pair of nodes
    pub fn all_pairs_routes(&self) -> RouteTable {
        RouteTable::build(self)
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.node_count {
            Ok(())
        } else {
            Err(Error::UnknownNode {
                node,
                node_count: self.node_count,
            })
        }
    }
}
