use crate::models::{Cost, NodeId, SiteGraph};
use log::{debug, trace};
use priority_queue::PriorityQueue;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};

/// Queue priority for Dijkstra. Edge costs are validated as finite and
/// non-negative, so the fallback ordering is never observed.
#[derive(PartialEq, Copy, Clone, Debug)]
struct CostKey(Cost);

impl Eq for CostKey {}

impl PartialOrd for CostKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

/// A cheapest node sequence between two nodes, both ends included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestRoute {
    pub nodes: Vec<NodeId>,
    pub cost: Cost,
}

/// Distances and predecessor links produced by one single-source search
struct SearchTree {
    distances: Vec<Cost>,
    previous: Vec<Option<NodeId>>,
}

impl SearchTree {
    fn route_to(&self, start: NodeId, destination: NodeId) -> Option<ShortestRoute> {
        let cost = self.distances[destination];
        if cost.is_infinite() {
            return None;
        }

        let mut nodes = vec![destination];
        let mut current = destination;
        while current != start {
            current = self.previous[current]?;
            nodes.push(current);
        }
        nodes.reverse();

        Some(ShortestRoute { nodes, cost })
    }
}

/// Dijkstra from `start`. With a `target` the search stops as soon as the
/// target is settled, otherwise every reachable node is settled.
fn search(graph: &SiteGraph, start: NodeId, target: Option<NodeId>) -> SearchTree {
    let node_count = graph.node_count();
    let mut distances = vec![Cost::INFINITY; node_count];
    let mut previous = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut queue = PriorityQueue::new();

    distances[start] = 0.0;
    queue.push(start, Reverse(CostKey(0.0)));

    // Only nodes with a finite tentative distance are ever queued, so an empty
    // queue means everything left is unreachable
    while let Some((node, Reverse(CostKey(distance)))) = queue.pop() {
        settled[node] = true;
        if target == Some(node) {
            break;
        }

        for (neighbor, edge_cost) in graph.neighbors(node) {
            if settled[neighbor] {
                continue;
            }

            let candidate = distance + edge_cost;
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                previous[neighbor] = Some(node);
                // Inserts the node or lowers its priority in place
                queue.push(neighbor, Reverse(CostKey(candidate)));
            }
        }
    }

    SearchTree {
        distances,
        previous,
    }
}

/// Cheapest route from `start` to `destination`, or `None` when the destination
/// cannot be reached or either node is not part of the graph
pub fn shortest_route(
    graph: &SiteGraph,
    start: NodeId,
    destination: NodeId,
) -> Option<ShortestRoute> {
    if start >= graph.node_count() || destination >= graph.node_count() {
        return None;
    }

    let route = search(graph, start, Some(destination)).route_to(start, destination);
    if route.is_none() {
        trace!("no route from {} to {}", start, destination);
    }
    route
}

/// Dense table of precomputed routes between every ordered pair of nodes
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    node_count: usize,
    routes: Vec<Option<ShortestRoute>>,
}

impl RouteTable {
    /// Runs one full single-source search per node, in parallel
    pub fn build(graph: &SiteGraph) -> Self {
        let node_count = graph.node_count();

        let rows: Vec<Vec<Option<ShortestRoute>>> = (0..node_count)
            .into_par_iter()
            .map(|start| {
                let tree = search(graph, start, None);
                (0..node_count)
                    .map(|destination| tree.route_to(start, destination))
                    .collect()
            })
            .collect();

        let routes: Vec<Option<ShortestRoute>> = rows.into_iter().flatten().collect();
        debug!(
            "precomputed {} of {} routes",
            routes.iter().filter(|route| route.is_some()).count(),
            routes.len()
        );

        Self { node_count, routes }
    }

    pub fn route(&self, from: NodeId, to: NodeId) -> Option<&ShortestRoute> {
        if from >= self.node_count || to >= self.node_count {
            return None;
        }
        self.routes[from * self.node_count + to].as_ref()
    }

    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        self.route(from, to).map(|route| route.cost)
    }
}
