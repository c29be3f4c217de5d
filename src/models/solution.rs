// Routing solution model: the visited path and the derived state at every step

use crate::error::{Error, Result};
use crate::models::{Cost, ItemIndex, ItemSize, NodeId, ProblemInstance, SolutionStep, DEPOT};
use std::fmt;
use std::sync::Arc;

/// First rule a candidate solution breaks, with the path index where it happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The path does not begin at the depot
    NotStartingAtDepot,

    /// More cargo aboard than the vehicle can carry after this step
    CargoOverload { index: usize },

    /// No edge from the node at `index` to the next one
    Disconnected { index: usize },

    /// Some items are still lying at their sites when the path ends
    ItemsRemaining { index: usize },

    /// The last node is not the depot
    NotEndingAtDepot { index: usize },
}

impl Violation {
    /// Path index reported to the search driver
    pub fn index(&self) -> usize {
        match *self {
            Violation::NotStartingAtDepot => 0,
            Violation::CargoOverload { index }
            | Violation::Disconnected { index }
            | Violation::ItemsRemaining { index }
            | Violation::NotEndingAtDepot { index } => index,
        }
    }
}

/// A candidate path through the sites together with the derived per-step state.
///
/// Every mutation keeps `steps` aligned with `path` and rectifies the derived
/// state from the first touched index onwards. Mutations never check whether
/// the result is a feasible solution, use `check_validity` for that.
#[derive(Debug, Clone)]
pub struct RoutingSolution {
    pub(crate) instance: Arc<ProblemInstance>,

    /// Visited nodes, always starting with the depot
    pub(crate) path: Vec<NodeId>,

    /// State after each visit, `steps[i]` belongs to `path[i]`
    pub(crate) steps: Vec<SolutionStep>,
}

impl RoutingSolution {
    /// Creates a solution that only consists of the depot
    pub fn new(instance: Arc<ProblemInstance>) -> Self {
        let depot_step = SolutionStep {
            remaining_items_per_site: instance.items_at_all_sites().to_vec(),
            ..SolutionStep::default()
        };

        Self {
            instance,
            path: vec![DEPOT],
            steps: vec![depot_step],
        }
    }

    /// Independent copy sharing only the immutable problem instance
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    pub fn instance(&self) -> &Arc<ProblemInstance> {
        &self.instance
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Pairs with `len`. Mutations refuse to remove the depot head, so this
    /// is only true for a solution whose fields were emptied from inside the crate.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Accumulated cost at the final step, the value the search minimizes
    pub fn objective_value(&self) -> Cost {
        self.steps.last().map_or(0.0, |step| step.accumulated_cost)
    }

    /// Same as `objective_value`
    pub fn cost(&self) -> Cost {
        self.objective_value()
    }

    pub fn first_violation(&self) -> Option<Violation> {
        if self.path.first() != Some(&DEPOT) {
            return Some(Violation::NotStartingAtDepot);
        }

        let capacity = u64::from(self.instance.cargo_capacity());
        let last = self.path.len() - 1;
        for index in 0..self.path.len() {
            if self.steps[index].cargo_load() > capacity {
                return Some(Violation::CargoOverload { index });
            }
            if index != last
                && self
                    .instance
                    .cost_between_adjacent_sites(self.path[index], self.path[index + 1])
                    .is_none()
            {
                return Some(Violation::Disconnected { index });
            }
        }

        if !self.steps[last].all_items_collected() {
            return Some(Violation::ItemsRemaining { index: last });
        }
        if self.path[last] != DEPOT {
            return Some(Violation::NotEndingAtDepot { index: last });
        }

        None
    }

    /// `(true, None)` for a feasible solution, otherwise `(false, Some(index))`
    /// with the path index of the first problem found
    pub fn check_validity(&self) -> (bool, Option<usize>) {
        match self.first_violation() {
            None => (true, None),
            Some(violation) => (false, Some(violation.index())),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.first_violation().is_none()
    }

    pub fn step(&self, index: isize) -> Option<&SolutionStep> {
        self.resolve_index(index).map(|index| &self.steps[index])
    }

    /// Items left at every node after the visit at `index`, this visit's pickups excluded
    pub fn remaining_items_at(&self, index: isize) -> Option<&[Vec<ItemSize>]> {
        self.step(index)
            .map(|step| step.remaining_items_per_site.as_slice())
    }

    pub fn cargo_at(&self, index: isize) -> Option<&[ItemSize]> {
        self.step(index).map(|step| step.cargo.as_slice())
    }

    pub fn cargo_load_at(&self, index: isize) -> Option<u64> {
        self.step(index).map(SolutionStep::cargo_load)
    }

    pub fn items_picked_at(&self, index: isize) -> Option<&[ItemIndex]> {
        self.step(index).map(|step| step.items_picked.as_slice())
    }

    pub fn accumulated_cost_at(&self, index: isize) -> Option<Cost> {
        self.step(index).map(|step| step.accumulated_cost)
    }

    /// Picks up `item` of the site visited at `index` if it is still lying there.
    /// Returns whether the pickup was recorded.
    pub fn pick_item(&mut self, index: isize, item: ItemIndex) -> Result<bool> {
        let index = self.checked_index(index)?;
        let node = self.path[index];
        if node == DEPOT {
            return Err(Error::PickupAtDepot { index });
        }

        let remaining = self.steps[index].remaining_items_per_site[node]
            .get(item)
            .copied()
            .ok_or(Error::UnknownItem { node, item })?;
        if remaining == 0 {
            return Ok(false);
        }

        self.steps[index].items_picked.push(item);
        self.rectify(index)?;
        Ok(true)
    }

    pub fn unpick_item(&mut self, index: isize, item: ItemIndex) -> Result<()> {
        let index = self.checked_index(index)?;
        let position = self.steps[index]
            .items_picked
            .iter()
            .position(|&picked| picked == item)
            .ok_or(Error::ItemNotPicked { index, item })?;

        self.steps[index].items_picked.remove(position);
        self.rectify(index)
    }

    pub fn remove_step(&mut self, index: isize) -> Result<()> {
        self.remove_steps(index, 1)
    }

    /// Removes `count` consecutive steps starting at `index`
    pub fn remove_steps(&mut self, index: isize, count: usize) -> Result<()> {
        let start = self.checked_index(index)?;
        let end = start
            .checked_add(count)
            .filter(|&end| end <= self.path.len())
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.path.len(),
            })?;
        if start == 0 && count > 0 {
            match self.path.get(end) {
                None => return Err(Error::EmptyPath),
                Some(&node) if node != DEPOT => return Err(Error::NotStartingAtDepot),
                Some(_) => {}
            }
        }

        self.path.drain(start..end);
        self.steps.drain(start..end);
        self.rectify(start)
    }

    /// Extends the path with `nodes`, picking up `items_picked[i]` at `nodes[i]`
    pub fn append_subpath(
        &mut self,
        nodes: Vec<NodeId>,
        items_picked: Vec<Vec<ItemIndex>>,
    ) -> Result<()> {
        let at = self.path.len();
        self.splice_subpath(at, nodes, items_picked)
    }

    /// Inserts `nodes` so that the first of them ends up at `index`
    pub fn insert_subpath(
        &mut self,
        index: isize,
        nodes: Vec<NodeId>,
        items_picked: Vec<Vec<ItemIndex>>,
    ) -> Result<()> {
        let len = self.path.len();
        let at = if index < 0 { len as isize + index } else { index };
        if at < 0 || at as usize > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.splice_subpath(at as usize, nodes, items_picked)
    }

    fn splice_subpath(
        &mut self,
        at: usize,
        nodes: Vec<NodeId>,
        items_picked: Vec<Vec<ItemIndex>>,
    ) -> Result<()> {
        self.check_subpath(at, &nodes, &items_picked)?;
        if nodes.is_empty() {
            return Ok(());
        }

        self.path.splice(at..at, nodes);
        self.steps.splice(
            at..at,
            items_picked.into_iter().map(SolutionStep::with_pickups),
        );
        self.rectify(at)
    }

    fn check_subpath(
        &self,
        at: usize,
        nodes: &[NodeId],
        items_picked: &[Vec<ItemIndex>],
    ) -> Result<()> {
        if nodes.len() != items_picked.len() {
            return Err(Error::SubpathLengthMismatch {
                nodes: nodes.len(),
                picks: items_picked.len(),
            });
        }
        if at == 0 && nodes.first().is_some_and(|&node| node != DEPOT) {
            return Err(Error::NotStartingAtDepot);
        }

        let graph = self.instance.graph();
        for (offset, (&node, items)) in nodes.iter().zip(items_picked).enumerate() {
            let available = graph.items_at(node).ok_or(Error::UnknownNode {
                node,
                node_count: graph.node_count(),
            })?;
            if node == DEPOT && !items.is_empty() {
                return Err(Error::PickupAtDepot { index: at + offset });
            }
            if let Some(&item) = items.iter().find(|&&item| item >= available.len()) {
                return Err(Error::UnknownItem { node, item });
            }
        }

        Ok(())
    }

    /// Resolves a possibly negative index against the current path
    fn resolve_index(&self, index: isize) -> Option<usize> {
        let len = self.path.len() as isize;
        let resolved = if index < 0 { len + index } else { index };
        (0..len).contains(&resolved).then_some(resolved as usize)
    }

    fn checked_index(&self, index: isize) -> Result<usize> {
        self.resolve_index(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.path.len(),
        })
    }
}

impl fmt::Display for RoutingSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (node, step)) in self.path.iter().zip(&self.steps).enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
            if !step.items_picked.is_empty() {
                write!(f, "{:?}", step.items_picked)?;
            }
        }
        write!(f, " (cost {:.2})", self.objective_value())
    }
}
