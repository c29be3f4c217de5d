// Per-step derived state of a routing solution

use crate::models::{Cost, ItemIndex, ItemSize};

/// State of the vehicle after completing the visit at one path position
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolutionStep {
    /// Indexes into the visited site's original item list, in pickup order
    pub items_picked: Vec<ItemIndex>,

    /// Item sizes left at every node after this step, zero where already collected
    pub remaining_items_per_site: Vec<Vec<ItemSize>>,

    /// Sizes of the items aboard, in pickup order
    pub cargo: Vec<ItemSize>,

    /// Travel cost from the depot up to this step
    pub accumulated_cost: Cost,
}

impl SolutionStep {
    /// A not yet rectified step that only knows what should be picked up there
    pub fn with_pickups(items_picked: Vec<ItemIndex>) -> Self {
        Self {
            items_picked,
            ..Self::default()
        }
    }

    /// Total size aboard, widened so that large item sizes cannot wrap around
    pub fn cargo_load(&self) -> u64 {
        self.cargo.iter().map(|&size| u64::from(size)).sum()
    }

    /// True when no item is left at any node
    pub fn all_items_collected(&self) -> bool {
        self.remaining_items_per_site
            .iter()
            .all(|items| items.iter().all(|&size| size == 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_load_and_collection() {
        let step = SolutionStep {
            items_picked: vec![0],
            remaining_items_per_site: vec![vec![], vec![0, 2]],
            cargo: vec![3, 1],
            accumulated_cost: 4.0,
        };

        assert_eq!(step.cargo_load(), 4);
        assert!(!step.all_items_collected());

        let empty = SolutionStep::with_pickups(vec![1, 2]);
        assert_eq!(empty.items_picked, vec![1, 2]);
        assert!(empty.all_items_collected());
        assert_eq!(empty.cargo_load(), 0);
    }

    #[test]
    fn test_cargo_load_does_not_wrap() {
        let step = SolutionStep {
            cargo: vec![u32::MAX, 2],
            ..SolutionStep::default()
        };
        assert_eq!(step.cargo_load(), u64::from(u32::MAX) + 2);
    }
}
