// Integration tests for cost and validity of small hand-built solutions
use item_recovery::models::{SiteGraph, Violation};
use item_recovery::{Error, ProblemInstance, RoutingSolution, SearchState};
use std::sync::Arc;

// depot 0 -> 1 -> 2 -> 0 with unit costs, a single item of size 3 at site 1
fn triangle_graph() -> SiteGraph {
    let mut graph = SiteGraph::new(2);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(2, 0, 1.0).unwrap();
    graph.add_item_to_site(1, 3).unwrap();
    graph
}

fn triangle_solution(graph: SiteGraph, capacity: u32) -> RoutingSolution {
    let instance = Arc::new(ProblemInstance::new(graph, capacity));
    let mut solution = RoutingSolution::new(instance);
    solution
        .append_subpath(vec![1, 2, 0], vec![vec![0], vec![], vec![]])
        .unwrap();
    solution
}

#[test]
fn test_feasible_round_trip() {
    let solution = triangle_solution(triangle_graph(), 5);

    assert_eq!(solution.path(), &[0, 1, 2, 0]);
    assert_eq!(solution.objective_value(), 3.0);
    assert_eq!(solution.objective(), 3.0);
    assert_eq!(solution.check_validity(), (true, None));
}

#[test]
fn test_cargo_over_capacity() {
    let solution = triangle_solution(triangle_graph(), 2);

    assert_eq!(solution.check_validity(), (false, Some(1)));
    assert_eq!(
        solution.first_violation(),
        Some(Violation::CargoOverload { index: 1 })
    );
    // Infeasibility does not change the cost
    assert_eq!(solution.objective_value(), 3.0);
}

#[test]
fn test_missing_return_edge() {
    let mut graph = triangle_graph();
    graph.remove_edge(2, 0).unwrap();
    let solution = triangle_solution(graph, 5);

    assert_eq!(solution.check_validity(), (false, Some(2)));
    assert_eq!(solution.accumulated_cost_at(2), Some(2.0));
    assert!(solution.accumulated_cost_at(3).unwrap().is_infinite());
    assert!(solution.objective_value().is_infinite());
}

#[test]
fn test_inserting_disconnected_site() {
    let mut solution = triangle_solution(triangle_graph(), 5);
    // 1 -> 1 has no edge
    solution.insert_subpath(2, vec![1], vec![vec![]]).unwrap();

    assert_eq!(solution.path(), &[0, 1, 1, 2, 0]);
    assert_eq!(solution.accumulated_cost_at(1), Some(1.0));
    for index in 2..solution.len() as isize {
        assert!(solution.accumulated_cost_at(index).unwrap().is_infinite());
    }
    assert_eq!(solution.check_validity(), (false, Some(1)));
}

#[test]
fn test_items_left_behind_and_open_path() {
    let instance = Arc::new(ProblemInstance::new(triangle_graph(), 5));
    let mut solution = RoutingSolution::new(Arc::clone(&instance));
    solution
        .append_subpath(vec![1, 2, 0], vec![vec![], vec![], vec![]])
        .unwrap();
    assert_eq!(
        solution.first_violation(),
        Some(Violation::ItemsRemaining { index: 3 })
    );

    assert!(solution.pick_item(1, 0).unwrap());
    solution.remove_step(-1).unwrap();
    assert_eq!(
        solution.first_violation(),
        Some(Violation::NotEndingAtDepot { index: 2 })
    );
    assert_eq!(solution.check_validity(), (false, Some(2)));
}

#[test]
fn test_picking_collected_item_is_noop() {
    let mut solution = triangle_solution(triangle_graph(), 5);
    solution
        .insert_subpath(-1, vec![0, 1, 2], vec![vec![], vec![], vec![]])
        .unwrap();
    assert_eq!(solution.path(), &[0, 1, 2, 0, 1, 2, 0]);

    assert!(!solution.pick_item(4, 0).unwrap());
    assert!(solution.items_picked_at(4).unwrap().is_empty());
    assert_eq!(solution.items_picked_at(1).unwrap(), &[0]);
}

#[test]
fn test_depot_state_after_mutations() {
    let mut solution = triangle_solution(triangle_graph(), 5);
    solution
        .insert_subpath(1, vec![1, 2, 0], vec![vec![0], vec![], vec![]])
        .unwrap();
    solution.unpick_item(1, 0).unwrap();
    solution.remove_steps(1, 3).unwrap();
    solution.rectify(0).unwrap();

    let depot = solution.step(0).unwrap();
    assert_eq!(depot.accumulated_cost, 0.0);
    assert!(depot.cargo.is_empty());
    assert!(depot.items_picked.is_empty());
    assert_eq!(solution.path(), &[0, 1, 2, 0]);
    assert!(solution.items_picked_at(1).unwrap().is_empty());
}

#[test]
fn test_api_misuse_is_an_error() {
    let mut solution = triangle_solution(triangle_graph(), 5);

    assert!(matches!(
        solution.insert_subpath(1, vec![1, 2], vec![vec![]]),
        Err(Error::SubpathLengthMismatch { .. })
    ));
    assert!(matches!(
        solution.unpick_item(2, 0),
        Err(Error::ItemNotPicked { index: 2, item: 0 })
    ));
    assert!(matches!(
        solution.append_subpath(vec![0], vec![vec![0]]),
        Err(Error::PickupAtDepot { index: 4 })
    ));
    assert!(matches!(
        solution.remove_step(0),
        Err(Error::NotStartingAtDepot)
    ));
    assert_eq!(solution.check_validity(), (true, None));
}

#[test]
fn test_search_state_copy() {
    let solution = triangle_solution(triangle_graph(), 5);
    let mut candidate = SearchState::copy(&solution);
    candidate.remove_step(2).unwrap();

    assert!(candidate.objective().is_infinite());
    assert_eq!(solution.objective(), 3.0);
}
