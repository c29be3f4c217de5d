use item_recovery::algorithms::construction::shuttle_solution;
use item_recovery::models::{EdgeDefinition, InstanceDefinition, SiteDefinition};
use item_recovery::{ProblemInstance, Result, DEPOT};
use log::{error, info};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Instance from the first argument, or the built-in demo
    let instance = match env::args().nth(1) {
        Some(path) => {
            info!("Loading instance from {}", path);
            ProblemInstance::from_json_file(&path)?
        }
        None => {
            info!("No instance file given, using the demo instance");
            ProblemInstance::from_definition(&demo_definition())?
        }
    };
    let instance = Arc::new(instance);

    println!(
        "Instance: {} sites, {} items, cargo capacity {}",
        instance.graph().number_of_sites(),
        instance.total_items(),
        instance.cargo_capacity()
    );
    println!("------------------------------------------");
    for site in 1..instance.node_count() {
        match instance.shortest_route(DEPOT, site) {
            Some(route) => println!(
                "  depot -> site {}: {:?} (cost {:.2})",
                site, route.nodes, route.cost
            ),
            None => println!("  depot -> site {}: unreachable", site),
        }
    }

    let solution = shuttle_solution(&instance)?;
    println!("\nStarting solution: {}", solution);

    match solution.first_violation() {
        None => println!("  Valid, objective {:.2}", solution.objective_value()),
        Some(violation) => println!(
            "  Invalid at path index {}: {:?}",
            violation.index(),
            violation
        ),
    }

    Ok(())
}

fn demo_definition() -> InstanceDefinition {
    let edge = |from, to, cost| EdgeDefinition { from, to, cost };

    InstanceDefinition {
        cargo_capacity: 5,
        sites: vec![
            SiteDefinition { items: vec![3, 1] },
            SiteDefinition { items: vec![] },
            SiteDefinition { items: vec![2, 2, 4] },
        ],
        edges: vec![
            edge(0, 1, 1.0),
            edge(1, 0, 1.0),
            edge(1, 2, 1.5),
            edge(2, 3, 1.0),
            edge(3, 0, 2.5),
            edge(3, 2, 1.0),
            edge(2, 1, 1.5),
        ],
    }
}
