use grid_routing::{Algorithm, GridGraph, PathStepper, PlannerConfig, RoutePlanner, Target};

// Plans the cheapest round trip over four targets and walks it cell by cell on
// S...1
// .W.#.
// ..4.#
// .W...
// 2..^3
fn main() {
    let graph = GridGraph::from_tiles(5, 5, b"......W.#...^.#.W......^.");
    let targets = [
        Target::new(4, 1),
        Target::new(20, 1),
        Target::new(24, 1),
        Target::new(12, 1),
    ];
    let planner = RoutePlanner::with_config(
        &graph,
        PlannerConfig::default().with_algorithm(Algorithm::Dijkstra),
    );
    let Some(route) = planner.tour_route(0, &targets).unwrap() else {
        println!("Some target cannot be reached");
        return;
    };
    println!(
        "Visiting {:?} for a total cost of {}",
        route.visit_order(),
        route.cost(&graph)
    );
    let mut stepper = PathStepper::new(0);
    for leg in &route.legs {
        stepper.start(&leg.path);
        while let Some(ix) = stepper.tick() {
            print!("{} ", ix);
        }
        println!();
    }
}
