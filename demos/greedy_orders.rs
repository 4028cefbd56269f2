use grid_routing::{GreedyRule, GridGraph, RoutePlanner, Target};

// Visits the same bounties with every greedy rule on
// .......
// .WWW.#.
// .^.^.#.
// .......
fn main() {
    let graph = GridGraph::from_tiles(7, 4, b"........WWW.#..^.^.#........");
    let planner = RoutePlanner::new(&graph);
    let targets = [
        Target::new(6, 3),
        Target::new(16, 8),
        Target::new(21, 1),
        Target::new(27, 5),
    ];
    let mut rule = GreedyRule::Unordered;
    for _ in 0..4 {
        let route = planner.greedy_route(0, &targets, rule).unwrap();
        println!(
            "{}: visits {:?}, cost {}",
            rule,
            route.visit_order(),
            route.cost(&graph)
        );
        rule = rule.next();
    }
}
