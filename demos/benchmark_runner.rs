use grid_routing::{Algorithm, GridGraph, GridSolver};
use grid_routing_benchmark::*;
use grid_util::point::Point;
use std::time::{Duration, Instant};

fn main() {
    let benchmark_names = get_benchmark_names();
    let mut total_time = Duration::ZERO;
    for name in benchmark_names {
        println!("Benchmark name: {}", name);

        let (map, scenarios) = get_benchmark(name);
        let graph = GridGraph::from_tiles(map.width, map.height, &map.tiles);
        for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra] {
            let number_of_scenarios = scenarios.len().max(1) as u32;
            let before = Instant::now();
            run_scenarios(&graph, algorithm, &scenarios);
            let elapsed = before.elapsed();
            println!(
                "\t{}: elapsed time: {:.2?}; per scenario: {:.2?}",
                algorithm,
                elapsed,
                elapsed / number_of_scenarios
            );
            total_time += elapsed;
        }
    }
    println!("\tTotal benchmark time: {:.2?}", total_time);
}

pub fn run_scenarios(graph: &GridGraph, algorithm: Algorithm, scenarios: &[(Point, Point, f64)]) {
    for (start, goal, _) in scenarios {
        let (Some(start), Some(goal)) = (graph.coord_to_index(*start), graph.coord_to_index(*goal))
        else {
            continue;
        };
        let path = algorithm.get_path(graph, start, goal).unwrap();
        assert!(start == goal || path.len() > 1);
    }
}
