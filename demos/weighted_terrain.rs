use grid_routing::{Algorithm, GridGraph, GridSolver};

// Breadth-first search counts steps while Dijkstra counts terrain cost. On
// S.WW.E
// ......
// BFS walks straight through the water, Dijkstra takes the dry detour.
fn main() {
    let graph = GridGraph::from_tiles(6, 2, b"..WW........");
    println!("{}", graph);
    let (start, end) = (0, 5);
    for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra] {
        let path = algorithm.get_path(&graph, start, end).unwrap();
        println!(
            "{}: {} steps, cost {}, path {:?}",
            algorithm,
            path.len() - 1,
            graph.path_cost(&path),
            path
        );
    }
}
