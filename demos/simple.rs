use grid_routing::{Algorithm, GridGraph, GridSolver};
use grid_util::point::Point;

// In this example a path is found on a grid with shape
// #####
// #S..#
// #.#.#
// #..E#
// #####
// S marks the start
// E marks the end
fn main() {
    let graph = GridGraph::from_tiles(5, 5, b"######...##.#.##...######");
    let start = graph.coord_to_index(Point::new(1, 1)).unwrap();
    let end = graph.coord_to_index(Point::new(3, 3)).unwrap();
    let path = Algorithm::Dijkstra.get_path(&graph, start, end).unwrap();
    if path.len() > 1 {
        println!("A path has been found:");
        for ix in path {
            println!("{:?}", graph.index_to_coord(ix).unwrap());
        }
    }
}
