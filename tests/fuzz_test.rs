/// Fuzzes the planners on many random grids: a path is found exactly when start and goal share
/// a connected component, paths are walkable and their cost matches the tree, and tours are
/// optimal compared to trying every visiting order.
use grid_routing::{
    solver::{bfs::BfsSolver, dijkstra::DijkstraSolver},
    tour::{distance_matrix, held_karp, INFINITE},
    order_by_value, Algorithm, CellKind, GridGraph, GridSolver, Target,
};
use itertools::Itertools;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, weighted: bool) -> GridGraph {
    let kinds = (0..w * h)
        .map(|_| {
            if rng.gen_bool(0.3) {
                CellKind::Wall
            } else if !weighted {
                CellKind::Ground
            } else {
                match rng.gen_range(0..4) {
                    0 => CellKind::Water,
                    1 => CellKind::Elevated,
                    _ => CellKind::Ground,
                }
            }
        })
        .collect::<Vec<_>>();
    GridGraph::from_kinds(w, h, &kinds)
}

fn visualize_grid(graph: &GridGraph, start: usize, end: usize) {
    for y in 0..graph.height() {
        for x in 0..graph.width() {
            let ix = x + y * graph.width();
            if ix == start {
                print!("S");
            } else if ix == end {
                print!("G");
            } else {
                print!("{}", graph.kind(ix).unwrap_or_default().to_tile());
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let graph = random_grid(N, N, &mut rng, true);
        let start = rng.gen_range(0..graph.len());
        let end = rng.gen_range(0..graph.len());
        let reachable = start == end || graph.reachable(start, end);
        for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra] {
            let path = algorithm.get_path(&graph, start, end).unwrap();
            let found = start == end || path.len() > 1;
            // Show the grid if the search disagrees with the components
            if found != reachable {
                visualize_grid(&graph, start, end);
            }
            assert_eq!(found, reachable);
            if !found {
                continue;
            }
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert!(path.iter().all_unique());
            assert!(path
                .iter()
                .all(|&ix| graph.kind(ix) != Some(CellKind::Wall) || ix == start));
            assert!(path
                .iter()
                .tuple_windows()
                .all(|(&a, &b)| graph.edge_weight(a, b).is_some()));
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 6;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let weighted = rng.gen_bool(0.5);
        let graph = random_grid(N, N, &mut rng, weighted);
        let start = rng.gen_range(0..graph.len());
        let tree = DijkstraSolver.shortest_path_tree(&graph, start, None).unwrap();
        let hops = BfsSolver.shortest_path_tree(&graph, start, None).unwrap();
        for goal in 0..graph.len() {
            assert_eq!(tree.is_reached(goal), hops.is_reached(goal));
            let Some(weight) = tree.cumulative_weight(goal) else {
                continue;
            };
            let path = tree.path_to(goal);
            assert_eq!(graph.path_cost(&path), weight);
            let bfs_path = hops.path_to(goal);
            // BFS is never cheaper, and equal whenever every cell costs the same
            assert!(graph.path_cost(&bfs_path) >= weight);
            if !weighted {
                assert_eq!(bfs_path.len(), path.len());
            }
        }
    }
}

fn brute_force(distances: &[Vec<u32>]) -> Option<u32> {
    let n = distances.len();
    (1..n)
        .permutations(n - 1)
        .filter_map(|order| {
            std::iter::once(0)
                .chain(order)
                .chain(std::iter::once(0))
                .tuple_windows()
                .map(|(a, b)| distances[a][b])
                .try_fold(0_u32, |acc, d| (d != INFINITE).then(|| acc + d))
        })
        .min()
}

#[test]
fn fuzz_tour() {
    const N: usize = 6;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let graph = random_grid(N, N, &mut rng, true);
        let n_targets = rng.gen_range(1..6);
        let points = (0..=n_targets)
            .map(|_| rng.gen_range(0..graph.len()))
            .collect::<Vec<_>>();
        let distances = distance_matrix(&graph, &points, &Algorithm::Dijkstra).unwrap();
        let tour = held_karp(&distances);
        assert_eq!(tour.as_ref().map(|t| t.cost), brute_force(&distances));
        if let Some(tour) = tour {
            assert_eq!(tour.order.len(), points.len() + 1);
            let mut visited = tour.target_order();
            visited.sort_unstable();
            assert_eq!(visited, (0..n_targets).collect::<Vec<_>>());

            let targets = points[1..]
                .iter()
                .map(|&cell| Target::new(cell, 1))
                .collect::<Vec<_>>();
            let mut shuffled = targets.clone();
            shuffled.shuffle(&mut rng);
            let again = grid_routing::solve_tour(&graph, points[0], &shuffled, &Algorithm::Dijkstra)
                .unwrap()
                .unwrap();
            assert_eq!(again.cost, tour.cost);
        }
    }
}

#[test]
fn fuzz_order_by_value() {
    const N_LISTS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_LISTS {
        let len = rng.gen_range(0..24);
        let targets = (0..len)
            .map(|cell| Target::new(cell, rng.gen_range(-5..6)))
            .collect::<Vec<_>>();
        let ordered = order_by_value(&targets);
        assert!(ordered
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.value >= b.value));
        let mut expected = targets.clone();
        expected.sort_by_key(|t| t.cell);
        let mut got = ordered.clone();
        got.sort_by_key(|t| t.cell);
        assert_eq!(got, expected);
    }
}
