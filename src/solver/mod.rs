use crate::error::PlanResult;
use crate::grid_graph::GridGraph;
use crate::path_tree::{reconstruct_path, PathResult};
use core::fmt;

pub mod bfs;
pub mod dijkstra;

use bfs::BfsSolver;
use dijkstra::DijkstraSolver;

/// Converts a reconstructed path into a distance: zero when start and goal coincide, [None] when
/// the goal was not reached and the summed edge weights otherwise.
fn path_distance(graph: &GridGraph, start: usize, goal: usize, path: &[usize]) -> Option<u32> {
    if start == goal {
        Some(0)
    } else if path.len() <= 1 {
        None
    } else {
        Some(graph.path_cost(path))
    }
}

/// A shortest-path algorithm over a [GridGraph]. Implementors only build the tree; paths and
/// distances are derived from it. All indices are validated before any search runs.
pub trait GridSolver {
    /// Computes a shortest-path tree rooted at `source`. `destination` is a hint that allows
    /// the search to stop early, the tree is then only guaranteed to be complete on the path to
    /// that cell.
    fn shortest_path_tree(
        &self,
        graph: &GridGraph,
        source: usize,
        destination: Option<usize>,
    ) -> PlanResult<PathResult>;

    /// Computes the path from start to goal. A path of length one with `start != goal` means
    /// the goal is unreachable.
    fn get_path(&self, graph: &GridGraph, start: usize, goal: usize) -> PlanResult<Vec<usize>> {
        let result = self.shortest_path_tree(graph, start, Some(goal))?;
        Ok(reconstruct_path(&result, goal))
    }

    /// Sum of the edge weights along `path`, skipping steps between cells that are not joined.
    fn get_path_cost(&self, graph: &GridGraph, path: &[usize]) -> u32 {
        graph.path_cost(path)
    }

    /// Sum of the edge weights along the path this solver finds, [None] if the goal is
    /// unreachable.
    fn distance(&self, graph: &GridGraph, start: usize, goal: usize) -> PlanResult<Option<u32>> {
        let path = self.get_path(graph, start, goal)?;
        Ok(path_distance(graph, start, goal, &path))
    }

    /// Distances from one start to several goals, in the order of `goals`.
    fn distances_from(
        &self,
        graph: &GridGraph,
        start: usize,
        goals: &[usize],
    ) -> PlanResult<Vec<Option<u32>>> {
        goals
            .iter()
            .map(|&goal| self.distance(graph, start, goal))
            .collect()
    }
}

/// Selects one of the two search algorithms. Passing a single [Algorithm] to an ordering or tour
/// query keeps every distance of that query on the same algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    #[default]
    Dijkstra,
}

impl Algorithm {
    /// The other algorithm.
    pub fn toggled(self) -> Algorithm {
        match self {
            Algorithm::Bfs => Algorithm::Dijkstra,
            Algorithm::Dijkstra => Algorithm::Bfs,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dijkstra => write!(f, "DIJKSTRA"),
        }
    }
}

impl GridSolver for Algorithm {
    fn shortest_path_tree(
        &self,
        graph: &GridGraph,
        source: usize,
        destination: Option<usize>,
    ) -> PlanResult<PathResult> {
        match self {
            Algorithm::Bfs => BfsSolver.shortest_path_tree(graph, source, destination),
            Algorithm::Dijkstra => DijkstraSolver.shortest_path_tree(graph, source, destination),
        }
    }

    fn distances_from(
        &self,
        graph: &GridGraph,
        start: usize,
        goals: &[usize],
    ) -> PlanResult<Vec<Option<u32>>> {
        match self {
            Algorithm::Bfs => BfsSolver.distances_from(graph, start, goals),
            Algorithm::Dijkstra => DijkstraSolver.distances_from(graph, start, goals),
        }
    }
}

/// Computes the shortest-path tree of `source` with the selected algorithm.
pub fn shortest_path_tree(
    graph: &GridGraph,
    source: usize,
    algorithm: Algorithm,
    destination_hint: Option<usize>,
) -> PlanResult<PathResult> {
    algorithm.shortest_path_tree(graph, source, destination_hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;
    use crate::error::PlanError;

    const ALGORITHMS: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dijkstra];

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let graph = GridGraph::new(1, 1, |_| CellKind::Ground);
        for algorithm in ALGORITHMS {
            assert_eq!(algorithm.get_path(&graph, 0, 0).unwrap(), vec![0]);
            assert_eq!(algorithm.distance(&graph, 0, 0).unwrap(), Some(0));
        }
    }

    /// 3x3 open grid, corner to corner takes four steps.
    #[test]
    fn solve_simple_problem() {
        let graph = GridGraph::new(3, 3, |_| CellKind::Ground);
        for algorithm in ALGORITHMS {
            let path = algorithm.get_path(&graph, 0, 8).unwrap();
            assert_eq!(path.len(), 5);
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&8));
            assert_eq!(algorithm.distance(&graph, 0, 8).unwrap(), Some(4));
            assert_eq!(algorithm.get_path_cost(&graph, &path), 4);
        }
    }

    #[test]
    fn invalid_indices_are_rejected() {
        let graph = GridGraph::new(2, 2, |_| CellKind::Ground);
        let err = PlanError::InvalidIndex { index: 4, len: 4 };
        for algorithm in ALGORITHMS {
            assert_eq!(algorithm.get_path(&graph, 4, 0), Err(err.clone()));
            assert_eq!(algorithm.get_path(&graph, 0, 4), Err(err.clone()));
            assert_eq!(
                shortest_path_tree(&graph, 0, algorithm, Some(4)),
                Err(err.clone())
            );
            assert_eq!(algorithm.distances_from(&graph, 0, &[1, 4]), Err(err.clone()));
        }
    }

    /// A wall splitting a corridor leaves the far end unreachable.
    #[test]
    fn blocked_corridor() {
        let graph = GridGraph::from_tiles(3, 1, b".#.");
        for algorithm in ALGORITHMS {
            assert_eq!(algorithm.get_path(&graph, 0, 2).unwrap(), vec![2]);
            assert_eq!(algorithm.distance(&graph, 0, 2).unwrap(), None);
        }
    }

    /// With a gap below the wall the path goes around it.
    #[test]
    fn corridor_detour() {
        // .#.
        // ...
        let graph = GridGraph::from_tiles(3, 2, b".#....");
        for algorithm in ALGORITHMS {
            assert_eq!(algorithm.get_path(&graph, 0, 2).unwrap(), vec![0, 3, 4, 5, 2]);
        }
    }

    #[test]
    fn algorithm_selection() {
        assert_eq!(Algorithm::default(), Algorithm::Dijkstra);
        assert_eq!(Algorithm::Bfs.toggled(), Algorithm::Dijkstra);
        assert_eq!(Algorithm::Dijkstra.to_string(), "DIJKSTRA");
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
    }

    #[test]
    fn distances_from_matches_single_queries() {
        // ..W
        // .#.
        // ^..
        let graph = GridGraph::from_tiles(3, 3, b"..W.#.^..");
        let goals = [2, 5, 6, 8, 4];
        for algorithm in ALGORITHMS {
            let all = algorithm.distances_from(&graph, 0, &goals).unwrap();
            let single = goals
                .iter()
                .map(|&g| algorithm.distance(&graph, 0, g).unwrap())
                .collect::<Vec<_>>();
            assert_eq!(all, single);
            assert_eq!(all[4], None);
        }
    }
}
