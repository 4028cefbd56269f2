use log::debug;

use crate::error::PlanResult;
use crate::grid_graph::GridGraph;
use crate::path_tree::{reconstruct_path, PathElement, PathResult};
use crate::solver::{path_distance, GridSolver};

const INFINITE: u32 = u32::MAX;

/// Dijkstra's algorithm with a linear scan for the closest unfinalized cell, O(V²) overall. This
/// is fast enough for the small grids it is meant for; a heap based frontier would keep the same
/// results on larger maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

/// Index of the unfinalized cell with the smallest finite distance.
fn minimum_distance(distances: &[u32], finalized: &[bool]) -> Option<usize> {
    distances
        .iter()
        .zip(finalized)
        .enumerate()
        .filter(|(_, (&d, &done))| !done && d != INFINITE)
        .min_by_key(|(_, (&d, _))| d)
        .map(|(ix, _)| ix)
}

impl GridSolver for DijkstraSolver {
    /// Always builds the full tree; the destination is only validated.
    fn shortest_path_tree(
        &self,
        graph: &GridGraph,
        source: usize,
        destination: Option<usize>,
    ) -> PlanResult<PathResult> {
        graph.check_index(source)?;
        if let Some(goal) = destination {
            graph.check_index(goal)?;
        }
        let n = graph.len();
        let mut distances = vec![INFINITE; n];
        let mut finalized = vec![false; n];
        let mut result = PathResult::rooted(source, n);
        distances[source] = 0;

        let mut extractions = 0;
        while extractions + 1 < n {
            let Some(u) = minimum_distance(&distances, &finalized) else {
                break;
            };
            finalized[u] = true;
            extractions += 1;
            for edge in graph.neighbours(u) {
                let candidate = distances[u] + edge.weight;
                if !finalized[edge.to] && candidate < distances[edge.to] {
                    distances[edge.to] = candidate;
                    result.set(
                        edge.to,
                        PathElement {
                            weight: candidate,
                            parent: Some(u),
                        },
                    );
                }
            }
        }
        debug!(
            "Dijkstra from {} finalized {} cells, reached {}",
            source,
            extractions,
            result.reached_count()
        );
        Ok(result)
    }

    /// Builds a single tree and reads every goal off it.
    fn distances_from(
        &self,
        graph: &GridGraph,
        start: usize,
        goals: &[usize],
    ) -> PlanResult<Vec<Option<u32>>> {
        for &goal in goals {
            graph.check_index(goal)?;
        }
        let result = self.shortest_path_tree(graph, start, None)?;
        Ok(goals
            .iter()
            .map(|&goal| path_distance(graph, start, goal, &reconstruct_path(&result, goal)))
            .collect())
    }
}
