use std::collections::VecDeque;

use log::debug;

use crate::error::PlanResult;
use crate::grid_graph::GridGraph;
use crate::path_tree::{PathElement, PathResult};
use crate::solver::GridSolver;

/// Unweighted breadth-first search. The weight of a cell in the resulting tree is its hop count
/// from the source, regardless of terrain.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    /// Stops as soon as the destination is dequeued. Cells beyond it in traversal order may be
    /// left unreached, which is fine since only the path to the destination is asked for.
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
        let mut result = PathResult::rooted(source, graph.len());
        let mut queue = VecDeque::from([(source, 0)]);
        while let Some((node, hops)) = queue.pop_front() {
            if destination == Some(node) {
                break;
            }
            for edge in graph.neighbours(node) {
                if !result.is_reached(edge.to) {
                    result.set(
                        edge.to,
                        PathElement {
                            weight: hops + 1,
                            parent: Some(node),
                        },
                    );
                    queue.push_back((edge.to, hops + 1));
                }
            }
        }
        debug!(
            "BFS from {} reached {} of {} cells",
            source,
            result.reached_count(),
            graph.len()
        );
        Ok(result)
    }
}
