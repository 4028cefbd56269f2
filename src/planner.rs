use core::fmt;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;

use crate::config::PlannerConfig;
use crate::error::PlanResult;
use crate::grid_graph::GridGraph;
use crate::ordering::{order_by_distance, order_by_value, order_by_weighted_score, Target};
use crate::solver::GridSolver;
use crate::tour::TourSolver;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Rule used to pick the next target of a greedy route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreedyRule {
    /// Targets in the order they were given.
    Unordered,
    #[default]
    Value,
    Distance,
    WeightedScore,
}

impl GreedyRule {
    /// Cycles through the rules.
    pub fn next(self) -> GreedyRule {
        match self {
            GreedyRule::Unordered => GreedyRule::Value,
            GreedyRule::Value => GreedyRule::Distance,
            GreedyRule::Distance => GreedyRule::WeightedScore,
            GreedyRule::WeightedScore => GreedyRule::Unordered,
        }
    }
}

impl fmt::Display for GreedyRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            GreedyRule::Unordered => "NONE",
            GreedyRule::Value => "VALUE",
            GreedyRule::Distance => "DISTANCE",
            GreedyRule::WeightedScore => "DISTANCE_AND_VALUE",
        };
        write!(f, "{}", name)
    }
}

/// The walk between two consecutive stops. `target` is the position of the visited target in
/// the list given to the planner, [None] for the return leg of a tour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    pub target: Option<usize>,
    pub path: Vec<usize>,
}

/// A planned sequence of legs. Targets that turned out to be unreachable are listed in
/// `skipped` and have no leg.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    pub legs: Vec<Leg>,
    pub skipped: Vec<usize>,
}

impl Route {
    /// Positions of the visited targets, in visiting order.
    pub fn visit_order(&self) -> Vec<usize> {
        self.legs.iter().filter_map(|leg| leg.target).collect()
    }

    /// The whole walk as one cell sequence, without repeating the cell where two legs meet.
    pub fn cells(&self) -> Vec<usize> {
        let mut cells: Vec<usize> = Vec::new();
        for leg in &self.legs {
            let skip = usize::from(cells.last().is_some() && cells.last() == leg.path.first());
            cells.extend(leg.path.iter().skip(skip));
        }
        cells
    }

    pub fn cost(&self, graph: &GridGraph) -> u32 {
        self.legs.iter().map(|leg| graph.path_cost(&leg.path)).sum()
    }
}

/// Plans routes over a borrowed graph with one [PlannerConfig]; every query of a planner uses
/// the same algorithm.
#[derive(Clone, Copy, Debug)]
pub struct RoutePlanner<'g> {
    graph: &'g GridGraph,
    config: PlannerConfig,
}

impl<'g> RoutePlanner<'g> {
    pub fn new(graph: &'g GridGraph) -> RoutePlanner<'g> {
        RoutePlanner::with_config(graph, PlannerConfig::default())
    }

    pub fn with_config(graph: &'g GridGraph, config: PlannerConfig) -> RoutePlanner<'g> {
        RoutePlanner { graph, config }
    }

    pub fn graph(&self) -> &'g GridGraph {
        self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn check_targets(&self, reference: usize, targets: &[Target]) -> PlanResult<()> {
        self.graph.check_index(reference)?;
        targets
            .iter()
            .try_for_each(|t| self.graph.check_index(t.cell))
    }

    /// Path between two cells with the configured algorithm.
    pub fn path(&self, from: usize, to: usize) -> PlanResult<Vec<usize>> {
        self.config.algorithm.get_path(self.graph, from, to)
    }

    /// Orders targets as seen from `reference`.
    pub fn order(
        &self,
        reference: usize,
        targets: &[Target],
        rule: GreedyRule,
    ) -> PlanResult<Vec<Target>> {
        self.check_targets(reference, targets)?;
        let algorithm = &self.config.algorithm;
        match rule {
            GreedyRule::Unordered => Ok(targets.to_vec()),
            GreedyRule::Value => Ok(order_by_value(targets)),
            GreedyRule::Distance => order_by_distance(self.graph, reference, targets, algorithm),
            GreedyRule::WeightedScore => order_by_weighted_score(
                self.graph,
                reference,
                targets,
                algorithm,
                self.config.weights,
            ),
        }
    }

    /// Visits targets one at a time: from the current position the remaining targets are
    /// ordered with `rule`, the first is walked to and removed. A target whose path turns out
    /// unreachable is skipped without moving.
    pub fn greedy_route(
        &self,
        start: usize,
        targets: &[Target],
        rule: GreedyRule,
    ) -> PlanResult<Route> {
        self.check_targets(start, targets)?;
        let mut remaining: FxIndexMap<usize, Target> =
            targets.iter().copied().enumerate().collect();
        let mut position = start;
        let mut route = Route::default();
        while !remaining.is_empty() {
            let candidates = remaining.values().copied().collect::<Vec<_>>();
            let ordered = self.order(position, &candidates, rule)?;
            let Some(next) = ordered.first() else {
                break;
            };
            let Some(id) = remaining
                .iter()
                .find(|(_, t)| *t == next)
                .map(|(&id, _)| id)
            else {
                break;
            };
            remaining.shift_remove(&id);
            let path = self.path(position, next.cell)?;
            if next.cell != position && path.len() <= 1 {
                debug!("Skipping target {} at {}: unreachable from {}", id, next.cell, position);
                route.skipped.push(id);
                continue;
            }
            position = next.cell;
            route.legs.push(Leg {
                target: Some(id),
                path,
            });
        }
        Ok(route)
    }

    /// Visits all targets along the cheapest closed tour from `start`, see
    /// [TourSolver::solve]. Returns `Ok(None)` if some target is unreachable.
    pub fn tour_route(&self, start: usize, targets: &[Target]) -> PlanResult<Option<Route>> {
        let solver = TourSolver::new(self.config.max_tour_targets);
        let Some(tour) = solver.solve(self.graph, start, targets, &self.config.algorithm)? else {
            return Ok(None);
        };
        let cell_of = |label: usize| {
            if label == 0 {
                start
            } else {
                targets[label - 1].cell
            }
        };
        let mut route = Route::default();
        for (&from, &to) in tour.order.iter().tuple_windows() {
            route.legs.push(Leg {
                target: (to != 0).then(|| to - 1),
                path: self.path(cell_of(from), cell_of(to))?,
            });
        }
        Ok(Some(route))
    }
}
