//! Exact minimum-cost closed tours over a start point and a set of targets, computed with the
//! [Held-Karp](https://en.wikipedia.org/wiki/Held%E2%80%93Karp_algorithm) bitmask dynamic
//! program in `O(n² 2ⁿ)` time and `O(n 2ⁿ)` space for `n` points. Because of the exponential cost
//! requests above a configured number of targets are refused instead of attempted.
use std::iter;

use log::{info, warn};

use crate::error::{PlanError, PlanResult};
use crate::grid_graph::GridGraph;
use crate::ordering::Target;
use crate::solver::GridSolver;
use crate::DEFAULT_MAX_TOUR_TARGETS;

/// Distance between points that cannot reach each other.
pub const INFINITE: u32 = u32::MAX;

/// Hard limit on the number of points (start included) [held_karp] accepts. Any configured
/// target bound is clamped below it. At this size the tables take about 260 MB.
pub const MAX_TOUR_POINTS: usize = 21;

/// A closed tour. `order` holds point labels, where 0 is the start and `i` is the `i - 1`-th
/// target; it begins and ends with 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    pub order: Vec<usize>,
    pub cost: u32,
}

impl Tour {
    /// Positions in the target list, in visiting order.
    pub fn target_order(&self) -> Vec<usize> {
        self.order
            .iter()
            .filter(|&&label| label != 0)
            .map(|label| label - 1)
            .collect()
    }
}

/// Pairwise distances between `points` with `solver`, [INFINITE] where unreachable. Each row is
/// one [distances_from](GridSolver::distances_from) call, so Dijkstra runs once per point.
pub fn distance_matrix<S>(
    graph: &GridGraph,
    points: &[usize],
    solver: &S,
) -> PlanResult<Vec<Vec<u32>>>
where
    S: GridSolver + ?Sized,
{
    points
        .iter()
        .map(|&from| {
            let row = solver.distances_from(graph, from, points)?;
            Ok(row.into_iter().map(|d| d.unwrap_or(INFINITE)).collect())
        })
        .collect()
}

/// Solves the tour over a square distance matrix whose first row belongs to the start. Returns
/// [None] if no closed tour of finite cost exists, or if the matrix is empty, not square or
/// larger than [MAX_TOUR_POINTS].
pub fn held_karp(distances: &[Vec<u32>]) -> Option<Tour> {
    let n = distances.len();
    if n == 0 || n > MAX_TOUR_POINTS || distances.iter().any(|row| row.len() != n) {
        return None;
    }
    if n == 1 {
        return Some(Tour {
            order: vec![0, 0],
            cost: 0,
        });
    }
    let full = 1_usize << n;
    // dp[mask * n + j]: cheapest path from 0 through exactly `mask`, ending at j
    let mut dp = vec![INFINITE; full * n];
    let mut parent: Vec<Option<u8>> = vec![None; full * n];
    dp[n] = 0;

    // Only masks containing the start, which are the odd ones.
    for mask in (1..full).step_by(2) {
        for j in 1..n {
            if mask & (1 << j) == 0 {
                continue;
            }
            let previous = mask ^ (1 << j);
            for k in 0..n {
                if previous & (1 << k) == 0 {
                    continue;
                }
                let cost = dp[previous * n + k].saturating_add(distances[k][j]);
                if cost < dp[mask * n + j] {
                    dp[mask * n + j] = cost;
                    parent[mask * n + j] = Some(k as u8);
                }
            }
        }
    }

    let full_mask = full - 1;
    let mut best: Option<(u32, usize)> = None;
    for j in 1..n {
        let cost = dp[full_mask * n + j].saturating_add(distances[j][0]);
        if cost < best.map_or(INFINITE, |(c, _)| c) {
            best = Some((cost, j));
        }
    }
    let (cost, last) = best?;

    let mut order = Vec::with_capacity(n + 1);
    let mut mask = full_mask;
    let mut current = last;
    while current != 0 {
        order.push(current);
        let previous = parent[mask * n + current]?;
        mask ^= 1 << current;
        current = previous as usize;
    }
    order.push(0);
    order.reverse();
    order.push(0);
    Some(Tour { order, cost })
}

/// Exact tour solver with a bound on the number of targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourSolver {
    pub max_targets: usize,
}

impl Default for TourSolver {
    fn default() -> TourSolver {
        TourSolver::new(DEFAULT_MAX_TOUR_TARGETS)
    }
}

impl TourSolver {
    pub fn new(max_targets: usize) -> TourSolver {
        TourSolver { max_targets }
    }

    /// The bound actually enforced, never above [MAX_TOUR_POINTS] - 1.
    pub fn effective_max_targets(&self) -> usize {
        self.max_targets.min(MAX_TOUR_POINTS - 1)
    }

    /// Computes the cheapest closed tour from `start` through every target and back. Fails with
    /// [PlanError::TooManyTargets] before any distance is computed if the bound is exceeded, and
    /// returns `Ok(None)` if some target cannot be reached from `start`.
    pub fn solve<S>(
        &self,
        graph: &GridGraph,
        start: usize,
        targets: &[Target],
        solver: &S,
    ) -> PlanResult<Option<Tour>>
    where
        S: GridSolver + ?Sized,
    {
        let max = self.effective_max_targets();
        if targets.len() > max {
            warn!(
                "Refusing tour over {} targets, the limit is {}",
                targets.len(),
                max
            );
            return Err(PlanError::TooManyTargets {
                count: targets.len(),
                max,
            });
        }
        graph.check_index(start)?;
        for target in targets {
            graph.check_index(target.cell)?;
        }
        if let Some(target) = targets.iter().find(|t| graph.unreachable(start, t.cell)) {
            info!("{} is not reachable from {}, no tour exists", target.cell, start);
            return Ok(None);
        }
        let points = iter::once(start)
            .chain(targets.iter().map(|t| t.cell))
            .collect::<Vec<_>>();
        let distances = distance_matrix(graph, &points, solver)?;
        Ok(held_karp(&distances))
    }
}

/// Solves a tour with the default target bound, see [TourSolver::solve].
pub fn solve_tour<S>(
    graph: &GridGraph,
    start: usize,
    targets: &[Target],
    solver: &S,
) -> PlanResult<Option<Tour>>
where
    S: GridSolver + ?Sized,
{
    TourSolver::default().solve(graph, start, targets, solver)
}
