//! Greedy target orderings. Each rule is a "better than" relation fed to the same in-place
//! quicksort, which uses the [Lomuto partition scheme](https://en.wikipedia.org/wiki/Quicksort#Lomuto_partition_scheme)
//! with the last element of the range as pivot. The sort is not stable: targets that score the
//! same may come out in any relative order.
use crate::config::ScoreWeights;
use crate::error::PlanResult;
use crate::grid_graph::GridGraph;
use crate::solver::GridSolver;

/// A point of interest on the grid with a scalar value, such as a bounty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub cell: usize,
    pub value: i32,
}

impl Target {
    pub fn new(cell: usize, value: i32) -> Target {
        Target { cell, value }
    }
}

/// Moves every element that is better than the pivot (the last element) to the front and places
/// the pivot right after them. Returns the final position of the pivot.
fn partition<T, F>(items: &mut [T], better: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let high = items.len() - 1;
    let mut boundary = 0;
    for j in 0..high {
        if better(&items[j], &items[high]) {
            items.swap(boundary, j);
            boundary += 1;
        }
    }
    items.swap(boundary, high);
    boundary
}

fn quick_sort_recursive<T, F>(items: &mut [T], better: &F)
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return;
    }
    let p = partition(items, better);
    let (front, back) = items.split_at_mut(p);
    quick_sort_recursive(front, better);
    quick_sort_recursive(&mut back[1..], better);
}

/// Sorts `items` in place so that better elements come first. `better(candidate, pivot)` must
/// describe a strict order.
pub fn quick_sort_by<T, F>(items: &mut [T], better: F)
where
    F: Fn(&T, &T) -> bool,
{
    quick_sort_recursive(items, &better);
}

/// Pairs every target with its distance from `reference`. All indices are checked first.
fn with_distances<S>(
    graph: &GridGraph,
    reference: usize,
    targets: &[Target],
    solver: &S,
) -> PlanResult<Vec<(Target, Option<u32>)>>
where
    S: GridSolver + ?Sized,
{
    graph.check_index(reference)?;
    let cells = targets.iter().map(|t| t.cell).collect::<Vec<_>>();
    let distances = solver.distances_from(graph, reference, &cells)?;
    Ok(targets.iter().copied().zip(distances).collect())
}

/// Orders targets by descending value.
pub fn order_by_value(targets: &[Target]) -> Vec<Target> {
    let mut ordered = targets.to_vec();
    quick_sort_by(&mut ordered, |candidate, pivot| candidate.value > pivot.value);
    ordered
}

/// Orders targets by ascending path cost from `reference`, measured with `solver`. Unreachable
/// targets come after every reachable one.
pub fn order_by_distance<S>(
    graph: &GridGraph,
    reference: usize,
    targets: &[Target],
    solver: &S,
) -> PlanResult<Vec<Target>>
where
    S: GridSolver + ?Sized,
{
    let mut measured = with_distances(graph, reference, targets, solver)?;
    let key = |d: Option<u32>| d.unwrap_or(u32::MAX);
    quick_sort_by(&mut measured, |candidate, pivot| key(candidate.1) < key(pivot.1));
    Ok(measured.into_iter().map(|(t, _)| t).collect())
}

/// Orders targets by descending [weighted score](ScoreWeights::score). Every score is computed
/// before sorting; unreachable targets score negative infinity.
pub fn order_by_weighted_score<S>(
    graph: &GridGraph,
    reference: usize,
    targets: &[Target],
    solver: &S,
    weights: ScoreWeights,
) -> PlanResult<Vec<Target>>
where
    S: GridSolver + ?Sized,
{
    let mut scored = with_distances(graph, reference, targets, solver)?
        .into_iter()
        .map(|(t, d)| {
            let score = d.map_or(f64::NEG_INFINITY, |d| weights.score(t.value, d));
            (t, score)
        })
        .collect::<Vec<_>>();
    quick_sort_by(&mut scored, |candidate, pivot| candidate.1 > pivot.1);
    Ok(scored.into_iter().map(|(t, _)| t).collect())
}
