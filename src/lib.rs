//! # grid_routing
//!
//! Route planning on a rectangular grid of weighted cells. A [GridGraph] is built once from the
//! grid dimensions and a kind per cell; edges join 4-neighbours that are not walls and cost the
//! traversal weight of the cell being entered. On top of it the crate offers
//!
//! - shortest-path trees using [breadth-first search](solver::bfs::BfsSolver) (hop count) or
//!   [Dijkstra](solver::dijkstra::DijkstraSolver) (edge weights), selected through
//!   [Algorithm],
//! - greedy [orderings](ordering) of target cells by value, by distance or by a weighted score,
//! - an exact minimum-cost closed [tour] over a set of targets using the
//!   [Held-Karp](https://en.wikipedia.org/wiki/Held%E2%80%93Karp_algorithm) dynamic program,
//! - a [RoutePlanner] that turns either strategy into walkable legs and a [PathStepper] that
//!   follows them one cell per tick.
//!
//! Connected components are pre-computed so that unreachable goals are reported without
//! flood-filling the grid.
pub mod cell;
pub mod config;
pub mod error;
pub mod grid_graph;
pub mod ordering;
pub mod path_tree;
pub mod planner;
pub mod solver;
pub mod stepper;
pub mod tour;

pub use cell::{Cell, CellKind, Edge};
pub use config::{PlannerConfig, ScoreWeights};
pub use error::{PlanError, PlanResult};
pub use grid_graph::GridGraph;
pub use ordering::{order_by_distance, order_by_value, order_by_weighted_score, Target};
pub use path_tree::{reconstruct_path, PathElement, PathResult};
pub use planner::{GreedyRule, Leg, Route, RoutePlanner};
pub use solver::{shortest_path_tree, Algorithm, GridSolver};
pub use stepper::{PathStepper, StepState};
pub use tour::{solve_tour, Tour, TourSolver};

/// Inline capacity of adjacency lists, one slot per 4-neighbour.
const N_SMALLVEC_SIZE: usize = 4;

/// Largest number of targets [solve_tour] accepts. The DP table holds `(n + 1) * 2^(n + 1)`
/// entries for `n` targets. Configured bounds are clamped to 20 targets, see
/// [tour::MAX_TOUR_POINTS].
pub const DEFAULT_MAX_TOUR_TARGETS: usize = 16;
