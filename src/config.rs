use crate::solver::Algorithm;
use crate::DEFAULT_MAX_TOUR_TARGETS;

/// Coefficients of the weighted target score `bounty * value - distance * path_cost`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    pub bounty: f64,
    pub distance: f64,
}

impl ScoreWeights {
    pub fn new(bounty: f64, distance: f64) -> ScoreWeights {
        ScoreWeights { bounty, distance }
    }

    pub fn score(&self, value: i32, distance: u32) -> f64 {
        self.bounty * value as f64 - self.distance * distance as f64
    }
}

impl Default for ScoreWeights {
    fn default() -> ScoreWeights {
        ScoreWeights {
            bounty: 1.0,
            distance: 0.3,
        }
    }
}

/// Caller-side settings of a [RoutePlanner](crate::planner::RoutePlanner).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub algorithm: Algorithm,
    pub weights: ScoreWeights,
    pub max_tour_targets: usize,
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig {
            algorithm: Algorithm::default(),
            weights: ScoreWeights::default(),
            max_tour_targets: DEFAULT_MAX_TOUR_TARGETS,
        }
    }
}

impl PlannerConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> PlannerConfig {
        self.algorithm = algorithm;
        self
    }
    pub fn with_weights(mut self, weights: ScoreWeights) -> PlannerConfig {
        self.weights = weights;
        self
    }
    pub fn with_max_tour_targets(mut self, max_tour_targets: usize) -> PlannerConfig {
        self.max_tour_targets = max_tour_targets;
        self
    }
}
