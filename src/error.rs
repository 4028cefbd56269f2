use thiserror::Error;

/// Errors reported synchronously by planning queries. An unreachable destination is not an
/// error: it shows up as a path of length one, a [None] distance or a [None] tour.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A source, destination, reference or target index lies outside the grid.
    #[error("cell index {index} is out of bounds for a grid of {len} cells")]
    InvalidIndex { index: usize, len: usize },

    /// The exact tour solver was asked for more targets than its configured bound.
    #[error("tour over {count} targets exceeds the limit of {max}")]
    TooManyTargets { count: usize, max: usize },
}

pub type PlanResult<T> = Result<T, PlanError>;
