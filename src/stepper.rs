use std::collections::VecDeque;

/// Whether a [PathStepper] is currently following a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepState {
    #[default]
    Idle,
    Moving,
}

/// Follows a path one cell per external tick. The planner hands out complete paths; the stepper
/// only keeps the cells still ahead, so dropping them is all cancelling takes. A new path is
/// refused while the previous one is being walked.
#[derive(Clone, Debug, Default)]
pub struct PathStepper {
    position: usize,
    ahead: VecDeque<usize>,
    state: StepState,
    completed: bool,
}

impl PathStepper {
    pub fn new(position: usize) -> PathStepper {
        PathStepper {
            position,
            ..Default::default()
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }
    pub fn state(&self) -> StepState {
        self.state
    }
    pub fn is_busy(&self) -> bool {
        self.state == StepState::Moving
    }
    /// True once the last accepted path has been walked to its end, until the next one starts.
    pub fn is_completed(&self) -> bool {
        self.completed
    }
    /// Cells that are still to be entered.
    pub fn remaining(&self) -> usize {
        self.ahead.len()
    }

    /// Starts walking `path`, which has to begin at the current position. Returns false without
    /// changing anything when busy, when the path has no step to take or when it starts
    /// elsewhere.
    pub fn start(&mut self, path: &[usize]) -> bool {
        if self.is_busy() || path.len() <= 1 || path[0] != self.position {
            return false;
        }
        self.ahead = path[1..].iter().copied().collect();
        self.state = StepState::Moving;
        self.completed = false;
        true
    }

    /// Advances one cell and returns the new position, [None] when idle.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.is_busy() {
            return None;
        }
        let next = self.ahead.pop_front()?;
        self.position = next;
        if self.ahead.is_empty() {
            self.state = StepState::Idle;
            self.completed = true;
        }
        Some(next)
    }

    /// Stops at the current cell and discards the rest of the path.
    pub fn cancel(&mut self) {
        self.ahead.clear();
        self.state = StepState::Idle;
    }
}
