//! Explicit async task status for buttons that run a slow operation.
//!
//! DESIGN
//! ======
//! A button keeps a `TaskStatus` instead of inspecting its own CSS classes.
//! `start` refuses while an operation is pending, which is what guards
//! against rapid repeated clicks. Completion is applied with `finish`, so the
//! browser can drive it from a timer or a network future and tests can drive
//! it directly.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

/// Delay before the simulated unlock completes.
pub const UNLOCK_DELAY_MS: u32 = 1_500;

/// How long the unlock button shows its completed label before reverting.
pub const UNLOCKED_HOLD_MS: u32 = 2_000;

/// Lifecycle of one asynchronous operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskStatus<T, E = String> {
    Idle,
    Pending,
    Done(T),
    Failed(E),
}

impl<T, E> Default for TaskStatus<T, E> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T, E> TaskStatus<T, E> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Move to `Pending`. Returns `false`, changing nothing, if already pending.
    pub fn start(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Record the outcome. Ignored unless the task is pending.
    pub fn finish(&mut self, result: Result<T, E>) {
        if !self.is_pending() {
            return;
        }
        *self = match result {
            Ok(value) => Self::Done(value),
            Err(err) => Self::Failed(err),
        };
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Button labels for each task phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionLabels {
    pub idle: &'static str,
    pub pending: &'static str,
    pub done: &'static str,
}

impl ActionLabels {
    pub const UNLOCK: Self = Self {
        idle: "UNLOCK",
        pending: "UNLOCKING...",
        done: "UNLOCKED",
    };

    pub const RESERVE: Self = Self {
        idle: "Reserve",
        pending: "Reserving...",
        done: "Reserve",
    };

    /// Label for `status`. A failed task offers the idle label again.
    pub fn label<T, E>(&self, status: &TaskStatus<T, E>) -> &'static str {
        match status {
            TaskStatus::Idle | TaskStatus::Failed(_) => self.idle,
            TaskStatus::Pending => self.pending,
            TaskStatus::Done(_) => self.done,
        }
    }
}
