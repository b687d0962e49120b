//! Progress aggregation over a plan's tasks.
//!
//! Everything here is a pure projection of the current plan. Nothing is
//! cached; callers recompute after each mutation.

use serde::{Deserialize, Serialize};

use crate::models::{Phase, Plan, Task, TaskStatus};

/// Task counts by status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rollup {
    pub total: usize,
    pub done: usize,
    pub in_progress: usize,
    pub skipped: usize,
    pub pending: usize,
}

impl Rollup {
    fn count<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut acc, task| {
            acc.total += 1;
            match task.status {
                TaskStatus::Done => acc.done += 1,
                TaskStatus::InProgress => acc.in_progress += 1,
                TaskStatus::Skipped => acc.skipped += 1,
                TaskStatus::Pending => acc.pending += 1,
            }
            acc
        })
    }

    /// Share of done tasks as a whole percentage, rounded half up.
    pub fn percent(&self) -> u8 {
        percent_of(self.done, self.total)
    }

    /// True when there is at least one task and all of them are done.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done == self.total
    }
}

/// Counts every task of the plan by status.
pub fn rollup(plan: &Plan) -> Rollup {
    Rollup::count(plan.tasks().map(|task| task.as_ref()))
}

/// Counts the tasks of a single phase by status.
pub fn phase_rollup(phase: &Phase) -> Rollup {
    Rollup::count(phase.tasks.iter().map(|task| task.as_ref()))
}

/// Percentage of the plan's tasks that are done, in `0..=100`.
///
/// A plan without tasks reports 0.
pub fn percent_complete(plan: &Plan) -> u8 {
    rollup(plan).percent()
}

fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total);
    // round(done * 100 / total) with halves rounded up
    let rounded = ((done as u128 * 200 + total as u128) / (total as u128 * 2)) as u8;
    // 100 is reserved for plans where every task is done
    if done < total {
        rounded.min(99)
    } else {
        rounded
    }
}
