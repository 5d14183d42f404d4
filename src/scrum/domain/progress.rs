//! Completion progress per department.

use super::{Department, ScrumTask};
use std::collections::BTreeMap;

/// Share of the board completed by one department.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSegment {
    /// Department name.
    pub department: Department,
    /// Completed tasks in the department.
    pub done: u32,
    /// `done / total * 100`, where `total` counts every task on the board.
    pub percent: f64,
}

/// Segmented progress bar data for a board.
///
/// An empty board yields the empty summary: no segments and 0%.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressSummary {
    segments: Vec<DepartmentSegment>,
    done: u32,
    total: u32,
    overall_percent: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "progress percentages are presentation values"
)]
fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(total) * 100.0
}

impl ProgressSummary {
    /// Aggregates completed tasks by department.
    ///
    /// Segments are ordered by department name.
    #[must_use]
    pub fn from_tasks(tasks: &[ScrumTask]) -> Self {
        let total = u32::try_from(tasks.len()).unwrap_or(u32::MAX);
        if total == 0 {
            return Self::default();
        }

        let mut completed: BTreeMap<&Department, u32> = BTreeMap::new();
        for task in tasks.iter().filter(|task| task.status().is_done()) {
            *completed.entry(task.department()).or_default() += 1;
        }

        let segments: Vec<DepartmentSegment> = completed
            .into_iter()
            .map(|(department, done)| DepartmentSegment {
                department: department.clone(),
                done,
                percent: percentage(done, total),
            })
            .collect();
        let done = segments.iter().map(|segment| segment.done).sum();

        Self {
            segments,
            done,
            total,
            overall_percent: percentage(done, total),
        }
    }

    /// Per-department segments.
    #[must_use]
    pub fn segments(&self) -> &[DepartmentSegment] {
        &self.segments
    }

    /// Completed tasks across all departments.
    #[must_use]
    pub const fn done(&self) -> u32 {
        self.done
    }

    /// Tasks on the board.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Overall completion percentage.
    #[must_use]
    pub const fn overall_percent(&self) -> f64 {
        self.overall_percent
    }

    /// Returns `true` for a board without tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Tooltip text for the progress bar.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "Overall Scrum Progress: {}/{} tasks completed ({:.1}%).",
            self.done, self.total, self.overall_percent
        )
    }
}
