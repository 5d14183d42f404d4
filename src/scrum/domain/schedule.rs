//! Per-assignee due-date planning ("equalize").
//!
//! Each assignee is a single-resource queue: their open tasks are ordered by
//! dependency and laid end to end on the working calendar, starting from the
//! same day. Different assignees run in parallel and never wait for each
//! other, which also means a dependency on another assignee's task is not
//! honoured; such edges are reported as [`IgnoredReason::CrossAssignee`].

use super::{
    IgnoredDependency, IgnoredReason, ScrumBoard, ScrumTask, StaffId, TaskId, resolve_dependencies,
};
use crate::calendar::domain::{CalendarError, WorkingCalendar};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// Timeline a task is scheduled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    /// Tasks assigned to a staff member.
    Staff(StaffId),
    /// Tasks with no assignee share one timeline.
    Unassigned,
}

impl From<Option<StaffId>> for BucketKey {
    fn from(assignee: Option<StaffId>) -> Self {
        assignee.map_or(Self::Unassigned, Self::Staff)
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Staff(id) => write!(f, "staff {id}"),
            Self::Unassigned => f.write_str("unassigned"),
        }
    }
}

/// Open tasks of one assignee in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeBucket<'a> {
    /// The assignee.
    pub key: BucketKey,
    /// Tasks that still need scheduling.
    pub tasks: Vec<&'a ScrumTask>,
}

/// Groups every task that is not `Done` by assignee.
///
/// Buckets appear in order of first appearance.
#[must_use]
pub fn partition_by_assignee(tasks: &[ScrumTask]) -> Vec<AssigneeBucket<'_>> {
    let mut buckets: Vec<AssigneeBucket<'_>> = Vec::new();
    let mut positions: HashMap<BucketKey, usize> = HashMap::new();
    for task in tasks.iter().filter(|task| !task.status().is_done()) {
        let key = BucketKey::from(task.assignee());
        let position = *positions.entry(key).or_insert_with(|| {
            buckets.push(AssigneeBucket {
                key,
                tasks: Vec::new(),
            });
            buckets.len() - 1
        });
        if let Some(bucket) = buckets.get_mut(position) {
            bucket.tasks.push(task);
        }
    }
    buckets
}

/// New due date for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDateAssignment {
    /// Task being rescheduled.
    pub task: TaskId,
    /// Timeline it was placed on.
    pub bucket: BucketKey,
    /// Computed due date.
    pub due_date: NaiveDate,
}

/// Output of [`plan_schedule`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulePlan {
    assignments: Vec<DueDateAssignment>,
    ignored: Vec<IgnoredDependency>,
}

impl SchedulePlan {
    /// Assignments in timeline order, bucket by bucket.
    #[must_use]
    pub fn assignments(&self) -> &[DueDateAssignment] {
        &self.assignments
    }

    /// Dependency edges that did not influence the order.
    #[must_use]
    pub fn ignored(&self) -> &[IgnoredDependency] {
        &self.ignored
    }

    /// Planned due date of a task, if it was scheduled.
    #[must_use]
    pub fn due_date_of(&self, task: TaskId) -> Option<NaiveDate> {
        self.assignments
            .iter()
            .find(|assignment| assignment.task == task)
            .map(|assignment| assignment.due_date)
    }

    /// Number of scheduled tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` when nothing was scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Writes the planned due dates onto the board.
    ///
    /// `Done` tasks are never touched. Returns the number of tasks updated.
    pub fn apply(&self, board: &mut ScrumBoard) -> usize {
        let mut updated = 0;
        for assignment in &self.assignments {
            if let Some(task) = board.task_mut(assignment.task)
                && !task.status().is_done()
            {
                task.set_due_date(Some(assignment.due_date));
                updated += 1;
            }
        }
        updated
    }
}

/// Computes due dates for every open task.
///
/// Within a bucket the cursor starts at `start`; each task is due
/// `planned_duration` working days after the cursor, and its due date becomes
/// the cursor for the next task. Dependencies on `Done` tasks are already
/// satisfied and are not reported.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if a due date would fall past
/// the last representable date.
pub fn plan_schedule(
    tasks: &[ScrumTask],
    calendar: &WorkingCalendar,
    start: NaiveDate,
) -> Result<SchedulePlan, CalendarError> {
    let owners: HashMap<TaskId, &ScrumTask> = tasks.iter().map(|task| (task.id(), task)).collect();
    let mut plan = SchedulePlan::default();

    for bucket in partition_by_assignee(tasks) {
        let resolution = resolve_dependencies(&bucket.tasks);
        plan.ignored.extend(
            resolution
                .ignored
                .into_iter()
                .filter_map(|edge| classify_edge(edge, &owners)),
        );

        let durations: HashMap<TaskId, u32> = bucket
            .tasks
            .iter()
            .map(|task| (task.id(), task.planned_duration().days()))
            .collect();

        let mut cursor = start;
        for task in resolution.order {
            let Some(days) = durations.get(&task).copied() else {
                continue;
            };
            let due_date = calendar.advance(cursor, days)?;
            plan.assignments.push(DueDateAssignment {
                task,
                bucket: bucket.key,
                due_date,
            });
            cursor = due_date;
        }
    }

    Ok(plan)
}

/// Refines a bucket-local `Missing` edge using the whole board.
fn classify_edge(
    edge: IgnoredDependency,
    owners: &HashMap<TaskId, &ScrumTask>,
) -> Option<IgnoredDependency> {
    if edge.reason != IgnoredReason::Missing {
        return Some(edge);
    }
    match owners.get(&edge.dependency) {
        None => Some(edge),
        Some(dependency) if dependency.status().is_done() => None,
        Some(_) => Some(IgnoredDependency {
            reason: IgnoredReason::CrossAssignee,
            ..edge
        }),
    }
}
