//! Domain model for design-task boards and scheduling.
//!
//! Boards, tasks and templates are plain values; ordering, scheduling,
//! progress and agenda views are pure functions over them. Persistence and
//! the holiday feed stay outside this boundary.

mod agenda;
mod board;
mod dependency;
mod error;
mod ids;
mod progress;
mod project;
mod schedule;
mod staff;
mod task;
mod template;

pub use agenda::{
    Agenda, AgendaEntry, AssigneeWorkload, DesignSummary, due_between, workload_by_assignee,
};
pub use board::{CUSTOM_TASK_ID_FLOOR, NewTask, ScrumBoard};
pub use dependency::{
    DependencyResolution, IgnoredDependency, IgnoredReason, resolve_dependencies,
};
pub use error::{ParseTaskStatusError, ScrumDomainError};
pub use ids::{Department, JobNumber, StaffId, TaskId};
pub use progress::{DepartmentSegment, ProgressSummary};
pub use project::{Project, similar_projects};
pub use schedule::{
    AssigneeBucket, BucketKey, DueDateAssignment, SchedulePlan, partition_by_assignee,
    plan_schedule,
};
pub use staff::{StaffMember, StaffRoster, UNASSIGNED_LABEL};
pub use task::{PlannedDuration, ScrumTask, TaskStatus};
pub use template::{TaskTemplate, TemplateCatalog};
