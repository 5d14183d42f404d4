//! Application services for scrum boards.

mod board;
mod overview;
mod scheduling;

pub use board::{
    EditOutcome, SimilarTaskOutcome, TaskBoardError, TaskBoardResult, TaskBoardService, TaskEdit,
};
pub use overview::{OverviewError, OverviewResult, OverviewService};
pub use scheduling::{
    EqualizeOutcome, ScheduleSettings, SchedulingError, SchedulingResult, SchedulingService,
};
