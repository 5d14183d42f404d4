//! Cross-project views of open design tasks.

use super::{
    Department, JobNumber, ScrumBoard, ScrumTask, StaffId, StaffRoster, TaskId, TaskStatus,
    UNASSIGNED_LABEL,
};
use chrono::{Days, NaiveDate};

/// An open task together with the project it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEntry {
    /// Owning project.
    pub job_no: JobNumber,
    /// Task id within the project.
    pub task_id: TaskId,
    /// Task name.
    pub name: String,
    /// Board status.
    pub status: TaskStatus,
    /// Assignee, if any.
    pub assignee: Option<StaffId>,
    /// Department tag.
    pub department: Department,
    /// Due date, if scheduled.
    pub due_date: Option<NaiveDate>,
}

impl AgendaEntry {
    fn from_task(job_no: &JobNumber, task: &ScrumTask) -> Self {
        Self {
            job_no: job_no.clone(),
            task_id: task.id(),
            name: task.name().to_owned(),
            status: task.status(),
            assignee: task.assignee(),
            department: task.department().clone(),
            due_date: task.due_date(),
        }
    }
}

fn open_entries<'a>(
    boards: impl IntoIterator<Item = &'a ScrumBoard>,
) -> impl Iterator<Item = AgendaEntry> {
    boards.into_iter().flat_map(|board| {
        board
            .tasks()
            .iter()
            .filter(|task| !task.status().is_done())
            .map(move |task| AgendaEntry::from_task(board.job_no(), task))
    })
}

fn days_after(today: NaiveDate, days: u64) -> Option<NaiveDate> {
    today.checked_add_days(Days::new(days))
}

/// Headline counts of open tasks across all projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesignSummary {
    /// In progress and neither overdue nor due today.
    pub running: u32,
    /// Due today.
    pub due_today: u32,
    /// Due before today.
    pub overdue: u32,
    /// `Up Next` or `To Do`.
    pub planned: u32,
}

impl DesignSummary {
    /// Counts open tasks relative to `today`.
    ///
    /// `planned` is counted independently; the remaining counters are
    /// exclusive and checked in order overdue, due today, running.
    #[must_use]
    pub fn from_boards<'a>(
        boards: impl IntoIterator<Item = &'a ScrumBoard>,
        today: NaiveDate,
    ) -> Self {
        let mut summary = Self::default();
        for entry in open_entries(boards) {
            if matches!(entry.status, TaskStatus::UpNext | TaskStatus::ToDo) {
                summary.planned += 1;
            }
            match entry.due_date {
                Some(due) if due < today => summary.overdue += 1,
                Some(due) if due == today => summary.due_today += 1,
                _ if entry.status == TaskStatus::InProgress => summary.running += 1,
                _ => {}
            }
        }
        summary
    }
}

/// Open dated tasks grouped by how soon they are due.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agenda {
    /// Due before today.
    pub overdue: Vec<AgendaEntry>,
    /// Due today.
    pub today: Vec<AgendaEntry>,
    /// Due tomorrow.
    pub tomorrow: Vec<AgendaEntry>,
    /// Due the day after tomorrow.
    pub day_after_tomorrow: Vec<AgendaEntry>,
    /// Due later, up to seven days from today.
    pub later_this_week: Vec<AgendaEntry>,
}

impl Agenda {
    /// Builds the agenda for `today`. Each group is sorted by due date.
    #[must_use]
    pub fn from_boards<'a>(
        boards: impl IntoIterator<Item = &'a ScrumBoard>,
        today: NaiveDate,
    ) -> Self {
        let mut dated: Vec<(NaiveDate, AgendaEntry)> = open_entries(boards)
            .filter_map(|entry| entry.due_date.map(|due| (due, entry)))
            .collect();
        dated.sort_by_key(|(due, _)| *due);

        let tomorrow = days_after(today, 1);
        let day_after = days_after(today, 2);
        let week_end = days_after(today, 7);

        let mut agenda = Self::default();
        for (due, entry) in dated {
            if due < today {
                agenda.overdue.push(entry);
            } else if due == today {
                agenda.today.push(entry);
            } else if Some(due) == tomorrow {
                agenda.tomorrow.push(entry);
            } else if Some(due) == day_after {
                agenda.day_after_tomorrow.push(entry);
            } else if week_end.is_some_and(|limit| due <= limit) {
                agenda.later_this_week.push(entry);
            }
        }
        agenda
    }

    /// Returns `true` when no group has entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty()
            && self.today.is_empty()
            && self.tomorrow.is_empty()
            && self.day_after_tomorrow.is_empty()
            && self.later_this_week.is_empty()
    }
}

/// Open tasks of one assignee across all projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeWorkload {
    /// Assignee, or `None` for unassigned work.
    pub assignee: Option<StaffId>,
    /// Display label.
    pub label: String,
    /// Tasks sorted by due date, undated tasks last.
    pub entries: Vec<AgendaEntry>,
}

/// Groups open tasks by assignee.
///
/// Groups follow directory order with unassigned work last; empty groups are
/// omitted, as are tasks whose assignee is not in the directory.
#[must_use]
pub fn workload_by_assignee<'a>(
    boards: impl IntoIterator<Item = &'a ScrumBoard>,
    roster: &StaffRoster,
) -> Vec<AssigneeWorkload> {
    let mut groups: Vec<AssigneeWorkload> = roster
        .members()
        .iter()
        .map(|member| AssigneeWorkload {
            assignee: Some(member.id),
            label: member.name.clone(),
            entries: Vec::new(),
        })
        .collect();
    groups.push(AssigneeWorkload {
        assignee: None,
        label: UNASSIGNED_LABEL.to_owned(),
        entries: Vec::new(),
    });

    for entry in open_entries(boards) {
        if let Some(group) = groups
            .iter_mut()
            .find(|group| group.assignee == entry.assignee)
        {
            group.entries.push(entry);
        }
    }

    groups.retain(|group| !group.entries.is_empty());
    for group in &mut groups {
        group
            .entries
            .sort_by_key(|entry| (entry.due_date.is_none(), entry.due_date));
    }
    groups
}

/// Open tasks whose due date falls in `[since, until)`.
#[must_use]
pub fn due_between<'a>(
    boards: impl IntoIterator<Item = &'a ScrumBoard>,
    since: NaiveDate,
    until: NaiveDate,
) -> Vec<AgendaEntry> {
    open_entries(boards)
        .filter(|entry| {
            entry
                .due_date
                .is_some_and(|due| due >= since && due < until)
        })
        .collect()
}
