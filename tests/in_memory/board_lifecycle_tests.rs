//! In-memory integration tests for board lifecycle operations.

use std::sync::Arc;

use crate::in_memory::helpers::{boards, catalog, scheduler, store};
use crate::test_helpers::{StubHolidaySource, date, job};
use palladio::scrum::{
    adapters::memory::InMemoryBoardStore,
    domain::{NewTask, PlannedDuration, StaffId, TaskId, TaskStatus, TemplateCatalog},
    ports::ScrumBoardStore,
    services::{TaskBoardError, TaskEdit},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_tasks_are_numbered_after_templates(
    store: Arc<InMemoryBoardStore>,
    catalog: TemplateCatalog,
) -> Result<(), eyre::Report> {
    let job_no = job("RRC/2025/001");
    let service = boards(&store, catalog, date("2025-01-06"));
    service.seed_board(&job_no).await?;

    let first = service
        .add_task(&job_no, NewTask::new("Authority submission"))
        .await?;
    let second = service
        .add_task(
            &job_no,
            NewTask::new("Client review")
                .with_planned_duration(PlannedDuration::new(2)?)
                .with_dependencies([first.id()]),
        )
        .await?;

    eyre::ensure!(first.id() == TaskId::new(1000), "first custom id");
    eyre::ensure!(second.id() == TaskId::new(1001), "second custom id");
    eyre::ensure!(second.status() == TaskStatus::UpNext, "custom tasks start up next");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_tasks_join_the_schedule(
    store: Arc<InMemoryBoardStore>,
    catalog: TemplateCatalog,
) -> Result<(), eyre::Report> {
    let today = date("2025-01-06");
    let job_no = job("RRC/2025/003");
    let service = boards(&store, catalog, today);
    let survey = service
        .add_task(
            &job_no,
            NewTask::new("Site survey").with_planned_duration(PlannedDuration::new(3)?),
        )
        .await?;
    let report = service
        .add_task(
            &job_no,
            NewTask::new("Survey report").with_dependencies([survey.id()]),
        )
        .await?;

    scheduler(&store, StubHolidaySource::default(), today)
        .equalize(&job_no)
        .await?;

    let board = store
        .load_board(&job_no)
        .await?
        .ok_or_else(|| eyre::eyre!("board should exist"))?;
    let due = |id: TaskId| board.task(id).and_then(|task| task.due_date());
    eyre::ensure!(due(survey.id()) == Some(date("2025-01-09")), "survey due date");
    eyre::ensure!(due(report.id()) == Some(date("2025-01-10")), "report due date");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_template_task_releases_its_dependents(
    store: Arc<InMemoryBoardStore>,
    catalog: TemplateCatalog,
) -> Result<(), eyre::Report> {
    let job_no = job("RRC/2025/001");
    let service = boards(&store, catalog, date("2025-01-06"));
    service.seed_board(&job_no).await?;

    service.delete_task(&job_no, TaskId::new(1)).await?;

    let board = store
        .load_board(&job_no)
        .await?
        .ok_or_else(|| eyre::eyre!("board should exist"))?;
    eyre::ensure!(board.len() == 3, "one task removed");
    eyre::ensure!(
        board
            .tasks()
            .iter()
            .all(|task| !task.dependencies().contains(&TaskId::new(1))),
        "no task may still depend on the deleted one"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_respect_template_minimums(
    store: Arc<InMemoryBoardStore>,
    catalog: TemplateCatalog,
) -> Result<(), eyre::Report> {
    let job_no = job("RRC/2025/001");
    let service = boards(&store, catalog, date("2025-01-06"));
    service.seed_board(&job_no).await?;

    let clamped = service
        .edit_task(
            &job_no,
            TaskId::new(4),
            TaskEdit::new()
                .with_planned_duration(PlannedDuration::ONE)
                .assign_to(StaffId::new(2)),
        )
        .await?;

    eyre::ensure!(clamped.duration_clamped, "duration should be clamped");
    eyre::ensure!(
        clamped.task.planned_duration().days() == 3,
        "clamped to the fixed minimum"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_unknown_boards_fail(
    store: Arc<InMemoryBoardStore>,
    catalog: TemplateCatalog,
) {
    let job_no = job("RRC/2025/404");
    let service = boards(&store, catalog, date("2025-01-06"));

    let moved = service
        .update_status(&job_no, TaskId::new(1), TaskStatus::Done)
        .await;
    let deleted = service.delete_task(&job_no, TaskId::new(1)).await;

    assert!(matches!(moved, Err(TaskBoardError::BoardNotFound(_))));
    assert!(matches!(deleted, Err(TaskBoardError::BoardNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn progress_tracks_completed_work(
    store: Arc<InMemoryBoardStore>,
    catalog: TemplateCatalog,
) -> Result<(), eyre::Report> {
    let job_no = job("RRC/2025/001");
    let service = boards(&store, catalog, date("2025-01-06"));
    service.seed_board(&job_no).await?;
    service
        .update_status(&job_no, TaskId::new(1), TaskStatus::Done)
        .await?;
    service
        .update_status(&job_no, TaskId::new(3), TaskStatus::Done)
        .await?;

    let progress = service.progress(&job_no).await?;

    eyre::ensure!(
        progress.title() == "Overall Scrum Progress: 2/4 tasks completed (50.0%).",
        "unexpected title {}",
        progress.title()
    );
    eyre::ensure!(progress.segments().len() == 2, "two departments completed work");
    Ok(())
}
