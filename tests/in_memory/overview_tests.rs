//! In-memory integration tests for cross-project overviews.

use std::sync::Arc;

use crate::in_memory::helpers::{boards, catalog, overview, store};
use crate::test_helpers::{date, job};
use palladio::scrum::{
    adapters::memory::{InMemoryBoardStore, InMemoryStaffDirectory},
    domain::{DesignSummary, StaffId, StaffMember, TaskId, TaskStatus, TemplateCatalog},
    services::TaskEdit,
};
use rstest::rstest;

async fn populate(store: &Arc<InMemoryBoardStore>, catalog: TemplateCatalog) {
    let service = boards(store, catalog, date("2025-01-06"));
    let first = job("RRC/2025/001");
    let second = job("RRC/2025/002");
    service.seed_board(&first).await.expect("seed");
    service.seed_board(&second).await.expect("seed");

    let edits = [
        (
            &first,
            1,
            TaskEdit::new()
                .assign_to(StaffId::new(1))
                .with_due_date(date("2025-01-07"))
                .with_status(TaskStatus::InProgress),
        ),
        (
            &first,
            2,
            TaskEdit::new()
                .assign_to(StaffId::new(1))
                .with_due_date(date("2025-01-08")),
        ),
        (
            &second,
            1,
            TaskEdit::new()
                .assign_to(StaffId::new(2))
                .with_due_date(date("2025-01-10"))
                .with_status(TaskStatus::InProgress),
        ),
        (
            &second,
            2,
            TaskEdit::new()
                .with_due_date(date("2025-01-08"))
                .with_status(TaskStatus::Done),
        ),
    ];
    for (job_no, id, edit) in edits {
        service
            .edit_task(job_no, TaskId::new(id), edit)
            .await
            .expect("edit should succeed");
    }
}

fn directory() -> InMemoryStaffDirectory {
    InMemoryStaffDirectory::new(vec![
        StaffMember::new(StaffId::new(1), "Layla"),
        StaffMember::new(StaffId::new(2), "Omar"),
    ])
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summary_counts_across_projects(store: Arc<InMemoryBoardStore>, catalog: TemplateCatalog) {
    populate(&store, catalog).await;

    let summary = overview(&store, directory(), date("2025-01-08"))
        .summary()
        .await
        .expect("summary should succeed");

    assert_eq!(
        summary,
        DesignSummary {
            running: 1,
            due_today: 1,
            overdue: 1,
            planned: 5,
        }
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn agenda_groups_upcoming_work(store: Arc<InMemoryBoardStore>, catalog: TemplateCatalog) {
    populate(&store, catalog).await;

    let agenda = overview(&store, directory(), date("2025-01-08"))
        .agenda()
        .await
        .expect("agenda should succeed");

    assert_eq!(agenda.overdue.len(), 1);
    assert_eq!(agenda.today.len(), 1);
    assert!(agenda.tomorrow.is_empty());
    assert_eq!(
        agenda
            .day_after_tomorrow
            .iter()
            .map(|entry| entry.job_no.to_string())
            .collect::<Vec<_>>(),
        vec!["RRC/2025/002".to_owned()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn workload_lists_staff_then_unassigned(
    store: Arc<InMemoryBoardStore>,
    catalog: TemplateCatalog,
) {
    populate(&store, catalog).await;

    let workload = overview(&store, directory(), date("2025-01-08"))
        .workload()
        .await
        .expect("workload should succeed");

    let shape: Vec<(String, usize)> = workload
        .iter()
        .map(|group| (group.label.clone(), group.entries.len()))
        .collect();
    assert_eq!(
        shape,
        vec![
            ("Layla".to_owned(), 2),
            ("Omar".to_owned(), 1),
            ("Unassigned".to_owned(), 4),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn due_since_finds_recently_due_tasks(
    store: Arc<InMemoryBoardStore>,
    catalog: TemplateCatalog,
) {
    populate(&store, catalog).await;

    let due = overview(&store, directory(), date("2025-01-08"))
        .due_since(date("2025-01-07"))
        .await
        .expect("query should succeed");

    let ids: Vec<(String, u64)> = due
        .iter()
        .map(|entry| (entry.job_no.to_string(), entry.task_id.value()))
        .collect();
    assert_eq!(ids, vec![("RRC/2025/001".to_owned(), 1)]);
}
