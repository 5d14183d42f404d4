//! Then steps for equalize scheduling BDD scenarios.

use super::world::{EqualizeWorld, run_async};
use crate::test_helpers::date;
use palladio::scrum::{
    domain::{IgnoredReason, TaskId},
    ports::ScrumBoardStore,
    services::SchedulingError,
};
use rstest_bdd_macros::then;

#[then(r#"task {id:u64} is due on "{due}""#)]
fn task_is_due_on(world: &EqualizeWorld, id: u64, due: String) -> Result<(), eyre::Report> {
    let board = run_async(world.store.load_board(&world.job_no))?
        .ok_or_else(|| eyre::eyre!("board was not stored"))?;
    let actual = board
        .task(TaskId::new(id))
        .ok_or_else(|| eyre::eyre!("task {id} missing from board"))?
        .due_date();

    eyre::ensure!(
        actual == Some(date(&due)),
        "expected task {id} due on {due}, found {actual:?}"
    );
    Ok(())
}

#[then("{count:usize} tasks were rescheduled")]
fn tasks_were_rescheduled(world: &EqualizeWorld, count: usize) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    eyre::ensure!(
        outcome.updated == count,
        "expected {count} rescheduled tasks, found {}",
        outcome.updated
    );
    Ok(())
}

#[then("{count:usize} dependency was ignored as a cycle")]
fn dependency_ignored_as_cycle(world: &EqualizeWorld, count: usize) -> Result<(), eyre::Report> {
    let outcome = world.outcome()?;
    let cycles = outcome
        .ignored_dependencies
        .iter()
        .filter(|edge| edge.reason == IgnoredReason::Cycle)
        .count();
    eyre::ensure!(cycles == count, "expected {count} cyclic edges, found {cycles}");
    Ok(())
}

#[then("the holiday data is reported as degraded")]
fn holiday_data_degraded(world: &EqualizeWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.outcome()?.holidays_degraded,
        "expected degraded holiday data"
    );
    Ok(())
}

#[then("equalizing fails because the board does not exist")]
fn equalize_fails_board_missing(world: &EqualizeWorld) -> Result<(), eyre::Report> {
    let result = world
        .outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("equalize has not run"))?;
    eyre::ensure!(
        matches!(result, Err(SchedulingError::BoardNotFound(_))),
        "expected BoardNotFound, got {result:?}"
    );
    Ok(())
}
