//! When steps for equalize scheduling BDD scenarios.

use super::world::{EqualizeWorld, run_async};
use eyre::WrapErr;
use palladio::scrum::{
    domain::{JobNumber, ScrumBoard, ScrumTask},
    ports::ScrumBoardStore,
};
use rstest_bdd_macros::when;

fn store_board(world: &EqualizeWorld) -> Result<(), eyre::Report> {
    let tasks = world
        .tasks
        .iter()
        .map(super::world::TaskSpec::build)
        .collect::<Result<Vec<ScrumTask>, _>>()?;
    let board = ScrumBoard::with_tasks(world.job_no.clone(), tasks);
    run_async(world.store.save_board(&board)).wrap_err("store scenario board")?;
    Ok(())
}

#[when("the board is equalized")]
fn board_is_equalized(world: &mut EqualizeWorld) -> Result<(), eyre::Report> {
    store_board(world)?;
    let result = run_async(world.scheduler().equalize(&world.job_no));
    world.outcome = Some(result);
    Ok(())
}

#[when(r#"project "{job_no}" is equalized"#)]
fn project_is_equalized(world: &mut EqualizeWorld, job_no: String) -> Result<(), eyre::Report> {
    let target = JobNumber::new(job_no)?;
    let result = run_async(world.scheduler().equalize(&target));
    world.outcome = Some(result);
    Ok(())
}
