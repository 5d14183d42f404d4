//! Given steps for equalize scheduling BDD scenarios.

use super::world::{EqualizeWorld, TaskSpec};
use crate::test_helpers::date;
use palladio::calendar::domain::Holiday;
use rstest_bdd_macros::given;

#[given(r#"today is "{today}""#)]
fn today_is(world: &mut EqualizeWorld, today: String) {
    world.today = date(&today);
}

#[given(r#"task {id:u64} "{name}" takes {days:u32} working days"#)]
fn task_takes(world: &mut EqualizeWorld, id: u64, name: String, days: u32) {
    world.tasks.push(TaskSpec {
        id,
        name,
        days,
        dependencies: Vec::new(),
        assignee: None,
        done_due: None,
    });
}

#[given("task {id:u64} depends on task {dependency:u64}")]
fn task_depends_on(
    world: &mut EqualizeWorld,
    id: u64,
    dependency: u64,
) -> Result<(), eyre::Report> {
    world.task_mut(id)?.dependencies.push(dependency);
    Ok(())
}

#[given("task {id:u64} is assigned to staff {staff:u64}")]
fn task_is_assigned(world: &mut EqualizeWorld, id: u64, staff: u64) -> Result<(), eyre::Report> {
    world.task_mut(id)?.assignee = Some(staff);
    Ok(())
}

#[given(r#"task {id:u64} is done and was due on "{due}""#)]
fn task_is_done(world: &mut EqualizeWorld, id: u64, due: String) -> Result<(), eyre::Report> {
    world.task_mut(id)?.done_due = Some(date(&due));
    Ok(())
}

#[given(r#""{day}" is a public holiday"#)]
fn public_holiday(world: &mut EqualizeWorld, day: String) {
    world.holidays.push(Holiday::new(date(&day), "Public holiday"));
}

#[given("the holiday feed is unavailable")]
fn holiday_feed_unavailable(world: &mut EqualizeWorld) {
    world.feed_available = false;
}
