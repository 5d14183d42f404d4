//! Dependency ordering within one assignee's task list.
//!
//! Ordering is a post-order depth-first traversal that starts from each task
//! in input order, so unrelated tasks keep their relative order. Cycles and
//! unknown ids never fail the traversal; the offending edges are reported in
//! [`DependencyResolution::ignored`] instead.

use super::{ScrumTask, TaskId};
use std::collections::HashMap;

/// Why a dependency edge played no part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoredReason {
    /// The dependency id is not among the tasks being ordered.
    Missing,
    /// The dependency belongs to another assignee's timeline.
    CrossAssignee,
    /// Following the edge would close a cycle.
    Cycle,
}

/// A dependency edge that was skipped while ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IgnoredDependency {
    /// Task declaring the dependency.
    pub task: TaskId,
    /// The dependency id.
    pub dependency: TaskId,
    /// Why it was skipped.
    pub reason: IgnoredReason,
}

/// Dependency-respecting task order plus the edges that were not honoured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyResolution {
    /// Task ids with every honoured dependency before its dependents.
    pub order: Vec<TaskId>,
    /// Edges that were skipped, in discovery order.
    pub ignored: Vec<IgnoredDependency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Emitted,
}

/// Orders tasks so that dependencies come first.
///
/// A task is marked before its dependencies are visited. An edge leading back
/// to a task still being visited is a [`IgnoredReason::Cycle`]; the cycle
/// resolves in visitation order, so for `A -> B -> A` with `A` first in the
/// input the order is `[B, A]`. Ids absent from `tasks` are reported as
/// [`IgnoredReason::Missing`]. When ids repeat, only the first task with a
/// given id is ordered.
#[must_use]
pub fn resolve_dependencies(tasks: &[&ScrumTask]) -> DependencyResolution {
    let mut index = HashMap::with_capacity(tasks.len());
    for task in tasks {
        index.entry(task.id()).or_insert(*task);
    }

    let mut resolver = Resolver {
        index,
        marks: HashMap::with_capacity(tasks.len()),
        resolution: DependencyResolution::default(),
    };
    for task in tasks {
        resolver.visit(task);
    }
    resolver.resolution
}

struct Resolver<'a> {
    index: HashMap<TaskId, &'a ScrumTask>,
    marks: HashMap<TaskId, Mark>,
    resolution: DependencyResolution,
}

impl<'a> Resolver<'a> {
    fn visit(&mut self, task: &'a ScrumTask) {
        if self.marks.contains_key(&task.id()) {
            return;
        }
        self.marks.insert(task.id(), Mark::Visiting);

        for dependency in task.dependencies() {
            let target = self.index.get(dependency).copied();
            let mark = self.marks.get(dependency).copied();
            match (target, mark) {
                (None, _) => self.ignore(task.id(), *dependency, IgnoredReason::Missing),
                (Some(_), Some(Mark::Visiting)) => {
                    self.ignore(task.id(), *dependency, IgnoredReason::Cycle);
                }
                (Some(_), Some(Mark::Emitted)) => {}
                (Some(next), None) => self.visit(next),
            }
        }

        self.marks.insert(task.id(), Mark::Emitted);
        self.resolution.order.push(task.id());
    }

    fn ignore(&mut self, task: TaskId, dependency: TaskId, reason: IgnoredReason) {
        self.resolution.ignored.push(IgnoredDependency {
            task,
            dependency,
            reason,
        });
    }
}
