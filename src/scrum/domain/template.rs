//! Task templates used to seed project boards and bound durations.

use super::{Department, PlannedDuration, ScrumDomainError, ScrumTask, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Standard design task that every new project starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    /// Task id given to seeded tasks; template ids stay below 1000.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Owning department.
    #[serde(default)]
    pub department: Department,
    /// Default planned duration.
    #[serde(default)]
    pub duration: PlannedDuration,
    /// Minimum duration an edit may set.
    #[serde(default)]
    pub fixed_time: PlannedDuration,
    /// Template ids the task depends on.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

impl TaskTemplate {
    /// Builds an `Up Next` task from the template.
    ///
    /// The planned duration is the default duration, raised to the fixed
    /// minimum when the template declares a longer one.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError::EmptyTaskName`] for a blank template name.
    pub fn instantiate(&self, today: NaiveDate) -> Result<ScrumTask, ScrumDomainError> {
        let duration = self.duration.max(self.fixed_time);
        Ok(ScrumTask::new(self.id, self.name.as_str(), duration)?
            .with_department(self.department.clone())
            .with_dependencies(self.dependencies.iter().copied())
            .with_date_added(today))
    }
}

/// Explicit template lookup handed to services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateCatalog {
    templates: Vec<TaskTemplate>,
}

impl TemplateCatalog {
    /// Creates a catalog from templates in seeding order.
    #[must_use]
    pub const fn new(templates: Vec<TaskTemplate>) -> Self {
        Self { templates }
    }

    /// Finds the template a task was seeded from.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&TaskTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Smallest duration allowed for the task; one day for custom tasks.
    #[must_use]
    pub fn minimum_duration(&self, id: TaskId) -> PlannedDuration {
        self.find(id)
            .map_or(PlannedDuration::ONE, |template| template.fixed_time)
    }

    /// Builds one task per template.
    ///
    /// # Errors
    ///
    /// Returns [`ScrumDomainError`] when a template is invalid.
    pub fn instantiate_all(&self, today: NaiveDate) -> Result<Vec<ScrumTask>, ScrumDomainError> {
        self.templates
            .iter()
            .map(|template| template.instantiate(today))
            .collect()
    }

    /// Iterates templates in seeding order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskTemplate> {
        self.templates.iter()
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` when no templates are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
