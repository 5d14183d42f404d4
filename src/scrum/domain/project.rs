//! Project directory entries used to find related projects.

use super::JobNumber;
use serde::{Deserialize, Serialize};

/// A project known to the practice, with its building type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project job number.
    pub job_no: JobNumber,
    /// Building type such as `"Villa"` or `"Warehouse"`, when recorded.
    #[serde(default)]
    pub project_type: Option<String>,
}

impl Project {
    /// Creates a project of the given type.
    #[must_use]
    pub fn new(job_no: JobNumber, project_type: impl Into<String>) -> Self {
        Self {
            job_no,
            project_type: Some(project_type.into()),
        }
    }

    /// Creates a project without a recorded type.
    #[must_use]
    pub const fn untyped(job_no: JobNumber) -> Self {
        Self {
            job_no,
            project_type: None,
        }
    }
}

/// Other projects sharing the type of `job_no`, in directory order.
///
/// Returns nothing when `job_no` is not listed or has no type.
#[must_use]
pub fn similar_projects(projects: &[Project], job_no: &JobNumber) -> Vec<JobNumber> {
    let Some(project_type) = projects
        .iter()
        .find(|project| &project.job_no == job_no)
        .and_then(|project| project.project_type.as_deref())
    else {
        return Vec::new();
    };
    projects
        .iter()
        .filter(|project| {
            &project.job_no != job_no && project.project_type.as_deref() == Some(project_type)
        })
        .map(|project| project.job_no.clone())
        .collect()
}
