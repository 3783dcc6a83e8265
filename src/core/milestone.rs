//! Milestone business logic.

use crate::{
    entities::{Milestone, Project, milestone, project},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// A milestone with the project it belongs to, if any.
#[derive(Debug, Clone)]
pub struct MilestoneEntry {
    /// The milestone
    pub milestone: milestone::Model,
    /// Its project, None for platform-wide milestones or after the project was deleted
    pub project: Option<project::Model>,
}

/// Records a milestone, optionally tied to a project.
pub async fn create_milestone<C>(
    db: &C,
    title: &str,
    description: &str,
    date_achieved: Option<Date>,
    project_id: Option<i64>,
) -> Result<milestone::Model>
where
    C: ConnectionTrait,
{
    if title.trim().is_empty() {
        return Err(Error::Validation {
            message: "Milestone title cannot be empty".to_string(),
        });
    }

    if let Some(id) = project_id {
        Project::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| Error::ProjectNotFound { id: id.to_string() })?;
    }

    let now = chrono::Utc::now();
    let milestone = milestone::ActiveModel {
        title: Set(title.trim().to_string()),
        description: Set(description.to_string()),
        date_achieved: Set(date_achieved.unwrap_or_else(|| now.date_naive())),
        project_id: Set(project_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    milestone.insert(db).await.map_err(Into::into)
}

/// Milestones, latest achievement first, each joined to its project.
///
/// `limit` of None returns every milestone.
pub async fn recent_milestones<C>(db: &C, limit: Option<u64>) -> Result<Vec<MilestoneEntry>>
where
    C: ConnectionTrait,
{
    let rows = Milestone::find()
        .find_also_related(Project)
        .order_by_desc(milestone::Column::DateAchieved)
        .order_by_desc(milestone::Column::Id)
        .limit(limit)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(milestone, project)| MilestoneEntry { milestone, project })
        .collect())
}
