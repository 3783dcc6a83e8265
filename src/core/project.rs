//! Project business logic - Listing, progress, and administrative upkeep of projects.
//!
//! The read functions back the home, projects, impacts, and donate pages. The
//! write functions are administrative: intake never touches a project row, so
//! `collected_amount` only changes through [`recompute_collected_amount`].

use crate::{
    entities::{Donation, Milestone, Project, donation, milestone, project, project::ProjectStatus},
    errors::{Error, Result},
};
use sea_orm::{
    QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*, sea_query::Expr,
};
use serde_json::Value;
use tracing::info;

/// Fields needed to create a project. Everything else takes the column default.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    /// Unique title
    pub title: String,
    /// Full description
    pub description: String,
    /// Optional teaser
    pub short_description: Option<String>,
    /// Funding target, must not be negative
    pub goal_amount: f64,
    /// Currency code, `"PKR"` when None
    pub currency: Option<String>,
    /// Lifecycle status
    pub status: ProjectStatus,
    /// Optional category
    pub category: Option<String>,
    /// Optional location
    pub location: Option<String>,
    /// Start day, today when None
    pub start_date: Option<Date>,
    /// Optional end day
    pub end_date: Option<Date>,
    /// Free-form figures such as `{"wells_dug": 12}`
    pub impact_metrics: Option<Value>,
}

/// A project together with its funding progress.
#[derive(Debug, Clone)]
pub struct ProjectProgress {
    /// The project
    pub project: project::Model,
    /// `collected_amount / goal_amount * 100`
    pub progress_percent: f64,
}

/// Creates a project with a zero collected amount.
pub async fn create_project<C>(db: &C, new: NewProject) -> Result<project::Model>
where
    C: ConnectionTrait,
{
    if new.title.trim().is_empty() {
        return Err(Error::Validation {
            message: "Project title cannot be empty".to_string(),
        });
    }

    if !new.goal_amount.is_finite() || new.goal_amount < 0.0 {
        return Err(Error::InvalidAmount {
            amount: new.goal_amount,
        });
    }

    let now = chrono::Utc::now();
    let project = project::ActiveModel {
        title: Set(new.title.trim().to_string()),
        description: Set(new.description),
        short_description: Set(new.short_description),
        goal_amount: Set(new.goal_amount),
        collected_amount: Set(0.0),
        currency: Set(new.currency.unwrap_or_else(|| "PKR".to_string())),
        start_date: Set(new.start_date.unwrap_or_else(|| now.date_naive())),
        end_date: Set(new.end_date),
        status: Set(new.status),
        category: Set(new.category),
        location: Set(new.location),
        impact_metrics: Set(new.impact_metrics),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = project.insert(db).await?;
    info!("Created project '{}' ({})", result.title, result.id);
    Ok(result)
}

/// Finds a project by its ID.
pub async fn get_project_by_id<C>(db: &C, project_id: i64) -> Result<Option<project::Model>>
where
    C: ConnectionTrait,
{
    Project::find_by_id(project_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Projects currently collecting donations, newest first.
pub async fn list_active_projects<C>(db: &C) -> Result<Vec<project::Model>>
where
    C: ConnectionTrait,
{
    list_projects_by_status(db, ProjectStatus::Active).await
}

/// Projects with the given status.
///
/// Completed projects are ordered by end date (latest first); every other
/// status is ordered by creation time (newest first).
pub async fn list_projects_by_status<C>(
    db: &C,
    status: ProjectStatus,
) -> Result<Vec<project::Model>>
where
    C: ConnectionTrait,
{
    let query = Project::find().filter(project::Column::Status.eq(status));

    let query = match status {
        ProjectStatus::Completed => query.order_by_desc(project::Column::EndDate),
        ProjectStatus::Active | ProjectStatus::Upcoming => query,
    };

    query
        .order_by_desc(project::Column::CreatedAt)
        .order_by_desc(project::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Every project paired with its progress percentage, in creation order.
pub async fn list_all_projects_with_progress<C>(db: &C) -> Result<Vec<ProjectProgress>>
where
    C: ConnectionTrait,
{
    let projects = Project::find()
        .order_by_asc(project::Column::Id)
        .all(db)
        .await?;

    Ok(projects
        .into_iter()
        .map(|project| ProjectProgress {
            progress_percent: progress_percent(&project),
            project,
        })
        .collect())
}

/// Distinct non-empty categories across all projects, sorted.
pub async fn distinct_categories<C>(db: &C) -> Result<Vec<String>>
where
    C: ConnectionTrait,
{
    Project::find()
        .select_only()
        .column(project::Column::Category)
        .distinct()
        .filter(project::Column::Category.is_not_null())
        .filter(project::Column::Category.ne(""))
        .order_by_asc(project::Column::Category)
        .into_tuple::<String>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Funding progress of a project as a percentage of its goal.
#[must_use]
pub fn progress_percent(project: &project::Model) -> f64 {
    calculate_progress(project.collected_amount, project.goal_amount)
}

/// `collected / goal * 100`, or zero when the goal is zero.
#[must_use]
pub fn calculate_progress(collected: f64, goal: f64) -> f64 {
    if goal == 0.0 {
        return 0.0;
    }

    (collected / goal) * 100.0
}

/// Rounds a money value to whole cents.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Sets `collected_amount` to the sum of the project's confirmed donations,
/// rounded to cents.
///
/// Unconfirmed pledges are ignored. This is the only code path that writes
/// `collected_amount` after creation.
pub async fn recompute_collected_amount(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<project::Model> {
    let txn = db.begin().await?;

    let project = Project::find_by_id(project_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::ProjectNotFound {
            id: project_id.to_string(),
        })?;

    let confirmed = Donation::find()
        .filter(donation::Column::ProjectId.eq(project_id))
        .filter(donation::Column::Confirmed.eq(true))
        .all(&txn)
        .await?;

    let total = round_to_cents(confirmed.iter().map(|d| d.amount).sum());

    let mut active: project::ActiveModel = project.into();
    active.collected_amount = Set(total);
    active.updated_at = Set(chrono::Utc::now());
    let updated = active.update(&txn).await?;

    txn.commit().await?;

    info!(
        "Recomputed collected amount for project {}: {} from {} confirmed donations",
        project_id,
        total,
        confirmed.len()
    );
    Ok(updated)
}

/// Deletes a project in one transaction.
///
/// Milestones survive with their project reference cleared; donations are
/// deleted along with the project.
pub async fn delete_project(db: &DatabaseConnection, project_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    Project::find_by_id(project_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::ProjectNotFound {
            id: project_id.to_string(),
        })?;

    Milestone::update_many()
        .col_expr(milestone::Column::ProjectId, Expr::value(Option::<i64>::None))
        .filter(milestone::Column::ProjectId.eq(project_id))
        .exec(&txn)
        .await?;

    let removed = Donation::delete_many()
        .filter(donation::Column::ProjectId.eq(project_id))
        .exec(&txn)
        .await?;

    Project::delete_by_id(project_id).exec(&txn).await?;

    txn.commit().await?;

    info!(
        "Deleted project {} and {} of its donations",
        project_id, removed.rows_affected
    );
    Ok(())
}
