//! Milestone entity - An achievement of the platform or of a single project.
//!
//! The project reference is weak: deleting the project clears it instead of
//! removing the milestone.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Milestone database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "milestones")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short headline
    pub title: String,
    /// What was achieved
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Day the milestone was reached
    pub date_achieved: Date,
    /// Project this milestone belongs to, None for platform-wide milestones
    pub project_id: Option<i64>,
    /// When the milestone was created
    pub created_at: DateTimeUtc,
    /// When the milestone was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Milestone and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each milestone optionally belongs to one project
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "SetNull"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
