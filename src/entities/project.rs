//! Project entity - A fundraising project shown on the site.
//!
//! Projects carry a funding goal and the amount collected so far. The collected
//! amount is only changed by the administrative recompute, never by donation intake.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Currently collecting donations
    #[sea_orm(string_value = "active")]
    Active,
    /// Finished
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Announced but not yet started
    #[sea_orm(string_value = "upcoming")]
    #[default]
    Upcoming,
}

impl ProjectStatus {
    /// Human-readable label used by the pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// Project database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    /// Unique identifier for the project
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project title, unique across all projects
    #[sea_orm(unique)]
    pub title: String,
    /// Full description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Optional teaser shown on listing cards
    pub short_description: Option<String>,
    /// Funding target
    pub goal_amount: f64,
    /// Amount counted toward the goal so far
    pub collected_amount: f64,
    /// Currency code (e.g. `"PKR"`)
    pub currency: String,
    /// Day the project started
    pub start_date: Date,
    /// Day the project ended, if it has
    pub end_date: Option<Date>,
    /// Lifecycle status
    pub status: ProjectStatus,
    /// Free-form category used for filtering
    pub category: Option<String>,
    /// Where the project takes place
    pub location: Option<String>,
    /// Arbitrary per-project metrics, e.g. `{"meals_served": 1000}`
    pub impact_metrics: Option<Json>,
    /// When the project was created
    pub created_at: DateTimeUtc,
    /// When the project was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Project and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One project has many milestones
    #[sea_orm(has_many = "super::milestone::Entity")]
    Milestones,
    /// One project has many donations
    #[sea_orm(has_many = "super::donation::Entity")]
    Donations,
}

impl Related<super::milestone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestones.def()
    }
}

impl Related<super::donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
