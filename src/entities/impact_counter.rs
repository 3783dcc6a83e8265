//! Impact counter entity - Site-wide impact figures such as "Meals Served".

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Impact counter database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "impact_counters")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Counter name, e.g. `"meals_served"` or `"Trees Planted"`
    #[sea_orm(unique)]
    pub name: String,
    /// Current figure, never negative
    pub value: i64,
    /// Icon identifier used by the pages (e.g. `"bi-egg-fried"`)
    pub icon_class: String,
    /// When the counter was created
    pub created_at: DateTimeUtc,
    /// When the counter was last modified
    pub updated_at: DateTimeUtc,
}

/// `ImpactCounter` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
