//! Donation entity - A donor's pledge toward a project.
//!
//! Donations are recorded unconfirmed. Confirmation happens out of band once the
//! payment has been verified manually, and is never reverted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How the donor intends to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Bank transfer
    #[sea_orm(string_value = "bank")]
    #[default]
    Bank,
    /// Mobile wallet (`JazzCash`/`EasyPaisa`)
    #[sea_orm(string_value = "ewallet")]
    Ewallet,
    /// Cash or cheque
    #[sea_orm(string_value = "cash")]
    Cash,
}

impl PaymentMethod {
    /// Parses a submitted form value, returning None for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "bank" => Some(Self::Bank),
            "ewallet" => Some(Self::Ewallet),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }
}

/// Donation database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "donations")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Project the donation is pledged to
    pub project_id: i64,
    /// Donor's name as entered on the form
    pub donor_name: String,
    /// Donor's email
    pub donor_email: String,
    /// Optional phone number
    pub donor_phone: Option<String>,
    /// Optional postal address
    #[sea_orm(column_type = "Text", nullable)]
    pub donor_address: Option<String>,
    /// Pledged amount, always positive
    pub amount: f64,
    /// Whether the donor wants to give every month
    pub recurring: bool,
    /// Whether the donor asked not to be named publicly
    pub anonymous: bool,
    /// How the donor intends to pay
    pub payment_method: PaymentMethod,
    /// Set once the payment has been verified manually
    pub confirmed: bool,
    /// When the pledge was made
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Donation and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each donation belongs to one project and goes away with it
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
