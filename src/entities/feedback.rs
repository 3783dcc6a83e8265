//! Feedback entity - Testimonials left by beneficiaries, donors, or visitors.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Who the feedback comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    /// Someone helped by a project
    #[sea_orm(string_value = "beneficiary")]
    Beneficiary,
    /// Someone who donated
    #[sea_orm(string_value = "donor")]
    Donor,
    /// Anyone else
    #[sea_orm(string_value = "general")]
    #[default]
    General,
}

impl FeedbackType {
    /// Parses a submitted form value, returning None for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "beneficiary" => Some(Self::Beneficiary),
            "donor" => Some(Self::Donor),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    /// Human-readable label used by the pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beneficiary => "Beneficiary",
            Self::Donor => "Donor",
            Self::General => "General",
        }
    }
}

/// Feedback database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Optional author name
    pub name: Option<String>,
    /// Optional author email
    pub email: Option<String>,
    /// Who the feedback comes from
    pub feedback_type: FeedbackType,
    /// The testimonial itself, never empty
    #[sea_orm(column_type = "Text")]
    pub feedback_text: String,
    /// Star rating from 1 to 5
    pub rating: i16,
    /// When the feedback was submitted
    pub created_at: DateTimeUtc,
    /// When the feedback was last modified
    pub updated_at: DateTimeUtc,
}

/// Feedback has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
