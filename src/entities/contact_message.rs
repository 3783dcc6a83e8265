//! Contact message entity - Messages sent through the contact form.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Topic chosen on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    /// General enquiry
    #[sea_orm(string_value = "general")]
    #[default]
    General,
    /// Question about donating
    #[sea_orm(string_value = "donation")]
    Donation,
    /// Comments on our work
    #[sea_orm(string_value = "feedback")]
    Feedback,
    /// Partnership proposal
    #[sea_orm(string_value = "partnership")]
    Partnership,
}

impl ContactSubject {
    /// Parses a submitted form value, returning None for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "general" => Some(Self::General),
            "donation" => Some(Self::Donation),
            "feedback" => Some(Self::Feedback),
            "partnership" => Some(Self::Partnership),
            _ => None,
        }
    }
}

/// Contact message database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Optional phone number
    pub phone: Option<String>,
    /// Topic of the message
    pub subject: ContactSubject,
    /// Message body
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// When the message was received
    pub created_at: DateTimeUtc,
    /// When the message was last modified
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
