//! Contact message intake.
//!
//! Messages are stored as submitted; the only normalization is the subject
//! falling back to "general" and a blank phone number becoming NULL.

use crate::{
    core::intake,
    entities::{ContactMessage, ContactSubject, contact_message},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::info;

/// Raw contact form fields as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    /// Sender name
    pub name: Option<String>,
    /// Reply address
    pub email: Option<String>,
    /// Optional phone number
    pub phone: Option<String>,
    /// Topic, general when missing
    pub subject: Option<String>,
    /// Message body
    pub message: Option<String>,
}

/// Stores a contact message.
pub async fn submit_contact<C>(
    db: &C,
    submission: ContactSubmission,
) -> Result<contact_message::Model>
where
    C: ConnectionTrait,
{
    let subject = submission
        .subject
        .as_deref()
        .and_then(ContactSubject::parse)
        .unwrap_or_default();

    let now = chrono::Utc::now();
    let model = contact_message::ActiveModel {
        name: Set(submission.name.unwrap_or_default()),
        email: Set(submission.email.unwrap_or_default()),
        phone: Set(intake::non_empty(submission.phone)),
        subject: Set(subject),
        message: Set(submission.message.unwrap_or_default()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    info!("Stored contact message {} ({:?})", result.id, result.subject);
    Ok(result)
}

/// All contact messages, newest first.
pub async fn list_contact_messages<C>(db: &C) -> Result<Vec<contact_message::Model>>
where
    C: ConnectionTrait,
{
    ContactMessage::find()
        .order_by_desc(contact_message::Column::CreatedAt)
        .order_by_desc(contact_message::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_submit_contact_stores_message() -> Result<()> {
        let db = setup_test_db().await?;
        let stored = submit_contact(
            &db,
            ContactSubmission {
                name: Some("Bilal".to_string()),
                email: Some("bilal@example.org".to_string()),
                phone: Some("0300-1234567".to_string()),
                subject: Some("partnership".to_string()),
                message: Some("Let's work together".to_string()),
            },
        )
        .await?;

        assert_eq!(stored.name, "Bilal");
        assert_eq!(stored.phone.as_deref(), Some("0300-1234567"));
        assert_eq!(stored.subject, ContactSubject::Partnership);

        let all = list_contact_messages(&db).await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], stored);
        Ok(())
    }

    #[tokio::test]
    async fn test_subject_defaults_to_general() -> Result<()> {
        let db = setup_test_db().await?;
        let missing = submit_contact(
            &db,
            ContactSubmission {
                name: Some("A".to_string()),
                email: Some("a@example.org".to_string()),
                message: Some("hi".to_string()),
                ..Default::default()
            },
        )
        .await?;
        let unknown = submit_contact(
            &db,
            ContactSubmission {
                name: Some("B".to_string()),
                email: Some("b@example.org".to_string()),
                subject: Some("complaint".to_string()),
                phone: Some(String::new()),
                message: Some("hi".to_string()),
            },
        )
        .await?;

        assert_eq!(missing.subject, ContactSubject::General);
        assert_eq!(unknown.subject, ContactSubject::General);
        assert_eq!(unknown.phone, None);
        Ok(())
    }
}
