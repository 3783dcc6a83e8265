//! Feedback business logic - Testimonial intake and listing.
//!
//! Submissions are never de-duplicated: every valid post creates a row. The
//! only hard rejection is an empty testimonial; a bad rating or an unknown
//! feedback type falls back to its default instead.

use crate::{
    core::intake,
    entities::{Feedback, FeedbackType, feedback},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::Deserialize;
use tracing::info;

/// Raw feedback form fields as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackSubmission {
    /// Optional author name
    pub name: Option<String>,
    /// Optional author email
    pub email: Option<String>,
    /// `beneficiary`, `donor` or `general`
    pub feedback_type: Option<String>,
    /// Testimonial text, required
    pub feedback_text: Option<String>,
    /// Star rating as text
    pub rating: Option<String>,
}

/// Validates and stores a feedback submission.
///
/// # Errors
/// `Error::Validation` when the text is empty after trimming; nothing is stored.
pub async fn submit_feedback<C>(db: &C, submission: FeedbackSubmission) -> Result<feedback::Model>
where
    C: ConnectionTrait,
{
    let text = submission
        .feedback_text
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if text.is_empty() {
        return Err(Error::Validation {
            message: "Feedback cannot be empty.".to_string(),
        });
    }

    let feedback_type = submission
        .feedback_type
        .as_deref()
        .and_then(FeedbackType::parse)
        .unwrap_or_default();
    let rating = intake::parse_rating(submission.rating.as_deref());

    let now = chrono::Utc::now();
    let model = feedback::ActiveModel {
        name: Set(intake::non_empty(submission.name)),
        email: Set(intake::non_empty(submission.email)),
        feedback_type: Set(feedback_type),
        feedback_text: Set(text.to_string()),
        rating: Set(rating),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    info!(
        "Stored {} feedback {} with rating {}",
        result.feedback_type.label(),
        result.id,
        result.rating
    );
    Ok(result)
}

/// All feedback, newest first.
pub async fn list_feedback<C>(db: &C) -> Result<Vec<feedback::Model>>
where
    C: ConnectionTrait,
{
    Feedback::find()
        .order_by_desc(feedback::Column::CreatedAt)
        .order_by_desc(feedback::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// The newest `limit` feedback entries whose type is one of `types`.
pub async fn recent_testimonials<C>(
    db: &C,
    types: &[FeedbackType],
    limit: u64,
) -> Result<Vec<feedback::Model>>
where
    C: ConnectionTrait,
{
    Feedback::find()
        .filter(feedback::Column::FeedbackType.is_in(types.iter().copied()))
        .order_by_desc(feedback::Column::CreatedAt)
        .order_by_desc(feedback::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn submission(text: &str, rating: Option<&str>) -> FeedbackSubmission {
        FeedbackSubmission {
            name: Some("Ayesha".to_string()),
            email: Some("ayesha@example.org".to_string()),
            feedback_type: Some("donor".to_string()),
            feedback_text: Some(text.to_string()),
            rating: rating.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_empty_feedback_is_rejected() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        for text in ["", "   ", "\n\t"] {
            let result = submit_feedback(&db, submission(text, Some("4"))).await;
            assert!(matches!(result, Err(Error::Validation { .. })));
        }

        let result = submit_feedback(&db, FeedbackSubmission::default()).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_feedback_persists_nothing() -> Result<()> {
        let db = setup_test_db().await?;
        let result = submit_feedback(&db, submission("  ", None)).await;
        assert!(result.is_err());
        assert!(list_feedback(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_feedback_stores_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let stored = submit_feedback(&db, submission("  Great work!  ", Some("4"))).await?;

        assert_eq!(stored.feedback_text, "Great work!");
        assert_eq!(stored.rating, 4);
        assert_eq!(stored.feedback_type, FeedbackType::Donor);
        assert_eq!(stored.name.as_deref(), Some("Ayesha"));
        assert_eq!(stored.email.as_deref(), Some("ayesha@example.org"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unparsable_rating_becomes_default() -> Result<()> {
        let db = setup_test_db().await?;
        let stored = submit_feedback(&db, submission("Nice", Some("abc"))).await?;
        assert_eq!(stored.rating, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_rating_becomes_default() -> Result<()> {
        let db = setup_test_db().await?;
        let high = submit_feedback(&db, submission("Nice", Some("7"))).await?;
        let low = submit_feedback(&db, submission("Nice", Some("0"))).await?;
        assert_eq!(high.rating, 5);
        assert_eq!(low.rating, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_defaults_for_missing_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let stored = submit_feedback(
            &db,
            FeedbackSubmission {
                name: Some(String::new()),
                feedback_type: Some("stranger".to_string()),
                feedback_text: Some("Hello".to_string()),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(stored.name, None);
        assert_eq!(stored.email, None);
        assert_eq!(stored.feedback_type, FeedbackType::General);
        assert_eq!(stored.rating, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_resubmission_creates_new_rows() -> Result<()> {
        let db = setup_test_db().await?;
        submit_feedback(&db, submission("Same", None)).await?;
        submit_feedback(&db, submission("Same", None)).await?;
        assert_eq!(list_feedback(&db).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_recent_testimonials_filters_and_limits() -> Result<()> {
        let db = setup_test_db().await?;
        for (kind, text) in [
            ("donor", "first donor"),
            ("beneficiary", "beneficiary"),
            ("general", "general"),
            ("donor", "second donor"),
        ] {
            submit_feedback(
                &db,
                FeedbackSubmission {
                    feedback_type: Some(kind.to_string()),
                    feedback_text: Some(text.to_string()),
                    ..Default::default()
                },
            )
            .await?;
        }

        let testimonials =
            recent_testimonials(&db, &[FeedbackType::Donor, FeedbackType::General], 6).await?;
        let texts: Vec<&str> = testimonials
            .iter()
            .map(|f| f.feedback_text.as_str())
            .collect();
        assert_eq!(texts, vec!["second donor", "general", "first donor"]);

        let limited = recent_testimonials(&db, &[FeedbackType::Donor], 1).await?;
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].feedback_text, "second donor");
        Ok(())
    }
}
