//! Donation business logic - Pledge intake and manual confirmation.
//!
//! A donation is recorded as an unconfirmed pledge against an existing project.
//! Recording a pledge never changes the project's collected amount; that only
//! happens when an administrator confirms donations and recomputes the total.

use crate::{
    core::{intake, project as project_core},
    entities::{Donation, PaymentMethod, donation, project},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::{info, warn};

/// Raw donation form fields as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationSubmission {
    /// Project ID as text
    pub project: Option<String>,
    /// Amount as text
    pub custom_amount: Option<String>,
    /// Donor name
    pub name: Option<String>,
    /// Donor email
    pub email: Option<String>,
    /// Optional donor phone
    pub phone: Option<String>,
    /// Optional postal address for receipts
    pub address: Option<String>,
    /// Checkbox, present when ticked
    pub recurring: Option<String>,
    /// Checkbox, present when ticked
    pub anonymous: Option<String>,
    /// `bank`, `ewallet` or `cash`
    pub payment_method: Option<String>,
}

/// A stored donation together with the project it was pledged to.
#[derive(Debug, Clone)]
pub struct DonationReceipt {
    /// The stored pledge
    pub donation: donation::Model,
    /// The project it belongs to
    pub project: project::Model,
}

impl DonationReceipt {
    /// Acknowledgment shown to the donor after a successful pledge.
    #[must_use]
    pub fn acknowledgment(&self) -> String {
        format!(
            "Thank you {}! Your donation of {} {:.2} has been received.",
            self.donation.donor_name, self.project.currency, self.donation.amount
        )
    }
}

/// Validates and stores a donation pledge.
///
/// # Errors
/// * `Error::ProjectNotFound` when the project ID is missing, malformed, or unknown
/// * `Error::InvalidAmount` when the amount is not a positive number
///
/// Nothing is stored on error.
pub async fn submit_donation<C>(db: &C, submission: DonationSubmission) -> Result<DonationReceipt>
where
    C: ConnectionTrait,
{
    let raw_project_id = submission.project.unwrap_or_default();
    let project = match raw_project_id.trim().parse::<i64>() {
        Ok(id) => project_core::get_project_by_id(db, id).await?,
        Err(_) => None,
    }
    .ok_or_else(|| Error::ProjectNotFound {
        id: raw_project_id.clone(),
    })?;

    let amount = intake::parse_amount(submission.custom_amount.as_deref());
    if amount <= 0.0 {
        warn!(
            "Rejected donation to project {} with amount {:?}",
            project.id, submission.custom_amount
        );
        return Err(Error::InvalidAmount { amount });
    }

    let payment_method = submission
        .payment_method
        .as_deref()
        .and_then(PaymentMethod::parse)
        .unwrap_or_default();

    let model = donation::ActiveModel {
        project_id: Set(project.id),
        donor_name: Set(submission.name.unwrap_or_default()),
        donor_email: Set(submission.email.unwrap_or_default()),
        donor_phone: Set(intake::non_empty(submission.phone)),
        donor_address: Set(intake::non_empty(submission.address)),
        amount: Set(amount),
        recurring: Set(intake::checkbox(submission.recurring.as_deref())),
        anonymous: Set(intake::checkbox(submission.anonymous.as_deref())),
        payment_method: Set(payment_method),
        confirmed: Set(false),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let donation = model.insert(db).await?;
    info!(
        "Recorded unconfirmed donation {} of {} to project {}",
        donation.id, donation.amount, project.id
    );

    Ok(DonationReceipt { donation, project })
}

/// Marks a donation as confirmed after manual payment verification.
///
/// Confirming an already confirmed donation is a no-op. There is no way back
/// to unconfirmed.
pub async fn confirm_donation<C>(db: &C, donation_id: i64) -> Result<donation::Model>
where
    C: ConnectionTrait,
{
    let existing = Donation::find_by_id(donation_id)
        .one(db)
        .await?
        .ok_or(Error::DonationNotFound { id: donation_id })?;

    if existing.confirmed {
        return Ok(existing);
    }

    let mut active: donation::ActiveModel = existing.into();
    active.confirmed = Set(true);
    let updated = active.update(db).await?;

    info!("Confirmed donation {}", donation_id);
    Ok(updated)
}

/// All donations pledged to a project, newest first.
pub async fn list_donations_for_project<C>(
    db: &C,
    project_id: i64,
) -> Result<Vec<donation::Model>>
where
    C: ConnectionTrait,
{
    Donation::find()
        .filter(donation::Column::ProjectId.eq(project_id))
        .order_by_desc(donation::Column::CreatedAt)
        .order_by_desc(donation::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
