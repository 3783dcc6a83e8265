//! POST handlers for the three intake forms.
//!
//! Successful submissions redirect back to the form page with a success notice.
//! An empty testimonial redirects with an error notice; a bad donation amount
//! re-renders the donation form in place.

use crate::{
    core::{
        contact::{self, ContactSubmission},
        donation::{self, DonationSubmission},
        feedback::{self, FeedbackSubmission},
    },
    errors::Error,
    web::{
        AppState,
        error::WebError,
        flash::{Notice, set_notice},
        pages::donate_page,
    },
};
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid donation amount.";

/// Stores a testimonial and redirects back to the feedback page.
pub async fn submit_feedback(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(submission): Form<FeedbackSubmission>,
) -> Result<(CookieJar, Redirect), WebError> {
    let notice = match feedback::submit_feedback(&state.database, submission).await {
        Ok(_) => Notice::success("Thank you! Your feedback has been submitted."),
        Err(Error::Validation { message }) => {
            debug!("Feedback rejected: {}", message);
            Notice::error(message)
        }
        Err(e) => return Err(e.into()),
    };

    Ok((set_notice(jar, &notice), Redirect::to("/feedback")))
}

/// Stores a contact message and redirects back to the contact page.
pub async fn submit_contact(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(submission): Form<ContactSubmission>,
) -> Result<(CookieJar, Redirect), WebError> {
    contact::submit_contact(&state.database, submission).await?;
    let notice = Notice::success("Your message has been sent successfully!");
    Ok((set_notice(jar, &notice), Redirect::to("/contact")))
}

/// Records a pledge, or re-renders the form when the amount is unusable.
pub async fn submit_donation(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(submission): Form<DonationSubmission>,
) -> Result<Response, WebError> {
    match donation::submit_donation(&state.database, submission).await {
        Ok(receipt) => {
            let notice = Notice::success(receipt.acknowledgment());
            Ok((set_notice(jar, &notice), Redirect::to("/donate")).into_response())
        }
        Err(Error::InvalidAmount { .. }) => {
            let page = donate_page(&state, Notice::error(INVALID_AMOUNT_MESSAGE)).await?;
            Ok(page.into_response())
        }
        Err(e) => Err(e.into()),
    }
}
