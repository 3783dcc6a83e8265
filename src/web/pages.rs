//! GET handlers: each page gathers its data from `core` and renders one template.

use crate::{
    core::{feedback, impact, milestone, project},
    entities::{FeedbackType, ProjectStatus},
    web::{
        AppState,
        error::WebError,
        flash::{Notice, take_notice},
        templates::{
            AboutTemplate, ContactTemplate, DonateTemplate, FeedbackTemplate, ImpactsTemplate,
            IndexTemplate, PolicyTemplate, ProjectsTemplate, TermsTemplate, collect,
        },
    },
};
use askama::Template;
use axum::{extract::State, response::Html};
use axum_extra::extract::cookie::CookieJar;

/// Milestones shown on the about page
const ABOUT_MILESTONE_LIMIT: u64 = 10;
/// Testimonials shown on the about page
const ABOUT_TESTIMONIAL_LIMIT: u64 = 6;

pub(crate) fn render<T: Template>(template: &T) -> Result<Html<String>, WebError> {
    Ok(Html(template.render()?))
}

/// Home page: active projects and the impact snapshot.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let db = &state.database;
    let projects = project::list_active_projects(db).await?;
    let impact = impact::impact_snapshot(db).await?;

    render(&IndexTemplate {
        notice: Notice::default(),
        projects: collect(projects),
        impact: collect(impact),
    })
}

/// About page: headline figures, milestones and testimonials.
pub async fn about(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let db = &state.database;
    let figures = impact::fixed_impact(db).await?;
    let milestones = milestone::recent_milestones(db, Some(ABOUT_MILESTONE_LIMIT)).await?;
    let testimonials = feedback::recent_testimonials(
        db,
        &[FeedbackType::Donor, FeedbackType::General],
        ABOUT_TESTIMONIAL_LIMIT,
    )
    .await?;

    render(&AboutTemplate {
        notice: Notice::default(),
        meals_served: figures.meals_served,
        trees_planted: figures.trees_planted,
        families_helped: figures.families_helped,
        projects_funded: figures.projects_funded,
        milestones: collect(milestones),
        testimonials: collect(testimonials),
    })
}

/// Ongoing and completed projects with their categories.
pub async fn projects(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let db = &state.database;
    let ongoing = project::list_active_projects(db).await?;
    let completed = project::list_projects_by_status(db, ProjectStatus::Completed).await?;
    let categories = project::distinct_categories(db).await?;

    render(&ProjectsTemplate {
        notice: Notice::default(),
        ongoing_projects: collect(ongoing),
        completed_projects: collect(completed),
        categories,
    })
}

/// Every counter, project progress, and all milestones.
pub async fn impacts(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let db = &state.database;
    let counters = impact::list_impact_counters(db).await?;
    let projects = project::list_all_projects_with_progress(db).await?;
    let milestones = milestone::recent_milestones(db, None).await?;

    render(&ImpactsTemplate {
        notice: Notice::default(),
        impact_counters: collect(counters),
        projects: collect(projects),
        milestones: collect(milestones),
    })
}

/// Feedback form and the submitted testimonials.
pub async fn feedback(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), WebError> {
    let (jar, notice) = take_notice(jar);
    let feedbacks = feedback::list_feedback(&state.database).await?;

    let page = render(&FeedbackTemplate {
        notice,
        feedbacks: collect(feedbacks),
    })?;
    Ok((jar, page))
}

/// Contact form.
pub async fn contact(jar: CookieJar) -> Result<(CookieJar, Html<String>), WebError> {
    let (jar, notice) = take_notice(jar);
    let page = render(&ContactTemplate { notice })?;
    Ok((jar, page))
}

/// Donation form.
pub async fn donate(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), WebError> {
    let (jar, notice) = take_notice(jar);
    let page = donate_page(&state, notice).await?;
    Ok((jar, page))
}

/// Renders the donation form with the given banner. Shared with the intake
/// handler, which re-renders the form on a rejected amount.
pub(crate) async fn donate_page(state: &AppState, notice: Notice) -> Result<Html<String>, WebError> {
    let projects = project::list_active_projects(&state.database).await?;
    render(&DonateTemplate {
        notice,
        projects: collect(projects),
    })
}

/// Privacy policy.
pub async fn policy() -> Result<Html<String>, WebError> {
    render(&PolicyTemplate {
        notice: Notice::default(),
    })
}

/// Terms of use.
pub async fn terms() -> Result<Html<String>, WebError> {
    render(&TermsTemplate {
        notice: Notice::default(),
    })
}
