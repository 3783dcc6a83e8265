//! Askama page templates and the flat view models they render.
//!
//! Templates only see preformatted strings and numbers; all lookups and
//! arithmetic happen in `core` before a view model is built.

use crate::{
    core::{impact::ImpactFigure, milestone::MilestoneEntry, project::ProjectProgress},
    entities::{feedback, impact_counter, project},
    web::flash::Notice,
};
use askama::Template;

/// A project as shown on listing pages.
#[derive(Debug, Clone)]
pub struct ProjectCard {
    /// Project ID, used as the form option value
    pub id: i64,
    /// Project title
    pub title: String,
    /// Short description, or the full one when there is none
    pub summary: String,
    /// Category, empty when unset
    pub category: String,
    /// Location, empty when unset
    pub location: String,
    /// Status label
    pub status: &'static str,
    /// Currency code
    pub currency: String,
    /// Goal with two decimals
    pub goal_amount: String,
    /// Collected amount with two decimals
    pub collected_amount: String,
    /// Whole-number percentage
    pub progress_percent: String,
    /// End date, empty when open-ended
    pub end_date: String,
}

impl ProjectCard {
    fn build(project: project::Model, progress: f64) -> Self {
        Self {
            id: project.id,
            summary: project
                .short_description
                .unwrap_or_else(|| project.description.clone()),
            title: project.title,
            category: project.category.unwrap_or_default(),
            location: project.location.unwrap_or_default(),
            status: project.status.label(),
            currency: project.currency,
            goal_amount: format!("{:.2}", project.goal_amount),
            collected_amount: format!("{:.2}", project.collected_amount),
            progress_percent: format!("{progress:.0}"),
            end_date: project
                .end_date
                .map(|d| d.format("%d %b %Y").to_string())
                .unwrap_or_default(),
        }
    }
}

impl From<project::Model> for ProjectCard {
    fn from(project: project::Model) -> Self {
        let progress = crate::core::project::progress_percent(&project);
        Self::build(project, progress)
    }
}

impl From<ProjectProgress> for ProjectCard {
    fn from(entry: ProjectProgress) -> Self {
        Self::build(entry.project, entry.progress_percent)
    }
}

/// One impact figure.
#[derive(Debug, Clone)]
pub struct ImpactView {
    /// Display label
    pub label: String,
    /// Counter value
    pub value: i64,
    /// Icon identifier
    pub icon_class: String,
}

impl From<ImpactFigure> for ImpactView {
    fn from(figure: ImpactFigure) -> Self {
        Self {
            label: figure.label,
            value: figure.value,
            icon_class: figure.icon_class,
        }
    }
}

impl From<impact_counter::Model> for ImpactView {
    fn from(counter: impact_counter::Model) -> Self {
        Self {
            label: crate::core::impact::format_label(&counter.name),
            value: counter.value,
            icon_class: counter.icon_class,
        }
    }
}

/// A milestone with its project title, if any.
#[derive(Debug, Clone)]
pub struct MilestoneView {
    /// Milestone title
    pub title: String,
    /// What was achieved
    pub description: String,
    /// Formatted date
    pub date_achieved: String,
    /// Related project title, empty when none
    pub project_title: String,
}

impl From<MilestoneEntry> for MilestoneView {
    fn from(entry: MilestoneEntry) -> Self {
        Self {
            title: entry.milestone.title,
            description: entry.milestone.description,
            date_achieved: entry.milestone.date_achieved.format("%d %b %Y").to_string(),
            project_title: entry.project.map(|p| p.title).unwrap_or_default(),
        }
    }
}

/// A testimonial card.
#[derive(Debug, Clone)]
pub struct TestimonialView {
    /// Author name or "Anonymous"
    pub author: String,
    /// Feedback type label
    pub kind: &'static str,
    /// Testimonial text
    pub text: String,
    /// One star per rating point
    pub stars: String,
}

impl From<feedback::Model> for TestimonialView {
    fn from(entry: feedback::Model) -> Self {
        let stars = usize::try_from(entry.rating).unwrap_or(0);
        Self {
            author: entry.name.unwrap_or_else(|| "Anonymous".to_string()),
            kind: entry.feedback_type.label(),
            text: entry.feedback_text,
            stars: "★".repeat(stars),
        }
    }
}

/// Converts a list of records into view models.
pub fn collect<T, V: From<T>>(items: Vec<T>) -> Vec<V> {
    items.into_iter().map(V::from).collect()
}

/// Home page
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Banner shown above the page
    pub notice: Notice,
    /// Active projects
    pub projects: Vec<ProjectCard>,
    /// Impact snapshot
    pub impact: Vec<ImpactView>,
}

/// About page
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    /// Banner shown above the page
    pub notice: Notice,
    /// Meals served
    pub meals_served: i64,
    /// Trees planted
    pub trees_planted: i64,
    /// Families helped
    pub families_helped: i64,
    /// Projects funded
    pub projects_funded: i64,
    /// Most recent milestones
    pub milestones: Vec<MilestoneView>,
    /// Donor and general testimonials
    pub testimonials: Vec<TestimonialView>,
}

/// Projects page
#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    /// Banner shown above the page
    pub notice: Notice,
    /// Active projects
    pub ongoing_projects: Vec<ProjectCard>,
    /// Completed projects, latest end date first
    pub completed_projects: Vec<ProjectCard>,
    /// Distinct categories
    pub categories: Vec<String>,
}

/// Impacts page
#[derive(Template)]
#[template(path = "impacts.html")]
pub struct ImpactsTemplate {
    /// Banner shown above the page
    pub notice: Notice,
    /// All counters by name
    pub impact_counters: Vec<ImpactView>,
    /// Every project with progress
    pub projects: Vec<ProjectCard>,
    /// All milestones
    pub milestones: Vec<MilestoneView>,
}

/// Feedback page
#[derive(Template)]
#[template(path = "feedback.html")]
pub struct FeedbackTemplate {
    /// Banner shown above the page
    pub notice: Notice,
    /// Submitted feedback, newest first
    pub feedbacks: Vec<TestimonialView>,
}

/// Contact page
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    /// Banner shown above the page
    pub notice: Notice,
}

/// Donation page
#[derive(Template)]
#[template(path = "donate.html")]
pub struct DonateTemplate {
    /// Banner shown above the page
    pub notice: Notice,
    /// Projects accepting pledges
    pub projects: Vec<ProjectCard>,
}

/// Privacy policy page
#[derive(Template)]
#[template(path = "policy.html")]
pub struct PolicyTemplate {
    /// Banner shown above the page
    pub notice: Notice,
}

/// Terms page
#[derive(Template)]
#[template(path = "terms.html")]
pub struct TermsTemplate {
    /// Banner shown above the page
    pub notice: Notice,
}
