//! Shared test utilities for donation-hub.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    core::{
        donation::{self, DonationSubmission},
        impact, milestone,
        project::{self, NewProject},
    },
    entities::{self, ProjectStatus},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test project with sensible defaults.
///
/// # Defaults
/// * `description`: `"Test project"`
/// * `goal_amount`: 1000.0
/// * `category`: `"Relief"`
pub async fn create_test_project(
    db: &DatabaseConnection,
    title: &str,
    status: ProjectStatus,
) -> Result<entities::project::Model> {
    project::create_project(
        db,
        NewProject {
            title: title.to_string(),
            description: "Test project".to_string(),
            goal_amount: 1000.0,
            status,
            category: Some("Relief".to_string()),
            ..Default::default()
        },
    )
    .await
}

/// Creates a project from explicit fields.
/// Use this when you need to test specific project configurations.
pub async fn create_custom_project(
    db: &DatabaseConnection,
    new: NewProject,
) -> Result<entities::project::Model> {
    project::create_project(db, new).await
}

/// Creates an impact counter with an empty icon.
pub async fn create_test_counter(
    db: &DatabaseConnection,
    name: &str,
    value: i64,
) -> Result<entities::impact_counter::Model> {
    impact::create_impact_counter(db, name, value, "").await
}

/// Creates a milestone achieved today.
pub async fn create_test_milestone(
    db: &DatabaseConnection,
    title: &str,
    project_id: Option<i64>,
) -> Result<entities::milestone::Model> {
    milestone::create_milestone(db, title, "Test milestone", None, project_id).await
}

/// Records an unconfirmed donation through the regular intake path.
///
/// # Defaults
/// * donor: `"Test Donor"` / `"donor@example.org"`
/// * `payment_method`: bank
pub async fn create_test_donation(
    db: &DatabaseConnection,
    project_id: i64,
    amount: &str,
) -> Result<entities::donation::Model> {
    let receipt = donation::submit_donation(
        db,
        DonationSubmission {
            project: Some(project_id.to_string()),
            custom_amount: Some(amount.to_string()),
            name: Some("Test Donor".to_string()),
            email: Some("donor@example.org".to_string()),
            ..Default::default()
        },
    )
    .await?;
    Ok(receipt.donation)
}

/// Sets up a complete test environment with one active project.
/// Returns (db, project) for common test scenarios.
pub async fn setup_with_project() -> Result<(DatabaseConnection, entities::project::Model)> {
    let db = setup_test_db().await?;
    let project = create_test_project(&db, "Test Project", ProjectStatus::Active).await?;
    Ok((db, project))
}
