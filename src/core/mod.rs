//! Core business logic - framework-agnostic queries, intake, and administrative operations.

/// Contact message intake
pub mod contact;
/// Donation intake and confirmation
pub mod donation;
/// Feedback intake and testimonial queries
pub mod feedback;
/// Impact counters and the figures built from them
pub mod impact;
/// Form field parsing with per-field fallback policies
pub mod intake;
/// Milestone queries
pub mod milestone;
/// Project queries, progress, and upkeep
pub mod project;
