//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod contact_message;
pub mod donation;
pub mod feedback;
pub mod impact_counter;
pub mod milestone;
pub mod project;

// Re-export specific types to avoid conflicts
pub use contact_message::{
    Column as ContactMessageColumn, ContactSubject, Entity as ContactMessage,
    Model as ContactMessageModel,
};
pub use donation::{
    Column as DonationColumn, Entity as Donation, Model as DonationModel, PaymentMethod,
};
pub use feedback::{
    Column as FeedbackColumn, Entity as Feedback, FeedbackType, Model as FeedbackModel,
};
pub use impact_counter::{
    Column as ImpactCounterColumn, Entity as ImpactCounter, Model as ImpactCounterModel,
};
pub use milestone::{Column as MilestoneColumn, Entity as Milestone, Model as MilestoneModel};
pub use project::{
    Column as ProjectColumn, Entity as Project, Model as ProjectModel, ProjectStatus,
};
