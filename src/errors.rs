use thiserror::Error;

/// Errors raised anywhere in the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Site configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Any SeaORM failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A submitted or created record was rejected
    #[error("Validation error: {message}")]
    Validation {
        /// User-facing reason
        message: String,
    },

    /// A money value was not finite or not positive
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected value
        amount: f64,
    },

    /// No project with this ID
    #[error("Project not found: {id}")]
    ProjectNotFound {
        /// The ID as submitted
        id: String,
    },

    /// No donation with this ID
    #[error("Donation not found: {id}")]
    DonationNotFound {
        /// The missing ID
        id: i64,
    },

    /// A page template failed to render
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Filesystem or socket failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment variable was unreadable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
