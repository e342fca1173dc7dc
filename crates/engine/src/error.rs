//! The module contains the errors the engine can throw.
//!
//! Every error belongs to exactly one [`ErrorKind`], which is what callers
//! (the HTTP layer) use to pick a status code:
//!
//! - [`BadRequest`] missing or malformed input.
//! - [`NotFound`] the referenced company or invoice does not exist.
//! - [`Conflict`] a uniqueness or referential rule would be broken.
//! - [`Internal`] anything the storage layer reports that is not one of the above.
//!
//!  [`BadRequest`]: ErrorKind::BadRequest
//!  [`NotFound`]: ErrorKind::NotFound
//!  [`Conflict`]: ErrorKind::Conflict
//!  [`Internal`]: ErrorKind::Internal
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A required field was absent or blank. Carries the field name.
    #[error("Missing Key.")]
    MissingKey(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid code: {0}")]
    InvalidCode(String),
    #[error("Company With Code {0} Can't Be Found.")]
    CompanyNotFound(String),
    #[error("Invoice With ID {0} Can't Be Found.")]
    InvoiceNotFound(String),
    #[error("Company With Code {0} Already Exists.")]
    ExistingKey(String),
    #[error("Company With Code {0} Still Has Invoices.")]
    CompanyInUse(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Failure classes shared by every store operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Conflict,
    Internal,
}

impl EngineError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingKey(_) | Self::InvalidAmount(_) | Self::InvalidCode(_) => {
                ErrorKind::BadRequest
            }
            Self::CompanyNotFound(_) | Self::InvoiceNotFound(_) => ErrorKind::NotFound,
            Self::ExistingKey(_) | Self::CompanyInUse(_) => ErrorKind::Conflict,
            Self::Database(_) => ErrorKind::Internal,
        }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingKey(a), Self::MissingKey(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidCode(a), Self::InvalidCode(b)) => a == b,
            (Self::CompanyNotFound(a), Self::CompanyNotFound(b)) => a == b,
            (Self::InvoiceNotFound(a), Self::InvoiceNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::CompanyInUse(a), Self::CompanyInUse(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
