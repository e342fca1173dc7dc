//! Command structs for engine write operations.
//!
//! Fields mirror what a client sent: `None` means the key was absent. The
//! engine, not the caller, decides whether an absent or blank value is an
//! error, so every entry point reports missing input the same way.

use crate::Amount;

/// Create a company.
#[derive(Clone, Debug, Default)]
pub struct CompanyNewCmd {
    /// Explicit code. Derived from `name` when absent or blank.
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CompanyNewCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: None,
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Replace the name and description of a company.
#[derive(Clone, Debug, Default)]
pub struct CompanyUpdateCmd {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CompanyUpdateCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}

/// Create an invoice for an existing company.
#[derive(Clone, Debug, Default)]
pub struct InvoiceNewCmd {
    pub comp_code: Option<String>,
    pub amt: Option<Amount>,
}

impl InvoiceNewCmd {
    #[must_use]
    pub fn new(comp_code: impl Into<String>, amt: Amount) -> Self {
        Self {
            comp_code: Some(comp_code.into()),
            amt: Some(amt),
        }
    }
}

/// Replace the amount of an invoice.
#[derive(Clone, Debug, Default)]
pub struct InvoiceUpdateCmd {
    pub amt: Option<Amount>,
}

impl InvoiceUpdateCmd {
    #[must_use]
    pub fn new(amt: Amount) -> Self {
        Self { amt: Some(amt) }
    }
}
