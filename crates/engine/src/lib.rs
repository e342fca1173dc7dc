//! Data-access and integrity layer for companies and invoices.
//!
//! The [`Engine`] wraps an injected sea-orm connection and exposes one method
//! per store operation. Every failure is an [`EngineError`] whose
//! [`ErrorKind`] tells the caller how to report it.

pub use amount::Amount;
pub use code::generate_code;
pub use commands::{CompanyNewCmd, CompanyUpdateCmd, InvoiceNewCmd, InvoiceUpdateCmd};
pub use companies::{Company, CompanyDeletePolicy, CompanyDetail, CompanySummary};
pub use error::{EngineError, ErrorKind};
pub use invoices::{Invoice, InvoiceBrief, InvoiceDetail, InvoiceSummary};
pub use ops::{Engine, EngineBuilder};

mod amount;
mod code;
mod commands;
mod companies;
mod error;
mod invoices;
mod ops;

type ResultEngine<T> = Result<T, EngineError>;
