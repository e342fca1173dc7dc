//! Request and response bodies of the HTTP API.
//!
//! Request fields are `Option`s on purpose: a missing key must reach the
//! engine so it can be reported as a `400 Missing Key.` in the uniform error
//! shape instead of being rejected by the JSON extractor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod company {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CompanyNew {
        /// Explicit code; derived from `name` when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub code: Option<String>,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CompanyUpdate {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CompanyView {
        pub code: String,
        pub name: String,
        pub description: String,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CompanySummary {
        pub code: String,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CompanyListResponse {
        pub companies: Vec<CompanySummary>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CompanyResponse {
        pub company: CompanyView,
    }

    /// `GET /companies/{code}`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CompanyDetailResponse {
        pub company: CompanyView,
        pub invoices: Vec<super::invoice::InvoiceBrief>,
    }
}

pub mod invoice {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct InvoiceNew {
        #[serde(default)]
        pub comp_code: Option<String>,
        /// Amount in major units, e.g. `7.7`.
        #[serde(default)]
        pub amt: Option<f64>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct InvoiceUpdate {
        #[serde(default)]
        pub amt: Option<f64>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct InvoiceView {
        pub id: i32,
        pub comp_code: String,
        pub amt: f64,
        pub paid: bool,
        pub add_date: NaiveDate,
        pub paid_date: Option<NaiveDate>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct InvoiceSummary {
        pub id: i32,
        pub comp_code: String,
    }

    /// Invoice as listed under its company.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct InvoiceBrief {
        pub id: i32,
        pub amt: f64,
        pub paid: bool,
        pub add_date: NaiveDate,
        pub paid_date: Option<NaiveDate>,
    }

    /// Invoice with its company embedded; `company` is `null` when the company
    /// no longer exists.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct InvoiceDetail {
        pub id: i32,
        pub amt: f64,
        pub paid: bool,
        pub add_date: NaiveDate,
        pub paid_date: Option<NaiveDate>,
        pub company: Option<super::company::CompanyView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct InvoiceListResponse {
        pub invoices: Vec<InvoiceSummary>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct InvoiceResponse {
        pub invoice: InvoiceView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct InvoiceDetailResponse {
        pub invoice: InvoiceDetail,
    }
}

/// `{"status": "deleted"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
    pub status: String,
}

impl Default for Deleted {
    fn default() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}

pub mod error {
    use super::*;

    /// Uniform error body: `{"error": {"message": "...", "status": 404}}`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorBody {
        pub error: ErrorPayload,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorPayload {
        pub message: String,
        #[serde(default = "default_status")]
        pub status: u16,
    }

    fn default_status() -> u16 {
        500
    }

    impl ErrorBody {
        pub fn new(message: impl Into<String>, status: u16) -> Self {
            Self {
                error: ErrorPayload {
                    message: message.into(),
                    status,
                },
            }
        }
    }
}
