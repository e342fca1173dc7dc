//! The module contains the `Invoice` types and the `invoices` table.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

use crate::{Amount, Company};

/// An invoice billed to a company.
///
/// `comp_code` named an existing company when the invoice was created. The
/// company may have been deleted since (see [`CompanyDeletePolicy`]).
///
///  [`CompanyDeletePolicy`]: crate::CompanyDeletePolicy
#[derive(Clone, Debug, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: Amount,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Listing projection of an invoice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// Invoice as embedded in a company lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceBrief {
    pub id: i32,
    pub amt: Amount,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Invoice with the company it references.
///
/// `company` is `None` when the company was deleted after the invoice was
/// created.
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: Amount,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Option<Company>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub comp_code: String,
    /// Amount in cents.
    pub amt: i64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompCode",
        to = "super::companies::Column::Code",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Companies,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Invoice {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            comp_code: value.comp_code,
            amt: Amount::new(value.amt),
            paid: value.paid,
            add_date: value.add_date,
            paid_date: value.paid_date,
        }
    }
}

impl From<Model> for InvoiceSummary {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            comp_code: value.comp_code,
        }
    }
}

impl From<Model> for InvoiceBrief {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            amt: Amount::new(value.amt),
            paid: value.paid,
            add_date: value.add_date,
            paid_date: value.paid_date,
        }
    }
}

impl InvoiceDetail {
    pub(crate) fn from_models(invoice: Model, company: Option<super::companies::Model>) -> Self {
        Self {
            id: invoice.id,
            amt: Amount::new(invoice.amt),
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company: company.map(Company::from),
        }
    }
}
