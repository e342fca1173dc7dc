//! The module contains the `Company` types and the `companies` table.

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::Deserialize;

use crate::invoices::InvoiceBrief;

/// A company that can be billed.
///
/// `code` is the primary key: lowercase, unique and never changed after the
/// company is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Listing projection of a company.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// A company together with the invoices that reference its code.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyDetail {
    pub company: Company,
    pub invoices: Vec<InvoiceBrief>,
}

/// What happens to invoices when the company they reference is deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyDeletePolicy {
    /// Delete the company and leave its invoices in place.
    #[default]
    Orphan,
    /// Refuse to delete a company that still has invoices.
    Restrict,
    /// Delete the company's invoices in the same transaction.
    Cascade,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invoices::Entity")]
    Invoices,
}

impl Related<super::invoices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Company {
    fn from(value: Model) -> Self {
        Self {
            code: value.code,
            name: value.name,
            description: value.description,
        }
    }
}

impl From<Model> for CompanySummary {
    fn from(value: Model) -> Self {
        Self {
            code: value.code,
            name: value.name,
        }
    }
}

impl From<&Company> for ActiveModel {
    fn from(value: &Company) -> Self {
        Self {
            code: ActiveValue::Set(value.code.clone()),
            name: ActiveValue::Set(value.name.clone()),
            description: ActiveValue::Set(value.description.clone()),
        }
    }
}
