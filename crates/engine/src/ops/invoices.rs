use chrono::Utc;
use sea_orm::{ActiveValue, DbErr, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    Amount, EngineError, Invoice, InvoiceDetail, InvoiceNewCmd, InvoiceSummary, InvoiceUpdateCmd,
    ResultEngine, companies, invoices,
};

use super::{Engine, required_text, with_tx};

impl Engine {
    /// Return every invoice, ordered by id.
    pub async fn list_invoices(&self) -> ResultEngine<Vec<InvoiceSummary>> {
        let models = invoices::Entity::find()
            .order_by_asc(invoices::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(InvoiceSummary::from).collect())
    }

    /// Return an invoice with the company it references embedded.
    ///
    /// The company is fetched with a left join, so an invoice whose company
    /// was deleted is still returned with `company: None`.
    pub async fn invoice(&self, id: i32) -> ResultEngine<InvoiceDetail> {
        let (invoice, company) = invoices::Entity::find_by_id(id)
            .find_also_related(companies::Entity)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::InvoiceNotFound(id.to_string()))?;

        if company.is_none() {
            tracing::warn!(id, comp_code = %invoice.comp_code, "invoice references a missing company");
        }
        Ok(InvoiceDetail::from_models(invoice, company))
    }

    /// Create an unpaid invoice dated today.
    ///
    /// The company lookup and the insert share one transaction.
    pub async fn new_invoice(&self, cmd: InvoiceNewCmd) -> ResultEngine<Invoice> {
        let comp_code = required_text(cmd.comp_code.as_deref(), "comp_code")?;
        let amt = required_amount(cmd.amt)?;
        let add_date = Utc::now().date_naive();

        with_tx!(self, |db_tx| {
            let company_exists = companies::Entity::find_by_id(comp_code.clone())
                .one(&db_tx)
                .await?
                .is_some();
            if !company_exists {
                return Err(EngineError::CompanyNotFound(comp_code));
            }

            let active = invoices::ActiveModel {
                id: ActiveValue::NotSet,
                comp_code: ActiveValue::Set(comp_code.clone()),
                amt: ActiveValue::Set(amt.cents()),
                paid: ActiveValue::Set(false),
                add_date: ActiveValue::Set(add_date),
                paid_date: ActiveValue::Set(None),
            };
            let model = active.insert(&db_tx).await?;

            tracing::debug!(id = model.id, comp_code = %model.comp_code, "invoice created");
            Ok(Invoice::from(model))
        })
    }

    /// Replace the amount of an invoice. Payment fields are left untouched.
    pub async fn update_invoice(&self, id: i32, cmd: InvoiceUpdateCmd) -> ResultEngine<Invoice> {
        let amt = required_amount(cmd.amt)?;

        with_tx!(self, |db_tx| {
            let active = invoices::ActiveModel {
                id: ActiveValue::Unchanged(id),
                amt: ActiveValue::Set(amt.cents()),
                ..Default::default()
            };
            let model = active.update(&db_tx).await.map_err(|err| match err {
                DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
                    EngineError::InvoiceNotFound(id.to_string())
                }
                other => EngineError::Database(other),
            })?;
            Ok(Invoice::from(model))
        })
    }

    /// Delete an invoice.
    pub async fn delete_invoice(&self, id: i32) -> ResultEngine<()> {
        let deleted = invoices::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if deleted.rows_affected == 0 {
            return Err(EngineError::InvoiceNotFound(id.to_string()));
        }
        tracing::debug!(id, "invoice deleted");
        Ok(())
    }
}

/// An absent amount is a missing key; a present one must be above zero.
fn required_amount(amt: Option<Amount>) -> ResultEngine<Amount> {
    let amt = amt.ok_or_else(|| EngineError::MissingKey("amt".to_string()))?;
    if !amt.is_positive() {
        return Err(EngineError::InvalidAmount(format!(
            "amt must be > 0, got {amt}"
        )));
    }
    Ok(amt)
}
