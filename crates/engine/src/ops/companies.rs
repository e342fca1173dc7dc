use sea_orm::{
    ActiveValue, DbErr, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*,
};

use crate::{
    Company, CompanyDeletePolicy, CompanyDetail, CompanyNewCmd, CompanySummary,
    CompanyUpdateCmd, EngineError, InvoiceBrief, ResultEngine,
    code::{generate_code, normalize_supplied_code},
    companies, invoices,
};

use super::{Engine, normalize_optional_text, required_text, unique_violation, with_tx};

impl Engine {
    /// Return every company, ordered by code.
    pub async fn list_companies(&self) -> ResultEngine<Vec<CompanySummary>> {
        let models = companies::Entity::find()
            .order_by_asc(companies::Column::Code)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(CompanySummary::from).collect())
    }

    /// Return a company and the invoices referencing it.
    pub async fn company(&self, code: &str) -> ResultEngine<CompanyDetail> {
        with_tx!(self, |db_tx| {
            let model = companies::Entity::find_by_id(code.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::CompanyNotFound(code.to_string()))?;

            let invoices = model
                .find_related(invoices::Entity)
                .order_by_asc(invoices::Column::Id)
                .all(&db_tx)
                .await?
                .into_iter()
                .map(InvoiceBrief::from)
                .collect();

            Ok(CompanyDetail {
                company: Company::from(model),
                invoices,
            })
        })
    }

    /// Create a company.
    ///
    /// The code is taken from `cmd.code` when present, otherwise derived from
    /// the name. The existence check is only a fast path: the primary key on
    /// `companies.code` decides, and a violation raised by the insert is
    /// reported as [`EngineError::ExistingKey`] as well.
    pub async fn new_company(&self, cmd: CompanyNewCmd) -> ResultEngine<Company> {
        let name = required_text(cmd.name.as_deref(), "name")?;
        let description = required_text(cmd.description.as_deref(), "description")?;
        let code = match normalize_optional_text(cmd.code.as_deref()) {
            Some(code) => normalize_supplied_code(&code)?,
            None => generate_code(&name),
        };
        if code.is_empty() {
            return Err(EngineError::InvalidCode(format!(
                "cannot derive a code from name '{name}'"
            )));
        }

        with_tx!(self, |db_tx| {
            let exists = companies::Entity::find_by_id(code.clone())
                .one(&db_tx)
                .await?
                .is_some();
            if exists {
                return Err(EngineError::ExistingKey(code));
            }

            let company = Company {
                code,
                name,
                description,
            };
            let model = companies::ActiveModel::from(&company)
                .insert(&db_tx)
                .await
                .map_err(|err| {
                    unique_violation(err, || EngineError::ExistingKey(company.code.clone()))
                })?;

            tracing::debug!(code = %model.code, "company created");
            Ok(Company::from(model))
        })
    }

    /// Replace name and description of a company. The code never changes.
    pub async fn update_company(
        &self,
        code: &str,
        cmd: CompanyUpdateCmd,
    ) -> ResultEngine<Company> {
        let name = required_text(cmd.name.as_deref(), "name")?;
        let description = required_text(cmd.description.as_deref(), "description")?;

        with_tx!(self, |db_tx| {
            let active = companies::ActiveModel {
                code: ActiveValue::Unchanged(code.to_string()),
                name: ActiveValue::Set(name),
                description: ActiveValue::Set(description),
            };
            let model = active
                .update(&db_tx)
                .await
                .map_err(|err| not_found_or(err, code))?;
            Ok(Company::from(model))
        })
    }

    /// Delete a company, treating its invoices according to the configured
    /// [`CompanyDeletePolicy`].
    pub async fn delete_company(&self, code: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let deleted = companies::Entity::delete_by_id(code.to_string())
                .exec(&db_tx)
                .await?;
            if deleted.rows_affected == 0 {
                return Err(EngineError::CompanyNotFound(code.to_string()));
            }

            match self.company_delete_policy {
                CompanyDeletePolicy::Orphan => {}
                CompanyDeletePolicy::Restrict => {
                    let referencing = invoices::Entity::find()
                        .filter(invoices::Column::CompCode.eq(code.to_string()))
                        .count(&db_tx)
                        .await?;
                    if referencing > 0 {
                        return Err(EngineError::CompanyInUse(code.to_string()));
                    }
                }
                CompanyDeletePolicy::Cascade => {
                    let removed = invoices::Entity::delete_many()
                        .filter(invoices::Column::CompCode.eq(code.to_string()))
                        .exec(&db_tx)
                        .await?;
                    tracing::debug!(code, invoices = removed.rows_affected, "cascaded invoices");
                }
            }

            tracing::debug!(code, "company deleted");
            Ok(())
        })
    }
}

fn not_found_or(err: DbErr, code: &str) -> EngineError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
            EngineError::CompanyNotFound(code.to_string())
        }
        other => EngineError::Database(other),
    }
}
