use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{CompanyDeletePolicy, EngineError, ResultEngine};

mod companies;
mod invoices;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// Data-access layer for companies and invoices.
///
/// The engine holds no state besides the injected connection, so it can be
/// shared freely across concurrent requests.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    company_delete_policy: CompanyDeletePolicy,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Trim a required text field; absent and blank values are both "missing".
fn required_text(value: Option<&str>, field: &str) -> ResultEngine<String> {
    normalize_optional_text(value).ok_or_else(|| EngineError::MissingKey(field.to_string()))
}

fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Storage constraint violations are outcomes, not faults. A unique key
/// violation becomes `conflict()`, anything else passes through.
fn unique_violation(err: DbErr, conflict: impl FnOnce() -> EngineError) -> EngineError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!("unique constraint rejected write: {detail}");
            conflict()
        }
        _ => EngineError::Database(err),
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    company_delete_policy: CompanyDeletePolicy,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Choose how deleting a company treats its invoices. Defaults to
    /// [`CompanyDeletePolicy::Orphan`].
    pub fn company_delete_policy(mut self, policy: CompanyDeletePolicy) -> EngineBuilder {
        self.company_delete_policy = policy;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
            company_delete_policy: self.company_delete_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, Database};

    use super::*;

    async fn duplicate_key_error() -> DbErr {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.execute_unprepared("CREATE TABLE companies (code TEXT PRIMARY KEY NOT NULL)")
            .await
            .unwrap();
        db.execute_unprepared("INSERT INTO companies (code) VALUES ('tsl')")
            .await
            .unwrap();
        match db
            .execute_unprepared("INSERT INTO companies (code) VALUES ('tsl')")
            .await
        {
            Ok(_) => panic!("second insert of the same code succeeded"),
            Err(err) => err,
        }
    }

    #[tokio::test]
    async fn duplicate_primary_key_becomes_conflict() {
        let err = duplicate_key_error().await;
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));

        let mapped = unique_violation(err, || EngineError::ExistingKey("tsl".to_string()));
        assert_eq!(mapped, EngineError::ExistingKey("tsl".to_string()));
    }

    #[tokio::test]
    async fn other_storage_errors_pass_through() {
        let err = DbErr::Custom("boom".to_string());
        let mapped = unique_violation(err, || EngineError::ExistingKey("tsl".to_string()));
        assert_eq!(mapped, EngineError::Database(DbErr::Custom("boom".to_string())));
    }
}
