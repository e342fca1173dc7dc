#![allow(dead_code)]

use engine::{CompanyDeletePolicy, Engine};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

pub async fn engine_with_db(policy: CompanyDeletePolicy) -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .company_delete_policy(policy)
        .build()
        .await
        .unwrap();
    (engine, db)
}

pub async fn engine() -> Engine {
    engine_with_db(CompanyDeletePolicy::default()).await.0
}
