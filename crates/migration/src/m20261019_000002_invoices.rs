//! `invoices` table.
//!
//! - `id` is `AUTOINCREMENT`, so ids are never handed out twice even after the
//!   highest one is deleted.
//! - `amt` holds cents.
//! - `comp_code` is indexed but carries no foreign key: deleting a company is
//!   governed by the engine's delete policy, not by the schema.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Invoices {
    Table,
    Id,
    CompCode,
    Amt,
    Paid,
    AddDate,
    PaidDate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invoices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invoices::CompCode).string().not_null())
                    .col(ColumnDef::new(Invoices::Amt).big_integer().not_null())
                    .col(
                        ColumnDef::new(Invoices::Paid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Invoices::AddDate).date().not_null())
                    .col(ColumnDef::new(Invoices::PaidDate).date().null())
                    .check(Expr::col(Invoices::Amt).gt(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-invoices-comp_code")
                    .table(Invoices::Table)
                    .col(Invoices::CompCode)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await
    }
}
