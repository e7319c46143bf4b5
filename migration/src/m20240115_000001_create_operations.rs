//! Migration to create the operations table for income/expense records

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Operations::Table)
                    .if_not_exists()
                    .col(pk_auto(Operations::Id))
                    .col(string(Operations::Type).not_null())
                    // NUMERIC(12, 2): ten integer digits, two fractional
                    .col(decimal_len(Operations::Amount, 12, 2).not_null())
                    .col(string(Operations::Category).not_null())
                    .col(string(Operations::Date).not_null())
                    .col(string(Operations::Note).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Operations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Operations {
    Table,
    Id,
    Type,
    Amount,
    Category,
    Date,
    Note,
}
