//! SeaORM Entity for the operations table
//!
//! One row per income/expense record. `id` is assigned by the database.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "operations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Free-form kind of record, e.g. "income" or "expense"
    #[sea_orm(column_name = "type")]
    pub operation_type: String,
    /// Stored as NUMERIC(12, 2)
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub amount: Decimal,
    pub category: String,
    /// Kept verbatim, never parsed
    pub date: String,
    pub note: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
