//! Persistence gateway for operation records
//!
//! Every method acquires one pooled connection (or transaction) for the
//! duration of the call. A transaction that is dropped without `commit` is
//! rolled back, so early returns and `?` never leave a session open.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryOrder, Set,
    TransactionTrait,
};

use crate::entities::{operations, prelude::*};
use crate::models::operation::NewOperation;

#[derive(Clone)]
pub struct OperationStore {
    db: DatabaseConnection,
}

impl OperationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All operations, ascending by id
    pub async fn list(&self) -> Result<Vec<operations::Model>, DbErr> {
        Operations::find()
            .order_by(operations::Column::Id, Order::Asc)
            .all(&self.db)
            .await
    }

    /// Insert a new row and return it with the id the database assigned
    pub async fn insert(&self, new_operation: NewOperation) -> Result<operations::Model, DbErr> {
        let txn = self.db.begin().await?;

        let model = operations::ActiveModel {
            operation_type: Set(new_operation.operation_type),
            amount: Set(new_operation.amount),
            category: Set(new_operation.category),
            date: Set(new_operation.date),
            note: Set(new_operation.note),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(model)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<operations::Model>, DbErr> {
        Operations::find_by_id(id).one(&self.db).await
    }

    /// Replace every mutable field of an existing row.
    ///
    /// Returns `Ok(None)` when no row has this id.
    pub async fn update(
        &self,
        id: i32,
        fields: NewOperation,
    ) -> Result<Option<operations::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = Operations::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active_model: operations::ActiveModel = existing.into();
        active_model.operation_type = Set(fields.operation_type);
        active_model.amount = Set(fields.amount);
        active_model.category = Set(fields.category);
        active_model.date = Set(fields.date);
        active_model.note = Set(fields.note);

        let updated = active_model.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    /// Remove a row permanently. Returns `false` when no row had this id.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = Operations::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
