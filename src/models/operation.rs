//! Request and response shapes for the /operations endpoints

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::entities::operations;
use crate::error::ApiError;

/// Fractional digits kept for amounts (NUMERIC(12, 2))
pub const AMOUNT_SCALE: u32 = 2;

/// Integer digits allowed before the decimal point
pub const AMOUNT_INTEGER_DIGITS: u32 = 10;

/// Body of create and update requests. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationPayload {
    #[serde(rename = "type")]
    pub operation_type: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub category: String,
    pub date: String,
    pub note: String,
}

/// A payload that passed validation, with its amount normalized to two
/// fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOperation {
    pub operation_type: String,
    pub amount: Decimal,
    pub category: String,
    pub date: String,
    pub note: String,
}

impl OperationPayload {
    /// Check the field rules that JSON typing alone does not cover
    pub fn validate(self) -> Result<NewOperation, ApiError> {
        if self.operation_type.trim().is_empty() {
            return Err(ApiError::Validation("type must not be empty".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(ApiError::Validation(
                "category must not be empty".to_string(),
            ));
        }

        Ok(NewOperation {
            operation_type: self.operation_type,
            amount: normalize_amount(self.amount)?,
            category: self.category,
            date: self.date,
            note: self.note,
        })
    }

    /// Compact JSON rendering for request logs
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Round to two fractional digits (half away from zero) and reject amounts
/// that do not fit in NUMERIC(12, 2).
pub fn normalize_amount(amount: Decimal) -> Result<Decimal, ApiError> {
    let mut rounded =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(AMOUNT_SCALE);

    let limit = Decimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS));
    if rounded.abs() >= limit {
        return Err(ApiError::Validation(format!(
            "amount {} exceeds {} integer digits",
            amount, AMOUNT_INTEGER_DIGITS
        )));
    }

    Ok(rounded)
}

/// Response for operation queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub operation_type: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub category: String,
    pub date: String,
    pub note: String,
}

impl From<operations::Model> for OperationResponse {
    fn from(model: operations::Model) -> Self {
        let mut amount = model.amount;
        amount.rescale(AMOUNT_SCALE);

        Self {
            id: model.id,
            operation_type: model.operation_type,
            amount,
            category: model.category,
            date: model.date,
            note: model.note,
        }
    }
}
