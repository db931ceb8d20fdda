//! Expense records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reports::Monetary;
use crate::window::Dated;
use crate::{LedgerError, ResultLedger};

/// A single expense debited from an account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    /// References a [`crate::Category`]. The reference is not enforced: a
    /// dangling id degrades to showing the raw id as the label.
    #[serde(rename = "category")]
    pub category_id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "account")]
    pub account_id: Uuid,
}

impl Expense {
    pub fn new(
        amount: f64,
        category_id: Uuid,
        description: String,
        date: NaiveDate,
        account_id: Uuid,
    ) -> ResultLedger<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            category_id,
            description,
            date,
            account_id,
        })
    }
}

impl Dated for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Monetary for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}
