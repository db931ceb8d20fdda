//! Income records. Same shape as an expense minus the category.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reports::Monetary;
use crate::window::Dated;
use crate::{LedgerError, ResultLedger};

/// A single income credited to an account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "account")]
    pub account_id: Uuid,
}

impl Income {
    pub fn new(
        amount: f64,
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
            description,
            date,
            account_id,
        })
    }
}

impl Dated for Income {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Monetary for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}
