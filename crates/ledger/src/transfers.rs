//! Transfer records.
//!
//! A transfer moves balance between two accounts and is zero-sum: the
//! amount debited from the source equals the amount credited to the
//! destination. Stored account balances are never touched; both sides of
//! the move are derived from the transfer history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reports::Monetary;
use crate::window::Dated;
use crate::{LedgerError, ResultLedger};

/// A balance move between two accounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: Uuid,
    pub amount: f64,
    #[serde(rename = "fromAccount")]
    pub from_account_id: Uuid,
    #[serde(rename = "toAccount")]
    pub to_account_id: Uuid,
    pub description: String,
    pub date: NaiveDate,
}

impl Transfer {
    pub fn new(
        amount: f64,
        from_account_id: Uuid,
        to_account_id: Uuid,
        description: String,
        date: NaiveDate,
    ) -> ResultLedger<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            from_account_id,
            to_account_id,
            description,
            date,
        })
    }
}

impl Dated for Transfer {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Monetary for Transfer {
    fn amount(&self) -> f64 {
        self.amount
    }
}
