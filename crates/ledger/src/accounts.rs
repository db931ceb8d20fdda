//! The module contains the `Account` struct and its implementation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{LedgerError, ResultLedger};

pub(crate) const DEFAULT_COLOR: &str = "hsl(24, 100%, 58%)";

/// Kind of real-world account backing the balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
    Cash,
}

impl AccountKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Credit => "credit",
            Self::Cash => "cash",
        }
    }
}

impl TryFrom<&str> for AccountKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "checking" => Ok(Self::Checking),
            "savings" => Ok(Self::Savings),
            "credit" => Ok(Self::Credit),
            "cash" => Ok(Self::Cash),
            other => Err(LedgerError::KeyNotFound(format!(
                "invalid account kind: {other}"
            ))),
        }
    }
}

/// An account.
///
/// Represents a place where money is kept: a bank account, a credit card
/// or physical cash. `balance` is the base balance entered at creation and
/// never mutated afterwards; the current balance is derived from it plus
/// the full ledger history (see [`crate::reports::account_current_balance`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub color: String,
}

impl Account {
    pub fn new(name: String, balance: f64, kind: AccountKind, color: String) -> ResultLedger<Self> {
        if !balance.is_finite() {
            return Err(LedgerError::InvalidAmount(
                "balance must be a finite number".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            balance,
            kind,
            color,
        })
    }
}

/// The single checking account seeded on first run.
pub(crate) fn default_accounts() -> Vec<Account> {
    vec![Account {
        id: Uuid::new_v4(),
        name: "Main Account".to_string(),
        balance: 0.0,
        kind: AccountKind::Checking,
        color: DEFAULT_COLOR.to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            AccountKind::Checking,
            AccountKind::Savings,
            AccountKind::Credit,
            AccountKind::Cash,
        ] {
            assert_eq!(AccountKind::try_from(kind.as_str()).unwrap(), kind);
        }
        assert!(AccountKind::try_from("loan").is_err());
    }

    #[test]
    fn seeded_account_is_an_empty_checking_account() {
        let accounts = default_accounts();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Main Account");
        assert_eq!(accounts[0].balance, 0.0);
        assert_eq!(accounts[0].kind, AccountKind::Checking);
    }

    #[test]
    fn rejects_non_finite_base_balance() {
        let result = Account::new(
            "Main".to_string(),
            f64::NAN,
            AccountKind::Cash,
            DEFAULT_COLOR.to_string(),
        );
        assert!(result.is_err());
    }
}
