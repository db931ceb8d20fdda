//! Monthly category goals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{LedgerError, ResultLedger};

/// A user-set monthly spending ceiling for one category.
///
/// The category is the effective key: at most one goal per category is
/// meaningful, and upserts replace the target of an existing goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryGoal {
    pub id: Uuid,
    #[serde(rename = "category")]
    pub category_id: Uuid,
    #[serde(rename = "monthlyTarget")]
    pub monthly_target: f64,
    pub color: String,
}

impl CategoryGoal {
    pub fn new(category_id: Uuid, monthly_target: f64, color: String) -> ResultLedger<Self> {
        if !monthly_target.is_finite() || monthly_target <= 0.0 {
            return Err(LedgerError::InvalidAmount(
                "monthly target must be > 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            category_id,
            monthly_target,
            color,
        })
    }
}
