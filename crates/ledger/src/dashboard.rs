//! Dashboard visibility preferences. Purely presentational; the ledger
//! only stores and hands them back.

use serde::{Deserialize, Serialize};

/// Per-section visibility flags for the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardVisibility {
    pub show_recent_transactions: bool,
    pub show_spending_chart: bool,
    pub show_budget_overview: bool,
    pub show_account_balances: bool,
    pub show_goal_progress: bool,
}

impl Default for DashboardVisibility {
    fn default() -> Self {
        Self {
            show_recent_transactions: true,
            show_spending_chart: true,
            show_budget_overview: true,
            show_account_balances: true,
            show_goal_progress: true,
        }
    }
}
