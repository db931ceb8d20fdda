//! Collection keys, kept identical to the original app's storage names so
//! an exported data directory stays recognizable.

pub const EXPENSES: &str = "honey-expenses";
pub const INCOME: &str = "honey-income";
pub const ACCOUNTS: &str = "honey-accounts";
pub const CATEGORIES: &str = "honey-categories";
pub const GOALS: &str = "honey-goals";
pub const TRANSFERS: &str = "honey-transfers";
pub const DASHBOARD: &str = "honey-dashboard-settings";
