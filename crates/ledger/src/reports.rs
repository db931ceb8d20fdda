//! Derived-ledger aggregation.
//!
//! Pure functions that turn record snapshots into the figures the views
//! show: totals, category rollups, per-account balances and goal progress.
//! Nothing here mutates state or reads the clock; "now" is always the
//! injected `today`. Aggregation never errors: missing or dangling
//! references degrade to zero/empty.

use std::collections::HashMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::{Account, CategoryGoal, Expense, Income, Transfer};

/// A record carrying a monetary amount.
pub trait Monetary {
    fn amount(&self) -> f64;
}

impl<T: Monetary> Monetary for &T {
    fn amount(&self) -> f64 {
        (*self).amount()
    }
}

/// Windowed expense/income totals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub total_expenses: f64,
    pub total_income: f64,
    pub net_balance: f64,
}

/// Sum of amounts over a record sequence; `0.0` for empty input.
pub fn total_amount<R: Monetary>(records: &[R]) -> f64 {
    records.iter().map(Monetary::amount).sum()
}

/// Groups expenses by category, summing amounts.
///
/// Categories with no matching expense are absent from the map rather
/// than zero-valued.
pub fn spend_by_category(expenses: &[&Expense]) -> HashMap<Uuid, f64> {
    let mut spend = HashMap::new();
    for expense in expenses {
        *spend.entry(expense.category_id).or_insert(0.0) += expense.amount;
    }
    spend
}

/// Current balance of an account, derived over the full ledger history.
///
/// `stored_balance + income in + transfers in - expenses out - transfers
/// out`. Always all-time: analytics windows never apply here.
pub fn account_current_balance(
    account: &Account,
    expenses: &[Expense],
    income: &[Income],
    transfers: &[Transfer],
) -> f64 {
    let income_in: f64 = income
        .iter()
        .filter(|record| record.account_id == account.id)
        .map(|record| record.amount)
        .sum();
    let expenses_out: f64 = expenses
        .iter()
        .filter(|record| record.account_id == account.id)
        .map(|record| record.amount)
        .sum();
    let transfers_in: f64 = transfers
        .iter()
        .filter(|transfer| transfer.to_account_id == account.id)
        .map(|transfer| transfer.amount)
        .sum();
    let transfers_out: f64 = transfers
        .iter()
        .filter(|transfer| transfer.from_account_id == account.id)
        .map(|transfer| transfer.amount)
        .sum();

    account.balance + income_in + transfers_in - expenses_out - transfers_out
}

/// Goal health, derived from spend against the monthly target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Good,
    Warning,
    Exceeded,
}

impl GoalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }
}

/// Progress of one goal, including the month-end projection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: Uuid,
    pub category_id: Uuid,
    pub monthly_target: f64,
    pub spent: f64,
    pub progress_pct: f64,
    pub projected_spend: f64,
    pub projected_pct: f64,
    pub remaining: f64,
    pub status: GoalStatus,
}

/// Computes progress and month-end projection for one goal.
///
/// `spend` is the (window-filtered) per-category rollup; a goal whose
/// category has no entry counts as zero spend. The projection
/// extrapolates the daily average over the days elapsed in the month of
/// `today` to the full month, so it always tracks the current month even
/// when `spend` was filtered to a historical window.
pub fn goal_progress(
    goal: &CategoryGoal,
    spend: &HashMap<Uuid, f64>,
    today: NaiveDate,
) -> GoalProgress {
    let spent = spend.get(&goal.category_id).copied().unwrap_or(0.0);
    let progress_pct = spent / goal.monthly_target * 100.0;

    // `day()` is always >= 1, so the daily average is well defined.
    let daily_average = spent / f64::from(today.day());
    let projected_spend = daily_average * f64::from(days_in_month(today));
    let projected_pct = projected_spend / goal.monthly_target * 100.0;

    let status = if progress_pct > 100.0 {
        GoalStatus::Exceeded
    } else if progress_pct > 80.0 {
        GoalStatus::Warning
    } else {
        GoalStatus::Good
    };

    GoalProgress {
        goal_id: goal.id,
        category_id: goal.category_id,
        monthly_target: goal.monthly_target,
        spent,
        progress_pct,
        projected_spend,
        projected_pct,
        remaining: (goal.monthly_target - spent).max(0.0),
        status,
    }
}

/// Expenses sorted by date descending, truncated to `limit`.
///
/// The sort is stable: expenses on the same date keep their stored order.
pub fn recent_activity(expenses: &[Expense], limit: usize) -> Vec<&Expense> {
    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Number of days in the month `date` belongs to.
fn days_in_month(date: NaiveDate) -> u32 {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .map_or(31, |last| last.day())
}
