//! The derived-ledger engine.
//!
//! Owns the raw record collections (expenses, income, transfers, accounts,
//! categories, goals, dashboard flags) and derives every figure the views
//! show: totals, category rollups, per-account balances and goal progress.
//! The persisted collections are the only state; derived values are
//! recomputed in full on every read. Each mutation writes the affected
//! collection straight back to the injected [`JsonStore`].

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

pub use accounts::{Account, AccountKind};
pub use categories::{Category, default_categories, resolve_label};
pub use dashboard::DashboardVisibility;
pub use error::LedgerError;
pub use expenses::Expense;
pub use goals::CategoryGoal;
pub use income::Income;
pub use reports::{GoalProgress, GoalStatus, Monetary, Summary};
pub use transfers::Transfer;
pub use window::{Dated, Preset, Window, filter_by_window};

use storage::{JsonStore, keys};

mod accounts;
mod categories;
mod dashboard;
mod error;
mod expenses;
mod goals;
mod income;
pub mod reports;
mod transfers;
mod window;

type ResultLedger<T> = Result<T, LedgerError>;

#[derive(Debug)]
pub struct Ledger {
    expenses: Vec<Expense>,
    income: Vec<Income>,
    accounts: Vec<Account>,
    categories: Vec<Category>,
    goals: Vec<CategoryGoal>,
    transfers: Vec<Transfer>,
    dashboard: DashboardVisibility,
    store: JsonStore,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    fn account(&self, account_id: Uuid) -> ResultLedger<&Account> {
        self.accounts
            .iter()
            .find(|account| account.id == account_id)
            .ok_or_else(|| LedgerError::KeyNotFound("account not exists".to_string()))
    }

    fn persist_expenses(&self) -> ResultLedger<()> {
        Ok(self.store.save(keys::EXPENSES, &self.expenses)?)
    }

    fn persist_income(&self) -> ResultLedger<()> {
        Ok(self.store.save(keys::INCOME, &self.income)?)
    }

    fn persist_accounts(&self) -> ResultLedger<()> {
        Ok(self.store.save(keys::ACCOUNTS, &self.accounts)?)
    }

    fn persist_categories(&self) -> ResultLedger<()> {
        Ok(self.store.save(keys::CATEGORIES, &self.categories)?)
    }

    fn persist_goals(&self) -> ResultLedger<()> {
        Ok(self.store.save(keys::GOALS, &self.goals)?)
    }

    fn persist_transfers(&self) -> ResultLedger<()> {
        Ok(self.store.save(keys::TRANSFERS, &self.transfers)?)
    }

    /// Records an expense debited from an account.
    ///
    /// The account must exist; the category reference is not enforced.
    pub fn add_expense(
        &mut self,
        amount: f64,
        category_id: Uuid,
        description: &str,
        date: NaiveDate,
        account_id: Uuid,
    ) -> ResultLedger<Uuid> {
        self.account(account_id)?;
        let expense = Expense::new(
            amount,
            category_id,
            description.to_string(),
            date,
            account_id,
        )?;
        let id = expense.id;
        // Newest first, matching the stored order of the collections.
        self.expenses.insert(0, expense);
        self.persist_expenses()?;
        Ok(id)
    }

    /// Records an income credited to an account.
    pub fn add_income(
        &mut self,
        amount: f64,
        description: &str,
        date: NaiveDate,
        account_id: Uuid,
    ) -> ResultLedger<Uuid> {
        self.account(account_id)?;
        let income = Income::new(amount, description.to_string(), date, account_id)?;
        let id = income.id;
        self.income.insert(0, income);
        self.persist_income()?;
        Ok(id)
    }

    pub fn delete_expense(&mut self, expense_id: Uuid) -> ResultLedger<Expense> {
        match self
            .expenses
            .iter()
            .position(|expense| expense.id == expense_id)
        {
            Some(index) => {
                let expense = self.expenses.remove(index);
                self.persist_expenses()?;
                Ok(expense)
            }
            None => Err(LedgerError::KeyNotFound(expense_id.to_string())),
        }
    }

    pub fn delete_income(&mut self, income_id: Uuid) -> ResultLedger<Income> {
        match self.income.iter().position(|income| income.id == income_id) {
            Some(index) => {
                let income = self.income.remove(index);
                self.persist_income()?;
                Ok(income)
            }
            None => Err(LedgerError::KeyNotFound(income_id.to_string())),
        }
    }

    /// Add a new account with its base balance.
    pub fn add_account(
        &mut self,
        name: &str,
        balance: f64,
        kind: AccountKind,
        color: &str,
    ) -> ResultLedger<Uuid> {
        let account = Account::new(name.to_string(), balance, kind, color.to_string())?;
        let id = account.id;
        self.accounts.push(account);
        self.persist_accounts()?;
        Ok(id)
    }

    /// Delete an account.
    ///
    /// Rejected while it is the only account: at least one account must
    /// always exist.
    pub fn delete_account(&mut self, account_id: Uuid) -> ResultLedger<Account> {
        if self.accounts.len() <= 1 {
            return Err(LedgerError::LastAccount);
        }
        match self
            .accounts
            .iter()
            .position(|account| account.id == account_id)
        {
            Some(index) => {
                let account = self.accounts.remove(index);
                self.persist_accounts()?;
                Ok(account)
            }
            None => Err(LedgerError::KeyNotFound(account_id.to_string())),
        }
    }

    pub fn add_category(
        &mut self,
        name: &str,
        emoji: &str,
        color: &str,
    ) -> ResultLedger<Uuid> {
        let category = Category::new(name.to_string(), emoji.to_string(), color.to_string());
        let id = category.id;
        self.categories.push(category);
        self.persist_categories()?;
        Ok(id)
    }

    /// Delete a category, cascading to any goal that references it.
    ///
    /// Goals have no orphan state: the cascade keeps the goal collection
    /// free of dangling category references.
    pub fn delete_category(&mut self, category_id: Uuid) -> ResultLedger<Category> {
        match self
            .categories
            .iter()
            .position(|category| category.id == category_id)
        {
            Some(index) => {
                let category = self.categories.remove(index);
                let had_goal = self.goals.iter().any(|goal| goal.category_id == category_id);
                self.goals.retain(|goal| goal.category_id != category_id);
                self.persist_categories()?;
                if had_goal {
                    self.persist_goals()?;
                }
                Ok(category)
            }
            None => Err(LedgerError::KeyNotFound(category_id.to_string())),
        }
    }

    /// Set the monthly goal for a category, replacing any existing one.
    ///
    /// The category is the effective key. When `color` is `None`, a new
    /// goal inherits the category's color.
    pub fn set_goal(
        &mut self,
        category_id: Uuid,
        monthly_target: f64,
        color: Option<&str>,
    ) -> ResultLedger<Uuid> {
        let category_color = self
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .map(|category| category.color.clone())
            .ok_or_else(|| LedgerError::KeyNotFound("category not exists".to_string()))?;
        if !monthly_target.is_finite() || monthly_target <= 0.0 {
            return Err(LedgerError::InvalidAmount(
                "monthly target must be > 0".to_string(),
            ));
        }

        let id = match self
            .goals
            .iter_mut()
            .find(|goal| goal.category_id == category_id)
        {
            Some(goal) => {
                goal.monthly_target = monthly_target;
                if let Some(color) = color {
                    goal.color = color.to_string();
                }
                goal.id
            }
            None => {
                let color = color.map_or(category_color, |c| c.to_string());
                let goal = CategoryGoal::new(category_id, monthly_target, color)?;
                let id = goal.id;
                self.goals.push(goal);
                id
            }
        };
        self.persist_goals()?;
        Ok(id)
    }

    pub fn remove_goal(&mut self, category_id: Uuid) -> ResultLedger<CategoryGoal> {
        match self
            .goals
            .iter()
            .position(|goal| goal.category_id == category_id)
        {
            Some(index) => {
                let goal = self.goals.remove(index);
                self.persist_goals()?;
                Ok(goal)
            }
            None => Err(LedgerError::KeyNotFound(category_id.to_string())),
        }
    }

    /// Move balance between two accounts.
    ///
    /// Rejected when source and destination coincide or when the source's
    /// derived current balance does not cover the amount. Stored base
    /// balances stay untouched; the move lives in the transfer history.
    pub fn transfer(
        &mut self,
        from_account_id: Uuid,
        to_account_id: Uuid,
        amount: f64,
        description: &str,
        date: NaiveDate,
    ) -> ResultLedger<Uuid> {
        if from_account_id == to_account_id {
            return Err(LedgerError::InvalidTransfer(
                "from and to accounts must differ".to_string(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        self.account(to_account_id)?;
        let from = self.account(from_account_id)?;
        let available =
            reports::account_current_balance(from, &self.expenses, &self.income, &self.transfers);
        if available < amount {
            return Err(LedgerError::InsufficientFunds(from.name.clone()));
        }

        let description = if description.trim().is_empty() {
            "Transfer"
        } else {
            description
        };
        let transfer = Transfer::new(
            amount,
            from_account_id,
            to_account_id,
            description.to_string(),
            date,
        )?;
        let id = transfer.id;
        self.transfers.insert(0, transfer);
        self.persist_transfers()?;
        Ok(id)
    }

    /// Windowed expense/income totals and their net balance.
    pub fn summary(&self, window: &Window, today: NaiveDate) -> Summary {
        let expenses = filter_by_window(&self.expenses, window, today);
        let income = filter_by_window(&self.income, window, today);
        let total_expenses = reports::total_amount(&expenses);
        let total_income = reports::total_amount(&income);
        Summary {
            total_expenses,
            total_income,
            net_balance: total_income - total_expenses,
        }
    }

    /// Windowed per-category spend rollup.
    pub fn spend_by_category(&self, window: &Window, today: NaiveDate) -> HashMap<Uuid, f64> {
        let expenses = filter_by_window(&self.expenses, window, today);
        reports::spend_by_category(&expenses)
    }

    /// Current balance of one account, over the full (unfiltered) history.
    pub fn account_balance(&self, account_id: Uuid) -> ResultLedger<f64> {
        let account = self.account(account_id)?;
        Ok(reports::account_current_balance(
            account,
            &self.expenses,
            &self.income,
            &self.transfers,
        ))
    }

    /// Sum of all accounts' current balances.
    pub fn total_balance(&self) -> f64 {
        self.accounts
            .iter()
            .map(|account| {
                reports::account_current_balance(
                    account,
                    &self.expenses,
                    &self.income,
                    &self.transfers,
                )
            })
            .sum()
    }

    /// Progress of every goal against the windowed category spend.
    pub fn goal_report(&self, window: &Window, today: NaiveDate) -> Vec<GoalProgress> {
        let spend = self.spend_by_category(window, today);
        self.goals
            .iter()
            .map(|goal| reports::goal_progress(goal, &spend, today))
            .collect()
    }

    /// Latest expenses, newest first.
    pub fn recent_expenses(&self, limit: usize) -> Vec<&Expense> {
        reports::recent_activity(&self.expenses, limit)
    }

    /// Display label for a category id, falling back to the raw id.
    pub fn category_label(&self, category_id: Uuid) -> String {
        categories::resolve_label(&self.categories, category_id)
    }

    pub fn visibility(&self) -> DashboardVisibility {
        self.dashboard
    }

    pub fn set_visibility(&mut self, flags: DashboardVisibility) -> ResultLedger<()> {
        self.dashboard = flags;
        Ok(self.store.save(keys::DASHBOARD, &self.dashboard)?)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn income(&self) -> &[Income] {
        &self.income
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn goals(&self) -> &[CategoryGoal] {
        &self.goals
    }
}

/// The builder for `Ledger`.
#[derive(Default)]
pub struct LedgerBuilder {
    store: Option<JsonStore>,
}

impl LedgerBuilder {
    /// Pass the required record store.
    pub fn store(mut self, store: JsonStore) -> LedgerBuilder {
        self.store = Some(store);
        self
    }

    /// Construct `Ledger`, loading every persisted collection.
    ///
    /// Missing collections get their defaults: one seeded checking
    /// account, the eight stock categories, everything else empty. An
    /// account collection that somehow lost all entries is reseeded so
    /// the at-least-one-account invariant holds from the start.
    pub fn build(self) -> ResultLedger<Ledger> {
        let store = self
            .store
            .ok_or_else(|| LedgerError::KeyNotFound("missing record store".to_string()))?;

        let mut accounts: Vec<Account> = store.load_or(keys::ACCOUNTS, accounts::default_accounts);
        if accounts.is_empty() {
            accounts = accounts::default_accounts();
        }

        Ok(Ledger {
            expenses: store.load(keys::EXPENSES),
            income: store.load(keys::INCOME),
            accounts,
            categories: store.load_or(keys::CATEGORIES, categories::default_categories),
            goals: store.load(keys::GOALS),
            transfers: store.load(keys::TRANSFERS),
            dashboard: store.load(keys::DASHBOARD),
            store,
        })
    }
}
