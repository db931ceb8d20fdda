use chrono::NaiveDate;
use uuid::Uuid;

use ledger::{AccountKind, GoalStatus, Ledger, LedgerError, Preset, Window};
use storage::JsonStore;

const COLOR: &str = "hsl(24, 100%, 58%)";

fn store_root() -> std::path::PathBuf {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../target/test_data")
        .join(Uuid::new_v4().to_string());
    std::fs::create_dir_all(&root).unwrap();
    root
}

fn ledger_with_root(root: &std::path::Path) -> Ledger {
    Ledger::builder()
        .store(JsonStore::open(root).unwrap())
        .build()
        .unwrap()
}

fn ledger() -> Ledger {
    ledger_with_root(&store_root())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn category_id(ledger: &Ledger, name: &str) -> Uuid {
    ledger
        .categories()
        .iter()
        .find(|category| category.name == name)
        .map(|category| category.id)
        .expect("seeded category missing")
}

#[test]
fn first_run_seeds_defaults() {
    let ledger = ledger();

    assert_eq!(ledger.accounts().len(), 1);
    assert_eq!(ledger.accounts()[0].name, "Main Account");
    assert_eq!(ledger.accounts()[0].balance, 0.0);
    assert_eq!(ledger.categories().len(), 8);
    assert!(ledger.expenses().is_empty());
    assert!(ledger.goals().is_empty());
    assert!(ledger.visibility().show_goal_progress);
}

#[test]
fn expense_and_income_move_the_account_balance() {
    let mut ledger = ledger();
    let account = ledger.accounts()[0].id;
    let food = category_id(&ledger, "Food");
    let day = date(2026, 8, 10);

    ledger
        .add_expense(25.0, food, "groceries", day, account)
        .unwrap();
    ledger.add_income(100.0, "salary", day, account).unwrap();

    assert_eq!(ledger.account_balance(account).unwrap(), 75.0);
}

#[test]
fn expense_requires_an_existing_account() {
    let mut ledger = ledger();
    let food = category_id(&ledger, "Food");

    let result = ledger.add_expense(10.0, food, "ghost", date(2026, 8, 10), Uuid::new_v4());
    assert_eq!(
        result,
        Err(LedgerError::KeyNotFound("account not exists".to_string()))
    );
    assert!(ledger.expenses().is_empty());
}

#[test]
fn transfer_moves_balance_between_accounts() {
    let mut ledger = ledger();
    let a = ledger
        .add_account("A", 100.0, AccountKind::Checking, COLOR)
        .unwrap();
    let b = ledger
        .add_account("B", 0.0, AccountKind::Savings, COLOR)
        .unwrap();
    let day = date(2026, 8, 10);

    ledger.transfer(a, b, 40.0, "stash", day).unwrap();
    assert_eq!(ledger.account_balance(a).unwrap(), 60.0);
    assert_eq!(ledger.account_balance(b).unwrap(), 40.0);

    // Stored base balances never move; the transfer lives in history.
    let stored_a = ledger.accounts().iter().find(|acc| acc.id == a).unwrap();
    assert_eq!(stored_a.balance, 100.0);

    let result = ledger.transfer(a, b, 200.0, "too much", day);
    assert_eq!(result, Err(LedgerError::InsufficientFunds("A".to_string())));
    assert_eq!(ledger.account_balance(a).unwrap(), 60.0);
    assert_eq!(ledger.account_balance(b).unwrap(), 40.0);
    assert_eq!(ledger.transfers().len(), 1);
}

#[test]
fn transfer_to_the_same_account_is_rejected() {
    let mut ledger = ledger();
    let account = ledger.accounts()[0].id;
    ledger
        .add_income(50.0, "salary", date(2026, 8, 1), account)
        .unwrap();

    let result = ledger.transfer(account, account, 10.0, "loop", date(2026, 8, 10));
    assert_eq!(
        result,
        Err(LedgerError::InvalidTransfer(
            "from and to accounts must differ".to_string()
        ))
    );
    assert!(ledger.transfers().is_empty());
    assert_eq!(ledger.account_balance(account).unwrap(), 50.0);
}

#[test]
fn transfers_conserve_the_total_balance() {
    let mut ledger = ledger();
    let a = ledger
        .add_account("A", 120.0, AccountKind::Checking, COLOR)
        .unwrap();
    let b = ledger
        .add_account("B", 30.0, AccountKind::Cash, COLOR)
        .unwrap();
    let before = ledger.total_balance();

    ledger.transfer(a, b, 45.0, "", date(2026, 8, 10)).unwrap();
    ledger.transfer(b, a, 20.0, "", date(2026, 8, 11)).unwrap();

    assert_eq!(ledger.total_balance(), before);
}

#[test]
fn deleting_the_last_account_is_rejected() {
    let mut ledger = ledger();
    let only = ledger.accounts()[0].id;

    assert_eq!(ledger.delete_account(only), Err(LedgerError::LastAccount));
    assert_eq!(ledger.accounts().len(), 1);

    let second = ledger
        .add_account("Savings", 0.0, AccountKind::Savings, COLOR)
        .unwrap();
    ledger.delete_account(only).unwrap();
    assert_eq!(ledger.accounts().len(), 1);
    assert_eq!(ledger.accounts()[0].id, second);
}

#[test]
fn goal_progress_scenario() {
    let mut ledger = ledger();
    let account = ledger.accounts()[0].id;
    let food = category_id(&ledger, "Food");
    let today = date(2026, 6, 15);

    ledger.set_goal(food, 100.0, None).unwrap();
    ledger
        .add_expense(90.0, food, "groceries", date(2026, 6, 10), account)
        .unwrap();

    let window = Window::Month {
        year: 2026,
        month: 6,
    };
    let report = ledger.goal_report(&window, today);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].spent, 90.0);
    assert_eq!(report[0].progress_pct, 90.0);
    assert_eq!(report[0].status, GoalStatus::Warning);
    // 90 spent over 15 of June's 30 days projects to 180.
    assert_eq!(report[0].projected_spend, 180.0);
}

#[test]
fn goal_upsert_is_keyed_by_category() {
    let mut ledger = ledger();
    let food = category_id(&ledger, "Food");

    let first = ledger.set_goal(food, 100.0, None).unwrap();
    let second = ledger.set_goal(food, 250.0, None).unwrap();

    assert_eq!(first, second);
    assert_eq!(ledger.goals().len(), 1);
    assert_eq!(ledger.goals()[0].monthly_target, 250.0);
}

#[test]
fn deleting_a_category_cascades_to_its_goal() {
    let mut ledger = ledger();
    let food = category_id(&ledger, "Food");
    let bills = category_id(&ledger, "Bills");
    ledger.set_goal(food, 100.0, None).unwrap();
    ledger.set_goal(bills, 50.0, None).unwrap();

    ledger.delete_category(food).unwrap();

    assert_eq!(ledger.categories().len(), 7);
    assert_eq!(ledger.goals().len(), 1);
    assert_eq!(ledger.goals()[0].category_id, bills);
}

#[test]
fn summary_respects_the_window() {
    let mut ledger = ledger();
    let account = ledger.accounts()[0].id;
    let food = category_id(&ledger, "Food");
    let today = date(2026, 8, 23);

    ledger
        .add_expense(10.0, food, "inside", date(2026, 8, 20), account)
        .unwrap();
    ledger
        .add_expense(99.0, food, "outside", date(2025, 1, 1), account)
        .unwrap();
    ledger
        .add_income(40.0, "inside", date(2026, 8, 21), account)
        .unwrap();

    let summary = ledger.summary(&Window::Preset(Preset::PastWeek), today);
    assert_eq!(summary.total_expenses, 10.0);
    assert_eq!(summary.total_income, 40.0);
    assert_eq!(summary.net_balance, 30.0);

    // An unset custom range admits nothing.
    let empty = ledger.summary(
        &Window::Range {
            start: None,
            end: None,
        },
        today,
    );
    assert_eq!(empty.total_expenses, 0.0);
    assert_eq!(empty.total_income, 0.0);
}

#[test]
fn recent_expenses_newest_first_with_stable_ties() {
    let mut ledger = ledger();
    let account = ledger.accounts()[0].id;
    let food = category_id(&ledger, "Food");
    let day = date(2026, 8, 10);

    ledger.add_expense(1.0, food, "old", date(2026, 8, 1), account).unwrap();
    let first = ledger.add_expense(2.0, food, "tie-a", day, account).unwrap();
    let second = ledger.add_expense(3.0, food, "tie-b", day, account).unwrap();

    let recent = ledger.recent_expenses(2);
    assert_eq!(recent.len(), 2);
    // Collections are stored newest first, so the later insert wins ties.
    assert_eq!(recent[0].id, second);
    assert_eq!(recent[1].id, first);
}

#[test]
fn dangling_category_labels_fall_back_to_the_raw_id() {
    let mut ledger = ledger();
    let account = ledger.accounts()[0].id;
    let ghost = Uuid::new_v4();

    ledger
        .add_expense(5.0, ghost, "mystery", date(2026, 8, 10), account)
        .unwrap();

    assert_eq!(ledger.category_label(ghost), ghost.to_string());
    let food = category_id(&ledger, "Food");
    assert_eq!(ledger.category_label(food), "🍕 Food");
}

#[test]
fn rebuild_sees_persisted_state() {
    let root = store_root();
    let account;
    {
        let mut ledger = ledger_with_root(&root);
        account = ledger.accounts()[0].id;
        let food = category_id(&ledger, "Food");
        ledger
            .add_expense(25.0, food, "groceries", date(2026, 8, 10), account)
            .unwrap();
        ledger
            .add_income(100.0, "salary", date(2026, 8, 11), account)
            .unwrap();
        let mut flags = ledger.visibility();
        flags.show_spending_chart = false;
        ledger.set_visibility(flags).unwrap();
    }

    let reloaded = ledger_with_root(&root);
    assert_eq!(reloaded.expenses().len(), 1);
    assert_eq!(reloaded.income().len(), 1);
    assert_eq!(reloaded.account_balance(account).unwrap(), 75.0);
    assert!(!reloaded.visibility().show_spending_chart);
}

#[test]
fn malformed_collection_falls_back_to_its_default() {
    let root = store_root();
    std::fs::write(root.join("honey-expenses.json"), b"{definitely not json").unwrap();
    std::fs::write(root.join("honey-accounts.json"), b"[]").unwrap();

    let ledger = ledger_with_root(&root);
    assert!(ledger.expenses().is_empty());
    // An emptied account collection is reseeded.
    assert_eq!(ledger.accounts().len(), 1);
    assert_eq!(ledger.accounts()[0].name, "Main Account");
}
