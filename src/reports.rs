use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Account, AccountKind, AccountStatus, DashboardStats};

/// Single pass over the full (unfiltered) list.
pub fn dashboard_stats(accounts: &[Account]) -> DashboardStats {
    let mut stats = DashboardStats::default();
    for account in accounts {
        match account.kind {
            AccountKind::Income => stats.total_income += account.value,
            AccountKind::Expense => stats.total_expenses += account.value,
        }
        match account.status {
            AccountStatus::Pending => stats.pending_accounts += 1,
            AccountStatus::Overdue => stats.overdue_accounts += 1,
            AccountStatus::Paid => stats.paid_accounts += 1,
        }
    }
    stats.balance = stats.total_income - stats.total_expenses;
    stats
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

const SHORT_MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Column header: "jun 2025".
    pub fn label(&self) -> String {
        format!("{} {}", SHORT_MONTHS[(self.month - 1) as usize], self.year)
    }

    fn back(self, months: u32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) - months as i32;
        MonthKey {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }
}

/// The three calendar months ending in the month of `today`, oldest first.
pub fn report_months(today: NaiveDate) -> [MonthKey; 3] {
    let current = MonthKey::of(today);
    [current.back(2), current.back(1), current]
}

fn due_month(account: &Account) -> Option<MonthKey> {
    NaiveDate::parse_from_str(&account.due_date, "%Y-%m-%d")
        .ok()
        .map(MonthKey::of)
}

#[derive(Clone, PartialEq)]
pub struct MonthlyRow {
    pub description: String,
    pub by_month: Vec<f64>,
    pub total: f64,
}

#[derive(Clone, PartialEq, Default)]
pub struct MonthlyTable {
    pub rows: Vec<MonthlyRow>,
    pub month_totals: Vec<f64>,
    pub grand_total: f64,
}

#[derive(Clone, PartialEq)]
pub struct MonthlyReportData {
    pub months: Vec<MonthKey>,
    pub income: MonthlyTable,
    pub expense: MonthlyTable,
    pub balance_by_month: Vec<f64>,
    pub total_balance: f64,
    pub unique_descriptions: usize,
}

fn build_table(accounts: &[Account], months: &[MonthKey], kind: AccountKind) -> MonthlyTable {
    // BTreeMap keeps rows sorted by description.
    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for account in accounts.iter().filter(|a| a.kind == kind) {
        let Some(due) = due_month(account) else {
            continue;
        };
        let Some(index) = months.iter().position(|m| *m == due) else {
            continue;
        };
        grouped
            .entry(account.description.clone())
            .or_insert_with(|| vec![0.0; months.len()])[index] += account.value;
    }

    let mut month_totals = vec![0.0; months.len()];
    let mut rows = Vec::with_capacity(grouped.len());
    for (description, by_month) in grouped {
        for (i, value) in by_month.iter().enumerate() {
            month_totals[i] += value;
        }
        let total = by_month.iter().sum();
        rows.push(MonthlyRow {
            description,
            by_month,
            total,
        });
    }
    let grand_total = month_totals.iter().sum();
    MonthlyTable {
        rows,
        month_totals,
        grand_total,
    }
}

/// Pivot report over the three months ending at `today`. Accounts whose due
/// date falls outside the rendered columns are left out entirely.
pub fn build_monthly_report(accounts: &[Account], today: NaiveDate) -> MonthlyReportData {
    let months = report_months(today);
    let income = build_table(accounts, &months, AccountKind::Income);
    let expense = build_table(accounts, &months, AccountKind::Expense);
    let balance_by_month: Vec<f64> = months
        .iter()
        .enumerate()
        .map(|(i, _)| income.month_totals[i] - expense.month_totals[i])
        .collect();
    let total_balance = income.grand_total - expense.grand_total;
    let unique_descriptions = income.rows.len() + expense.rows.len();
    MonthlyReportData {
        months: months.to_vec(),
        income,
        expense,
        balance_by_month,
        total_balance,
        unique_descriptions,
    }
}

pub const MIN_PEOPLE: u32 = 1;
pub const MAX_PEOPLE: u32 = 10;
pub const DEFAULT_PEOPLE: u32 = 2;

pub fn clamp_people(people: u32) -> u32 {
    people.clamp(MIN_PEOPLE, MAX_PEOPLE)
}

/// Each person's part of a shared bill.
pub fn share_of(value: f64, people: u32) -> f64 {
    value / clamp_people(people) as f64
}

#[derive(Clone, PartialEq, Default)]
pub struct SharingTotals {
    pub accounts_count: usize,
    pub total_value: f64,
    pub total_share: f64,
}

pub fn sharing_totals(selected: &[(Account, u32)]) -> SharingTotals {
    let mut totals = SharingTotals {
        accounts_count: selected.len(),
        ..Default::default()
    };
    for (account, people) in selected {
        totals.total_value += account.value;
        totals.total_share += share_of(account.value, *people);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(description: &str, value: f64, due: &str, kind: AccountKind, status: AccountStatus) -> Account {
        Account {
            id: format!("{}-{}", description, due),
            description: description.to_string(),
            value,
            due_date: due.to_string(),
            status,
            category: "Geral".to_string(),
            kind,
            credit_card: None,
            created_at: "2025-01-01T08:00:00Z".to_string(),
        }
    }

    fn income(description: &str, value: f64, due: &str) -> Account {
        account(description, value, due, AccountKind::Income, AccountStatus::Paid)
    }

    fn expense(description: &str, value: f64, due: &str) -> Account {
        account(description, value, due, AccountKind::Expense, AccountStatus::Pending)
    }

    #[test]
    fn stats_split_totals_by_kind_and_count_by_status() {
        let accounts = vec![
            income("Salário", 5000.0, "2025-01-05"),
            expense("Aluguel", 1200.0, "2025-01-10"),
            account("Luz", 180.0, "2024-12-25", AccountKind::Expense, AccountStatus::Overdue),
            income("Freelance", 2500.0, "2025-01-15"),
        ];
        let stats = dashboard_stats(&accounts);
        assert_eq!(stats.total_income, 7500.0);
        assert_eq!(stats.total_expenses, 1380.0);
        assert_eq!(stats.balance, 6120.0);
        assert_eq!(stats.pending_accounts, 1);
        assert_eq!(stats.overdue_accounts, 1);
        assert_eq!(stats.paid_accounts, 2);
    }

    #[test]
    fn stats_on_empty_list_are_zero() {
        let stats = dashboard_stats(&[]);
        assert_eq!(stats.balance, 0.0);
        assert_eq!(stats.pending_accounts, 0);
    }

    #[test]
    fn report_months_cross_year_boundaries() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let months = report_months(today);
        assert_eq!(months[0], MonthKey { year: 2024, month: 11 });
        assert_eq!(months[1], MonthKey { year: 2024, month: 12 });
        assert_eq!(months[2], MonthKey { year: 2025, month: 1 });
    }

    #[test]
    fn month_labels_use_pt_br_short_names() {
        assert_eq!(MonthKey { year: 2025, month: 6 }.label(), "jun 2025");
        assert_eq!(MonthKey { year: 2024, month: 12 }.label(), "dez 2024");
        assert_eq!(MonthKey { year: 2025, month: 2 }.label(), "fev 2025");
    }

    #[test]
    fn report_groups_by_description_and_sums_within_a_month() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let accounts = vec![
            expense("Supermercado", 300.0, "2025-06-02"),
            expense("Supermercado", 150.0, "2025-06-20"),
            expense("Supermercado", 280.0, "2025-05-03"),
            expense("Aluguel", 1200.0, "2025-06-10"),
            income("Salário", 5000.0, "2025-06-05"),
        ];
        let report = build_monthly_report(&accounts, today);

        assert_eq!(report.expense.rows.len(), 2);
        // rows come out sorted by description
        assert_eq!(report.expense.rows[0].description, "Aluguel");
        let market = &report.expense.rows[1];
        assert_eq!(market.by_month, vec![0.0, 280.0, 450.0]);
        assert_eq!(market.total, 730.0);
    }

    #[test]
    fn report_excludes_accounts_outside_the_window() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let accounts = vec![
            expense("Antiga", 999.0, "2025-03-31"),
            expense("Futura", 500.0, "2025-07-01"),
            expense("Dentro", 100.0, "2025-04-01"),
        ];
        let report = build_monthly_report(&accounts, today);
        assert_eq!(report.expense.rows.len(), 1);
        assert_eq!(report.expense.rows[0].description, "Dentro");
        assert_eq!(report.expense.grand_total, 100.0);
    }

    #[test]
    fn report_skips_unparseable_due_dates() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let accounts = vec![expense("Quebrada", 10.0, "10/06/2025")];
        let report = build_monthly_report(&accounts, today);
        assert!(report.expense.rows.is_empty());
    }

    #[test]
    fn column_totals_equal_sum_of_rows_and_balance_subtracts() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let accounts = vec![
            income("Salário", 5000.0, "2025-05-05"),
            income("Salário", 5000.0, "2025-06-05"),
            expense("Aluguel", 1200.0, "2025-05-10"),
            expense("Aluguel", 1200.0, "2025-06-10"),
            expense("Internet", 99.9, "2025-06-15"),
        ];
        let report = build_monthly_report(&accounts, today);
        assert_eq!(report.income.month_totals, vec![0.0, 5000.0, 5000.0]);
        assert_eq!(report.expense.month_totals, vec![0.0, 1200.0, 1299.9]);
        assert_eq!(report.balance_by_month, vec![0.0, 3800.0, 3700.1]);
        assert!((report.total_balance - 7500.1).abs() < 1e-9);
        assert_eq!(report.unique_descriptions, 3);
    }

    #[test]
    fn shares_divide_by_head_count() {
        assert_eq!(share_of(90.0, 3), 30.0);
        assert_eq!(share_of(100.0, 1), 100.0);
    }

    #[test]
    fn head_count_is_clamped_to_bounds() {
        assert_eq!(clamp_people(0), 1);
        assert_eq!(clamp_people(2), 2);
        assert_eq!(clamp_people(99), 10);
        // out-of-range input divides by the clamped count, never by zero
        assert_eq!(share_of(50.0, 0), 50.0);
    }

    #[test]
    fn sharing_totals_sum_values_and_shares() {
        let selected = vec![
            (expense("Jantar", 240.0, "2025-06-01"), 4),
            (expense("Mercado", 300.0, "2025-06-02"), 2),
        ];
        let totals = sharing_totals(&selected);
        assert_eq!(totals.accounts_count, 2);
        assert_eq!(totals.total_value, 540.0);
        assert_eq!(totals.total_share, 210.0);
    }

    #[test]
    fn sharing_totals_empty_selection() {
        let totals = sharing_totals(&[]);
        assert_eq!(totals.accounts_count, 0);
        assert_eq!(totals.total_value, 0.0);
    }
}
