use crate::models::{Account, AccountKind, AccountStatus};

/// Filters applied over the cached account list. The search term matches
/// description or category, case-insensitively; empty means "everything".
#[derive(Clone, PartialEq, Default)]
pub struct AccountFilter {
    pub search: String,
    pub status: Option<AccountStatus>,
    pub kind: Option<AccountKind>,
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        let term = self.search.trim().to_lowercase();
        let matches_search = term.is_empty()
            || account.description.to_lowercase().contains(&term)
            || account.category.to_lowercase().contains(&term);
        let matches_status = self.status.map_or(true, |s| account.status == s);
        let matches_kind = self.kind.map_or(true, |k| account.kind == k);
        matches_search && matches_status && matches_kind
    }

    pub fn apply(&self, accounts: &[Account]) -> Vec<Account> {
        accounts
            .iter()
            .filter(|account| self.matches(account))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(description: &str, category: &str, status: AccountStatus, kind: AccountKind) -> Account {
        Account {
            id: description.to_string(),
            description: description.to_string(),
            value: 100.0,
            due_date: "2025-01-10".to_string(),
            status,
            category: category.to_string(),
            kind,
            credit_card: None,
            created_at: "2025-01-01T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = AccountFilter::default();
        let acc = account("Aluguel", "Moradia", AccountStatus::Pending, AccountKind::Expense);
        assert!(filter.matches(&acc));
    }

    #[test]
    fn search_hits_description_and_category_case_insensitively() {
        let accounts = vec![
            account("Aluguel do apartamento", "Moradia", AccountStatus::Pending, AccountKind::Expense),
            account("Salário mensal", "Salário", AccountStatus::Paid, AccountKind::Income),
            account("Supermercado", "Alimentação", AccountStatus::Paid, AccountKind::Expense),
        ];

        let by_description = AccountFilter {
            search: "ALUGUEL".to_string(),
            ..Default::default()
        };
        assert_eq!(by_description.apply(&accounts).len(), 1);

        let by_category = AccountFilter {
            search: "alimenta".to_string(),
            ..Default::default()
        };
        assert_eq!(by_category.apply(&accounts)[0].description, "Supermercado");
    }

    #[test]
    fn status_and_kind_filters_combine_with_search() {
        let accounts = vec![
            account("Conta de luz", "Utilities", AccountStatus::Overdue, AccountKind::Expense),
            account("Conta de água", "Utilities", AccountStatus::Paid, AccountKind::Expense),
            account("Freelance", "Trabalho", AccountStatus::Pending, AccountKind::Income),
        ];

        let filter = AccountFilter {
            search: "conta".to_string(),
            status: Some(AccountStatus::Overdue),
            kind: Some(AccountKind::Expense),
        };
        let hits = filter.apply(&accounts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Conta de luz");
    }

    #[test]
    fn whitespace_only_search_is_ignored() {
        let filter = AccountFilter {
            search: "   ".to_string(),
            ..Default::default()
        };
        let acc = account("Internet", "Serviços", AccountStatus::Pending, AccountKind::Expense);
        assert!(filter.matches(&acc));
    }
}
