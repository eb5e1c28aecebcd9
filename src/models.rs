use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Paid,
    Overdue,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "pending",
            AccountStatus::Paid => "paid",
            AccountStatus::Overdue => "overdue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "Pendente",
            AccountStatus::Paid => "Pago",
            AccountStatus::Overdue => "Vencido",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(AccountStatus::Pending),
            "paid" => Some(AccountStatus::Paid),
            "overdue" => Some(AccountStatus::Overdue),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Income,
    Expense,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Income => "income",
            AccountKind::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Income => "Receita",
            AccountKind::Expense => "Despesa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(AccountKind::Income),
            "expense" => Some(AccountKind::Expense),
            _ => None,
        }
    }
}

/// A bill (receita ou despesa) as the backend stores it. `value` is always
/// a positive magnitude; direction comes from `kind`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub description: String,
    pub value: f64,
    pub due_date: String,
    pub status: AccountStatus,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub credit_card: Option<String>,
    pub created_at: String,
}

/// Creation/update payload: everything the user controls, without the
/// server-assigned `id`/`createdAt`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDraft {
    pub description: String,
    pub value: f64,
    pub due_date: String,
    pub status: AccountStatus,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub credit_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_months: Option<u32>,
}

#[derive(Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub pending_accounts: usize,
    pub overdue_accounts: usize,
    pub paid_accounts: usize,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub username: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct RegisterCredentials {
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Backend response for a CSV import upload.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ImportOutcome {
    #[serde(default)]
    pub imported: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_uses_wire_field_names() {
        let json = r#"{
            "id": "7",
            "description": "Aluguel do apartamento",
            "value": 1200.0,
            "dueDate": "2025-01-10",
            "status": "pending",
            "category": "Moradia",
            "type": "expense",
            "creditCard": "Nubank Roxinho",
            "createdAt": "2025-01-01T08:00:00Z"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.due_date, "2025-01-10");
        assert_eq!(account.status, AccountStatus::Pending);
        assert_eq!(account.kind, AccountKind::Expense);
        assert_eq!(account.credit_card.as_deref(), Some("Nubank Roxinho"));
    }

    #[test]
    fn draft_omits_recurring_fields_when_unset() {
        let draft = AccountDraft {
            description: "Conta de luz".to_string(),
            value: 180.0,
            due_date: "2025-02-25".to_string(),
            status: AccountStatus::Pending,
            category: "Utilities".to_string(),
            kind: AccountKind::Expense,
            credit_card: None,
            is_recurring: None,
            recurring_months: None,
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"dueDate\""));
        assert!(json.contains("\"type\":\"expense\""));
        assert!(!json.contains("isRecurring"));
        assert!(!json.contains("recurringMonths"));
    }

    #[test]
    fn draft_carries_recurring_fields_when_set() {
        let draft = AccountDraft {
            description: "Assinatura".to_string(),
            value: 39.9,
            due_date: "2025-03-01".to_string(),
            status: AccountStatus::Pending,
            category: "Serviços".to_string(),
            kind: AccountKind::Expense,
            credit_card: None,
            is_recurring: Some(true),
            recurring_months: Some(6),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"isRecurring\":true"));
        assert!(json.contains("\"recurringMonths\":6"));
    }

    #[test]
    fn status_and_kind_round_trip_select_values() {
        for status in [
            AccountStatus::Pending,
            AccountStatus::Paid,
            AccountStatus::Overdue,
        ] {
            assert_eq!(AccountStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AccountStatus::parse(""), None);
        assert_eq!(AccountKind::parse("income"), Some(AccountKind::Income));
        assert_eq!(AccountKind::parse("both"), None);
    }
}
