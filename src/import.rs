use chrono::NaiveDate;
use thiserror::Error;

/// Banks with a supported statement export. The backend receives this as
/// the `bank` form field.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    C6,
    Nubank,
}

pub const BANKS: [Bank; 2] = [Bank::C6, Bank::Nubank];

/// Maximum accepted upload, matching the backend limit.
pub const MAX_FILE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

struct BankProfile {
    delimiter: u8,
    date_column: &'static str,
    description_column: &'static str,
    amount_column: &'static str,
    date_format: &'static str,
    decimal_comma: bool,
}

impl Bank {
    pub fn label(&self) -> &'static str {
        match self {
            Bank::C6 => "C6",
            Bank::Nubank => "Nubank",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Bank::C6 => "Extrato do C6 Bank (formato padrão)",
            Bank::Nubank => "Extrato do Nubank (formato padrão)",
        }
    }

    fn profile(&self) -> BankProfile {
        match self {
            Bank::C6 => BankProfile {
                delimiter: b';',
                date_column: "Data Lançamento",
                description_column: "Descrição",
                amount_column: "Valor",
                date_format: "%d/%m/%Y",
                decimal_comma: true,
            },
            Bank::Nubank => BankProfile {
                delimiter: b',',
                date_column: "Data",
                description_column: "Descrição",
                amount_column: "Valor",
                date_format: "%d/%m/%Y",
                decimal_comma: false,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("arquivo vazio")]
    Empty,
    #[error("coluna '{0}' não encontrada no cabeçalho")]
    MissingColumn(String),
    #[error("CSV inválido: {0}")]
    Csv(#[from] csv::Error),
}

/// What the client learned from parsing the statement before upload. The
/// backend remains authoritative for persistence and duplicate suppression.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CsvPreview {
    pub importable: usize,
    pub skipped: usize,
    pub income_total: f64,
    pub expense_total: f64,
}

fn parse_amount(raw: &str, decimal_comma: bool) -> Option<f64> {
    let cleaned = raw.trim().replace("R$", "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    let normalized = if decimal_comma {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };
    normalized.parse::<f64>().ok()
}

/// Parses the statement text, counting rows that would import and rows that
/// would be skipped (bad date or amount). Skipped rows are never fatal.
pub fn preview_csv(bank: Bank, text: &str) -> Result<CsvPreview, ImportError> {
    let profile = bank.profile();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(profile.delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].trim().is_empty()) {
        return Err(ImportError::Empty);
    }

    let column = |name: &str| -> Result<usize, ImportError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| ImportError::MissingColumn(name.to_string()))
    };
    let date_idx = column(profile.date_column)?;
    let desc_idx = column(profile.description_column)?;
    let amount_idx = column(profile.amount_column)?;

    let mut preview = CsvPreview::default();
    for record in reader.records() {
        let record = record?;
        let date_ok = record
            .get(date_idx)
            .map(str::trim)
            .and_then(|raw| NaiveDate::parse_from_str(raw, profile.date_format).ok())
            .is_some();
        let amount = record
            .get(amount_idx)
            .and_then(|raw| parse_amount(raw, profile.decimal_comma));
        let has_description = record
            .get(desc_idx)
            .map(|raw| !raw.trim().is_empty())
            .unwrap_or(false);

        match (date_ok && has_description, amount) {
            (true, Some(value)) => {
                preview.importable += 1;
                if value >= 0.0 {
                    preview.income_total += value;
                } else {
                    preview.expense_total += -value;
                }
            }
            _ => preview.skipped += 1,
        }
    }
    Ok(preview)
}

#[cfg(test)]
mod tests {
    use super::*;

    const C6_STATEMENT: &str = "\
Data Lançamento;Descrição;Valor
05/01/2025;Salário mensal;5.000,00
10/01/2025;Aluguel do apartamento;-1.200,00
12/01/2025;Supermercado;-450,75
";

    const NUBANK_STATEMENT: &str = "\
Data,Valor,Identificador,Descrição
05/01/2025,5000.00,abc-1,Transferência recebida
10/01/2025,-1200.00,abc-2,Pagamento de boleto
";

    #[test]
    fn c6_statement_parses_with_decimal_comma() {
        let preview = preview_csv(Bank::C6, C6_STATEMENT).unwrap();
        assert_eq!(preview.importable, 3);
        assert_eq!(preview.skipped, 0);
        assert_eq!(preview.income_total, 5000.0);
        assert!((preview.expense_total - 1650.75).abs() < 1e-9);
    }

    #[test]
    fn nubank_statement_parses_with_extra_columns() {
        let preview = preview_csv(Bank::Nubank, NUBANK_STATEMENT).unwrap();
        assert_eq!(preview.importable, 2);
        assert_eq!(preview.income_total, 5000.0);
        assert_eq!(preview.expense_total, 1200.0);
    }

    #[test]
    fn rows_with_bad_dates_or_amounts_are_skipped_not_fatal() {
        let text = "\
Data Lançamento;Descrição;Valor
2025-01-05;Data em formato errado;100,00
10/01/2025;Valor ilegível;cem reais
11/01/2025;;50,00
12/01/2025;Linha boa;-75,50
";
        let preview = preview_csv(Bank::C6, text).unwrap();
        assert_eq!(preview.importable, 1);
        assert_eq!(preview.skipped, 3);
        assert_eq!(preview.expense_total, 75.5);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let text = "Data,Montante,Descrição\n05/01/2025,10.00,x\n";
        let err = preview_csv(Bank::Nubank, text).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn(ref c) if c == "Valor"));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(matches!(preview_csv(Bank::C6, ""), Err(ImportError::Empty)));
    }

    #[test]
    fn amounts_accept_currency_prefix_and_thousand_separators() {
        assert_eq!(parse_amount("R$ 1.234,56", true), Some(1234.56));
        assert_eq!(parse_amount("-1.200,00", true), Some(-1200.0));
        assert_eq!(parse_amount("1,234.56", false), Some(1234.56));
        assert_eq!(parse_amount("", true), None);
        assert_eq!(parse_amount("abc", false), None);
    }
}
