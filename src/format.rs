use chrono::NaiveDate;

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().rev().collect();
    let mut out = Vec::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// pt-BR currency: `R$ 1.234,56`, negatives as `-R$ 180,00`.
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = group_thousands(&(cents / 100).to_string());
    format!("{}R$ {},{:02}", sign, whole, cents % 100)
}

/// `YYYY-MM-DD` → `DD/MM/YYYY`. Unparseable input is shown as-is.
pub fn format_date_br(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// File sizes for the import dialog: `0 Bytes`, `1.5 KB`, `4.75 MB`.
pub fn format_file_size(bytes: f64) -> String {
    if bytes <= 0.0 {
        return "0 Bytes".to_string();
    }
    let units = ["Bytes", "KB", "MB"];
    let exp = (bytes.log(1024.0).floor() as usize).min(units.len() - 1);
    let scaled = bytes / 1024f64.powi(exp as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{} {}", text, units[exp])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_groups_thousands_and_keeps_cents() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(5000.0), "R$ 5.000,00");
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1_000_000.5), "R$ 1.000.000,50");
    }

    #[test]
    fn brl_negative_sign_comes_first() {
        assert_eq!(format_brl(-180.0), "-R$ 180,00");
        assert_eq!(format_brl(-0.009), "-R$ 0,01");
    }

    #[test]
    fn brl_rounds_to_cents() {
        assert_eq!(format_brl(0.005), "R$ 0,01");
        assert_eq!(format_brl(2.675), "R$ 2,68");
    }

    #[test]
    fn dates_render_as_brazilian() {
        assert_eq!(format_date_br("2025-01-10"), "10/01/2025");
        assert_eq!(format_date_br("2024-12-25"), "25/12/2024");
    }

    #[test]
    fn bad_dates_pass_through() {
        assert_eq!(format_date_br("amanhã"), "amanhã");
        assert_eq!(format_date_br(""), "");
    }

    #[test]
    fn file_sizes_pick_a_unit_and_trim_zeros() {
        assert_eq!(format_file_size(0.0), "0 Bytes");
        assert_eq!(format_file_size(512.0), "512 Bytes");
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(2.5 * 1024.0 * 1024.0), "2.5 MB");
    }
}
