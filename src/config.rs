/// Base URL of the REST backend. Override at build time with
/// `CONTROLE_API_URL=https://... trunk build`.
pub fn api_base_url() -> &'static str {
    option_env!("CONTROLE_API_URL").unwrap_or("http://localhost:8080")
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base_url(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_path_onto_base() {
        let url = api_url("/accounts/42");
        assert!(url.ends_with("/accounts/42"));
        assert!(url.starts_with("http"));
    }
}
