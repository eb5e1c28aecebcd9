use thiserror::Error;

/// Errors surfaced by the service layer. `Api` carries the backend's own
/// status and body so forms can show the server message verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("erro de rede: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("API {status}: {body}")]
    Api { status: u16, body: String },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Api { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_keeps_status_and_body() {
        let err = ApiError::Api {
            status: 422,
            body: "valor inválido".to_string(),
        };
        assert_eq!(err.to_string(), "API 422: valor inválido");
    }

    #[test]
    fn unauthorized_detection() {
        let denied = ApiError::Api {
            status: 401,
            body: String::new(),
        };
        let broken = ApiError::Api {
            status: 500,
            body: String::new(),
        };
        assert!(denied.is_unauthorized());
        assert!(!broken.is_unauthorized());
    }
}
