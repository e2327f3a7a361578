use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("malformed endpoint {endpoint:?}: {reason}")]
    MalformedEndpoint { endpoint: String, reason: String },

    #[error("unknown booking intent: {0}")]
    UnknownIntent(String),

    #[error("popup blocked for {0}")]
    DeliveryBlocked(String),
}

impl LinkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinkError::MalformedEndpoint { .. } => ErrorKind::MalformedEndpoint,
            LinkError::UnknownIntent(_) => ErrorKind::UnknownIntent,
            LinkError::DeliveryBlocked(_) => ErrorKind::DeliveryBlocked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedEndpoint,
    UnknownIntent,
    DeliveryBlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Swallow,
    Propagate,
}

// Default: malformed endpoints pass through raw, blocked popups fall back to a
// plain tab, unknown intents propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPolicy {
    pub malformed_endpoint: Disposition,
    pub unknown_intent: Disposition,
    pub delivery_blocked: Disposition,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            malformed_endpoint: Disposition::Swallow,
            unknown_intent: Disposition::Propagate,
            delivery_blocked: Disposition::Swallow,
        }
    }
}

impl ErrorPolicy {
    pub fn strict() -> Self {
        Self {
            malformed_endpoint: Disposition::Propagate,
            unknown_intent: Disposition::Propagate,
            delivery_blocked: Disposition::Propagate,
        }
    }

    pub fn disposition(&self, kind: ErrorKind) -> Disposition {
        match kind {
            ErrorKind::MalformedEndpoint => self.malformed_endpoint,
            ErrorKind::UnknownIntent => self.unknown_intent,
            ErrorKind::DeliveryBlocked => self.delivery_blocked,
        }
    }

    /// Returns `Ok(())` when the error is swallowed (after logging it),
    /// otherwise hands it back.
    pub fn handle(&self, err: LinkError) -> Result<(), LinkError> {
        match self.disposition(err.kind()) {
            Disposition::Swallow => {
                tracing::warn!(error = %err, "swallowing link error");
                Ok(())
            }
            Disposition::Propagate => Err(err),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Link(#[from] LinkError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Link(LinkError::UnknownIntent(_)) => StatusCode::NOT_FOUND,
            AppError::Link(LinkError::MalformedEndpoint { .. }) => StatusCode::BAD_GATEWAY,
            AppError::Link(LinkError::DeliveryBlocked(_)) => StatusCode::BAD_GATEWAY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = ErrorPolicy::default();
        assert_eq!(policy.disposition(ErrorKind::MalformedEndpoint), Disposition::Swallow);
        assert_eq!(policy.disposition(ErrorKind::DeliveryBlocked), Disposition::Swallow);
        assert_eq!(policy.disposition(ErrorKind::UnknownIntent), Disposition::Propagate);
    }

    #[test]
    fn test_handle_swallows_and_propagates() {
        let policy = ErrorPolicy::default();
        assert!(policy
            .handle(LinkError::DeliveryBlocked("https://a.example".to_string()))
            .is_ok());

        let err = policy
            .handle(LinkError::UnknownIntent("nope".to_string()))
            .unwrap_err();
        assert_eq!(err, LinkError::UnknownIntent("nope".to_string()));
    }

    #[test]
    fn test_strict_propagates_everything() {
        let policy = ErrorPolicy::strict();
        let err = LinkError::MalformedEndpoint {
            endpoint: "x".to_string(),
            reason: "bad".to_string(),
        };
        assert!(policy.handle(err).is_err());
    }

    #[test]
    fn test_status_codes() {
        let res = AppError::Link(LinkError::UnknownIntent("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Unauthorized.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
