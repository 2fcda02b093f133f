use crate::handlers::ServiceError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that, unlike `axum::Json`, accepts a request with no
/// `Content-Type` at all. A present but non-JSON content type, or a body that
/// does not decode into `T`, is a 422.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let accepts_json = is_json_or_absent(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        if !accepts_json {
            return Err(ServiceError::Unprocessable(
                "Expected a JSON request body".to_string(),
            ));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ServiceError::Unprocessable(format!("Invalid JSON body: {}", e)))
    }
}

/// `application/json` and `application/*+json` count as JSON.
fn is_json_or_absent(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_or_absent(&HeaderMap::new()));
        assert!(is_json_or_absent(&with_content_type("application/json")));
        assert!(is_json_or_absent(&with_content_type(
            "Application/JSON; charset=utf-8"
        )));
        assert!(is_json_or_absent(&with_content_type("application/ld+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!is_json_or_absent(&with_content_type("text/plain")));
        assert!(!is_json_or_absent(&with_content_type("application/xml")));
        assert!(!is_json_or_absent(&with_content_type(
            "application/x-www-form-urlencoded"
        )));
    }
}
