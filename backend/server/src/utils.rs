use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::{error::AppError, records::Session};

pub fn session_from_headers(headers: &HeaderMap) -> Result<Session, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AppError::Unauthorized)?;

    Ok(Session {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

    use super::session_from_headers;
    use crate::error::AppError;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        let session = session_from_headers(&headers("Bearer abc.def")).unwrap();

        assert_eq!(session.token, "abc.def");
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            session_from_headers(&HeaderMap::new()),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_malformed_header() {
        assert!(session_from_headers(&headers("Basic abc")).is_err());
        assert!(session_from_headers(&headers("Bearer ")).is_err());
        assert!(session_from_headers(&headers("Bearer    ")).is_err());
    }
}
