use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiError;

/// Result of a request-token call: the URI the user must visit to grant
/// access, plus the request token when the backend returned one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTokenGrant {
    pub request_token: Option<String>,
    pub auth_uri: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestTokenWire {
    request_token: String,
    auth_uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest<'a> {
    pub request_token: Option<&'a str>,
}

/// Parses a request-token response body.
///
/// Current servers answer with `{"requestToken": ..., "authUri": ...}`;
/// older ones answer with just the authorization URI, either as plain text
/// or as a JSON-quoted string. For the bare shapes the request token is
/// recovered from the URI's `request_token` query parameter when present.
pub fn parse_request_token_body(body: &str) -> Result<RequestTokenGrant, ApiError> {
    if let Ok(wire) = serde_json::from_str::<RequestTokenWire>(body) {
        return Ok(RequestTokenGrant {
            request_token: Some(wire.request_token),
            auth_uri: wire.auth_uri,
        });
    }

    let uri = serde_json::from_str::<String>(body)
        .unwrap_or_else(|_| body.trim().to_string());
    if uri.is_empty() {
        return Err(ApiError::Body("empty request-token response".to_string()));
    }

    let request_token = Url::parse(&uri).ok().and_then(|url| {
        url.query_pairs()
            .find(|(key, _)| key == "request_token")
            .map(|(_, value)| value.into_owned())
    });

    Ok(RequestTokenGrant {
        request_token,
        auth_uri: uri,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_structured_response() {
        let body = r#"{"requestToken":"abc","authUri":"https://provider/x"}"#;
        let grant = parse_request_token_body(body).expect("structured body");
        assert_eq!(grant.request_token.as_deref(), Some("abc"));
        assert_eq!(grant.auth_uri, "https://provider/x");
    }

    #[test]
    fn parses_bare_uri_with_token_parameter() {
        let body = "https://getpocket.com/auth/authorize?request_token=tok-1&redirect_uri=http://localhost:3000/login";
        let grant = parse_request_token_body(body).expect("bare body");
        assert_eq!(grant.request_token.as_deref(), Some("tok-1"));
        assert_eq!(grant.auth_uri, body);
    }

    #[test]
    fn parses_json_quoted_uri() {
        let body = r#""https://provider/grant?request_token=tok-2""#;
        let grant = parse_request_token_body(body).expect("quoted body");
        assert_eq!(grant.request_token.as_deref(), Some("tok-2"));
        assert_eq!(grant.auth_uri, "https://provider/grant?request_token=tok-2");
    }

    #[test]
    fn bare_uri_without_token_parameter_yields_no_token() {
        let grant = parse_request_token_body("https://provider/grant").expect("bare body");
        assert_eq!(grant.request_token, None);
        assert_eq!(grant.auth_uri, "https://provider/grant");
    }

    #[test]
    fn opaque_non_url_body_is_kept_as_is() {
        let grant = parse_request_token_body("not-a-url").expect("opaque body");
        assert_eq!(grant.request_token, None);
        assert_eq!(grant.auth_uri, "not-a-url");
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(parse_request_token_body("").is_err());
        assert!(parse_request_token_body("  \n").is_err());
    }

    #[test]
    fn authorize_request_serializes_missing_token_as_null() {
        let body = serde_json::to_value(AuthorizeRequest { request_token: None })
            .expect("serialize");
        assert_eq!(body, serde_json::json!({ "requestToken": null }));
    }

    #[test]
    fn authorize_request_serializes_present_token() {
        let body = serde_json::to_value(AuthorizeRequest {
            request_token: Some("abc"),
        })
        .expect("serialize");
        assert_eq!(body, serde_json::json!({ "requestToken": "abc" }));
    }
}
