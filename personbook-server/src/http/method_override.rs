//! HTML forms can only send GET and POST. A POST carrying `_method` in the
//! query string or an `X-HTTP-Method-Override` header is rewritten to that
//! method before routing.

use axum::extract::{Query, Request};
use axum::http::{Method, Uri};
use serde::Deserialize;

pub const OVERRIDE_HEADER: &str = "x-http-method-override";

#[derive(Deserialize)]
struct MethodQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Methods a POST may be turned into
fn parse_override(raw: &str) -> Option<Method> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

fn query_override(uri: &Uri) -> Option<String> {
    Query::<MethodQuery>::try_from_uri(uri)
        .ok()
        .and_then(|Query(q)| q.method)
}

/// Rewrite the method of an overridden POST; other requests pass through.
pub fn override_method(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    let requested = req
        .headers()
        .get(OVERRIDE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .or_else(|| query_override(req.uri()));

    if let Some(method) = requested.as_deref().and_then(parse_override) {
        tracing::debug!(%method, uri = %req.uri(), "method override");
        *req.method_mut() = method;
    }
    req
}
