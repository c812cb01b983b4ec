use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use service::auth::{Principal, TokenCodec};

/// Cookie consulted when no `Authorization` header is present.
pub const AUTH_COOKIE: &str = "auth_token";

fn bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").or_else(|| value.strip_prefix("bearer "))?;
    Some(token.trim().to_string())
}

/// Resolve the caller from a bearer token or the auth cookie and attach it to the request.
///
/// A missing or unusable token leaves the caller anonymous; the handlers decide
/// whether that is enough.
pub async fn resolve_principal(
    State(tokens): State<TokenCodec>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let token = bearer(req.headers()).or_else(|| jar.get(AUTH_COOKIE).map(|c| c.value().to_string()));
    let principal = match token {
        None => Principal::anonymous(),
        Some(token) => tokens.verify(&token).unwrap_or_else(|e| {
            warn!(code = e.code(), error = %e, "rejected bearer token");
            Principal::anonymous()
        }),
    };
    req.extensions_mut().insert(principal);
    next.run(req).await
}

/// The principal resolved for this request, anonymous when none was attached.
pub struct Caller(pub Principal);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Caller(parts.extensions.get::<Principal>().cloned().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_prefix_is_required() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer(&headers).as_deref(), Some("abc.def"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(bearer(&headers), None);
    }
}
