//! Cross-origin policy built from the configured origin list.

use axum::http::{HeaderValue, Method, request::Parts};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

/// One entry of `cors_origins`.
///
/// Either an exact origin (`http://localhost:3000`) or a wildcard-subdomain
/// pattern (`https://*.vercel.app`) that matches any host ending in the given
/// suffix under the same scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPattern {
  Exact(String),
  Subdomain { scheme: String, suffix: String },
}

impl OriginPattern {
  pub fn parse(s: &str) -> Self {
    let s = s.trim().trim_end_matches('/');
    match s.split_once("://*.") {
      Some((scheme, domain)) => OriginPattern::Subdomain {
        scheme: format!("{scheme}://"),
        suffix: format!(".{domain}"),
      },
      None => OriginPattern::Exact(s.to_owned()),
    }
  }

  pub fn matches(&self, origin: &str) -> bool {
    match self {
      OriginPattern::Exact(o) => o == origin,
      OriginPattern::Subdomain { scheme, suffix } => origin
        .strip_prefix(scheme.as_str())
        .and_then(|host| host.strip_suffix(suffix.as_str()))
        .is_some_and(|label| {
          !label.is_empty()
            && !label.starts_with('.')
            && label
              .chars()
              .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        }),
    }
  }
}

/// Build the CORS layer for `origins`.
///
/// A non-empty list admits only matching origins and allows credentials. An
/// empty list admits any origin without credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
  let methods = [Method::GET, Method::OPTIONS];

  if origins.is_empty() {
    return CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(methods)
      .allow_headers(Any);
  }

  let patterns: Vec<OriginPattern> =
    origins.iter().map(|o| OriginPattern::parse(o)).collect();

  CorsLayer::new()
    .allow_origin(AllowOrigin::predicate(
      move |origin: &HeaderValue, _parts: &Parts| {
        origin
          .to_str()
          .is_ok_and(|o| patterns.iter().any(|p| p.matches(o)))
      },
    ))
    .allow_methods(methods)
    .allow_headers(AllowHeaders::mirror_request())
    .allow_credentials(true)
}
