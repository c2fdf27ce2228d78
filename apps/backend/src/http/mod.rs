pub mod toast;

use actix_web::http::header::HeaderName;

/// HTMX client-side redirect.
pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");
/// HTMX client-side event trigger.
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");
/// Set by HTMX on every request it issues.
pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

/// True when the request was issued by HTMX rather than a full page load.
pub fn is_htmx(headers: &actix_web::http::header::HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// 303 to `location`, mirrored in `HX-Redirect` for HTMX callers so the
/// browser navigates instead of swapping the target page into a fragment.
pub fn see_other(
    headers: &actix_web::http::header::HeaderMap,
    location: &str,
) -> actix_web::HttpResponseBuilder {
    let mut builder = actix_web::HttpResponse::SeeOther();
    builder.insert_header((actix_web::http::header::LOCATION, location.to_string()));
    if is_htmx(headers) {
        builder.insert_header((HX_REDIRECT, location.to_string()));
    }
    builder
}
