//! Localized HTML pages.
//!
//! Every page is served at `/{locale}/<page>/`; the un-slashed form renders
//! the same page.  `/` redirects to the visitor's preferred locale.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use shangshu_i18n::{Locale, localized_path, negotiate, resolve_locale};
use tracing::debug;

use crate::error::ServerError;
use crate::pages::Page;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/{locale}", get(home))
        .route("/{locale}/", get(home))
        .route("/{locale}/about", get(about))
        .route("/{locale}/about/", get(about))
        .route("/{locale}/services", get(services))
        .route("/{locale}/services/", get(services))
        .route("/{locale}/contact", get(contact))
        .route("/{locale}/contact/", get(contact))
}

/// Redirect to the home page in the locale negotiated from `Accept-Language`.
async fn root(headers: HeaderMap) -> Redirect {
    let accept = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = negotiate(accept);
    debug!(%locale, "redirecting to localized home");
    Redirect::temporary(&localized_path(locale, Page::Home.path()))
}

async fn home(state: State<Arc<AppState>>, locale: Path<String>) -> Result<Response, ServerError> {
    render(state, locale, Page::Home)
}

async fn about(state: State<Arc<AppState>>, locale: Path<String>) -> Result<Response, ServerError> {
    render(state, locale, Page::About)
}

async fn services(state: State<Arc<AppState>>, locale: Path<String>) -> Result<Response, ServerError> {
    render(state, locale, Page::Services)
}

async fn contact(state: State<Arc<AppState>>, locale: Path<String>) -> Result<Response, ServerError> {
    render(state, locale, Page::Contact)
}

fn render(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
    page: Page,
) -> Result<Response, ServerError> {
    let Ok(locale) = tag.parse::<Locale>() else {
        debug!(locale = %tag, "unsupported locale prefix");
        return not_found(&state, None);
    };
    Ok(Html(state.pages.render(locale, page)?).into_response())
}

/// 404 page in the locale named by the first path segment of `path`, or the
/// default locale when that segment is not a supported tag.
pub fn not_found(state: &AppState, path: Option<&str>) -> Result<Response, ServerError> {
    let segment = path.and_then(|p| p.trim_start_matches('/').split('/').next());
    let body = state.pages.render_not_found(resolve_locale(segment))?;
    Ok((StatusCode::NOT_FOUND, Html(body)).into_response())
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::routes::{self, test_state};

    async fn get(uri: &str, accept_language: Option<&str>) -> (StatusCode, header::HeaderMap, String) {
        let app = routes::build(test_state(None));
        let mut request = Request::get(uri);
        if let Some(lang) = accept_language {
            request = request.header(header::ACCEPT_LANGUAGE, lang);
        }
        let response = app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn pages_render_in_both_locales() {
        let cases = [
            ("/zh/", "以技术驱动业务创新"),
            ("/en/", "Technology That Drives Business Innovation"),
            ("/zh/about/", "了解商澍科技"),
            ("/en/about/", "Get to know Shangshu Technology"),
            ("/zh/services/", "覆盖数字化建设的全生命周期"),
            ("/en/services/", "Covering the full lifecycle of digital initiatives"),
            ("/zh/contact/", "期待与您合作"),
            ("/en/contact/", "We look forward to working with you"),
        ];
        for (uri, expected) in cases {
            let (status, headers, body) = get(uri, None).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(
                headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"),
                "{uri}"
            );
            assert!(body.contains(expected), "{uri} missing {expected}");
        }
    }

    #[tokio::test]
    async fn unslashed_paths_render_too() {
        let (status, _, body) = get("/en/about", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("About Us"));
        let (status, _, _) = get("/zh", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unsupported_locale_is_not_found() {
        let (status, _, body) = get("/fr/about/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("页面未找到"));
    }

    #[tokio::test]
    async fn unknown_page_is_not_found_html() {
        let (status, headers, _) = get("/en/pricing/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn not_found_follows_supported_prefix() {
        let (_, _, body) = get("/en/pricing/", None).await;
        assert!(body.contains("<html lang=\"en\">"));
        let (_, _, body) = get("/zh/pricing/", None).await;
        assert!(body.contains("<html lang=\"zh\">"));
        let (_, _, body) = get("/favicon.ico", None).await;
        assert!(body.contains("<html lang=\"zh\">"));
    }

    #[tokio::test]
    async fn root_redirects_by_accept_language() {
        let (status, headers, _) = get("/", Some("en-US,en;q=0.9")).await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(headers[header::LOCATION], "/en/");

        let (_, headers, _) = get("/", None).await;
        assert_eq!(headers[header::LOCATION], "/zh/");
    }
}
