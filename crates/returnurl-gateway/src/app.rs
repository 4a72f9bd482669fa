use axum::routing::get;
use axum::Router;
use returnurl_core::TokenCache;

use crate::handlers::{
    back_handler, edit_form_handler, edit_submit_handler, health_handler, page_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router<C: TokenCache>(state: AppState<C>) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/pages/{name}", get(page_handler::<C>))
            .route(
                "/edit",
                get(edit_form_handler::<C>).post(edit_submit_handler::<C>),
            )
            .route("/back", get(back_handler::<C>))
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use returnurl_cache::MokaTokenCache;
    use returnurl_core::{Checksum, Crc32, Token};
    use returnurl_service::{ReturnUrlConfig, ReturnUrlService};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let service = ReturnUrlService::new(MokaTokenCache::new(), ReturnUrlConfig::default());
        App::router(AppState::new(service))
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn health() {
        let response = test_app().oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn page_links_with_its_own_token() {
        let response = test_app().oneshot(get("/pages/home")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#"href="/edit?ru=6q8lxy""#), "{body}");
    }

    #[tokio::test]
    async fn page_name_is_escaped() {
        let response = test_app()
            .oneshot(get("/pages/%3Cb%3E"))
            .await
            .unwrap();

        let body = body_string(response).await;
        assert!(body.contains("<h1>&lt;b&gt;</h1>"), "{body}");
    }

    #[tokio::test]
    async fn submit_redirects_back_to_page() {
        let app = test_app();

        app.clone().oneshot(get("/pages/home")).await.unwrap();
        let response = app
            .oneshot(post_form("/edit", "ru=6q8lxy"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/pages/home");
    }

    #[tokio::test]
    async fn form_shows_label_and_carries_token() {
        let app = test_app();

        app.clone().oneshot(get("/pages/home")).await.unwrap();
        let response = app.oneshot(get("/edit?ru=6q8lxy")).await.unwrap();

        let body = body_string(response).await;
        assert!(body.contains(r#"name="ru" value="6q8lxy""#), "{body}");
        assert!(body.contains("Returning to: home"), "{body}");
    }

    #[tokio::test]
    async fn submit_without_token_goes_home() {
        let response = test_app()
            .oneshot(post_form("/edit", "other=1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn submit_with_list_token_goes_home() {
        let app = test_app();

        app.clone().oneshot(get("/pages/home")).await.unwrap();
        let response = app
            .oneshot(post_form("/edit", "ru[]=6q8lxy"))
            .await
            .unwrap();

        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn back_uses_fallback_for_unknown_token() {
        let response = test_app()
            .oneshot(get("/back?ru=unknown&fallback=/orders"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/orders");
    }

    #[tokio::test]
    async fn back_ignores_fallback_with_control_characters() {
        let response = test_app()
            .oneshot(get("/back?fallback=/x%0Ay"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn back_follows_token() {
        let app = test_app();

        app.clone()
            .oneshot(get("/pages/cart?step=2"))
            .await
            .unwrap();
        let token = Token::from_checksum(Crc32.checksum(b"/pages/cart?step=2"));
        let response = app
            .oneshot(get(&format!("/back?ru={token}&fallback=/orders")))
            .await
            .unwrap();

        assert_eq!(location(&response), "/pages/cart?step=2");
    }
}
