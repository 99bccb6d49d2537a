// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use once_cell::sync::Lazy;
use serde_json::Value;

use cms_pages::application::queries::pages::PageQueryService;
use cms_pages::application::services::ApplicationServices;
use cms_pages::domain::page::{Page, PageRepository};
use cms_pages::domain::page_component::PageComponentRepository;
use cms_pages::domain::page_data::PageDataRepository;
use cms_pages::presentation::http::{routes::build_router, state::HttpState};

use super::builders::{ComponentBuilder, PageBuilder, PageDataBuilder};
use super::mocks::{InMemoryComponentRepo, InMemoryPageDataRepo, InMemoryPageRepo};

pub const HOME_ID: i64 = 100;
pub const ABOUT_ID: i64 = 101;
pub const FIRST_ARTICLE_ID: i64 = 1;

/// 25 content pages named `article-01`..`article-25` plus two static pages.
pub static SAMPLE_PAGES: Lazy<Vec<Page>> = Lazy::new(|| {
    let mut pages: Vec<Page> = (1..=25)
        .map(|n| {
            PageBuilder::new(n, format!("article-{n:02}"))
                .display_name(format!("Article {n:02}"))
                .build()
        })
        .collect();
    pages.push(
        PageBuilder::new(HOME_ID, "home")
            .display_name("Welcome")
            .static_page()
            .build(),
    );
    pages.push(
        PageBuilder::new(ABOUT_ID, "about")
            .display_name("About Us")
            .description("who we are")
            .static_page()
            .build(),
    );
    pages
});

pub fn sample_component_repo() -> InMemoryComponentRepo {
    InMemoryComponentRepo::new().with_components(
        HOME_ID,
        vec![
            ComponentBuilder::new(1, "a-root").composite().build(),
            ComponentBuilder::new(2, "b-nav")
                .parent("a-root")
                .page_leaf(ABOUT_ID)
                .setting("label", "About")
                .build(),
            ComponentBuilder::new(3, "c-body")
                .parent("a-root")
                .setting("title", "Latest")
                .setting("limit", "5")
                .build(),
        ],
    )
}

pub fn sample_page_data_repo() -> InMemoryPageDataRepo {
    InMemoryPageDataRepo::new(vec![
        PageDataBuilder::new(10, FIRST_ARTICLE_ID, "first-post")
            .component(1000, "c-body", &["hello", "world"])
            .component(1001, "c-footer", &["bye"])
            .build(),
        PageDataBuilder::new(11, FIRST_ARTICLE_ID, "second-post").build(),
        PageDataBuilder::new(12, FIRST_ARTICLE_ID, "third-post").build(),
        PageDataBuilder::new(20, HOME_ID, "welcome-note").build(),
    ])
}

pub struct TestSite {
    pub page_repo: Arc<InMemoryPageRepo>,
    pub services: Arc<ApplicationServices>,
}

impl TestSite {
    pub fn queries(&self) -> Arc<PageQueryService> {
        Arc::clone(&self.services.page_queries)
    }
}

pub fn build_site_with(page_repo: Arc<dyn PageRepository>) -> Arc<ApplicationServices> {
    let component_repo: Arc<dyn PageComponentRepository> = Arc::new(sample_component_repo());
    let page_data_repo: Arc<dyn PageDataRepository> = Arc::new(sample_page_data_repo());
    Arc::new(ApplicationServices::new(
        page_repo,
        component_repo,
        page_data_repo,
    ))
}

pub fn build_site() -> TestSite {
    let page_repo = Arc::new(InMemoryPageRepo::new(SAMPLE_PAGES.clone()));
    let services = build_site_with(Arc::clone(&page_repo) as Arc<dyn PageRepository>);
    TestSite {
        page_repo,
        services,
    }
}

pub fn make_test_router() -> axum::Router {
    build_router(HttpState {
        services: build_site().services,
    })
}

pub fn make_test_router_with(page_repo: Arc<dyn PageRepository>) -> axum::Router {
    build_router(HttpState {
        services: build_site_with(page_repo),
    })
}

/// Assert a 200 response with a JSON body and return the parsed body.
pub async fn read_json(resp: axum::response::Response) -> Value {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    if status != StatusCode::OK {
        panic!(
            "expected 200 OK, got {}: {}",
            status,
            String::from_utf8_lossy(&body_bytes)
        );
    }
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    serde_json::from_slice(&body_bytes).expect("valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
