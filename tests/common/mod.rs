//! Common test utilities for integration tests.
//!
//! Sample documents shaped like the per-category files a content author
//! would publish, plus helpers to serve them from a wiremock server.

#![allow(dead_code)]

use lessonview::config::ViewerConfig;
use lessonview::dom::{Page, Region, CONTENT_REGION_ID, TITLE_REGION_ID};
use lessonview::prelude::{ReqwestHttpClient, ViewController};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A keywords document with one translated and one untranslated entry.
pub fn keywords_doc() -> Value {
    json!({
        "keywords": [
            {"title": "Sélecteur", "english": "Selector", "content": "Targets elements to style."},
            {"title": "Cascade", "content": "Decides which rule wins."}
        ]
    })
}

/// A lectures document covering every item type plus an unknown one.
pub fn lectures_doc() -> Value {
    json!({
        "lectures": [
            {
                "title": "Variables",
                "content": [
                    {"type": "text", "data": "Use let and const."},
                    {"type": "code", "data": "const x = 1;"},
                    {"type": "image", "data": "img/scope.png", "caption": "Block scope"},
                    {"type": "quote", "data": "Prefer const.", "attribute": "Style guide"},
                    {"type": "audio", "data": "scope.mp3"}
                ]
            },
            {
                "title": "Functions",
                "content": [
                    {"type": "text", "data": "Functions are values."}
                ]
            }
        ]
    })
}

/// A questions document.
pub fn questions_doc() -> Value {
    json!({
        "questions": [
            {"question": "Which tag makes a paragraph?", "answers": [
                {"answer": "<p>"}, {"answer": "<para>"}, {"answer": "<text>"}
            ]},
            {"question": "Is <br> a void element?", "answers": [{"answer": "Yes"}]}
        ]
    })
}

/// Serve `body` as JSON at `/data/{category}/{content_type}.json`.
pub async fn serve_json(server: &MockServer, category: &str, content_type: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/data/{}/{}.json", category, content_type)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve a raw body with `status` at `/data/{category}/{content_type}.json`.
pub async fn serve_raw(
    server: &MockServer,
    category: &str,
    content_type: &str,
    status: u16,
    body: &str,
) {
    Mock::given(method("GET"))
        .and(path(format!("/data/{}/{}.json", category, content_type)))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// A controller pointed at `server` writing into a standard page.
pub fn viewer_for(server: &MockServer) -> ViewController<ReqwestHttpClient> {
    let config = ViewerConfig::new().with_base_url(server.uri());
    let client = config.http_client().expect("client should build");
    ViewController::new(client, Page::standard(), &config)
}

pub fn title(viewer: &ViewController<ReqwestHttpClient>) -> Region {
    viewer.page().region(TITLE_REGION_ID).expect("title region")
}

pub fn content(viewer: &ViewController<ReqwestHttpClient>) -> Region {
    viewer.page().region(CONTENT_REGION_ID).expect("content region")
}
