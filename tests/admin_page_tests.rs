//! Admin list renderer integration tests
//!
//! Runs the renderer against fixed `/all` responses and checks the page it
//! leaves behind.

use linkboard::interfaces::admin_page::{
    AdminListRenderer, AlertLog, Container, GENERIC_ERROR_MESSAGE, PageHandles, RenderError,
    RenderOutcome, ShellContainer, ShellDocument, ShellPreloader, StaticTransport, render_page,
};
use serde_json::json;

const HOST: &str = "example.com";

async fn run_on_doc(
    status: u16,
    body: &str,
) -> (ShellDocument, Result<RenderOutcome, RenderError>) {
    let renderer = AdminListRenderer::new(StaticTransport::new(status, body));
    let mut doc = ShellDocument::new();
    let outcome = {
        let mut handles = doc.handles(HOST);
        renderer.run(&mut handles).await
    };
    (doc, outcome)
}

fn row_count(html: &str) -> usize {
    html.matches("<div class=\"row\">").count()
}

fn records(n: usize) -> String {
    let items: Vec<_> = (1..=n)
        .map(|i| {
            json!({
                "id": i,
                "small_url": format!("s{}", i),
                "origin_url": format!("https://origin{}.example", i),
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

#[tokio::test]
async fn test_n_records_give_n_rows_with_verbatim_fields() {
    let (doc, outcome) = run_on_doc(200, &records(3)).await;
    assert_eq!(outcome.unwrap(), RenderOutcome::Rendered { rows: 3 });

    let html = doc.app.inner_html();
    assert_eq!(row_count(html), 3);
    for i in 1..=3 {
        // id 出现在编辑和删除两个表单中
        assert_eq!(
            html.matches(&format!("name=\"id\" value=\"{}\"", i)).count(),
            2
        );
        assert!(html.contains(&format!("name=\"small_url\" value=\"s{}\"", i)));
        assert!(html.contains(&format!(
            "name=\"origin_url\" value=\"https://origin{}.example\"",
            i
        )));
    }
}

#[tokio::test]
async fn test_row_order_matches_response_order() {
    let body = json!([
        {"id": 30, "small_url": "zeta", "origin_url": "https://z.example"},
        {"id": 10, "small_url": "alpha", "origin_url": "https://a.example"},
        {"id": 20, "small_url": "mid", "origin_url": "https://m.example"},
    ])
    .to_string();
    let (doc, _) = run_on_doc(200, &body).await;
    let html = doc.app.inner_html();

    let positions: Vec<usize> = ["zeta", "alpha", "mid"]
        .iter()
        .map(|s| html.find(&format!("value=\"{}\"", s)).unwrap())
        .collect();
    assert!(positions[0] < positions[1] && positions[1] < positions[2]);
}

#[tokio::test]
async fn test_server_error_alerts_and_renders_nothing() {
    let (doc, outcome) = run_on_doc(500, "server error").await;
    assert_eq!(outcome.unwrap(), RenderOutcome::Alerted { status: 500 });
    assert_eq!(doc.alerts.messages, vec!["500server error".to_string()]);
    assert_eq!(row_count(doc.app.inner_html()), 0);
}

#[tokio::test]
async fn test_empty_array_renders_nothing_without_alert() {
    let (doc, outcome) = run_on_doc(200, "[]").await;
    assert_eq!(outcome.unwrap(), RenderOutcome::Rendered { rows: 0 });
    assert!(doc.alerts.messages.is_empty());
    assert!(doc.app.inner_html().is_empty());
}

#[tokio::test]
async fn test_open_link_uses_page_host() {
    let body =
        json!([{"id": 1, "small_url": "abc", "origin_url": "https://x.example"}]).to_string();
    let (doc, _) = run_on_doc(200, &body).await;
    let html = doc.app.inner_html();
    assert!(html.contains("<a href=\"http://example.com/abc\">Open</a>"));
    assert!(html.contains("<label>http://example.com/</label>"));
}

#[tokio::test]
async fn test_missing_fields_render_as_undefined() {
    let (doc, outcome) = run_on_doc(200, r#"[{"id": 5}]"#).await;
    assert_eq!(outcome.unwrap(), RenderOutcome::Rendered { rows: 1 });
    let html = doc.app.inner_html();
    assert!(html.contains("name=\"small_url\" value=\"undefined\""));
    assert!(html.contains("name=\"origin_url\" value=\"undefined\""));
    assert!(html.contains("<a href=\"http://example.com/undefined\">Open</a>"));
}

#[tokio::test]
async fn test_values_are_not_escaped() {
    let body = json!([{"id": 1, "small_url": "a\"b", "origin_url": "<b>x</b>"}]).to_string();
    let (doc, _) = run_on_doc(200, &body).await;
    let html = doc.app.inner_html();
    assert!(html.contains("value=\"a\"b\""));
    assert!(html.contains("value=\"<b>x</b>\""));
}

#[tokio::test]
async fn test_rows_are_appended_after_existing_content() {
    let renderer = AdminListRenderer::new(StaticTransport::new(200, records(1)));
    let mut doc = ShellDocument::new();
    doc.app.set_inner_html("<p>existing</p>".to_string());
    {
        let mut handles = doc.handles(HOST);
        renderer.run(&mut handles).await.unwrap();
    }
    assert!(doc.app.inner_html().starts_with("<p>existing</p><div class=\"row\">"));
}

#[tokio::test]
async fn test_preloader_is_dismissed_even_when_fetch_fails() {
    let (doc, _) = run_on_doc(503, "down").await;
    assert_eq!(
        doc.preloader,
        Some(ShellPreloader {
            classes: vec!["progress".to_string()]
        })
    );
}

#[tokio::test]
async fn test_missing_preloader_is_a_no_op() {
    let renderer = AdminListRenderer::new(StaticTransport::new(200, records(2)));
    let mut app = ShellContainer::default();
    let mut alerts = AlertLog::default();
    let outcome = {
        let mut handles = PageHandles::new(None, Some(&mut app), &mut alerts, HOST);
        renderer.run(&mut handles).await
    };
    assert_eq!(outcome.unwrap(), RenderOutcome::Rendered { rows: 2 });
    assert_eq!(row_count(app.inner_html()), 2);
}

#[tokio::test]
async fn test_missing_container_fails() {
    let renderer = AdminListRenderer::new(StaticTransport::new(200, records(1)));
    let mut alerts = AlertLog::default();
    let mut handles = PageHandles::new(None, None, &mut alerts, HOST);
    assert_eq!(
        renderer.run(&mut handles).await,
        Err(RenderError::MissingContainer)
    );
}

#[tokio::test]
async fn test_malformed_json_and_null_payload_fail() {
    let (doc, outcome) = run_on_doc(200, "{not json").await;
    assert!(matches!(outcome, Err(RenderError::InvalidJson(_))));
    assert!(doc.alerts.messages.is_empty());

    let (_, outcome) = run_on_doc(200, "null").await;
    assert_eq!(outcome, Err(RenderError::NullPayload));
}

#[tokio::test]
async fn test_non_array_payloads() {
    let (doc, outcome) = run_on_doc(200, r#"{"id": 1}"#).await;
    assert_eq!(outcome.unwrap(), RenderOutcome::Rendered { rows: 0 });
    assert!(doc.app.inner_html().is_empty());

    let (doc, outcome) = run_on_doc(200, r#""ab""#).await;
    assert_eq!(outcome.unwrap(), RenderOutcome::Rendered { rows: 2 });
    assert!(doc.app.inner_html().contains("name=\"id\" value=\"undefined\""));
}

#[tokio::test]
async fn test_error_event_shows_generic_alert() {
    let (mut doc, _) = run_on_doc(200, "[]").await;
    let mut alerts = AlertLog::default();
    assert!(doc.app.dispatch_error(&mut alerts));
    assert_eq!(alerts.messages, vec![GENERIC_ERROR_MESSAGE.to_string()]);

    // 序列化后的页面在浏览器中同样注册处理器
    doc.alerts.messages.clear();
    assert!(doc.to_html().contains("Something went wrong"));
}

#[tokio::test]
async fn test_render_page_serialises_alerts() {
    let renderer = AdminListRenderer::new(StaticTransport::new(500, "server error"));
    let (html, outcome) = render_page(&renderer, HOST).await;
    assert!(outcome.is_ok());
    assert!(html.contains(r#"<script>alert("500server error");</script>"#));
    assert!(html.contains("class=\"progress\""));
}
