use mockito::{Matcher, Server, ServerGuard};
use returns_bot_core::domains::policy::generate_policy;
use returns_bot_core::domains::scraping::scrape_site_context;
use returns_bot_core::kernel::{
    BotKernel, MockAI, MockWebScraper, OpenAIService, SimpleScraper, TestDependencies,
};
use returns_bot_core::Config;
use std::sync::Arc;

const ACME_HOMEPAGE: &str = r#"<!doctype html>
<html>
  <head>
    <title>Acme Activewear</title>
    <meta name="description" content="Leggings and tops">
  </head>
  <body>
    <h1>Built to Move</h1>
    <h1>Free Shipping Over $50</h1>
    <a href="/collections/all">Browse</a>
    <a href="/products/leggings">Shop Leggings</a>
  </body>
</html>"#;

async fn serve_homepage(server: &mut ServerGuard, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create_async()
        .await
}

// =============================================================================
// Tests: Content extraction over real HTTP
// =============================================================================

#[tokio::test]
async fn test_scrape_activewear_homepage() {
    let mut server = Server::new_async().await;
    let _page = serve_homepage(&mut server, ACME_HOMEPAGE).await;

    let scraper = SimpleScraper::new().unwrap();
    let summary = scrape_site_context(&scraper, &server.url()).await;

    assert_eq!(
        summary,
        "Acme Activewear\nLeggings and tops\nBuilt to Move\nFree Shipping Over $50\nShop Leggings"
    );
}

#[tokio::test]
async fn test_scrape_empty_body() {
    let mut server = Server::new_async().await;
    let _page = serve_homepage(&mut server, "").await;

    let scraper = SimpleScraper::new().unwrap();
    let summary = scrape_site_context(&scraper, &server.url()).await;

    assert_eq!(summary, "No readable content found");
}

#[tokio::test]
async fn test_scrape_server_error_is_sentinel() {
    let mut server = Server::new_async().await;
    let _page = server
        .mock("GET", "/")
        .with_status(500)
        .with_header("content-type", "text/html")
        .with_body("<title>Internal Server Error</title>")
        .create_async()
        .await;

    let scraper = SimpleScraper::new().unwrap();
    let summary = scrape_site_context(&scraper, &server.url()).await;

    assert_eq!(summary, "Failed to scrape content");
}

#[tokio::test]
async fn test_scrape_non_html_body_is_sentinel() {
    let mut server = Server::new_async().await;
    let _page = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body("%PDF-1.7")
        .create_async()
        .await;

    let scraper = SimpleScraper::new().unwrap();
    let summary = scrape_site_context(&scraper, &server.url()).await;

    assert_eq!(summary, "Failed to scrape content");
}

#[tokio::test]
async fn test_scrape_unreachable_host_is_sentinel() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let scraper = SimpleScraper::new().unwrap();
    let summary = scrape_site_context(&scraper, &format!("http://{}/", addr)).await;

    assert_eq!(summary, "Failed to scrape content");
}

// =============================================================================
// Tests: Policy generation through the OpenAI service
// =============================================================================

#[tokio::test]
async fn test_generate_policy_against_completion_endpoint() {
    let mut server = Server::new_async().await;
    let completion = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4.1",
                "temperature": 0.7
            })),
            Matcher::Regex("The merchant manually specified: books\\.".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"\n# Returns Policy\n\n- Unused books only\n"}}]}"#,
        )
        .create_async()
        .await;

    let config = Config {
        openai_api_key: "sk-test".into(),
        openai_base_url: Some(server.url()),
    };
    let ai = OpenAIService::from_config(&config);

    let policy = generate_policy(&ai, "Page Turners", Some("books"))
        .await
        .unwrap();

    assert_eq!(policy, "# Returns Policy\n\n- Unused books only");
    completion.assert_async().await;
}

#[tokio::test]
async fn test_missing_api_key_surfaces_on_first_call() {
    let mut server = Server::new_async().await;
    let _completion = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"You didn't provide an API key."}}"#)
        .create_async()
        .await;

    let config = Config::from_source(|key| match key {
        "OPENAI_BASE_URL" => Some(server.url()),
        _ => None,
    })
    .unwrap();
    assert!(!config.has_api_key());
    let ai = OpenAIService::from_config(&config);

    let err = generate_policy(&ai, "Acme Activewear", None)
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("didn't provide an API key"));
}

// =============================================================================
// Tests: Full pipeline with mocks
// =============================================================================

#[tokio::test]
async fn test_pipeline_feeds_summary_into_prompt() {
    let deps = TestDependencies::new()
        .mock_scraper(MockWebScraper::new().with_html(ACME_HOMEPAGE))
        .mock_ai(MockAI::new().with_response("  # Returns Policy  "));
    let kernel = deps.kernel();

    let summary = scrape_site_context(kernel.web_scraper.as_ref(), "https://acme.example").await;
    let policy = generate_policy(kernel.ai.as_ref(), &summary, Some("activewear"))
        .await
        .unwrap();

    assert_eq!(policy, "# Returns Policy");
    let prompt = deps.ai.last_prompt().unwrap();
    assert!(prompt.contains("The merchant manually specified: activewear."));
    assert!(prompt.contains("---\nAcme Activewear\nLeggings and tops\n"));
    assert_eq!(deps.web_scraper.calls(), vec!["https://acme.example".to_string()]);
}

#[tokio::test]
async fn test_pipeline_still_generates_after_failed_scrape() {
    let ai = Arc::new(MockAI::new().with_response("General policy"));
    let kernel = BotKernel::new(
        Arc::new(MockWebScraper::new().with_error(
            returns_bot_core::kernel::ScrapeError::Timeout {
                url: "https://slow.example".into(),
                timeout: std::time::Duration::from_secs(10),
            },
        )),
        ai.clone(),
    );

    let summary = scrape_site_context(kernel.web_scraper.as_ref(), "https://slow.example").await;
    let policy = generate_policy(kernel.ai.as_ref(), &summary, None)
        .await
        .unwrap();

    assert_eq!(summary, "Failed to scrape content");
    assert_eq!(policy, "General policy");
    assert!(ai.was_called_with("---\nFailed to scrape content\n---"));
}
