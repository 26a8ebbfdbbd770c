use flook::bot::Bot;
use flook::config::{Config, SummarizerConfig};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Ferris  the
Crab</title></head>
  <body>
    <h1>Meet Ferris</h1>
    <p>Ferris is the unofficial mascot of Rust. 🦀</p>
    <script>var tracking = true;</script>
  </body>
</html>"#;

async fn mount_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/ferris"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(PAGE),
        )
        .mount(server)
        .await;
}

fn host_of(server: &MockServer) -> String {
    server.uri().trim_start_matches("http://").to_string()
}

fn config_for(api: &MockServer) -> Config {
    Config {
        summarizer: SummarizerConfig {
            base_url: api.uri(),
            instance: "text-davinci-003".into(),
            api_token: Some("sk-test".into()),
            ..SummarizerConfig::default()
        },
        ..Config::default()
    }
}

#[tokio::test]
async fn chat_line_to_meta_and_tldr() {
    let web = MockServer::start().await;
    mount_page(&web).await;

    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/engines/text-davinci-003/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_string_contains("Meet Ferris"))
        .and(body_string_contains("tl;dr:"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"text": "\n\nFerris is Rust's crab mascot."}]
        })))
        .expect(1)
        .mount(&api)
        .await;

    let bot = Bot::new(&config_for(&api));
    let replies = bot
        .handle_message(&format!("cute {}/ferris (re @bob: old link https://x.io)", web.uri()))
        .await;

    assert_eq!(
        replies,
        vec![
            format!("(({})) Ferris the Crab", host_of(&web)),
            "((OpenAI TL;DR)) Ferris is Rust's crab mascot".to_string(),
        ]
    );
}

#[tokio::test]
async fn prompt_carries_keywords_title_and_body() {
    let web = MockServer::start().await;
    mount_page(&web).await;
    let api = MockServer::start().await;

    let bot = Bot::new(&config_for(&api)).with_summarizer(None);
    let url = format!("{}/ferris", web.uri());
    let previews = bot.previews(&url).await.expect("page should load");

    let prompt = &previews.summary_input;
    assert!(prompt.starts_with("Keywords: 127 0 0 1 "));
    assert!(prompt.contains(" ferris.\nFerris the\nCrab\nMeet Ferris\n"));
    assert!(prompt.contains("Ferris is the unofficial mascot of Rust"));
    assert!(!prompt.contains("tracking"));
    assert!(!prompt.contains('\u{1F980}'));
    assert!(prompt.ends_with("\ntl;dr:"));
    assert!(previews.tldr.is_none());
}

#[tokio::test]
async fn summarizer_outage_still_sends_meta() {
    let web = MockServer::start().await;
    mount_page(&web).await;

    let api = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&api)
        .await;

    let bot = Bot::new(&config_for(&api));
    let replies = bot
        .handle_message(&format!("{}/ferris", web.uri()))
        .await;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].ends_with(" Ferris the Crab"));
}
