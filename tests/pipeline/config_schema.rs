use flook::config::Config;

#[test]
fn full_config_deserializes() {
    let toml = r##"
[irc]
server = "irc.libera.chat"
port = 6697
nickname = "flook"
channels = ["#flook", "#rust"]
allowed_users = ["*"]

[summarizer]
instance = "text-davinci-003"
api_token = "sk-test"
max_tokens = 200

[fetch]
timeout_secs = 8

[rewrite]
libreddit_host = "libreddit.example"
"##;

    let parsed: Config = toml::from_str(toml).expect("config should deserialize");

    assert_eq!(parsed.irc.server, "irc.libera.chat");
    assert_eq!(parsed.irc.channels, vec!["#flook", "#rust"]);
    assert_eq!(parsed.summarizer.max_tokens, 200);
    assert!((parsed.summarizer.temperature - 0.3).abs() < f64::EPSILON);
    assert_eq!(parsed.summarizer.base_url, "https://api.openai.com");
    assert_eq!(parsed.fetch.timeout_secs, 8);
    assert_eq!(parsed.fetch.max_redirects, 10);
    assert_eq!(parsed.rewrite.libreddit_host, "libreddit.example");
    assert_eq!(parsed.rewrite.nitter_fallback_host, "nitter.hu");
    assert!(parsed.validate().is_ok());
    assert!(parsed.summarizer_ready());
}

#[test]
fn empty_config_uses_defaults_but_fails_validation() {
    let parsed: Config = toml::from_str("").expect("empty config should deserialize");

    assert_eq!(parsed.irc.port, 6697);
    assert_eq!(parsed.irc.nickname, "flook");
    assert_eq!(parsed.fetch.timeout_secs, 5);
    assert!(parsed.rewrite.enabled);
    assert!(!parsed.summarizer_ready());
    assert!(parsed.validate().is_err());
}
