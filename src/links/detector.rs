use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

// Bridged replies quote the parent message as " (re @nick: ...)".
static REPLY_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [(]re:? @[^ :]+: .*").expect("static regex"));

/// Remove a quoted parent message from a bridged reply.
pub fn strip_reply_quote(message: &str) -> String {
    REPLY_QUOTE.replace_all(message, "").into_owned()
}

/// Detect HTTP/HTTPS URLs in a chat line.
///
/// Returns the raw URL text, deduplicated, in order of appearance. Quoted
/// reply context is ignored.
pub fn detect_urls(message: &str) -> Vec<String> {
    let message = strip_reply_quote(message);
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for token in message.split_whitespace() {
        let candidate = extract_candidate(token);
        if is_web_url(candidate) && seen.insert(candidate.to_string()) {
            urls.push(candidate.to_string());
        }
    }

    urls
}

/// First URL in a chat line, if any.
pub fn first_url(message: &str) -> Option<String> {
    detect_urls(message).into_iter().next()
}

fn extract_candidate(token: &str) -> &str {
    if let Some(start) = token.find("](")
        && let Some(end) = token[start..].find(')')
    {
        return &token[start + 2..start + end];
    }

    let stripped = token
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(token);

    let stripped = stripped
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(stripped);

    stripped.trim_end_matches(['.', ',', ';', '!', '?', ')'])
}

fn is_web_url(candidate: &str) -> bool {
    let parsed = if candidate.starts_with("www.") {
        Url::parse(&format!("http://{candidate}"))
    } else {
        Url::parse(candidate)
    };

    parsed.is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
}
