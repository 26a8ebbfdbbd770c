use regex::Regex;
use std::sync::LazyLock;

/// Characters stripped from both ends of extracted text.
const OUTER_JUNK: &[char] = &[' ', '.', ',', ':', '\n'];

/// Longest trailing fragment `trim_last_word` will drop.
const MAX_DROPPED_WORD_CHARS: usize = 32;

static HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("static regex"));

static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("static regex"));

// ASCII whitespace only: non-breaking spaces inside titles are content.
static ANY_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("static regex"));

static LAST_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"[\t\n\x0C\r ]+[^\t\n\x0C\r ]{{0,{MAX_DROPPED_WORD_CHARS}}}$"
    ))
    .expect("static regex")
});

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:]+://").expect("static regex"));

static URL_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"[\[\] !"#$%&'()*+,./:;<=>?@^_`{|}~-]+"##).expect("static regex")
});

static WWW_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^| )www[0-9]*\b *").expect("static regex"));

/// Normalize extracted text.
///
/// Runs of spaces/tabs become one space, runs of newlines become one newline,
/// then any of `space . , : \n` are stripped from both ends. Idempotent.
#[must_use]
pub fn trim(input: &str) -> String {
    let collapsed = HORIZONTAL_WS.replace_all(input, " ");
    let collapsed = NEWLINE_RUN.replace_all(&collapsed, "\n");
    collapsed.trim_matches(OUTER_JUNK).to_string()
}

/// Collapse every whitespace run (newlines included) into a single space.
#[must_use]
pub fn one_line(input: &str) -> String {
    ANY_WS.replace_all(input, " ").into_owned()
}

/// Drop a trailing partial word: whitespace followed by at most 32
/// non-whitespace characters at the very end. Longer tails are kept.
#[must_use]
pub fn trim_last_word(input: &str) -> String {
    LAST_WORD.replace(input, "").into_owned()
}

/// Cap `input` at `max_chars` characters.
///
/// Strings within the cap come back verbatim. Longer ones are cut, lose their
/// last (possibly partial) word, and get `suffix` appended.
#[must_use]
pub fn truncate_at_word(input: &str, max_chars: usize, suffix: Option<&str>) -> String {
    let Some((cut, _)) = input.char_indices().nth(max_chars) else {
        return input.to_string();
    };

    let mut truncated = trim_last_word(&input[..cut]);
    if let Some(suffix) = suffix {
        truncated.push_str(suffix);
    }
    truncated
}

/// Turn a URL into space-separated keyword tokens.
///
/// The scheme is dropped, punctuation runs become single spaces and a leading
/// `www`/`www2`… label is removed. Case is preserved.
#[must_use]
pub fn url_tokens(url: &str) -> String {
    let tokens = URL_SCHEME.replace(url, "");
    let tokens = URL_PUNCTUATION.replace_all(&tokens, " ");
    WWW_TOKEN.replace_all(&tokens, "").into_owned()
}
