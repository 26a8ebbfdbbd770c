/// Room left for the `:nick!user@host ` prefix the server prepends on relay.
pub(super) const SENDER_PREFIX_RESERVE: usize = 64;

/// Split `message` into IRC-safe lines.
///
/// Newlines start a new line and blank lines are dropped. Lines longer than
/// `max_bytes` are cut at char boundaries. Always returns at least one chunk.
pub(super) fn split_message(message: &str, max_bytes: usize) -> Vec<String> {
    let mut chunks = Vec::new();

    for line in message.lines().map(|l| l.trim_end_matches('\r')) {
        if line.is_empty() {
            continue;
        }
        let mut rest = line;
        while rest.len() > max_bytes {
            let mut cut = max_bytes;
            while !rest.is_char_boundary(cut) {
                cut -= 1;
            }
            if cut == 0 {
                cut = rest.chars().next().map_or(rest.len(), char::len_utf8);
            }
            chunks.push(rest[..cut].to_string());
            rest = &rest[cut..];
        }
        chunks.push(rest.to_string());
    }

    if chunks.is_empty() {
        chunks.push(String::new());
    }
    chunks
}

/// Unwrap a CTCP `ACTION` (`/me`) body; other CTCP requests yield `None`.
pub(super) fn strip_ctcp(text: &str) -> Option<&str> {
    let Some(inner) = text.strip_prefix('\x01') else {
        return Some(text);
    };
    let inner = inner.strip_suffix('\x01').unwrap_or(inner);
    inner.strip_prefix("ACTION ")
}
