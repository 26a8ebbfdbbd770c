use super::document::PageDocument;
use super::text::{one_line, trim, truncate_at_word};

/// Hard cap for the meta line before the ellipsis is added.
pub const META_MAX_CHARS: usize = 397;

const META_ELLIPSIS: &str = "...";

/// Title line announced for a page, plus the raw title it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// `((host)) title` on one line, at most 400 characters. Empty without a title.
    pub meta_message: String,
    /// The trimmed title, newlines kept, never truncated.
    pub long_meta: String,
}

/// Build the meta line for `doc` as served from `host`.
pub fn extract_meta(host: &str, doc: &PageDocument) -> ExtractionResult {
    let title = doc
        .find_by_tag("title")
        .first()
        .map(|el| PageDocument::subtree_text(*el, ""))
        .unwrap_or_default();

    let long_meta = trim(&title);
    if long_meta.is_empty() {
        return ExtractionResult::default();
    }

    let meta_message = format!("(({host})) {}", one_line(&long_meta));
    ExtractionResult {
        meta_message: truncate_at_word(&meta_message, META_MAX_CHARS, Some(META_ELLIPSIS)),
        long_meta,
    }
}
