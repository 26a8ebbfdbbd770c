use super::document::PageDocument;
use super::emoji::strip_emoji;
use super::text::{trim, truncate_at_word, url_tokens};

/// Hard cap for the prompt body, cue excluded.
pub const SUMMARY_INPUT_MAX_CHARS: usize = 2000;

/// Completion cue appended to every prompt.
pub const TLDR_CUE: &str = "\ntl;dr:";

/// Tags whose text counts as visible page content, in selection order.
///
/// Matches are grouped by tag in this order, then by document order. Nothing
/// is deduplicated.
pub const TEXT_TAGS: [&str; 23] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "summary", "li", "td", "button", "a", "div", "em",
    "strong", "i", "b", "pre", "code", "main", "article", "label", "span",
];

/// Visible text of the page, one text node per line, normalized and emoji-free.
pub fn page_content(doc: &PageDocument) -> String {
    let mut raw = String::new();
    for tag in TEXT_TAGS {
        for element in doc.find_by_tag(tag) {
            raw.push_str(&PageDocument::own_text(element, "\n"));
        }
    }
    trim(&strip_emoji(&raw))
}

/// Build the summarization prompt for a page.
///
/// Returns an empty string when the page has no visible text: a URL or a
/// title on its own is not worth a completion call.
pub fn build_summary_input(url: &str, doc: &PageDocument, long_meta: &str) -> String {
    let content = page_content(doc);
    if content.is_empty() {
        return String::new();
    }

    let mut input = String::new();

    let tokens = url_tokens(url);
    if !tokens.is_empty() {
        input.push_str("Keywords: ");
        input.push_str(&strip_emoji(&tokens));
        input.push_str(".\n");
    }

    if !long_meta.is_empty() {
        input.push_str(&strip_emoji(long_meta));
        input.push('\n');
    }

    input.push_str(&content);

    let mut input = truncate_at_word(&input, SUMMARY_INPUT_MAX_CHARS, None);
    input.push_str(TLDR_CUE);
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_input(body: &str) -> String {
        let doc = PageDocument::parse(&format!("<html><body>{body}</body></html>"));
        let input = build_summary_input("", &doc, "");
        input
            .strip_suffix(TLDR_CUE)
            .map(str::to_string)
            .unwrap_or(input)
    }

    #[test]
    fn example_page() {
        let doc = PageDocument::parse(
            "<html><head><title>a\nbad  title</title></head><body><p>hi there</p></body></html>",
        );
        assert_eq!(
            build_summary_input("http://example.com", &doc, "description"),
            "Keywords: example com.\ndescription\nhi there\ntl;dr:"
        );
    }

    #[test]
    fn empty_document() {
        let doc = PageDocument::parse("");
        assert_eq!(build_summary_input("http://example.com", &doc, ""), "");
    }

    #[test]
    fn title_and_url_alone_are_not_enough() {
        let doc = PageDocument::parse("<html><head><title>Hello</title></head><body></body></html>");
        assert_eq!(build_summary_input("http://example.com", &doc, "Hello"), "");
    }

    #[test]
    fn no_url_no_title() {
        assert_eq!(body_input("<p>p</p>"), "p");
        assert_eq!(body_input("<p>p1</p><p>p2</p>"), "p1\np2");
    }

    // NBSP and ideographic space survive `trim`, so they count as page text.
    #[test]
    fn unicode_space_only_page_is_content() {
        for space in ["\u{a0}", "\u{3000}"] {
            let doc = PageDocument::parse(&format!("<p>{space}</p>"));
            assert_eq!(
                build_summary_input("http://example.com", &doc, ""),
                format!("Keywords: example com.\n{space}\ntl;dr:")
            );
        }
    }

    #[test]
    fn emoji_stripped_from_content() {
        assert_eq!(body_input("<p>hi📞</p>"), "hi");
        assert_eq!(body_input("<p>📞</p>"), "");
    }

    #[test]
    fn legal_symbols_survive() {
        let doc = PageDocument::parse("<p>© 2024 Acme®</p>");
        assert_eq!(page_content(&doc), "© 2024 Acme®");
    }

    #[test]
    fn emoji_stripped_from_title_and_keywords() {
        let doc = PageDocument::parse("<p>body</p>");
        assert_eq!(
            build_summary_input("https://example.com/🦀", &doc, "Crab 🦀 news"),
            "Keywords: example com .\nCrab  news\nbody\ntl;dr:"
        );
    }

    #[test]
    fn grouped_by_tag_not_document_order() {
        assert_eq!(body_input("<h1>h1</h1>"), "h1");
        assert_eq!(
            body_input("<h1>h1</h1><p>p1</p><h2>h2</h2><p>p2</p>"),
            "h1\nh2\np1\np2"
        );
    }

    // Each element contributes only its own text nodes, so nesting does not
    // repeat text; script contents never show up.
    #[test]
    fn nested_tags_regression() {
        assert_eq!(
            body_input("<div><p>p</p> d <ul><li>li</li></ul> <script>script</script></div>"),
            "p\nli\n d"
        );
    }

    #[test]
    fn under_cap_kept_whole() {
        let enough_cats = format!("{}U", "cat ".repeat(499));
        assert_eq!(body_input(&format!("<p>{enough_cats}</p>")), enough_cats);
    }

    #[test]
    fn over_cap_cut_at_word() {
        let enough_cats = format!("{}U", "cat ".repeat(499));
        assert_eq!(body_input(&format!("<p>{enough_cats} cat</p>")), enough_cats);
    }

    #[test]
    fn long_body_never_ends_mid_word() {
        let input = body_input(&format!("<p>{}</p>", "cat ".repeat(700)));
        assert!(input.chars().count() <= SUMMARY_INPUT_MAX_CHARS);
        assert!(input.ends_with(" cat"));
    }

    #[test]
    fn prefix_counts_towards_cap() {
        let doc = PageDocument::parse(&format!("<p>{}</p>", "word ".repeat(500)));
        let input = build_summary_input("https://example.com/article", &doc, "Title");
        assert!(input.starts_with("Keywords: example com article.\nTitle\nword word"));
        assert!(input.ends_with(&format!("word{TLDR_CUE}")));
        assert!(input.chars().count() <= SUMMARY_INPUT_MAX_CHARS + TLDR_CUE.len());
    }
}
