use flook::extract::{
    PageDocument, build_summary_input, extract_meta, page_content, trim, truncate_at_word,
};

#[test]
fn missing_title_gives_empty_meta() {
    for html in [
        "<html><body><p>text</p></body></html>",
        "<html><head><title></title></head></html>",
        "<html><head><title> \n </title></head></html>",
    ] {
        let doc = PageDocument::parse(html);
        let result = extract_meta("host", &doc);
        assert!(result.meta_message.is_empty(), "{html}");
        assert!(result.long_meta.is_empty(), "{html}");
    }
}

#[test]
fn title_whitespace_is_normalized() {
    let doc = PageDocument::parse("<title>a\nbad  title</title><p>hi there</p>");
    let result = extract_meta("host", &doc);
    assert_eq!(result.meta_message, "((host)) a bad title");
    assert_eq!(result.long_meta, "a\nbad title");
}

#[test]
fn long_title_is_cut_on_a_word() {
    let title = format!("{}cat cat cat", "cat ".repeat(96));
    let doc = PageDocument::parse(&format!("<title>{title}</title>"));
    let result = extract_meta("host", &doc);

    assert!(result.meta_message.ends_with("cat..."));
    assert!(result.meta_message.chars().count() <= 400);
    assert_eq!(result.long_meta, title);
}

#[test]
fn summary_input_example() {
    let doc = PageDocument::parse("<html><body><p>hi there</p></body></html>");
    assert_eq!(
        build_summary_input("http://example.com", &doc, "description"),
        "Keywords: example com.\ndescription\nhi there\ntl;dr:"
    );
}

#[test]
fn title_only_page_has_no_summary_input() {
    let doc = PageDocument::parse("<html><head><title>Hello</title></head></html>");
    let meta = extract_meta("example.com", &doc);
    assert_eq!(meta.meta_message, "((example.com)) Hello");
    assert_eq!(
        build_summary_input("http://example.com", &doc, &meta.long_meta),
        ""
    );
}

#[test]
fn emoji_is_stripped_from_content() {
    let doc = PageDocument::parse("<p>hi\u{1F4DE}</p>");
    assert_eq!(page_content(&doc), "hi");
}

#[test]
fn nested_tags_regression() {
    let doc = PageDocument::parse(
        "<div><p>p</p> d <ul><li>li</li></ul> <script>script</script></div>",
    );
    assert_eq!(page_content(&doc), "p\nli\n d");
}

#[test]
fn long_body_is_capped_on_a_word() {
    let body = "cat ".repeat(600);
    let doc = PageDocument::parse(&format!("<p>{body}</p>"));
    let input = build_summary_input("", &doc, "");
    let prompt = input.strip_suffix("\ntl;dr:").expect("cue");

    assert!(prompt.chars().count() <= 2000);
    assert!(prompt.ends_with("cat"));
    assert!(!prompt.ends_with(' '));
}

#[test]
fn helpers_are_idempotent() {
    for s in ["  a\n\n\nb  ", "x.,:", "plain", "\t\tt\t"] {
        assert_eq!(trim(&trim(s)), trim(s));
    }
    assert_eq!(truncate_at_word("short", 10, Some("...")), "short");
}
