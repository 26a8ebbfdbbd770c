use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page.
///
/// Only two capabilities are exposed: tag lookup in document order and text
/// flattening. Parsing never fails; broken markup yields a best-effort tree.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Every element with the given tag name, in document order.
    pub fn find_by_tag(&self, tag: &str) -> Vec<ElementRef<'_>> {
        let Ok(selector) = Selector::parse(&tag.to_ascii_lowercase()) else {
            return Vec::new();
        };
        self.html.select(&selector).collect()
    }

    /// Every element matching a CSS selector, in document order.
    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        let Ok(selector) = Selector::parse(css) else {
            return Vec::new();
        };
        self.html.select(&selector).collect()
    }

    /// Concatenated text of all descendant text nodes, `separator` after each.
    pub fn subtree_text(node: ElementRef<'_>, separator: &str) -> String {
        let mut buf = String::new();
        for text in node.text() {
            buf.push_str(text);
            buf.push_str(separator);
        }
        buf
    }

    /// Text of the node's direct text children only, `separator` after each.
    ///
    /// Text that sits inside nested elements is left to those elements.
    pub fn own_text(node: ElementRef<'_>, separator: &str) -> String {
        let mut buf = String::new();
        for child in node.children() {
            if let Some(text) = child.value().as_text() {
                buf.push_str(text);
                buf.push_str(separator);
            }
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_tag_is_case_insensitive() {
        let doc = PageDocument::parse("<html><head><TITLE>Hi</TITLE></head></html>");
        assert_eq!(doc.find_by_tag("Title").len(), 1);
        assert_eq!(doc.find_by_tag("title").len(), 1);
    }

    #[test]
    fn find_by_tag_document_order() {
        let doc = PageDocument::parse("<p>one</p><div><p>two</p></div><p>three</p>");
        let texts: Vec<String> = doc
            .find_by_tag("p")
            .into_iter()
            .map(|el| PageDocument::subtree_text(el, ""))
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn find_by_tag_missing() {
        let doc = PageDocument::parse("");
        assert!(doc.find_by_tag("title").is_empty());
        assert!(doc.find_by_tag("not a tag!").is_empty());
    }

    #[test]
    fn subtree_text_with_separator() {
        let doc = PageDocument::parse("<div>a<b>b</b>c</div>");
        let div = doc.find_by_tag("div")[0];
        assert_eq!(PageDocument::subtree_text(div, "|"), "a|b|c|");
    }

    #[test]
    fn own_text_skips_nested_elements() {
        let doc = PageDocument::parse("<div>a<b>b</b>c</div>");
        let div = doc.find_by_tag("div")[0];
        assert_eq!(PageDocument::own_text(div, "|"), "a|c|");
    }

    #[test]
    fn select_css() {
        let doc = PageDocument::parse(
            r#"<div class="main-tweet"><div class="tweet-content">hello</div></div>
               <div class="tweet-content">reply</div>"#,
        );
        let found = doc.select(".main-tweet .tweet-content");
        assert_eq!(found.len(), 1);
        assert_eq!(PageDocument::subtree_text(found[0], ""), "hello");
    }
}
