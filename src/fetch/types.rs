/// A fetched page, as seen after redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL after redirects.
    pub final_url: String,
    /// Host of `final_url`, used to prefix the meta line.
    pub host: String,
    /// Raw `Content-Type` header, if any.
    pub content_type: Option<String>,
    pub body: String,
}
