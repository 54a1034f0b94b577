/// Source of the document a session works on. Implemented by the host
/// (page scraping lives there).
pub trait PageAdapter {
    /// Body text, or `None` when the page has no recognizable content.
    fn extract_text(&self) -> Option<String>;
    fn extract_title(&self) -> String;
}

/// `PageAdapter` over owned strings.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    pub title: String,
    pub text: Option<String>,
}

impl StaticPage {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: Some(text.into()),
        }
    }

    /// A page on which no content was found.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: None,
        }
    }
}

impl PageAdapter for StaticPage {
    fn extract_text(&self) -> Option<String> {
        self.text.clone()
    }

    fn extract_title(&self) -> String {
        self.title.clone()
    }
}
