//! Query composition: a field filter plus free text becomes one opaque
//! `tag:text` query string in the catalog API's field-scoping syntax.
//!
//! The composer owns no network or pagination state. Submission of
//! whitespace-only text is a no-op.

use clap::ValueEnum;

/// The metadata field a search is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FieldFilter {
    /// Match against volume titles (`intitle:`).
    #[default]
    Title,
    /// Match against author names (`inauthor:`).
    Author,
    /// Match against subject/category tags (`subject:`).
    Subject,
}

impl FieldFilter {
    /// The API's field-scoping tag for this filter.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Title => "intitle",
            Self::Author => "inauthor",
            Self::Subject => "subject",
        }
    }

    /// Human-readable name for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Subject => "Subject",
        }
    }

    /// The next filter in the Tab-cycle order.
    pub fn cycled(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Subject,
            Self::Subject => Self::Title,
        }
    }
}

impl std::fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A composed catalog query: `<tag>:<trimmed text>`.
///
/// Immutable once constructed; replaced wholesale on a new submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// The raw query string sent as the `q` parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collects raw search text and a field-filter selection.
#[derive(Debug, Clone, Default)]
pub struct QueryComposer {
    text: String,
    filter: FieldFilter,
}

impl QueryComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a specific field filter (CLI path).
    pub fn with_filter(filter: FieldFilter) -> Self {
        Self {
            text: String::new(),
            filter,
        }
    }

    /// Current raw input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current field filter.
    pub fn filter(&self) -> FieldFilter {
        self.filter
    }

    /// Append a character to the input text.
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Delete the last character of the input text.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Replace the input text wholesale.
    pub fn replace_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Advance the field filter to the next option.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.cycled();
    }

    /// Produce a query from the current state.
    ///
    /// Returns `None` when the trimmed text is empty; the caller must not
    /// start a fetch cycle in that case. The input text is left untouched
    /// so a follow-up page change searches the same terms.
    pub fn submit(&self) -> Option<Query> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Query(format!("{}:{}", self.filter.tag(), trimmed)))
    }
}
