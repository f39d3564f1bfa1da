use std::cmp::Ordering;

/// Which listing a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Article,
    Program,
    About,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Article => "article",
            Category::Program => "program",
            Category::About => "about",
        }
    }
}

/// Sort key derived from a page directory name.
///
/// A listing only ever holds keys of one kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum OrderKey {
    /// `"<number> - <title>"`, sentinel `0`
    Number(u64),
    /// `YYYY-MM-DD`, sentinel `0000-00-00`
    Date(String),
}

impl OrderKey {
    pub const UNDATED: &'static str = "0000-00-00";

    pub fn unnumbered() -> Self {
        OrderKey::Number(0)
    }

    pub fn undated() -> Self {
        OrderKey::Date(Self::UNDATED.to_string())
    }
}

/// What the index needs to know about a converted page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub category: Category,
    pub key: OrderKey,
    pub title: String,
    /// Site-root-relative link to the rendered page
    pub link: String,
    /// Human readable date for dated articles
    pub date_label: Option<String>,
    /// Site-root-relative link to a program screenshot
    pub thumbnail: Option<String>,
}

impl PageMetadata {
    /// Listing order: key first, then title
    pub fn listing_order(a: &PageMetadata, b: &PageMetadata) -> Ordering {
        a.key.cmp(&b.key).then_with(|| a.title.cmp(&b.title))
    }
}
