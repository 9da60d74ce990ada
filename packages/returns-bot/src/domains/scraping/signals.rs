//! Heuristic signal extraction from arbitrary homepage HTML.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

/// Summary returned when the page yielded no text at all
pub const NO_READABLE_CONTENT: &str = "No readable content found";

/// Summary returned when the page could not be fetched
pub const SCRAPE_FAILED: &str = "Failed to scrape content";

/// Only the first this-many product link labels are kept
const MAX_PRODUCT_LINKS: usize = 10;

/// Labels this short ("Shop", "New") are navigation noise, not product names
const MIN_PRODUCT_LABEL_CHARS: usize = 4;

lazy_static! {
    static ref TITLE: Selector = Selector::parse("title").unwrap();
    static ref META_DESCRIPTION: Selector =
        Selector::parse(r#"meta[name="description"]"#).unwrap();
    static ref HEADINGS: Selector = Selector::parse("h1, h2").unwrap();
    static ref ANCHORS: Selector = Selector::parse("a").unwrap();
}

/// The declarative signals pulled from a homepage before flattening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSignals {
    pub title: String,
    pub meta_description: String,
    pub headings: Vec<String>,
    pub product_links: Vec<String>,
}

impl SiteSignals {
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);

        Self {
            title: Self::extract_title(&document),
            meta_description: Self::extract_meta_description(&document),
            headings: Self::extract_headings(&document),
            product_links: Self::extract_product_links(&document),
        }
    }

    /// Join every signal with newlines.
    ///
    /// Title and description always take a line, even when empty, so a page
    /// without a description reads "title\n\nheading". Only the outer
    /// whitespace is trimmed.
    pub fn into_summary(self) -> String {
        let mut lines = Vec::with_capacity(2 + self.headings.len() + self.product_links.len());
        lines.push(self.title);
        lines.push(self.meta_description);
        lines.extend(self.headings);
        lines.extend(self.product_links);

        let summary = lines.join("\n").trim().to_string();
        if summary.is_empty() {
            NO_READABLE_CONTENT.to_string()
        } else {
            summary
        }
    }

    fn text_of(element: ElementRef<'_>) -> String {
        element.text().collect::<String>().trim().to_string()
    }

    fn extract_title(document: &Html) -> String {
        document
            .select(&TITLE)
            .next()
            .map(Self::text_of)
            .unwrap_or_default()
    }

    fn extract_meta_description(document: &Html) -> String {
        document
            .select(&META_DESCRIPTION)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .map(|content| content.trim().to_string())
            .unwrap_or_default()
    }

    fn extract_headings(document: &Html) -> Vec<String> {
        document
            .select(&HEADINGS)
            .map(Self::text_of)
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn extract_product_links(document: &Html) -> Vec<String> {
        document
            .select(&ANCHORS)
            .filter(|a| {
                a.value()
                    .attr("href")
                    .is_some_and(|href| href.contains("product"))
            })
            .map(Self::text_of)
            .filter(|label| label.chars().count() >= MIN_PRODUCT_LABEL_CHARS)
            .take(MAX_PRODUCT_LINKS)
            .collect()
    }
}
