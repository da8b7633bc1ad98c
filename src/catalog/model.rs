//! Normalized result types and defensive extraction from the volumes
//! response document.
//!
//! The response is treated as a loosely-typed `serde_json::Value`: every
//! consumed field is pulled out field-by-field with a documented fallback,
//! so a volume missing half its metadata still renders as a card instead
//! of failing the page.

use serde::Serialize;
use serde_json::Value;

/// Fallback title for volumes without one.
const UNTITLED: &str = "Untitled";

/// Fallback author display string.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Placeholder detail link for volumes without an `infoLink`.
const LINK_PLACEHOLDER: &str = "#";

/// One normalized book card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    /// Volume identifier (empty string when the API omits it).
    pub id: String,
    /// Title, falling back to "Untitled".
    pub title: String,
    /// Author list flattened to a comma-separated display string,
    /// falling back to "Unknown".
    pub authors: String,
    /// Category list flattened to a comma-separated display string;
    /// possibly empty.
    pub categories: String,
    /// Detail-page URL, falling back to a placeholder.
    pub info_link: String,
    /// Thumbnail URL, preferring the larger variant; `None` renders the
    /// "No Image" placeholder.
    pub thumbnail: Option<String>,
}

/// The most recently fetched result window plus the server-reported total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultPage {
    pub books: Vec<BookSummary>,
    pub total: u64,
}

/// Normalize a parsed volumes response document.
///
/// `items` defaults to an empty sequence when absent or not a sequence;
/// `totalItems` defaults to 0 when absent or not a number.
pub fn normalize_response(doc: &Value) -> ResultPage {
    let total = doc.get("totalItems").and_then(Value::as_u64).unwrap_or(0);
    let books = doc
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(normalize_volume).collect())
        .unwrap_or_default();
    ResultPage { books, total }
}

/// Normalize a single volume entry per the fallback rules.
fn normalize_volume(item: &Value) -> BookSummary {
    let info = item.get("volumeInfo");
    let image_links = info.and_then(|i| i.get("imageLinks"));

    BookSummary {
        id: string_field(Some(item), "id").unwrap_or_default(),
        title: string_field(info, "title").unwrap_or_else(|| UNTITLED.to_string()),
        authors: joined_list(info, "authors").unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        categories: joined_list(info, "categories").unwrap_or_default(),
        info_link: string_field(info, "infoLink").unwrap_or_else(|| LINK_PLACEHOLDER.to_string()),
        thumbnail: string_field(image_links, "thumbnail")
            .or_else(|| string_field(image_links, "smallThumbnail")),
    }
}

/// A string field of an object, or `None` for anything else.
fn string_field(obj: Option<&Value>, key: &str) -> Option<String> {
    obj?.get(key)?.as_str().map(str::to_string)
}

/// A string-array field flattened to "a, b, c"; `None` when absent or
/// not an array. Non-string elements are skipped.
fn joined_list(obj: Option<&Value>, key: &str) -> Option<String> {
    let items = obj?.get(key)?.as_array()?;
    let joined = items
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_volume_normalizes_every_field() {
        let doc = json!({
            "totalItems": 37,
            "items": [{
                "id": "abc123",
                "volumeInfo": {
                    "title": "Dune",
                    "authors": ["Frank Herbert"],
                    "categories": ["Fiction", "Science Fiction"],
                    "imageLinks": {
                        "thumbnail": "http://img/large.jpg",
                        "smallThumbnail": "http://img/small.jpg"
                    },
                    "infoLink": "http://example.com/dune"
                }
            }]
        });

        let page = normalize_response(&doc);
        assert_eq!(page.total, 37);
        assert_eq!(page.books.len(), 1);

        let book = &page.books[0];
        assert_eq!(book.id, "abc123");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.authors, "Frank Herbert");
        assert_eq!(book.categories, "Fiction, Science Fiction");
        assert_eq!(book.info_link, "http://example.com/dune");
        assert_eq!(book.thumbnail.as_deref(), Some("http://img/large.jpg"));
    }

    #[test]
    fn missing_fields_fall_back() {
        let doc = json!({
            "totalItems": 1,
            "items": [{ "id": "x" }]
        });

        let book = &normalize_response(&doc).books[0];
        assert_eq!(book.title, "Untitled");
        assert_eq!(book.authors, "Unknown");
        assert_eq!(book.categories, "");
        assert_eq!(book.info_link, "#");
        assert!(book.thumbnail.is_none());
    }

    #[test]
    fn small_thumbnail_is_the_fallback_variant() {
        let doc = json!({
            "items": [{
                "volumeInfo": {
                    "imageLinks": { "smallThumbnail": "http://img/small.jpg" }
                }
            }]
        });

        let book = &normalize_response(&doc).books[0];
        assert_eq!(book.thumbnail.as_deref(), Some("http://img/small.jpg"));
    }

    #[test]
    fn absent_items_defaults_to_empty() {
        let page = normalize_response(&json!({ "totalItems": 5 }));
        assert!(page.books.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn wrongly_typed_items_and_total_default() {
        let page = normalize_response(&json!({ "totalItems": "many", "items": 7 }));
        assert!(page.books.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn empty_document_defaults_everything() {
        let page = normalize_response(&json!({}));
        assert!(page.books.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn non_string_authors_are_skipped() {
        let doc = json!({
            "items": [{
                "volumeInfo": { "authors": ["Frank Herbert", 42] }
            }]
        });
        let book = &normalize_response(&doc).books[0];
        assert_eq!(book.authors, "Frank Herbert");
    }

    #[test]
    fn page_serializes_for_json_output() {
        let page = ResultPage {
            books: vec![],
            total: 3,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"total\":3"));
    }
}
