use crate::content::slug::headings;

#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub id: String,
}

/// Level 2 and 3 headings of a post, in document order.
///
/// Anchors come from the same assignment the formatter uses when it renders
/// the headings, so every link points at an existing `id`.
pub fn table_of_contents(content: &str) -> Vec<TocEntry> {
    headings(content).into_iter()
        .filter(|h| h.level <= 3)
        .map(|h| TocEntry {
            level: h.level,
            text: h.text,
            id: h.id,
        })
        .collect()
}
