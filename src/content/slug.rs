use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM_REGEX: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    pub(crate) static ref HEADING_REGEX: Regex = Regex::new(
        r"(?m)^(?P<marks>#{2,5})[ \t]+(?P<text>\S.*?)[ \t]*$"
    ).unwrap();
}

const EMPTY_SLUG_FALLBACK: &str = "section";

/// Canonical anchor identifier for a piece of heading text.
///
/// Lowercases the text, collapses every run of characters outside `[a-z0-9]`
/// into a single `-` and trims leading and trailing `-`.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let slug = NON_ALNUM_REGEX.replace_all(&lower, "-");
    slug.trim_matches('-').to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub id: String,
}

/// Hands out unique anchors in document order.
/// Repeated headings get `-1`, `-2`, ... suffixes.
#[derive(Default)]
pub struct HeadingAnchors {
    counts: HashMap<String, usize>,
    used: HashSet<String>,
}

impl HeadingAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, text: &str) -> String {
        let base = match slugify(text) {
            s if s.is_empty() => EMPTY_SLUG_FALLBACK.to_string(),
            s => s,
        };

        let mut n = self.counts.get(&base).copied().unwrap_or(0);
        let mut id = if n == 0 { base.clone() } else { format!("{}-{}", base, n) };
        while self.used.contains(&id) {
            n += 1;
            id = format!("{}-{}", base, n);
        }

        self.counts.insert(base, n + 1);
        self.used.insert(id.clone());
        id
    }
}

/// Every level 2 to 5 heading of the document, with its anchor.
pub fn headings(content: &str) -> Vec<Heading> {
    let content = content.replace("\r\n", "\n");
    let mut anchors = HeadingAnchors::new();

    HEADING_REGEX.captures_iter(&content)
        .map(|cap| {
            let level = cap["marks"].len() as u8;
            let text = cap["text"].to_string();
            let id = anchors.next_id(&text);
            Heading { level, text, id }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("What is a Value Bet?"), "what-is-a-value-bet");
        assert_eq!(slugify("Understanding Expected Value (EV)"), "understanding-expected-value-ev");
        assert_eq!(slugify("  --Fair Odds vs. Offered Odds--  "), "fair-odds-vs-offered-odds");
        assert_eq!(slugify("📊 Definition Simplified"), "definition-simplified");
        assert_eq!(slugify("🎯"), "");
    }

    #[test]
    fn test_duplicated_anchors() {
        let mut anchors = HeadingAnchors::new();
        assert_eq!(anchors.next_id("Intro"), "intro");
        assert_eq!(anchors.next_id("Intro"), "intro-1");
        assert_eq!(anchors.next_id("intro-1"), "intro-1-1");
        assert_eq!(anchors.next_id("Intro"), "intro-2");
        assert_eq!(anchors.next_id("💡"), "section");
        assert_eq!(anchors.next_id("⚖️"), "section-1");
    }

    #[test]
    fn test_headings() {
        let content = "# Title\n## Introduction\ntext\n### Why?\n#### Deep\n##### Deeper\n###### Too deep\n##NoSpace\n";
        let res = headings(content);
        assert_eq!(res, vec![
            Heading { level: 2, text: "Introduction".to_string(), id: "introduction".to_string() },
            Heading { level: 3, text: "Why?".to_string(), id: "why".to_string() },
            Heading { level: 4, text: "Deep".to_string(), id: "deep".to_string() },
            Heading { level: 5, text: "Deeper".to_string(), id: "deeper".to_string() },
        ]);
    }

    #[test]
    fn test_headings_crlf_and_trailing_spaces() {
        let res = headings("## Introduction  \r\nbody\r\n");
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].text, "Introduction");
    }
}
