use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::content::slug::{HeadingAnchors, HEADING_REGEX};

lazy_static! {
    static ref STRONG_REGEX: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref EM_REGEX: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref CODE_REGEX: Regex = Regex::new(r"`(.+?)`").unwrap();
    static ref LIST_ITEM_REGEX: Regex = Regex::new(r"(?m)^[-*] (.+)$").unwrap();
    static ref LIST_RUN_REGEX: Regex = Regex::new(r"(?m)^<li\b.*</li>(?:\n(?:[ \t]*\n)*<li\b.*</li>)*$").unwrap();
    static ref QUOTE_REGEX: Regex = Regex::new(r"(?m)^> (.+)$").unwrap();
    static ref BLOCK_START_REGEX: Regex = Regex::new(r"^</?(?:h[2-5]|ul|li|blockquote)\b").unwrap();
}

const STRONG_CLASS: &str = "font-bold text-white";
const EM_CLASS: &str = "italic text-gray-300";
const CODE_CLASS: &str = "bg-gray-800 text-green-400 px-2 py-1 rounded text-sm font-mono";
const LIST_ITEM_CLASS: &str = "mb-2 text-gray-300";
const LIST_CLASS: &str = "list-disc list-inside mb-6 space-y-2";
const QUOTE_CLASS: &str = "border-l-4 border-green-500 pl-4 italic text-gray-300 my-6";
const PARAGRAPH_CLASS: &str = "text-gray-300 mb-4 leading-relaxed";

fn heading_class(level: usize) -> &'static str {
    match level {
        2 => "text-3xl font-bold text-white mb-6 mt-12",
        3 => "text-xl font-semibold text-white mb-4 mt-8",
        4 => "text-lg font-semibold text-white mb-3 mt-6",
        _ => "text-base font-semibold text-white mb-2 mt-4",
    }
}

/// Turns the markdown-like body of a post into an HTML fragment.
///
/// Rules run one after the other over the whole document: headings, bold,
/// italic, inline code, list items (grouped into one `<ul>` per run), quotes
/// and finally paragraphs for whatever is left. Every rule is a single
/// non-recursive pass, so overlapping emphasis such as `***x***` comes out
/// badly nested. Formatting never fails.
#[derive(Debug, Clone, Default)]
pub struct ContentFormatter {
    /// Escape `&` and `<` before formatting, for content that is not trusted.
    pub escape_html: bool,
}

impl ContentFormatter {
    pub fn new(escape_html: bool) -> Self {
        ContentFormatter { escape_html }
    }

    pub fn format(&self, content: &str) -> String {
        let content = content.replace("\r\n", "\n");
        let content = if self.escape_html {
            escape_html(&content)
        } else {
            content
        };

        let html = self.render_headings(&content);
        let html = STRONG_REGEX.replace_all(&html, format!(r#"<strong class="{}">${{1}}</strong>"#, STRONG_CLASS).as_str());
        let html = EM_REGEX.replace_all(&html, format!(r#"<em class="{}">${{1}}</em>"#, EM_CLASS).as_str());
        let html = CODE_REGEX.replace_all(&html, format!(r#"<code class="{}">${{1}}</code>"#, CODE_CLASS).as_str());
        let html = LIST_ITEM_REGEX.replace_all(&html, format!(r#"<li class="{}">${{1}}</li>"#, LIST_ITEM_CLASS).as_str());
        let html = LIST_RUN_REGEX.replace_all(&html, format!("<ul class=\"{}\">\n${{0}}\n</ul>", LIST_CLASS).as_str());
        let html = QUOTE_REGEX.replace_all(&html, format!(r#"<blockquote class="{}">${{1}}</blockquote>"#, QUOTE_CLASS).as_str());

        wrap_paragraphs(&html)
    }

    fn render_headings(&self, content: &str) -> String {
        let mut anchors = HeadingAnchors::new();
        let escaped = self.escape_html;

        let html = HEADING_REGEX.replace_all(content, |cap: &Captures| {
            let level = cap["marks"].len();
            let text = &cap["text"];
            // Anchors are computed on the source text, the same way the TOC sees it
            let id = if escaped {
                anchors.next_id(&unescape_html(text))
            } else {
                anchors.next_id(text)
            };
            format!(r#"<h{level} id="{id}" class="{class}">{text}</h{level}>"#,
                    level = level,
                    id = id,
                    class = heading_class(level),
                    text = text)
        });

        html.to_string()
    }
}

/// Formats with the default options (trusted content).
pub fn format_content(content: &str) -> String {
    ContentFormatter::default().format(content)
}

fn wrap_paragraphs(html: &str) -> String {
    let mut blocks: Vec<String> = vec![];
    let mut paragraph: Vec<&str> = vec![];

    fn flush(paragraph: &mut Vec<&str>, blocks: &mut Vec<String>) {
        if paragraph.is_empty() {
            return;
        }
        let text = paragraph.join("\n");
        let text = text.trim();
        if !text.is_empty() {
            blocks.push(format!(r#"<p class="{}">{}</p>"#, PARAGRAPH_CLASS, text));
        }
        paragraph.clear();
    }

    for line in html.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut paragraph, &mut blocks);
            continue;
        }

        if BLOCK_START_REGEX.is_match(trimmed) {
            flush(&mut paragraph, &mut blocks);
            blocks.push(trimmed.to_string());
            continue;
        }

        paragraph.push(line);
    }
    flush(&mut paragraph, &mut blocks);

    blocks.join("\n")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;")
}

fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<").replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use crate::content::toc::table_of_contents;
    use crate::test_data::VALUE_BETS_CONTENT;

    use super::*;

    const P: &str = r#"<p class="text-gray-300 mb-4 leading-relaxed">"#;

    #[test]
    fn test_plain_text_is_one_paragraph() {
        let res = format_content("  Just some plain text, nothing else.  \n");
        assert_eq!(res, format!("{}Just some plain text, nothing else.</p>", P));

        let res = format_content("first line\nsecond line");
        assert_eq!(res, format!("{}first line\nsecond line</p>", P));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_content(""), "");
        assert_eq!(format_content("\n\n   \n"), "");
    }

    #[test]
    fn test_blank_lines_split_paragraphs() {
        let res = format_content("one\n\ntwo\n\n\nthree");
        assert_eq!(res, format!("{P}one</p>\n{P}two</p>\n{P}three</p>", P = P));
    }

    #[test]
    fn test_headings() {
        let res = format_content("## Introduction");
        assert_eq!(res, r#"<h2 id="introduction" class="text-3xl font-bold text-white mb-6 mt-12">Introduction</h2>"#);

        let res = format_content("### A\n#### B\n##### C");
        assert_eq!(res, r#"<h3 id="a" class="text-xl font-semibold text-white mb-4 mt-8">A</h3>
<h4 id="b" class="text-lg font-semibold text-white mb-3 mt-6">B</h4>
<h5 id="c" class="text-base font-semibold text-white mb-2 mt-4">C</h5>"#);
    }

    #[test]
    fn test_heading_followed_by_text() {
        let res = format_content("## What is a Value Bet?\nA value bet is...");
        assert_eq!(res, format!(r#"<h2 id="what-is-a-value-bet" class="text-3xl font-bold text-white mb-6 mt-12">What is a Value Bet?</h2>
{}A value bet is...</p>"#, P));
    }

    #[test]
    fn test_inline_spans() {
        let res = format_content("A **bold** and *italic* with `code`.");
        assert_eq!(res, format!(r#"{}A <strong class="font-bold text-white">bold</strong> and <em class="italic text-gray-300">italic</em> with <code class="bg-gray-800 text-green-400 px-2 py-1 rounded text-sm font-mono">code</code>.</p>"#, P));
    }

    #[test]
    fn test_consecutive_items_share_one_list() {
        let res = format_content("- A\n- B");
        assert_eq!(res, r#"<ul class="list-disc list-inside mb-6 space-y-2">
<li class="mb-2 text-gray-300">A</li>
<li class="mb-2 text-gray-300">B</li>
</ul>"#);
        assert_eq!(res.matches("<ul").count(), 1);
        assert_eq!(res.matches("<li").count(), 2);
    }

    #[test]
    fn test_blank_lines_inside_a_list() {
        let res = format_content("- A\n\n- B\n\n\n* C");
        assert_eq!(res, r#"<ul class="list-disc list-inside mb-6 space-y-2">
<li class="mb-2 text-gray-300">A</li>
<li class="mb-2 text-gray-300">B</li>
<li class="mb-2 text-gray-300">C</li>
</ul>"#);
    }

    #[test]
    fn test_separated_lists() {
        let res = format_content("* A\n\ntext\n\n- B\n- C\n");
        assert_eq!(res.matches("<ul").count(), 2);
        assert_eq!(res.matches("<li").count(), 3);
        assert!(res.contains(&format!("{}text</p>", P)));
    }

    #[test]
    fn test_list_between_paragraphs() {
        let res = format_content("Intro:\n- **One:** first\n- Two\nOutro");
        assert_eq!(res, format!(r#"{P}Intro:</p>
<ul class="list-disc list-inside mb-6 space-y-2">
<li class="mb-2 text-gray-300"><strong class="font-bold text-white">One:</strong> first</li>
<li class="mb-2 text-gray-300">Two</li>
</ul>
{P}Outro</p>"#, P = P));
    }

    #[test]
    fn test_blockquote() {
        let res = format_content("> \"Patience and discipline.\"");
        assert_eq!(res, r#"<blockquote class="border-l-4 border-green-500 pl-4 italic text-gray-300 my-6">"Patience and discipline."</blockquote>"#);
    }

    #[test]
    fn test_nested_emphasis_is_single_pass() {
        // Bold runs first, so an inner bold inside italic happens to nest fine
        let res = format_content("*y **x** z*");
        assert_eq!(res, format!(r#"{}<em class="italic text-gray-300">y <strong class="font-bold text-white">x</strong> z</em></p>"#, P));

        // but triple asterisks end up with crossed tags
        let res = format_content("***x***");
        assert_eq!(res, format!(r#"{}<strong class="font-bold text-white"><em class="italic text-gray-300">x</strong></em></p>"#, P));
    }

    #[test]
    fn test_escape_html() {
        let formatter = ContentFormatter::new(true);
        let res = formatter.format("## Odds < Probability & more\n<script>alert(1)</script>");
        assert_eq!(res, format!(r#"<h2 id="odds-probability-more" class="text-3xl font-bold text-white mb-6 mt-12">Odds &lt; Probability &amp; more</h2>
{}&lt;script>alert(1)&lt;/script></p>"#, P));

        let toc = table_of_contents("## Odds < Probability & more");
        assert_eq!(toc[0].id, "odds-probability-more");
    }

    #[test]
    fn test_anchors_match_toc() {
        let html = format_content(VALUE_BETS_CONTENT);
        let toc = table_of_contents(VALUE_BETS_CONTENT);
        assert!(!toc.is_empty());
        for entry in toc.iter() {
            assert!(html.contains(&format!(r#"id="{}""#, entry.id)), "missing anchor {}", entry.id);
        }
        assert!(html.contains(r#"<h2 id="what-is-a-value-bet""#));
    }

    #[test]
    fn test_crlf_input() {
        let res = format_content("## Title\r\n\r\nBody\r\n");
        assert_eq!(res, format!(r#"<h2 id="title" class="text-3xl font-bold text-white mb-6 mt-12">Title</h2>
{}Body</p>"#, P));
    }
}
