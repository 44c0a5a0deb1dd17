pub mod formatter;
pub mod slug;
pub mod toc;

pub use formatter::{format_content, ContentFormatter};
pub use slug::slugify;
pub use toc::{table_of_contents, TocEntry};

/// A post body ready to be placed in a page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedContent {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

impl RenderedContent {
    pub fn render(formatter: &ContentFormatter, content: &str) -> RenderedContent {
        RenderedContent {
            html: formatter.format(content),
            toc: table_of_contents(content),
        }
    }
}
