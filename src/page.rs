use std::path::Path;
use std::{fs, io};

use crate::config::Config;
use crate::content::{ContentFormatter, RenderedContent};
use crate::post::Post;
use crate::source::FetchError;
use crate::view::error_renderer::ErrorRenderer;
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::{PostDefaults, PostRenderer};

pub const LIST_TEMPLATE: &str = "postlist.tpl";
pub const VIEW_TEMPLATE: &str = "view.tpl";
pub const ERROR_TEMPLATE: &str = "error.tpl";

/// Outcome of a fetch, as far as a page is concerned.
#[derive(Debug, PartialEq)]
pub enum PageState<T> {
    Loaded(T),
    NotFound,
    Failed(String),
}

impl<T> From<Result<T, FetchError>> for PageState<T> {
    fn from(res: Result<T, FetchError>) -> Self {
        match res {
            Ok(x) => PageState::Loaded(x),
            Err(FetchError::NotFound(_)) => PageState::NotFound,
            Err(e) => PageState::Failed(e.to_string()),
        }
    }
}

pub struct Page {
    pub status: u16,
    pub body: String,
}

pub struct Templates {
    pub list: String,
    pub view: String,
    pub error: String,
}

impl Templates {
    pub fn load(template_dir: &Path) -> io::Result<Templates> {
        let read = |name: &str| {
            let path = template_dir.join(name);
            fs::read_to_string(&path).map_err(|e| {
                io::Error::new(e.kind(), format!("Error reading template {}: {}", path.display(), e))
            })
        };

        let templates = Templates {
            list: read(LIST_TEMPLATE)?,
            view: read(VIEW_TEMPLATE)?,
            error: read(ERROR_TEMPLATE)?,
        };

        // Fail at startup rather than on the first request
        ListRenderer::new(&templates.list)?;
        PostRenderer::new(&templates.view)?;
        ErrorRenderer::new(&templates.error)?;

        Ok(templates)
    }
}

/// Turns page states into full HTML pages.
pub struct SiteRenderer {
    templates: Templates,
    formatter: ContentFormatter,
    default_category: String,
    default_author: String,
}

impl SiteRenderer {
    pub fn new(templates: Templates, formatter: ContentFormatter, default_category: &str, default_author: &str) -> Self {
        SiteRenderer {
            templates,
            formatter,
            default_category: default_category.to_string(),
            default_author: default_author.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> io::Result<SiteRenderer> {
        let templates = Templates::load(&config.paths.template_dir)?;
        Ok(SiteRenderer::new(
            templates,
            ContentFormatter::new(config.defaults.escape_html),
            &config.defaults.default_category,
            &config.defaults.default_author,
        ))
    }

    fn error_page(&self, status: u16, message: &str, back_link: bool) -> io::Result<Page> {
        let renderer = ErrorRenderer::new(&self.templates.error)?;
        Ok(Page {
            status,
            body: renderer.render(message, back_link),
        })
    }

    pub fn list_page(&self, state: PageState<Vec<Post>>) -> io::Result<Page> {
        match state {
            PageState::Loaded(posts) => {
                let renderer = ListRenderer::new(&self.templates.list)?;
                Ok(Page {
                    status: 200,
                    body: renderer.render(&posts, &self.default_category),
                })
            }
            PageState::NotFound => self.error_page(404, "Failed to fetch blogs: 404", false),
            PageState::Failed(message) => self.error_page(502, &message, false),
        }
    }

    pub fn post_page(&self, state: PageState<Post>) -> io::Result<Page> {
        match state {
            PageState::Loaded(post) => {
                let renderer = PostRenderer::new(&self.templates.view)?;
                let content = RenderedContent::render(&self.formatter, &post.content);
                let defaults = PostDefaults {
                    category: &self.default_category,
                    author: &self.default_author,
                };
                Ok(Page {
                    status: 200,
                    body: renderer.render(&post, &content, &defaults),
                })
            }
            PageState::NotFound => self.error_page(404, "Blog post not found", true),
            PageState::Failed(message) => {
                self.error_page(502, &format!("Could not load blog post. {}", message), true)
            }
        }
    }
}
