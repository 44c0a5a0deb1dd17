use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::RenderedContent;
use crate::post::Post;
use crate::text_utils::display_published_at;
use crate::view::ViewTag;

#[derive(ramhorns::Content)]
struct ViewTocEntry<'a> {
    id: &'a str,
    text: &'a str,
    top_level: bool,
}

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    slug: &'a str,
    post_title: &'a str,
    date: &'a str,
    category: &'a str,
    author: &'a str,
    author_initial: &'a str,
    tags: &'a Vec<ViewTag<'a>>,
    has_tags: bool,
    toc: &'a Vec<ViewTocEntry<'a>>,
    has_toc: bool,
    post_content: &'a str,
}

pub struct PostDefaults<'a> {
    pub category: &'a str,
    pub author: &'a str,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer> {
        let template = match Template::new(view_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post view template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
        })
    }

    pub fn render(&self, post: &Post, content: &RenderedContent, defaults: &PostDefaults) -> String {
        let ref tags: Vec<ViewTag> = post.tags.iter().map(|t| ViewTag { tag: t.as_str() }).collect();
        let ref toc: Vec<ViewTocEntry> = content.toc.iter()
            .map(|e| ViewTocEntry {
                id: e.id.as_str(),
                text: e.text.as_str(),
                top_level: e.level == 2,
            })
            .collect();
        let date = display_published_at(post.published_at.as_deref());
        let author_initial = post.author_initial(defaults.author);

        let rendered_page = self.template.render(&ViewItem {
            slug: post.slug.as_str(),
            post_title: post.title.as_str(),
            date: date.as_str(),
            category: post.category_or(defaults.category),
            author: post.author_or(defaults.author),
            author_initial: author_initial.as_str(),
            tags,
            has_tags: !tags.is_empty(),
            toc,
            has_toc: !toc.is_empty(),
            post_content: content.html.as_str(),
        });

        rendered_page
    }
}
