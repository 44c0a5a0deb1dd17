use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post::Post;
use crate::text_utils::display_published_at;
use crate::view::ViewTag;

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    post_list: Vec<PostItem<'a>>,
    has_posts: bool,
}

#[derive(ramhorns::Content)]
struct PostItem<'a> {
    link: String,
    title: &'a str,
    excerpt: &'a str,
    has_excerpt: bool,
    category: &'a str,
    date: String,
    tags: Vec<ViewTag<'a>>,
    has_tags: bool,
}

pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
        })
    }

    pub fn render(&self, posts: &[Post], default_category: &str) -> String {
        let mut post_list = vec![];
        for post in posts {
            let excerpt = post.excerpt.as_deref().unwrap_or("");
            let tags: Vec<_> = post.tags.iter().map(|t| ViewTag { tag: t.as_str() }).collect();
            post_list.push(PostItem {
                link: format!("/blogs/{}", post.slug),
                title: post.title.as_str(),
                excerpt,
                has_excerpt: !excerpt.is_empty(),
                category: post.category_or(default_category),
                date: display_published_at(post.published_at.as_deref()),
                has_tags: !tags.is_empty(),
                tags,
            });
        }

        self.template.render(&ListPage {
            has_posts: !post_list.is_empty(),
            post_list,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::post::PostList;
    use crate::test_data::POST_LIST_JSON;

    use super::*;

    const TEMPLATE: &str = r##"{{#has_posts}}{{#post_list}}[{{link}}|{{title}}|{{category}}|{{date}}|{{#has_excerpt}}{{excerpt}}{{/has_excerpt}}|{{#tags}}({{tag}}){{/tags}}];{{/post_list}}{{/has_posts}}{{^has_posts}}No blog posts available yet.{{/has_posts}}"##;

    #[test]
    fn render_list() {
        let list: PostList = serde_json::from_str(POST_LIST_JSON).unwrap();
        let renderer = ListRenderer::new(TEMPLATE).unwrap();
        let res = renderer.render(&list.posts, "General");
        assert_eq!(res, r##"[/blogs/understanding-value-bets|Understanding Value Bets: The Key to Long-Term Betting Success|Strategy|May 27, 2025|Why the odds matter more than the winner.|(value betting)(ev)];[/blogs/bankroll-basics|Bankroll Basics|General|June 2, 2025||];"##);
    }

    #[test]
    fn render_empty_list() {
        let renderer = ListRenderer::new(TEMPLATE).unwrap();
        assert_eq!(renderer.render(&[], "General"), "No blog posts available yet.");
    }
}
