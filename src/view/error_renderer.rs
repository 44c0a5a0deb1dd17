use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

#[derive(ramhorns::Content)]
struct ErrorPage<'a> {
    message: &'a str,
    back_link: bool,
}

pub struct ErrorRenderer<'a> {
    pub template: Template<'a>,
}

impl ErrorRenderer<'_> {
    pub fn new(error_tpl_src: &str) -> io::Result<ErrorRenderer> {
        let template = match Template::new(error_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing error template: {}", e)));
            }
        };

        Ok(ErrorRenderer {
            template,
        })
    }

    pub fn render(&self, message: &str, back_link: bool) -> String {
        self.template.render(&ErrorPage {
            message,
            back_link,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error() {
        let renderer = ErrorRenderer::new("Error: {{message}}{{#back_link}} <a href=\"/blogs\">Back</a>{{/back_link}}").unwrap();
        assert_eq!(renderer.render("Blog post <x> not found", true), "Error: Blog post &lt;x&gt; not found <a href=\"/blogs\">Back</a>");
        assert_eq!(renderer.render("Failed to fetch blogs: 500", false), "Error: Failed to fetch blogs: 500");
    }
}
