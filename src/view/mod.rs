pub mod error_renderer;
pub mod list_renderer;
pub mod post_renderer;

#[derive(ramhorns::Content)]
pub(crate) struct ViewTag<'a> {
    pub tag: &'a str,
}
