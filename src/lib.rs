pub mod config;
pub mod content;
pub mod logger;
pub mod page;
pub mod post;
pub mod server;
pub mod source;
pub mod text_utils;
mod test_data;
mod view;
