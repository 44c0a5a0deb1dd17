use std::io;
use std::io::ErrorKind;
use std::time::Duration;

use thiserror::Error;

use crate::config::{Config, SourceKind};
use crate::post::Post;
use crate::source::api_client::ApiClient;
use crate::source::local::LocalPosts;

pub mod api_client;
pub mod local;

#[derive(Debug, Error, PartialEq)]
pub enum FetchError {
    #[error("Blog post not found: {0}")]
    NotFound(String),
    #[error("Failed to fetch blogs: {0}")]
    Status(u16),
    #[error("Could not reach the posts API: {0}")]
    Transport(String),
    #[error("Invalid post data: {0}")]
    Decode(String),
    #[error("Invalid API url: {0}")]
    InvalidUrl(String),
}

/// Where post records come from. Both sources serve the same records, so a
/// post authored locally renders exactly like one fetched from the API.
pub enum PostSource {
    Api(ApiClient),
    Local(LocalPosts),
}

impl PostSource {
    pub fn from_config(config: &Config) -> io::Result<PostSource> {
        match config.content.source {
            SourceKind::Api => {
                let timeout = Duration::from_secs(config.api.timeout_secs);
                let client = ApiClient::new(&config.api.base_url, timeout)
                    .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;
                Ok(PostSource::Api(client))
            }
            SourceKind::Local => {
                let posts_dir = config.content.posts_dir.clone().ok_or_else(|| {
                    io::Error::new(ErrorKind::InvalidInput, "Missing content.posts_dir for local source")
                })?;
                Ok(PostSource::Local(LocalPosts::new(posts_dir)))
            }
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, FetchError> {
        match self {
            PostSource::Api(client) => client.list_posts().await,
            PostSource::Local(local) => local.list_posts(),
        }
    }

    pub async fn get_post(&self, slug: &str) -> Result<Post, FetchError> {
        match self {
            PostSource::Api(client) => client.get_post(slug).await,
            PostSource::Local(local) => local.get_post(slug),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            PostSource::Api(client) => format!("api {}", client.base_url()),
            PostSource::Local(local) => format!("local dir {}", local.posts_dir().display()),
        }
    }
}
