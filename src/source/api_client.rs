use std::time::Duration;

use reqwest::Url;
use spdlog::{info, warn};

use crate::post::{Post, PostList};
use crate::source::FetchError;

const POSTS_PATH: [&str; 3] = ["api", "public", "posts"];

/// Client for the public posts API.
pub struct ApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<ApiClient, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("crashout-blog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(ApiClient { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn posts_url(&self, slug: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so path_segments_mut always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(POSTS_PATH);
            if let Some(slug) = slug {
                segments.push(slug);
            }
        }
        url
    }

    pub fn list_url(&self) -> Url {
        self.posts_url(None)
    }

    pub fn post_url(&self, slug: &str) -> Url {
        self.posts_url(Some(slug))
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, FetchError> {
        let url = self.list_url();
        info!("Fetching posts from {}", url);

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        info!("Posts response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let list: PostList = response.json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(list.posts)
    }

    /// Any non-success status is reported as not found.
    pub async fn get_post(&self, slug: &str) -> Result<Post, FetchError> {
        let url = self.post_url(slug);
        info!("Fetching post from {}", url);

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Post {} not available, status {}", slug, status);
            return Err(FetchError::NotFound(slug.to_string()));
        }

        response.json::<Post>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
