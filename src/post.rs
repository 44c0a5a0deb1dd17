use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use crate::text_utils::parse_published_at;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

/// A post record as returned by the posts API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<PostId>,
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /api/public/posts`.
#[derive(Debug, Deserialize)]
pub struct PostList {
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Post {
    pub fn published(&self) -> Option<NaiveDateTime> {
        self.published_at.as_deref().and_then(|d| parse_published_at(d).ok())
    }

    pub fn category_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => default,
        }
    }

    pub fn author_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.author.as_deref() {
            Some(a) if !a.trim().is_empty() => a,
            _ => default,
        }
    }

    /// Letter shown in the author avatar.
    pub fn author_initial(&self, default_author: &str) -> String {
        self.author_or(default_author).chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "C".to_string())
    }
}

/// Newest first. Posts without a readable date go last.
pub fn sort_by_date(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.published().cmp(&a.published())
    });
}
