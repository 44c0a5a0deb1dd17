use std::fs;
use std::path::{Path, PathBuf};

use spdlog::warn;

use crate::post::{sort_by_date, Post};
use crate::source::FetchError;

/// A directory of post records, one JSON file per post.
pub struct LocalPosts {
    posts_dir: PathBuf,
}

impl LocalPosts {
    pub fn new(posts_dir: PathBuf) -> Self {
        LocalPosts { posts_dir }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    fn retrieve_files(&self) -> Result<Vec<PathBuf>, FetchError> {
        let entries = fs::read_dir(&self.posts_dir)
            .map_err(|e| FetchError::Transport(format!("{}: {}", self.posts_dir.display(), e)))?;

        let mut files = vec![];
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();
            if file_type.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_post(path: &Path) -> Result<Post, FetchError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| FetchError::Transport(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| FetchError::Decode(format!("{}: {}", path.display(), e)))
    }

    /// Broken files are skipped with a warning so one bad post doesn't take
    /// the list down.
    pub fn list_posts(&self) -> Result<Vec<Post>, FetchError> {
        let mut posts = vec![];
        for file in self.retrieve_files()? {
            match Self::read_post(&file) {
                Ok(post) => posts.push(post),
                Err(e) => warn!("Skipping post file: {}", e),
            }
        }
        sort_by_date(&mut posts);
        Ok(posts)
    }

    pub fn get_post(&self, slug: &str) -> Result<Post, FetchError> {
        self.list_posts()?
            .into_iter()
            .find(|post| post.slug == slug)
            .ok_or_else(|| FetchError::NotFound(slug.to_string()))
    }
}
