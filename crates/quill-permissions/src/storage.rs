//! Storage integration for posts and their dependents
//!
//! The permission core never queries storage itself; it hands a
//! [`PostPredicate`] to a repository and receives the matching rows. The
//! in-memory implementation backs the tests and applies predicates with
//! [`PostPredicate::matches`], which keeps it honest against the
//! single-object evaluator.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::dependents::{Comment, Like};
use crate::error::{Error, Result};
use crate::permission::filter::PostPredicate;
use crate::post::Post;

/// Repository trait for posts, comments and likes
pub trait PostRepository: Send + Sync {
    /// Insert or replace a post
    fn save_post(&self, post: &Post) -> Result<()>;

    /// Load a post by id
    fn get_post(&self, id: u64) -> Result<Option<Post>>;

    /// List posts matching a visibility predicate, ordered by id
    fn list_posts(&self, predicate: &PostPredicate) -> Result<Vec<Post>>;

    /// Delete a post and cascade to its comments and likes
    ///
    /// Returns whether the post existed.
    fn delete_post(&self, id: u64) -> Result<bool>;

    /// Append a comment
    fn add_comment(&self, comment: &Comment) -> Result<()>;

    /// The most recent comment on a post, if any
    fn last_comment(&self, post_id: u64) -> Result<Option<Comment>>;

    /// Remove a comment by id; returns whether it existed
    fn remove_comment(&self, comment_id: &str) -> Result<bool>;

    /// All comments on a post, oldest first
    fn comments_for(&self, post_id: u64) -> Result<Vec<Comment>>;

    /// Add a like; returns false if the user already likes the post
    fn add_like(&self, like: &Like) -> Result<bool>;

    /// Remove a user's like on a post; returns whether it existed
    fn remove_like(&self, post_id: u64, user_id: u64) -> Result<bool>;

    /// All likes on a post
    fn likes_for(&self, post_id: u64) -> Result<Vec<Like>>;
}

/// In-memory post repository
pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<u64, Post>>,
    comments: RwLock<Vec<Comment>>,
    likes: RwLock<Vec<Like>>,
}

impl InMemoryPostRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            comments: RwLock::new(Vec::new()),
            likes: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error<T>(err: std::sync::PoisonError<T>) -> Error {
    Error::Internal(format!("Failed to acquire lock: {}", err))
}

impl PostRepository for InMemoryPostRepository {
    fn save_post(&self, post: &Post) -> Result<()> {
        let mut posts = self.posts.write().map_err(lock_error)?;
        posts.insert(post.id, post.clone());
        Ok(())
    }

    fn get_post(&self, id: u64) -> Result<Option<Post>> {
        let posts = self.posts.read().map_err(lock_error)?;
        Ok(posts.get(&id).cloned())
    }

    fn list_posts(&self, predicate: &PostPredicate) -> Result<Vec<Post>> {
        let posts = self.posts.read().map_err(lock_error)?;
        Ok(posts
            .values()
            .filter(|post| predicate.matches(post))
            .cloned()
            .collect())
    }

    fn delete_post(&self, id: u64) -> Result<bool> {
        let mut posts = self.posts.write().map_err(lock_error)?;
        let existed = posts.remove(&id).is_some();

        if existed {
            let mut comments = self.comments.write().map_err(lock_error)?;
            comments.retain(|comment| comment.post != id);

            let mut likes = self.likes.write().map_err(lock_error)?;
            likes.retain(|like| like.post != id);
        }

        Ok(existed)
    }

    fn add_comment(&self, comment: &Comment) -> Result<()> {
        let mut comments = self.comments.write().map_err(lock_error)?;
        comments.push(comment.clone());
        Ok(())
    }

    fn last_comment(&self, post_id: u64) -> Result<Option<Comment>> {
        let comments = self.comments.read().map_err(lock_error)?;
        Ok(comments
            .iter()
            .filter(|comment| comment.post == post_id)
            .last()
            .cloned())
    }

    fn remove_comment(&self, comment_id: &str) -> Result<bool> {
        let mut comments = self.comments.write().map_err(lock_error)?;
        let before = comments.len();
        comments.retain(|comment| comment.id != comment_id);
        Ok(comments.len() < before)
    }

    fn comments_for(&self, post_id: u64) -> Result<Vec<Comment>> {
        let comments = self.comments.read().map_err(lock_error)?;
        Ok(comments
            .iter()
            .filter(|comment| comment.post == post_id)
            .cloned()
            .collect())
    }

    fn add_like(&self, like: &Like) -> Result<bool> {
        let mut likes = self.likes.write().map_err(lock_error)?;
        let duplicate = likes
            .iter()
            .any(|existing| existing.post == like.post && existing.user == like.user);
        if duplicate {
            return Ok(false);
        }
        likes.push(like.clone());
        Ok(true)
    }

    fn remove_like(&self, post_id: u64, user_id: u64) -> Result<bool> {
        let mut likes = self.likes.write().map_err(lock_error)?;
        let before = likes.len();
        likes.retain(|like| !(like.post == post_id && like.user == user_id));
        Ok(likes.len() < before)
    }

    fn likes_for(&self, post_id: u64) -> Result<Vec<Like>> {
        let likes = self.likes.read().map_err(lock_error)?;
        Ok(likes
            .iter()
            .filter(|like| like.post == post_id)
            .cloned()
            .collect())
    }
}
