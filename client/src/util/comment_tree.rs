//! One-level reply tree for a post's comments.
//!
//! Built once per render as an adjacency list so looking up a comment's
//! replies is a map hit instead of a scan over every comment.

#[cfg(test)]
#[path = "comment_tree_test.rs"]
mod comment_tree_test;

use std::collections::HashMap;

use crate::net::types::Comment;

#[derive(Debug, Default)]
pub struct CommentTree<'a> {
    roots: Vec<&'a Comment>,
    replies: HashMap<&'a str, Vec<&'a Comment>>,
}

impl<'a> CommentTree<'a> {
    /// Comments of `post_id`, keeping input order for roots and replies.
    /// A reply whose parent is not a root of this post is dropped.
    #[must_use]
    pub fn build(comments: &'a [Comment], post_id: &str) -> Self {
        let mut roots = Vec::new();
        let mut replies: HashMap<&'a str, Vec<&'a Comment>> = HashMap::new();
        for comment in comments.iter().filter(|c| c.post_id == post_id) {
            match comment.parent_id.as_deref() {
                None => roots.push(comment),
                Some(parent) => replies.entry(parent).or_default().push(comment),
            }
        }
        replies.retain(|parent, _| roots.iter().any(|root| root.id == *parent));
        Self { roots, replies }
    }

    #[must_use]
    pub fn roots(&self) -> &[&'a Comment] {
        &self.roots
    }

    #[must_use]
    pub fn replies_to(&self, comment_id: &str) -> &[&'a Comment] {
        self.replies.get(comment_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Roots plus replies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len() + self.replies.values().map(Vec::len).sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
