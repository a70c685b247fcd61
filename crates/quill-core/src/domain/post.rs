use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog post with an optional uploaded cover image.
///
/// `author_id` is fixed at creation; only the author may mutate or delete
/// the post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    /// Relative path of the uploaded cover image, e.g. `uploads/<name>.png`.
    pub cover: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `author_id`.
    pub fn new(
        author_id: Uuid,
        title: String,
        summary: String,
        content: String,
        cover: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            summary,
            content,
            cover,
            created_at: now,
            updated_at: now,
        }
    }

    /// Ownership check, compared on the identifier itself.
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }

    /// Replace the editable fields. The cover is only replaced when a new
    /// one was uploaded; `None` keeps the existing image.
    pub fn apply_update(
        &mut self,
        title: String,
        summary: String,
        content: String,
        cover: Option<String>,
    ) {
        self.title = title;
        self.summary = summary;
        self.content = content;
        if let Some(cover) = cover {
            self.cover = Some(cover);
        }
        self.updated_at = Utc::now();
    }
}

/// A post joined with its author's public name, as returned by list/get.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(author_id: Uuid) -> Post {
        Post::new(
            author_id,
            "T".to_owned(),
            "S".to_owned(),
            "C".to_owned(),
            Some("uploads/a.png".to_owned()),
        )
    }

    #[test]
    fn test_ownership_is_identifier_equality() {
        let author = Uuid::new_v4();
        let post = sample(author);

        assert!(post.is_authored_by(author));
        assert!(!post.is_authored_by(Uuid::new_v4()));
    }

    #[test]
    fn test_update_retains_cover_when_no_new_file() {
        let mut post = sample(Uuid::new_v4());

        post.apply_update("T2".to_owned(), "S2".to_owned(), "C2".to_owned(), None);

        assert_eq!(post.title, "T2");
        assert_eq!(post.cover.as_deref(), Some("uploads/a.png"));
    }

    #[test]
    fn test_update_replaces_cover_when_supplied() {
        let mut post = sample(Uuid::new_v4());

        post.apply_update(
            "T2".to_owned(),
            "S2".to_owned(),
            "C2".to_owned(),
            Some("uploads/b.png".to_owned()),
        );

        assert_eq!(post.cover.as_deref(), Some("uploads/b.png"));
    }

    #[test]
    fn test_update_never_changes_author() {
        let author = Uuid::new_v4();
        let mut post = sample(author);

        post.apply_update("T2".to_owned(), "S2".to_owned(), "C2".to_owned(), None);

        assert_eq!(post.author_id, author);
    }
}
