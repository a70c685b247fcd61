#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use quill_core::domain::Post;
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, PostRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn post_model(title: &str) -> post::Model {
        post::Model {
            id: uuid::Uuid::new_v4(),
            author_id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            summary: "Summary".to_owned(),
            content: "Content".to_owned(),
            cover: Some("uploads/cover.png".to_owned()),
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    fn user_model(username: &str) -> user::Model {
        user::Model {
            id: uuid::Uuid::new_v4(),
            username: username.to_owned(),
            password_hash: "$argon2id$dummy".to_owned(),
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let model = post_model("Test Post");
        let post_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.cover.as_deref(), Some("uploads/cover.png"));
    }

    #[tokio::test]
    async fn test_find_user_by_username() {
        let model = user_model("alice@example.com");
        let user_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let user = repo
            .find_by_username("alice@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.username, "alice@example.com");
    }

    #[tokio::test]
    async fn test_list_recent_resolves_author_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                (post_model("Newest"), user_model("alice@example.com")),
                (post_model("Older"), user_model("bob@example.com")),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.list_recent(20).await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].post.title, "Newest");
        assert_eq!(posts[0].author_username.as_deref(), Some("alice@example.com"));
        assert_eq!(posts[1].author_username.as_deref(), Some("bob@example.com"));
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Result<(), _> =
            BaseRepository::<Post, _>::delete(&repo, uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
