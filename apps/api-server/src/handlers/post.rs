//! Post CRUD handlers.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Post, PostWithAuthor};
use quill_shared::ApiResponse;
use quill_shared::dto::{PostAuthor, PostResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Maximum number of posts returned by the public listing.
const LIST_LIMIT: u64 = 20;

/// Multipart body for creating a post. The cover file is required; the
/// handler rejects requests without one.
#[derive(Debug, MultipartForm)]
pub struct CreatePostForm {
    pub title: Text<String>,
    pub summary: Text<String>,
    pub content: Text<String>,
    pub file: Option<TempFile>,
}

/// Multipart body for updating a post. Without a file the existing cover
/// is retained.
#[derive(Debug, MultipartForm)]
pub struct UpdatePostForm {
    pub id: Text<String>,
    pub title: Text<String>,
    pub summary: Text<String>,
    pub content: Text<String>,
    pub file: Option<TempFile>,
}

fn to_response(post: Post, author_username: Option<String>) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        summary: post.summary,
        content: post.content,
        cover: post.cover,
        created_at: post.created_at,
        updated_at: post.updated_at,
        author: PostAuthor {
            id: post.author_id,
            username: author_username,
        },
    }
}

async fn save_cover(state: &AppState, file: &TempFile) -> Result<String, AppError> {
    let original_name = file.file_name.clone().unwrap_or_default();
    Ok(state.files.save(&original_name, file.file.path()).await?)
}

/// POST /post - requires a session; a cover file must be supplied.
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    form: MultipartForm<CreatePostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let Some(file) = form.file else {
        return Err(AppError::BadRequest("No file uploaded".to_string()));
    };

    let cover = save_cover(&state, &file).await?;

    let post = Post::new(
        identity.user_id,
        form.title.into_inner(),
        form.summary.into_inner(),
        form.content.into_inner(),
        Some(cover),
    );
    let post = state.posts.insert(post).await?;

    tracing::info!(post_id = %post.id, author = %identity.user_id, "Created post");

    Ok(HttpResponse::Ok().json(to_response(post, Some(identity.username))))
}

/// GET /post - public; the most recent posts, newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent(LIST_LIMIT).await?;

    let body: Vec<PostResponse> = posts
        .into_iter()
        .map(
            |PostWithAuthor {
                 post,
                 author_username,
             }| to_response(post, author_username),
        )
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /post/{id} - public.
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let found = state
        .posts
        .find_with_author(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;

    Ok(HttpResponse::Ok().json(to_response(found.post, found.author_username)))
}

/// PUT /post - author only; the cover is replaced only when a new file
/// was uploaded.
pub async fn update(
    identity: Identity,
    state: web::Data<AppState>,
    form: MultipartForm<UpdatePostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let id = Uuid::parse_str(&form.id)
        .map_err(|_| AppError::BadRequest("Invalid post id".to_string()))?;

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;

    if !post.is_authored_by(identity.user_id) {
        return Err(AppError::Forbidden(
            "You are not the author of this post".to_string(),
        ));
    }

    let cover = match form.file {
        Some(ref file) => Some(save_cover(&state, file).await?),
        None => None,
    };

    post.apply_update(
        form.title.into_inner(),
        form.summary.into_inner(),
        form.content.into_inner(),
        cover,
    );
    let post = state.posts.update(post).await?;

    tracing::info!(post_id = %post.id, "Updated post");

    Ok(HttpResponse::Ok().json(to_response(post, Some(identity.username))))
}

/// DELETE /delete/{id} - author only.
pub async fn delete(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;

    if !post.is_authored_by(identity.user_id) {
        return Err(AppError::Forbidden(
            "You are not the author of this post".to_string(),
        ));
    }

    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, "Deleted post");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Post has been deleted")))
}
