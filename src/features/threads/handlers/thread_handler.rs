use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::threads::dtos::{
    CreateThreadDto, ListThreadsQuery, ThreadDetailResponseDto, ThreadResponseDto,
    UpdateThreadDto,
};
use crate::features::threads::services::ThreadService;
use crate::shared::types::ApiResponse;

/// Create a thread
///
/// The new thread belongs to the authenticated user. When `uploadId` is
/// given, the staged upload is consumed. The response carries no data; the
/// new thread's location is returned in the `Location` header.
#[utoipa::path(
    post,
    path = "/api/threads",
    request_body = CreateThreadDto,
    responses(
        (status = 201, description = "Thread created"),
        (status = 400, description = "Invalid body"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Authenticated user does not exist")
    ),
    security(("bearer_auth" = [])),
    tag = "threads"
)]
pub async fn create_thread(
    State(service): State<Arc<ThreadService>>,
    user: AuthenticatedUser,
    AppJson(dto): AppJson<CreateThreadDto>,
) -> Result<impl IntoResponse> {
    let id = service.create(&user, dto).await?;

    Ok((
        [(header::LOCATION, format!("/api/threads/{}", id))],
        ApiResponse::message(StatusCode::CREATED, "Thread created successfully"),
    ))
}

/// List threads
///
/// Ten threads per page, newest first. `replies` is the reply count.
#[utoipa::path(
    get,
    path = "/api/threads",
    params(ListThreadsQuery),
    responses(
        (status = 200, description = "Page of threads", body = ApiResponse<Vec<ThreadResponseDto>>),
    ),
    tag = "threads"
)]
pub async fn list_threads(
    State(service): State<Arc<ThreadService>>,
    AppQuery(query): AppQuery<ListThreadsQuery>,
) -> Result<ApiResponse<Vec<ThreadResponseDto>>> {
    let threads = service.list(&query).await?;
    Ok(ApiResponse::ok("Threads fetched successfully", threads))
}

/// Get a thread with its likes and replies
#[utoipa::path(
    get,
    path = "/api/threads/{id}",
    params(
        ("id" = String, Path, description = "Thread id (UUID v4)")
    ),
    responses(
        (status = 200, description = "Thread found", body = ApiResponse<ThreadDetailResponseDto>),
        (status = 400, description = "Malformed thread id"),
        (status = 404, description = "Thread not found")
    ),
    tag = "threads"
)]
pub async fn get_thread(
    State(service): State<Arc<ThreadService>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ThreadDetailResponseDto>> {
    let thread = service.get(&id).await?;
    Ok(ApiResponse::ok("Thread fetched successfully", thread))
}

/// Replace the content of a thread
#[utoipa::path(
    patch,
    path = "/api/threads/{id}",
    params(
        ("id" = String, Path, description = "Thread id (UUID v4)")
    ),
    request_body = UpdateThreadDto,
    responses(
        (status = 200, description = "Thread updated"),
        (status = 400, description = "Malformed thread id or body"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Thread not found")
    ),
    security(("bearer_auth" = [])),
    tag = "threads"
)]
pub async fn update_thread(
    State(service): State<Arc<ThreadService>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateThreadDto>,
) -> Result<ApiResponse<()>> {
    tracing::debug!("User {} updating thread {}", user.user_id, id);
    service.update(&id, dto).await?;
    Ok(ApiResponse::message(
        StatusCode::OK,
        "Thread updated successfully",
    ))
}

/// Delete a thread
#[utoipa::path(
    delete,
    path = "/api/threads/{id}",
    params(
        ("id" = String, Path, description = "Thread id (UUID v4)")
    ),
    responses(
        (status = 200, description = "Thread deleted"),
        (status = 400, description = "Malformed thread id"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Thread not found")
    ),
    security(("bearer_auth" = [])),
    tag = "threads"
)]
pub async fn delete_thread(
    State(service): State<Arc<ThreadService>>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>> {
    tracing::debug!("User {} deleting thread {}", user.user_id, id);
    service.delete(&id).await?;
    Ok(ApiResponse::message(
        StatusCode::OK,
        "Thread deleted successfully",
    ))
}
