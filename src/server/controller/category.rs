use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::{CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get all categories.
///
/// Returns every category ordered by name, each with the number of channels
/// bound to it.
///
/// # Access Control
/// - Any logged-in user
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let categories = CategoryService::new(&state.db).list().await?;
    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a category by ID.
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let category = CategoryService::new(&state.db).get(category_id).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Create a new category.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Category name and optional description
///
/// # Returns
/// - `201 Created` - Successfully created category
/// - `400 Bad Request` - Name empty or too long, description too long
/// - `403 Forbidden` - User is not an admin
/// - `409 Conflict` - A category with this name exists
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Category name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Update a category's name and description.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
#[utoipa::path(
    put,
    path = "/api/admin/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .update(UpdateCategoryParams::from_dto(category_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category. Channels bound to it lose the binding.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db).delete(category_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
