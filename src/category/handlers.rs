use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::errors::{AppError, ErrorResponse};

use super::models::{
    CategoriesResponse, CategoryIdPath, CategoryResponse, CreateCategoryDto,
    CreatedCategoryResponse, UpdateCategoryDto,
};
use super::service::CategoryService;

/// POST /categories - Create a new category
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CreatedCategoryResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Category name already taken", body = ErrorResponse)
    )
)]
#[post("/categories")]
pub async fn create_category(
    pool: web::Data<PgPool>,
    body: web::Json<CreateCategoryDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::invalid_input(e.to_string()))?;

    let category_id = CategoryService::create(pool.get_ref(), &body).await?;

    Ok(HttpResponse::Created().json(CreatedCategoryResponse { category_id }))
}

/// GET /categories/{id} - Get a specific category
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(CategoryIdPath),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
#[get("/categories/{id}")]
pub async fn get_category(
    pool: web::Data<PgPool>,
    path: web::Path<CategoryIdPath>,
) -> Result<HttpResponse, AppError> {
    let category = CategoryService::get_by_id(pool.get_ref(), path.id).await?;

    Ok(HttpResponse::Ok().json(CategoryResponse::from(category)))
}

/// GET /categories - List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "List of categories", body = CategoriesResponse)
    )
)]
#[get("/categories")]
pub async fn list_categories(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let categories = CategoryService::get_all(pool.get_ref()).await?;

    let response = CategoriesResponse {
        categories: categories.into_iter().map(CategoryResponse::from).collect(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// PUT /categories/{id} - Rename a category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(CategoryIdPath),
    request_body = UpdateCategoryDto,
    responses(
        (status = 204, description = "Category renamed"),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
#[put("/categories/{id}")]
pub async fn update_category(
    pool: web::Data<PgPool>,
    path: web::Path<CategoryIdPath>,
    body: web::Json<UpdateCategoryDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::invalid_input(e.to_string()))?;

    CategoryService::update(pool.get_ref(), path.id, &body).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /categories/{id} - Delete a category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(CategoryIdPath),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
#[delete("/categories/{id}")]
pub async fn delete_category(
    pool: web::Data<PgPool>,
    path: web::Path<CategoryIdPath>,
) -> Result<HttpResponse, AppError> {
    CategoryService::delete(pool.get_ref(), path.id).await?;

    Ok(HttpResponse::NoContent().finish())
}
