use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::errors::{AppError, ErrorResponse};
use crate::filter::FilterQuery;

use super::models::{
    CreateItemDto, CreatedItemResponse, ItemIdPath, ItemResponse, ItemsResponse, UpdateItemDto,
};
use super::service::ItemService;

/// POST /items - Create a new item
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "Items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = CreatedItemResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Referenced category not found", body = ErrorResponse)
    )
)]
#[post("/items")]
pub async fn create_item(
    pool: web::Data<PgPool>,
    body: web::Json<CreateItemDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::invalid_input(e.to_string()))?;

    let item_id = ItemService::create(pool.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreatedItemResponse { item_id }))
}

/// GET /items/{id} - Get a specific item
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "Items",
    params(ItemIdPath),
    responses(
        (status = 200, description = "Item details", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[get("/items/{id}")]
pub async fn get_item(
    pool: web::Data<PgPool>,
    path: web::Path<ItemIdPath>,
) -> Result<HttpResponse, AppError> {
    let item = ItemService::get_by_id(pool.get_ref(), path.id).await?;

    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

/// GET /items - List items matching the optional filters
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Items",
    params(FilterQuery),
    responses(
        (status = 200, description = "Items ordered by transaction date descending", body = ItemsResponse),
        (status = 400, description = "Malformed filter parameter", body = ErrorResponse)
    )
)]
#[get("/items")]
pub async fn list_items(
    pool: web::Data<PgPool>,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;

    let items = ItemService::get_all(pool.get_ref(), &filter).await?;

    let response = ItemsResponse {
        items: items.into_iter().map(ItemResponse::from).collect(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// PUT /items/{id} - Replace an item's mutable fields
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "Items",
    params(ItemIdPath),
    request_body = UpdateItemDto,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[put("/items/{id}")]
pub async fn update_item(
    pool: web::Data<PgPool>,
    path: web::Path<ItemIdPath>,
    body: web::Json<UpdateItemDto>,
) -> Result<HttpResponse, AppError> {
    body.validate()
        .map_err(|e| AppError::invalid_input(e.to_string()))?;

    ItemService::update(pool.get_ref(), path.id, body.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /items/{id} - Delete an item
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "Items",
    params(ItemIdPath),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    pool: web::Data<PgPool>,
    path: web::Path<ItemIdPath>,
) -> Result<HttpResponse, AppError> {
    ItemService::delete(pool.get_ref(), path.id).await?;

    Ok(HttpResponse::NoContent().finish())
}
