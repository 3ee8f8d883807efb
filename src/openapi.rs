use utoipa::OpenApi;

use crate::analytics::models::{
    AverageResponse, CountResponse, MedianResponse, Percentile90Response, SumResponse,
};
use crate::category::models::{
    CategoriesResponse, CategoryResponse, CreateCategoryDto, CreatedCategoryResponse,
    UpdateCategoryDto,
};
use crate::errors::ErrorResponse;
use crate::item::models::{
    CreateItemDto, CreatedItemResponse, ItemResponse, ItemsResponse, UpdateItemDto,
};

/// OpenAPI documentation configuration
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sales Tracker API",
        version = "1.0.0",
        description = "RESTful API for categorized sales records with filterable analytics"
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "Categories", description = "Category management"),
        (name = "Items", description = "Sales record management with filterable listing"),
        (name = "Analytics", description = "Aggregate analytics over filtered items")
    ),
    paths(
        // Category endpoints
        crate::category::handlers::create_category,
        crate::category::handlers::get_category,
        crate::category::handlers::list_categories,
        crate::category::handlers::update_category,
        crate::category::handlers::delete_category,
        // Item endpoints
        crate::item::handlers::create_item,
        crate::item::handlers::get_item,
        crate::item::handlers::list_items,
        crate::item::handlers::update_item,
        crate::item::handlers::delete_item,
        // Analytics endpoints
        crate::analytics::handlers::sum,
        crate::analytics::handlers::average,
        crate::analytics::handlers::count,
        crate::analytics::handlers::median,
        crate::analytics::handlers::percentile_90,
    ),
    components(
        schemas(
            // Error response
            ErrorResponse,
            // Category schemas
            CategoryResponse,
            CategoriesResponse,
            CreatedCategoryResponse,
            CreateCategoryDto,
            UpdateCategoryDto,
            // Item schemas
            ItemResponse,
            ItemsResponse,
            CreatedItemResponse,
            CreateItemDto,
            UpdateItemDto,
            // Analytics schemas
            SumResponse,
            AverageResponse,
            CountResponse,
            MedianResponse,
            Percentile90Response,
        )
    )
)]
pub struct ApiDoc;
