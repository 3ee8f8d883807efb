use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Database entity for categories
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Category information returned in responses
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    /// Unique category identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Category name
    #[schema(example = "Groceries")]
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
        }
    }
}

/// Response wrapper for category listings
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryResponse>,
}

/// Response returned after creating a category
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedCategoryResponse {
    /// Identifier assigned by the store
    #[schema(example = 1)]
    pub category_id: i32,
}

/// Request body for creating a category
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Category name (must be non-empty)
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Groceries")]
    pub name: String,
}

/// Request body for renaming a category
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    /// New category name (must be non-empty)
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Food & Dining")]
    pub name: String,
}

/// Path parameters for category ID
#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryIdPath {
    /// Category identifier
    pub id: i32,
}
