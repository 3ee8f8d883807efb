use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Database entity for items
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: i32,
    pub category_id: i32,
    #[sqlx(rename = "type")]
    pub item_type: String,
    pub amount: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub transaction_date: DateTime<Utc>,
}

/// Mutable item fields, as persisted on create and update. The service
/// layer resolves the transaction date before this reaches the repository.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub category_id: i32,
    pub item_type: String,
    pub amount: f64,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
}

/// Item information returned in responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    /// Unique item identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Category this item belongs to
    #[schema(example = 1)]
    pub category_id: i32,
    /// Type tag (e.g. "income", "expense"); an open string, not an enum
    #[serde(rename = "type")]
    #[schema(example = "income")]
    pub item_type: String,
    /// Transaction amount (signed)
    #[schema(example = 149.90)]
    pub amount: f64,
    /// Free-text description
    #[schema(example = "Weekly groceries")]
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Business date of the transaction
    pub transaction_date: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            category_id: item.category_id,
            item_type: item.item_type,
            amount: item.amount,
            description: item.description,
            created_at: item.created_at,
            transaction_date: item.transaction_date,
        }
    }
}

/// Response wrapper for item listings
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<ItemResponse>,
}

/// Response returned after creating an item
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedItemResponse {
    /// Identifier assigned by the store
    #[schema(example = 1)]
    pub item_id: i32,
}

/// Request body for creating an item
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateItemDto {
    /// Category this item belongs to
    #[schema(example = 1)]
    pub category_id: i32,

    /// Type tag (must be non-empty)
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type cannot be empty"))]
    #[schema(example = "income")]
    pub item_type: String,

    /// Transaction amount (signed, unconstrained)
    #[schema(example = 149.90)]
    pub amount: f64,

    /// Free-text description (may be empty)
    #[serde(default)]
    #[schema(example = "Weekly groceries")]
    pub description: String,

    /// Business date of the transaction; defaults to now when omitted
    pub transaction_date: Option<DateTime<Utc>>,
}

/// Request body for updating an item (full replacement of mutable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateItemDto {
    /// Category this item belongs to
    #[schema(example = 1)]
    pub category_id: i32,

    /// Type tag (must be non-empty)
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type cannot be empty"))]
    #[schema(example = "expense")]
    pub item_type: String,

    /// Transaction amount (signed, unconstrained)
    #[schema(example = 75.00)]
    pub amount: f64,

    /// Free-text description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Business date of the transaction; defaults to now when omitted
    pub transaction_date: Option<DateTime<Utc>>,
}

/// Path parameters for item ID
#[derive(Debug, Deserialize, IntoParams)]
pub struct ItemIdPath {
    /// Item identifier
    pub id: i32,
}
