use sqlx::PgPool;

use super::models::{Item, NewItem};
use crate::errors::AppError;
use crate::filter::{self, ItemFilter};

const SELECT_ITEMS: &str = r#"SELECT id, category_id, type, amount, description, created_at, transaction_date FROM items"#;

/// Storage access for items. Filtered reads go through the shared
/// predicate compiler so listing and analytics agree on filter semantics.
pub struct ItemRepo;

impl ItemRepo {
    /// Inserts an item and returns the store-assigned identifier. A
    /// `category_id` that references no category trips the foreign key
    /// constraint and surfaces as `NotFound`.
    pub async fn create(pool: &PgPool, item: &NewItem) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO items (category_id, type, amount, description, transaction_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(item.category_id)
        .bind(&item.item_type)
        .bind(item.amount)
        .bind(&item.description)
        .bind(item.transaction_date)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Item, AppError> {
        sqlx::query_as::<_, Item>(
            r#"
            SELECT id, category_id, type, amount, description, created_at, transaction_date
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::not_found("item not found"))
    }

    /// Lists items matching the filter, newest transaction first. Zero
    /// matches is a valid empty result, never an error.
    pub async fn get_all(pool: &PgPool, filter: &ItemFilter) -> Result<Vec<Item>, AppError> {
        let (sql, values) = filter::assemble_ordered(SELECT_ITEMS, filter);

        let query = sqlx::query_as::<_, Item>(&sql);
        let items = filter::bind_values(query, &values).fetch_all(pool).await?;

        Ok(items)
    }

    /// Replaces all mutable fields of an item. Zero affected rows means
    /// the target does not exist.
    pub async fn update(pool: &PgPool, id: i32, item: &NewItem) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET category_id = $1,
                type = $2,
                amount = $3,
                description = $4,
                transaction_date = $5
            WHERE id = $6
            "#,
        )
        .bind(item.category_id)
        .bind(&item.item_type)
        .bind(item.amount)
        .bind(&item.description)
        .bind(item.transaction_date)
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("item not found"));
        }

        Ok(())
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("item not found"));
        }

        Ok(())
    }
}
