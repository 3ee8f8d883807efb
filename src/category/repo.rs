use sqlx::PgPool;

use super::models::Category;
use crate::errors::AppError;

/// Storage access for categories. All store failures are classified into
/// the shared taxonomy here; callers never see sqlx errors.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Inserts a category and returns the store-assigned identifier.
    /// A duplicate name surfaces as `AlreadyExists` via the unique
    /// constraint on `categories.name`.
    pub async fn create(pool: &PgPool, name: &str) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::not_found("category not found"))
    }

    pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at
            FROM categories
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    /// Renames a category. Zero affected rows means the target does not
    /// exist.
    pub async fn update(pool: &PgPool, id: i32, name: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = $1
            WHERE id = $2
            "#,
        )
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("category not found"));
        }

        Ok(())
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("category not found"));
        }

        Ok(())
    }
}
