use sqlx::PgPool;

use crate::errors::AppError;
use crate::filter::{self, ItemFilter};

/// Aggregate queries over items. Every aggregate shares the same filter
/// compilation as the listing query, differing only in the base expression.
/// NULL aggregates over an empty matching set are coalesced to 0 in SQL so
/// callers always receive a number.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    pub async fn sum(pool: &PgPool, filter: &ItemFilter) -> Result<f64, AppError> {
        Self::scalar(pool, "SELECT COALESCE(SUM(amount), 0) FROM items", filter).await
    }

    pub async fn avg(pool: &PgPool, filter: &ItemFilter) -> Result<f64, AppError> {
        Self::scalar(pool, "SELECT COALESCE(AVG(amount), 0) FROM items", filter).await
    }

    pub async fn count(pool: &PgPool, filter: &ItemFilter) -> Result<i64, AppError> {
        let (sql, values) = filter::assemble("SELECT COUNT(*) FROM items", filter);

        let query = sqlx::query_scalar::<_, i64>(&sql);
        let count = filter::bind_scalar_values(query, &values)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Median via continuous interpolation between order statistics.
    pub async fn median(pool: &PgPool, filter: &ItemFilter) -> Result<f64, AppError> {
        Self::scalar(
            pool,
            "SELECT COALESCE(PERCENTILE_CONT(0.5) WITHIN GROUP (ORDER BY amount), 0) FROM items",
            filter,
        )
        .await
    }

    /// 90th percentile via continuous interpolation.
    pub async fn percentile_90(pool: &PgPool, filter: &ItemFilter) -> Result<f64, AppError> {
        Self::scalar(
            pool,
            "SELECT COALESCE(PERCENTILE_CONT(0.9) WITHIN GROUP (ORDER BY amount), 0) FROM items",
            filter,
        )
        .await
    }

    async fn scalar(pool: &PgPool, base: &str, filter: &ItemFilter) -> Result<f64, AppError> {
        let (sql, values) = filter::assemble(base, filter);

        let query = sqlx::query_scalar::<_, f64>(&sql);
        let value = filter::bind_scalar_values(query, &values)
            .fetch_one(pool)
            .await?;

        Ok(value)
    }
}
