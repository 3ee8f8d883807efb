use sqlx::PgPool;

use super::repo::AnalyticsRepo;
use crate::errors::AppError;
use crate::filter::ItemFilter;

/// Service layer for analytics. Stateless; adds operation context to
/// repository errors without changing their classification.
pub struct AnalyticsService;

impl AnalyticsService {
    pub async fn sum(pool: &PgPool, filter: &ItemFilter) -> Result<f64, AppError> {
        AnalyticsRepo::sum(pool, filter)
            .await
            .map_err(|e| e.context("calculate sum"))
    }

    pub async fn avg(pool: &PgPool, filter: &ItemFilter) -> Result<f64, AppError> {
        AnalyticsRepo::avg(pool, filter)
            .await
            .map_err(|e| e.context("calculate average"))
    }

    pub async fn count(pool: &PgPool, filter: &ItemFilter) -> Result<i64, AppError> {
        AnalyticsRepo::count(pool, filter)
            .await
            .map_err(|e| e.context("count items"))
    }

    pub async fn median(pool: &PgPool, filter: &ItemFilter) -> Result<f64, AppError> {
        AnalyticsRepo::median(pool, filter)
            .await
            .map_err(|e| e.context("calculate median"))
    }

    pub async fn percentile_90(pool: &PgPool, filter: &ItemFilter) -> Result<f64, AppError> {
        AnalyticsRepo::percentile_90(pool, filter)
            .await
            .map_err(|e| e.context("calculate 90th percentile"))
    }
}
