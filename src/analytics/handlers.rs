use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::{AppError, ErrorResponse};
use crate::filter::FilterQuery;

use super::models::{
    AverageResponse, CountResponse, MedianResponse, Percentile90Response, SumResponse,
};
use super::service::AnalyticsService;

/// GET /analytics/sum - Sum of matching amounts
#[utoipa::path(
    get,
    path = "/api/analytics/sum",
    tag = "Analytics",
    params(FilterQuery),
    responses(
        (status = 200, description = "Sum of matching amounts", body = SumResponse),
        (status = 400, description = "Malformed filter parameter", body = ErrorResponse)
    )
)]
#[get("/analytics/sum")]
pub async fn sum(
    pool: web::Data<PgPool>,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;

    let sum = AnalyticsService::sum(pool.get_ref(), &filter).await?;

    Ok(HttpResponse::Ok().json(SumResponse { sum }))
}

/// GET /analytics/avg - Arithmetic mean of matching amounts
#[utoipa::path(
    get,
    path = "/api/analytics/avg",
    tag = "Analytics",
    params(FilterQuery),
    responses(
        (status = 200, description = "Average of matching amounts", body = AverageResponse),
        (status = 400, description = "Malformed filter parameter", body = ErrorResponse)
    )
)]
#[get("/analytics/avg")]
pub async fn average(
    pool: web::Data<PgPool>,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;

    let average = AnalyticsService::avg(pool.get_ref(), &filter).await?;

    Ok(HttpResponse::Ok().json(AverageResponse { average }))
}

/// GET /analytics/count - Number of matching items
#[utoipa::path(
    get,
    path = "/api/analytics/count",
    tag = "Analytics",
    params(FilterQuery),
    responses(
        (status = 200, description = "Number of matching items", body = CountResponse),
        (status = 400, description = "Malformed filter parameter", body = ErrorResponse)
    )
)]
#[get("/analytics/count")]
pub async fn count(
    pool: web::Data<PgPool>,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;

    let count = AnalyticsService::count(pool.get_ref(), &filter).await?;

    Ok(HttpResponse::Ok().json(CountResponse { count }))
}

/// GET /analytics/median - Median of matching amounts
#[utoipa::path(
    get,
    path = "/api/analytics/median",
    tag = "Analytics",
    params(FilterQuery),
    responses(
        (status = 200, description = "Median of matching amounts", body = MedianResponse),
        (status = 400, description = "Malformed filter parameter", body = ErrorResponse)
    )
)]
#[get("/analytics/median")]
pub async fn median(
    pool: web::Data<PgPool>,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;

    let median = AnalyticsService::median(pool.get_ref(), &filter).await?;

    Ok(HttpResponse::Ok().json(MedianResponse { median }))
}

/// GET /analytics/percentile - 90th percentile of matching amounts
#[utoipa::path(
    get,
    path = "/api/analytics/percentile",
    tag = "Analytics",
    params(FilterQuery),
    responses(
        (status = 200, description = "90th percentile of matching amounts", body = Percentile90Response),
        (status = 400, description = "Malformed filter parameter", body = ErrorResponse)
    )
)]
#[get("/analytics/percentile")]
pub async fn percentile_90(
    pool: web::Data<PgPool>,
    query: web::Query<FilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;

    let percentile_90 = AnalyticsService::percentile_90(pool.get_ref(), &filter).await?;

    Ok(HttpResponse::Ok().json(Percentile90Response { percentile_90 }))
}
