use serde::Serialize;
use utoipa::ToSchema;

/// Sum of matching amounts; 0 when nothing matches
#[derive(Debug, Serialize, ToSchema)]
pub struct SumResponse {
    #[schema(example = 1250.50)]
    pub sum: f64,
}

/// Arithmetic mean of matching amounts; 0 when nothing matches
#[derive(Debug, Serialize, ToSchema)]
pub struct AverageResponse {
    #[schema(example = 312.62)]
    pub average: f64,
}

/// Number of matching items
#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    #[schema(example = 4)]
    pub count: i64,
}

/// Median of matching amounts (continuous interpolation); 0 when nothing
/// matches
#[derive(Debug, Serialize, ToSchema)]
pub struct MedianResponse {
    #[schema(example = 25.0)]
    pub median: f64,
}

/// 90th percentile of matching amounts (continuous interpolation); 0 when
/// nothing matches
#[derive(Debug, Serialize, ToSchema)]
pub struct Percentile90Response {
    #[schema(example = 940.0)]
    pub percentile_90: f64,
}
