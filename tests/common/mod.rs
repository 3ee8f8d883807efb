use actix_web::{test, web, App};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use sales_tracker::{analytics, category, item};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

const SCHEMA: &str = include_str!("../../migrations/0001_init.sql");

pub struct TestApp {
    pub pool: PgPool,
    pub test_id: String,
}

pub struct TestResponse {
    status: u16,
    body: bytes::Bytes,
}

impl TestResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub async fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }
}

/// Registers the API routes the same way main.rs does.
fn api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(category::list_categories)
            .service(category::create_category)
            .service(category::get_category)
            .service(category::update_category)
            .service(category::delete_category)
            .service(item::list_items)
            .service(item::create_item)
            .service(item::get_item)
            .service(item::update_item)
            .service(item::delete_item)
            .service(analytics::sum)
            .service(analytics::average)
            .service(analytics::count)
            .service(analytics::median)
            .service(analytics::percentile_90),
    );
}

impl TestApp {
    /// Connects to the database named by DATABASE_URL and applies the
    /// schema. Returns None when DATABASE_URL is unset so the suite can run
    /// without a live Postgres.
    pub async fn spawn() -> Option<Self> {
        let database_url = std::env::var("DATABASE_URL").ok()?;

        let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let test_id = format!("{timestamp}_{counter}");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await
            .expect("Failed to connect to database for tests");

        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .expect("Failed to apply schema");

        Some(TestApp { pool, test_id })
    }

    /// Generate a unique name for this test run
    pub fn unique_name(&self, prefix: &str) -> String {
        format!("{prefix}_{}", self.test_id)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(self.pool.clone()))
                .configure(api),
        )
        .await;

        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;

        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;

        TestResponse { status, body }
    }

    pub async fn post(&self, path: &str, payload: &Value) -> TestResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(self.pool.clone()))
                .configure(api),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(path)
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;

        TestResponse { status, body }
    }

    pub async fn put(&self, path: &str, payload: &Value) -> TestResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(self.pool.clone()))
                .configure(api),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(path)
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;

        TestResponse { status, body }
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(self.pool.clone()))
                .configure(api),
        )
        .await;

        let req = test::TestRequest::delete().uri(path).to_request();
        let resp = test::call_service(&app, req).await;

        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;

        TestResponse { status, body }
    }
}
