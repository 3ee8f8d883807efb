use sqlx::PgPool;

use super::models::{Category, CreateCategoryDto, UpdateCategoryDto};
use super::repo::CategoryRepo;
use crate::errors::AppError;

/// Service layer for category business logic.
pub struct CategoryService;

impl CategoryService {
    /// Create a new category. The name is trimmed before storage; a name
    /// that trims to nothing is rejected before reaching the store.
    pub async fn create(pool: &PgPool, dto: &CreateCategoryDto) -> Result<i32, AppError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("name cannot be empty"));
        }

        CategoryRepo::create(pool, name)
            .await
            .map_err(|e| e.context("create category"))
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Category, AppError> {
        CategoryRepo::get_by_id(pool, id)
            .await
            .map_err(|e| e.context("get category by id"))
    }

    pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>, AppError> {
        CategoryRepo::get_all(pool)
            .await
            .map_err(|e| e.context("get all categories"))
    }

    pub async fn update(pool: &PgPool, id: i32, dto: &UpdateCategoryDto) -> Result<(), AppError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("name cannot be empty"));
        }

        CategoryRepo::update(pool, id, name)
            .await
            .map_err(|e| e.context("update category"))
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        CategoryRepo::delete(pool, id)
            .await
            .map_err(|e| e.context("delete category"))
    }
}
