use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::{CreateItemDto, Item, NewItem, UpdateItemDto};
use super::repo::ItemRepo;
use crate::errors::AppError;
use crate::filter::ItemFilter;

/// Service layer for item business logic. Owns the default-date policy:
/// an omitted (or epoch-zero) transaction date becomes "now" at the moment
/// of processing.
pub struct ItemService;

impl ItemService {
    pub async fn create(pool: &PgPool, dto: CreateItemDto) -> Result<i32, AppError> {
        let item = NewItem {
            category_id: dto.category_id,
            item_type: dto.item_type,
            amount: dto.amount,
            description: dto.description,
            transaction_date: resolve_transaction_date(dto.transaction_date),
        };

        ItemRepo::create(pool, &item)
            .await
            .map_err(|e| e.context("create item"))
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Item, AppError> {
        ItemRepo::get_by_id(pool, id)
            .await
            .map_err(|e| e.context("get item by id"))
    }

    pub async fn get_all(pool: &PgPool, filter: &ItemFilter) -> Result<Vec<Item>, AppError> {
        ItemRepo::get_all(pool, filter)
            .await
            .map_err(|e| e.context("get all items"))
    }

    pub async fn update(pool: &PgPool, id: i32, dto: UpdateItemDto) -> Result<(), AppError> {
        let item = NewItem {
            category_id: dto.category_id,
            item_type: dto.item_type,
            amount: dto.amount,
            description: dto.description,
            transaction_date: resolve_transaction_date(dto.transaction_date),
        };

        ItemRepo::update(pool, id, &item)
            .await
            .map_err(|e| e.context("update item"))
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        ItemRepo::delete(pool, id)
            .await
            .map_err(|e| e.context("delete item"))
    }
}

/// An absent date defaults to now. An epoch-zero date is treated the same
/// way; callers cannot request the epoch explicitly, which mirrors how a
/// zero-valued timestamp has always behaved here.
fn resolve_transaction_date(supplied: Option<DateTime<Utc>>) -> DateTime<Utc> {
    supplied
        .filter(|date| *date != DateTime::<Utc>::UNIX_EPOCH)
        .unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn supplied_date_is_kept() {
        let date = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();
        assert_eq!(resolve_transaction_date(Some(date)), date);
    }

    #[test]
    fn absent_date_defaults_to_now() {
        let before = Utc::now();
        let resolved = resolve_transaction_date(None);
        let after = Utc::now();

        assert!(resolved >= before && resolved <= after);
    }

    #[test]
    fn epoch_zero_date_defaults_to_now() {
        let before = Utc::now();
        let resolved = resolve_transaction_date(Some(DateTime::<Utc>::UNIX_EPOCH));

        assert!(resolved >= before);
    }
}
