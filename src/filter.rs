//! Filter model, predicate compiler and query assembler shared by item
//! listing and every analytics aggregate.
//!
//! A filter is compiled exactly once, in one place, into `$n` condition
//! fragments plus a matching ordered value list, so the invariant that the
//! Nth placeholder binds the Nth value cannot drift between call sites.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use sqlx::postgres::PgArguments;
use sqlx::Postgres;
use utoipa::IntoParams;

use crate::errors::AppError;

/// Optional predicates applied to item queries. Absence of a predicate
/// means "no constraint on this dimension", never "match null".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    /// Inclusive lower bound on the transaction date.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the transaction date.
    pub to: Option<DateTime<Utc>>,
    /// Exact category match.
    pub category_id: Option<i32>,
    /// Exact type-tag match.
    pub item_type: Option<String>,
}

/// One value bound to one positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Timestamp(DateTime<Utc>),
    Int(i32),
    Text(String),
}

impl ItemFilter {
    /// Compiles present predicates into condition fragments and their bound
    /// values. Predicates are evaluated in a fixed order: from, to,
    /// category, type. Each present predicate advances the placeholder
    /// index by exactly one, so conditions and values stay in lockstep.
    pub fn compile(&self) -> (Vec<String>, Vec<BindValue>) {
        let mut conditions = Vec::new();
        let mut values = Vec::new();

        if let Some(from) = self.from {
            conditions.push(format!("transaction_date >= ${}", values.len() + 1));
            values.push(BindValue::Timestamp(from));
        }

        if let Some(to) = self.to {
            conditions.push(format!("transaction_date <= ${}", values.len() + 1));
            values.push(BindValue::Timestamp(to));
        }

        if let Some(category_id) = self.category_id {
            conditions.push(format!("category_id = ${}", values.len() + 1));
            values.push(BindValue::Int(category_id));
        }

        if let Some(item_type) = &self.item_type {
            conditions.push(format!("type = ${}", values.len() + 1));
            values.push(BindValue::Text(item_type.clone()));
        }

        (conditions, values)
    }
}

/// Appends the compiled WHERE clause (if any) to `base` and returns the
/// final statement together with its positional bind values. Pure; an
/// all-absent filter yields `base` unchanged with no values.
pub fn assemble(base: &str, filter: &ItemFilter) -> (String, Vec<BindValue>) {
    let (conditions, values) = filter.compile();

    let mut sql = base.to_string();
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    (sql, values)
}

/// Listing variant of [`assemble`]: adds a deterministic ordering clause so
/// result order does not depend on store-internal row order.
pub fn assemble_ordered(base: &str, filter: &ItemFilter) -> (String, Vec<BindValue>) {
    let (mut sql, values) = assemble(base, filter);
    sql.push_str(" ORDER BY transaction_date DESC");
    (sql, values)
}

/// Folds compiled values onto a row query in order.
pub fn bind_values<'q, O>(
    mut query: sqlx::query::QueryAs<'q, Postgres, O, PgArguments>,
    values: &[BindValue],
) -> sqlx::query::QueryAs<'q, Postgres, O, PgArguments> {
    for value in values {
        query = match value {
            BindValue::Timestamp(ts) => query.bind(*ts),
            BindValue::Int(id) => query.bind(*id),
            BindValue::Text(tag) => query.bind(tag.clone()),
        };
    }
    query
}

/// Folds compiled values onto a scalar query in order.
pub fn bind_scalar_values<'q, O>(
    mut query: sqlx::query::QueryScalar<'q, Postgres, O, PgArguments>,
    values: &[BindValue],
) -> sqlx::query::QueryScalar<'q, Postgres, O, PgArguments> {
    for value in values {
        query = match value {
            BindValue::Timestamp(ts) => query.bind(*ts),
            BindValue::Int(id) => query.bind(*id),
            BindValue::Text(tag) => query.bind(tag.clone()),
        };
    }
    query
}

/// Query parameters accepted by item listing and all analytics endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FilterQuery {
    /// Inclusive lower bound on transaction date (YYYY-MM-DD)
    #[param(example = "2024-01-01")]
    pub from: Option<String>,
    /// Inclusive upper bound on transaction date (YYYY-MM-DD)
    #[param(example = "2024-12-31")]
    pub to: Option<String>,
    /// Filter by category
    pub category_id: Option<i32>,
    /// Filter by type tag
    #[serde(rename = "type")]
    #[param(example = "income")]
    pub item_type: Option<String>,
}

impl FilterQuery {
    /// Decodes the transport-level strings into an [`ItemFilter`]. Empty
    /// strings count as absent, matching how the parameters behave when
    /// left out of the query string entirely.
    pub fn into_filter(self) -> Result<ItemFilter, AppError> {
        Ok(ItemFilter {
            from: parse_date_param(self.from.as_deref(), "from")?,
            to: parse_date_param(self.to.as_deref(), "to")?,
            category_id: self.category_id,
            item_type: self.item_type.filter(|t| !t.is_empty()),
        })
    }
}

fn parse_date_param(raw: Option<&str>, name: &str) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::invalid_input(format!("invalid '{name}' format, expected YYYY-MM-DD"))
    })?;

    Ok(Some(date.and_time(NaiveTime::MIN).and_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use chrono::TimeZone;

    fn full_filter() -> ItemFilter {
        ItemFilter {
            from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()),
            category_id: Some(7),
            item_type: Some("income".to_string()),
        }
    }

    #[test]
    fn empty_filter_compiles_to_nothing() {
        let (conditions, values) = ItemFilter::default().compile();
        assert!(conditions.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn full_filter_emits_conditions_in_canonical_order() {
        let (conditions, values) = full_filter().compile();
        assert_eq!(
            conditions,
            vec![
                "transaction_date >= $1",
                "transaction_date <= $2",
                "category_id = $3",
                "type = $4",
            ]
        );
        assert_eq!(values.len(), 4);
        assert!(matches!(values[0], BindValue::Timestamp(_)));
        assert!(matches!(values[1], BindValue::Timestamp(_)));
        assert_eq!(values[2], BindValue::Int(7));
        assert_eq!(values[3], BindValue::Text("income".to_string()));
    }

    #[test]
    fn placeholders_stay_contiguous_with_sparse_predicates() {
        let filter = ItemFilter {
            to: Some(Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()),
            item_type: Some("expense".to_string()),
            ..Default::default()
        };

        let (conditions, values) = filter.compile();
        assert_eq!(conditions, vec!["transaction_date <= $1", "type = $2"]);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn bound_value_count_matches_placeholder_count() {
        for filter in [
            ItemFilter::default(),
            ItemFilter {
                category_id: Some(1),
                ..Default::default()
            },
            full_filter(),
        ] {
            let (conditions, values) = filter.compile();
            assert_eq!(conditions.len(), values.len());
            let placeholders: usize = conditions.iter().filter(|c| c.contains('$')).count();
            assert_eq!(placeholders, values.len());
        }
    }

    #[test]
    fn assemble_without_predicates_leaves_base_untouched() {
        let (sql, values) = assemble("SELECT COUNT(*) FROM items", &ItemFilter::default());
        assert_eq!(sql, "SELECT COUNT(*) FROM items");
        assert!(values.is_empty());
    }

    #[test]
    fn assemble_joins_conditions_with_and() {
        let filter = ItemFilter {
            category_id: Some(3),
            item_type: Some("expense".to_string()),
            ..Default::default()
        };

        let (sql, values) = assemble("SELECT COALESCE(SUM(amount), 0) FROM items", &filter);
        assert_eq!(
            sql,
            "SELECT COALESCE(SUM(amount), 0) FROM items WHERE category_id = $1 AND type = $2"
        );
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn assemble_ordered_appends_deterministic_ordering() {
        let (sql, _) = assemble_ordered("SELECT id FROM items", &ItemFilter::default());
        assert_eq!(sql, "SELECT id FROM items ORDER BY transaction_date DESC");

        let filter = ItemFilter {
            category_id: Some(1),
            ..Default::default()
        };
        let (sql, _) = assemble_ordered("SELECT id FROM items", &filter);
        assert_eq!(
            sql,
            "SELECT id FROM items WHERE category_id = $1 ORDER BY transaction_date DESC"
        );
    }

    #[test]
    fn filter_query_decodes_date_only_bounds() {
        let query = FilterQuery {
            from: Some("2024-03-01".to_string()),
            to: Some("2024-03-31".to_string()),
            category_id: Some(2),
            item_type: Some("income".to_string()),
        };

        let filter = query.into_filter().unwrap();
        assert_eq!(
            filter.from,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            filter.to,
            Some(Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap())
        );
        assert_eq!(filter.category_id, Some(2));
        assert_eq!(filter.item_type.as_deref(), Some("income"));
    }

    #[test]
    fn filter_query_rejects_malformed_dates() {
        let query = FilterQuery {
            from: Some("01/03/2024".to_string()),
            to: None,
            category_id: None,
            item_type: None,
        };

        let err = query.into_filter().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.message().contains("YYYY-MM-DD"));
    }

    #[test]
    fn filter_query_treats_empty_strings_as_absent() {
        let query = FilterQuery {
            from: Some(String::new()),
            to: Some(String::new()),
            category_id: None,
            item_type: Some(String::new()),
        };

        assert_eq!(query.into_filter().unwrap(), ItemFilter::default());
    }
}
