//! Park repository for PostgreSQL operations

use sqlx::PgPool;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;

use crate::data::filters::{BindValue, ParkFilters, build_parks_query};
use crate::data::postgres::PostgresError;
use crate::data::types::ParkRow;

/// List parks matching the given filters
///
/// Compiles the filters into a single statement and binds the compiled
/// values positionally, so the bind order always matches the placeholder
/// numbering.
pub async fn list_parks(
    pool: &PgPool,
    filters: &ParkFilters,
) -> Result<Vec<ParkRow>, PostgresError> {
    let compiled = build_parks_query(filters);

    tracing::trace!(
        query = %compiled.text,
        bind_count = compiled.values.len(),
        "Executing parks query"
    );

    let mut query = sqlx::query_as::<_, ParkRow>(&compiled.text);
    for value in compiled.values {
        query = bind_value(query, value);
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}

fn bind_value<'q>(
    query: QueryAs<'q, sqlx::Postgres, ParkRow, PgArguments>,
    value: BindValue,
) -> QueryAs<'q, sqlx::Postgres, ParkRow, PgArguments> {
    match value {
        BindValue::Text(s) => query.bind(s),
        BindValue::TextArray(v) => query.bind(v),
        BindValue::Float(f) => query.bind(f),
    }
}
