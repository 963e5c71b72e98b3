//! JSON parameter binding
//!
//! Query builders collect parameters as `serde_json::Value`; these are bound
//! to sqlx queries by their JSON type.

use serde_json::Value;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// Bind one JSON parameter to the next placeholder
///
/// Integers that fit in `i32` bind as INT4 to match the schema's INTEGER
/// columns; larger ones bind as INT8.
pub fn bind_param<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    param: Value,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    match param {
        Value::String(s) => query.bind(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if let Ok(small) = i32::try_from(i) {
                    query.bind(small)
                } else {
                    query.bind(i)
                }
            } else if let Some(f) = n.as_f64() {
                query.bind(f)
            } else {
                query.bind(n.to_string())
            }
        }
        // Search values a filter could not coerce arrive here unchanged,
        // as do params assembled by callers outside the builder
        Value::Bool(b) => query.bind(b),
        Value::Null => query.bind(Option::<String>::None),
        other => query.bind(other.to_string()),
    }
}

/// Bind every parameter in order
pub fn bind_params<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    params: Vec<Value>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    params.into_iter().fold(query, bind_param)
}
