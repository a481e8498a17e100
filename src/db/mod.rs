// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

//! A minimal SQLite backed store for [Scalar] values.
//!
//! Values live in a single `content` table keyed by a unique `name`. The
//! `value` column has no declared type so SQLite keeps whatever storage class
//! was written; reading it back maps that storage class to the matching
//! [ScalarValue] variant which is then handed to [Scalar::scan].

use crate::{
    config::config,
    data::{Scalar, ScalarValue},
    runtime_error, MyError,
};
use sqlx::{
    sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow},
    Decode, Row, Sqlite, TypeInfo, ValueRef,
};
use tracing::debug;

/// Macro for logging and wrapping database errors before returning them as
/// ours.
#[macro_export]
macro_rules! emit_db_error {
    ( $err: expr, $( $arg: expr),* ) => {{
        let __msg = format!($($arg),*);
        tracing::error!("{}: {:?}", __msg, $err);
        Err($crate::MyError::DB($err))
    }};
}

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS content (
    name TEXT NOT NULL PRIMARY KEY,
    value
)"#;

const UPSERT: &str = r#"
INSERT INTO content (name, value) VALUES (?, ?)
ON CONFLICT (name) DO UPDATE SET value = excluded.value"#;

const FIND: &str = r#"SELECT value FROM content WHERE name = ?"#;

const DELETE: &str = r#"DELETE FROM content WHERE name = ?"#;

/// Open a connections pool to the store configured in [config()][1] and
/// ensure its schema exists.
///
/// [1]: crate::config
pub async fn connect() -> Result<SqlitePool, MyError> {
    let cfg = config();
    connect_to(&cfg.db_url, cfg.db_max_connections).await
}

/// Open a connections pool of at most `max_connections` to the SQLite
/// database at `url` and ensure its schema exists.
///
/// Idle connections are never reaped; otherwise an in-memory database would
/// vanish w/ its last connection.
pub async fn connect_to(url: &str, max_connections: u32) -> Result<SqlitePool, MyError> {
    let pool = match SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(url)
        .await
    {
        Ok(x) => x,
        Err(x) => return emit_db_error!(x, "Failed connecting to <{}>", url),
    };
    ensure_schema(&pool).await?;
    debug!("Connected to <{}>", url);
    Ok(pool)
}

/// Create the `content` table if it does not exist yet.
pub async fn ensure_schema(conn: &SqlitePool) -> Result<(), MyError> {
    match sqlx::query(CREATE_TABLE).execute(conn).await {
        Ok(_) => Ok(()),
        Err(x) => emit_db_error!(x, "Failed creating 'content' table"),
    }
}

/// Write `value` as is under `name`, replacing any previous value.
pub async fn store_scalar(
    conn: &SqlitePool,
    name: &str,
    value: ScalarValue,
) -> Result<(), MyError> {
    debug!("Storing {} as '{}'", value, name);
    let query = sqlx::query(UPSERT).bind(name);
    let query = match value {
        ScalarValue::Null => query.bind(None::<String>),
        ScalarValue::Text(x) => query.bind(x),
        ScalarValue::Bytes(x) => query.bind(x),
        ScalarValue::Integer(x) => query.bind(x),
        ScalarValue::Real(x) => query.bind(x),
        ScalarValue::Boolean(x) => query.bind(x),
    };
    match query.execute(conn).await {
        Ok(_) => Ok(()),
        Err(x) => emit_db_error!(x, "Failed storing '{}'", name),
    }
}

/// Read the raw value stored under `name`. A missing row reads as
/// [Null][ScalarValue::Null].
pub async fn load_scalar(conn: &SqlitePool, name: &str) -> Result<ScalarValue, MyError> {
    match sqlx::query(FIND).bind(name).fetch_optional(conn).await {
        Ok(Some(row)) => raw_value(&row),
        Ok(None) => {
            debug!("No row named '{}'", name);
            Ok(ScalarValue::Null)
        }
        Err(x) => emit_db_error!(x, "Failed loading '{}'", name),
    }
}

/// Remove the row named `name` if it exists.
///
/// Return TRUE if a row was removed; FALSE otherwise.
pub async fn remove(conn: &SqlitePool, name: &str) -> Result<bool, MyError> {
    match sqlx::query(DELETE).bind(name).execute(conn).await {
        Ok(x) => Ok(x.rows_affected() > 0),
        Err(x) => emit_db_error!(x, "Failed removing '{}'", name),
    }
}

/// Encode `value` w/ its [Scalar] codec and store it under `name`.
pub async fn save<T: Scalar>(conn: &SqlitePool, name: &str, value: &T) -> Result<(), MyError> {
    let scalar = value.to_scalar()?;
    store_scalar(conn, name, scalar).await
}

/// Read the value stored under `name` and decode it into `dst` w/ its
/// [Scalar] codec. A missing row or a `NULL` value leaves `dst` untouched.
pub async fn load_into<T: Scalar>(
    conn: &SqlitePool,
    name: &str,
    dst: &mut T,
) -> Result<(), MyError> {
    let scalar = load_scalar(conn, name).await?;
    dst.scan(scalar)?;
    Ok(())
}

/// Convenience wrapper around [load_into] starting from `T`'s default value.
pub async fn load<T: Scalar + Default>(conn: &SqlitePool, name: &str) -> Result<T, MyError> {
    let mut result = T::default();
    load_into(conn, name, &mut result).await?;
    Ok(result)
}

// map the storage class of the first column of `row` to a ScalarValue...
fn raw_value(row: &SqliteRow) -> Result<ScalarValue, MyError> {
    let raw = row.try_get_raw(0)?;
    if raw.is_null() {
        return Ok(ScalarValue::Null);
    }

    let storage = raw.type_info().name().to_owned();
    let value = match storage.as_str() {
        "TEXT" => <String as Decode<Sqlite>>::decode(raw).map(ScalarValue::Text),
        "BLOB" => <Vec<u8> as Decode<Sqlite>>::decode(raw).map(ScalarValue::Bytes),
        "INTEGER" | "BIGINT" | "BOOLEAN" => {
            <i64 as Decode<Sqlite>>::decode(raw).map(ScalarValue::Integer)
        }
        "REAL" | "NUMERIC" => <f64 as Decode<Sqlite>>::decode(raw).map(ScalarValue::Real),
        x => runtime_error!("Unexpected SQLite storage class: {}", x),
    };
    value.map_err(|x| MyError::DB(sqlx::Error::Decode(x)))
}
