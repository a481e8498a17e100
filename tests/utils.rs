// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use langs::{db, Content, Language};
use sqlx::SqlitePool;

/// A Test Context structure used in integration tests to ensure setting up
/// and tearing down a fresh in-memory store for each test.
pub(crate) struct StoreContext {
    pub pool: SqlitePool,
}

impl test_context::AsyncTestContext for StoreContext {
    async fn setup() -> StoreContext {
        let pool = db::connect_to("sqlite::memory:", 1)
            .await
            .expect("Failed creating in-memory store");
        StoreContext { pool }
    }

    async fn teardown(self) {
        self.pool.close().await;
    }
}

/// Return a [Content] w/ Spanish and English values.
pub(crate) fn es_en() -> Content {
    Content::from_map([
        (Language::ES, "es-content"),
        (Language::EN, "en-content"),
    ])
}
