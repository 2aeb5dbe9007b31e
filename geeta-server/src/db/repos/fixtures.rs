//! Throwaway-schema fixtures for database-backed tests
//!
//! Each fixture creates a uniquely named schema, points a dedicated pool's
//! `search_path` at it and loads a small slice of the import data.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::db::schema::ensure_preference_schema;

const IMPORT_TABLES: &str = r#"
    CREATE TABLE chapters (
        id INT PRIMARY KEY,
        name TEXT,
        translation TEXT,
        transliteration TEXT,
        verses_count INT,
        meaning_en TEXT,
        meaning_hi TEXT,
        summary_en TEXT,
        summary_hi TEXT
    );
    CREATE TABLE verses (
        id TEXT PRIMARY KEY,
        chapter_id INT NOT NULL REFERENCES chapters(id),
        verse_number INT NOT NULL,
        speaker TEXT,
        slok TEXT,
        transliteration TEXT,
        UNIQUE (chapter_id, verse_number)
    );
    CREATE TABLE commentaries (
        verse_id TEXT NOT NULL REFERENCES verses(id),
        source_key TEXT NOT NULL,
        author TEXT,
        et TEXT,
        ht TEXT,
        ec TEXT,
        hc TEXT,
        sc TEXT,
        PRIMARY KEY (verse_id, source_key)
    );
"#;

const IMPORT_DATA: &str = r#"
    INSERT INTO chapters VALUES
        (1, 'अर्जुनविषादयोग', 'Arjuna Visada Yoga', 'Arjun Viṣhād Yog', 47,
         'Arjuna''s Dilemma', 'अर्जुन विषाद योग', 'Arjuna summary', 'अर्जुन सारांश'),
        (2, 'सांख्ययोग', 'Sankhya Yoga', 'Sānkhya Yog', 72,
         'Transcendental Knowledge', 'सांख्य योग', 'Sankhya yoga summary', 'सांख्य सारांश');
    INSERT INTO verses VALUES
        ('BG1.1', 1, 1, 'धृतराष्ट्र', 'धर्मक्षेत्रे कुरुक्षेत्रे', 'dharmakshetre kurukshetre'),
        ('BG2.31', 2, 31, 'श्रीभगवान्', 'स्वधर्ममपि चावेक्ष्य', 'svadharmam api chaveksya'),
        ('BG2.47', 2, 47, 'श्रीभगवान्', 'कर्मण्येवाधिकारस्ते', 'karmanye vadhikaraste'),
        ('BG2.48', 2, 48, 'श्रीभगवान्', 'योगस्थः कुरु कर्माणि', 'yogasthah kuru karmani');
    INSERT INTO commentaries VALUES
        ('BG2.47', 'siva', 'Swami Sivananda', 'siva et', 'siva ht', NULL, NULL, NULL),
        ('BG2.47', 'prabhu', 'A.C. Bhaktivedanta Swami Prabhupada', '', NULL, 'prabhu english commentary', NULL, NULL),
        ('BG2.47', 'tej', 'Swami Tejomayananda', '', NULL, '', NULL, NULL),
        ('BG2.47', 'abhinav', 'Sri Abhinavgupta', NULL, '', NULL, '', 'abhinav sanskrit'),
        ('BG1.1', 'abc', 'Lowercase Source', 'abc text', NULL, NULL, NULL, NULL),
        ('BG1.1', 'Zed', 'Uppercase Source', 'zed text', NULL, NULL, NULL, NULL);
"#;

/// Isolated schema with its own pool
pub(crate) struct Fixture {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl Fixture {
    /// Empty schema: no imported tables, no preferences table.
    pub async fn empty() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!("geeta_test_{}", uuid::Uuid::new_v4().simple());

        let admin = PgPool::connect(&url).await.expect("admin pool");
        let create = format!("CREATE SCHEMA {schema}");
        sqlx::query(&create).execute(&admin).await.expect("create schema");

        let options = PgConnectOptions::from_str(&url)
            .expect("valid DATABASE_URL")
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .expect("fixture pool");

        Self { pool, admin, schema }
    }

    /// Imported tables with sample rows, plus the preferences table.
    pub async fn seeded() -> Self {
        let fx = Self::empty().await;
        sqlx::raw_sql(IMPORT_TABLES).execute(&fx.pool).await.expect("import tables");
        sqlx::raw_sql(IMPORT_DATA).execute(&fx.pool).await.expect("import data");
        ensure_preference_schema(&fx.pool).await.expect("preference schema");
        fx
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        let drop = format!("DROP SCHEMA {} CASCADE", self.schema);
        sqlx::query(&drop).execute(&self.admin).await.expect("drop schema");
        self.admin.close().await;
    }
}
