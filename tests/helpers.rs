// Shared test helpers for project and database setup.
//
// Each test builds a throwaway Laravel-like project: a SQLite file under
// `database/` and an empty `database/seeders` directory.

use std::path::{Path, PathBuf};

use pollinate::{Config, SeedMetadata};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// A temporary project with a database and a seeders directory.
pub struct TestProject {
    pub dir: TempDir,
    pub db_path: PathBuf,
}

impl TestProject {
    /// Creates the project and runs `statements` against a fresh database.
    pub async fn new(statements: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(dir.path().join("database/seeders"))
            .expect("Failed to create seeders directory");
        let db_path = dir.path().join("database/shop.sqlite");
        create_test_database(&db_path, statements).await;
        Self { dir, db_path }
    }

    pub fn base_path(&self) -> &Path {
        self.dir.path()
    }

    pub fn seeders_dir(&self) -> PathBuf {
        self.dir.path().join("database/seeders")
    }

    /// Path of the seeder `pollinate_<class_suffix>.php`.
    #[allow(dead_code)] // Used by other test files
    pub fn seed_path(&self, class_suffix: &str) -> PathBuf {
        self.seeders_dir().join(format!("pollinate_{class_suffix}.php"))
    }

    /// Default configuration pointed at this project.
    pub fn config(&self) -> Config {
        Config {
            db_path: self.db_path.clone(),
            base_path: self.base_path().to_path_buf(),
            ..Default::default()
        }
    }
}

/// Creates a SQLite file at `db_path` and runs `statements` in order.
pub async fn create_test_database(db_path: &Path, statements: &[&str]) {
    let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path.display()))
        .await
        .expect("Failed to create test database");
    for statement in statements {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("Failed to run setup statement");
    }
    pool.close().await;
}

/// `INSERT` statements for `count` users named `user 1..=count`.
#[allow(dead_code)] // Used by other test files
pub fn user_inserts(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("INSERT INTO users (id, name) VALUES ({i}, 'user {i}')"))
        .collect()
}

/// Metadata with fixed values so runs are byte-for-byte reproducible.
pub fn fixed_metadata() -> SeedMetadata {
    SeedMetadata {
        database: "shop".to_string(),
        user: "tester".to_string(),
        host: "ci".to_string(),
        generated_at: "2024-01-01 00:00:00 UTC".to_string(),
        environment: "testing".to_string(),
    }
}
