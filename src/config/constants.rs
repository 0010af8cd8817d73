//! Configuration constants.
//!
//! Defaults for the CLI, the denylist applied during table auto-discovery,
//! and the layout of generated seeder files.

/// Prefix for generated seeder file and class names
pub const DEFAULT_PREFIX: &str = "pollinate";

/// Rows selected and written per insert block
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Environment name written into the doc block when none is configured
pub const DEFAULT_ENVIRONMENT: &str = "local";

/// Default SQLite database path, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "database/database.sqlite";

/// Tables never seeded unless requested explicitly.
///
/// These hold queue jobs, OAuth credentials and password reset tokens, none of
/// which belong in a seed snapshot.
pub const IGNORED_TABLES: &[&str] = &[
    "jobs",
    "failed_jobs",
    "oauth_access_tokens",
    "oauth_auth_codes",
    "oauth_clients",
    "oauth_personal_access_clients",
    "oauth_refresh_tokens",
    "password_resets",
    "personal_access_tokens",
];

/// Candidate seeder directories under `<base>/database`, in lookup order,
/// paired with the PHP namespace of the seeders they hold.
pub const SEED_DIRECTORIES: &[(&str, &str)] = &[
    ("seeders", "Database\\Seeders"),
    ("seeds", "Database\\Seeds"),
];

/// File extension of generated seeders
pub const SEED_FILE_EXTENSION: &str = "php";

/// Published stub location relative to the project base path
pub const PUBLISHED_STUB_PATH: &str = "stubs/seeder.stub";

/// Marker splitting a stub into the part above the seed records and the part below
pub const STUB_SPLIT_MARKER: &str = "//";

/// Spaces per indentation level in generated files
pub const INDENT_WIDTH: usize = 4;

/// Seeder stub used when the project does not publish its own.
pub const DEFAULT_SEEDER_STUB: &str = r#"<?php

namespace {{ namespace }};

use Illuminate\Database\Console\Seeds\WithoutModelEvents;
use Illuminate\Database\Seeder;

class {{ class }} extends Seeder
{
    /**
     * Run the database seeds.
     */
    public function run(): void
    {
        //
    }
}
"#;
