//! Seeder file boilerplate.
//!
//! Everything written around the row data: the stub head and foot, the doc
//! block, the foreign-key toggles and the insert statements. All functions are
//! pure so that a run with fixed metadata is reproducible.

#[cfg(unix)]
use std::ffi::CStr;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::config::{DEFAULT_SEEDER_STUB, INDENT_WIDTH, STUB_SPLIT_MARKER};
use crate::error_handling::PreflightError;

use super::format::quote;

/// Indentation for `levels` tab stops of four spaces.
pub fn indent(levels: usize) -> String {
    " ".repeat(levels * INDENT_WIDTH)
}

/// A seeder template split at its `//` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeederStub {
    head: String,
    foot: String,
}

impl SeederStub {
    /// Splits stub text at the first marker. `None` if there is no marker.
    pub fn parse(text: &str) -> Option<Self> {
        let (head, foot) = text.split_once(STUB_SPLIT_MARKER)?;
        Some(Self {
            head: head.to_string(),
            foot: foot.to_string(),
        })
    }

    /// The Laravel seeder stub compiled into the binary.
    pub fn builtin() -> Self {
        Self::parse(DEFAULT_SEEDER_STUB).unwrap_or_else(|| Self {
            head: DEFAULT_SEEDER_STUB.to_string(),
            foot: String::new(),
        })
    }

    /// Reads and splits a stub file.
    pub fn load(path: &Path) -> Result<Self, PreflightError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PreflightError::EnvironmentUnsupported(format!(
                "cannot read seeder stub {}: {e}",
                path.display()
            ))
        })?;
        Self::parse(&text).ok_or_else(|| {
            PreflightError::EnvironmentUnsupported(format!(
                "seeder stub {} has no '{}' placeholder for the seed records",
                path.display(),
                STUB_SPLIT_MARKER
            ))
        })
    }
}

/// Provenance written into every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMetadata {
    pub database: String,
    pub user: String,
    pub host: String,
    pub generated_at: String,
    pub environment: String,
}

impl SeedMetadata {
    /// Captures user, host and time from the running process.
    ///
    /// `SOURCE_DATE_EPOCH` pins the timestamp for reproducible output.
    pub fn collect(database: impl Into<String>, environment: impl Into<String>) -> Self {
        let now = std::env::var("SOURCE_DATE_EPOCH")
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or_else(Utc::now);

        Self {
            database: database.into(),
            user: current_user(),
            host: current_host(),
            generated_at: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            environment: environment.into(),
        }
    }
}

fn current_user() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
        .or_else(system_user)
        .unwrap_or_else(|| "unknown".to_string())
}

fn current_host() -> String {
    ["HOSTNAME", "COMPUTERNAME"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
        .or_else(system_host)
        .unwrap_or_default()
}

/// Login name of the real user id, from the password database.
#[cfg(unix)]
fn system_user() -> Option<String> {
    let mut passwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut buf: Vec<libc::c_char> = vec![0; 4096];
    let mut found: *mut libc::passwd = std::ptr::null_mut();

    let rc = unsafe {
        libc::getpwuid_r(
            libc::getuid(),
            &mut passwd,
            buf.as_mut_ptr(),
            buf.len(),
            &mut found,
        )
    };
    if rc != 0 || found.is_null() || passwd.pw_name.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(passwd.pw_name) };
    Some(name.to_string_lossy().into_owned()).filter(|n| !n.is_empty())
}

#[cfg(not(unix))]
fn system_user() -> Option<String> {
    None
}

#[cfg(unix)]
fn system_host() -> Option<String> {
    let mut buf: [libc::c_char; 256] = [0; 256];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr(), buf.len() - 1) };
    if rc != 0 {
        return None;
    }
    // buf[255] stays 0, so the name is terminated even when truncated
    let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
    Some(name.to_string_lossy().trim().to_string()).filter(|n| !n.is_empty())
}

#[cfg(not(unix))]
fn system_host() -> Option<String> {
    None
}

/// Doc block placed at the top of `run()`.
pub fn doc_block(table: &str, metadata: &SeedMetadata) -> String {
    let pad = indent(2);
    [
        "/**".to_string(),
        " * Created by pollinate.".to_string(),
        " * ".to_string(),
        format!(" * Table: {}.{}", metadata.database, table),
        format!(" * User:  {}", metadata.user),
        format!(" * Host:  {}", metadata.host),
        format!(" * Date:  {}", metadata.generated_at),
        format!(" * Env:   {}", metadata.environment),
        " */".to_string(),
    ]
    .iter()
    .map(|line| format!("{pad}{line}\n"))
    .collect()
}

/// Everything above the first insert block.
pub fn seeder_head(
    stub: &SeederStub,
    namespace: &str,
    class_name: &str,
    table: &str,
    metadata: &SeedMetadata,
) -> String {
    let head = stub
        .head
        .trim()
        .replace("{{ class }}", class_name)
        .replace("{{ namespace }}", namespace);

    let mut text = format!("{head}\n\n");
    text.push_str(&doc_block(table, metadata));
    text.push_str(&format!(
        "\n{}\\Schema::disableForeignKeyConstraints();\n",
        indent(2)
    ));
    text.push_str(&format!(
        "\n{}\\DB::table({})->delete();\n",
        indent(2),
        quote(table)
    ));
    text
}

/// Everything after the last insert block.
pub fn seeder_foot(stub: &SeederStub) -> String {
    format!(
        "\n{}\\Schema::enableForeignKeyConstraints();\n{}",
        indent(2),
        stub.foot
    )
}

/// Opening of one page's insert statement.
pub fn insert_block_head(table: &str) -> String {
    format!("\n{}\\DB::table({})->insert([\n", indent(2), quote(table))
}

/// Closing of one page's insert statement.
pub fn insert_block_foot() -> String {
    format!("{}]);\n", indent(2))
}
