// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! - `cargo xtask ci` runs lints, the build and every test
//! - `cargo xtask verify-migrations` applies the embedded `SQLite`
//!   migrations to an in-memory database and checks the resulting schema
//!   against the tables the persistence layer expects
//!
//! Standard `cargo test` needs no infrastructure; all orchestration lives
//! here.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output, vec};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use duct::cmd;
use std::collections::{BTreeMap, BTreeSet};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, migrations)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Lint formatting, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check that docs build without errors using docs.rs-equivalent flags
    #[command(visible_alias = "d")]
    LintDocs,

    /// Lint formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix clippy warnings in the project
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run tests for libs and docs
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests for the workspace's default packages
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests for the workspace's default packages
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Apply the migrations to an in-memory database and check the schema
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Run CI checks (lint, build, test, migrations)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    verify_migrations()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Lint formatting, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Fix clippy warnings in the project
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Run tests for libs and docs
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?; // run last because it's slow
    Ok(())
}

/// Run doc tests for the workspace's default packages
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib tests for the workspace's default packages
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Verify the migrations produce the schema the persistence layer expects
///
/// 1. Opens an in-memory `SQLite` database with foreign keys enabled
/// 2. Applies every embedded migration
/// 3. Introspects tables, columns, foreign keys and indexes
/// 4. Compares them with [`expected_schema`] and reports every difference
///
/// ## Usage
///
/// ```bash
/// cargo xtask verify-migrations
/// ```
fn verify_migrations() -> Result<()> {
    tracing::info!("Applying SQLite migrations");

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;

    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .wrap_err("Failed to enable foreign keys on SQLite")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to apply SQLite migrations: {}", e))?;

    tracing::info!("SQLite migrations applied successfully");

    tracing::info!("Introspecting SQLite schema");
    let actual = introspect_sqlite_schema(&mut conn)?;

    tracing::info!("Comparing schemas");
    compare_schemas(&expected_schema(), &actual)?;

    tracing::info!("✓ Schema verification passed");
    Ok(())
}

/// Normalized schema representation
#[derive(Debug, Clone, PartialEq, Eq)]
struct Schema {
    tables: BTreeMap<String, Table>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Table {
    columns: BTreeMap<String, Column>,
    primary_keys: BTreeSet<String>,
    foreign_keys: BTreeSet<ForeignKey>,
    indexes: BTreeSet<Index>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Column {
    name: String,
    normalized_type: String,
    nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ForeignKey {
    from_column: String,
    to_table: String,
    to_column: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Index {
    name: String,
    columns: Vec<String>,
}

/// `(name, normalized type, nullable)` for each column of a table.
type ColumnSpec = (&'static str, &'static str, bool);

struct TableSpec {
    name: &'static str,
    primary_key: &'static str,
    columns: &'static [ColumnSpec],
    /// `(from column, to table, to column)`
    foreign_keys: &'static [(&'static str, &'static str, &'static str)],
    /// `(index name, column)`
    indexes: &'static [(&'static str, &'static str)],
}

const EXPECTED_TABLES: [TableSpec; 3] = [
    TableSpec {
        name: "artists",
        primary_key: "artist_id",
        columns: &[
            ("artist_id", "integer", true),
            ("name", "text", false),
            ("city", "text", false),
            ("state", "text", false),
            ("phone", "text", true),
            ("genres", "text", false),
            ("image_link", "text", true),
            ("facebook_link", "text", true),
            ("website", "text", true),
            ("seeking_venue", "integer", false),
            ("seeking_description", "text", false),
        ],
        foreign_keys: &[],
        indexes: &[],
    },
    TableSpec {
        name: "shows",
        primary_key: "show_id",
        columns: &[
            ("show_id", "integer", true),
            ("artist_id", "integer", false),
            ("venue_id", "integer", false),
            ("start_time", "text", false),
        ],
        foreign_keys: &[
            ("artist_id", "artists", "artist_id"),
            ("venue_id", "venues", "venue_id"),
        ],
        indexes: &[
            ("idx_shows_artist_id", "artist_id"),
            ("idx_shows_start_time", "start_time"),
            ("idx_shows_venue_id", "venue_id"),
        ],
    },
    TableSpec {
        name: "venues",
        primary_key: "venue_id",
        columns: &[
            ("venue_id", "integer", true),
            ("name", "text", false),
            ("city", "text", false),
            ("state", "text", false),
            ("address", "text", false),
            ("phone", "text", true),
            ("genres", "text", false),
            ("image_link", "text", true),
            ("facebook_link", "text", true),
            ("website", "text", true),
            ("seeking_talent", "integer", false),
            ("description", "text", false),
        ],
        foreign_keys: &[],
        indexes: &[],
    },
];

/// The schema the persistence layer's Diesel table definitions rely on.
///
/// `SQLite` reports `INTEGER PRIMARY KEY` columns as nullable.
fn expected_schema() -> Schema {
    let tables = EXPECTED_TABLES
        .iter()
        .map(|table_spec| {
            let table = Table {
                columns: table_spec
                    .columns
                    .iter()
                    .map(|(name, normalized_type, nullable)| {
                        (
                            (*name).to_string(),
                            Column {
                                name: (*name).to_string(),
                                normalized_type: (*normalized_type).to_string(),
                                nullable: *nullable,
                            },
                        )
                    })
                    .collect(),
                primary_keys: BTreeSet::from([table_spec.primary_key.to_string()]),
                foreign_keys: table_spec
                    .foreign_keys
                    .iter()
                    .map(|(from, table, to)| ForeignKey {
                        from_column: (*from).to_string(),
                        to_table: (*table).to_string(),
                        to_column: (*to).to_string(),
                    })
                    .collect(),
                indexes: table_spec
                    .indexes
                    .iter()
                    .map(|(name, column)| Index {
                        name: (*name).to_string(),
                        columns: vec![(*column).to_string()],
                    })
                    .collect(),
            };
            (table_spec.name.to_string(), table)
        })
        .collect();

    Schema { tables }
}

/// Introspect `SQLite` schema
fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        table: String,
        #[diesel(sql_type = Text)]
        from: String,
        #[diesel(sql_type = Text)]
        to: String,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        origin: String,
    }

    #[derive(QueryableByName)]
    struct IndexColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
    }

    let mut schema = Schema {
        tables: BTreeMap::new(),
    };

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name"
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    for table in tables {
        let mut table_info = Table::default();

        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get columns for table {}", table.name))?;

        for col in columns {
            let normalized_type = normalize_sqlite_type(&col.r#type);
            table_info.columns.insert(
                col.name.clone(),
                Column {
                    name: col.name.clone(),
                    normalized_type,
                    nullable: col.notnull == 0,
                },
            );

            if col.pk > 0 {
                table_info.primary_keys.insert(col.name);
            }
        }

        let fks: Vec<ForeignKeyInfo> =
            diesel::sql_query(format!("PRAGMA foreign_key_list({})", table.name))
                .load(conn)
                .wrap_err(format!(
                    "Failed to get foreign keys for table {}",
                    table.name
                ))?;

        for fk in fks {
            table_info.foreign_keys.insert(ForeignKey {
                from_column: fk.from,
                to_table: fk.table,
                to_column: fk.to,
            });
        }

        let indexes: Vec<IndexInfo> =
            diesel::sql_query(format!("PRAGMA index_list({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get indexes for table {}", table.name))?;

        // Only explicitly created indexes; the schema declares no UNIQUE constraints
        for idx in indexes.into_iter().filter(|idx| idx.origin == "c") {
            let index_columns: Vec<IndexColumnInfo> =
                diesel::sql_query(format!("PRAGMA index_info({})", idx.name))
                    .load(conn)
                    .wrap_err(format!("Failed to get index columns for {}", idx.name))?;

            table_info.indexes.insert(Index {
                name: idx.name,
                columns: index_columns.into_iter().map(|c| c.name).collect(),
            });
        }

        schema.tables.insert(table.name, table_info);
    }

    Ok(schema)
}

/// Normalize `SQLite` type to common representation
fn normalize_sqlite_type(sqlite_type: &str) -> String {
    let normalized = sqlite_type.to_uppercase();
    if normalized.contains("INT") {
        "integer".to_string()
    } else if normalized.contains("REAL")
        || normalized.contains("FLOA")
        || normalized.contains("DOUB")
    {
        "real".to_string()
    } else if normalized.contains("BLOB") {
        "blob".to_string()
    } else {
        "text".to_string()
    }
}

/// Compare schemas and fail listing every mismatch
fn compare_schemas(expected: &Schema, actual: &Schema) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    let expected_tables: BTreeSet<_> = expected.tables.keys().collect();
    let actual_tables: BTreeSet<_> = actual.tables.keys().collect();

    for missing in expected_tables.difference(&actual_tables) {
        errors.push(format!("Table '{missing}' is missing"));
    }
    for extra in actual_tables.difference(&expected_tables) {
        errors.push(format!("Table '{extra}' is not expected"));
    }

    for (name, expected_table) in &expected.tables {
        let Some(actual_table) = actual.tables.get(name) else {
            continue;
        };

        for (column_name, expected_column) in &expected_table.columns {
            match actual_table.columns.get(column_name) {
                None => errors.push(format!("Column '{name}.{column_name}' is missing")),
                Some(actual_column) if actual_column != expected_column => {
                    errors.push(format!(
                        "Column '{name}.{column_name}' differs: expected {expected_column:?}, found {actual_column:?}"
                    ));
                }
                Some(_) => {}
            }
        }
        for column_name in actual_table.columns.keys() {
            if !expected_table.columns.contains_key(column_name) {
                errors.push(format!("Column '{name}.{column_name}' is not expected"));
            }
        }

        if expected_table.primary_keys != actual_table.primary_keys {
            errors.push(format!(
                "Primary key of '{name}' differs: expected {:?}, found {:?}",
                expected_table.primary_keys, actual_table.primary_keys
            ));
        }
        if expected_table.foreign_keys != actual_table.foreign_keys {
            errors.push(format!(
                "Foreign keys of '{name}' differ: expected {:?}, found {:?}",
                expected_table.foreign_keys, actual_table.foreign_keys
            ));
        }
        if expected_table.indexes != actual_table.indexes {
            errors.push(format!(
                "Indexes of '{name}' differ: expected {:?}, found {:?}",
                expected_table.indexes, actual_table.indexes
            ));
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    for error in &errors {
        tracing::error!("{error}");
    }
    Err(color_eyre::eyre::eyre!(
        "Schema verification failed with {} difference(s)",
        errors.len()
    ))
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
