//! CLI for schema migrations
//!
//! Applies or lists the embedded sqlx migrations without starting the server.
//! Outputs one JSON document per invocation.

use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Parser)]
#[command(name = "migrate_cli")]
#[command(about = "Schema migration CLI")]
struct Cli {
    /// Overrides DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List embedded migrations and whether each one is applied
    List,

    /// Apply all pending migrations
    Run,
}

#[derive(Serialize)]
struct Response {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrations: Option<Vec<MigrationInfo>>,
}

#[derive(Serialize)]
struct MigrationInfo {
    version: i64,
    description: String,
    applied: bool,
}

fn output(resp: &Response) -> Result<()> {
    println!("{}", serde_json::to_string(resp)?);
    Ok(())
}

async fn applied_versions(pool: &PgPool) -> Result<HashSet<i64>> {
    let table_exists: bool =
        sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
            .fetch_one(pool)
            .await?;

    if !table_exists {
        return Ok(HashSet::new());
    }

    let versions: Vec<i64> =
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(pool)
            .await?;

    Ok(versions.into_iter().collect())
}

async fn list(pool: &PgPool) -> Result<Response> {
    let applied = applied_versions(pool).await?;

    let migrations = MIGRATOR
        .iter()
        .map(|m| MigrationInfo {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect();

    Ok(Response {
        success: true,
        message: None,
        migrations: Some(migrations),
    })
}

async fn run(pool: &PgPool) -> Result<Response> {
    let before = applied_versions(pool).await?;
    MIGRATOR.run(pool).await.context("Failed to run migrations")?;
    let after = applied_versions(pool).await?;

    Ok(Response {
        success: true,
        message: Some(format!(
            "{} migration(s) applied",
            after.difference(&before).count()
        )),
        migrations: None,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let database_url = match cli.database_url {
        Some(url) => url,
        None => std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
    };

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::List => list(&pool).await,
        Commands::Run => run(&pool).await,
    };

    match result {
        Ok(resp) => output(&resp),
        Err(e) => {
            output(&Response {
                success: false,
                message: Some(format!("{:#}", e)),
                migrations: None,
            })?;
            std::process::exit(1);
        }
    }
}
