//! Delete SMS logs older than a retention window
//!
//! ```text
//! iran-sms-prune-logs --days 30
//! ```

use anyhow::Context;
use clap::Parser;
use tracing::info;

use iran_sms_core::repositories::SmsLogRepository;
use iran_sms_infra::database::{DatabasePool, MySqlSmsLogRepository};
use iran_sms_infra::init_tracing;
use iran_sms_shared::config::{DatabaseConfig, LoggingConfig};

#[derive(Parser)]
#[command(name = "iran-sms-prune-logs")]
#[command(about = "Prune SMS logs created before the specified number of days")]
#[command(version)]
struct Cli {
    /// The number of days to retain SMS logs
    #[arg(long, default_value_t = 30)]
    days: u32,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&LoggingConfig::from_env())?;

    let mut database = DatabaseConfig::from_env();
    if let Some(url) = cli.database_url {
        database.url = url;
    }

    let pool = DatabasePool::new(database)
        .await
        .context("failed to connect to the SMS log database")?;
    let repository = MySqlSmsLogRepository::new(pool.get_pool().clone());

    println!("Pruning logs created before {} days ago ...", cli.days);
    let deleted = repository
        .prune_older_than(i64::from(cli.days))
        .await
        .context("failed to prune SMS logs")?;
    info!(deleted, days = cli.days, "SMS logs pruned");

    println!("Deleted {} log(s).", deleted);
    println!("Logs created before [{} days] ago pruned successfully.", cli.days);

    pool.close().await;
    Ok(())
}
