//! Manhattan critical violations web service entry point.

use std::net::IpAddr;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use manhattan_violations::api::{self, AppState};
use manhattan_violations::config::Config;
use manhattan_violations::inspection::{fetch_critical_violations, Column, InspectionClient};
use manhattan_violations::metrics;
use manhattan_violations::utils::shutdown_signal;

/// Critical restaurant violations in Manhattan, served as a web page.
#[derive(Parser, Debug)]
#[command(name = "manhattan-violations")]
#[command(about = "Serve critical NYC restaurant inspection violations in Manhattan")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Listener address (overrides BIND_HOST).
    #[arg(long, global = true)]
    host: Option<IpAddr>,

    /// Listener port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web service (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,

    /// Fetch and shape the dataset once, printing the records.
    Fetch {
        /// Print one JSON object per line instead of tab-separated values.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("manhattan_violations=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    metrics::init_metrics();

    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(host) = args.host {
        config.bind_host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Fetch { json }) => cmd_fetch(&config, json).await,
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("MANHATTAN VIOLATIONS - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Upstream URL: {}", config.upstream_url);
    println!("  Page Limit: {}", config.page_limit);
    match config.http_timeout_ms {
        Some(ms) => println!("  HTTP Timeout: {}ms", ms),
        None => println!("  HTTP Timeout: none"),
    }
    println!("  Listen Address: {}", config.listen_addr());
    println!("  Theme: {}", config.page_theme);
    println!(
        "  Metrics: {}",
        if config.metrics_enabled {
            format!("Enabled on {}", config.metrics_addr())
        } else {
            "Disabled".to_string()
        }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Fetch and shape once, printing records to stdout.
async fn cmd_fetch(config: &Config, json: bool) -> anyhow::Result<()> {
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let client = InspectionClient::new(config)?;
    let records = fetch_critical_violations(&client).await?;

    if json {
        for record in &records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        let header: Vec<String> = Column::all().map(|c| c.to_string()).collect();
        println!("{}", header.join("\t"));
        for record in &records {
            let row: Vec<&str> = Column::all().map(|c| record.get(c)).collect();
            println!("{}", row.join("\t"));
        }
    }

    info!(count = records.len(), "Fetched critical violations");
    Ok(())
}

/// Run the web service until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Upstream: {} (limit {})", config.upstream_url, config.page_limit);
    info!("Theme: {}", config.page_theme);

    if config.metrics_enabled {
        metrics::install_exporter(config.metrics_addr())?;
        info!("Metrics exporter listening on {}", config.metrics_addr());
    }

    let state = AppState::new(&config)?;
    let server = api::bind(config.listen_addr(), state).await?;
    server.run(shutdown_signal()).await?;

    Ok(())
}
