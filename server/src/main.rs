//! Joblens application shell.
//!
//! A thin binary that wires configuration, logging and the runtime
//! together: `serve` exposes the guest search path as an HTTP API,
//! `search` drives the authenticated member flow in a live browser.
//! Core logic lives in the `crates/` directory.

mod api;

use anyhow::Context;
use clap::{Parser, Subcommand};
use joblens_browser::{CookieJar, LaunchConfig, Session};
use joblens_core::{AppConfig, DatePostedFilter};
use joblens_member::{login_or_resume, search_jobs, Credentials};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "joblens", version, about = "Job-board listing retrieval engine")]
struct Cli {
    /// Config file path (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP listing API
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<String>,
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Drive an authenticated member search in a live browser
    Search {
        /// Free-text search keywords
        keywords: String,
        /// Date-posted filter: any_time, past_month, past_week or past_day
        #[arg(long)]
        date_posted: Option<String>,
        /// Override the configured headless mode
        #[arg(long)]
        headless: Option<bool>,
    },
}

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,joblens=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => AppConfig::load_with_env().context("failed to load config"),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    tracing::info!("Starting joblens v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind, port } => {
            if let Some(bind) = bind {
                config.server.bind_address = bind;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            api::run(&config).await
        }
        Commands::Search {
            keywords,
            date_posted,
            headless,
        } => {
            if let Some(headless) = headless {
                config.browser.headless = headless;
            }
            run_member_search(&config, &keywords, date_posted.as_deref()).await
        }
    }
}

/// Launches a browser session, authenticates and runs one member search.
async fn run_member_search(
    config: &AppConfig,
    keywords: &str,
    date_posted: Option<&str>,
) -> anyhow::Result<()> {
    let filter = date_posted
        .map(DatePostedFilter::from_str)
        .transpose()
        .context("invalid --date-posted value")?;
    let credentials = Credentials::from_env()?;
    let jar = cookie_jar(config)?;

    let launch = LaunchConfig {
        headless: config.browser.headless,
        window_width: config.browser.window_width,
        window_height: config.browser.window_height,
        navigation_timeout: Duration::from_secs(config.browser.navigation_timeout_secs),
    };
    let mut session = Session::launch(launch).await?;

    let auth = login_or_resume(&mut session, &jar, &credentials).await?;
    tracing::info!("Session established ({:?})", auth);

    let outcome = search_jobs(&mut session, keywords, filter).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

/// Cookie snapshot location: configured path, else the platform data dir.
fn cookie_jar(config: &AppConfig) -> anyhow::Result<CookieJar> {
    let path = match &config.session.cookie_path {
        Some(path) => path.clone(),
        None => AppConfig::data_dir()
            .context("no platform data directory")?
            .join("cookies.json"),
    };
    Ok(CookieJar::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_args_parse() {
        let cli = Cli::parse_from([
            "joblens",
            "search",
            "rust engineer",
            "--date-posted",
            "past_week",
        ]);
        match cli.command {
            Commands::Search {
                keywords,
                date_posted,
                ..
            } => {
                assert_eq!(keywords, "rust engineer");
                assert_eq!(date_posted.as_deref(), Some("past_week"));
            }
            Commands::Serve { .. } => panic!("expected the search subcommand"),
        }
    }

    #[test]
    fn test_cookie_jar_prefers_configured_path() {
        let mut config = AppConfig::default();
        config.session.cookie_path = Some(PathBuf::from("/tmp/custom-cookies.json"));

        let jar = cookie_jar(&config).expect("jar");
        assert_eq!(jar.path(), Path::new("/tmp/custom-cookies.json"));
    }
}
