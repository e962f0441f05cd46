use anyhow::Context;
use clap::Parser;
use colored::*;
use github_repo_browser::cli::Cli;
use github_repo_browser::config::AppConfig;
use github_repo_browser::web::{start_server, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli).context("Invalid configuration")?;

    println!("{}", "GitHub Repo Browser".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());
    println!("OAuth host:    {}", config.oauth_base_url);
    println!("API host:      {}", config.api_base_url);
    println!("Scopes:        {}", config.credentials.scopes.join(", "));
    if config.paginate {
        println!("Repositories:  all pages (up to {})", config.max_pages);
    } else {
        println!("{}", "Repositories:  first page only".yellow());
    }
    println!("\nPress Ctrl+C to stop the server\n");

    let state = AppState::new(config).context("Failed to build GitHub client")?;
    start_server(state, &cli.bind)
        .await
        .with_context(|| format!("Web server on {} failed", cli.bind))?;

    println!("✅ Server stopped");
    Ok(())
}
