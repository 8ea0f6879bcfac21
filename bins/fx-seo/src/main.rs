//! Flowxtra SEO CLI
//!
//! Operator tool for the edge's SEO surface: preview sitemaps and feeds
//! exactly as the server would emit them, check backend reachability, and
//! inspect the locale tables.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod commands;

use commands::{feed, health, locales, policies, sitemap};

/// SEO operations CLI for the Flowxtra marketing site
#[derive(Parser)]
#[command(name = "fx-seo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a sitemap document
    Sitemap {
        /// Locale index to print (prints the root index if omitted)
        locale: Option<String>,

        /// Print the flat all-URLs sitemap (slow: sweeps every locale)
        #[arg(long)]
        all: bool,
    },

    /// Print a locale's RSS feed
    Feed {
        /// Locale to render
        #[arg(default_value = "en")]
        locale: String,

        /// Maximum posts to include
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },

    /// Check backend reachability
    Health {
        /// Include the backend's own health payload
        #[arg(short, long)]
        detailed: bool,
    },

    /// List supported locales and their fallback chains
    Locales,

    /// List the published legal policies for a locale
    Policies {
        /// Locale to query
        #[arg(default_value = "en")]
        locale: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("fx_seo=debug,flowxtra_api_client=debug")
            .init();
    }

    let result = match cli.command {
        Commands::Sitemap { locale, all } => sitemap::run(locale.as_deref(), all).await,
        Commands::Feed { locale, limit } => feed::run(&locale, limit).await,
        Commands::Health { detailed } => health::run(detailed).await,
        Commands::Locales => locales::run(),
        Commands::Policies { locale } => policies::run(&locale).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
