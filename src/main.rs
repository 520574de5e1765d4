use clap::Parser;
use release_tags::config::{Config, TOKEN_ENV};
use release_tags::github::GitHubClient;
use release_tags::lister::{render_tags, ReleaseLister};
use release_tags::{format_error_with_help, TagsResult};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Print the stable release tags of a GitHub repository.
///
/// Configured through the environment: GITHUB_TOKEN (optional credential),
/// RELEASE_TAGS_REPO (owner/name) and RELEASE_TAGS_API_URL.
#[derive(Parser)]
#[command(name = "release-tags")]
#[command(version)]
struct Cli {}

async fn run() -> TagsResult<()> {
    let config = Config::from_env()?;

    if !config.has_token() {
        tracing::warn!(
            "{} is not set; using the anonymous rate limit (60 requests/hour)",
            TOKEN_ENV
        );
    }

    let client = GitHubClient::new(&config)?;
    let lister = ReleaseLister::new(client, config.repo.clone());

    let tags = lister.collect_tags().await?;
    println!("{}", render_tags(&tags));

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the tag list
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit 1 like every other failure; --help and --version exit 0
    if let Err(e) = Cli::try_parse() {
        let _ = e.print();
        return if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
