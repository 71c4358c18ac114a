// newsdesk - Terminal client for a news search & content backend
//
// The user types a keyword; newsdesk POSTs it to the backend's
// /api/search endpoint and renders the returned articles, keyword tags,
// and generated content (main topic, blog post, thread, card news).
//
// Architecture:
// - api: reqwest client and wire models for the one JSON endpoint
// - view: terminal-agnostic surface model, renderers, keyword filter,
//   and the session state machine (idle -> loading -> error/results)
// - tui (ratatui): draws the surface model, owns the event loop
// - logging: tracing layer capturing logs for the TUI log panel

mod api;
mod cli;
mod config;
mod logging;
mod tui;
mod view;

use anyhow::Result;
use api::SearchClient;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use view::render::badge_labels;

#[tokio::main]
async fn main() -> Result<()> {
    // Subcommands that finish on their own (config --show, ...) exit here
    let action = cli::handle_cli();
    if matches!(&action, cli::CliAction::Done) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();
    let client = SearchClient::new(config.api_url.clone());

    // Headless one-shot search: plain stdout logging, print, exit
    if let cli::CliAction::Search(keyword) = action {
        tracing_subscriber::registry()
            .with(env_filter(&config))
            .with(tracing_subscriber::fmt::layer())
            .init();
        return run_headless(&client, &keyword).await;
    }

    if !config.enable_tui {
        anyhow::bail!("TUI disabled (NEWSDESK_NO_TUI); use `newsdesk search <keyword>` instead");
    }

    // TUI mode: capture logs to a buffer so they don't garble the
    // alternate screen. File logging (JSON, daily rotation) is optional;
    // the guard must stay alive so buffered writes flush on exit.
    let log_buffer = LogBuffer::new();
    let filter = env_filter(&config);

    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    );
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!(api_url = %config.api_url, version = config::VERSION, "starting newsdesk");

    tui::run_tui(client, log_buffer).await?;

    tracing::info!("newsdesk exited");
    Ok(())
}

/// Log filter precedence: RUST_LOG env var > config file level > "info"
fn env_filter(config: &Config) -> EnvFilter {
    let default_filter = format!("newsdesk={}", config.logging.level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// One search without the TUI, results printed to stdout
async fn run_headless(client: &SearchClient, keyword: &str) -> Result<()> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        anyhow::bail!("search keyword must not be empty");
    }

    let response = client
        .search(keyword)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("Topic: {}", response.main_topic);
    println!();
    println!("Articles ({}):", response.articles.len());
    for (index, article) in response.articles.iter().enumerate() {
        println!("{}. {} ({})", index + 1, article.title, article.link);
        println!("   {}", article.summary);
        if !article.keywords.is_empty() {
            println!("   {}", badge_labels(&article.keywords).join(" "));
        }
    }
    println!();
    println!("Blog post:");
    println!("{}", response.blog_post);
    println!();
    println!("Thread:");
    println!("{}", response.thread_content);
    println!();
    println!("Card news:");
    for (index, card) in response.cardnews.iter().enumerate() {
        println!("- {}: {}", card.display_title(index), card.display_content());
    }

    Ok(())
}
