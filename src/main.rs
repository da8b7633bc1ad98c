//! tomescout CLI: terminal book-catalog search.

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use tomescout::catalog::{VolumeSource, VolumesClient};
use tomescout::config::AppConfig;
use tomescout::query::{FieldFilter, QueryComposer};

#[derive(Parser)]
#[command(name = "tome", version, about = "Terminal book-catalog search")]
struct Cli {
    /// Catalog endpoint base URL (overrides the config file).
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file).
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search once and print the result page.
    Search {
        /// Free-text search terms.
        text: String,

        /// Metadata field to scope the search to.
        #[arg(long, value_enum, default_value = "title")]
        field: FieldFilter,

        /// Zero-based result page.
        #[arg(long, default_value = "0")]
        page: u64,

        /// Print the normalized page as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    match cli.command {
        None => tomescout::tui::launch(&config),
        Some(Commands::Search {
            text,
            field,
            page,
            json,
        }) => run_search(&config, &text, field, page, json),
    }
}

/// One-shot search: compose, fetch one page inline, print.
fn run_search(
    config: &AppConfig,
    text: &str,
    field: FieldFilter,
    page: u64,
    json: bool,
) -> Result<()> {
    let mut composer = QueryComposer::with_filter(field);
    composer.replace_text(text);
    let Some(query) = composer.submit() else {
        miette::bail!("search text is empty");
    };

    let client = VolumesClient::new(config);
    let offset = page * config.page_size;
    let result_page = client.fetch(&query, offset, config.page_size)?;

    if json {
        let out = serde_json::to_string_pretty(&result_page).into_diagnostic()?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "Showing {} of {} results for \"{}\"",
        result_page.books.len(),
        result_page.total,
        query
    );
    if result_page.books.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for (i, book) in result_page.books.iter().enumerate() {
        println!("  {}. {} — {}", offset + i as u64 + 1, book.title, book.authors);
        if !book.categories.is_empty() {
            println!("     [{}]", book.categories);
        }
        println!("     {}", book.info_link);
    }

    Ok(())
}
