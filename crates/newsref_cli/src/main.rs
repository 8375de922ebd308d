//! Command-line front end for the article store.
//!
//! # Responsibility
//! - Collect field values, ids, query text and page counts from arguments.
//! - Print results, or the human-readable failure message, and exit.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use newsref_core::{
    core_version, default_log_level, init_logging, Article, ArticleDraft, ArticleId,
    ArticleListService, LocalArticleStore, SqliteBackend, StoreConfig,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newsref", version, about = "Manage a personal list of article references")]
struct Cli {
    /// SQLite database holding the collection; created when missing.
    #[arg(long, global = true, default_value = "newsref.sqlite3")]
    db: PathBuf,
    /// TOML file with store settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Overrides the configured simulated latency.
    #[arg(long, global = true)]
    latency_ms: Option<u64>,
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logs go to stderr otherwise.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List articles, optionally filtered by a free-text query.
    List {
        #[arg(long, short)]
        query: Option<String>,
        /// Pages of ten to reveal.
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Show one article.
    Show { id: String },
    /// Add an article.
    Add(DraftArgs),
    /// Replace fields of an existing article; omitted fields are kept.
    Edit {
        id: String,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete an article.
    Delete { id: String },
}

#[derive(Args, Debug)]
struct DraftArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    summary: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    #[arg(long)]
    publisher: String,
}

#[derive(Args, Debug)]
struct EditArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    summary: Option<String>,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    publisher: Option<String>,
}

impl From<DraftArgs> for ArticleDraft {
    fn from(args: DraftArgs) -> Self {
        ArticleDraft::new(args.title, args.summary, args.date, args.publisher)
    }
}

impl EditArgs {
    fn apply(self, current: &Article) -> ArticleDraft {
        let mut draft = current.draft();
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(summary) = self.summary {
            draft.summary = summary;
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(publisher) = self.publisher {
            draft.publisher = publisher;
        }
        draft
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match (&cli.log_level, &cli.log_dir) {
        (Some(level), _) => level.as_str(),
        (None, Some(_)) => default_log_level(),
        (None, None) => "warn",
    };
    init_logging(level, cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let mut config = match &cli.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    if let Some(latency_ms) = cli.latency_ms {
        config.latency_ms = latency_ms;
    }

    let backend = SqliteBackend::open(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let mut service = ArticleListService::new(LocalArticleStore::new(backend, &config));
    debug!(
        "event=cli_start module=cli status=ok core_version={} latency_ms={}",
        core_version(),
        config.latency_ms
    );

    match cli.command {
        Command::List { query, pages } => {
            service.reload()?;
            if let Some(query) = query {
                service.search(query);
            }
            for _ in 1..pages {
                if !service.load_more() {
                    break;
                }
            }

            let view = service.view();
            for article in &view.items {
                println!(
                    "{}  {}  {} ({})",
                    article.id, article.date, article.title, article.publisher
                );
            }
            let more = if view.has_more { ", more available" } else { "" };
            println!("showing {} of {}{more}", view.items.len(), view.total_matches);
        }
        Command::Show { id } => {
            let article = service.load_for_edit(&ArticleId::from(id))?;
            print_article(&article);
        }
        Command::Add(fields) => {
            let created = service.create(fields.into())?;
            println!("created id={}", created.id);
        }
        Command::Edit { id, fields } => {
            let id = ArticleId::from(id);
            let current = service.load_for_edit(&id)?;
            let updated = service.update(&id, fields.apply(&current))?;
            println!("updated id={}", updated.id);
        }
        Command::Delete { id } => {
            let id = ArticleId::from(id);
            service.delete(&id)?;
            println!("deleted id={id}");
        }
    }

    Ok(())
}

fn print_article(article: &Article) {
    println!("id:        {}", article.id);
    println!("title:     {}", article.title);
    println!("summary:   {}", article.summary);
    println!("date:      {}", article.date);
    println!("publisher: {}", article.publisher);
}
