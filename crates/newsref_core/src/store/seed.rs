//! Sample collection written on first run when nothing is persisted.

use crate::model::article::{Article, ArticleDraft, ArticleId};

const SEED_ARTICLES: &[(&str, &str, &str, &str)] = &[
    (
        "Memory Safety Moves Up the Policy Agenda",
        "Government guidance now names memory-safe languages as a priority for new infrastructure code.",
        "2024-02-05",
        "Secure Systems Quarterly",
    ),
    (
        "Inside the New Incremental Bundlers",
        "A look at how recent JavaScript bundlers cache module graphs to keep rebuilds under a second.",
        "2024-02-08",
        "Frontend Weekly",
    ),
    (
        "Rust Finds a Home in Web Backends",
        "Async runtimes and mature HTTP stacks are pulling Rust into latency-sensitive web services.",
        "2024-02-11",
        "Systems Programming Digest",
    ),
    (
        "Designing APIs for Offline-First Clients",
        "Sync protocols, conflict handling and local caches shape how mobile apps talk to servers.",
        "2024-02-14",
        "API Design Journal",
    ),
    (
        "Edge Functions in Production",
        "Teams report on cold starts, regional data rules and cost after a year at the edge.",
        "2024-02-17",
        "Cloud Computing Today",
    ),
    (
        "Container Queries Reach Every Major Browser",
        "Components can now respond to their own size, reducing reliance on page-level breakpoints.",
        "2024-02-20",
        "Layout Lab",
    ),
    (
        "Supply Chain Attacks on Package Registries",
        "Typosquatting and maintainer takeovers remain the most common route into build pipelines.",
        "2024-02-23",
        "Security Weekly",
    ),
    (
        "State Management Without the Boilerplate",
        "Signals and atom-based stores replace reducers in many new front-end codebases.",
        "2024-02-26",
        "UI Architecture Review",
    ),
    (
        "SQLite Everywhere",
        "Embedded databases power more desktop and mobile apps than ever, with replication layered on top.",
        "2024-02-29",
        "Database Insider",
    ),
    (
        "WebAssembly Components Stabilize",
        "The component model promises language-neutral plugins with typed interfaces and sandboxing.",
        "2024-03-03",
        "Runtime Report",
    ),
];

/// Builds the first-run collection with fresh identifiers.
pub fn seed_articles() -> Vec<Article> {
    SEED_ARTICLES
        .iter()
        .map(|(title, summary, date, publisher)| {
            ArticleDraft::new(*title, *summary, *date, *publisher).into_article(ArticleId::generate())
        })
        .collect()
}
