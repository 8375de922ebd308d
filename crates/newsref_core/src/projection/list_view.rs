//! Query filtering and incremental pagination over loaded articles.
//!
//! # Invariants
//! - Matching is case-insensitive substring search over title, summary and
//!   publisher; an empty query matches everything.
//! - Visible items are the first `page * PAGE_SIZE` matches.
//! - `has_more` is true exactly when visible count < total matches.

use crate::model::article::Article;

/// Number of matches revealed per page.
pub const PAGE_SIZE: usize = 10;

/// Visible slice of the collection for the current query and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'a> {
    /// Matches in collection order, truncated to the revealed pages.
    pub items: Vec<&'a Article>,
    /// Matches before truncation.
    pub total_matches: usize,
    pub has_more: bool,
}

/// Query text and revealed page count owned by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    text: String,
    page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: 1,
        }
    }
}

impl ListQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page: 1,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of pages revealed so far, starting at 1.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Replaces the query and hides everything past the first page.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.page = 1;
    }

    /// Reveals one more page when matches remain hidden.
    ///
    /// Returns whether the page advanced.
    pub fn load_more(&mut self, articles: &[Article]) -> bool {
        if !self.project(articles).has_more {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn project<'a>(&self, articles: &'a [Article]) -> Projection<'a> {
        project(articles, &self.text, self.page)
    }
}

/// Returns whether `article` matches `query`, ignoring case.
///
/// An empty query matches everything.
pub fn matches_query(article: &Article, query: &str) -> bool {
    matches_lowered(article, &query.to_lowercase())
}

fn matches_lowered(article: &Article, lowered_query: &str) -> bool {
    lowered_query.is_empty()
        || [&article.title, &article.summary, &article.publisher]
            .iter()
            .any(|field| field.to_lowercase().contains(lowered_query))
}

/// Filters `articles` by `query` and reveals the first `page` pages.
pub fn project<'a>(articles: &'a [Article], query: &str, page: usize) -> Projection<'a> {
    let lowered = query.to_lowercase();
    let matches: Vec<&Article> = articles
        .iter()
        .filter(|article| matches_lowered(article, &lowered))
        .collect();
    let total_matches = matches.len();
    let visible = page.saturating_mul(PAGE_SIZE).min(total_matches);
    let mut items = matches;
    items.truncate(visible);

    Projection {
        has_more: visible < total_matches,
        items,
        total_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::{project, ListQuery, PAGE_SIZE};
    use crate::model::article::{Article, ArticleDraft, ArticleId};

    fn articles(count: usize) -> Vec<Article> {
        (0..count)
            .map(|idx| {
                ArticleDraft::new(format!("title {idx}"), "summary", "2024-01-01", "pub")
                    .into_article(ArticleId::from(format!("id-{idx}")))
            })
            .collect()
    }

    #[test]
    fn empty_collection_has_nothing_more() {
        let projection = project(&[], "", 1);
        assert!(projection.items.is_empty());
        assert!(!projection.has_more);
    }

    #[test]
    fn page_zero_reveals_nothing() {
        let all = articles(3);
        let projection = project(&all, "", 0);
        assert!(projection.items.is_empty());
        assert!(projection.has_more);
    }

    #[test]
    fn load_more_stops_when_everything_is_visible() {
        let all = articles(PAGE_SIZE + 1);
        let mut query = ListQuery::default();
        assert!(query.load_more(&all));
        assert!(!query.load_more(&all));
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn new_query_resets_page() {
        let all = articles(25);
        let mut query = ListQuery::default();
        query.load_more(&all);
        query.set_text("title 1");
        assert_eq!(query.page(), 1);
        assert_eq!(query.text(), "title 1");
    }
}
