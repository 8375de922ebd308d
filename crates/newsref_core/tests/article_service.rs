use newsref_core::{
    ApiResponse, Article, ArticleApi, ArticleDraft, ArticleField, ArticleId, ArticleListService,
    ArticleValidationError, InMemoryBackend, LocalArticleStore, NoLatency, ServiceError,
    StatusCode, StoreConfig, StoreError, StoreResult, PAGE_SIZE,
};

/// Wraps a store and counts calls so tests can see what reached it.
struct CountingApi<A> {
    inner: A,
    calls: Vec<&'static str>,
    fail_list: bool,
    fail_list_after_write: bool,
}

impl<A: ArticleApi> CountingApi<A> {
    fn new(inner: A) -> Self {
        Self {
            inner,
            calls: Vec::new(),
            fail_list: false,
            fail_list_after_write: false,
        }
    }
}

impl<A: ArticleApi> ArticleApi for CountingApi<A> {
    fn list(&mut self) -> StoreResult<ApiResponse<Vec<Article>>> {
        self.calls.push("list");
        if self.fail_list {
            return Err(StoreError::CorruptedState {
                key: "news_articles".to_string(),
                message: "forced".to_string(),
            });
        }
        self.inner.list()
    }

    fn create(&mut self, draft: ArticleDraft) -> StoreResult<ApiResponse<Article>> {
        self.calls.push("create");
        let response = self.inner.create(draft)?;
        self.fail_list |= self.fail_list_after_write;
        Ok(response)
    }

    fn update(
        &mut self,
        id: &ArticleId,
        draft: ArticleDraft,
    ) -> StoreResult<ApiResponse<Article>> {
        self.calls.push("update");
        let response = self.inner.update(id, draft)?;
        self.fail_list |= self.fail_list_after_write;
        Ok(response)
    }

    fn delete(&mut self, id: &ArticleId) -> StoreResult<ApiResponse<()>> {
        self.calls.push("delete");
        let response = self.inner.delete(id)?;
        self.fail_list |= self.fail_list_after_write;
        Ok(response)
    }

    fn get_by_id(&mut self, id: &ArticleId) -> StoreResult<ApiResponse<Article>> {
        self.calls.push("get_by_id");
        self.inner.get_by_id(id)
    }
}

type TestService = ArticleListService<CountingApi<LocalArticleStore<InMemoryBackend, NoLatency>>>;

fn service() -> TestService {
    let store =
        LocalArticleStore::with_latency(InMemoryBackend::new(), NoLatency, &StoreConfig::default());
    let mut service = ArticleListService::new(CountingApi::new(store));
    service.reload().unwrap();
    service
}

fn draft(title: &str) -> ArticleDraft {
    ArticleDraft::new(title, "summary", "2024-06-01", "Publisher")
}

#[test]
fn reload_loads_seeded_collection() {
    let service = service();
    assert_eq!(service.articles().len(), 10);
    let view = service.view();
    assert_eq!(view.items.len(), PAGE_SIZE);
    assert!(!view.has_more);
}

#[test]
fn create_reloads_and_shows_new_article_first() {
    let mut service = service();
    let created = service.create(draft("Brand new")).unwrap();

    assert_eq!(service.articles()[0], created);
    assert_eq!(service.articles().len(), 11);
    assert!(service.view().has_more);
    assert_eq!(service.api().calls, ["list", "create", "list"]);
}

#[test]
fn invalid_draft_never_reaches_store() {
    let mut service = service();
    let before = service.articles().to_vec();

    let err = service
        .create(ArticleDraft::new("  ", "summary", "2024-06-01", "Publisher"))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ArticleValidationError::Required(ArticleField::Title))
    ));
    assert_eq!(service.last_error(), Some("title is required"));

    let id = before[0].id.clone();
    let err = service
        .update(&id, ArticleDraft::new("t", "s", "06/01/2024", "p"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    assert_eq!(service.api().calls, ["list"]);
    assert_eq!(service.articles(), &before[..]);
}

#[test]
fn update_keeps_position_after_reload() {
    let mut service = service();
    let id = service.articles()[3].id.clone();

    let updated = service.update(&id, draft("Edited")).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(service.articles()[3], updated);
}

#[test]
fn delete_missing_article_records_error_and_keeps_state() {
    let mut service = service();
    service.search("rust");
    let before = service.articles().to_vec();
    let missing = ArticleId::from("gone");

    let err = service.delete(&missing).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(ref id) if id == &missing));
    assert_eq!(service.last_error(), Some("Article not found: gone"));
    assert_eq!(service.articles(), &before[..]);
    assert_eq!(service.query().text(), "rust");
    assert_eq!(service.api().calls, ["list", "delete"]);
}

#[test]
fn successful_mutation_clears_previous_error() {
    let mut service = service();
    let _ = service.load_for_edit(&ArticleId::from("gone"));
    assert!(service.last_error().is_some());

    let id = service.articles()[0].id.clone();
    service.delete(&id).unwrap();
    assert_eq!(service.last_error(), None);
    assert_eq!(service.articles().len(), 9);
}

#[test]
fn failed_reload_keeps_previous_collection() {
    let mut service = service();
    let before = service.articles().to_vec();

    service.api_mut().fail_list = true;
    let err = service.reload().unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Store(ref inner) if inner.status() == StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert!(service.last_error().unwrap().contains("corrupted"));
    assert_eq!(service.articles(), &before[..]);

    service.api_mut().fail_list = false;
    service.clear_error();
    service.reload().unwrap();
    assert_eq!(service.last_error(), None);
    assert_eq!(service.articles(), &before[..]);
}

#[test]
fn committed_write_succeeds_even_when_follow_up_reload_fails() {
    let mut service = service();
    let before = service.articles().to_vec();

    service.api_mut().fail_list_after_write = true;
    let created = service.create(draft("Saved once")).unwrap();
    assert_eq!(created.title, "Saved once");
    assert!(service.last_error().unwrap().contains("corrupted"));
    assert_eq!(service.articles(), &before[..]);
    assert_eq!(service.api().calls, ["list", "create", "list"]);

    service.api_mut().fail_list = false;
    let updated = service.update(&created.id, draft("Saved twice")).unwrap();
    assert_eq!(updated.id, created.id);
    assert!(service.last_error().is_some());

    service.api_mut().fail_list = false;
    service.delete(&before[0].id).unwrap();
    assert!(service.last_error().is_some());

    service.api_mut().fail_list = false;
    service.api_mut().fail_list_after_write = false;
    service.reload().unwrap();
    let copies = service
        .articles()
        .iter()
        .filter(|article| article.id == created.id)
        .count();
    assert_eq!(copies, 1);
    assert_eq!(service.articles()[0].title, "Saved twice");
    assert_eq!(service.articles().len(), before.len());
}

#[test]
fn load_for_edit_returns_stored_article() {
    let mut service = service();
    let expected = service.articles()[5].clone();
    assert_eq!(service.load_for_edit(&expected.id).unwrap(), expected);
}

#[test]
fn search_and_load_more_work_on_loaded_collection() {
    let mut service = service();
    for idx in 0..15 {
        service.create(draft(&format!("Batch item {idx}"))).unwrap();
    }
    let calls_before = service.api().calls.len();

    service.search("BATCH");
    assert_eq!(service.view().items.len(), 10);
    assert!(service.view().has_more);
    assert!(service.load_more());
    assert_eq!(service.view().items.len(), 15);
    assert!(!service.load_more());

    service.search("");
    assert_eq!(service.query().page(), 1);
    assert_eq!(service.view().total_matches, 25);
    assert_eq!(service.api().calls.len(), calls_before, "projection never refetches");
}
