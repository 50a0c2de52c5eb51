// Dashboard service - Comment table page and its persisted interactions
use crate::application::page::{PageController, PageState};
use crate::application::remote_data::RemoteDataSource;
use crate::application::view_state_store::ViewStateStore;
use crate::domain::comment::Comment;
use crate::domain::comment_table::{self, CommentTable};
use crate::domain::errors::{ActionError, PageError};
use crate::domain::view_state::{SortColumn, ViewState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Interactions are read-modify-write over the store and run one at a time
#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn RemoteDataSource>,
    store: ViewStateStore,
    interactions: Arc<Mutex<()>>,
}

/// One mount of the dashboard: the rehydrated view state plus the pending
/// comment fetch.
pub struct DashboardPage {
    pub view_state: ViewState,
    controller: PageController<Vec<Comment>>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn RemoteDataSource>, store: ViewStateStore) -> Self {
        Self {
            source,
            store,
            interactions: Arc::new(Mutex::new(())),
        }
    }

    fn serialize_interaction(&self) -> MutexGuard<'_, ()> {
        self.interactions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mount(&self) -> DashboardPage {
        let view_state = self.store.load();
        let source = self.source.clone();

        let controller = PageController::mount("dashboard", async move {
            source.fetch_comments().await.map_err(PageError::from)
        });

        DashboardPage {
            view_state,
            controller,
        }
    }

    #[cfg(test)]
    pub fn view_state(&self) -> ViewState {
        self.store.load()
    }

    pub fn search(&self, term: &str) -> Result<ViewState, ActionError> {
        let _guard = self.serialize_interaction();
        let mut state = self.store.load();
        state.search(term);

        self.store.save_search_term(&state.search_term)?;
        self.store.save_current_page(state.current_page)?;
        tracing::debug!("Search term set to {:?}", state.search_term);
        Ok(state)
    }

    pub fn click_sort(&self, column: SortColumn) -> Result<ViewState, ActionError> {
        let _guard = self.serialize_interaction();
        let mut state = self.store.load();
        state.click_sort(column);

        self.store.save_sort(state.sort)?;
        self.store.save_current_page(state.current_page)?;
        tracing::debug!("Sort is now {:?}", state.sort);
        Ok(state)
    }

    pub fn go_to_page(&self, page: usize) -> Result<ViewState, ActionError> {
        let _guard = self.serialize_interaction();
        let mut state = self.store.load();
        state.go_to_page(page)?;

        self.store.save_current_page(state.current_page)?;
        Ok(state)
    }

    pub fn resize_pages(&self, page_size: usize) -> Result<ViewState, ActionError> {
        let _guard = self.serialize_interaction();
        let mut state = self.store.load();
        state.resize_pages(page_size)?;

        self.store.save_page_size(state.page_size)?;
        self.store.save_current_page(state.current_page)?;
        Ok(state)
    }
}

impl DashboardPage {
    pub fn state(&self) -> &PageState<Vec<Comment>> {
        self.controller.state()
    }

    pub async fn resolve(&mut self) -> &PageState<Vec<Comment>> {
        self.controller.resolve().await
    }

    /// Table output for the current view state; only available once ready
    pub fn table(&self) -> Option<CommentTable<'_>> {
        match self.controller.state() {
            PageState::Ready(comments) => Some(comment_table::compute(comments, &self.view_state)),
            _ => None,
        }
    }

    pub fn total_comments(&self) -> usize {
        match self.controller.state() {
            PageState::Ready(comments) => comments.len(),
            _ => 0,
        }
    }
}
