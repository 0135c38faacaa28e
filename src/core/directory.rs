use crate::core::catalog::{CatalogStore, SaveStatus};
use crate::core::filter::filter_workers;
use crate::core::ingest::{Accepted, IngestValidator};
use crate::domain::model::{
    Focus, Product, ProductSubmission, View, WorkerProfile, WorkerSubmission,
};
use crate::domain::ports::{CategoryAdvisor, KeyValueStore};
use crate::domain::taxonomy::CategoryFilter;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::require_non_empty;

/// What the directory is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    pub view: View,
    pub category: CategoryFilter,
    pub query: String,
}

/// A successful add: the stored entity, whether it reached storage, and
/// where the UI was moved to.
#[derive(Debug, Clone, PartialEq)]
pub struct Added<T> {
    pub entity: T,
    pub save: SaveStatus,
    pub focus: Focus,
}

/// The controller the UI talks to. Owns the catalog store and the browse
/// state; the filtered list is always derived, never stored.
pub struct Directory<S: KeyValueStore> {
    store: CatalogStore<S>,
    validator: IngestValidator,
    state: BrowseState,
}

impl<S: KeyValueStore> Directory<S> {
    pub fn new(store: CatalogStore<S>) -> Self {
        Self {
            store,
            validator: IngestValidator::new(),
            state: BrowseState::default(),
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    /// Sets both inputs and returns the matching profiles.
    pub fn request_filter(&mut self, category: CategoryFilter, query: &str) -> Vec<WorkerProfile> {
        self.state.category = category;
        self.state.query = query.to_string();
        self.visible_workers()
    }

    pub fn visible_workers(&self) -> Vec<WorkerProfile> {
        let workers = self.store.list_workers();
        filter_workers(&workers, self.state.category, &self.state.query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn products(&self) -> Vec<Product> {
        self.store.list_products().to_vec()
    }

    /// Category pick from the sidebar. The query is kept.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.state.category = category;
        self.state.view = View::Home;
    }

    /// Every submission returns to Home; non-blank text also widens the
    /// scope to every category.
    pub fn submit_search(&mut self, query: &str) {
        self.state.query = query.to_string();
        if !query.trim().is_empty() {
            self.state.category = CategoryFilter::All;
        }
        self.state.view = View::Home;
    }

    pub fn go_home(&mut self) {
        self.state = BrowseState::default();
    }

    pub fn change_view(&mut self, view: View) {
        self.state.view = view;
    }

    /// The banner only shows on the unfiltered home page.
    pub fn shows_hero(&self) -> bool {
        self.state.category == CategoryFilter::All && self.state.query.is_empty()
    }

    pub fn request_add_worker(
        &mut self,
        submission: &WorkerSubmission,
    ) -> Result<Added<WorkerProfile>> {
        let Accepted { entity, focus } = self
            .validator
            .validate_worker(submission, &self.store.list_workers())
            .inspect_err(|e| tracing::warn!("🚫 Worker submission rejected: {}", e))?;

        let save = self.store.add_worker(entity.clone())?;
        self.apply_focus(focus);
        Ok(Added {
            entity,
            save,
            focus,
        })
    }

    pub fn request_add_product(
        &mut self,
        submission: &ProductSubmission,
    ) -> Result<Added<Product>> {
        let Accepted { entity, focus } = self
            .validator
            .validate_product(submission, &self.store.list_products())
            .inspect_err(|e| tracing::warn!("🚫 Product submission rejected: {}", e))?;

        let save = self.store.add_product(entity.clone())?;
        self.apply_focus(focus);
        Ok(Added {
            entity,
            save,
            focus,
        })
    }

    /// Applies a category label coming back from the helper. Unknown labels
    /// are rejected and leave the state alone.
    pub fn apply_category_suggestion(&mut self, label: &str) -> Result<CategoryFilter> {
        let category = CategoryFilter::from_label(label).ok_or_else(|| {
            tracing::warn!("🤖 Helper suggested unknown category {:?}", label);
            CatalogError::UnknownCategoryError {
                label: label.trim().to_string(),
            }
        })?;

        self.state.category = category;
        self.state.view = View::Home;
        tracing::info!("🤖 Helper suggested {}", category);
        Ok(category)
    }

    pub async fn request_category_suggestion(
        &mut self,
        advisor: &dyn CategoryAdvisor,
        symptoms: &str,
    ) -> Result<CategoryFilter> {
        let symptoms = require_non_empty("symptoms", symptoms)?;
        let label = advisor.suggest(&symptoms).await?;
        self.apply_category_suggestion(&label)
    }

    /// Throws away every added entry and returns to the seed listings.
    pub fn reset_catalog(&mut self) -> SaveStatus {
        let status = self.store.reset_to_seed();
        self.go_home();
        status
    }

    fn apply_focus(&mut self, focus: Focus) {
        if let Focus::Directory(category) = focus {
            self.state.category = category;
        }
        self.state.view = focus.view();
    }
}
