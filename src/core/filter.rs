use crate::domain::model::WorkerProfile;
use crate::domain::taxonomy::CategoryFilter;

/// Category plus free-text query. Both predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    needle: Option<String>,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, query: &str) -> Self {
        let trimmed = query.trim();
        let needle = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
        Self { category, needle }
    }

    pub fn matches(&self, worker: &WorkerProfile) -> bool {
        self.category.matches(worker.category) && self.matches_text(worker)
    }

    fn matches_text(&self, worker: &WorkerProfile) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };

        worker.name.to_lowercase().contains(needle)
            || worker
                .services
                .iter()
                .any(|s| s.to_lowercase().contains(needle))
            || worker.description.to_lowercase().contains(needle)
    }
}

/// Profiles matching `category` and `query`, in collection order.
pub fn filter_workers<'a>(
    workers: &'a [WorkerProfile],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a WorkerProfile> {
    let criteria = FilterCriteria::new(category, query);
    let filtered: Vec<&WorkerProfile> = workers.iter().filter(|w| criteria.matches(w)).collect();

    tracing::debug!(
        "Filter {} / {:?}: {} of {} profiles",
        criteria.category,
        query.trim(),
        filtered.len(),
        workers.len()
    );

    filtered
}
