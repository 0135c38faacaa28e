use crate::domain::model::{
    Focus, Product, ProductSubmission, WorkerProfile, WorkerSubmission,
};
use crate::domain::taxonomy::{CategoryFilter, WorkerCategory};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{coerce_non_negative, require_non_empty};
use chrono::Utc;

pub const DEFAULT_WORKER_IMAGE: &str =
    "https://images.unsplash.com/photo-1504307651254-35680f356dfd?auto=format&fit=crop&w=400&q=80";
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1581147036324-c17ac41dfa6c?auto=format&fit=crop&w=400&q=80";
pub const DEFAULT_PRODUCT_CATEGORY: &str = "General";

/// A normalized entity plus the view the UI should move to.
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted<T> {
    pub entity: T,
    pub focus: Focus,
}

/// Single entry point that turns raw form input into catalog entities.
#[derive(Debug, Clone, Default)]
pub struct IngestValidator;

impl IngestValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_worker(
        &self,
        submission: &WorkerSubmission,
        existing: &[WorkerProfile],
    ) -> Result<Accepted<WorkerProfile>> {
        let name = require_non_empty("name", &submission.name)?;
        let category = parse_category(&submission.category)?;
        let hourly_rate = coerce_non_negative("hourly_rate", &submission.hourly_rate)?;

        let id = fresh_id("w", |candidate| existing.iter().any(|w| w.id == candidate));

        let profile = WorkerProfile {
            id,
            name,
            category,
            services: split_services(&submission.services),
            description: submission.description.trim().to_string(),
            hourly_rate,
            rating: 0.0,
            review_count: 0,
            location: submission.location.trim().to_string(),
            phone: submission.phone.trim().to_string(),
            image_url: or_default(&submission.image_url, DEFAULT_WORKER_IMAGE),
            verified: false,
        };

        Ok(Accepted {
            entity: profile,
            focus: Focus::Directory(CategoryFilter::All),
        })
    }

    pub fn validate_product(
        &self,
        submission: &ProductSubmission,
        existing: &[Product],
    ) -> Result<Accepted<Product>> {
        let name = require_non_empty("name", &submission.name)?;
        let price = coerce_non_negative("price", &submission.price)?;

        let id = fresh_id("p", |candidate| existing.iter().any(|p| p.id == candidate));

        let product = Product {
            id,
            name,
            category: or_default(&submission.category, DEFAULT_PRODUCT_CATEGORY),
            price,
            rating: 0.0,
            image: or_default(&submission.image, DEFAULT_PRODUCT_IMAGE),
        };

        Ok(Accepted {
            entity: product,
            focus: Focus::Marketplace,
        })
    }
}

fn parse_category(raw: &str) -> Result<WorkerCategory> {
    let label = require_non_empty("category", raw)?;
    WorkerCategory::from_label(&label).ok_or(CatalogError::UnknownCategoryError { label })
}

fn split_services(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn or_default(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<prefix>-<unix millis>`, bumped until it is not taken.
fn fresh_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut stamp = Utc::now().timestamp_millis();
    loop {
        let candidate = format!("{}-{}", prefix, stamp);
        if !taken(&candidate) {
            return candidate;
        }
        stamp += 1;
    }
}
