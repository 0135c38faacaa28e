use crate::domain::taxonomy::{CategoryFilter, WorkerCategory};
use serde::{Deserialize, Serialize};

pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProfile {
    pub id: String,
    pub name: String,
    pub category: WorkerCategory,
    pub services: Vec<String>,
    pub description: String,
    pub hourly_rate: f64,
    pub rating: f64,
    #[serde(rename = "reviews")]
    pub review_count: u32,
    pub location: String,
    pub phone: String,
    pub image_url: String,
    #[serde(rename = "isVerified")]
    pub verified: bool,
}

impl WorkerProfile {
    /// Text shown when the contact button is pressed.
    pub fn contact_line(&self) -> String {
        format!("Calling {} at {}...", self.name, self.phone)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Free label, not part of the worker taxonomy.
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub image: String,
}

/// A new listing exactly as typed into the add form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerSubmission {
    pub name: String,
    pub category: String,
    /// Comma separated.
    pub services: String,
    pub description: String,
    pub hourly_rate: String,
    pub location: String,
    pub phone: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSubmission {
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Products,
    Others,
    About,
}

/// Where the UI should land after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Directory(CategoryFilter),
    Marketplace,
}

impl Focus {
    pub fn view(self) -> View {
        match self {
            Focus::Directory(_) => View::Home,
            Focus::Marketplace => View::Products,
        }
    }
}

/// Both collections, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub workers: Vec<WorkerProfile>,
    pub products: Vec<Product>,
}
