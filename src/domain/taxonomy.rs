use serde::{Deserialize, Serialize};
use std::fmt;

/// Worker categories a profile can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerCategory {
    Plumber,
    Electrician,
    Carpenter,
    Painter,
    Mechanic,
    Cleaner,
    Gardener,
    Mason,
    #[serde(rename = "AC Technician")]
    AcTechnician,
}

impl WorkerCategory {
    pub const VARIANTS: [WorkerCategory; 9] = [
        WorkerCategory::Plumber,
        WorkerCategory::Electrician,
        WorkerCategory::Carpenter,
        WorkerCategory::Painter,
        WorkerCategory::Mechanic,
        WorkerCategory::Cleaner,
        WorkerCategory::Gardener,
        WorkerCategory::Mason,
        WorkerCategory::AcTechnician,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkerCategory::Plumber => "Plumber",
            WorkerCategory::Electrician => "Electrician",
            WorkerCategory::Carpenter => "Carpenter",
            WorkerCategory::Painter => "Painter",
            WorkerCategory::Mechanic => "Mechanic",
            WorkerCategory::Cleaner => "Cleaner",
            WorkerCategory::Gardener => "Gardener",
            WorkerCategory::Mason => "Mason",
            WorkerCategory::AcTechnician => "AC Technician",
        }
    }

    /// 不分大小寫比對顯示名稱
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::VARIANTS
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for WorkerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The active category filter: the `All` wildcard or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(WorkerCategory),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn matches(self, category: WorkerCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Some(CategoryFilter::All);
        }
        WorkerCategory::from_label(label).map(CategoryFilter::Only)
    }
}

impl From<WorkerCategory> for CategoryFilter {
    fn from(category: WorkerCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: &'static str,
    pub tag: CategoryFilter,
    pub icon: &'static str,
}

/// Category list in display order, `All` first.
pub static CATEGORIES: [CategoryEntry; 10] = [
    CategoryEntry {
        name: "All",
        tag: CategoryFilter::All,
        icon: "fa-th-large",
    },
    CategoryEntry {
        name: "Plumber",
        tag: CategoryFilter::Only(WorkerCategory::Plumber),
        icon: "fa-faucet",
    },
    CategoryEntry {
        name: "Electrician",
        tag: CategoryFilter::Only(WorkerCategory::Electrician),
        icon: "fa-bolt",
    },
    CategoryEntry {
        name: "Carpenter",
        tag: CategoryFilter::Only(WorkerCategory::Carpenter),
        icon: "fa-hammer",
    },
    CategoryEntry {
        name: "Painter",
        tag: CategoryFilter::Only(WorkerCategory::Painter),
        icon: "fa-paint-roller",
    },
    CategoryEntry {
        name: "Mechanic",
        tag: CategoryFilter::Only(WorkerCategory::Mechanic),
        icon: "fa-wrench",
    },
    CategoryEntry {
        name: "Cleaner",
        tag: CategoryFilter::Only(WorkerCategory::Cleaner),
        icon: "fa-broom",
    },
    CategoryEntry {
        name: "Gardener",
        tag: CategoryFilter::Only(WorkerCategory::Gardener),
        icon: "fa-seedling",
    },
    CategoryEntry {
        name: "Mason",
        tag: CategoryFilter::Only(WorkerCategory::Mason),
        icon: "fa-trowel-bricks",
    },
    CategoryEntry {
        name: "AC Technician",
        tag: CategoryFilter::Only(WorkerCategory::AcTechnician),
        icon: "fa-snowflake",
    },
];

/// Entries a new profile may be filed under (everything except `All`).
pub fn selectable_categories() -> impl Iterator<Item = &'static CategoryEntry> {
    CATEGORIES
        .iter()
        .filter(|entry| entry.tag != CategoryFilter::All)
}
