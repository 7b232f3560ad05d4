use serde::{Deserialize, Serialize};

/// One site in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub description: String,
}

/// A named group of catalog sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub websites: Vec<Website>,
}

/// The full categorized link list, as loaded from the external JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Looks up a website by exact URL match across all categories.
    pub fn find_website_by_url(&self, url: &str) -> Option<&Website> {
        self.categories
            .iter()
            .flat_map(|c| c.websites.iter())
            .find(|w| w.url == url)
    }
}
