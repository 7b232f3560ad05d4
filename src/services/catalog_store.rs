// SiteDock Catalog Store
// Loads and saves the categorized link list as a JSON file (the `data.json`
// the directory UI is built from), resolves URLs to display names, filters
// for search, and provides the management CRUD used by the catalog editor.

use std::fs;
use std::path::Path;

use crate::types::catalog::{Catalog, Category, Website};
use crate::types::errors::CatalogError;

/// Trait defining the catalog store interface.
pub trait CatalogStoreTrait {
    fn load(&mut self) -> Result<Catalog, CatalogError>;
    fn save(&self) -> Result<(), CatalogError>;
    fn catalog(&self) -> &Catalog;
    fn find_website_by_url(&self, url: &str) -> Option<&Website>;
    /// Case-insensitive substring search over website name and description.
    /// Categories left with no matches are dropped; an empty term returns
    /// the whole catalog.
    fn search(&self, term: &str) -> Vec<Category>;
    fn add_category(&mut self, name: &str) -> Result<i64, CatalogError>;
    fn delete_category(&mut self, category_id: i64) -> Result<(), CatalogError>;
    fn add_website(
        &mut self,
        category_id: i64,
        name: &str,
        url: &str,
        description: &str,
    ) -> Result<i64, CatalogError>;
    fn update_website(
        &mut self,
        website_id: i64,
        category_id: i64,
        name: &str,
        url: &str,
        description: &str,
    ) -> Result<(), CatalogError>;
    fn delete_website(&mut self, website_id: i64) -> Result<(), CatalogError>;
}

/// Catalog store that persists the category list as pretty-printed JSON.
pub struct CatalogStore {
    data_path: String,
    catalog: Catalog,
}

impl CatalogStore {
    /// Creates a new `CatalogStore` over the given data file path. The
    /// catalog starts empty; call [`CatalogStoreTrait::load`] to read the file.
    pub fn new(data_path: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            catalog: Catalog::default(),
        }
    }

    /// Returns the path of the backing data file.
    pub fn data_path(&self) -> &str {
        &self.data_path
    }

    fn next_category_id(&self) -> i64 {
        self.catalog
            .categories
            .iter()
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    fn next_website_id(&self) -> i64 {
        self.catalog
            .categories
            .iter()
            .flat_map(|c| c.websites.iter())
            .map(|w| w.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    fn validate_website_input(name: &str, url: &str) -> Result<(), CatalogError> {
        if name.trim().is_empty() || url.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "Website name and URL are required".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CatalogError::InvalidInput(format!(
                "URL must start with http:// or https://: {}",
                url
            )));
        }
        Ok(())
    }
}

impl CatalogStoreTrait for CatalogStore {
    /// Loads the catalog from the JSON data file.
    ///
    /// A missing file yields an empty catalog. A malformed file is an error;
    /// the caller decides whether to degrade (the app context does).
    fn load(&mut self) -> Result<Catalog, CatalogError> {
        let path = Path::new(&self.data_path);

        if !path.exists() {
            self.catalog = Catalog::default();
            return Ok(self.catalog.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::IoError(format!("Failed to read data file: {}", e)))?;

        let catalog: Catalog = serde_json::from_str(&content)
            .map_err(|e| CatalogError::ParseError(format!("Failed to parse data file: {}", e)))?;

        self.catalog = catalog;
        Ok(self.catalog.clone())
    }

    /// Saves the current catalog to the JSON data file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), CatalogError> {
        let path = Path::new(&self.data_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CatalogError::IoError(format!("Failed to create data directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.catalog)
            .map_err(|e| CatalogError::ParseError(format!("Failed to serialize catalog: {}", e)))?;

        fs::write(path, json)
            .map_err(|e| CatalogError::IoError(format!("Failed to write data file: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the in-memory catalog.
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn find_website_by_url(&self, url: &str) -> Option<&Website> {
        self.catalog.find_website_by_url(url)
    }

    fn search(&self, term: &str) -> Vec<Category> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.catalog.categories.clone();
        }

        self.catalog
            .categories
            .iter()
            .filter_map(|category| {
                let websites: Vec<Website> = category
                    .websites
                    .iter()
                    .filter(|w| {
                        w.name.to_lowercase().contains(&term)
                            || w.description.to_lowercase().contains(&term)
                    })
                    .cloned()
                    .collect();
                if websites.is_empty() {
                    None
                } else {
                    Some(Category {
                        id: category.id,
                        name: category.name.clone(),
                        websites,
                    })
                }
            })
            .collect()
    }

    /// Adds a new category. Category names must be non-empty and unique.
    /// Returns the generated category ID.
    fn add_category(&mut self, name: &str) -> Result<i64, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::InvalidInput(
                "Category name is required".to_string(),
            ));
        }
        if self.catalog.categories.iter().any(|c| c.name == name) {
            return Err(CatalogError::DuplicateCategory(name.to_string()));
        }

        let id = self.next_category_id();
        self.catalog.categories.push(Category {
            id,
            name: name.to_string(),
            websites: Vec::new(),
        });
        self.save()?;
        Ok(id)
    }

    /// Deletes a category and every website in it.
    fn delete_category(&mut self, category_id: i64) -> Result<(), CatalogError> {
        let before = self.catalog.categories.len();
        self.catalog.categories.retain(|c| c.id != category_id);
        if self.catalog.categories.len() == before {
            return Err(CatalogError::CategoryNotFound(category_id));
        }
        self.save()
    }

    /// Adds a website to an existing category. Returns the generated
    /// website ID (unique across all categories).
    fn add_website(
        &mut self,
        category_id: i64,
        name: &str,
        url: &str,
        description: &str,
    ) -> Result<i64, CatalogError> {
        Self::validate_website_input(name, url)?;

        let id = self.next_website_id();
        let website = Website {
            id,
            name: name.trim().to_string(),
            url: url.trim().to_string(),
            description: description.trim().to_string(),
        };

        let category = self
            .catalog
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or(CatalogError::CategoryNotFound(category_id))?;
        category.websites.push(website);
        self.save()?;
        Ok(id)
    }

    /// Updates a website, moving it to `category_id` if it lives elsewhere.
    fn update_website(
        &mut self,
        website_id: i64,
        category_id: i64,
        name: &str,
        url: &str,
        description: &str,
    ) -> Result<(), CatalogError> {
        Self::validate_website_input(name, url)?;

        if !self.catalog.categories.iter().any(|c| c.id == category_id) {
            return Err(CatalogError::CategoryNotFound(category_id));
        }
        if self
            .catalog
            .categories
            .iter()
            .flat_map(|c| c.websites.iter())
            .all(|w| w.id != website_id)
        {
            return Err(CatalogError::WebsiteNotFound(website_id));
        }

        let updated = Website {
            id: website_id,
            name: name.trim().to_string(),
            url: url.trim().to_string(),
            description: description.trim().to_string(),
        };

        // Remove from wherever it currently lives, then append to the target
        // category. In-place update within the same category keeps position.
        let target = self
            .catalog
            .categories
            .iter()
            .position(|c| c.id == category_id)
            .ok_or(CatalogError::CategoryNotFound(category_id))?;

        let in_target = self.catalog.categories[target]
            .websites
            .iter()
            .position(|w| w.id == website_id);

        match in_target {
            Some(pos) => self.catalog.categories[target].websites[pos] = updated,
            None => {
                for category in &mut self.catalog.categories {
                    category.websites.retain(|w| w.id != website_id);
                }
                self.catalog.categories[target].websites.push(updated);
            }
        }
        self.save()
    }

    /// Deletes a website from whichever category holds it.
    fn delete_website(&mut self, website_id: i64) -> Result<(), CatalogError> {
        let before: usize = self.catalog.categories.iter().map(|c| c.websites.len()).sum();
        for category in &mut self.catalog.categories {
            category.websites.retain(|w| w.id != website_id);
        }
        let after: usize = self.catalog.categories.iter().map(|c| c.websites.len()).sum();
        if after == before {
            return Err(CatalogError::WebsiteNotFound(website_id));
        }
        self.save()
    }
}
