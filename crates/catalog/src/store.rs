use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use roulette_shared::FoodItem;

use crate::{CatalogSource, FetchError};

/// Which slice of the catalog the user is looking at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    pub fn matches(&self, food: &FoodItem) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(category) => food.category == *category,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str("all categories"),
            CategorySelection::Only(category) => write!(f, "category '{category}'"),
        }
    }
}

impl From<Option<String>> for CategorySelection {
    fn from(value: Option<String>) -> Self {
        value.map(CategorySelection::Only).unwrap_or_default()
    }
}

impl From<&str> for CategorySelection {
    fn from(value: &str) -> Self {
        CategorySelection::Only(value.to_owned())
    }
}

/// Items of `catalog` that belong to `selection`, in catalog order.
pub fn filter(catalog: &[FoodItem], selection: &CategorySelection) -> Vec<FoodItem> {
    catalog
        .iter()
        .filter(|food| selection.matches(food))
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories(catalog: &[FoodItem]) -> Vec<String> {
    let mut seen = HashSet::new();

    catalog
        .iter()
        .filter(|&food| seen.insert(food.category.as_str()))
        .map(|food| food.category.to_owned())
        .collect()
}

/// Owns the full catalog and the slice derived from the current category.
///
/// The filtered view is recomputed synchronously every time either input
/// changes, so it is never stale. It is handed out as an `Arc<[FoodItem]>`
/// so a consumer can hold on to a snapshot while the store moves on.
pub struct CatalogStore<S> {
    source: S,
    catalog: Arc<[FoodItem]>,
    selection: CategorySelection,
    filtered: Arc<[FoodItem]>,
    last_error: Option<FetchError>,
}

impl<S: CatalogSource> CatalogStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: Arc::from(Vec::new()),
            selection: CategorySelection::All,
            filtered: Arc::from(Vec::new()),
            last_error: None,
        }
    }

    /// Fetches the whole collection and replaces the catalog with it.
    ///
    /// On failure the current catalog is kept as is and the error is both
    /// returned and remembered in [`CatalogStore::last_error`].
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) -> Result<usize, FetchError> {
        let items = match self.source.fetch_all().await {
            Ok(items) => items,
            Err(err) => {
                tracing::error!(err = %err, "failed to fetch foods");
                self.last_error = Some(err.clone());
                return Err(err);
            }
        };

        self.catalog = Arc::from(unique_by_id(items));
        self.last_error = None;
        self.refilter();

        tracing::info!(
            foods = self.catalog.len(),
            filtered = self.filtered.len(),
            "catalog loaded"
        );

        Ok(self.catalog.len())
    }

    pub fn set_category(&mut self, selection: impl Into<CategorySelection>) {
        self.selection = selection.into();
        self.refilter();

        tracing::debug!(
            selection = ?self.selection,
            filtered = self.filtered.len(),
            "category changed"
        );
    }

    pub fn available_categories(&self) -> Vec<String> {
        categories(&self.catalog)
    }

    pub fn catalog(&self) -> &[FoodItem] {
        &self.catalog
    }

    pub fn filtered(&self) -> Arc<[FoodItem]> {
        self.filtered.clone()
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn refilter(&mut self) {
        self.filtered = match self.selection {
            CategorySelection::All => self.catalog.clone(),
            _ => Arc::from(filter(&self.catalog, &self.selection)),
        };
    }
}

fn unique_by_id(items: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut seen = HashSet::new();
    let total = items.len();

    let unique: Vec<FoodItem> = items
        .into_iter()
        .filter(|food| seen.insert(food.id.to_owned()))
        .collect();

    if unique.len() != total {
        tracing::warn!(
            dropped = total - unique.len(),
            "duplicate food ids in catalog, keeping first occurrence"
        );
    }

    unique
}
