use std::sync::Mutex;

use roulette_shared::FoodItem;

use crate::FetchError;

/// Read-only, full-table access to the food collection.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<FoodItem>, FetchError>;
}

#[async_trait::async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    async fn fetch_all(&self) -> Result<Vec<FoodItem>, FetchError> {
        (**self).fetch_all().await
    }
}

/// In-memory source. Contents can be swapped between fetches, and it can be
/// told to fail, which is what the store tests lean on.
pub struct StaticSource {
    items: Mutex<Result<Vec<FoodItem>, String>>,
}

impl StaticSource {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self {
            items: Mutex::new(Ok(items)),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            items: Mutex::new(Err(reason.into())),
        }
    }

    pub fn replace(&self, items: Vec<FoodItem>) {
        *self.lock() = Ok(items);
    }

    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.lock() = Err(reason.into());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Result<Vec<FoodItem>, String>> {
        self.items
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for StaticSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<FoodItem>, FetchError> {
        self.lock().clone().map_err(FetchError::Unavailable)
    }
}
