use std::sync::Arc;

use roulette_catalog::{CatalogSource, CatalogStore, CategorySelection, FetchError};
use roulette_picker::{Picker, PickerError, RecommendationState, ShuffleSettings, Spin};
use roulette_shared::FoodItem;
use tokio::sync::watch;

/// One user session: a catalog store and the picker that draws from it.
///
/// This is everything a front end needs. It reads the filtered list, the
/// recommendation state and the categories, and it drives `load`,
/// `set_category`, `recommend` and `cancel`.
pub struct Roulette<S> {
    store: CatalogStore<S>,
    picker: Picker,
}

impl<S: CatalogSource> Roulette<S> {
    pub fn new(source: S, settings: ShuffleSettings) -> Self {
        Self {
            store: CatalogStore::new(source),
            picker: Picker::new(settings),
        }
    }

    pub async fn load(&mut self) -> Result<usize, FetchError> {
        self.store.load().await
    }

    /// Narrows the list; a spin that is already running keeps its own
    /// snapshot.
    pub fn set_category(&mut self, selection: impl Into<CategorySelection>) {
        self.store.set_category(selection);
    }

    /// Starts a spin over the list as it is filtered right now.
    pub fn recommend(&self) -> Result<Option<Spin>, PickerError> {
        self.picker.recommend(self.store.filtered())
    }

    pub fn cancel(&self) -> bool {
        self.picker.cancel()
    }

    pub fn filtered(&self) -> Arc<[FoodItem]> {
        self.store.filtered()
    }

    pub fn categories(&self) -> Vec<String> {
        self.store.available_categories()
    }

    pub fn selection(&self) -> &CategorySelection {
        self.store.selection()
    }

    pub fn state(&self) -> RecommendationState {
        self.picker.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<RecommendationState> {
        self.picker.subscribe()
    }

    pub fn fetch_error(&self) -> Option<&FetchError> {
        self.store.last_error()
    }

    pub fn settings(&self) -> &ShuffleSettings {
        self.picker.settings()
    }

    pub fn source(&self) -> &S {
        self.store.source()
    }
}
