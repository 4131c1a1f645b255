use roulette_catalog::{CatalogStore, CategorySelection, FetchError, StaticSource};
use roulette_shared::FoodItem;

fn chicken_and_pizza() -> Vec<FoodItem> {
    vec![
        FoodItem::new("1", "Fried Chicken", "chicken"),
        FoodItem::new("2", "Margherita", "pizza"),
    ]
}

#[tokio::test]
async fn test_store_starts_empty() {
    let store = CatalogStore::new(StaticSource::default());

    assert!(store.catalog().is_empty());
    assert!(store.filtered().is_empty());
    assert_eq!(store.selection(), &CategorySelection::All);
    assert!(store.available_categories().is_empty());
    assert!(store.last_error().is_none());
}

#[tokio::test]
async fn test_load_replaces_catalog_and_filtered_view() {
    let mut store = CatalogStore::new(StaticSource::new(chicken_and_pizza()));

    let loaded = store.load().await.unwrap();

    assert_eq!(loaded, 2);
    assert_eq!(store.catalog(), chicken_and_pizza().as_slice());
    assert_eq!(&*store.filtered(), chicken_and_pizza().as_slice());
}

#[tokio::test]
async fn test_set_category_narrows_then_all_restores() {
    let mut store = CatalogStore::new(StaticSource::new(chicken_and_pizza()));
    store.load().await.unwrap();

    store.set_category("chicken");
    let filtered = store.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "1");

    store.set_category(CategorySelection::All);
    assert_eq!(&*store.filtered(), store.catalog());
}

#[tokio::test]
async fn test_selection_survives_reload() {
    let source = StaticSource::new(chicken_and_pizza());
    let mut store = CatalogStore::new(source);
    store.set_category("pizza");
    assert!(store.filtered().is_empty());

    store.load().await.unwrap();
    assert_eq!(store.filtered().len(), 1);
    assert_eq!(store.filtered()[0].id, "2");

    store.source().replace(vec![
        FoodItem::new("5", "Hawaiian", "pizza"),
        FoodItem::new("6", "Quattro Formaggi", "pizza"),
        FoodItem::new("7", "Jokbal", "korean"),
    ]);
    store.load().await.unwrap();

    let ids: Vec<_> = store.filtered().iter().map(|f| f.id.clone()).collect();
    assert_eq!(ids, vec!["5", "6"]);
    assert_eq!(store.available_categories(), vec!["pizza", "korean"]);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_catalog() {
    let mut store = CatalogStore::new(StaticSource::new(chicken_and_pizza()));
    store.load().await.unwrap();
    store.set_category("pizza");

    store.source().fail_with("table not reachable");
    let err = store.load().await.unwrap_err();

    assert!(matches!(err, FetchError::Unavailable(ref reason) if reason == "table not reachable"));
    assert_eq!(store.catalog(), chicken_and_pizza().as_slice());
    assert_eq!(store.filtered().len(), 1);
    assert!(matches!(store.last_error(), Some(FetchError::Unavailable(_))));
}

#[tokio::test]
async fn test_successful_load_clears_last_error() {
    let mut store = CatalogStore::new(StaticSource::failing("offline"));

    assert!(store.load().await.is_err());
    assert!(store.last_error().is_some());
    assert!(store.catalog().is_empty());

    store.source().replace(chicken_and_pizza());
    store.load().await.unwrap();

    assert!(store.last_error().is_none());
    assert_eq!(store.catalog().len(), 2);
}

#[tokio::test]
async fn test_duplicate_ids_keep_first_row() {
    let mut store = CatalogStore::new(StaticSource::new(vec![
        FoodItem::new("1", "Fried Chicken", "chicken"),
        FoodItem::new("1", "Fried Chicken (dup)", "chicken"),
        FoodItem::new("2", "Margherita", "pizza"),
    ]));

    assert_eq!(store.load().await.unwrap(), 2);
    assert_eq!(store.catalog()[0].name, "Fried Chicken");
}

#[tokio::test]
async fn test_earlier_snapshot_is_not_touched_by_category_change() {
    let mut store = CatalogStore::new(StaticSource::new(chicken_and_pizza()));
    store.load().await.unwrap();

    let snapshot = store.filtered();
    store.set_category("chicken");

    assert_eq!(snapshot.len(), 2);
    assert_eq!(store.filtered().len(), 1);
}
