use std::time::Duration;

use mockito::{Matcher, Server};
use roulette_catalog::{CatalogSource, CatalogStore, FetchError, SupabaseSource};

fn source(server: &Server) -> SupabaseSource {
    SupabaseSource::new(&server.url(), "anon-key", "foods", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn fetch_all_reads_whole_table_with_key_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/foods")
        .match_query(Matcher::UrlEncoded("select".into(), "*".into()))
        .match_header("apikey", "anon-key")
        .match_header("authorization", "Bearer anon-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"id": 1, "name": "Fried Chicken", "category": "chicken", "image_url": null, "tags": ["crispy"], "rating": 4.7},
                {"id": "2", "name": "Margherita", "category": "pizza", "image_url": "https://cdn.example.com/m.png", "tags": null, "rating": 4.1}
            ]"#,
        )
        .create_async()
        .await;

    let foods = source(&server).fetch_all().await.expect("foods should be fetched");

    mock.assert_async().await;
    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0].id, "1");
    assert_eq!(foods[0].tags, vec!["crispy"]);
    assert_eq!(foods[1].image_url.as_deref(), Some("https://cdn.example.com/m.png"));
    assert!(foods[1].tags.is_empty());
}

#[tokio::test]
async fn fetch_all_surfaces_api_error_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/foods")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": "PGRST301", "message": "Invalid API key", "details": null, "hint": null}"#)
        .create_async()
        .await;

    let err = source(&server).fetch_all().await.unwrap_err();

    mock.assert_async().await;
    match err {
        FetchError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_rejects_malformed_payload() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/foods")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"not": "a list"}"#)
        .create_async()
        .await;

    let err = source(&server).fetch_all().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn check_reports_exact_row_count() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("HEAD", "/rest/v1/foods")
        .match_query(Matcher::UrlEncoded("select".into(), "count".into()))
        .match_header("prefer", "count=exact")
        .with_status(200)
        .with_header("content-range", "*/42")
        .create_async()
        .await;

    let count = source(&server).check().await.expect("table should be reachable");

    mock.assert_async().await;
    assert_eq!(count, Some(42));
}

#[tokio::test]
async fn check_fails_when_table_is_missing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("HEAD", "/rest/v1/foods")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let err = source(&server).check().await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn store_keeps_catalog_when_service_goes_down() {
    let mut server = Server::new_async().await;
    let ok = server
        .mock("GET", "/rest/v1/foods")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"id": "1", "name": "Fried Chicken", "category": "chicken"}]"#)
        .expect(1)
        .create_async()
        .await;

    let mut store = CatalogStore::new(source(&server));
    store.load().await.unwrap();
    ok.assert_async().await;
    ok.remove_async().await;

    let _down = server
        .mock("GET", "/rest/v1/foods")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let err = store.load().await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 503, ref message } if message == "upstream unavailable"));
    assert_eq!(store.catalog().len(), 1);
    assert!(store.last_error().is_some());
}
