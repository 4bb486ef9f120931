mod common;

use library_api::routes::configure_routes;
use serde_json::{json, Value};
use testcontainers::clients::Cli;

// Macro to set up test environment
// Note: This keeps _docker and _container alive for the duration of the test
macro_rules! setup_library {
    ($docker:ident, $container:ident, $client:ident) => {
        let $docker = Cli::default();
        let $container = $docker.run(common::create_postgres_container());

        let host_port = $container.get_host_port_ipv4(common::POSTGRES_PORT);
        let connection_string = common::build_connection_string("127.0.0.1", host_port);
        let $client = common::connect(&connection_string).await;
        $client
            .ensure_schema()
            .await
            .expect("Failed to create schema");
    };
}

// ============================================================================
// /authors tests
// ============================================================================

#[tokio::test]
async fn test_list_authors_empty() {
    setup_library!(_docker, _container, client);
    let api = configure_routes(client);

    let resp = warp::test::request().path("/authors").reply(&api).await;

    assert_eq!(resp.status(), 200);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_then_get_author() {
    setup_library!(_docker, _container, client);
    let api = configure_routes(client);

    let resp = warp::test::request()
        .method("POST")
        .path("/authors")
        .json(&json!({ "name": "Jane" }))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 201);
    let created: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(created["name"], "Jane");
    let id = created["id"].as_i64().expect("created author has an id");

    let resp = warp::test::request()
        .path(&format!("/authors/{}", id))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 200);
    let fetched: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], "Jane");
}

#[tokio::test]
async fn test_get_author_not_found() {
    setup_library!(_docker, _container, client);
    let api = configure_routes(client);

    let resp = warp::test::request().path("/authors/9999").reply(&api).await;

    assert_eq!(resp.status(), 404);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_create_author_missing_name() {
    setup_library!(_docker, _container, client);
    let api = configure_routes(client);

    let resp = warp::test::request()
        .method("POST")
        .path("/authors")
        .json(&json!({}))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 400);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_author_reflected_once() {
    setup_library!(_docker, _container, client);
    let api = configure_routes(client);

    let resp = warp::test::request()
        .method("POST")
        .path("/authors")
        .json(&json!({ "name": "Jane" }))
        .reply(&api)
        .await;
    let created: Value = serde_json::from_slice(resp.body()).unwrap();
    let id = created["id"].as_i64().unwrap();

    let resp = warp::test::request()
        .method("PUT")
        .path(&format!("/authors/{}", id))
        .json(&json!({ "name": "Janet" }))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 200);
    let updated: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Janet");

    // The rename shows up exactly once in the listing, with no leftover row
    let resp = warp::test::request().path("/authors").reply(&api).await;
    let listed: Value = serde_json::from_slice(resp.body()).unwrap();
    let authors = listed.as_array().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["name"], "Janet");
}

#[tokio::test]
async fn test_update_author_not_found() {
    setup_library!(_docker, _container, client);
    let api = configure_routes(client);

    let resp = warp::test::request()
        .method("PUT")
        .path("/authors/9999")
        .json(&json!({ "name": "Nobody" }))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_delete_author() {
    setup_library!(_docker, _container, client);
    let api = configure_routes(client);

    let resp = warp::test::request()
        .method("POST")
        .path("/authors")
        .json(&json!({ "name": "Jane" }))
        .reply(&api)
        .await;
    let created: Value = serde_json::from_slice(resp.body()).unwrap();
    let id = created["id"].as_i64().unwrap();

    let resp = warp::test::request()
        .method("DELETE")
        .path(&format!("/authors/{}", id))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 200);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body["message"], "Author deleted");

    let resp = warp::test::request()
        .path(&format!("/authors/{}", id))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_delete_author_not_found() {
    setup_library!(_docker, _container, client);
    let api = configure_routes(client);

    let resp = warp::test::request()
        .method("DELETE")
        .path("/authors/9999")
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_delete_author_with_books_blocked() {
    setup_library!(_docker, _container, client);
    let api = configure_routes(client);

    let resp = warp::test::request()
        .method("POST")
        .path("/authors")
        .json(&json!({ "name": "Jane" }))
        .reply(&api)
        .await;
    let author: Value = serde_json::from_slice(resp.body()).unwrap();
    let author_id = author["id"].as_i64().unwrap();

    let resp = warp::test::request()
        .method("POST")
        .path("/books")
        .json(&json!({ "title": "Persuasion", "author_id": author_id }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 201);

    // The foreign key has no cascade, so the delete is rejected
    let resp = warp::test::request()
        .method("DELETE")
        .path(&format!("/authors/{}", author_id))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 409);

    // The author is still there
    let resp = warp::test::request()
        .path(&format!("/authors/{}", author_id))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 200);
}
