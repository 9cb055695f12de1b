use async_graphql::{Request, Response, Variables};
use itemql::config::DatabaseSettings;
use itemql::graphql::{DELETED_MESSAGE, ItemSchema, build_schema, schema_sdl};
use itemql::storage::{ItemRepository, connect};
use serde_json::{Value, json};
use tempfile::TempDir;

async fn setup_schema() -> (ItemSchema, ItemRepository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let settings = DatabaseSettings {
        url: format!("sqlite://{}", temp_dir.path().join("items.db").display()),
        max_connections: 2,
    };
    let pool = connect(&settings).await.unwrap();
    let repo = ItemRepository::new(pool);
    (build_schema(repo.clone()), repo, temp_dir)
}

async fn run(schema: &ItemSchema, query: &str, variables: Value) -> Response {
    let request = Request::new(query).variables(Variables::from_json(variables));
    schema.execute(request).await
}

fn data(response: Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

async fn create(schema: &ItemSchema, name: &str, description: &str) -> i64 {
    let response = run(
        schema,
        "mutation($name: String!, $description: String!) { \
           createItem(name: $name, description: $description) { id name description } }",
        json!({ "name": name, "description": description }),
    )
    .await;
    data(response)["createItem"]["id"].as_i64().unwrap()
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn test_items_empty_is_empty_list() {
    let (schema, _repo, _temp_dir) = setup_schema().await;

    let response = run(&schema, "{ items { id } }", json!({})).await;
    assert_eq!(data(response), json!({ "items": [] }));
}

#[tokio::test]
async fn test_item_missing_returns_null() {
    let (schema, _repo, _temp_dir) = setup_schema().await;

    let response = run(&schema, "{ item(id: 42) { id name } }", json!({})).await;
    assert_eq!(data(response), json!({ "item": null }));
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let (schema, _repo, _temp_dir) = setup_schema().await;
    let id = create(&schema, "A", "B").await;

    let response = run(
        &schema,
        "query($id: Int!) { item(id: $id) { id name description } }",
        json!({ "id": id }),
    )
    .await;
    assert_eq!(
        data(response),
        json!({ "item": { "id": id, "name": "A", "description": "B" } })
    );
}

#[tokio::test]
async fn test_created_ids_are_unique_and_stable() {
    let (schema, _repo, _temp_dir) = setup_schema().await;

    let ids = vec![
        create(&schema, "one", "1").await,
        create(&schema, "two", "2").await,
        create(&schema, "three", "3").await,
    ];
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 3);

    let response = run(&schema, "{ items { id name } }", json!({})).await;
    let listed: Vec<i64> = data(response)["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    for id in &ids {
        assert!(listed.contains(id));
    }

    // Reading twice yields the same ids
    let again = run(&schema, "{ items { id name } }", json!({})).await;
    assert_eq!(data(again)["items"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_update_missing_is_not_found_and_storage_unchanged() {
    let (schema, repo, _temp_dir) = setup_schema().await;
    create(&schema, "Widget", "A gadget").await;

    let response = run(
        &schema,
        r#"mutation { updateItem(id: 99, name: "X", description: "Y") { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert_eq!(error.message, "Item not found: 99");
    let extensions = serde_json::to_value(&error.extensions).unwrap();
    assert_eq!(extensions["code"], "NOT_FOUND");

    let items = repo.list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Widget");
    assert_eq!(items[0].description, "A gadget");
}

#[tokio::test]
async fn test_delete_missing_is_not_found_and_storage_unchanged() {
    let (schema, repo, _temp_dir) = setup_schema().await;
    create(&schema, "Widget", "A gadget").await;

    let response = run(&schema, "mutation { deleteItem(id: 5) }", json!({})).await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Item not found: 5");
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_removes_from_item_and_items() {
    let (schema, _repo, _temp_dir) = setup_schema().await;
    let keep = create(&schema, "Keep", "stays").await;
    let gone = create(&schema, "Gone", "leaves").await;

    let response = run(
        &schema,
        "mutation($id: Int!) { deleteItem(id: $id) }",
        json!({ "id": gone }),
    )
    .await;
    assert_eq!(data(response), json!({ "deleteItem": DELETED_MESSAGE }));

    let response = run(
        &schema,
        "query($id: Int!) { item(id: $id) { id } items { id } }",
        json!({ "id": gone }),
    )
    .await;
    assert_eq!(
        data(response),
        json!({ "item": null, "items": [{ "id": keep }] })
    );
}

#[tokio::test]
async fn test_widget_lifecycle_scenario() {
    let (schema, _repo, _temp_dir) = setup_schema().await;

    let response = run(
        &schema,
        r#"mutation { createItem(name: "Widget", description: "A gadget") { id name } }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        data(response),
        json!({ "createItem": { "id": 1, "name": "Widget" } })
    );

    let response = run(
        &schema,
        r#"mutation { updateItem(id: 1, name: "Widget2", description: "Updated") { id name description } }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        data(response),
        json!({ "updateItem": { "id": 1, "name": "Widget2", "description": "Updated" } })
    );

    let response = run(&schema, "mutation { deleteItem(id: 1) }", json!({})).await;
    assert_eq!(data(response), json!({ "deleteItem": "Item deleted" }));

    let response = run(&schema, "{ item(id: 1) { id } }", json!({})).await;
    assert_eq!(data(response), json!({ "item": null }));
}

#[tokio::test]
async fn test_create_on_closed_pool_reports_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let settings = DatabaseSettings {
        url: format!("sqlite://{}", temp_dir.path().join("items.db").display()),
        max_connections: 2,
    };
    let pool = connect(&settings).await.unwrap();
    let schema = build_schema(ItemRepository::new(pool.clone()));

    pool.close().await;

    let response = run(
        &schema,
        r#"mutation { createItem(name: "Widget", description: "A gadget") { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert!(error.message.starts_with("Storage error:"));
    let extensions = serde_json::to_value(&error.extensions).unwrap();
    assert_eq!(extensions["code"], "STORAGE_ERROR");

    let data = response.data.into_json().unwrap();
    assert!(data["createItem"].is_null());
}

// =============================================================================
// Argument validation
// =============================================================================

#[tokio::test]
async fn test_missing_required_argument_is_rejected() {
    let (schema, repo, _temp_dir) = setup_schema().await;

    let response = run(
        &schema,
        r#"mutation { createItem(name: "Only name") { id } }"#,
        json!({}),
    )
    .await;

    assert!(!response.errors.is_empty());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_null_variable_for_required_argument_is_rejected() {
    let (schema, repo, _temp_dir) = setup_schema().await;

    let response = run(
        &schema,
        "mutation($name: String!) { createItem(name: $name, description: \"d\") { id } }",
        json!({ "name": null }),
    )
    .await;

    assert!(!response.errors.is_empty());
    assert!(repo.list().await.unwrap().is_empty());
}

// =============================================================================
// SDL
// =============================================================================

#[test]
fn test_sdl_matches_contract() {
    let sdl = schema_sdl();
    assert!(sdl.contains("type Query"));
    assert!(sdl.contains("type Mutation"));
    assert!(sdl.contains("items: [Item!]!"));
    assert!(sdl.contains("item(id: Int!): Item"));
    assert!(sdl.contains("createItem(name: String!, description: String!): Item!"));
    assert!(sdl.contains("updateItem(id: Int!, name: String!, description: String!): Item!"));
    assert!(sdl.contains("deleteItem(id: Int!): String!"));
}
