use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use storage::{
    MemoryCatalog,
    dto::{category::CategoryResponse, competitor::CompetitorResponse},
};
use tower::ServiceExt;

struct TestResponse {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

fn app() -> Router {
    web::app(Arc::new(MemoryCatalog::seeded()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        location,
        body,
    }
}

async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn test_seeded_categories_are_listed_without_competitors() {
    let app = app();
    let res = get(&app, "/api/categories").await;

    assert_eq!(res.status, StatusCode::OK);
    let categories: Vec<CategoryResponse> = serde_json::from_value(res.body).unwrap();
    assert_eq!(categories.len(), 2);
    assert!(categories.iter().all(|c| c.competitors.is_empty()));
    assert!(categories.iter().all(|c| !c.is_deleted));
}

#[tokio::test]
async fn test_competitors_by_seeded_category() {
    let app = app();
    let res = get(&app, "/api/competitors/categories/1").await;

    assert_eq!(res.status, StatusCode::OK);
    let competitors: Vec<CompetitorResponse> = serde_json::from_value(res.body).unwrap();
    assert_eq!(competitors.len(), 6);
    for competitor in &competitors {
        assert_eq!(competitor.category_id, 1);
        assert_eq!(competitor.category.as_ref().unwrap().name, "Ünlüler");
    }

    let res = get(&app, "/api/competitors/categories/2").await;
    assert_eq!(res.body.as_array().unwrap().len(), 4);

    let res = get(&app, "/api/competitors/categories/99").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!([]));
}

#[tokio::test]
async fn test_category_and_competitor_round_trip() {
    let app = app();

    let res = send(&app, Method::POST, "/api/categories", Some(json!({"name": "Test"}))).await;
    assert_eq!(res.status, StatusCode::CREATED);
    let created: CategoryResponse = serde_json::from_value(res.body).unwrap();
    assert_eq!(created.name, "Test");
    assert_eq!(created.created_date, created.modified_date);
    let location = res.location.unwrap();
    assert_eq!(location, format!("/api/categories/{}", created.id));

    let res = get(&app, &location).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Test");
    assert_eq!(res.body["competitors"], json!([]));

    let res = send(
        &app,
        Method::POST,
        "/api/competitors",
        Some(json!({"firstName": "Ada", "lastName": "Lovelace", "categoryId": created.id})),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    let competitor: CompetitorResponse = serde_json::from_value(res.body).unwrap();
    assert_eq!(
        res.location.unwrap(),
        format!("/api/competitors/{}", competitor.id)
    );
    assert_eq!(competitor.created_date, competitor.modified_date);

    let res = get(&app, &format!("/api/competitors/categories/{}", created.id)).await;
    let listed: Vec<CompetitorResponse> = serde_json::from_value(res.body).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, competitor.id);
    assert_eq!(listed[0].category.as_ref().unwrap().name, "Test");
}

#[tokio::test]
async fn test_category_name_length_boundary() {
    let app = app();

    let res = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({"name": "a".repeat(100)})),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);

    let res = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({"name": "a".repeat(101)})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Validation failed");
    assert!(res.body["details"][0].as_str().unwrap().starts_with("name:"));

    let res = get(&app, "/api/categories").await;
    assert_eq!(res.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_missing_or_malformed_body_is_a_bad_request() {
    let app = app();

    let res = send(&app, Method::POST, "/api/categories", Some(json!({}))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = send(&app, Method::POST, "/api/categories", Some(json!({"name": "   "}))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = send(&app, Method::POST, "/api/categories", Some(json!({"name": 12}))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_category_is_rejected_and_nothing_persists() {
    let app = app();

    let res = send(
        &app,
        Method::POST,
        "/api/competitors",
        Some(json!({"firstName": "Ada", "lastName": "Lovelace", "categoryId": 99})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Category 99 not found");

    let res = get(&app, "/api/competitors").await;
    assert_eq!(res.body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_soft_deleted_category_cannot_receive_competitors() {
    let app = app();

    let res = send(&app, Method::DELETE, "/api/categories/2", None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let res = send(
        &app,
        Method::POST,
        "/api/competitors",
        Some(json!({"firstName": "Ada", "lastName": "Lovelace", "categoryId": 2})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Category 2 not found");

    let res = send(
        &app,
        Method::PUT,
        "/api/competitors/1",
        Some(json!({"firstName": "Acun", "lastName": "Ilıcalı", "categoryId": 2})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_referential_check_runs_before_field_validation() {
    let app = app();

    let res = send(
        &app,
        Method::POST,
        "/api/competitors",
        Some(json!({"firstName": "", "lastName": "Lovelace", "categoryId": 99})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Category 99 not found");

    let res = send(
        &app,
        Method::POST,
        "/api/competitors",
        Some(json!({"firstName": "a".repeat(51), "lastName": "Lovelace", "categoryId": 1})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Validation failed");
}

#[tokio::test]
async fn test_update_category() {
    let app = app();

    let before: CategoryResponse =
        serde_json::from_value(get(&app, "/api/categories/1").await.body).unwrap();

    let res = send(&app, Method::PUT, "/api/categories/1", Some(json!({"name": "Celebrities"}))).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(res.body, Value::Null);

    let after: CategoryResponse =
        serde_json::from_value(get(&app, "/api/categories/1").await.body).unwrap();
    assert_eq!(after.name, "Celebrities");
    assert_eq!(after.created_date, before.created_date);
    assert!(after.modified_date > before.modified_date);
    assert_eq!(after.competitors.len(), 6);

    let res = send(&app, Method::PUT, "/api/categories/42", Some(json!({"name": "x"}))).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_category_rejects_invalid_name() {
    let app = app();

    let res = send(
        &app,
        Method::PUT,
        "/api/categories/1",
        Some(json!({"name": "a".repeat(101)})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Validation failed");
    assert!(res.body["details"][0].as_str().unwrap().starts_with("name:"));

    let res = send(&app, Method::PUT, "/api/categories/1", Some(json!({}))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    assert_eq!(get(&app, "/api/categories/1").await.body["name"], "Ünlüler");
}

#[tokio::test]
async fn test_soft_deleted_category_disappears_but_competitors_remain() {
    let app = app();

    let res = send(&app, Method::DELETE, "/api/categories/2", None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    assert_eq!(get(&app, "/api/categories/2").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/api/categories").await.body.as_array().unwrap().len(), 1);

    let res = send(&app, Method::DELETE, "/api/categories/2", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    let res = send(&app, Method::PUT, "/api/categories/2", Some(json!({"name": "Back"}))).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = get(&app, "/api/competitors/categories/2").await;
    let orphaned: Vec<CompetitorResponse> = serde_json::from_value(res.body).unwrap();
    assert_eq!(orphaned.len(), 4);
    assert!(orphaned.iter().all(|c| c.category.is_none() && !c.is_deleted));
    assert_eq!(get(&app, "/api/competitors").await.body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_update_competitor() {
    let app = app();

    let before: CompetitorResponse =
        serde_json::from_value(get(&app, "/api/competitors/7").await.body).unwrap();

    let res = send(
        &app,
        Method::PUT,
        "/api/competitors/7",
        Some(json!({"firstName": "Ahmet", "lastName": "Kaya", "categoryId": 1})),
    )
    .await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let after: CompetitorResponse =
        serde_json::from_value(get(&app, "/api/competitors/7").await.body).unwrap();
    assert_eq!(after.last_name, "Kaya");
    assert_eq!(after.category_id, 1);
    assert_eq!(after.created_date, before.created_date);
    assert!(after.modified_date > before.modified_date);

    let res = send(
        &app,
        Method::PUT,
        "/api/competitors/404",
        Some(json!({"firstName": "A", "lastName": "B", "categoryId": 1})),
    )
    .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = send(
        &app,
        Method::PUT,
        "/api/competitors/7",
        Some(json!({"firstName": "Ahmet", "lastName": "Kaya", "categoryId": 99})),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Category 99 not found");
}

#[tokio::test]
async fn test_soft_deleted_competitor_is_gone() {
    let app = app();

    let res = send(&app, Method::DELETE, "/api/competitors/5", None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    assert_eq!(get(&app, "/api/competitors/5").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/api/competitors").await.body.as_array().unwrap().len(), 9);
    assert_eq!(
        get(&app, "/api/categories/1").await.body["competitors"]
            .as_array()
            .unwrap()
            .len(),
        5
    );

    let res = send(&app, Method::DELETE, "/api/competitors/5", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    let res = send(
        &app,
        Method::PUT,
        "/api/competitors/5",
        Some(json!({"firstName": "Özge", "lastName": "Açık", "categoryId": 1})),
    )
    .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_do_not_nest_back_references() {
    let app = app();

    let competitor = get(&app, "/api/competitors/1").await.body;
    assert_eq!(competitor["firstName"], "Acun");
    assert_eq!(competitor["category"]["name"], "Ünlüler");
    assert!(competitor["category"].get("competitors").is_none());

    let category = get(&app, "/api/categories/1").await.body;
    let nested = category["competitors"].as_array().unwrap();
    assert_eq!(nested.len(), 6);
    assert!(nested.iter().all(|c| c.get("category").is_none()));
    assert_eq!(nested[0]["createdDate"], "2024-01-01T10:00:00");
}

#[tokio::test]
async fn test_missing_resources_are_not_found() {
    let app = app();

    assert_eq!(get(&app, "/api/categories/42").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/api/competitors/42").await.status, StatusCode::NOT_FOUND);
    let res = send(&app, Method::DELETE, "/api/competitors/42", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Resource not found");
}

#[tokio::test]
async fn test_non_integer_ids_are_not_found() {
    let app = app();

    for uri in [
        "/api/categories/abc",
        "/api/competitors/2147483648",
        "/api/competitors/categories/x",
    ] {
        let res = get(&app, uri).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(res.body["error"], "Resource not found", "{uri}");
    }

    let res = send(&app, Method::PUT, "/api/categories/abc", Some(json!({"name": "x"}))).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    let res = send(&app, Method::DELETE, "/api/competitors/1.5", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body["error"].is_string());
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app();
    let res = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body["paths"].get("/api/competitors/categories/{category_id}").is_some());
}
