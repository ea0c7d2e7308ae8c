//! API integration tests
//!
//! These run against a live server with the seed data loaded:
//! `cargo run`, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to log in as the seeded admin account
async fn get_admin_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "student_id": "100",
            "password": "1234"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Helper to log in as a seeded student
async fn get_student_token(client: &Client, student_id: &str) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "student_id": student_id,
            "password": "1234"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_student_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "student_id": "101",
            "password": "1234"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "student_id": "101",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_technician_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/technician/login", BASE_URL))
        .json(&json!({
            "name": "Ramesh",
            "password": "1234"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["role"], "electrician");
}

#[tokio::test]
#[ignore]
async fn test_submit_request_keyword_boost() {
    let client = Client::new();
    let token = get_student_token(&client, "101").await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "student_id": "101",
            "query": "fan not wokring plz fix pls"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["category"], "Hostel");
    assert_eq!(body["technician"], "Ramesh");
    // No hour stated, so the assignment falls back to the window start
    assert_eq!(body["status"], "no_time_match");
    assert!(body["request_id"].is_string());

    // Release the slot again so reruns find Ramesh free
    let admin_token = get_admin_token(&client).await;
    let request_id = body["request_id"].as_str().expect("no request id");
    client
        .put(format!("{}/admin/requests/{}/status", BASE_URL, request_id))
        .header("Authorization", format!("Bearer {}", admin_token))
        .json(&json!({ "status": "resolved" }))
        .send()
        .await
        .expect("Failed to send request");
}

/// Current load of one technician from the admin roster
async fn technician_load(client: &Client, admin_token: &str, name: &str) -> i64 {
    let roster: Value = client
        .get(format!("{}/admin/technicians", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin_token))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    roster
        .as_array()
        .expect("roster is not an array")
        .iter()
        .find(|t| t["name"] == name)
        .expect("technician missing from roster")["current_load"]
        .as_i64()
        .expect("load not a number")
}

#[tokio::test]
#[ignore]
async fn test_submit_then_resolve_releases_load_once() {
    let client = Client::new();
    let student_token = get_student_token(&client, "102").await;
    let admin_token = get_admin_token(&client).await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .header("Authorization", format!("Bearer {}", student_token))
        .json(&json!({
            "student_id": "102",
            "query": "cupboard hinge broken, free around 11"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let request_id = body["request_id"].as_str().expect("no request id");
    let technician = body["technician"].as_str().expect("no technician assigned");

    let load_after_submit = technician_load(&client, &admin_token, technician).await;
    assert!(load_after_submit >= 1);

    // Resolve it twice; the second transition must not decrement again
    for _ in 0..2 {
        let update = client
            .put(format!("{}/admin/requests/{}/status", BASE_URL, request_id))
            .header("Authorization", format!("Bearer {}", admin_token))
            .json(&json!({ "status": "resolved" }))
            .send()
            .await
            .expect("Failed to send request");
        assert!(update.status().is_success());
    }

    let load_after_resolve = technician_load(&client, &admin_token, technician).await;
    assert_eq!(load_after_resolve, load_after_submit - 1);
}

#[tokio::test]
#[ignore]
async fn test_admin_surface_requires_admin_token() {
    let client = Client::new();
    let student_token = get_student_token(&client, "101").await;

    let response = client
        .get(format!("{}/admin/requests", BASE_URL))
        .header("Authorization", format!("Bearer {}", student_token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_unknown_request_id_is_404() {
    let client = Client::new();
    let admin_token = get_admin_token(&client).await;

    let response = client
        .put(format!(
            "{}/admin/requests/00000000-0000-0000-0000-000000000000/status",
            BASE_URL
        ))
        .header("Authorization", format!("Bearer {}", admin_token))
        .json(&json!({ "status": "resolved" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
