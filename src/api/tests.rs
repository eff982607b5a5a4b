//! API Client Tests
//!
//! Exercise the HTTP client against a local mock server.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{ApiClient, ApiError, EmployeeApi};
use crate::config::ApiConfig;
use crate::models::{Employee, JobRole, NewEmployee};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(ApiConfig::new(server.uri()));
    (server, client)
}

fn draft() -> NewEmployee {
    NewEmployee {
        name: "Rahul".to_string(),
        email: "rahul@corp.io".to_string(),
        employee_id: "EMP-100".to_string(),
        mobile: "9123456780".to_string(),
        job_role: JobRole::Developer,
    }
}

#[tokio::test]
async fn test_list_employees_preserves_server_order() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Bea", "email": "bea@corp.io", "employeeId": "E002", "mobile": "9000000002", "jobRole": "Designer"},
            {"id": 1, "name": "Ali", "email": "ali@corp.io", "employeeId": "E001", "mobile": "9000000001", "jobRole": "Manager"}
        ])))
        .mount(&server)
        .await;

    let employees = client.list_employees().await.expect("list failed");
    let ids: Vec<u32> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(employees[0].job_role, JobRole::Designer);
}

#[tokio::test]
async fn test_list_employees_server_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/employees"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err, ApiError::Status(500));
}

#[tokio::test]
async fn test_list_employees_bad_body() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.list_employees().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"));
    let err = client.list_employees().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_create_employee_sends_draft_without_id() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/employees"))
        .and(body_json(json!({
            "name": "Rahul",
            "email": "rahul@corp.io",
            "employeeId": "EMP-100",
            "mobile": "9123456780",
            "jobRole": "Developer"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 41,
            "name": "Rahul",
            "email": "rahul@corp.io",
            "employeeId": "EMP-100",
            "mobile": "9123456780",
            "jobRole": "Developer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_employee(&draft()).await.expect("create failed");
    assert_eq!(created.id, 41);
    assert_eq!(created.name, "Rahul");
}

#[tokio::test]
async fn test_update_employee_puts_by_id() {
    let (server, client) = setup().await;
    let employee: Employee = draft().with_id(7);
    Mock::given(method("PUT"))
        .and(path("/employees/7"))
        .and(body_json(&employee))
        .respond_with(ResponseTemplate::new(200).set_body_json(&employee))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client.update_employee(&employee).await.expect("update failed");
    assert_eq!(updated, employee);
}

#[tokio::test]
async fn test_update_missing_employee_is_not_found() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/employees/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.update_employee(&draft().with_id(99)).await.unwrap_err();
    assert_eq!(err, ApiError::NotFound("employee 99".to_string()));
}

#[tokio::test]
async fn test_delete_employee_returns_id() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/employees/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.delete_employee(5).await, Ok(5));
}

#[tokio::test]
async fn test_delete_accepts_any_success_body() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/employees/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert_eq!(client.delete_employee(6).await, Ok(6));
}

#[tokio::test]
async fn test_find_user_by_credentials() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "email": "admin@x.com", "password": "secret"},
            {"id": 2, "email": "a@x.com", "password": "pw"}
        ])))
        .mount(&server)
        .await;

    let found = client
        .find_user_by_credentials("a@x.com", "pw")
        .await
        .expect("lookup failed");
    assert_eq!(found.map(|u| u.email), Some("a@x.com".to_string()));

    let missing = client
        .find_user_by_credentials("a@x.com", "wrong")
        .await
        .expect("no match is not an error");
    assert!(missing.is_none());
}
