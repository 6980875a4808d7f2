//! API integration tests
//!
//! These run against a live server with a reachable database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:3000";

/// A fresh identification per test run, so reruns do not collide with
/// previously registered rows.
fn unique_identification(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos();
    format!("{}{}", prefix, nanos)
}

async fn register_student(client: &Client, identification: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({
            "identificacion": identification,
            "nombre": "Estudiante de Prueba",
            "telefono": "3000000000",
            "correo": "prueba@example.com",
            "contraseña": password,
        }))
        .send()
        .await
        .expect("Failed to send register request")
}

#[tokio::test]
#[ignore]
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
async fn test_register_and_login() {
    let client = Client::new();
    let identification = unique_identification("reg");

    let response = register_student(&client, &identification, "secreto123").await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Estudiante registrado exitosamente.");

    // Login with the registered credentials
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({
            "identificacion": identification,
            "contraseña": "secreto123",
        }))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Inicio de sesión exitoso.");
    assert_eq!(body["estudiante"]["Identificacion"], identification);
    assert_eq!(body["estudiante"]["Nombre_y_Apellidos"], "Estudiante de Prueba");

    // The stored password hash must never be echoed back
    assert!(body["estudiante"].get("Contraseña").is_none());
    assert!(body["estudiante"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_identification() {
    let client = Client::new();
    let identification = unique_identification("dup");

    let response = register_student(&client, &identification, "secreto123").await;
    assert_eq!(response.status(), 201);

    let response = register_student(&client, &identification, "otra-clave").await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "La identificación ya está registrada.");
}

#[tokio::test]
#[ignore]
async fn test_login_unknown_identification() {
    let client = Client::new();

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({
            "identificacion": unique_identification("unknown"),
            "contraseña": "secreto123",
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "La identificación no está registrada.");
}

#[tokio::test]
#[ignore]
async fn test_login_wrong_password() {
    let client = Client::new();
    let identification = unique_identification("pwd");

    let response = register_student(&client, &identification, "secreto123").await;
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({
            "identificacion": identification,
            "contraseña": "clave-equivocada",
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Contraseña incorrecta.");
}

#[tokio::test]
#[ignore]
async fn test_add_book_and_list() {
    let client = Client::new();
    let isbn = unique_identification("978-");

    let response = client
        .post(format!("{}/add-book", BASE_URL))
        .json(&json!({
            "Titulo": "Rayuela",
            "Autor": "Julio Cortázar",
            "Fecha": "1963-06-28",
            "ISBN": isbn,
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let text = response.text().await.expect("Failed to read response body");
    assert_eq!(text, "Libro agregado exitosamente.");

    // The inserted row is retrievable through the listing endpoint
    let response = client
        .get(format!("{}/get-data", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let books: Vec<Value> = response.json().await.expect("Failed to parse response");
    let inserted = books
        .iter()
        .find(|b| b["ISBN"] == isbn.as_str())
        .expect("Inserted book not found in listing");
    assert_eq!(inserted["Titulo"], "Rayuela");
    assert_eq!(inserted["Autor"], "Julio Cortázar");
    assert_eq!(inserted["Fecha"], "1963-06-28");
}
