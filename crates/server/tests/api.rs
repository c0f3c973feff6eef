//! End-to-end tests over the full HTTP surface.
//!
//! Each test boots the real router (session layer included) on an ephemeral
//! port against a scratch `SQLite` file and drives it with a cookie-aware
//! HTTP client, the way a browser would.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tempfile::TempDir;

use shoplite_server::config::ShopliteConfig;
use shoplite_server::state::AppState;
use shoplite_server::{db, middleware};

struct TestApp {
    base: String,
    pool: SqlitePool,
    _dir: TempDir,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

async fn spawn_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let database_url =
        SecretString::from(format!("sqlite://{}", dir.path().join("shoplite.db").display()));

    let pool = db::create_pool(&database_url).await.unwrap();
    shoplite_server::MIGRATOR.run(&pool).await.unwrap();

    let session_store = middleware::create_session_store(&pool);
    session_store.migrate().await.unwrap();
    middleware::clear_sessions(&pool).await.unwrap();

    let config = ShopliteConfig {
        database_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        public_dir: dir.path().join("public"),
        upload_dir: dir.path().join("uploads"),
    };

    let state = AppState::new(config, pool.clone()).unwrap();
    let session_layer = middleware::create_session_layer(session_store, state.config());
    let app = shoplite_server::app(state, session_layer);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base: format!("http://{addr}"),
        pool,
        _dir: dir,
    }
}

/// Browser-like client: keeps cookies, never follows redirects.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn register(app: &TestApp, client: &reqwest::Client, username: &str) -> i64 {
    let resp = client
        .post(app.url("/register"))
        .form(&[
            ("username", username),
            ("password", "secret"),
            ("email", "user@example.com"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    body["id"].as_i64().unwrap()
}

async fn add_product(app: &TestApp, name: &str, description: &str, category: &str) -> i64 {
    let form = reqwest::multipart::Form::new()
        .text("name", name.to_string())
        .text("description", description.to_string())
        .text("price", "19.99")
        .text("category", category.to_string());

    let resp = client()
        .post(app.url("/products"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    body["id"].as_i64().unwrap()
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn added_product_reads_back_with_submitted_fields() {
    let app = spawn_app().await;
    let id = add_product(&app, "Red Hat", "A warm hat", "clothing").await;

    let resp = client().get(app.url(&format!("/products/{id}"))).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let product: Value = resp.json().await.unwrap();
    assert_eq!(product["name"], json!("Red Hat"));
    assert_eq!(product["description"], json!("A warm hat"));
    assert_eq!(product["price"], json!("19.99"));
    assert_eq!(product["category"], json!("clothing"));
    assert_eq!(product["image"], Value::Null);
}

#[tokio::test]
async fn product_image_upload_returns_servable_handle() {
    let app = spawn_app().await;

    let form = reqwest::multipart::Form::new()
        .text("name", "Poster")
        .text("description", "Wall art")
        .text("price", "3.00")
        .text("category", "home")
        .part(
            "image",
            reqwest::multipart::Part::bytes(b"fake-png-bytes".to_vec())
                .file_name("poster.png")
                .mime_str("image/png")
                .unwrap(),
        );

    let resp = client()
        .post(app.url("/products"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    let product: Value = client()
        .get(app.url(&format!("/products/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let handle = product["image"].as_str().unwrap();
    assert!(handle.ends_with(".png"));

    // The handle resolves under the uploads surface
    let served = client()
        .get(app.url(&format!("/uploads/{handle}")))
        .send()
        .await
        .unwrap();
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(
        served.bytes().await.unwrap().as_ref(),
        b"fake-png-bytes".as_slice()
    );
}

#[tokio::test]
async fn missing_product_fields_answer_400() {
    let app = spawn_app().await;

    let form = reqwest::multipart::Form::new()
        .text("name", "No price")
        .text("description", "missing fields")
        .text("category", "misc");

    let resp = client()
        .post(app.url("/products"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.text().await.unwrap().contains("Missing required parameters"));
}

#[tokio::test]
async fn unknown_product_id_answers_400() {
    let app = spawn_app().await;

    let resp = client().get(app.url("/products/9999")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.unwrap(), "Invalid request: id does not exist");
}

#[tokio::test]
async fn category_listing_is_exact_match() {
    let app = spawn_app().await;
    add_product(&app, "A", "a", "toys").await;
    add_product(&app, "B", "b", "toys").await;
    add_product(&app, "C", "c", "toy").await;

    let body: Value = client()
        .get(app.url("/products/category/toys"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn search_unions_name_description_and_category() {
    let app = spawn_app().await;
    add_product(&app, "Red Hat", "plain", "clothing").await;
    add_product(&app, "Scarf", "red fabric", "clothing").await;
    add_product(&app, "Mystery Box", "plain", "reduced").await;
    add_product(&app, "Blue Shoe", "plain", "footwear").await;

    let body: Value = client()
        .get(app.url("/search/red"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);

    // Case-insensitive for ASCII
    let body: Value = client()
        .get(app.url("/search/RED"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);
}

// =============================================================================
// Identity
// =============================================================================

#[tokio::test]
async fn register_then_login_returns_the_same_user_id() {
    let app = spawn_app().await;
    let registered_id = register(&app, &client(), "alice").await;

    let resp = client()
        .post(app.url("/login"))
        .form(&[("username", "alice"), ("password", "secret")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"].as_i64().unwrap(), registered_id);
}

#[tokio::test]
async fn wrong_password_is_rejected_and_creates_no_session() {
    let app = spawn_app().await;
    register(&app, &client(), "alice").await;

    let c = client();
    let resp = c
        .post(app.url("/login"))
        .form(&[("username", "alice"), ("password", "wrong")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.text().await.unwrap(), "Invalid username or password");

    // The failed attempt left this client unauthenticated
    let gated = c.get(app.url("/orders/1")).send().await.unwrap();
    assert_eq!(gated.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn registration_requires_all_fields() {
    let app = spawn_app().await;

    let resp = client()
        .post(app.url("/register"))
        .form(&[("username", "alice"), ("password", "secret")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.text().await.unwrap().contains("Missing required parameters"));
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let app = spawn_app().await;
    register(&app, &client(), "alice").await;

    let resp = client()
        .post(app.url("/register"))
        .form(&[
            ("username", "alice"),
            ("password", "other"),
            ("email", "b@x.com"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn profile_is_gated_and_hides_the_credential() {
    let app = spawn_app().await;

    // Unauthenticated API request gets a plain 401
    let resp = client().get(app.url("/users/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let c = client();
    let id = register(&app, &c, "alice").await;

    let resp = c.get(app.url(&format!("/users/{id}"))).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["username"], json!("alice"));
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    // Unknown users are a 404, unlike unknown products
    let resp = c.get(app.url("/users/9999")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn gated_page_redirects_to_login() {
    let app = spawn_app().await;

    let resp = client().get(app.url("/profile.html")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").unwrap().to_str().unwrap(),
        "/login.html"
    );
}

#[tokio::test]
async fn logout_invalidates_a_replayed_session_token() {
    let app = spawn_app().await;
    let c = client();

    // Register by hand so the raw session cookie can be captured for replay
    let resp = c
        .post(app.url("/register"))
        .form(&[
            ("username", "alice"),
            ("password", "secret"),
            ("email", "a@x.com"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("shoplite_session="))
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();
    let body: Value = resp.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    // The session works before logout
    let resp = c.get(app.url(&format!("/users/{id}"))).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = c.post(app.url("/logout")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Replaying the pre-logout token must not resurrect the session
    let replayed = reqwest::Client::new()
        .get(app.url(&format!("/users/{id}")))
        .header(reqwest::header::COOKIE, cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(replayed.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_a_session_still_succeeds() {
    let app = spawn_app().await;

    // Destroying an absent session is not an error, twice over
    let resp = client().post(app.url("/logout")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = client().post(app.url("/logout")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// =============================================================================
// Commerce
// =============================================================================

#[tokio::test]
async fn feedback_round_trip_is_unauthenticated() {
    let app = spawn_app().await;
    let user_id = register(&app, &client(), "alice").await;
    let product_id = add_product(&app, "Red Hat", "hat", "clothing").await;

    let resp = client()
        .post(app.url("/feedback"))
        .form(&[
            ("productId", product_id.to_string()),
            ("userId", user_id.to_string()),
            ("rating", "5".to_string()),
            ("comment", "great".to_string()),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert!(body["lastId"].as_i64().is_some());

    let rows: Value = client()
        .get(app.url(&format!("/feedback/{product_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["rating"].as_i64().unwrap(), 5);
    assert_eq!(rows[0]["comment"], json!("great"));
}

#[tokio::test]
async fn feedback_requires_product_user_and_rating() {
    let app = spawn_app().await;

    let resp = client()
        .post(app.url("/feedback"))
        .form(&[("productId", "1"), ("userId", "1")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.text().await.unwrap().contains("Missing required parameters"));
}

#[tokio::test]
async fn placing_an_order_writes_one_header_and_all_lines() {
    let app = spawn_app().await;
    let c = client();
    let user_id = register(&app, &c, "alice").await;
    let first = add_product(&app, "Red Hat", "hat", "clothing").await;
    let second = add_product(&app, "Scarf", "scarf", "clothing").await;

    let items = json!([
        {"productId": first, "quantity": 2},
        {"productId": second, "quantity": 1},
    ])
    .to_string();

    let resp = c
        .post(app.url("/orders"))
        .form(&[
            ("userId", user_id.to_string()),
            ("totalAmount", "42.50".to_string()),
            ("items", items),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let order_id = body["orderId"].as_i64().unwrap();

    let (headers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(headers, 1);

    let (lines,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM order_items WHERE order_id = ?1")
            .bind(order_id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(lines, 2);

    // History only shows this user's orders
    let history: Value = c
        .get(app.url(&format!("/orders/{user_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["total_amount"], json!("42.50"));
}

#[tokio::test]
async fn order_history_is_gated_until_login() {
    let app = spawn_app().await;

    let resp = client().get(app.url("/orders/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let c = client();
    let user_id = register(&app, &c, "alice").await;
    let resp = c.get(app.url(&format!("/orders/{user_id}"))).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn order_placement_is_gated() {
    let app = spawn_app().await;

    let resp = client()
        .post(app.url("/orders"))
        .form(&[("userId", "1"), ("totalAmount", "1.00"), ("items", "[]")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_items_collection_is_a_validation_failure() {
    let app = spawn_app().await;
    let c = client();
    let user_id = register(&app, &c, "alice").await;

    let resp = c
        .post(app.url("/orders"))
        .form(&[
            ("userId", user_id.to_string()),
            ("totalAmount", "1.00".to_string()),
            ("items", "[]".to_string()),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_items_payload_is_a_server_error() {
    let app = spawn_app().await;
    let c = client();
    let user_id = register(&app, &c, "alice").await;

    let resp = c
        .post(app.url("/orders"))
        .form(&[
            ("userId", user_id.to_string()),
            ("totalAmount", "1.00".to_string()),
            ("items", "not-json".to_string()),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "Internal server error");
}

#[tokio::test]
async fn failed_order_line_leaves_no_partial_order() {
    let app = spawn_app().await;
    let c = client();
    let user_id = register(&app, &c, "alice").await;
    let valid = add_product(&app, "Red Hat", "hat", "clothing").await;

    let items = json!([
        {"productId": valid, "quantity": 1},
        {"productId": 9999, "quantity": 1},
    ])
    .to_string();

    let resp = c
        .post(app.url("/orders"))
        .form(&[
            ("userId", user_id.to_string()),
            ("totalAmount", "10.00".to_string()),
            ("items", items),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // All-or-nothing: the header rolled back with the failed line
    let (headers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(headers, 0);
    let (lines,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM order_items")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(lines, 0);
}

#[tokio::test]
async fn cart_add_is_gated_and_reads_back() {
    let app = spawn_app().await;
    let product_id = add_product(&app, "Red Hat", "hat", "clothing").await;

    // No session yet
    let resp = client()
        .post(app.url("/addToCart"))
        .form(&[("productId", product_id.to_string()), ("userId", "1".to_string())])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let c = client();
    let user_id = register(&app, &c, "alice").await;

    let resp = c
        .post(app.url("/addToCart"))
        .form(&[
            ("productId", product_id.to_string()),
            ("userId", user_id.to_string()),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert!(body["lastId"].as_i64().is_some());

    let cart: Value = c
        .get(app.url(&format!("/cart/{user_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let cart = cart.as_array().unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0]["quantity"].as_i64().unwrap(), 1);
    assert_eq!(cart[0]["product_id"].as_i64().unwrap(), product_id);
}
