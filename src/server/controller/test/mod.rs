use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

use crate::server::{
    config::Config, router::router, state::AppState, util::password::hash_password,
};


const PASSWORD: &str = "P@ssw0rd!";

/// Builds the full application over the test database with cookie sessions.
async fn app(test: &mut TestContext) -> Router {
    let store = test.session_store().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    router()
        .with_state(AppState::new(db, Config::for_tests()))
        .layer(SessionManagerLayer::new(store).with_secure(false))
}

fn request(method: Method, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost")
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    request(method, uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn header_value(response: &Response<Body>, name: header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .map(|value| value.to_str().unwrap().to_string())
}

/// Logs in and returns the `Cookie` header value for later requests.
async fn login(app: &Router, user_name: &str) -> String {
    let response = send(
        app,
        json_request(
            Method::POST,
            "/api/auth/login",
            &json!({ "userName": user_name, "password": PASSWORD }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = header_value(&response, header::SET_COOKIE).unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

/// Creates a user with the shared test password.
async fn create_user(db: &sea_orm::DatabaseConnection) -> entity::camp_user::Model {
    factory::user::UserFactory::new(db)
        .password_hash(hash_password(PASSWORD))
        .build()
        .await
        .unwrap()
}

fn speaker_body() -> Value {
    json!({
        "name": "Shawn Wildermuth",
        "companyName": "Wilder Minds",
        "bio": "Shawn has been building software for over twenty years",
    })
}

fn talk_body() -> Value {
    json!({
        "title": "Versioning REST APIs",
        "abstract": "How to evolve an API without breaking its clients",
        "category": "Web Development",
    })
}
