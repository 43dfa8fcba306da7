use axum::{
    Router,
    body::{Body, Bytes},
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use tower::ServiceExt;
use uuid::Uuid;

use crate::modules::users::core::user::User;
use crate::shell::http::router;
use crate::tests::fixtures::app::make_test_state;

#[fixture]
fn app() -> Router {
    let (state, _) = make_test_state();
    router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Bytes) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
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
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

fn json(bytes: &Bytes) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

async fn list(app: &Router) -> Vec<User> {
    let (status, bytes) = send(app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_walk_a_user_through_create_read_update_delete(app: Router) {
    let (status, bytes) = send(
        &app,
        Method::POST,
        "/users",
        Some(r#"{"id":"1","name":"Ana"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json(&bytes), serde_json::json!({ "id": "1", "name": "Ana" }));

    let (status, bytes) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes), serde_json::json!({ "id": "1", "name": "Ana" }));

    let (status, bytes) = send(
        &app,
        Method::PUT,
        "/users/1",
        Some(r#"{"id":"ignored","name":"Ana Maria"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes), serde_json::json!({ "id": "1", "name": "Ana Maria" }));

    let (status, bytes) = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (status, _) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case::plain("1", "Ana")]
#[case::unicode_name("7", "Zoë Ñúñez")]
#[case::empty_name("empty", "")]
#[case::url_safe_id("a-b_c.d~e", "Dotted")]
#[tokio::test]
async fn it_should_return_a_created_user_unchanged(
    app: Router,
    #[case] id: &str,
    #[case] name: &str,
) {
    let user = User::new(id, name);
    let payload = serde_json::to_string(&user).unwrap();

    let (status, _) = send(&app, Method::POST, "/users", Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, bytes) = send(&app, Method::GET, &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<User>(&bytes).unwrap(), user);
}

#[rstest]
#[case::get(Method::GET, None)]
#[case::put(Method::PUT, Some(r#"{"id":"ghost","name":"Ghost"}"#))]
#[case::delete(Method::DELETE, None)]
#[tokio::test]
async fn it_should_return_404_for_unknown_ids_and_leave_the_store_unchanged(
    app: Router,
    #[case] method: Method,
    #[case] body: Option<&str>,
) {
    send(&app, Method::POST, "/users", Some(r#"{"id":"1","name":"Ana"}"#)).await;

    let (status, _) = send(&app, method, "/users/ghost", body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(list(&app).await, vec![User::new("1", "Ana")]);
}

#[rstest]
#[tokio::test]
async fn it_should_return_404_on_a_repeated_delete(app: Router) {
    send(&app, Method::POST, "/users", Some(r#"{"id":"1","name":"Ana"}"#)).await;

    let (first, _) = send(&app, Method::DELETE, "/users/1", None).await;
    let (second, _) = send(&app, Method::DELETE, "/users/1", None).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_store_an_update_under_the_path_id(app: Router) {
    send(&app, Method::POST, "/users", Some(r#"{"id":"1","name":"Ana"}"#)).await;
    send(&app, Method::POST, "/users", Some(r#"{"id":"2","name":"Bea"}"#)).await;

    let body = Some(r#"{"id":"2","name":"Cid"}"#);
    let (status, _) = send(&app, Method::PUT, "/users/1", body).await;
    assert_eq!(status, StatusCode::OK);

    let mut users = list(&app).await;
    users.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(users, vec![User::new("1", "Cid"), User::new("2", "Bea")]);
}

#[rstest]
#[tokio::test]
async fn it_should_list_the_remaining_users_after_a_delete(app: Router) {
    let n = 5;
    for i in 0..n {
        let user = User::new(i.to_string(), format!("User {i}"));
        let payload = serde_json::to_string(&user).unwrap();
        let (status, _) = send(&app, Method::POST, "/users", Some(&payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = send(&app, Method::DELETE, "/users/3", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let users = list(&app).await;
    assert_eq!(users.len(), n - 1);
    assert!(users.iter().all(|u| u.id != "3"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_keep_every_concurrent_create(app: Router) {
    let m = 100;
    let tasks: Vec<_> = (0..m)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let user = User::new(Uuid::now_v7().to_string(), "Concurrent");
                let payload = serde_json::to_string(&user).unwrap();
                send(&app, Method::POST, "/users", Some(&payload)).await.0
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::CREATED);
    }

    assert_eq!(list(&app).await.len(), m);
}
