use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use roster_service::{
    api::{self, state::RosterAppState},
    domain::{
        client::{Ack, MockStaffClient},
        message::MessageService,
        service::StaffService,
        views::DashboardWindow,
    },
    error::GatewayError,
};
use shared::types::{NewStaff, Staff};

fn build_test_app(mock_client: MockStaffClient) -> (Router, Arc<MessageService>) {
    let messages = Arc::new(MessageService::new());
    let state = Arc::new(RosterAppState {
        staff_service: Arc::new(StaffService::new(
            Arc::new(mock_client),
            Arc::clone(&messages),
        )),
        messages: Arc::clone(&messages),
        dashboard: DashboardWindow::default(),
    });
    (api::router(state), messages)
}

fn seeded() -> Vec<Staff> {
    (1..=10)
        .map(|id| Staff::new(id, format!("staff {id}")))
        .collect()
}

fn refused() -> GatewayError {
    GatewayError::Status {
        url: "http://backend/api/staffs".into(),
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
    }
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let body = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn root_redirects_to_dashboard() {
    let (app, _) = build_test_app(MockStaffClient::new());

    let res = app.oneshot(get("/")).await.unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], "/dashboard");
}

#[tokio::test]
async fn dashboard_shows_positions_one_to_four() {
    let mut client = MockStaffClient::new();
    client.expect_list().times(1).returning(|| Ok(seeded()));

    let (app, _) = build_test_app(client);
    let res = app.oneshot(get("/dashboard")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3, 4, 5]);
}

#[tokio::test]
async fn dashboard_with_backend_down_is_empty_not_an_error() {
    let mut client = MockStaffClient::new();
    client.expect_list().returning(|| Err(refused()));

    let (app, messages) = build_test_app(client);
    let res = app.oneshot(get("/dashboard")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!([]));
    assert_eq!(messages.len(), 1);
    assert!(messages.messages()[0].contains("list_staff failed"));
}

#[tokio::test]
async fn staff_list_returns_everything() {
    let mut client = MockStaffClient::new();
    client.expect_list().returning(|| Ok(seeded()));

    let (app, _) = build_test_app(client);
    let res = app.oneshot(get("/staffs")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn add_trims_name_and_returns_created() {
    let mut client = MockStaffClient::new();
    client
        .expect_create()
        .withf(|new_staff: &NewStaff| new_staff.name == "Dr Strange")
        .times(1)
        .returning(|new_staff| Ok(Staff::new(11, new_staff.name.clone())));

    let (app, _) = build_test_app(client);
    let res = app
        .oneshot(json_request("POST", "/staffs", json!({ "name": "  Dr Strange " })))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(body_json(res).await, json!({ "id": 11, "name": "Dr Strange" }));
}

#[tokio::test]
async fn add_blank_name_never_reaches_backend() {
    let mut client = MockStaffClient::new();
    client.expect_create().times(0);

    let (app, messages) = build_test_app(client);
    let res = app
        .oneshot(json_request("POST", "/staffs", json!({ "name": "   " })))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(messages.is_empty());
}

#[tokio::test]
async fn add_with_backend_down_is_bad_gateway() {
    let mut client = MockStaffClient::new();
    client.expect_create().returning(|_| Err(refused()));

    let (app, messages) = build_test_app(client);
    let res = app
        .oneshot(json_request("POST", "/staffs", json!({ "name": "Nobody" })))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert!(messages.messages()[0].contains("create_staff failed"));
}

#[tokio::test]
async fn delete_returns_backend_ack() {
    let mut client = MockStaffClient::new();
    client
        .expect_delete()
        .withf(|id| *id == 5)
        .returning(|_| Ok(Ack { status: 204 }));

    let (app, messages) = build_test_app(client);
    let res = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/staffs/5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({ "status": 204 }));
    assert_eq!(
        messages.messages(),
        vec!["StaffService: deleted staff id=5"]
    );
}

#[tokio::test]
async fn search_with_blank_term_skips_backend() {
    let mut client = MockStaffClient::new();
    client.expect_search().times(0);

    let (app, _) = build_test_app(client);

    for uri in ["/staffs/search", "/staffs/search?term=", "/staffs/search?term=%20%20"] {
        let res = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!([]));
    }
}

#[tokio::test]
async fn search_forwards_term() {
    let mut client = MockStaffClient::new();
    client
        .expect_search()
        .withf(|term: &str| term == "mag")
        .times(1)
        .returning(|_| Ok(vec![Staff::new(5, "Magneta"), Staff::new(9, "Magma")]));

    let (app, _) = build_test_app(client);
    let res = app.oneshot(get("/staffs/search?term=mag")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn detail_returns_staff() {
    let mut client = MockStaffClient::new();
    client
        .expect_find_by_id()
        .withf(|id| *id == 4)
        .returning(|id| Ok(Staff::new(id, "Celeritas")));

    let (app, _) = build_test_app(client);
    let res = app.oneshot(get("/detail/4")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({ "id": 4, "name": "Celeritas" }));
}

#[tokio::test]
async fn detail_of_missing_staff_is_404() {
    let mut client = MockStaffClient::new();
    client.expect_find_by_id().returning(|id| {
        Err(GatewayError::Status {
            url: format!("http://backend/api/staffs/{id}"),
            status: reqwest::StatusCode::NOT_FOUND,
        })
    });

    let (app, messages) = build_test_app(client);
    let res = app.oneshot(get("/detail/99")).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(messages.messages()[0].contains("find_staff_strict id=99 failed"));
}

#[tokio::test]
async fn save_updates_record_with_path_id() {
    let mut client = MockStaffClient::new();
    client
        .expect_update()
        .withf(|staff: &Staff| staff.id == 3 && staff.name == "Bombastic")
        .times(1)
        .returning(|_| Ok(Ack { status: 204 }));

    let (app, messages) = build_test_app(client);
    let res = app
        .oneshot(json_request("PUT", "/detail/3", json!({ "name": "Bombastic" })))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        messages.messages(),
        vec!["StaffService: updated staff id=3"]
    );
}

#[tokio::test]
async fn messages_view_lists_log() {
    let mut client = MockStaffClient::new();
    client.expect_list().returning(|| Ok(vec![]));

    let (app, _) = build_test_app(client);
    let res = app.clone().oneshot(get("/staffs")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.oneshot(get("/messages")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!(["StaffService: fetched staffs"]));
}
