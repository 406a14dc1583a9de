use super::*;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use shared::domain::Priority;
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct CaptureState {
    tx: Arc<Mutex<Option<oneshot::Sender<(Option<String>, Value)>>>>,
}

fn prediction_body() -> Value {
    json!({
        "success": true,
        "predictions": {
            "is_major_disaster": true,
            "major_probability": 87.5,
            "predicted_damage_index": 0.8123,
            "predicted_response_time_hours": 6.4
        },
        "emergency_response": {
            "priority": "CRITICAL",
            "priority_level": 5,
            "alert_level": "LEVEL 5 - MAXIMUM ALERT",
            "resources": {
                "personnel": 500,
                "medical_teams": 20,
                "rescue_units": 30,
                "temporary_shelters": 30000,
                "equipment": "Bulldozers"
            },
            "evacuation": {
                "recommended": true,
                "people_to_evacuate": 35000,
                "evacuation_centers": 70,
                "vehicles_needed": 700
            },
            "action_items": ["Deploy rescue teams", "Open shelters"]
        }
    })
}

async fn handle_predict(
    State(state): State<CaptureState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Json<Value> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send((content_type, payload));
    }
    Json(prediction_body())
}

async fn spawn_server(app: Router) -> Result<String, std::io::Error> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

async fn spawn_prediction_server() -> (String, oneshot::Receiver<(Option<String>, Value)>) {
    let (tx, rx) = oneshot::channel();
    let state = CaptureState {
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/api/predict", post(handle_predict))
        .with_state(state);
    let url = spawn_server(app).await.expect("spawn server");
    (url, rx)
}

fn flood_scenario() -> ScenarioInput {
    ScenarioInput {
        disaster_type: "Flood".into(),
        location: "Coastal-A".into(),
        latitude: Some(9.9),
        longitude: Some(124.1),
        severity_level: Some(9),
        affected_population: Some(50000),
        economic_loss: Some(2_000_000.0),
    }
}

#[test]
fn rejects_unparseable_base_url() {
    let err = PredictionClient::new("not a url").expect_err("must fail");
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    assert!(err.request_error().is_none());
}

#[test]
fn trims_trailing_slash_from_base_url() {
    let client = PredictionClient::new("http://localhost:5000/").expect("client");
    assert_eq!(client.base_url(), "http://localhost:5000");
    assert_eq!(
        client.endpoint(PREDICT_PATH),
        "http://localhost:5000/api/predict"
    );
}

#[tokio::test]
async fn predict_posts_snake_case_json_and_decodes_result() {
    let (url, payload_rx) = spawn_prediction_server().await;
    let client = PredictionClient::new(url).expect("client");

    let result = client.predict(&flood_scenario()).await.expect("predict");

    let (content_type, payload) = payload_rx.await.expect("payload");
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        payload,
        json!({
            "disaster_type": "Flood",
            "location": "Coastal-A",
            "latitude": 9.9,
            "longitude": 124.1,
            "severity_level": 9,
            "affected_population": 50000,
            "economic_loss": 2000000.0
        })
    );
    assert_eq!(result.emergency_response.priority, Priority::Critical);
    assert_eq!(result.emergency_response.action_items.len(), 2);
}

#[tokio::test]
async fn predict_surfaces_non_success_status_with_service_detail() {
    let app = Router::new().route(
        "/api/predict",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "float() argument must be a number" })),
            )
        }),
    );
    let url = spawn_server(app).await.expect("spawn server");
    let client = PredictionClient::new(url).expect("client");

    let err = client
        .predict(&ScenarioInput::default())
        .await
        .expect_err("must fail");

    match err {
        ClientError::PredictionRequestFailed(RequestError::Status { status, detail }) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(detail.as_deref(), Some("float() argument must be a number"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn predict_fails_on_internal_server_error_without_body() {
    let app = Router::new().route(
        "/api/predict",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
    );
    let url = spawn_server(app).await.expect("spawn server");
    let client = PredictionClient::new(url).expect("client");

    let err = client
        .predict(&flood_scenario())
        .await
        .expect_err("must fail");

    assert!(matches!(
        err,
        ClientError::PredictionRequestFailed(RequestError::Status { status, detail: None })
            if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
}

#[tokio::test]
async fn predict_fails_on_malformed_body() {
    let app = Router::new().route(
        "/api/predict",
        post(|| async { Json(json!({ "predictions": "nope" })) }),
    );
    let url = spawn_server(app).await.expect("spawn server");
    let client = PredictionClient::new(url).expect("client");

    let err = client
        .predict(&flood_scenario())
        .await
        .expect_err("must fail");

    assert!(matches!(
        err,
        ClientError::PredictionRequestFailed(RequestError::Decode(_))
    ));
}

#[tokio::test]
async fn predict_fails_on_transport_error() {
    // Bind then drop to get a port nobody is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

    let client = PredictionClient::new(format!("http://{addr}")).expect("client");
    let err = client
        .predict(&flood_scenario())
        .await
        .expect_err("must fail");

    assert!(matches!(
        err,
        ClientError::PredictionRequestFailed(RequestError::Transport(_))
    ));
}

#[tokio::test]
async fn reference_data_preserves_service_order() {
    let app = Router::new().route(
        "/api/disaster-types",
        get(|| async {
            Json(json!({
                "disaster_types": ["Wildfire", "Earthquake", "Flood"],
                "locations": ["Coastal-A", "Alpine-B"]
            }))
        }),
    );
    let url = spawn_server(app).await.expect("spawn server");
    let client = PredictionClient::new(url).expect("client");

    let data = client.reference_data().await.expect("reference data");
    assert_eq!(data.disaster_types, vec!["Wildfire", "Earthquake", "Flood"]);
    assert_eq!(data.locations, vec!["Coastal-A", "Alpine-B"]);
}

#[tokio::test]
async fn reference_data_failure_is_classified() {
    let app = Router::new().route(
        "/api/disaster-types",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE.into_response() }),
    );
    let url = spawn_server(app).await.expect("spawn server");
    let client = PredictionClient::new(url).expect("client");

    let err = client.reference_data().await.expect_err("must fail");
    assert!(matches!(err, ClientError::ReferenceLoadFailed(_)));
}

#[tokio::test]
async fn model_info_and_status_use_their_own_error_kinds() {
    let app = Router::new()
        .route("/api/model-info", get(|| async { Json(json!({ "dataset_size": "lots" })) }))
        .route(
            "/api/status",
            get(|| async {
                Json(json!({
                    "status": "online",
                    "message": "Disaster Prediction API is running",
                    "version": "1.0.0",
                    "training_date": "2024-01-15",
                    "model_accuracy": "91.20%"
                }))
            }),
        );
    let url = spawn_server(app).await.expect("spawn server");
    let client = PredictionClient::new(url).expect("client");

    let err = client.model_info().await.expect_err("must fail");
    assert!(matches!(
        err,
        ClientError::ModelInfoFailed(RequestError::Decode(_))
    ));

    let status = client.service_status().await.expect("status");
    assert_eq!(status.status, "online");
    assert_eq!(status.version, "1.0.0");
}
