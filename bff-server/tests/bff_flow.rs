//! End-to-end tests against an in-process stub upstream.
//!
//! A small axum app plays the system of record on an ephemeral port; the
//! BFF router is pointed at it and driven directly, no BFF port bound.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::ServiceExt;

use bff_server::{Config, Server, ServerState};

/// Unsorted availability tree with one absent price, as a sloppy
/// upstream might serve it
fn disponibilidad_fixture() -> Value {
    json!({
        "id_complejo": 1,
        "nombre_complejo": "Complejo Centro",
        "canchas": [{
            "id_cancha": 10,
            "nombre_cancha": "Cancha 1",
            "deporte": "padel",
            "dias": [{
                "fecha": "2026-03-01",
                "dia_semana": "domingo",
                "slots": [
                    {
                        "fecha": "2026-03-01",
                        "hora_inicio": "09:00",
                        "hora_fin": "10:00",
                        "disponible": true,
                        "id_cancha": 10,
                        "id_complejo": 1
                    },
                    {
                        "fecha": "2026-03-01",
                        "hora_inicio": "08:00",
                        "hora_fin": "09:00",
                        "disponible": false,
                        "precio": 15000.0,
                        "id_cancha": 10,
                        "id_complejo": 1
                    }
                ]
            }]
        }]
    })
}

fn upstream_app() -> Router {
    Router::new()
        .route(
            "/disponibilidad",
            get(|| async { Json(disponibilidad_fixture()) }),
        )
        .route(
            "/disponibilidad/verificar",
            get(|| async { Json(json!({ "disponible": true })) }),
        )
        .route(
            "/complejos/{id}",
            get(|| async {
                Json(json!({
                    "id_complejo": 1,
                    "id_dueno": 7,
                    "nombre": "Complejo Centro",
                    "direccion": "Av. Alemania 1234",
                    "activo": true,
                    "total_resenas": 12
                }))
            }),
        )
        // Courts endpoint is broken on purpose: the detail join must degrade
        .route(
            "/complejos/{id}/canchas",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "boom" })),
                )
            }),
        )
        .route(
            "/complejos/{id}/horarios",
            get(|| async {
                Json(json!([
                    {
                        "id_horario": 2,
                        "id_complejo": 1,
                        "dia_semana": "domingo",
                        "hora_apertura": "09:00",
                        "hora_cierre": "22:00"
                    },
                    {
                        "id_horario": 1,
                        "id_complejo": 1,
                        "dia_semana": "lunes",
                        "hora_apertura": "08:00",
                        "hora_cierre": "23:00"
                    }
                ]))
            }),
        )
        .route("/complejos/{id}/bloqueos", get(|| async { Json(json!([])) }))
        .route(
            "/reservas/{id}",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "detail": "Reserva no encontrada" })),
                )
            }),
        )
        .route(
            "/reservas",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "id_reserva": 501,
                    "id_usuario": body["id_usuario"],
                    "id_cancha": body["id_cancha"],
                    "inicio": body["inicio"],
                    "fin": body["fin"],
                    "estado": "PENDIENTE",
                    "precio_total": 12000.0,
                    "notas": body["notas"],
                    "fecha_creacion": "2026-03-01T09:00:00",
                    "fecha_actualizacion": "2026-03-01T09:00:00"
                }))
            }),
        )
}

/// Serve the stub upstream on an ephemeral port and return its base URL
async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let addr = listener.local_addr().expect("stub upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, upstream_app()).await.expect("serve stub upstream");
    });
    format!("http://{}", addr)
}

/// BFF router wired to the given upstream
fn bff_app(upstream_url: &str) -> Router {
    let config = Config::with_overrides(upstream_url, 0);
    Server::app(ServerState::initialize(&config))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .uri(uri)
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_reports_upstream() {
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["upstream"], upstream);
}

#[tokio::test]
async fn availability_tree_is_normalized() {
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = get_json(
        &app,
        "/api/disponibilidad?id_complejo=1&fecha_inicio=2026-03-01&fecha_fin=2026-03-01",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let slots = &body["data"]["canchas"][0]["dias"][0]["slots"];
    // Sorted by start time, upstream order was reversed
    assert_eq!(slots[0]["hora_inicio"], "08:00");
    assert_eq!(slots[1]["hora_inicio"], "09:00");
    // Absent price defaulted to zero
    assert_eq!(slots[1]["precio"], 0.0);
}

#[tokio::test]
async fn occupancy_matches_the_two_slot_day() {
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = get_json(
        &app,
        "/api/disponibilidad/ocupacion?id_complejo=1&fecha_inicio=2026-03-01&fecha_fin=2026-03-01",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["total_slots"], 2);
    assert_eq!(data["slots_ocupados"], 1);
    assert_eq!(data["slots_disponibles"], 1);
    assert_eq!(data["ocupacion_promedio"], 0.5);
    assert_eq!(data["ingresos_estimados"], 15000.0);
}

#[tokio::test]
async fn slot_verification_passes_through() {
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = get_json(
        &app,
        "/api/disponibilidad/verificar?id_cancha=10&fecha=2026-03-01&hora_inicio=09:00&hora_fin=10:00",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["disponible"], true);
}

#[tokio::test]
async fn slot_verification_fails_closed_when_upstream_is_down() {
    // Point the BFF at a dead upstream; the route still answers 200 false
    let mut config = Config::with_overrides("http://127.0.0.1:9", 0);
    config.upstream_timeout_ms = 2_000;
    let app = Server::app(ServerState::initialize(&config));

    let (status, body) = get_json(
        &app,
        "/api/disponibilidad/verificar?id_cancha=10&fecha=2026-03-01&hora_inicio=09:00&hora_fin=10:00",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["disponible"], false);
}

#[tokio::test]
async fn complex_detail_degrades_secondary_failures() {
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = get_json(&app, "/api/complejos/1/detalle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let data = &body["data"];
    assert_eq!(data["complejo"]["nombre"], "Complejo Centro");
    // The broken courts endpoint degraded to empty
    assert_eq!(data["canchas"], json!([]));
    // Schedules arrived and were put in week order, Monday first
    assert_eq!(data["horarios"][0]["dia_semana"], "lunes");
    assert_eq!(data["horarios"][1]["dia_semana"], "domingo");
}

#[tokio::test]
async fn missing_court_is_not_found_not_silent() {
    // The stub always answers with court 10; asking for court 999 must
    // surface the inconsistency instead of an empty result
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = get_json(
        &app,
        "/api/disponibilidad/cancha/999?fecha_inicio=2026-03-01&fecha_fin=2026-03-01",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn next_slots_honor_the_limit() {
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = get_json(&app, "/api/disponibilidad/proximos/10?limite=1").await;
    assert_eq!(status, StatusCode::OK);

    let slots = body["data"].as_array().expect("slot list");
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0]["disponible"], true);
}

#[tokio::test]
async fn upstream_status_is_preserved() {
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = get_json(&app, "/api/reservas/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "upstream error");
    assert_eq!(body["details"]["detail"], "Reserva no encontrada");
}

#[tokio::test]
async fn reservation_create_forwards_and_wraps() {
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = post_json(
        &app,
        "/api/reservas",
        json!({
            "id_usuario": 3,
            "id_cancha": 10,
            "inicio": "2026-03-01T09:00:00",
            "fin": "2026-03-01T10:00:00",
            "notas": null
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["id_reserva"], 501);
    assert_eq!(body["data"]["estado"], "PENDIENTE");
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_forwarding() {
    // No /resenas route on the stub: reaching it would 404, so a 400
    // proves validation ran first
    let upstream = spawn_upstream().await;
    let app = bff_app(&upstream);

    let (status, body) = post_json(
        &app,
        "/api/resenas",
        json!({ "id_usuario": 3, "id_complejo": 1, "calificacion": 9 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
}
