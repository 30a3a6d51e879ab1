use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::config::SimulationConfig;
use crate::workflows::selection::projection::{AxisKind, AxisSpec};
use crate::workflows::selection::scoring::ScoringEngine;
use crate::workflows::selection::service::{ProjectionRequest, SelectionService};

fn post_json(uri: &str, body: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn score_route_returns_total_audit_and_ceilings() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/selection/score",
            serde_json::to_value(couple_profile()).expect("profile json"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], json!(521));
    assert_eq!(payload["audit"]["total_qn"], json!(151));
    assert_eq!(payload["ceilings"]["age"], json!(100));
}

#[tokio::test]
async fn score_route_accepts_human_labels() {
    let body = json!({
        "age": 35,
        "education": "Bach 2y",
        "general_experience_months": 36,
        "french": { "listening": 7, "speaking": 7, "reading": 7, "writing": 7 },
        "shortage_diagnosis": "None",
        "shortage_occupation_months": 12,
        "quebec_experience_months": 12,
        "validated_job_offer": "Outside Montreal",
        "regional_ties": { "residence_months": 36, "work_months": 12 },
        "has_accompanying_spouse": true,
        "spouse": {
            "age": 35,
            "education": "Masters",
            "quebec_experience_months": 12,
            "french": { "speaking": 7 }
        }
    });

    let response = router()
        .oneshot(post_json("/api/v1/selection/score", body))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], json!(521));
}

#[tokio::test]
async fn projection_route_returns_matrix_and_signals() {
    let request = ProjectionRequest {
        baseline: couple_profile(),
        x_axis: AxisSpec::new(AxisKind::MonthsElapsed, vec![0, 12, 24]),
        y_axis: AxisSpec::new(AxisKind::ApplicantFrenchTarget, vec![7]),
        today: Some(today()),
        target_score: Some(600),
    };

    let response = router()
        .oneshot(post_json(
            "/api/v1/selection/projection",
            serde_json::to_value(&request).expect("request json"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["x_values"], json!([0, 12, 24]));
    assert_eq!(payload["cells"][0][1]["score"], json!(599));
    assert_eq!(payload["cells"][0][2]["date_label"], json!("Jan 2028"));
    assert_eq!(payload["max_score"], json!(658));
    assert_eq!(payload["signals"]["target_reachable"], json!(true));
}

#[tokio::test]
async fn projection_route_rejects_oversized_axis() {
    let service = Arc::new(SelectionService::new(
        ScoringEngine::default(),
        SimulationConfig {
            target_score: 600,
            max_axis_values: 3,
        },
    ));
    let request = ProjectionRequest {
        baseline: couple_profile(),
        x_axis: AxisSpec::new(AxisKind::MonthsElapsed, vec![0, 6, 12, 18]),
        y_axis: AxisSpec::new(AxisKind::ApplicantFrenchTarget, vec![7]),
        today: Some(today()),
        target_score: None,
    };

    let response = crate::workflows::selection::router::projection_handler(
        State(service),
        axum::Json(request),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("at most 3"));
}

#[tokio::test]
async fn draws_route_lists_rounds_newest_first() {
    let response = router()
        .oneshot(
            axum::http::Request::get("/api/v1/selection/draws")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["rounds"].as_array().map(Vec::len), Some(13));
    assert_eq!(payload["rounds"][0]["date"], json!("2025-12-04"));
    assert_eq!(payload["rounds"][0]["cutoff"], json!(781));
    assert_eq!(payload["draw_count"], json!(10));
}

#[tokio::test]
async fn french_route_converts_scores() {
    let body = json!({
        "test": "tef-canada",
        "scores": { "listening": 415, "speaking": 460, "reading": 300, "writing": 250 }
    });

    let response = router()
        .oneshot(post_json("/api/v1/selection/french", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["levels"],
        json!({ "listening": 7, "speaking": 8, "reading": 5, "writing": 3 })
    );
    assert_eq!(payload["skills"][0]["cefr"], json!("B2"));
    assert_eq!(payload["skills"][0]["progress"]["next_threshold"], json!(450));
}
