use std::sync::Arc;

use api::{AppConfig, AppState, HEALTH_TEXT, REQUEST_ID_HEADER, build_router};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use parts_catalog::PartsCatalog;
use serde_json::{Value, json};
use tower::ServiceExt;

const SESSION: &str = "projects/pc-parts-bot/agent/sessions/4f2c";

fn app() -> Router {
    let catalog = PartsCatalog::builtin().unwrap();
    build_router(Arc::new(AppState::new(catalog, AppConfig::default())))
}

async fn post_raw(body: Body, content_type: &str) -> (StatusCode, Value) {
    let res = app()
        .oneshot(
            Request::post("/webhook")
                .header(header::CONTENT_TYPE, content_type)
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();
    let status = res.status();
    assert!(res.headers().contains_key(REQUEST_ID_HEADER));
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(body: Value) -> Value {
    let (status, reply) = post_raw(Body::from(body.to_string()), "application/json").await;
    assert_eq!(status, StatusCode::OK);
    reply
}

fn request(intent: &str, parameters: Value) -> Value {
    json!({
        "responseId": "resp-1",
        "session": SESSION,
        "queryResult": {
            "queryText": "question",
            "parameters": parameters,
            "intent": { "displayName": intent }
        }
    })
}

fn text(reply: &Value) -> &str {
    reply["fulfillmentText"].as_str().unwrap()
}

fn contexts(reply: &Value) -> &Vec<Value> {
    reply["outputContexts"].as_array().unwrap()
}

#[tokio::test]
async fn health_check_reports_running() {
    let res = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], HEALTH_TEXT.as_bytes());
}

#[tokio::test]
async fn ram_description_and_sticky_context() {
    let reply = post(request(
        "Get_RAM_Details",
        json!({ "ram-model": "Fury Beast DDR4" }),
    ))
    .await;

    let t = text(&reply);
    assert!(t.contains("Kingston FURY Beast DDR4"));
    assert!(t.contains("3200 MHz"));
    assert!(t.contains("1.35 V"));

    let ctx = &contexts(&reply)[0];
    assert_eq!(ctx["parameters"]["ram-model"], "Fury Beast DDR4");
    assert_eq!(ctx["parameters"]["ram-detail"], Value::Null);
    assert_eq!(ctx["lifespanCount"], 5);
    assert_eq!(
        ctx["name"],
        format!("{SESSION}/contexts/ram_details_context")
    );
}

#[tokio::test]
async fn cpu_single_field_answer() {
    let reply = post(request(
        "Get_CPU_Details",
        json!({ "cpu-model": "i5-14500", "cpu_detail_type": "tdp" }),
    ))
    .await;

    assert_eq!(
        text(&reply),
        "For the Intel Core i5-14500, the TDP is: 65W TDP / 154W max."
    );
    assert_eq!(contexts(&reply)[0]["parameters"]["cpu_detail_type"], "tdp");
}

#[tokio::test]
async fn legacy_parameter_shapes_are_accepted() {
    let reply = post(request(
        "Get_RAM_Details",
        json!({ "Ram-model": ["  Fury Beast DDR4 "] }),
    ))
    .await;
    assert!(text(&reply).starts_with("The Kingston FURY Beast DDR4 is a"));
}

#[tokio::test]
async fn premium_build_lists_all_high_end_items() {
    let reply = post(request("Get_Build_Details", json!({ "build_type": "premium" }))).await;

    let t = text(&reply);
    assert!(t.starts_with("High-End Build (Total: ₱85,750)"));
    assert_eq!(t.lines().filter(|l| l.starts_with("- ")).count(), 8);
    assert!(contexts(&reply).is_empty());
}

#[tokio::test]
async fn unknown_build_type_lists_valid_tiers() {
    let reply = post(request("Get_Build_Details", json!({ "build_type": "workstation" }))).await;
    assert_eq!(
        text(&reply),
        "I don't have that build type. Please choose entry-level, mid-range, or high-end."
    );
}

#[tokio::test]
async fn unknown_intent_falls_back() {
    let reply = post(request("Get_Monitor_Details", json!({ "monitor-model": "x" }))).await;
    assert_eq!(
        text(&reply),
        "I'm sorry, I don't have information for that component type yet, or I didn't understand your request fully."
    );
    assert!(contexts(&reply).is_empty());
}

#[tokio::test]
async fn unknown_model_creates_no_context() {
    let reply = post(request("Get_GPU_Details", json!({ "gpu-model": "RTX 9999 Ti" }))).await;
    assert_eq!(
        text(&reply),
        "Sorry, I couldn't find details for the graphics card \"RTX 9999 Ti\"."
    );
    assert!(contexts(&reply).is_empty());
}

#[tokio::test]
async fn context_carry_over_matches_fresh_request() {
    let fresh = post(request(
        "Get_PSU_Details",
        json!({ "psu-model": "RM850x", "psu-detail": "wattage" }),
    ))
    .await;

    let mut follow_up = request("Get_PSU_Details", json!({ "psu-detail": "wattage" }));
    follow_up["queryResult"]["outputContexts"] = json!([
        {
            "name": format!("{SESSION}/contexts/cpu_details_context"),
            "lifespanCount": 4,
            "parameters": { "cpu-model": "i5-14500" }
        },
        {
            "name": format!("{SESSION}/contexts/psu_details_context"),
            "lifespanCount": 4,
            "parameters": { "psu-model": "RM850x", "psu-detail": null }
        }
    ]);
    let carried = post(follow_up).await;

    assert_eq!(carried, fresh);
}

#[tokio::test]
async fn compatibility_comparison_and_cpu_list() {
    let compare = post(request(
        "Get_Compatibility_Details",
        json!({ "motherboard-form-factor": "ATX", "compare-form-factor": "micro atx" }),
    ))
    .await;
    assert!(text(&compare).starts_with("The primary difference between ATX and mATX is size."));
    assert!(contexts(&compare).is_empty());

    let cpus = post(request(
        "Get_Compatibility_Details",
        json!({ "cpu-socket": "AM5", "subject": "cpu-compatibility" }),
    ))
    .await;
    assert!(text(&cpus).starts_with("The AM5 socket is compatible with the following CPUs:"));
}

#[tokio::test]
async fn malformed_payloads_get_the_invalid_text() {
    let (status, reply) = post_raw(Body::from("this is not json"), "application/json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&reply), "Invalid request payload.");

    let (status, reply) = post_raw(Body::from("{}"), "text/plain").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text(&reply), "Invalid request payload.");

    let reply = post(json!({ "session": SESSION, "queryResult": { "parameters": {} } })).await;
    assert_eq!(text(&reply), "Invalid request payload.");
}
