//! HTTP-level integration tests for site-owned records: objects, repairs,
//! maintenance plans and work logs.

mod common;

use axum::http::StatusCode;
use common::{body_json, count_rows, get, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

fn object_body(vsp_id: i64, name: &str) -> Value {
    json!({
        "name": name,
        "type": "room",
        "area_size": "40",
        "unit": "sqm",
        "vsp_id": vsp_id
    })
}

fn repair_body(vsp_id: i64) -> Value {
    json!({
        "description": "Replace floor tiles",
        "date": "2024-05-01",
        "area_size": 12.5,
        "status": "planned",
        "vsp_id": vsp_id
    })
}

fn plan_body(vsp_id: i64) -> Value {
    json!({
        "description": "HVAC filter change",
        "frequency": "monthly",
        "next_maintenance": "2024-06-01",
        "vsp_id": vsp_id
    })
}

fn log_body(vsp_id: i64) -> Value {
    json!({
        "description": "Windows cleaned",
        "date": "2024-04-30",
        "vsp_id": vsp_id
    })
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_object_scenario(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/vsp",
        json!({"address": "12 Main St", "office_number": "101"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let site = body_json(response).await;
    assert_eq!(site["id"], 1);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/objects", object_body(1, "Lobby")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let object = body_json(response).await;
    assert_eq!(object["id"], 1);
    assert_eq!(object["vsp_id"], 1);
    assert_eq!(object["name"], "Lobby");
    assert_eq!(object["type"], "room");
    assert_eq!(object["area_size"], 40.0);
    assert_eq!(object["unit"], "sqm");
    assert!(object["characteristics"].is_null());
    assert_eq!(object["created_at"], object["updated_at"]);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/vsp/1/objects").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([object]));

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/objects", object_body(999, "Ghost")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(count_rows(&pool, "objects").await, 1);
}

// ---------------------------------------------------------------------------
// Creates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_repair(pool: PgPool) {
    let vsp_id = common::create_vsp(&pool, "A").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/repairs", repair_body(vsp_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["status"], "planned");
    assert_eq!(json["date"], "2024-05-01");
    assert_eq!(json["area_size"], 12.5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_maintenance_plan(pool: PgPool) {
    let vsp_id = common::create_vsp(&pool, "A").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/maintenance_plans", plan_body(vsp_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["frequency"], "monthly");
    assert_eq!(json["next_maintenance"], "2024-06-01");
    assert_eq!(json["vsp_id"], vsp_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_work_log(pool: PgPool) {
    let vsp_id = common::create_vsp(&pool, "A").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/work_logs", log_body(vsp_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["description"], "Windows cleaned");
    assert_eq!(json["date"], "2024-04-30");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_id_alias_is_accepted(pool: PgPool) {
    let vsp_id = common::create_vsp(&pool, "A").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/work_logs",
        json!({"description": "Checked", "date": "2024-01-02", "site_id": vsp_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["vsp_id"], vsp_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_nested_create_uses_path_parent(pool: PgPool) {
    let first = common::create_vsp(&pool, "A").await;
    let second = common::create_vsp(&pool, "B").await;

    // Body names the first site; the path wins.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/vsp/{second}/repairs"),
        repair_body(first),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["vsp_id"], second);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/vsp/{second}/objects"),
        json!({"name": "Hall", "type": "room", "area_size": 10, "unit": "sqm"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Parent validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_child_create_with_unknown_parent_returns_404(pool: PgPool) {
    common::create_vsp(&pool, "A").await;

    let cases = [
        ("/objects", object_body(999, "Ghost")),
        ("/repairs", repair_body(999)),
        ("/maintenance_plans", plan_body(999)),
        ("/work_logs", log_body(999)),
    ];

    for (uri, body) in cases {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, uri, body).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], "Vsp with id 999 not found");
    }

    for table in ["objects", "repairs", "maintenance_plans", "work_logs", "photos", "maps"] {
        assert_eq!(count_rows(&pool, table).await, 0, "{table}");
    }
    assert_eq!(count_rows(&pool, "vsp").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_nested_create_with_unknown_parent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/vsp/42/work_logs", log_body(1)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(count_rows(&pool, "work_logs").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_child_list_with_unknown_parent_returns_404(pool: PgPool) {
    for collection in [
        "objects",
        "repairs",
        "maintenance_plans",
        "work_logs",
        "photos",
        "maps",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/vsp/77/{collection}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{collection}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_parent_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/work_logs",
        json!({"description": "Orphan", "date": "2024-01-01"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(count_rows(&pool, "work_logs").await, 0);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_only_records_of_that_site(pool: PgPool) {
    let a = common::create_vsp(&pool, "A").await;
    let b = common::create_vsp(&pool, "B").await;

    for (vsp_id, name) in [(a, "A1"), (b, "B1"), (a, "A2"), (b, "B2"), (b, "B3")] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/objects", object_body(vsp_id, name)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/repairs", repair_body(vsp_id)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/vsp/{a}/objects")).await).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A1", "A2"]);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/vsp/{b}/repairs")).await).await;
    let repairs = json.as_array().unwrap();
    assert_eq!(repairs.len(), 3);
    assert!(repairs.iter().all(|r| r["vsp_id"] == b));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_site_without_children_is_empty(pool: PgPool) {
    let vsp_id = common::create_vsp(&pool, "A").await;

    for collection in ["objects", "repairs", "maintenance_plans", "work_logs"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/vsp/{vsp_id}/{collection}")).await;
        assert_eq!(response.status(), StatusCode::OK, "{collection}");
        assert_eq!(body_json(response).await, json!([]));
    }
}
