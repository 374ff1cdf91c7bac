//! HTTP-level integration tests for the project moderation workflow:
//! the pending queue, approve/reject/verify/unverify transitions, and
//! RBAC enforcement on the admin surface.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get, get_auth, post_auth, post_json_auth, token_for, ADMIN_ROLE_ID,
    MEMBER_ROLE_ID,
};
use scout_db::models::category::CreateCategory;
use scout_db::repositories::{CategoryRepo, ProjectRepo};
use sqlx::PgPool;

/// Seed a category and a member-submitted project; returns the project id.
async fn seed_submission(pool: &PgPool, submitter_token: &str) -> i64 {
    let input = CreateCategory {
        slug: "wallets".to_string(),
        name: "Wallets".to_string(),
        description: None,
    };
    CategoryRepo::create(pool, &input)
        .await
        .expect("category creation should succeed");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Foo",
        "description": "d",
        "website_url": "https://x",
        "category_slug": "wallets",
    });
    let response = post_json_auth(app, "/api/v1/projects", submitter_token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Full lifecycle: submit -> pending queue -> approve -> public catalog.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_approve_lifecycle(pool: PgPool) {
    let (member, _) = common::create_user(&pool, "member", MEMBER_ROLE_ID).await;
    let (admin, _) = common::create_user(&pool, "admin", ADMIN_ROLE_ID).await;
    let member_token = token_for(&member, "member");
    let admin_token = token_for(&admin, "admin");

    let id = seed_submission(&pool, &member_token).await;

    // The admin queue contains the submission.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/projects/pending", &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["id"], id);

    // Approve it.
    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, &format!("/api/v1/admin/projects/{id}/approve"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["approved"], true);
    assert_eq!(json["data"]["pending"], false);

    // Now listed publicly.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/projects").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["id"], id);
    assert_eq!(json["data"][0]["approved"], true);

    // And the queue is empty again.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/projects/pending", &admin_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

/// Approve then reject: the last transition wins, no history.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_then_reject_last_wins(pool: PgPool) {
    let (member, _) = common::create_user(&pool, "member", MEMBER_ROLE_ID).await;
    let (admin, _) = common::create_user(&pool, "admin", ADMIN_ROLE_ID).await;
    let admin_token = token_for(&admin, "admin");
    let id = seed_submission(&pool, &token_for(&member, "member")).await;

    let app = common::build_test_app(pool.clone());
    post_auth(app, &format!("/api/v1/admin/projects/{id}/approve"), &admin_token).await;

    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, &format!("/api/v1/admin/projects/{id}/reject"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["pending"], false);
    assert_eq!(json["data"]["approved"], false);

    // Re-approving after rejection also works; transitions are valid from
    // any state.
    let app = common::build_test_app(pool);
    let response = post_auth(app, &format!("/api/v1/admin/projects/{id}/approve"), &admin_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["approved"], true);
}

/// Approving twice is a silent no-op the second time.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_is_idempotent(pool: PgPool) {
    let (member, _) = common::create_user(&pool, "member", MEMBER_ROLE_ID).await;
    let (admin, _) = common::create_user(&pool, "admin", ADMIN_ROLE_ID).await;
    let admin_token = token_for(&admin, "admin");
    let id = seed_submission(&pool, &token_for(&member, "member")).await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response =
            post_auth(app, &format!("/api/v1/admin/projects/{id}/approve"), &admin_token).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["approved"], true);
        assert_eq!(json["data"]["pending"], false);
    }
}

/// Verifying a pending project is a 409 and changes nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_requires_approval(pool: PgPool) {
    let (member, _) = common::create_user(&pool, "member", MEMBER_ROLE_ID).await;
    let (admin, _) = common::create_user(&pool, "admin", ADMIN_ROLE_ID).await;
    let admin_token = token_for(&admin, "admin");
    let id = seed_submission(&pool, &token_for(&member, "member")).await;

    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, &format!("/api/v1/admin/projects/{id}/verify"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let project = ProjectRepo::find_by_id(&pool, id)
        .await
        .expect("lookup should succeed")
        .expect("project should exist");
    assert!(!project.verified);
    assert!(project.pending);
}

/// Verify twice on an approved project leaves `verified == true`; unverify
/// clears it.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_idempotent_and_unverify(pool: PgPool) {
    let (member, _) = common::create_user(&pool, "member", MEMBER_ROLE_ID).await;
    let (admin, _) = common::create_user(&pool, "admin", ADMIN_ROLE_ID).await;
    let admin_token = token_for(&admin, "admin");
    let id = seed_submission(&pool, &token_for(&member, "member")).await;

    let app = common::build_test_app(pool.clone());
    post_auth(app, &format!("/api/v1/admin/projects/{id}/approve"), &admin_token).await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response =
            post_auth(app, &format!("/api/v1/admin/projects/{id}/verify"), &admin_token).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["verified"], true);
    }

    let app = common::build_test_app(pool);
    let response = post_auth(app, &format!("/api/v1/admin/projects/{id}/unverify"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["verified"], false);
    assert_eq!(json["data"]["approved"], true, "unverify must not touch approval");
}

/// Rejecting a verified project strips the badge.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_clears_verified(pool: PgPool) {
    let (member, _) = common::create_user(&pool, "member", MEMBER_ROLE_ID).await;
    let (admin, _) = common::create_user(&pool, "admin", ADMIN_ROLE_ID).await;
    let admin_token = token_for(&admin, "admin");
    let id = seed_submission(&pool, &token_for(&member, "member")).await;

    let app = common::build_test_app(pool.clone());
    post_auth(app, &format!("/api/v1/admin/projects/{id}/approve"), &admin_token).await;
    let app = common::build_test_app(pool.clone());
    post_auth(app, &format!("/api/v1/admin/projects/{id}/verify"), &admin_token).await;

    let app = common::build_test_app(pool);
    let response = post_auth(app, &format!("/api/v1/admin/projects/{id}/reject"), &admin_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["approved"], false);
    assert_eq!(json["data"]["verified"], false);
}

/// Transitions on an unknown project id are 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_transition_unknown_project(pool: PgPool) {
    let (admin, _) = common::create_user(&pool, "admin", ADMIN_ROLE_ID).await;
    let admin_token = token_for(&admin, "admin");

    let app = common::build_test_app(pool);
    let response = post_auth(app, "/api/v1/admin/projects/9999/approve", &admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Non-admin callers of the admin surface get 403 and no state changes.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_admin_forbidden(pool: PgPool) {
    let (member, _) = common::create_user(&pool, "member", MEMBER_ROLE_ID).await;
    let member_token = token_for(&member, "member");
    let id = seed_submission(&pool, &member_token).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/projects/pending", &member_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response =
        post_auth(app, &format!("/api/v1/admin/projects/{id}/approve"), &member_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let project = ProjectRepo::find_by_id(&pool, id)
        .await
        .expect("lookup should succeed")
        .expect("project should exist");
    assert!(project.pending, "forbidden call must not change state");
    assert!(!project.approved);

    // Unauthenticated is 401, not 403.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/projects/pending").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
