//! HTTP-level integration tests for project submission, the public
//! catalog, and ownership checks on edit/delete.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth, token_for,
    ADMIN_ROLE_ID, MEMBER_ROLE_ID,
};
use scout_db::models::category::CreateCategory;
use scout_db::repositories::CategoryRepo;
use sqlx::PgPool;

/// Seed a category directly in the database.
async fn seed_category(pool: &PgPool, slug: &str, name: &str) {
    let input = CreateCategory {
        slug: slug.to_string(),
        name: name.to_string(),
        description: None,
    };
    CategoryRepo::create(pool, &input)
        .await
        .expect("category creation should succeed");
}

/// Submit a project via the API and return its JSON representation.
async fn submit_project(app: axum::Router, token: &str, name: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "name": name,
        "description": "A test submission",
        "website_url": "https://example.org",
        "category_slug": "wallets",
    });
    let response = post_json_auth(app, "/api/v1/projects", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// A new submission starts pending, unapproved, unverified.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submission_starts_pending(pool: PgPool) {
    seed_category(&pool, "wallets", "Wallets").await;
    let (user, _) = common::create_user(&pool, "submitter", MEMBER_ROLE_ID).await;
    let token = token_for(&user, "member");

    let app = common::build_test_app(pool);
    let project = submit_project(app, &token, "Foo").await;

    assert_eq!(project["pending"], true);
    assert_eq!(project["approved"], false);
    assert_eq!(project["verified"], false);
    assert_eq!(project["user_id"], user.id);
}

/// Submission requires authentication.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submission_requires_auth(pool: PgPool) {
    seed_category(&pool, "wallets", "Wallets").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Foo",
        "description": "d",
        "website_url": "https://example.org",
        "category_slug": "wallets",
    });
    let response = common::post_json(app, "/api/v1/projects", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Submitting into an unknown category is a validation error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submission_unknown_category(pool: PgPool) {
    let (user, _) = common::create_user(&pool, "submitter", MEMBER_ROLE_ID).await;
    let token = token_for(&user, "member");
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Foo",
        "description": "d",
        "website_url": "https://example.org",
        "category_slug": "nonexistent",
    });
    let response = post_json_auth(app, "/api/v1/projects", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A description over 200 characters is rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submission_description_too_long(pool: PgPool) {
    seed_category(&pool, "wallets", "Wallets").await;
    let (user, _) = common::create_user(&pool, "submitter", MEMBER_ROLE_ID).await;
    let token = token_for(&user, "member");
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Foo",
        "description": "d".repeat(201),
        "website_url": "https://example.org",
        "category_slug": "wallets",
    });
    let response = post_json_auth(app, "/api/v1/projects", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The public catalog hides pending projects, by list and by id.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pending_projects_invisible_publicly(pool: PgPool) {
    seed_category(&pool, "wallets", "Wallets").await;
    let (user, _) = common::create_user(&pool, "submitter", MEMBER_ROLE_ID).await;
    let token = token_for(&user, "member");

    let app = common::build_test_app(pool.clone());
    let project = submit_project(app, &token, "Hidden").await;
    let id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner still sees it under /projects/mine.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/projects/mine", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["pending"], true);
}

/// Listing by an unknown category slug is a 404, not an empty list.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_unknown_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/category/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Owners can edit their own project; edits do not touch moderation flags.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owner_can_edit(pool: PgPool) {
    seed_category(&pool, "wallets", "Wallets").await;
    let (user, _) = common::create_user(&pool, "owner", MEMBER_ROLE_ID).await;
    let token = token_for(&user, "member");

    let app = common::build_test_app(pool.clone());
    let project = submit_project(app, &token, "Before").await;
    let id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "After" });
    let response = put_json_auth(app, &format!("/api/v1/projects/{id}"), &token, body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "After");
    assert_eq!(json["data"]["pending"], true, "editing must not change moderation state");
}

/// A non-owner, non-admin editing someone else's project gets 403.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_owner_cannot_edit(pool: PgPool) {
    seed_category(&pool, "wallets", "Wallets").await;
    let (owner, _) = common::create_user(&pool, "owner", MEMBER_ROLE_ID).await;
    let (intruder, _) = common::create_user(&pool, "intruder", MEMBER_ROLE_ID).await;
    let owner_token = token_for(&owner, "member");
    let intruder_token = token_for(&intruder, "member");

    let app = common::build_test_app(pool.clone());
    let project = submit_project(app, &owner_token, "Mine").await;
    let id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Hijacked" });
    let response =
        put_json_auth(app, &format!("/api/v1/projects/{id}"), &intruder_token, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A non-owner, non-admin deleting someone else's project gets 403; an
/// admin may delete any project.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_ownership(pool: PgPool) {
    seed_category(&pool, "wallets", "Wallets").await;
    let (owner, _) = common::create_user(&pool, "owner", MEMBER_ROLE_ID).await;
    let (intruder, _) = common::create_user(&pool, "intruder", MEMBER_ROLE_ID).await;
    let (admin, _) = common::create_user(&pool, "admin", ADMIN_ROLE_ID).await;
    let owner_token = token_for(&owner, "member");

    let app = common::build_test_app(pool.clone());
    let project = submit_project(app, &owner_token, "Contested").await;
    let id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/projects/{id}"),
        &token_for(&intruder, "member"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/projects/{id}"),
        &token_for(&admin, "admin"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/projects/mine", &owner_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

/// Deleting a nonexistent project is a 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_project(pool: PgPool) {
    let (user, _) = common::create_user(&pool, "someone", MEMBER_ROLE_ID).await;
    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/v1/projects/9999", &token_for(&user, "member")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
