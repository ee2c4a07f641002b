use crate::helpers::{self, TestApp};
use claims::{assert_err, assert_ok};
use clinic_portal::auth::{Authenticator, Credentials, PgAuthenticator};
use clinic_portal::domain::Role;
use clinic_portal::error::BizErrorEnum;
use secrecy::Secret;
use sqlx::Executor;

const INVALID_CREDENTIALS: &str =
    "Invalid credentials. Please check your username, password, and role.";
const LOGIN_FAILED: &str = "Login failed. Please try again.";

#[tokio::test]
async fn a_stored_user_lands_on_their_dashboard() {
    // Arrange
    let (app, db_pool) = TestApp::spawn_app_on_postgres().await;
    assert_ok!(helpers::insert_user(&db_pool, "dr.smith", "doctor123", "doctor").await);

    // Act
    let response = app.login_as("dr.smith", "doctor123", "doctor").await;

    // Assert
    helpers::assert_is_redirect_to(&response, "/dashboard/doctor");
    let html_page = app.get_dashboard_html("doctor").await;
    assert!(html_page.contains("Welcome dr.smith!"));
}

#[tokio::test]
async fn the_stored_role_must_match_the_selected_one() {
    let (app, db_pool) = TestApp::spawn_app_on_postgres().await;
    assert_ok!(helpers::insert_user(&db_pool, "reception1", "reception123", "receptionist").await);

    let response = app.login_as("reception1", "reception123", "super-admin").await;

    helpers::assert_is_redirect_to(&response, "/login");
    assert!(app.get_login_html().await.contains(INVALID_CREDENTIALS));
}

#[tokio::test]
async fn an_unknown_username_is_rejected() {
    let (app, _db_pool) = TestApp::spawn_app_on_postgres().await;

    let response = app.login_as("john.doe", "patient123", "patient").await;

    helpers::assert_is_redirect_to(&response, "/login");
    assert!(app.get_login_html().await.contains(INVALID_CREDENTIALS));
}

#[tokio::test]
async fn the_schema_only_accepts_the_four_roles() {
    let (_app, db_pool) = TestApp::spawn_app_on_postgres().await;

    assert_err!(helpers::insert_user(&db_pool, "nurse.joy", "nurse123", "nurse").await);
    assert_ok!(helpers::insert_user(&db_pool, "admin", "admin123", "super-admin").await);
}

#[tokio::test]
async fn a_stored_role_outside_the_set_is_a_store_failure() {
    // Arrange
    let (app, db_pool) = TestApp::spawn_app_on_postgres().await;
    db_pool
        .execute("ALTER TABLE users DROP CONSTRAINT users_role_check")
        .await
        .expect("Failed to drop the role constraint");
    assert_ok!(helpers::insert_user(&db_pool, "nurse.joy", "nurse123", "nurse").await);
    let authenticator = PgAuthenticator::new(db_pool.clone());
    let credentials = Credentials {
        username: "nurse.joy".into(),
        password: Secret::new("nurse123".into()),
        role: Role::Patient,
    };

    // Act - Part 1 - Ask the store directly
    let outcome = authenticator.authenticate(&credentials).await;

    // Assert
    match outcome {
        Err(BizErrorEnum::StoredRoleInvalid(role)) => assert_eq!(role, "nurse"),
        other => panic!("expected StoredRoleInvalid, got {:?}", other),
    }

    // Act - Part 2 - Through the login form
    let response = app.login_as("nurse.joy", "nurse123", "patient").await;

    // Assert
    helpers::assert_is_redirect_to(&response, "/login");
    let html_page = app.get_login_html().await;
    assert!(html_page.contains(LOGIN_FAILED));
    assert!(!html_page.contains(INVALID_CREDENTIALS));
}

#[tokio::test]
async fn demo_accounts_are_not_listed_for_the_users_table() {
    let (app, _db_pool) = TestApp::spawn_app_on_postgres().await;

    let html_page = app.get_login_html().await;

    assert!(!html_page.contains("Demo Credentials"));
}
