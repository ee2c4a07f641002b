use crate::helpers::{self, TestApp};

#[tokio::test]
async fn logout_clears_session_state() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act - Part 1 - Login
    let response = app.login_as("dr.smith", "doctor123", "doctor").await;
    helpers::assert_is_redirect_to(&response, "/dashboard/doctor");

    // Act - Part 2 - Follow the redirect
    let html_page = app.get_dashboard_html("doctor").await;
    assert!(html_page.contains("Welcome dr.smith!"));

    // Act - Part 3 - Logout
    let response = app.post_logout().await;
    helpers::assert_is_redirect_to(&response, "/login");

    // Act - Part 4 - Follow the redirect
    let html_page = app.get_login_html().await;
    let logged_out = r#"<p class="flash-info"><i>You have successfully logged out.</i></p>"#;
    assert!(html_page.contains(logged_out));

    // Act - Part 5 - Attempt to load the dashboard
    let response = app.get_dashboard("doctor").await;
    helpers::assert_is_redirect_to(&response, "/login");
}
