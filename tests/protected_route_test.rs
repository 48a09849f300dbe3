// tests/protected_route_test.rs
use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::spawn_app_without_db;

#[tokio::test]
async fn match_routes_return_401_without_token() {
    // Arrange
    let test_app = spawn_app_without_db();
    let client = Client::new();
    let match_id = Uuid::new_v4();

    // Act & Assert
    for path in ["", "/events", "/stats", "/halftime", "/fulltime", "/lineup", "/election"] {
        let response = client
            .get(&format!("{}/api/matchs/{}{}", &test_app.address, match_id, path))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(401, response.status().as_u16(), "GET {} without token", path);
    }
}

#[tokio::test]
async fn match_routes_return_401_with_forged_token() {
    let test_app = spawn_app_without_db();
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/matchs/{}/start", &test_app.address, Uuid::new_v4()))
        .bearer_auth("not.a.token")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn admin_routes_reject_club_staff() {
    let test_app = spawn_app_without_db();
    let client = Client::new();
    let coach_token = test_app.coach_token(Uuid::new_v4());

    let create = client
        .post(&format!("{}/admin/matchs", &test_app.address))
        .bearer_auth(&coach_token)
        .json(&json!({
            "home_team_id": Uuid::new_v4(),
            "away_team_id": Uuid::new_v4(),
            "scheduled_at": "2026-03-01T15:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(403, create.status().as_u16());

    let validate = client
        .patch(&format!("{}/admin/matchs/{}/validate-stats", &test_app.address, Uuid::new_v4()))
        .bearer_auth(&coach_token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(403, validate.status().as_u16());
}

#[tokio::test]
async fn admin_routes_return_401_without_token() {
    let test_app = spawn_app_without_db();
    let client = Client::new();

    let response = client
        .patch(&format!("{}/admin/matchs/{}/validate-stats", &test_app.address, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(401, response.status().as_u16());
}
