use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::utils::TestApp;

/// Two clubs with one team each, and players registered with each club.
pub struct MatchFixture {
    pub match_id: Uuid,
    pub home_club_id: Uuid,
    pub away_club_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_players: Vec<Uuid>,
    pub away_players: Vec<Uuid>,
}

pub async fn seed_club(pool: &PgPool) -> Uuid {
    sqlx::query_scalar("INSERT INTO clubs (name) VALUES ($1) RETURNING id")
        .bind(format!("Club {}", Uuid::new_v4()))
        .fetch_one(pool)
        .await
        .expect("Failed to insert club")
}

pub async fn seed_team(pool: &PgPool, club_id: Uuid) -> Uuid {
    sqlx::query_scalar("INSERT INTO teams (club_id, name) VALUES ($1, $2) RETURNING id")
        .bind(club_id)
        .bind("Seniors")
        .fetch_one(pool)
        .await
        .expect("Failed to insert team")
}

pub async fn seed_players(pool: &PgPool, club_id: Uuid, count: usize) -> Vec<Uuid> {
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO players (club_id, first_name, last_name) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(club_id)
        .bind(format!("Player{}", n))
        .bind("Test")
        .fetch_one(pool)
        .await
        .expect("Failed to insert player");
        ids.push(id);
    }
    ids
}

/// Seed clubs, teams and players, then create a Planned match through the admin API.
pub async fn create_planned_match(app: &TestApp, client: &Client) -> MatchFixture {
    let home_club_id = seed_club(&app.db_pool).await;
    let away_club_id = seed_club(&app.db_pool).await;
    let home_team_id = seed_team(&app.db_pool, home_club_id).await;
    let away_team_id = seed_team(&app.db_pool, away_club_id).await;
    let home_players = seed_players(&app.db_pool, home_club_id, 3).await;
    let away_players = seed_players(&app.db_pool, away_club_id, 3).await;

    let response = client
        .post(&format!("{}/admin/matchs", app.address))
        .bearer_auth(app.admin_token())
        .json(&json!({
            "home_team_id": home_team_id,
            "away_team_id": away_team_id,
            "scheduled_at": Utc::now() + Duration::hours(2),
        }))
        .send()
        .await
        .expect("Failed to create match");
    assert_eq!(201, response.status().as_u16());

    let body: Value = response.json().await.expect("Failed to parse match");
    let match_id = body["data"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("No match id in response");

    MatchFixture {
        match_id,
        home_club_id,
        away_club_id,
        home_team_id,
        away_team_id,
        home_players,
        away_players,
    }
}

pub async fn set_lineup(app: &TestApp, client: &Client, fixture: &MatchFixture, team_id: Uuid, players: &[Uuid]) {
    let club_id = if team_id == fixture.home_team_id { fixture.home_club_id } else { fixture.away_club_id };
    let slots: Vec<Value> = players
        .iter()
        .enumerate()
        .map(|(i, player_id)| json!({ "player_id": player_id, "number": i as i32 + 1 }))
        .collect();

    let response = client
        .put(&format!("{}/api/matchs/{}/lineup", app.address, fixture.match_id))
        .bearer_auth(app.coach_token(club_id))
        .json(&json!({ "team_id": team_id, "players": slots }))
        .send()
        .await
        .expect("Failed to set lineup");
    assert_eq!(200, response.status().as_u16());
}

/// Create a match with both lineups set and kick it off.
pub async fn create_live_match(app: &TestApp, client: &Client) -> MatchFixture {
    let fixture = create_planned_match(app, client).await;
    set_lineup(app, client, &fixture, fixture.home_team_id, &fixture.home_players).await;
    set_lineup(app, client, &fixture, fixture.away_team_id, &fixture.away_players).await;

    let response = client
        .post(&format!("{}/api/matchs/{}/start", app.address, fixture.match_id))
        .bearer_auth(app.coach_token(fixture.home_club_id))
        .send()
        .await
        .expect("Failed to start match");
    assert_eq!(200, response.status().as_u16());

    fixture
}

/// Value of one stat row from GET /stats, if present.
pub async fn stat_value(
    app: &TestApp,
    client: &Client,
    match_id: Uuid,
    team_id: Uuid,
    player_id: Option<Uuid>,
    stat_name: &str,
) -> Option<i64> {
    let response = client
        .get(&format!("{}/api/matchs/{}/stats", app.address, match_id))
        .bearer_auth(app.admin_token())
        .send()
        .await
        .expect("Failed to fetch stats");
    assert_eq!(200, response.status().as_u16());

    let body: Value = response.json().await.expect("Failed to parse stats");
    let team_id = team_id.to_string();
    let player_id = player_id.map(|id| id.to_string());
    body["data"]
        .as_array()
        .expect("stats array")
        .iter()
        .find(|s| {
            s["team_id"].as_str() == Some(team_id.as_str())
                && s["player_id"].as_str() == player_id.as_deref()
                && s["stat_name"].as_str() == Some(stat_name)
        })
        .and_then(|s| s["value"].as_i64())
}

pub async fn record_event(app: &TestApp, client: &Client, fixture: &MatchFixture, body: Value) -> reqwest::Response {
    client
        .post(&format!("{}/api/matchs/{}/events", app.address, fixture.match_id))
        .bearer_auth(app.coach_token(fixture.home_club_id))
        .json(&body)
        .send()
        .await
        .expect("Failed to record event")
}
