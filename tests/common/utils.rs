use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use uuid::Uuid;
use once_cell::sync::Lazy;

use rugby_club_backend::run;
use rugby_club_backend::auth::jwt::generate_token;
use rugby_club_backend::config::jwt::JwtSettings;
use rugby_club_backend::config::settings::{get_config, DatabaseSettings, get_jwt_settings};
use rugby_club_backend::models::user::{Principal, UserJob, UserRole};
use rugby_club_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub jwt_settings: JwtSettings,
}

impl TestApp {
    /// Bearer token for an arbitrary principal, signed with the app's secret.
    pub fn token_for(&self, principal: &Principal) -> String {
        generate_token(principal, &self.jwt_settings).expect("Failed to generate token")
    }

    pub fn admin_token(&self) -> String {
        self.token_for(&principal(UserRole::Admin, UserJob::Admin, None))
    }

    pub fn coach_token(&self, club_id: Uuid) -> String {
        self.token_for(&principal(UserRole::User, UserJob::Coach, Some(club_id)))
    }

    pub fn player_token(&self, club_id: Uuid) -> String {
        self.token_for(&principal(UserRole::User, UserJob::Player, Some(club_id)))
    }
}

pub fn principal(role: UserRole, job: UserJob, club_id: Option<Uuid>) -> Principal {
    Principal {
        user_id: Uuid::new_v4(),
        username: format!("user{}", Uuid::new_v4()),
        role,
        job,
        club_id,
    }
}

/// Spin the server up against a fresh, migrated database.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    // A shared DATABASE_URL would point every test at the same database
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database).await;

    start_server(connection_pool, get_jwt_settings(&configuration), get_jwt_settings(&configuration))
}

/// Spin the server up with a pool that never connects. Enough for routes that
/// are rejected before touching the database.
pub fn spawn_app_without_db() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = get_config().expect("Failed to read configuration.");
    let connection_pool = PgPoolOptions::new()
        .connect_lazy(configuration.database.connection_string().expose_secret())
        .expect("Failed to create lazy pool");

    start_server(connection_pool, get_jwt_settings(&configuration), get_jwt_settings(&configuration))
}

fn start_server(connection_pool: PgPool, server_jwt: JwtSettings, test_jwt: JwtSettings) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = run(
        listener,
        connection_pool.clone(),
        server_jwt,
        vec!["http://localhost:3000".to_string()],
    )
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
        jwt_settings: test_jwt,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(
            &config.connection_string_without_db()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}
