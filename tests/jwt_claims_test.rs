use jsonwebtoken::{decode, DecodingKey};
use rugby_club_backend::auth::jwt::generate_token;
use rugby_club_backend::config::jwt::JwtSettings;
use rugby_club_backend::middleware::auth::Claims;
use rugby_club_backend::models::user::{Principal, UserJob, UserRole};
use secrecy::ExposeSecret;
use uuid::Uuid;

fn settings() -> JwtSettings {
    JwtSettings::new("test-secret-with-enough-length".to_string(), 1).with_leeway(30)
}

#[test]
fn test_token_carries_the_principal() {
    let jwt_settings = settings();
    let principal = Principal {
        user_id: Uuid::new_v4(),
        username: "coach_dupont".to_string(),
        role: UserRole::User,
        job: UserJob::Coach,
        club_id: Some(Uuid::new_v4()),
    };

    let token = generate_token(&principal, &jwt_settings).expect("Failed to generate token");
    let decoded = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
        &jwt_settings.validation(),
    )
    .expect("Failed to decode token");

    assert_eq!(decoded.claims.principal().expect("principal"), principal);
}

#[test]
fn test_token_signed_with_another_secret_is_rejected() {
    let principal = Principal {
        user_id: Uuid::new_v4(),
        username: "admin".to_string(),
        role: UserRole::Admin,
        job: UserJob::Admin,
        club_id: None,
    };
    let token = generate_token(&principal, &settings()).expect("Failed to generate token");

    let other = JwtSettings::new("another-secret".to_string(), 1);
    let result = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(other.secret.expose_secret().as_bytes()),
        &other.validation(),
    );
    assert!(result.is_err());
}

#[test]
fn test_claims_with_invalid_subject_are_unauthorized() {
    let claims = Claims {
        sub: "not-a-uuid".to_string(),
        username: "ghost".to_string(),
        role: UserRole::User,
        job: UserJob::Player,
        club_id: None,
        exp: 0,
    };
    assert!(claims.principal().is_err());
}
