use super::*;

use time::macros::datetime;

// =============================================================================
// Tokens
// =============================================================================

#[test]
fn token_is_lowercase_hex_of_32_bytes() {
    let token = new_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn tokens_are_not_reused() {
    assert_ne!(new_token(), new_token());
}

// =============================================================================
// Expiry
// =============================================================================

#[test]
fn sessions_last_thirty_days() {
    let issued = datetime!(2024-03-01 12:00 UTC);
    assert_eq!(expires_at(issued), datetime!(2024-03-31 12:00 UTC));
}

#[test]
fn cookie_lifetime_matches_session_lifetime() {
    assert_eq!(SESSION_LIFETIME.whole_days(), 30);
}

// =============================================================================
// Live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn open_lookup_close() {
    use crate::services::user::Role;
    use crate::state::test_helpers::{insert_user, integration_pool};

    let pool = integration_pool().await;
    let user = insert_user(&pool, "session@example.com", Role::Student).await;

    let token = open(&pool, user.id).await.unwrap();
    let found = lookup(&pool, &token).await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));

    close(&pool, &token).await.unwrap();
    assert!(lookup(&pool, &token).await.unwrap().is_none());
    close(&pool, &token).await.unwrap();
}
