use super::*;

use crate::net::types::test_helpers::make_user;

#[test]
fn missing_user_while_loading_is_pending() {
    assert_eq!(access_for(None, true, None), Access::Pending);
    assert_eq!(access_for(None, true, Some(Role::Admin)), Access::Pending);
}

#[test]
fn missing_user_after_loading_is_signed_out() {
    assert_eq!(access_for(None, false, Some(Role::Admin)), Access::SignedOut);
}

#[test]
fn role_must_match_exactly() {
    let student = make_user("u3", "Mike", Role::Student);
    let admin = make_user("u1", "John", Role::Admin);
    assert_eq!(access_for(Some(&student), false, Some(Role::Admin)), Access::Denied);
    assert_eq!(access_for(Some(&admin), false, Some(Role::Admin)), Access::Granted);
    assert_eq!(access_for(Some(&admin), false, Some(Role::Student)), Access::Denied);
}

#[test]
fn any_signed_in_user_passes_without_requirement() {
    let student = make_user("u3", "Mike", Role::Student);
    assert_eq!(access_for(Some(&student), true, None), Access::Granted);
}

#[test]
fn owner_or_admin_can_moderate() {
    let owner = make_user("u3", "Mike", Role::Student);
    let admin = make_user("u1", "John", Role::Admin);
    assert!(can_moderate(Some(&owner), "u3"));
    assert!(can_moderate(Some(&admin), "u3"));
    assert!(!can_moderate(Some(&owner), "u4"));
    assert!(!can_moderate(None, "u3"));
}
