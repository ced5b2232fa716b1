use super::*;

#[test]
fn toggled_role_flips_between_admin_and_student() {
    assert_eq!(toggled_role(Role::Admin), Role::Student);
    assert_eq!(toggled_role(Role::Student), Role::Admin);
}

#[test]
fn toggled_role_promotes_instructors() {
    assert_eq!(toggled_role(Role::Instructor), Role::Admin);
}
