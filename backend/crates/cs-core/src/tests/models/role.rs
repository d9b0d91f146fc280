use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::SuperAdmin.as_str(), "super_admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
    assert_eq!(Role::from_str("super_admin").unwrap(), Role::SuperAdmin);
    assert!(Role::from_str("root").is_err());
}

#[test]
fn test_role_is_admin() {
    assert!(!Role::User.is_admin());
    assert!(Role::Admin.is_admin());
    assert!(Role::SuperAdmin.is_admin());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::User);
}
