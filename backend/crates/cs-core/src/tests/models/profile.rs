use crate::{BindingState, ClientIdentity, Profile, Role};

fn identity() -> ClientIdentity {
    ClientIdentity::parse("1700000000000000001").unwrap()
}

#[test]
fn test_profile_new_derives_admin_flag() {
    let user = Profile::new(identity(), "张三".into(), "Class 1".into(), Role::User);
    let admin = Profile::new(identity(), "李四".into(), "Class 2".into(), Role::Admin);

    assert!(!user.is_admin);
    assert!(admin.is_admin);
}

#[test]
fn test_profile_is_complete() {
    let mut profile = Profile::new(identity(), "张三".into(), "Class 1".into(), Role::User);
    assert!(profile.is_complete());

    profile.class = "  ".into();
    assert!(!profile.is_complete());
}

#[test]
fn test_profile_serializes_with_camel_case_admin_flag() {
    let profile = Profile::new(identity(), "张三".into(), "Class 1".into(), Role::User);

    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(json["identity"], "1700000000000000001");
    assert_eq!(json["name"], "张三");
    assert_eq!(json["class"], "Class 1");
    assert_eq!(json["role"], "user");
    assert_eq!(json["isAdmin"], false);
}

#[test]
fn test_binding_state_default_is_unbound() {
    assert_eq!(BindingState::default(), BindingState::Unbound);
    assert!(!BindingState::Unbound.is_bound());
    assert!(BindingState::Bound.is_bound());
}
