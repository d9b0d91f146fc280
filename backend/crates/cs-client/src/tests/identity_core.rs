use crate::tests::{FakeRegistry, UndeletableStore, create_test_core, fast_retry};
use crate::{DeviceStore, IDENTITY_KEY, IdentityCore, PROFILE_KEY};

use cs_core::BindingState;

use std::sync::Arc;

use googletest::prelude::*;

#[tokio::test]
async fn given_bound_device_when_reset_then_new_identity_and_unlocked() {
    // Given
    let registry = FakeRegistry::new();
    let (core, _) = create_test_core(registry.clone());
    let old = core.provisioner().get_or_create();
    core.sync_client().sync(&old, "张三", "1班").await.unwrap();

    // When
    let new = core.reset().unwrap();

    // Then: Old binding is orphaned, new identity may bind a fresh name
    assert_that!(new, not(eq(&old)));
    assert_that!(core.cache().read().binding_state, eq(BindingState::Unbound));
    assert_that!(core.sync_client().sync(&new, "王五", "1班").await, ok(anything()));
}

#[tokio::test]
async fn given_bound_device_when_clear_then_store_emptied() {
    let (core, store) = create_test_core(FakeRegistry::new());
    let identity = core.provisioner().get_or_create();
    core.sync_client()
        .sync(&identity, "张三", "1班")
        .await
        .unwrap();

    core.clear().unwrap();

    assert_that!(store.read(IDENTITY_KEY).unwrap(), none());
    assert_that!(store.read(PROFILE_KEY).unwrap(), none());
    assert_that!(core.status().identity, none());
}

#[tokio::test]
async fn given_bound_device_when_status_then_reports_profile() {
    let (core, _) = create_test_core(FakeRegistry::new());
    let identity = core.provisioner().get_or_create();
    core.sync_client()
        .sync(&identity, "张三", "1班")
        .await
        .unwrap();

    let status = core.status();

    assert_that!(status.identity, some(eq(&identity)));
    assert_that!(status.durable, eq(true));
    assert_that!(status.binding_state, eq(BindingState::Bound));
    assert_that!(status.profile.unwrap().name.as_str(), eq("张三"));
}

#[test]
fn given_fresh_device_when_status_then_unbound_without_profile() {
    let (core, _) = create_test_core(FakeRegistry::new());
    core.provisioner().get_or_create();

    let status = core.status();

    assert_that!(status.binding_state, eq(BindingState::Unbound));
    assert_that!(status.profile, none());
}

#[test]
#[serial_test::serial]
fn given_config_dir_when_bootstrap_then_identity_written_under_device_dir() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    // SAFETY: serialized with every other env-mutating test
    unsafe { std::env::set_var("CS_CONFIG_DIR", temp.path()) };
    let config = cs_config::Config::load().unwrap();

    // When
    let core = crate::IdentityCore::bootstrap(&config).unwrap();
    let identity = core.provisioner().get_or_create();
    unsafe { std::env::remove_var("CS_CONFIG_DIR") };

    // Then
    let persisted = std::fs::read_to_string(
        temp.path().join(&config.client.data_dir).join(IDENTITY_KEY),
    )
    .unwrap();
    assert_that!(persisted.as_str(), eq(identity.as_str()));
}

#[tokio::test]
async fn given_token_cannot_be_deleted_when_clear_then_error_reported() {
    // Given
    let store = Arc::new(UndeletableStore::new());
    let core = IdentityCore::new(store.clone(), FakeRegistry::new(), fast_retry());
    let identity = core.provisioner().get_or_create();

    // When
    let result = core.clear();

    // Then: Not reported as cleared while the token is still on disk
    assert_that!(result, err(anything()));
    assert_that!(store.read(IDENTITY_KEY).unwrap(), some(eq(identity.as_str())));
}
