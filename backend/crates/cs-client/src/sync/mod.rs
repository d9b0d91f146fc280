pub mod profile_sync_client;
pub mod reconcile_outcome;
pub mod retry;
