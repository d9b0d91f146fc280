pub mod error;
pub mod models;
pub mod protocol;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::binding_state::BindingState;
pub use models::client_identity::ClientIdentity;
pub use models::profile::Profile;
pub use models::role::Role;
pub use protocol::check_name_request::CheckNameRequest;
pub use protocol::check_name_response::CheckNameResponse;
pub use protocol::error_response::ErrorResponse;
pub use protocol::registry_error_code::RegistryErrorCode;
pub use protocol::release_response::ReleaseResponse;
pub use protocol::set_role_request::SetRoleRequest;
pub use protocol::sync_request::SyncRequest;
pub use protocol::sync_response::SyncResponse;
