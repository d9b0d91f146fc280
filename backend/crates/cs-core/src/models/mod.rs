pub mod binding_state;
pub mod client_identity;
pub mod profile;
pub mod role;
