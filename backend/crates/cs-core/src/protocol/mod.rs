//! JSON bodies exchanged between the device client and the name registry service.

pub mod check_name_request;
pub mod check_name_response;
pub mod error_response;
pub mod registry_error_code;
pub mod release_response;
pub mod set_role_request;
pub mod sync_request;
pub mod sync_response;
