pub mod admin;
pub mod error;
pub mod extractors;
pub mod users;
pub mod validation;
