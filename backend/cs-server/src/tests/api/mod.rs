mod admin_token;
mod error;
mod validation;
