mod client_identity;
mod profile;
mod role;
