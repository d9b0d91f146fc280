pub mod import_error;
pub mod store_error;
pub mod sync_error;
