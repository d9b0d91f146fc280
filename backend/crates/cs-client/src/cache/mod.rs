pub mod cache_record;
pub mod local_profile_cache;
