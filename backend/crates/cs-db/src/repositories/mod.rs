pub mod name_registry_repository;
