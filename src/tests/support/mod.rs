pub mod app_state_builder;
pub mod auth_helper;
pub mod in_memory_calculations;
pub mod in_memory_users;
pub mod stubs;
