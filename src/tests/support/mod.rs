pub mod admin_helper;
pub mod app_state_builder;
pub mod fixtures;
pub mod stubs;
