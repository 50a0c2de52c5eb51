// Application layer - Page controllers and the ports they depend on
pub mod dashboard_service;
pub mod page;
pub mod profile_service;
pub mod remote_data;
pub mod view_state_store;
