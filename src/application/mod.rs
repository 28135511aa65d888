// Application layer - Use cases and the ports they depend on
pub mod dashboard_service;
pub mod repositories;
