// Presentation layer - HTTP routes and page rendering
pub mod app_state;
pub mod dashboard_page;
pub mod error;
pub mod handlers;
