// Domain layer - Plain data and pure functions, no I/O
pub mod application;
pub mod dashboard;
pub mod health;
pub mod metric;
pub mod team;
