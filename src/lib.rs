pub mod api;
pub mod errors;
pub mod github;
pub mod server;
pub mod triage;
