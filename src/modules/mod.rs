pub mod auth;
pub mod calculation;
pub mod history;
