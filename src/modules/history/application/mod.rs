pub mod domain;
pub mod history_use_cases;
pub mod ports;
pub mod service;
