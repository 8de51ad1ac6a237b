pub mod bank;
pub mod http;
