pub mod credentials;
pub mod database;
