pub mod config;
pub mod errors;
pub mod modules;
pub mod services;

pub use errors::SetupError;
