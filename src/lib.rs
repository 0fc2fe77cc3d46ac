pub mod errors;
pub mod factories;
pub mod logging;
pub mod models;
pub mod ports;
pub mod services;

pub use errors::*;
pub use models::*;
pub use ports::*;
