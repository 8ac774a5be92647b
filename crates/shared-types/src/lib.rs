pub mod error;
pub mod config;

// Session and access control
pub mod access;
pub mod models;

// Buyer console domain
pub mod buyer;
pub mod fabric;
pub mod selection;

pub use access::*;
pub use buyer::*;
pub use config::*;
pub use error::*;
pub use fabric::*;
pub use models::*;
pub use selection::*;
