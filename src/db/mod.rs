pub mod connection;
pub mod listings;
pub mod seed;

pub use connection::Database;
