pub mod init;
pub mod models;
pub mod repository;
pub mod seed;

pub use models::*;
pub use repository::*;
