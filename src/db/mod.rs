pub mod mysql;
pub mod seed;

pub use mysql::*;
pub use seed::*;
