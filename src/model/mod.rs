pub mod config;
pub mod entity;
pub mod mode;
pub mod vehicle;

pub use config::*;
pub use entity::*;
pub use mode::*;
pub use vehicle::*;
