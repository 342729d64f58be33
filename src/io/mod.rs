pub mod catalog_io;
pub mod config_io;
