pub mod config;
pub mod logging;

pub mod collection;
pub mod printer;
