pub mod bootstrap;
pub mod config;
pub mod email;
pub mod generators;
pub mod memory;
