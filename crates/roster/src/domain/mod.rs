pub mod builders;
pub mod entities;
pub mod models;
pub mod ports;
pub mod repositories;
pub mod services;
pub mod value_objects;
