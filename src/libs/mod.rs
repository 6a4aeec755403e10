pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod resolver;
pub mod view;
pub mod week;
