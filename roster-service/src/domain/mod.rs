pub mod client;
pub mod message;
pub mod service;
pub mod views;
