pub mod engine;
pub mod platform;
