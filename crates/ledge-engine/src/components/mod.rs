pub mod entity;
pub mod platform;
