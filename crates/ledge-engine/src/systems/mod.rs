pub mod bounds;
pub mod collision;
pub mod forces;
pub mod platform;
pub mod resolve;
pub mod spatial;
