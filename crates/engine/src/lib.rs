pub mod position;
pub mod stats;
pub mod telegram;
pub mod user;
