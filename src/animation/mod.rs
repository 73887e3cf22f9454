pub mod ease;
pub mod entity;
pub mod progress;
