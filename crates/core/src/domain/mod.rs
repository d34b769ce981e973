pub mod message;
pub mod summary;
