pub mod message;
pub mod patterns;
pub mod validate;
