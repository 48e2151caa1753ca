pub mod create;
pub mod handlers;
