pub mod create;
pub mod handlers;
pub mod uploads;
