pub mod handlers;
pub mod interest;
