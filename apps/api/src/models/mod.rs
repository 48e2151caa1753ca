pub mod catalog;
pub mod engagement;
pub mod event;
pub mod job_request;
pub mod post;
pub mod profile;
