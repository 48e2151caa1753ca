// Name-only lookup tables the admin console manages (categories, roles, ...).

pub mod handlers;
pub mod kind;
pub mod queries;
