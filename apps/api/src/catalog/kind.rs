use std::str::FromStr;

use crate::errors::AppError;

/// The lookup tables exposed under `/api/v1/catalog/:kind`.
/// Only these names ever reach SQL as identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Categories,
    Roles,
    Hobbies,
    Skills,
    Tags,
    Services,
}

impl CatalogKind {
    pub fn table(&self) -> &'static str {
        match self {
            CatalogKind::Categories => "categories",
            CatalogKind::Roles => "roles",
            CatalogKind::Hobbies => "hobbies",
            CatalogKind::Skills => "skills",
            CatalogKind::Tags => "tags",
            CatalogKind::Services => "services",
        }
    }
}

impl FromStr for CatalogKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "categories" => Ok(CatalogKind::Categories),
            "roles" => Ok(CatalogKind::Roles),
            "hobbies" => Ok(CatalogKind::Hobbies),
            "skills" => Ok(CatalogKind::Skills),
            "tags" => Ok(CatalogKind::Tags),
            "services" => Ok(CatalogKind::Services),
            other => Err(AppError::NotFound(format!("Unknown catalog '{other}'"))),
        }
    }
}
