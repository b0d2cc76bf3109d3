use std::sync::Arc;

use crate::{
    entities::experience::Experience,
    errors::CatalogError,
    repositories::project::read_catalog_source,
};

const BUILTIN_TIMELINE: &str = include_str!("../../../data/experience.json");

#[cfg_attr(test, mockall::automock)]
pub trait ExperienceRepository: Send + Sync {
    /// Display order.
    fn list_experience(&self) -> Vec<Experience>;
}

#[derive(Clone, Debug)]
pub struct StaticExperienceRepo {
    entries: Arc<Vec<Experience>>,
}

impl StaticExperienceRepo {
    pub fn new(entries: Vec<Experience>) -> Self {
        StaticExperienceRepo { entries: Arc::new(entries) }
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Experience> = serde_json::from_str(raw)
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Ok(Self::new(entries))
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_TIMELINE)
    }

    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        Self::from_json(&read_catalog_source(path, BUILTIN_TIMELINE)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ExperienceRepository for StaticExperienceRepo {
    fn list_experience(&self) -> Vec<Experience> {
        self.entries.as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_timeline_parses_in_order() {
        let repo = StaticExperienceRepo::builtin().expect("built-in timeline");
        let companies: Vec<String> = repo.list_experience().into_iter().map(|e| e.company).collect();
        assert_eq!(companies, vec!["Freelancer", "Ares Group", "FLO"]);
    }

    #[test]
    fn missing_tech_defaults_to_empty() {
        let repo = StaticExperienceRepo::from_json(
            r#"[{"period": "2024", "company": "Acme", "role": "Engineer", "description": "Things."}]"#,
        )
        .expect("valid timeline");
        assert!(repo.list_experience()[0].tech.is_empty());
    }

    #[test]
    fn malformed_timeline_is_rejected() {
        let err = StaticExperienceRepo::from_json(r#"[{"period": 2024}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = StaticExperienceRepo::load(Some("/nonexistent/experience.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
