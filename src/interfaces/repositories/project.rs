use std::{collections::HashSet, path::Path, sync::Arc};

use crate::{entities::project::Project, errors::CatalogError};

const BUILTIN_CATALOG: &str = include_str!("../../../data/projects.json");

/// Contents of the catalog file at `path`, or `builtin` when no file is named.
pub(crate) fn read_catalog_source(path: Option<&str>, builtin: &str) -> Result<String, CatalogError> {
    match path {
        Some(path) => std::fs::read_to_string(Path::new(path))
            .map_err(|e| CatalogError::Io(format!("{}: {}", path, e))),
        None => Ok(builtin.to_string()),
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ProjectRepository: Send + Sync {
    /// Catalog order.
    fn list_projects(&self) -> Vec<Project>;
    fn get_project_by_slug(&self, slug: &str) -> Option<Project>;
}

/// The project catalog: fixed at deploy time, never mutated at runtime.
#[derive(Clone, Debug)]
pub struct StaticProjectRepo {
    projects: Arc<Vec<Project>>,
}

impl StaticProjectRepo {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(project.slug.clone()));
            }
        }

        Ok(StaticProjectRepo { projects: Arc::new(projects) })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(raw)
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::new(projects)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Loads `path` when given, the built-in catalog otherwise.
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        Self::from_json(&read_catalog_source(path, BUILTIN_CATALOG)?)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectRepository for StaticProjectRepo {
    fn list_projects(&self) -> Vec<Project> {
        self.projects.as_ref().clone()
    }

    fn get_project_by_slug(&self, slug: &str) -> Option<Project> {
        self.projects.iter().find(|p| p.slug == slug).cloned()
    }
}
