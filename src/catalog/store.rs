use super::error::{CatalogError, Result};
use super::icons::TechIconTable;
use super::record::Project;
use serde::Deserialize;
use std::collections::HashSet;

/// Shape of the catalog configuration document.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogConfig {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    tech_icons: TechIconTable,
}

/// Read-only collection of projects plus the icon table used to draw their stacks.
///
/// Built once at startup; nothing can add, remove or edit a project afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    icons: TechIconTable,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids.
    pub fn new(projects: Vec<Project>, icons: TechIconTable) -> Result<Self> {
        validate_ids(&projects)?;
        Ok(Self { projects, icons })
    }

    /// Parse and validate a catalog configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        Self::new(config.projects, config.tech_icons)
    }

    /// All projects in configuration order.
    pub fn all_records(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by id. No id, or an unknown one, yields `None`.
    pub fn find_by_id(&self, id: Option<&str>) -> Option<&Project> {
        let id = id?;
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn icons(&self) -> &TechIconTable {
        &self.icons
    }
}

fn validate_ids(projects: &[Project]) -> Result<()> {
    let mut seen = HashSet::with_capacity(projects.len());
    for project in projects {
        if project.id.trim().is_empty() {
            return Err(CatalogError::EmptyId {
                title: project.title.clone(),
            });
        }
        if !seen.insert(project.id.as_str()) {
            return Err(CatalogError::DuplicateId(project.id.clone()));
        }
    }
    Ok(())
}
