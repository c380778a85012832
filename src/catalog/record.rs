use serde::Deserialize;

/// One portfolio project as it appears in the catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    #[serde(default)]
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub learnings: Vec<String>,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
}

/// The bulleted-list fields of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Features,
    Challenges,
    Learnings,
}

impl Project {
    /// Entries of one of the list fields, in authored order.
    pub fn entries(&self, field: ListField) -> &[String] {
        match field {
            ListField::Features => &self.features,
            ListField::Challenges => &self.challenges,
            ListField::Learnings => &self.learnings,
        }
    }

    /// Live demo link, or `None` when the configured value is blank.
    pub fn live_url(&self) -> Option<&str> {
        non_blank(&self.live_url)
    }

    /// Source repository link, or `None` when the configured value is blank.
    pub fn github_url(&self) -> Option<&str> {
        non_blank(&self.github_url)
    }
}

fn non_blank(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
