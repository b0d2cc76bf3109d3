use serde::{Deserialize, Serialize};

use crate::{constants::PLACEHOLDER_IMAGE, entities::category::Categorized};

/// One labelled group of technologies, e.g. `Backend → [Rust, Postgres]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TechGroup {
    pub category: String,
    pub technologies: Vec<String>,
}

/// A portfolio entry. Projects live in the in-process catalog only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub tagline: String,
    pub long_description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<TechGroup>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    pub gradient: String,
    pub category: String,
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectCard {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub cover_image: String,
    pub category: String,
    pub tech_summary: String,
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectDetail {
    pub cover_image: String,
    pub paragraphs: Vec<String>,
    #[serde(flatten)]
    pub project: Project,
}

impl Project {
    pub fn cover_image(&self) -> String {
        self.images
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }

    /// All technologies in stack order, joined for the card footer.
    pub fn tech_summary(&self) -> String {
        self.tech_stack
            .iter()
            .flat_map(|group| group.technologies.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" • ")
    }

    pub fn to_card(&self) -> ProjectCard {
        ProjectCard {
            title: self.title.clone(),
            slug: self.slug.clone(),
            description: self.description.clone(),
            cover_image: self.cover_image(),
            category: self.category.clone(),
            tech_summary: self.tech_summary(),
            github_url: self.github_url.clone(),
        }
    }

    pub fn to_detail(&self) -> ProjectDetail {
        let paragraphs = self
            .long_description
            .split("\n\n")
            .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|p| !p.is_empty())
            .collect();

        ProjectDetail {
            cover_image: self.cover_image(),
            paragraphs,
            project: self.clone(),
        }
    }
}
