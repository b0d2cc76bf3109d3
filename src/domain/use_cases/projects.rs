use tracing::info;

use crate::{
    entities::{
        category::{filter_by_category, CategorySelection, PROJECT_CATEGORIES},
        listing::{Listing, PROJECTS_EMPTY},
        project::{ProjectCard, ProjectDetail},
    },
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::stagger::{stagger, Staged},
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
    pub reveal_step_ms: u64,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R, reveal_step_ms: u64) -> Self {
        ProjectHandler { project_repo, reveal_step_ms }
    }

    pub fn list_projects(&self, selection: &CategorySelection) -> Listing<ProjectCard> {
        let cards = filter_by_category(self.project_repo.list_projects(), selection)
            .iter()
            .map(|project| project.to_card())
            .collect();

        Listing::build(cards, selection, PROJECT_CATEGORIES, &PROJECTS_EMPTY, self.reveal_step_ms)
    }

    /// First `limit` projects in catalog order, for the home page.
    pub fn featured_projects(&self, limit: usize) -> Vec<Staged<ProjectCard>> {
        let cards = self
            .project_repo
            .list_projects()
            .iter()
            .take(limit)
            .map(|project| project.to_card())
            .collect();

        stagger(cards, self.reveal_step_ms)
    }

    pub fn get_project_by_slug(&self, slug: &str) -> Result<ProjectDetail, AppError> {
        match self.project_repo.get_project_by_slug(slug) {
            Some(project) => Ok(project.to_detail()),
            None => {
                info!(%slug, "Project not found");
                Err(AppError::NotFound("Project not found".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{listing::ListingState, project::Project},
        repositories::project::MockProjectRepository,
    };
    use mockall::predicate::*;

    fn project(slug: &str, category: &str) -> Project {
        Project {
            id: slug.to_string(),
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            description: String::new(),
            tagline: String::new(),
            long_description: "One.\n\nTwo.".to_string(),
            images: vec![format!("/img/{}.png", slug)],
            tech_stack: vec![],
            features: vec![],
            github_url: None,
            live_url: None,
            gradient: "from-sky-500 to-indigo-500".to_string(),
            category: category.to_string(),
        }
    }

    fn catalog() -> Vec<Project> {
        vec![
            project("alpha", "ai"),
            project("beta", "fullstack"),
            project("gamma", "ai"),
            project("delta", "backend"),
        ]
    }

    #[test]
    fn filters_in_catalog_order() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects().returning(catalog);

        let handler = ProjectHandler::new(repo, 100);
        let listing = handler.list_projects(&CategorySelection::Only("ai".into()));

        let slugs: Vec<&str> = listing.items().iter().map(|s| s.item.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "gamma"]);
        assert_eq!(listing.items()[1].delay_ms, 100);
        assert!(listing.categories.iter().any(|c| c.id == "ai" && c.active));
    }

    #[test]
    fn unknown_category_is_empty() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects().returning(catalog);

        let handler = ProjectHandler::new(repo, 100);
        let listing = handler.list_projects(&CategorySelection::Only("AI".into()));

        assert!(matches!(listing.state, ListingState::Empty { .. }));
    }

    #[test]
    fn featured_takes_first_entries() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects().returning(catalog);

        let handler = ProjectHandler::new(repo, 150);
        let featured = handler.featured_projects(3);

        let slugs: Vec<&str> = featured.iter().map(|s| s.item.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "beta", "gamma"]);
        assert_eq!(featured[2].delay_ms, 300);
    }

    #[test]
    fn detail_resolves_slug() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_project_by_slug()
            .with(eq("beta"))
            .returning(|_| Some(project("beta", "fullstack")));

        let handler = ProjectHandler::new(repo, 150);
        let detail = handler.get_project_by_slug("beta").expect("project exists");

        assert_eq!(detail.project.slug, "beta");
        assert_eq!(detail.cover_image, "/img/beta.png");
        assert_eq!(detail.paragraphs, vec!["One.", "Two."]);
    }

    #[test]
    fn missing_slug_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_project_by_slug().returning(|_| None);

        let handler = ProjectHandler::new(repo, 150);
        let err = handler.get_project_by_slug("nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
