mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{rest, templates, utils};

use repositories::{
    experience::StaticExperienceRepo, project::StaticProjectRepo, rest_repo::RestContentRepo,
};
use handlers::system::HealthCache;
use templates::PageRenderer;
use use_cases::{
    blog::BlogPostHandler, contact::ContactMeHandler, experience::ExperienceHandler,
    projects::ProjectHandler,
};

pub struct AppState {
    pub blog_handler: AppBlogPostHandler,
    pub project_handler: AppProjectHandler,
    pub experience_handler: AppExperienceHandler,
    pub contact_handler: AppContactMeHandler,
    pub pages: PageRenderer,
    pub content_store_configured: bool,
    pub health_cache: HealthCache,
}

pub type AppBlogPostHandler = BlogPostHandler<RestContentRepo>;
pub type AppProjectHandler = ProjectHandler<StaticProjectRepo>;
pub type AppContactMeHandler = ContactMeHandler<RestContentRepo>;
pub type AppExperienceHandler = ExperienceHandler<StaticExperienceRepo>;

impl AppState {
    /// Wires handlers to their repositories. The content store is optional;
    /// when it is not configured the blog and contact handlers report it as
    /// disabled instead of failing startup.
    pub fn new(
        config: &settings::AppConfig,
        projects: StaticProjectRepo,
        experience: StaticExperienceRepo,
    ) -> Result<Self, tera::Error> {
        let store_settings = config.content_store();
        let content_repo = RestContentRepo::new(store_settings.as_ref());
        let content_store_configured = content_repo.is_configured();

        Ok(AppState {
            blog_handler: BlogPostHandler::new(content_repo.clone(), config.reveal_step_ms),
            project_handler: ProjectHandler::new(projects, config.reveal_step_ms),
            experience_handler: ExperienceHandler::new(experience, config.reveal_step_ms),
            contact_handler: ContactMeHandler::new(content_repo),
            pages: PageRenderer::new(&config.name)?,
            content_store_configured,
            health_cache: HealthCache::default(),
        })
    }
}
