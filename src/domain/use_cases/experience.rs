use crate::{
    entities::experience::Experience,
    repositories::experience::ExperienceRepository,
    utils::stagger::{stagger, Staged},
};

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
    pub reveal_step_ms: u64,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repo: R, reveal_step_ms: u64) -> Self {
        ExperienceHandler { experience_repo, reveal_step_ms }
    }

    /// Whole timeline in catalog order, staged for the home page.
    pub fn timeline(&self) -> Vec<Staged<Experience>> {
        stagger(self.experience_repo.list_experience(), self.reveal_step_ms)
    }
}
