use tracing::{info, warn};

use crate::{
    constants::RELATED_POSTS_LIMIT,
    entities::{
        blog_post::{BlogPostCard, BlogPostDetail},
        category::{filter_by_category, CategorySelection, BLOG_CATEGORIES},
        listing::{Listing, BLOG_EMPTY, BLOG_UNAVAILABLE},
    },
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
    utils::stagger::stagger,
};

pub struct BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub blog_post_repo: R,
    pub reveal_step_ms: u64,
}

impl<R> BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(blog_post_repo: R, reveal_step_ms: u64) -> Self {
        BlogPostHandler { blog_post_repo, reveal_step_ms }
    }

    /// Lists posts newest-first, then narrows them to the selected category.
    /// Store failures become an "unavailable" listing rather than an error.
    pub async fn list_blog_posts(
        &self,
        selection: &CategorySelection,
        limit: Option<u32>,
    ) -> Listing<BlogPostCard> {
        match self.blog_post_repo.list_posts(limit).await {
            Ok(posts) => {
                let cards = filter_by_category(posts, selection)
                    .iter()
                    .map(|post| post.to_card())
                    .collect();
                Listing::build(cards, selection, BLOG_CATEGORIES, &BLOG_EMPTY, self.reveal_step_ms)
            }
            Err(e) => {
                warn!(error = %e, category = selection.as_str(), "Blog listing unavailable");
                Listing::unavailable(selection, BLOG_CATEGORIES, BLOG_UNAVAILABLE)
            }
        }
    }

    /// Newest posts for the home page.
    pub async fn get_recent_blog_posts(&self, limit: u32) -> Listing<BlogPostCard> {
        self.list_blog_posts(&CategorySelection::All, Some(limit)).await
    }

    /// Resolves one post by slug together with its related posts. An unknown
    /// slug is `NotFound`; a failing store is `ContentUnavailable`.
    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPostDetail, AppError> {
        let post = match self.blog_post_repo.get_post_by_slug(slug).await {
            Ok(Some(post)) => post,
            Ok(None) => {
                info!(%slug, "Blog post not found");
                return Err(AppError::NotFound("Blog post not found".to_string()));
            }
            Err(e) => {
                warn!(error = %e, %slug, "Blog post lookup failed");
                return Err(AppError::ContentUnavailable("Blog post could not be loaded".to_string()));
            }
        };

        let related = match self.blog_post_repo
            .list_related_posts(&post.category, &post.slug, RELATED_POSTS_LIMIT)
            .await
        {
            Ok(posts) => stagger(posts.iter().map(|p| p.to_card()).collect(), self.reveal_step_ms),
            Err(e) => {
                warn!(error = %e, %slug, "Related posts unavailable");
                Vec::new()
            }
        };

        Ok(post.into_detail(related))
    }
}
