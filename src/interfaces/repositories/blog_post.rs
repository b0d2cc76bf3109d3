use async_trait::async_trait;

use crate::{
    constants::BLOG_TABLE,
    entities::blog_post::BlogPost,
    errors::ContentError,
    repositories::rest_repo::RestContentRepo,
    rest::RestQuery,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogPostRepository: Sync + Send {
    /// Newest-first; `None` returns every post.
    async fn list_posts(&self, limit: Option<u32>) -> Result<Vec<BlogPost>, ContentError>;
    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, ContentError>;
    async fn list_related_posts(
        &self,
        category: &str,
        exclude_slug: &str,
        limit: u32,
    ) -> Result<Vec<BlogPost>, ContentError>;
}

pub fn list_posts_query(limit: Option<u32>) -> RestQuery {
    RestQuery::select_all()
        .order_desc("created_at")
        .limit_opt(limit)
}

pub fn post_by_slug_query(slug: &str) -> RestQuery {
    RestQuery::select_all().eq("slug", slug).limit(1)
}

pub fn related_posts_query(category: &str, exclude_slug: &str, limit: u32) -> RestQuery {
    RestQuery::select_all()
        .eq("category", category)
        .neq("slug", exclude_slug)
        .order_desc("created_at")
        .limit(limit)
}

#[async_trait]
impl BlogPostRepository for RestContentRepo {
    async fn list_posts(&self, limit: Option<u32>) -> Result<Vec<BlogPost>, ContentError> {
        self.client()?
            .select(BLOG_TABLE, &list_posts_query(limit))
            .await
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, ContentError> {
        let rows: Vec<BlogPost> = self.client()?
            .select(BLOG_TABLE, &post_by_slug_query(slug))
            .await?;

        Ok(rows.into_iter().find(|post| post.slug == slug))
    }

    async fn list_related_posts(
        &self,
        category: &str,
        exclude_slug: &str,
        limit: u32,
    ) -> Result<Vec<BlogPost>, ContentError> {
        let rows: Vec<BlogPost> = self.client()?
            .select(BLOG_TABLE, &related_posts_query(category, exclude_slug, limit))
            .await?;

        // Filters are re-applied locally; the source post never counts as related.
        Ok(rows
            .into_iter()
            .filter(|post| post.slug != exclude_slug && post.category == category)
            .take(limit as usize)
            .collect())
    }
}
