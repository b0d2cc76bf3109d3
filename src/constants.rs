use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Category filter value that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

pub const RELATED_POSTS_LIMIT: u32 = 3;
pub const HOME_POSTS_LIMIT: u32 = 3;
pub const HOME_PROJECTS_LIMIT: usize = 3;

pub const DEFAULT_READ_TIME: &str = "3 min read";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

pub const BLOG_TABLE: &str = "blogs";
pub const CONTACT_TABLE: &str = "contact_messages";
