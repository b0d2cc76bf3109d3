use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    constants::{DEFAULT_READ_TIME, PLACEHOLDER_IMAGE},
    entities::category::Categorized,
    utils::{
        date_format::{deserialize_store_timestamp, format_display_date},
        markup::content_to_html,
        stagger::Staged,
    },
};

// ───── Store Records ─────────────────────────────────────────────────

/// One row of the `blogs` table as the content store returns it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BlogPost {
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "deserialize_store_timestamp")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub read_time: Option<String>,
}

/// Identifiers arrive as numbers or strings depending on the table's key type.
fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("unsupported id: {}", other))),
    }
}

/// Nullable text columns come back as `null` rather than missing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Categorized for BlogPost {
    fn category(&self) -> &str {
        &self.category
    }
}

// ───── View Models ───────────────────────────────────────────────────

/// Summary card used by listings, the home page and related posts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BlogPostCard {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub thumbnail: String,
    pub category: String,
    pub published_on: String,
    pub read_time: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BlogPostDetail {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub thumbnail: String,
    pub category: String,
    pub published_on: String,
    pub created_at: DateTime<FixedOffset>,
    pub read_time: String,
    pub content_html: String,
    pub related: Vec<Staged<BlogPostCard>>,
}

// ───── Conversions ───────────────────────────────────────────────────

impl BlogPost {
    pub fn read_time_or_default(&self) -> String {
        self.read_time
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_READ_TIME)
            .to_string()
    }

    fn thumbnail_or_placeholder(&self) -> String {
        self.thumbnail
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string()
    }

    pub fn to_card(&self) -> BlogPostCard {
        BlogPostCard {
            title: self.title.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            thumbnail: self.thumbnail_or_placeholder(),
            category: self.category.clone(),
            published_on: format_display_date(&self.created_at),
            read_time: self.read_time_or_default(),
        }
    }

    pub fn into_detail(self, related: Vec<Staged<BlogPostCard>>) -> BlogPostDetail {
        BlogPostDetail {
            thumbnail: self.thumbnail_or_placeholder(),
            published_on: format_display_date(&self.created_at),
            read_time: self.read_time_or_default(),
            content_html: content_to_html(&self.content),
            id: self.id,
            title: self.title,
            slug: self.slug,
            summary: self.summary,
            category: self.category,
            created_at: self.created_at,
            related,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_numeric_id_and_defaults() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": 42,
            "title": "Hello",
            "slug": "hello",
            "created_at": "2024-02-01T09:00:00+00:00"
        }))
        .expect("valid row");

        assert_eq!(post.id, "42");
        assert_eq!(post.summary, "");
        assert_eq!(post.read_time, None);
        assert_eq!(post.read_time_or_default(), "3 min read");
    }

    #[test]
    fn null_text_columns_read_as_empty() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": 7,
            "title": "Sparse",
            "slug": "sparse",
            "summary": null,
            "thumbnail": null,
            "content": null,
            "category": null,
            "created_at": "2024-02-01T09:00:00+00:00",
            "read_time": null
        }))
        .expect("nullable columns are accepted");

        assert_eq!(post.summary, "");
        assert_eq!(post.content, "");
        assert_eq!(post.category, "");
        assert_eq!(post.to_card().read_time, "3 min read");
    }

    #[test]
    fn row_without_slug_is_malformed() {
        let result = serde_json::from_value::<BlogPost>(json!({
            "id": "a",
            "title": "No slug",
            "created_at": "2024-02-01"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn card_formats_date_and_falls_back_to_placeholder() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": "p1",
            "title": "Rust",
            "slug": "rust",
            "summary": "Why Rust",
            "thumbnail": "",
            "category": "backend",
            "created_at": "2024-02-01T09:00:00Z",
            "read_time": "7 min read"
        }))
        .expect("valid row");

        let card = post.to_card();
        assert_eq!(card.published_on, "1 February 2024");
        assert_eq!(card.thumbnail, "/placeholder.png");
        assert_eq!(card.read_time, "7 min read");
    }

    #[test]
    fn detail_renders_content() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": "p1",
            "title": "Rust",
            "slug": "rust",
            "content": "## Why\n\nBecause **speed**",
            "created_at": "2024-02-01"
        }))
        .expect("valid row");

        let detail = post.into_detail(vec![]);
        assert!(detail.content_html.starts_with("<h2"));
        assert!(detail.content_html.contains(r#"<strong class="font-semibold">speed</strong>"#));
    }
}
