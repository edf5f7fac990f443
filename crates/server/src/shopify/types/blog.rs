//! Blog and article types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub handle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub published_at: Option<String>,
}

/// Result of `get_blogs`.
#[derive(Debug, Clone, Serialize)]
pub struct BlogList {
    pub blogs: Vec<Blog>,
}

/// Result of `get_articles`.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleList {
    pub articles: Vec<ArticleSummary>,
}

/// Fields for `articleCreate`. Optional fields are omitted when `None`.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub blog_id: String,
    pub title: String,
    pub body_html: String,
    pub handle: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub published_at: Option<String>,
}

/// Fields for `articleUpdate`. Only the provided fields are sent.
#[derive(Debug, Clone, Default)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub body_html: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedArticle {
    pub article_id: String,
    pub handle: String,
    pub admin_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedArticle {
    pub article_id: String,
    pub handle: String,
    pub title: String,
}
