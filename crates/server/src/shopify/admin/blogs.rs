//! Blog and article operations for the Admin API.

use serde::Deserialize;
use shopify_admin_mcp_core::legacy_resource_id;
use tracing::instrument;

use super::{AdminClient, queries};
use crate::shopify::{
    ArticleChanges, ArticleList, ArticleSummary, Blog, BlogList, Connection, CreatedArticle,
    NewArticle, ShopifyError, UpdatedArticle, UserError,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticlePayload {
    article: Option<ArticleNode>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
struct ArticleNode {
    id: String,
    handle: String,
    title: String,
}

impl ArticlePayload {
    fn into_article(self, operation: &str) -> Result<ArticleNode, ShopifyError> {
        if !self.user_errors.is_empty() {
            return Err(ShopifyError::user_errors(operation, &self.user_errors));
        }
        self.article.ok_or_else(|| {
            ShopifyError::MissingPayload(format!("{operation} failed: no article returned"))
        })
    }
}

/// Article search string, with an optional blog filter AND-ed on.
#[must_use]
pub fn article_search(query: Option<&str>, blog_id: Option<&str>) -> Option<String> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let blog = blog_id
        .filter(|b| !b.is_empty())
        .map(|b| format!("blog_id:{}", legacy_resource_id(b)));

    match (query, blog) {
        (Some(q), Some(b)) => Some(format!("{q} AND {b}")),
        (Some(q), None) => Some(q.to_string()),
        (None, b) => b,
    }
}

/// Article input fields shared by create and update.
fn article_fields(
    fields: &mut serde_json::Map<String, serde_json::Value>,
    title: Option<&str>,
    body_html: Option<&str>,
    author: Option<&str>,
    tags: Option<&[String]>,
    published: Option<bool>,
    published_at: Option<&str>,
) {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        fields.insert("title".into(), title.into());
    }
    if let Some(body) = body_html.filter(|b| !b.is_empty()) {
        fields.insert("body".into(), body.into());
    }
    if let Some(author) = author.filter(|a| !a.is_empty()) {
        fields.insert("author".into(), serde_json::json!({ "name": author }));
    }
    if let Some(tags) = tags {
        fields.insert("tags".into(), tags.into());
    }
    if let Some(published) = published {
        fields.insert("isPublished".into(), published.into());
    }
    if let Some(at) = published_at.filter(|a| !a.is_empty()) {
        fields.insert("publishedAt".into(), at.into());
    }
}

impl AdminClient {
    /// List blogs.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_blogs(&self, first: i64) -> Result<BlogList, ShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            blogs: Connection<Blog>,
        }

        let data: Data = self
            .query(queries::BLOGS, serde_json::json!({ "first": first }))
            .await?;
        Ok(BlogList {
            blogs: data.blogs.into_nodes(),
        })
    }

    /// List articles, optionally limited to one blog.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_articles(
        &self,
        blog_id: Option<&str>,
        first: i64,
        query: Option<&str>,
    ) -> Result<ArticleList, ShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            articles: Connection<ArticleSummary>,
        }

        let data: Data = self
            .query(
                queries::ARTICLES,
                serde_json::json!({
                    "first": first,
                    "query": article_search(query, blog_id),
                }),
            )
            .await?;
        Ok(ArticleList {
            articles: data.articles.into_nodes(),
        })
    }

    /// Create an article.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::UserError` if Shopify rejects the input and
    /// `ShopifyError::MissingPayload` if no article comes back.
    #[instrument(skip(self, input), fields(blog_id = %input.blog_id, title = %input.title))]
    pub async fn create_article(&self, input: &NewArticle) -> Result<CreatedArticle, ShopifyError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            article_create: ArticlePayload,
        }

        let mut fields = serde_json::Map::new();
        fields.insert("blogId".into(), input.blog_id.clone().into());
        fields.insert("title".into(), input.title.clone().into());
        fields.insert("body".into(), input.body_html.clone().into());
        if let Some(handle) = input.handle.as_deref().filter(|h| !h.is_empty()) {
            fields.insert("handle".into(), handle.into());
        }
        article_fields(
            &mut fields,
            None,
            None,
            input.author.as_deref(),
            input.tags.as_deref(),
            input.published,
            input.published_at.as_deref(),
        );

        let data: Data = self
            .query(queries::ARTICLE_CREATE, serde_json::json!({ "article": fields }))
            .await?;
        let article = data.article_create.into_article("Article create")?;

        Ok(CreatedArticle {
            admin_url: self.admin_url("articles", &article.id),
            article_id: article.id,
            handle: article.handle,
        })
    }

    /// Update an article. Only the provided fields change.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::UserError` if Shopify rejects the input and
    /// `ShopifyError::MissingPayload` if no article comes back.
    #[instrument(skip(self, changes))]
    pub async fn update_article(
        &self,
        id: &str,
        changes: &ArticleChanges,
    ) -> Result<UpdatedArticle, ShopifyError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            article_update: ArticlePayload,
        }

        let mut fields = serde_json::Map::new();
        article_fields(
            &mut fields,
            changes.title.as_deref(),
            changes.body_html.as_deref(),
            changes.author.as_deref(),
            changes.tags.as_deref(),
            changes.published,
            changes.published_at.as_deref(),
        );

        let data: Data = self
            .query(
                queries::ARTICLE_UPDATE,
                serde_json::json!({ "id": id, "article": fields }),
            )
            .await?;
        let article = data.article_update.into_article("Article update")?;

        Ok(UpdatedArticle {
            article_id: article.id,
            handle: article.handle,
            title: article.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_search_blog_only() {
        assert_eq!(
            article_search(None, Some("gid://shopify/Blog/123")).as_deref(),
            Some("blog_id:123")
        );
    }

    #[test]
    fn test_article_search_combines_filters() {
        assert_eq!(
            article_search(Some("tag:news"), Some("gid://shopify/Blog/7")).as_deref(),
            Some("tag:news AND blog_id:7")
        );
    }

    #[test]
    fn test_article_search_empty() {
        assert_eq!(article_search(Some("  "), None), None);
        assert_eq!(article_search(None, Some("")), None);
    }

    #[test]
    fn test_article_fields_only_sets_present_values() {
        let mut fields = serde_json::Map::new();
        let tags = vec!["a".to_string()];
        article_fields(
            &mut fields,
            Some("New"),
            None,
            Some("Ann"),
            Some(&tags),
            Some(false),
            None,
        );
        assert_eq!(
            serde_json::Value::Object(fields),
            serde_json::json!({
                "title": "New",
                "author": {"name": "Ann"},
                "tags": ["a"],
                "isPublished": false
            })
        );
    }
}
