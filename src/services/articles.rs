// Article creation and editing, plus the detail read used all over the
// HTTP surface.

use std::sync::Arc;

use crate::{
    auth::Viewer,
    database::Database,
    error::{AppError, AppResult},
    models::{Article, ArticleDetail, Category, CategoryView},
    services::tags,
};

#[derive(Debug, Clone)]
pub struct CreateArticleInput {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub category_id: Option<i64>,
    pub tags_input: String,
}

/// Edit carries no tag field: editing never touches tag associations.
#[derive(Debug, Clone)]
pub struct EditArticleInput {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub category_id: Option<i64>,
}

#[derive(Clone)]
pub struct ArticleService {
    db: Arc<Database>,
}

impl ArticleService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Creates an article owned by the viewer, then resolves tags. The
    /// two store operations are deliberately separate: a crash in
    /// between leaves a tagless article, not a corrupt one.
    pub async fn create(&self, viewer: &Viewer, input: CreateArticleInput) -> AppResult<Article> {
        let (title, content, slug) =
            self.validate_fields(&input.title, &input.content, &input.slug, None)
                .await?;

        if let Some(category_id) = input.category_id {
            if self.db.find_category(category_id).await?.is_none() {
                return Err(AppError::Validation(
                    "The selected category does not exist".to_string(),
                ));
            }
        }

        let article = self
            .db
            .create_article(&title, &content, &slug, viewer.user_id, input.category_id)
            .await?;

        tags::resolve_and_attach(&self.db, article.id, &input.tags_input).await?;

        Ok(article)
    }

    /// Author-only edit. Unknown slug is 404, someone else's article is
    /// 403, and the slug uniqueness check excludes the article itself.
    pub async fn edit(
        &self,
        viewer: &Viewer,
        slug: &str,
        input: EditArticleInput,
    ) -> AppResult<Article> {
        let article = self.find_by_slug(slug).await?;

        if viewer.user_id != article.author_id {
            return Err(AppError::Forbidden(
                "No puedes editar un artículo que no es tuyo.".to_string(),
            ));
        }

        let (title, content, new_slug) = self
            .validate_fields(&input.title, &input.content, &input.slug, Some(article.id))
            .await?;

        if let Some(category_id) = input.category_id {
            if self.db.find_category(category_id).await?.is_none() {
                return Err(AppError::Validation(
                    "The selected category does not exist".to_string(),
                ));
            }
        }

        self.db
            .update_article(article.id, &title, &content, &new_slug, input.category_id)
            .await?;

        self.find_by_slug(&new_slug).await
    }

    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Article> {
        self.db
            .find_article_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article with slug '{}' not found", slug)))
    }

    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.db.list_categories().await?)
    }

    /// Everything the detail page needs: the article, its tags, comments
    /// and reviews, the aggregates, and the viewer's own like/review
    /// state.
    pub async fn detail(&self, viewer: &Viewer, slug: &str) -> AppResult<ArticleDetail> {
        let article = self.find_by_slug(slug).await?;

        let author = self
            .db
            .find_user(article.author_id)
            .await?
            .ok_or_else(|| AppError::Internal("article author missing".to_string()))?;

        let category = match article.category_id {
            Some(id) => self.db.find_category(id).await?.map(CategoryView::from),
            None => None,
        };

        let tags = self.db.article_tag_names(article.id).await?;
        let comments = self.db.comments_for_article(article.id).await?;
        let reviews = self.db.reviews_for_article(article.id).await?;
        let total_likes = self.db.like_count(article.id).await?;
        let average_rating = self.db.average_rating(article.id).await?;
        let user_has_liked = self
            .db
            .find_like(article.id, viewer.user_id)
            .await?
            .is_some();
        let user_review = match self.db.find_review(article.id, viewer.user_id).await? {
            Some(review) => {
                let reviewer = viewer.username.clone();
                Some(crate::models::ReviewView {
                    id: review.id,
                    reviewer,
                    rating: review.rating,
                    comment: review.comment,
                    created_at: review.created_at,
                    approved: review.approved,
                })
            }
            None => None,
        };

        Ok(ArticleDetail {
            id: article.id,
            title: article.title,
            content: article.content,
            slug: article.slug,
            author: author.username,
            category,
            tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
            total_likes,
            average_rating,
            user_has_liked,
            user_review,
            comments,
            reviews,
        })
    }

    async fn validate_fields(
        &self,
        title: &str,
        content: &str,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> AppResult<(String, String, String)> {
        let title = title.trim();
        let content = content.trim();
        let slug = slug.trim();

        if title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        if content.is_empty() {
            return Err(AppError::Validation("Content is required".to_string()));
        }
        if slug.is_empty() {
            return Err(AppError::Validation("Slug is required".to_string()));
        }
        if slug.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(
                "El slug no puede contener espacios.".to_string(),
            ));
        }
        if self.db.slug_taken(slug, exclude_id).await? {
            return Err(AppError::Validation(format!(
                "An article with slug '{}' already exists",
                slug
            )));
        }

        Ok((title.to_string(), content.to_string(), slug.to_string()))
    }
}
