// Like toggling, review upserts and comment posting. All outbound
// notifications here are fire-and-forget: a failed send is logged and
// the triggering operation still succeeds.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::{
    auth::Viewer,
    database::Database,
    error::{AppError, AppResult},
    models::{Article, CommentView, ReviewView},
    notifier::{Notifier, OutboundEmail},
};

#[derive(Debug, Clone, Serialize)]
pub struct LikeToggle {
    pub liked: bool,
    pub total_likes: i64,
}

#[derive(Clone)]
pub struct InteractionService {
    db: Arc<Database>,
    notifier: Arc<dyn Notifier>,
    from_address: String,
}

impl InteractionService {
    pub fn new(db: Arc<Database>, notifier: Arc<dyn Notifier>, from_address: String) -> Self {
        Self {
            db,
            notifier,
            from_address,
        }
    }

    /// Idempotent toggle: an existing like is removed, a missing one is
    /// created. The author is notified only on creation, and only when
    /// they have an email address on file.
    pub async fn toggle_like(&self, viewer: &Viewer, slug: &str) -> AppResult<LikeToggle> {
        let article = self.find_article(slug).await?;

        let liked = if self.db.find_like(article.id, viewer.user_id).await?.is_some() {
            self.db.delete_like(article.id, viewer.user_id).await?;
            false
        } else {
            let created = self.db.insert_like(article.id, viewer.user_id).await?;
            if created {
                self.notify_like(viewer, &article).await;
            }
            true
        };

        let total_likes = self.db.like_count(article.id).await?;
        Ok(LikeToggle { liked, total_likes })
    }

    /// Form-validated review path: an out-of-range rating is rejected
    /// and nothing is written.
    pub async fn submit_review_form(
        &self,
        viewer: &Viewer,
        slug: &str,
        rating: i64,
        comment: &str,
    ) -> AppResult<ReviewView> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let article = self.find_article(slug).await?;
        self.upsert(viewer, article.id, rating, comment.trim()).await
    }

    /// Raw-parameter review path: a missing rating counts as 0 and any
    /// out-of-range value is stored as 1. This diverges from the form
    /// path on purpose; the two entry points have different validation
    /// strength and both are kept.
    pub async fn submit_review_raw(
        &self,
        viewer: &Viewer,
        slug: &str,
        rating: Option<i64>,
        comment: Option<&str>,
    ) -> AppResult<ReviewView> {
        let mut rating = rating.unwrap_or(0);
        if !(1..=5).contains(&rating) {
            rating = 1;
        }

        let article = self.find_article(slug).await?;
        let comment = comment.unwrap_or("").trim();
        self.upsert(viewer, article.id, rating, comment).await
    }

    /// Creates a comment and notifies the article's author. Unlike the
    /// like notification this one is not gated on the author having an
    /// email address.
    pub async fn post_comment(
        &self,
        viewer: &Viewer,
        slug: &str,
        content: &str,
    ) -> AppResult<CommentView> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation("Comment content is required".to_string()));
        }

        let article = self.find_article(slug).await?;
        let comment = self
            .db
            .insert_comment(article.id, viewer.user_id, content)
            .await?;

        self.notify_comment(viewer, &article, content).await;

        Ok(CommentView {
            id: comment.id,
            user: viewer.username.clone(),
            content: comment.content,
            created_at: comment.created_at,
            active: comment.active,
        })
    }

    async fn upsert(
        &self,
        viewer: &Viewer,
        article_id: i64,
        rating: i64,
        comment: &str,
    ) -> AppResult<ReviewView> {
        let review = self
            .db
            .upsert_review(article_id, viewer.user_id, rating, comment)
            .await?;

        Ok(ReviewView {
            id: review.id,
            reviewer: viewer.username.clone(),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            approved: review.approved,
        })
    }

    async fn notify_like(&self, viewer: &Viewer, article: &Article) {
        let author = match self.db.find_user(article.author_id).await {
            Ok(Some(author)) => author,
            Ok(None) => return,
            Err(err) => {
                warn!("like notification skipped, author lookup failed: {err:#}");
                return;
            }
        };

        if author.email.is_empty() {
            return;
        }

        let email = OutboundEmail {
            subject: format!("Tu artículo '{}' recibió un nuevo like", article.title),
            body: format!(
                "Hola {},\n\nEl usuario {} ha dado like a tu artículo '{}'.\n\n¡Revisa tu artículo para ver más detalles!",
                author.username, viewer.username, article.title
            ),
            from: self.from_address.clone(),
            to: author.email,
        };

        if let Err(err) = self.notifier.send(email).await {
            warn!("failed to deliver like notification: {err:#}");
        }
    }

    async fn notify_comment(&self, viewer: &Viewer, article: &Article, content: &str) {
        let author = match self.db.find_user(article.author_id).await {
            Ok(Some(author)) => author,
            Ok(None) => return,
            Err(err) => {
                warn!("comment notification skipped, author lookup failed: {err:#}");
                return;
            }
        };

        let email = OutboundEmail {
            subject: format!("Nuevo comentario en '{}'", article.title),
            body: format!(
                "{} ha comentado tu artículo:\n\n{}",
                viewer.username, content
            ),
            from: self.from_address.clone(),
            to: author.email,
        };

        if let Err(err) = self.notifier.send(email).await {
            warn!("failed to deliver comment notification: {err:#}");
        }
    }

    async fn find_article(&self, slug: &str) -> AppResult<Article> {
        self.db
            .find_article_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article with slug '{}' not found", slug)))
    }
}
