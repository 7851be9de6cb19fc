// Data model for the articles platform: persisted rows plus the
// view-shaping structs the HTTP layer serializes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Reference data created administratively. Ej: Tecnología, Salud,
/// Educación.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Free-form label attached to articles. Names are not unique at the
/// schema level; the resolver always reuses the lowest-id row for a name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub author_id: i64,
    pub category_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub article_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub active: bool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    pub article_id: i64,
    pub reviewer_id: i64,
    pub rating: i64,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub approved: bool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Like {
    pub id: i64,
    pub article_id: i64,
    pub user_id: i64,
}

/// Listing sort modes. Anything unrecognized falls back to recency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Recent,
    Comments,
    Likes,
}

impl SortMode {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("comments") => SortMode::Comments,
            Some("likes") => SortMode::Likes,
            _ => SortMode::Recent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Recent => "recent",
            SortMode::Comments => "comments",
            SortMode::Likes => "likes",
        }
    }
}

// === View structs (serialized by the HTTP layer) ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        CategoryView {
            id: category.id,
            name: category.name,
            slug: category.slug,
        }
    }
}

/// One row of the article listing, with the counts the list is sortable
/// by already aggregated.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub category: Option<String>,
    pub created_at: NaiveDateTime,
    pub total_likes: i64,
    pub num_comments: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CommentView {
    pub id: i64,
    pub user: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReviewView {
    pub id: i64,
    pub reviewer: String,
    pub rating: i64,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub approved: bool,
}

/// Everything the article detail page needs in one payload.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub author: String,
    pub category: Option<CategoryView>,
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub total_likes: i64,
    pub average_rating: Option<f64>,
    pub user_has_liked: bool,
    pub user_review: Option<ReviewView>,
    pub comments: Vec<CommentView>,
    pub reviews: Vec<ReviewView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub number: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub articles: Vec<ArticleSummary>,
    pub page: PageMeta,
}

/// Per-category listing: all matching articles, no pagination.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub category: CategoryView,
    pub articles: Vec<ArticleSummary>,
}

/// Flat article row used by both exports; `category_name` feeds the CSV
/// column, `category_id` the JSON field.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExportRow {
    pub title: String,
    pub author: String,
    pub category_name: Option<String>,
    pub category_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_falls_back_to_recency() {
        assert_eq!(SortMode::from_param(Some("comments")), SortMode::Comments);
        assert_eq!(SortMode::from_param(Some("likes")), SortMode::Likes);
        assert_eq!(SortMode::from_param(Some("banana")), SortMode::Recent);
        assert_eq!(SortMode::from_param(None), SortMode::Recent);
    }
}
