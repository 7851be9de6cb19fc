// Search, sort and pagination for the article listing, plus the
// unpaginated per-category view.

use std::sync::Arc;

use crate::{
    database::Database,
    error::{AppError, AppResult},
    models::{CategoryListing, CategoryView, ListingPage, PageMeta, SortMode},
};

pub const PAGE_SIZE: i64 = 6;

#[derive(Clone)]
pub struct ListingService {
    db: Arc<Database>,
}

impl ListingService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// One page of the listing. Out-of-range page numbers clamp to the
    /// nearest valid page instead of erroring, and an empty result set
    /// still counts as one page.
    pub async fn page(
        &self,
        search: Option<&str>,
        sort: SortMode,
        requested_page: Option<i64>,
    ) -> AppResult<ListingPage> {
        let search = search.map(str::trim).filter(|q| !q.is_empty());

        let total_count = self.db.count_articles(search).await?;
        let total_pages = total_page_count(total_count);
        let number = clamp_page(requested_page, total_pages);

        let offset = (number - 1) * PAGE_SIZE;
        let articles = self.db.list_articles(search, sort, PAGE_SIZE, offset).await?;

        Ok(ListingPage {
            articles,
            page: PageMeta {
                number,
                total_pages,
                total_count,
                has_next: number < total_pages,
                has_previous: number > 1,
            },
        })
    }

    /// Every article in the category, no pagination. The main listing
    /// paginates and this one does not; that asymmetry is kept as-is.
    pub async fn by_category(&self, category_slug: &str) -> AppResult<CategoryListing> {
        let category = self
            .db
            .find_category_by_slug(category_slug)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Category with slug '{}' not found", category_slug))
            })?;

        let articles = self.db.list_articles_in_category(category.id).await?;

        Ok(CategoryListing {
            category: CategoryView::from(category),
            articles,
        })
    }
}

fn total_page_count(total_count: i64) -> i64 {
    ((total_count + PAGE_SIZE - 1) / PAGE_SIZE).max(1)
}

fn clamp_page(requested: Option<i64>, total_pages: i64) -> i64 {
    requested.unwrap_or(1).clamp(1, total_pages)
}
