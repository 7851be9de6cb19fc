// Data store for the articles platform. One struct over a SQLx
// connection pool, schema created by init(), every query written
// against the pool the same way throughout.

use anyhow::Result;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use uuid::Uuid;

use crate::models::{
    Article, ArticleSummary, Category, Comment, CommentView, ExportRow, Like, Review, ReviewView,
    SortMode, Tag, User,
};

pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self> {
        // An in-memory SQLite database exists per connection, so the pool
        // must stay at a single connection for ":memory:" URLs.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(database_url)
                .await?
        } else {
            SqlitePool::connect(database_url).await?
        };

        Ok(Database { pool })
    }

    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS sessions (
                token TEXT PRIMARY KEY,
                user_id INTEGER NOT NULL REFERENCES users(id),
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                slug TEXT NOT NULL UNIQUE
            )",
        )
        .execute(&self.pool)
        .await?;

        // Tag names are deliberately not unique at the schema level; the
        // resolver reuses the lowest-id row for a name.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tags (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                author_id INTEGER NOT NULL REFERENCES users(id),
                category_id INTEGER REFERENCES categories(id),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS article_tags (
                article_id INTEGER NOT NULL REFERENCES articles(id),
                tag_id INTEGER NOT NULL REFERENCES tags(id),
                PRIMARY KEY (article_id, tag_id)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS comments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                article_id INTEGER NOT NULL REFERENCES articles(id),
                user_id INTEGER NOT NULL REFERENCES users(id),
                content TEXT NOT NULL,
                created_at TEXT NOT NULL,
                active INTEGER NOT NULL DEFAULT 1
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                article_id INTEGER NOT NULL REFERENCES articles(id),
                reviewer_id INTEGER NOT NULL REFERENCES users(id),
                rating INTEGER NOT NULL,
                comment TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                approved INTEGER NOT NULL DEFAULT 0,
                UNIQUE(article_id, reviewer_id)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS likes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                article_id INTEGER NOT NULL REFERENCES articles(id),
                user_id INTEGER NOT NULL REFERENCES users(id),
                UNIQUE(article_id, user_id)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_articles_author ON articles(author_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_articles_category ON articles(category_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_comments_article ON comments(article_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_article ON reviews(article_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_likes_article ON likes(article_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // === Users and sessions ===

    pub async fn create_user(&self, username: &str, email: &str) -> Result<User> {
        let now = Utc::now().naive_utc();
        let result = sqlx::query("INSERT INTO users (username, email, created_at) VALUES (?, ?, ?)")
            .bind(username)
            .bind(email)
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: now,
        })
    }

    pub async fn find_user(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Issues a fresh opaque session token for a user. Login screens are
    /// outside this service; the seeder and tests call this directly.
    pub async fn issue_session(&self, user_id: i64) -> Result<String> {
        let token = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO sessions (token, user_id, created_at) VALUES (?, ?, ?)")
            .bind(&token)
            .bind(user_id)
            .bind(Utc::now().naive_utc())
            .execute(&self.pool)
            .await?;

        Ok(token)
    }

    pub async fn find_session_user(&self, token: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT u.id, u.username, u.email, u.created_at
             FROM sessions s JOIN users u ON u.id = s.user_id
             WHERE s.token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    // === Categories ===

    pub async fn create_category(&self, name: &str, slug: &str) -> Result<Category> {
        let result = sqlx::query("INSERT INTO categories (name, slug) VALUES (?, ?)")
            .bind(name)
            .bind(slug)
            .execute(&self.pool)
            .await?;

        Ok(Category {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            slug: slug.to_string(),
        })
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name, slug FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    pub async fn find_category(&self, id: i64) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name, slug FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    pub async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name, slug FROM categories WHERE slug = ?")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    /// Deleting a category detaches its articles (category_id goes NULL);
    /// it never removes the articles themselves.
    pub async fn delete_category(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE articles SET category_id = NULL WHERE category_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    // === Tags ===

    /// Exact-name lookup, creating the tag when absent. When the table
    /// already holds duplicate names the lowest id wins.
    pub async fn find_or_create_tag(&self, name: &str) -> Result<Tag> {
        let existing =
            sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE name = ? ORDER BY id LIMIT 1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        if let Some(tag) = existing {
            return Ok(tag);
        }

        let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Tag {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Set-like association: attaching an already-attached tag is a no-op.
    pub async fn attach_tag(&self, article_id: i64, tag_id: i64) -> Result<()> {
        sqlx::query(
            "INSERT INTO article_tags (article_id, tag_id) VALUES (?, ?)
             ON CONFLICT(article_id, tag_id) DO NOTHING",
        )
        .bind(article_id)
        .bind(tag_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn article_tag_names(&self, article_id: i64) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query(
            "SELECT t.name FROM article_tags at JOIN tags t ON t.id = at.tag_id
             WHERE at.article_id = ? ORDER BY t.id",
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|row| row.get::<String, _>(0))
        .collect();

        Ok(names)
    }

    // === Articles ===

    pub async fn create_article(
        &self,
        title: &str,
        content: &str,
        slug: &str,
        author_id: i64,
        category_id: Option<i64>,
    ) -> Result<Article> {
        let now = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO articles (title, content, slug, author_id, category_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(content)
        .bind(slug)
        .bind(author_id)
        .bind(category_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Article {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            content: content.to_string(),
            slug: slug.to_string(),
            author_id,
            category_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn find_article_by_slug(&self, slug: &str) -> Result<Option<Article>> {
        let article = sqlx::query_as::<_, Article>(
            "SELECT id, title, content, slug, author_id, category_id, created_at, updated_at
             FROM articles WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(article)
    }

    pub async fn slug_taken(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool> {
        let row = match exclude_id {
            Some(id) => {
                sqlx::query("SELECT 1 FROM articles WHERE slug = ? AND id != ?")
                    .bind(slug)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("SELECT 1 FROM articles WHERE slug = ?")
                    .bind(slug)
                    .fetch_optional(&self.pool)
                    .await?
            }
        };

        Ok(row.is_some())
    }

    /// Author is immutable; only the mutable fields and updated_at change.
    pub async fn update_article(
        &self,
        id: i64,
        title: &str,
        content: &str,
        slug: &str,
        category_id: Option<i64>,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE articles SET title = ?, content = ?, slug = ?, category_id = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(title)
        .bind(content)
        .bind(slug)
        .bind(category_id)
        .bind(Utc::now().naive_utc())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Explicit cascade: an article owns its comments, reviews, likes and
    /// tag links, and takes them with it.
    pub async fn delete_article(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comments WHERE article_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM reviews WHERE article_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM likes WHERE article_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM article_tags WHERE article_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    // === Listing ===

    /// Filtered, sorted, windowed listing. The search term matches
    /// case-insensitively as a substring of the title, the author's
    /// username or the category name; SQL wildcard characters in the term
    /// are escaped so they match literally.
    pub async fn list_articles(
        &self,
        search: Option<&str>,
        sort: SortMode,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ArticleSummary>> {
        let order = match sort {
            SortMode::Comments => "num_comments DESC, a.id DESC",
            SortMode::Likes => "total_likes DESC, a.id DESC",
            SortMode::Recent => "a.created_at DESC, a.id DESC",
        };

        let sql = format!(
            "SELECT DISTINCT a.id, a.title, a.slug, u.username AS author,
                    c.name AS category, a.created_at,
                    (SELECT COUNT(*) FROM likes l WHERE l.article_id = a.id) AS total_likes,
                    (SELECT COUNT(*) FROM comments m WHERE m.article_id = a.id) AS num_comments
             FROM articles a
             JOIN users u ON u.id = a.author_id
             LEFT JOIN categories c ON c.id = a.category_id
             {filter}
             ORDER BY {order}
             LIMIT ? OFFSET ?",
            filter = if search.is_some() { SEARCH_FILTER } else { "" },
            order = order,
        );

        let mut query = sqlx::query_as::<_, ArticleSummary>(&sql);
        if let Some(term) = search {
            let pattern = format!("%{}%", escape_like(term));
            query = query
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern);
        }

        let articles = query.bind(limit).bind(offset).fetch_all(&self.pool).await?;
        Ok(articles)
    }

    pub async fn count_articles(&self, search: Option<&str>) -> Result<i64> {
        let sql = format!(
            "SELECT COUNT(DISTINCT a.id)
             FROM articles a
             JOIN users u ON u.id = a.author_id
             LEFT JOIN categories c ON c.id = a.category_id
             {filter}",
            filter = if search.is_some() { SEARCH_FILTER } else { "" },
        );

        let mut query = sqlx::query(&sql);
        if let Some(term) = search {
            let pattern = format!("%{}%", escape_like(term));
            query = query
                .bind(pattern.clone())
                .bind(pattern.clone())
                .bind(pattern);
        }

        let row = query.fetch_one(&self.pool).await?;
        Ok(row.get::<i64, _>(0))
    }

    /// Every article in a category, newest first, no window.
    pub async fn list_articles_in_category(&self, category_id: i64) -> Result<Vec<ArticleSummary>> {
        let articles = sqlx::query_as::<_, ArticleSummary>(
            "SELECT a.id, a.title, a.slug, u.username AS author,
                    c.name AS category, a.created_at,
                    (SELECT COUNT(*) FROM likes l WHERE l.article_id = a.id) AS total_likes,
                    (SELECT COUNT(*) FROM comments m WHERE m.article_id = a.id) AS num_comments
             FROM articles a
             JOIN users u ON u.id = a.author_id
             LEFT JOIN categories c ON c.id = a.category_id
             WHERE a.category_id = ?
             ORDER BY a.created_at DESC, a.id DESC",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(articles)
    }

    // === Likes ===

    pub async fn find_like(&self, article_id: i64, user_id: i64) -> Result<Option<Like>> {
        let like = sqlx::query_as::<_, Like>(
            "SELECT id, article_id, user_id FROM likes WHERE article_id = ? AND user_id = ?",
        )
        .bind(article_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(like)
    }

    /// Returns true only when a row was actually inserted. A concurrent
    /// duplicate hits the unique key and lands in DO NOTHING, which is the
    /// already-exists case and must not count as a creation.
    pub async fn insert_like(&self, article_id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO likes (article_id, user_id) VALUES (?, ?)
             ON CONFLICT(article_id, user_id) DO NOTHING",
        )
        .bind(article_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_like(&self, article_id: i64, user_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM likes WHERE article_id = ? AND user_id = ?")
            .bind(article_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn like_count(&self, article_id: i64) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) FROM likes WHERE article_id = ?")
            .bind(article_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<i64, _>(0))
    }

    // === Reviews ===

    pub async fn find_review(&self, article_id: i64, reviewer_id: i64) -> Result<Option<Review>> {
        let review = sqlx::query_as::<_, Review>(
            "SELECT id, article_id, reviewer_id, rating, comment, created_at, approved
             FROM reviews WHERE article_id = ? AND reviewer_id = ?",
        )
        .bind(article_id)
        .bind(reviewer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(review)
    }

    /// One review per (article, reviewer): the unique key turns a second
    /// submission into an in-place update of rating and comment.
    /// created_at and approved keep their original values.
    pub async fn upsert_review(
        &self,
        article_id: i64,
        reviewer_id: i64,
        rating: i64,
        comment: &str,
    ) -> Result<Review> {
        sqlx::query(
            "INSERT INTO reviews (article_id, reviewer_id, rating, comment, created_at, approved)
             VALUES (?, ?, ?, ?, ?, 0)
             ON CONFLICT(article_id, reviewer_id)
             DO UPDATE SET rating = excluded.rating, comment = excluded.comment",
        )
        .bind(article_id)
        .bind(reviewer_id)
        .bind(rating)
        .bind(comment)
        .bind(Utc::now().naive_utc())
        .execute(&self.pool)
        .await?;

        let review = sqlx::query_as::<_, Review>(
            "SELECT id, article_id, reviewer_id, rating, comment, created_at, approved
             FROM reviews WHERE article_id = ? AND reviewer_id = ?",
        )
        .bind(article_id)
        .bind(reviewer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    pub async fn average_rating(&self, article_id: i64) -> Result<Option<f64>> {
        let row = sqlx::query("SELECT AVG(rating) FROM reviews WHERE article_id = ?")
            .bind(article_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<Option<f64>, _>(0))
    }

    pub async fn reviews_for_article(&self, article_id: i64) -> Result<Vec<ReviewView>> {
        let reviews = sqlx::query_as::<_, ReviewView>(
            "SELECT r.id, u.username AS reviewer, r.rating, r.comment, r.created_at, r.approved
             FROM reviews r JOIN users u ON u.id = r.reviewer_id
             WHERE r.article_id = ?
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    // === Comments ===

    pub async fn insert_comment(
        &self,
        article_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Comment> {
        let now = Utc::now().naive_utc();
        let result = sqlx::query(
            "INSERT INTO comments (article_id, user_id, content, created_at, active)
             VALUES (?, ?, ?, ?, 1)",
        )
        .bind(article_id)
        .bind(user_id)
        .bind(content)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Comment {
            id: result.last_insert_rowid(),
            article_id,
            user_id,
            content: content.to_string(),
            created_at: now,
            active: true,
        })
    }

    pub async fn comments_for_article(&self, article_id: i64) -> Result<Vec<CommentView>> {
        let comments = sqlx::query_as::<_, CommentView>(
            "SELECT c.id, u.username AS user, c.content, c.created_at, c.active
             FROM comments c JOIN users u ON u.id = c.user_id
             WHERE c.article_id = ?
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    // === Export ===

    /// Full table scan in primary-key order; both exports iterate this.
    pub async fn export_rows(&self) -> Result<Vec<ExportRow>> {
        let rows = sqlx::query_as::<_, ExportRow>(
            "SELECT a.title, u.username AS author, c.name AS category_name,
                    a.category_id, a.created_at, a.content
             FROM articles a
             JOIN users u ON u.id = a.author_id
             LEFT JOIN categories c ON c.id = a.category_id
             ORDER BY a.id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

const SEARCH_FILTER: &str = "WHERE (a.title LIKE ? ESCAPE '\\'
                 OR u.username LIKE ? ESCAPE '\\'
                 OR c.name LIKE ? ESCAPE '\\')";

/// Escapes SQL LIKE wildcards so a search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.init().await.unwrap();
        db.init().await.unwrap();

        let user = db.create_user("ana", "ana@example.com").await.unwrap();
        assert_eq!(user.username, "ana");
    }

    #[tokio::test]
    async fn schema_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let user_id = {
            let db = Database::connect(&url).await.unwrap();
            db.init().await.unwrap();
            let user = db.create_user("ana", "ana@example.com").await.unwrap();
            db.pool.close().await;
            user.id
        };

        let db = Database::connect(&url).await.unwrap();
        db.init().await.unwrap();
        let user = db.find_user(user_id).await.unwrap().unwrap();
        assert_eq!(user.username, "ana");
    }

    #[tokio::test]
    async fn duplicate_like_insert_is_a_no_op() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.init().await.unwrap();

        let user = db.create_user("ana", "").await.unwrap();
        let article = db
            .create_article("T", "C", "t", user.id, None)
            .await
            .unwrap();

        assert!(db.insert_like(article.id, user.id).await.unwrap());
        assert!(!db.insert_like(article.id, user.id).await.unwrap());
        assert_eq!(db.like_count(article.id).await.unwrap(), 1);
    }
}
