// HTTP surface: typed request/response structs per operation, axum
// handlers, and the router assembly.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    app_state::AppState,
    auth::Viewer,
    data_seeder,
    error::{AppError, AppResult},
    models::{ArticleDetail, CategoryListing, CategoryView, ListingPage, SortMode},
    services::articles::{CreateArticleInput, EditArticleInput},
    services::interactions::LikeToggle,
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub category_id: Option<i64>,
    #[serde(default)]
    pub tags_input: String,
}

#[derive(Debug, Deserialize)]
pub struct EditArticleRequest {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub category_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewSubmit {
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentSubmit {
    pub content: String,
}

/// Typed stand-in for the detail page's two submit buttons: exactly one
/// of the fields selects the action.
#[derive(Debug, Deserialize)]
pub struct DetailSubmitRequest {
    pub review_submit: Option<ReviewSubmit>,
    pub comment_submit: Option<CommentSubmit>,
}

/// Raw review parameters: nothing here is validated beyond presence,
/// which is exactly what makes this path clamp instead of reject.
#[derive(Debug, Deserialize)]
pub struct RawReviewRequest {
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticleFormContext {
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Serialize)]
pub struct EditFormContext {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub category_id: Option<i64>,
    pub categories: Vec<CategoryView>,
}

async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<ListingPage>> {
    let sort = SortMode::from_param(params.sort.as_deref());
    let page = state
        .listing
        .page(params.q.as_deref(), sort, params.page)
        .await?;

    Ok(Json(page))
}

async fn create_article_form(
    State(state): State<AppState>,
    _viewer: Viewer,
) -> AppResult<Json<ArticleFormContext>> {
    let categories = state.articles.categories().await?;
    Ok(Json(ArticleFormContext {
        categories: categories.into_iter().map(CategoryView::from).collect(),
    }))
}

async fn create_article(
    State(state): State<AppState>,
    viewer: Viewer,
    Json(req): Json<CreateArticleRequest>,
) -> AppResult<impl IntoResponse> {
    let article = state
        .articles
        .create(
            &viewer,
            CreateArticleInput {
                title: req.title,
                content: req.content,
                slug: req.slug,
                category_id: req.category_id,
                tags_input: req.tags_input,
            },
        )
        .await?;

    let location = format!("/articles/{}", article.slug);
    let detail = state.articles.detail(&viewer, &article.slug).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(detail),
    ))
}

async fn edit_article_form(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(slug): Path<String>,
) -> AppResult<Json<EditFormContext>> {
    let article = state.articles.find_by_slug(&slug).await?;
    if viewer.user_id != article.author_id {
        return Err(AppError::Forbidden(
            "No puedes editar un artículo que no es tuyo.".to_string(),
        ));
    }

    let categories = state.articles.categories().await?;
    Ok(Json(EditFormContext {
        title: article.title,
        content: article.content,
        slug: article.slug,
        category_id: article.category_id,
        categories: categories.into_iter().map(CategoryView::from).collect(),
    }))
}

async fn edit_article(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(slug): Path<String>,
    Json(req): Json<EditArticleRequest>,
) -> AppResult<Json<ArticleDetail>> {
    let article = state
        .articles
        .edit(
            &viewer,
            &slug,
            EditArticleInput {
                title: req.title,
                content: req.content,
                slug: req.slug,
                category_id: req.category_id,
            },
        )
        .await?;

    let detail = state.articles.detail(&viewer, &article.slug).await?;
    Ok(Json(detail))
}

async fn article_detail(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(slug): Path<String>,
) -> AppResult<Json<ArticleDetail>> {
    let detail = state.articles.detail(&viewer, &slug).await?;
    Ok(Json(detail))
}

/// Nested submit on the detail page. A review submission wins when both
/// are present; a body with neither is rejected.
async fn article_detail_submit(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(slug): Path<String>,
    Json(req): Json<DetailSubmitRequest>,
) -> AppResult<Json<Value>> {
    if let Some(review) = req.review_submit {
        let stored = state
            .interactions
            .submit_review_form(&viewer, &slug, review.rating, &review.comment)
            .await?;
        return Ok(Json(json!({ "review": stored })));
    }

    if let Some(comment) = req.comment_submit {
        let stored = state
            .interactions
            .post_comment(&viewer, &slug, &comment.content)
            .await?;
        return Ok(Json(json!({ "comment": stored })));
    }

    Err(AppError::Validation(
        "Either review_submit or comment_submit is required".to_string(),
    ))
}

async fn toggle_like(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(slug): Path<String>,
) -> AppResult<Json<LikeToggle>> {
    let toggle = state.interactions.toggle_like(&viewer, &slug).await?;
    Ok(Json(toggle))
}

async fn review_article(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(slug): Path<String>,
    Json(req): Json<RawReviewRequest>,
) -> AppResult<Json<Value>> {
    let stored = state
        .interactions
        .submit_review_raw(&viewer, &slug, req.rating, req.comment.as_deref())
        .await?;

    Ok(Json(json!({ "review": stored })))
}

async fn export_csv(State(state): State<AppState>, _viewer: Viewer) -> AppResult<impl IntoResponse> {
    let body = state.exports.csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"articles.csv\"",
            ),
        ],
        body,
    ))
}

async fn export_json(
    State(state): State<AppState>,
    _viewer: Viewer,
) -> AppResult<impl IntoResponse> {
    let body = state.exports.json().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"articles.json\"",
            ),
        ],
        body,
    ))
}

async fn articles_by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<CategoryListing>> {
    let listing = state.listing.by_category(&slug).await?;
    Ok(Json(listing))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "articles-platform",
        "timestamp": chrono::Utc::now().timestamp_millis()
    }))
}

async fn seed_data(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let summary = data_seeder::seed(&state).await?;
    Ok(Json(summary))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/articles", get(list_articles))
        .route("/articles/create", get(create_article_form).post(create_article))
        .route("/articles/export/csv", get(export_csv))
        .route("/articles/export/json", get(export_json))
        .route("/articles/category/{slug}", get(articles_by_category))
        .route("/articles/{slug}", get(article_detail).post(article_detail_submit))
        .route("/articles/{slug}/edit", get(edit_article_form).post(edit_article))
        .route("/articles/{slug}/like", get(toggle_like).post(toggle_like))
        .route("/articles/{slug}/review", post(review_article))
        .route("/api/health", get(health_check))
        .route("/api/seed", post(seed_data))
        .with_state(state)
}
