#![allow(dead_code)]

use std::sync::Arc;

use articles_platform::{
    app_state::AppState,
    auth::Viewer,
    config::{Config, DatabaseConfig, MailConfig, ServerConfig},
    database::Database,
    models::Article,
    notifier::RecordingNotifier,
    services::articles::CreateArticleInput,
};

/// In-memory application state with a recording notifier.
pub async fn test_state() -> (AppState, Arc<RecordingNotifier>) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.init().await.unwrap();

    let notifier = Arc::new(RecordingNotifier::default());
    let config = Config {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        mail: MailConfig {
            relay_url: None,
            from_address: "webmaster@localhost".to_string(),
        },
    };

    let state = AppState::assemble(Arc::new(db), notifier.clone(), config);
    (state, notifier)
}

pub async fn seed_user(state: &AppState, username: &str, email: &str) -> (Viewer, String) {
    let user = state.db.create_user(username, email).await.unwrap();
    let token = state.db.issue_session(user.id).await.unwrap();

    (
        Viewer {
            user_id: user.id,
            username: user.username,
            email: user.email,
        },
        token,
    )
}

pub async fn seed_article(
    state: &AppState,
    viewer: &Viewer,
    title: &str,
    slug: &str,
    category_id: Option<i64>,
    tags: &str,
) -> Article {
    state
        .articles
        .create(
            viewer,
            CreateArticleInput {
                title: title.to_string(),
                content: format!("Contenido de {}", title),
                slug: slug.to_string(),
                category_id,
                tags_input: tags.to_string(),
            },
        )
        .await
        .unwrap()
}
