// Sample data for exercising the API: two users with live sessions,
// the three classic categories, and a few tagged articles.

use serde_json::{json, Value};
use tracing::info;

use crate::{
    app_state::AppState,
    auth::Viewer,
    error::AppResult,
    services::articles::CreateArticleInput,
};

pub async fn seed(state: &AppState) -> AppResult<Value> {
    info!("Seeding sample data...");

    let ana = state.db.create_user("ana", "ana@example.com").await?;
    let luis = state.db.create_user("luis", "luis@example.com").await?;

    let ana_token = state.db.issue_session(ana.id).await?;
    let luis_token = state.db.issue_session(luis.id).await?;

    let tecnologia = state.db.create_category("Tecnología", "tecnologia").await?;
    let salud = state.db.create_category("Salud", "salud").await?;
    state.db.create_category("Educación", "educacion").await?;

    let ana_viewer = Viewer {
        user_id: ana.id,
        username: ana.username.clone(),
        email: ana.email.clone(),
    };
    let luis_viewer = Viewer {
        user_id: luis.id,
        username: luis.username.clone(),
        email: luis.email.clone(),
    };

    state
        .articles
        .create(
            &ana_viewer,
            CreateArticleInput {
                title: "Introducción a Rust".to_string(),
                content: "Un recorrido por el lenguaje y su ecosistema.".to_string(),
                slug: "introduccion-a-rust".to_string(),
                category_id: Some(tecnologia.id),
                tags_input: "rust, backend".to_string(),
            },
        )
        .await?;

    state
        .articles
        .create(
            &ana_viewer,
            CreateArticleInput {
                title: "Modelos de IA en producción".to_string(),
                content: "Qué mirar antes de desplegar un modelo.".to_string(),
                slug: "modelos-de-ia-en-produccion".to_string(),
                category_id: Some(tecnologia.id),
                tags_input: "python, IA".to_string(),
            },
        )
        .await?;

    state
        .articles
        .create(
            &luis_viewer,
            CreateArticleInput {
                title: "Rutinas de entrenamiento".to_string(),
                content: "Tres rutinas sencillas para empezar la semana.".to_string(),
                slug: "rutinas-de-entrenamiento".to_string(),
                category_id: Some(salud.id),
                tags_input: "fitness".to_string(),
            },
        )
        .await?;

    Ok(json!({
        "users": 2,
        "categories": 3,
        "articles": 3,
        "sessions": {
            "ana": ana_token,
            "luis": luis_token,
        }
    }))
}
