mod common;

use articles_platform::error::AppError;
use sqlx::Row;

use common::{seed_article, seed_user, test_state};

#[tokio::test]
async fn toggling_like_twice_restores_the_count() {
    let (state, _) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "ana@example.com").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    seed_article(&state, &ana, "Gustado", "gustado", None, "").await;

    let first = state.interactions.toggle_like(&luis, "gustado").await.unwrap();
    assert!(first.liked);
    assert_eq!(first.total_likes, 1);

    let second = state.interactions.toggle_like(&luis, "gustado").await.unwrap();
    assert!(!second.liked);
    assert_eq!(second.total_likes, 0);
}

#[tokio::test]
async fn like_notification_fires_on_create_only() {
    let (state, notifier) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "ana@example.com").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    seed_article(&state, &ana, "Notificado", "notificado", None, "").await;

    state.interactions.toggle_like(&luis, "notificado").await.unwrap();
    assert_eq!(notifier.sent_emails().len(), 1);

    let email = &notifier.sent_emails()[0];
    assert_eq!(email.to, "ana@example.com");
    assert_eq!(
        email.subject,
        "Tu artículo 'Notificado' recibió un nuevo like"
    );

    // Removing the like must not notify again.
    state.interactions.toggle_like(&luis, "notificado").await.unwrap();
    assert_eq!(notifier.sent_emails().len(), 1);
}

#[tokio::test]
async fn like_notification_skipped_when_author_has_no_email() {
    let (state, notifier) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    seed_article(&state, &ana, "Sin correo", "sin-correo", None, "").await;

    let toggle = state.interactions.toggle_like(&luis, "sin-correo").await.unwrap();
    assert!(toggle.liked);
    assert!(notifier.sent_emails().is_empty());
}

#[tokio::test]
async fn like_succeeds_even_when_the_relay_is_down() {
    let (state, notifier) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "ana@example.com").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    seed_article(&state, &ana, "Resiliente", "resiliente", None, "").await;

    notifier.set_failing(true);
    let toggle = state.interactions.toggle_like(&luis, "resiliente").await.unwrap();
    assert!(toggle.liked);
    assert_eq!(toggle.total_likes, 1);
}

#[tokio::test]
async fn raw_review_path_stores_out_of_range_ratings_as_one() {
    let (state, _) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "ana@example.com").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    seed_article(&state, &ana, "Crudo", "crudo", None, "").await;

    let stored = state
        .interactions
        .submit_review_raw(&luis, "crudo", Some(7), Some("demasiado"))
        .await
        .unwrap();
    assert_eq!(stored.rating, 1);

    // A missing rating defaults to 0, which is also out of range.
    let stored = state
        .interactions
        .submit_review_raw(&luis, "crudo", None, None)
        .await
        .unwrap();
    assert_eq!(stored.rating, 1);
}

#[tokio::test]
async fn form_review_path_rejects_out_of_range_ratings() {
    let (state, _) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "ana@example.com").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    seed_article(&state, &ana, "Estricto", "estricto", None, "").await;

    let err = state
        .interactions
        .submit_review_form(&luis, "estricto", 7, "demasiado")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let row = sqlx::query("SELECT COUNT(*) FROM reviews")
        .fetch_one(&state.db.pool)
        .await
        .unwrap();
    assert_eq!(row.get::<i64, _>(0), 0);
}

#[tokio::test]
async fn second_review_from_the_same_pair_updates_in_place() {
    let (state, _) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "ana@example.com").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    let article = seed_article(&state, &ana, "Revisado", "revisado", None, "").await;

    let first = state
        .interactions
        .submit_review_form(&luis, "revisado", 3, "regular")
        .await
        .unwrap();
    let second = state
        .interactions
        .submit_review_form(&luis, "revisado", 5, "mucho mejor")
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.rating, 5);
    assert_eq!(second.comment, "mucho mejor");

    let row = sqlx::query("SELECT COUNT(*) FROM reviews WHERE article_id = ? AND reviewer_id = ?")
        .bind(article.id)
        .bind(luis.user_id)
        .fetch_one(&state.db.pool)
        .await
        .unwrap();
    assert_eq!(row.get::<i64, _>(0), 1);
}

#[tokio::test]
async fn both_review_paths_converge_on_the_same_row() {
    let (state, _) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "ana@example.com").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    let article = seed_article(&state, &ana, "Convergente", "convergente", None, "").await;

    state
        .interactions
        .submit_review_form(&luis, "convergente", 4, "bien")
        .await
        .unwrap();
    let raw = state
        .interactions
        .submit_review_raw(&luis, "convergente", Some(2), Some("cambié de idea"))
        .await
        .unwrap();

    assert_eq!(raw.rating, 2);

    let row = sqlx::query("SELECT COUNT(*) FROM reviews WHERE article_id = ?")
        .bind(article.id)
        .fetch_one(&state.db.pool)
        .await
        .unwrap();
    assert_eq!(row.get::<i64, _>(0), 1);
}

#[tokio::test]
async fn average_rating_aggregates_all_reviews() {
    let (state, _) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "ana@example.com").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;
    let (eva, _) = seed_user(&state, "eva", "eva@example.com").await;

    let article = seed_article(&state, &ana, "Promedio", "promedio", None, "").await;

    assert_eq!(state.db.average_rating(article.id).await.unwrap(), None);

    state
        .interactions
        .submit_review_form(&luis, "promedio", 2, "")
        .await
        .unwrap();
    state
        .interactions
        .submit_review_form(&eva, "promedio", 5, "")
        .await
        .unwrap();

    assert_eq!(state.db.average_rating(article.id).await.unwrap(), Some(3.5));
}

#[tokio::test]
async fn comments_notify_the_author_even_without_an_email() {
    let (state, notifier) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    seed_article(&state, &ana, "Comentado", "comentado", None, "").await;

    let comment = state
        .interactions
        .post_comment(&luis, "comentado", "Muy interesante")
        .await
        .unwrap();

    assert_eq!(comment.user, "luis");
    assert!(comment.active);

    let sent = notifier.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Nuevo comentario en 'Comentado'");
    assert!(sent[0].body.contains("luis ha comentado tu artículo"));
    assert!(sent[0].body.contains("Muy interesante"));
}

#[tokio::test]
async fn empty_comment_content_is_rejected() {
    let (state, _) = test_state().await;
    let (ana, _) = seed_user(&state, "ana", "ana@example.com").await;
    let (luis, _) = seed_user(&state, "luis", "luis@example.com").await;

    seed_article(&state, &ana, "Silencio", "silencio", None, "").await;

    let err = state
        .interactions
        .post_comment(&luis, "silencio", "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}
