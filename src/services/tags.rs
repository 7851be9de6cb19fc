// Tag resolution: free text in, tag associations out.

use crate::{database::Database, error::AppResult};

/// Splits a comma-separated tag field into names: trims each piece and
/// drops empties. Duplicates survive parsing; the set-like association
/// collapses them.
pub fn parse_tag_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Get-or-create each name by exact match and link it to the article.
/// Existing associations are never cleared, and linking the same tag
/// twice leaves a single association.
pub async fn resolve_and_attach(db: &Database, article_id: i64, tags_input: &str) -> AppResult<()> {
    for name in parse_tag_input(tags_input) {
        let tag = db.find_or_create_tag(&name).await?;
        db.attach_tag(article_id, tag.id).await?;
    }

    Ok(())
}
