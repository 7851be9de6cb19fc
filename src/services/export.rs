// CSV and JSON export of the full article set, in primary-key order.
// The CSV column labels are the platform's localized Spanish headers and
// must stay byte-for-byte as they are.

use std::sync::Arc;

use serde::Serialize;

use crate::{database::Database, error::AppResult, models::ExportRow};

const CSV_HEADER: &str = "Título,Autor,Categoría,Fecha,Contenido";

/// JSON export record. The `author__username` field name is part of the
/// export format.
#[derive(Debug, Serialize)]
pub struct ExportJsonRow {
    pub title: String,
    pub author__username: String,
    pub category: Option<i64>,
    pub created_at: String,
    pub content: String,
}

#[derive(Clone)]
pub struct ExportService {
    db: Arc<Database>,
}

impl ExportService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// CSV with minimal quoting and CRLF row terminators. A missing
    /// category exports as an empty cell.
    pub async fn csv(&self) -> AppResult<String> {
        let rows = self.db.export_rows().await?;

        let mut out = String::new();
        out.push_str(CSV_HEADER);
        out.push_str("\r\n");

        for row in rows {
            let fields = [
                csv_field(&row.title),
                csv_field(&row.author),
                csv_field(row.category_name.as_deref().unwrap_or("")),
                csv_field(&format_datetime(&row)),
                csv_field(&row.content),
            ];
            out.push_str(&fields.join(","));
            out.push_str("\r\n");
        }

        Ok(out)
    }

    /// JSON array with the category as its identifier (not expanded) and
    /// the datetime in its textual form.
    pub async fn json(&self) -> AppResult<String> {
        let rows = self.db.export_rows().await?;

        let records: Vec<ExportJsonRow> = rows
            .into_iter()
            .map(|row| ExportJsonRow {
                created_at: format_datetime(&row),
                title: row.title,
                author__username: row.author,
                category: row.category_id,
                content: row.content,
            })
            .collect();

        serde_json::to_string(&records)
            .map_err(|err| crate::error::AppError::Internal(err.to_string()))
    }
}

fn format_datetime(row: &ExportRow) -> String {
    row.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Minimal quoting: a field is quoted only when it contains a comma, a
/// quote or a line break; embedded quotes are doubled.
fn csv_field(field: &str) -> String {
    if field.contains(['"', ',', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
