use crate::error::Result;
use crate::models::library::{LibraryBook, LibraryIssue};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct IssueWithBook {
    #[serde(flatten)]
    pub issue: LibraryIssue,
    pub book: Option<LibraryBook>,
}

#[derive(Clone)]
pub struct LibraryService {
    pool: PgPool,
}

impl LibraryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive search over title, author and ISBN; without a query
    /// it returns the first page of the catalogue.
    pub async fn search_books(&self, query: Option<&str>) -> Result<Vec<LibraryBook>> {
        let books = match query {
            Some(q) if !q.is_empty() => {
                let pattern = format!("%{}%", q);
                sqlx::query_as::<_, LibraryBook>(
                    r#"
                    SELECT * FROM library_books
                    WHERE title ILIKE $1 OR author ILIKE $1 OR isbn ILIKE $1
                    LIMIT 50
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, LibraryBook>(r#"SELECT * FROM library_books LIMIT 50"#)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(books)
    }

    pub async fn issued_to_student(&self, student_id: Uuid) -> Result<Vec<IssueWithBook>> {
        let issues = sqlx::query_as::<_, LibraryIssue>(
            r#"SELECT * FROM library_issues WHERE student_id = $1 AND status IN ('issued', 'overdue')"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(issues.len());
        for issue in issues {
            let book = sqlx::query_as::<_, LibraryBook>(
                r#"SELECT * FROM library_books WHERE id = $1"#,
            )
            .bind(issue.book_id)
            .fetch_optional(&self.pool)
            .await?;
            out.push(IssueWithBook { issue, book });
        }
        Ok(out)
    }
}
