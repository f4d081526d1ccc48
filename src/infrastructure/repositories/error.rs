use crate::domain::errors::DomainError;

const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_ARTICLE_TITLE_CHECK: &str = "articles_title_not_blank_chk";
const CNT_COMMENT_TITLE_CHECK: &str = "comments_title_not_blank_chk";

#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_COMMENT_ARTICLE => DomainError::NotFound("article not found".into()),
                    CNT_ARTICLE_TITLE_CHECK | CNT_COMMENT_TITLE_CHECK => {
                        DomainError::Validation("title cannot be empty".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        other => DomainError::Persistence(other.to_string()),
    }
}
