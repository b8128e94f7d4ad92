use crate::utils::validate::FieldErrors;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("forbidden")]
    Forbidden,
    #[error("not found: {0}")]
    NotFound(String),

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::RecordNotFound(message) => AppError::NotFound(message),
            other => AppError::Db(other),
        }
    }
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ErrorsBody<'a> {
    errors: &'a FieldErrors,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(errors) => {
                HttpResponse::build(self.status_code()).json(ErrorsBody { errors })
            }
            Self::Unauthorized(message) | Self::NotFound(message) => {
                HttpResponse::build(self.status_code()).json(MessageBody { message })
            }
            Self::Forbidden => {
                HttpResponse::build(self.status_code()).json(MessageBody {
                    message: "Forbidden",
                })
            }
            // The cause goes to the log for operators; the client only
            // ever sees a generic body.
            Self::Db(err) => {
                error!("database error: {err}");
                HttpResponse::build(self.status_code()).json(MessageBody {
                    message: "Internal Server Error",
                })
            }
            Self::Internal(cause) => {
                error!("internal error: {cause}");
                HttpResponse::build(self.status_code()).json(MessageBody {
                    message: "Internal Server Error",
                })
            }
        }
    }
}
