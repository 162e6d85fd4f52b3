use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Field name -> list of messages, serialized into 422 bodies.
#[derive(Debug, Default, Serialize)]
pub struct FieldErrors(pub BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().copied().collect();
        write!(f, "{}", fields.join(", "))
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("conflict: {0}")]
    Conflict(String),

    // bearer credential failures, bodies match what clients key on
    #[error("token expired")]
    TokenExpired,
    #[error("token invalid")]
    TokenInvalid,
    #[error("token absent")]
    TokenAbsent,
    #[error("token subject no longer exists")]
    SubjectNotFound,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        match &e {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(e),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    error: &'static str,
    message: &'a str,
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    status: &'static str,
    message: &'static str,
    errors: &'a FieldErrors,
}

/// Bearer failures keep the single-field shape the middleware has always
/// produced; clients match on the exact message.
#[derive(Serialize)]
struct TokenErrorBody {
    error: &'static str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Conflict(_) => "CONFLICT",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::TokenInvalid => "TOKEN_INVALID",
            Self::TokenAbsent => "TOKEN_ABSENT",
            Self::SubjectNotFound => "NOT_FOUND",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized | Self::TokenExpired | Self::TokenInvalid | Self::TokenAbsent => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound | Self::SubjectNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            Self::Validation(errors) => HttpResponse::build(status).json(ValidationBody {
                status: "error",
                message: "The given data was invalid.",
                errors,
            }),
            Self::TokenExpired => {
                HttpResponse::build(status).json(TokenErrorBody { error: "Token expired" })
            }
            Self::TokenInvalid => {
                HttpResponse::build(status).json(TokenErrorBody { error: "Token invalid" })
            }
            Self::TokenAbsent => {
                HttpResponse::build(status).json(TokenErrorBody { error: "Token absent" })
            }
            Self::SubjectNotFound => {
                HttpResponse::build(status).json(TokenErrorBody { error: "User not found" })
            }
            Self::Unauthorized => HttpResponse::build(status).json(ErrorBody {
                status: "error",
                error: self.kind(),
                message: "Invalid credentials",
            }),
            Self::NotFound => HttpResponse::build(status).json(ErrorBody {
                status: "error",
                error: self.kind(),
                message: "User not found",
            }),
            Self::Forbidden(reason) => HttpResponse::build(status).json(ErrorBody {
                status: "error",
                error: self.kind(),
                message: reason,
            }),
            Self::Conflict(message) => HttpResponse::build(status).json(ErrorBody {
                status: "error",
                error: self.kind(),
                message,
            }),
            // never leak internals
            Self::Db(_) | Self::Internal(_) => HttpResponse::build(status).json(ErrorBody {
                status: "error",
                error: self.kind(),
                message: "Something went wrong",
            }),
        }
    }
}
